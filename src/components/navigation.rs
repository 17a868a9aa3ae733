//! Top navigation bar: brand, section links, identity, and session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::guide::GuideState;
use crate::state::session::{self, SessionState};
use crate::util::theme;

#[component]
pub fn Navigation() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let guide = expect_context::<RwSignal<GuideState>>();
    let navigate = use_navigate();

    let dark = RwSignal::new(false);
    Effect::new(move || {
        dark.set(theme::init());
    });

    let on_logout = move |_| {
        session::logout(session);
        navigate("/login", NavigateOptions::default());
    };

    let on_toggle_history = move |_| {
        guide.update(|g| g.history_open = !g.history_open);
    };

    let on_toggle_theme = move |_| {
        dark.update(|d| *d = theme::toggle(*d));
    };

    let identity = move || {
        session.get().user.map(|u| {
            view! {
                <span class="nav__identity">
                    <span class="nav__name">{u.display_name()}</span>
                    <span class="nav__email">{u.email}</span>
                </span>
            }
        })
    };

    view! {
        <nav class="nav">
            <a class="nav__brand" href="/">
                "Amigo Chad-Bot"
            </a>

            <div class="nav__actions">
                <button class="nav__button" title="Guide history" on:click=on_toggle_history>
                    "History"
                </button>
                <a class="nav__link" href="/documents">
                    "Documents"
                </a>
                <a class="nav__link" href="/profile">
                    "Profile"
                </a>

                {identity}

                <button
                    class="nav__button"
                    title="Toggle dark mode"
                    on:click=on_toggle_theme
                >
                    {move || if dark.get() { "\u{2600}\u{FE0F}" } else { "\u{1F319}" }}
                </button>
                <button class="nav__button nav__button--logout" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
