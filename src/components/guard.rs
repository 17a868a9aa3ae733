//! Render-time route guards.
//!
//! Both guards are pure reactions to the session store: they render or
//! redirect based on `is_authenticated` and keep no state of their own.
//! Neither redirects while the startup restore is still loading, so a
//! persisted session is not bounced to `/login` mid-restore.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Renders its children only for an authenticated session; anonymous
/// visitors are sent to `/login`.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || session.get().is_authenticated()>
            {children()}
        </Show>
    }
}

/// The inverse guard for login/registration views: an already-authenticated
/// session is sent to the main chat view.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.get().is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || !session.get().is_authenticated()>
            {children()}
        </Show>
    }
}
