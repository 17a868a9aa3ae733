//! Login page with the email/password form.

use leptos::prelude::*;

use crate::components::guard::PublicRoute;
use crate::state::session::{self, SessionState};

/// Login page — submits credentials through the session store. On success
/// the public guard redirects to the chat view; rejections stay here with an
/// error banner.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <PublicRoute>
            <div class="auth-page">
                <div class="auth-page__card">
                    <h1 class="auth-page__title">"Amigo Chad-Bot"</h1>
                    <p class="auth-page__subtitle">"Sign in to your study assistant"</p>
                    <LoginForm/>
                    <p class="auth-page__switch">
                        "No account yet? "
                        <a href="/register">"Create one"</a>
                    </p>
                </div>
            </div>
        </PublicRoute>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            return;
        }

        leptos::task::spawn_local(async move {
            if let Err(err) = session::login(session, &email_value, &password_value).await {
                // try_set: success unmounts this form via the public guard.
                let _ = error.try_set(Some(err.to_string()));
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <Show when=move || error.get().is_some()>
                <div class="auth-form__error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <label class="auth-form__label">
                "Email"
                <input
                    class="auth-form__input"
                    type="email"
                    required=true
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>

            <label class="auth-form__label">
                "Password"
                <input
                    class="auth-form__input"
                    type="password"
                    required=true
                    placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>

            <button class="btn btn--primary auth-form__submit" type="submit">
                "Sign in"
            </button>
        </form>
    }
}
