//! Registration page. A successful registration yields an authenticated
//! session immediately, same as login.

use leptos::prelude::*;

use crate::components::guard::PublicRoute;
use crate::net::types::RegisterData;
use crate::state::session::{self, SessionState};

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <PublicRoute>
            <div class="auth-page">
                <div class="auth-page__card">
                    <h1 class="auth-page__title">"Create your account"</h1>
                    <RegisterForm/>
                    <p class="auth-page__switch">
                        "Already registered? "
                        <a href="/login">"Sign in"</a>
                    </p>
                </div>
            </div>
        </PublicRoute>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let data = RegisterData {
            email: email.get_untracked(),
            password: password.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
        };
        if data.email.is_empty() || data.password.is_empty() {
            return;
        }

        leptos::task::spawn_local(async move {
            if let Err(err) = session::register(session, data).await {
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

            <div class="auth-form__row">
                <label class="auth-form__label">
                    "First name"
                    <input
                        class="auth-form__input"
                        type="text"
                        required=true
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Last name"
                    <input
                        class="auth-form__input"
                        type="text"
                        required=true
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </label>
            </div>

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
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>

            <button class="btn btn--primary auth-form__submit" type="submit">
                "Register"
            </button>
        </form>
    }
}
