//! Profile editor page.

use leptos::prelude::*;

use crate::components::guard::PrivateRoute;
use crate::components::navigation::Navigation;
use crate::net::api;
use crate::net::types::ProfileUpdate;
use crate::state::session::SessionState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <PrivateRoute>
            <div class="profile-page">
                <Navigation/>
                <main class="profile-page__main">
                    <h1>"Your Profile"</h1>
                    <ProfileForm/>
                </main>
            </div>
        </PrivateRoute>
    }
}

#[component]
fn ProfileForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let status = RwSignal::new(None::<Result<String, String>>);
    let seeded = RwSignal::new(false);

    // Prefill once the session user is available.
    Effect::new(move || {
        if seeded.get_untracked() {
            return;
        }
        if let Some(user) = session.get().user {
            first_name.set(user.first_name.unwrap_or_default());
            last_name.set(user.last_name.unwrap_or_default());
            bio.set(user.bio.unwrap_or_default());
            seeded.set(true);
        }
    });

    let email = move || {
        session
            .get()
            .user
            .map(|u| u.email)
            .unwrap_or_default()
    };
    let picture = move || session.get().user.and_then(|u| u.profile_picture);

    let picture_input = NodeRef::<leptos::html::Input>::new();
    let on_picture_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = picture_input.get_untracked() else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };

            status.set(None);
            leptos::task::spawn_local(async move {
                match api::upload_profile_picture(session, &file).await {
                    Ok(path) => {
                        session.update(|s| s.apply_profile_picture(path));
                        let _ = status.try_set(Some(Ok("Profile picture updated".to_owned())));
                    }
                    Err(err) => {
                        let _ = status.try_set(Some(Err(err.to_string())));
                    }
                }
                if let Some(input) = picture_input.get_untracked() {
                    input.set_value("");
                }
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        status.set(None);

        let update = ProfileUpdate {
            first_name: Some(first_name.get_untracked()),
            last_name: Some(last_name.get_untracked()),
            bio: Some(bio.get_untracked()),
        };

        leptos::task::spawn_local(async move {
            match api::update_profile(session, &update).await {
                Ok(user) => {
                    session.update(|s| s.user = Some(user));
                    let _ = status.try_set(Some(Ok("Profile saved".to_owned())));
                }
                Err(err) => {
                    let _ = status.try_set(Some(Err(err.to_string())));
                }
            }
        });
    };

    view! {
        <form class="profile-form" on:submit=on_submit>
            {move || {
                status
                    .get()
                    .map(|outcome| match outcome {
                        Ok(msg) => view! { <div class="profile-form__ok">{msg}</div> }.into_any(),
                        Err(msg) => {
                            view! { <div class="profile-form__error">{msg}</div> }.into_any()
                        }
                    })
            }}

            <div class="profile-form__picture">
                {move || {
                    picture()
                        .map(|src| {
                            view! {
                                <img class="profile-form__avatar" src=src alt="Profile picture"/>
                            }
                        })
                }}
                <label class="profile-form__label">
                    "Profile picture"
                    <input
                        class="profile-form__file"
                        type="file"
                        accept="image/*"
                        node_ref=picture_input
                        on:change=on_picture_change
                    />
                </label>
            </div>

            <label class="profile-form__label">
                "Email"
                <input class="profile-form__input" type="email" disabled=true prop:value=email/>
            </label>

            <div class="profile-form__row">
                <label class="profile-form__label">
                    "First name"
                    <input
                        class="profile-form__input"
                        type="text"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__label">
                    "Last name"
                    <input
                        class="profile-form__input"
                        type="text"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <label class="profile-form__label">
                "Bio"
                <textarea
                    class="profile-form__textarea"
                    rows="4"
                    prop:value=move || bio.get()
                    on:input=move |ev| bio.set(event_target_value(&ev))
                >
                    {bio.get_untracked()}
                </textarea>
            </label>

            <button class="btn btn--primary" type="submit">
                "Save changes"
            </button>
        </form>
    }
}
