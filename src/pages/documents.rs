//! Document management page: upload form plus the caller's document list.

use leptos::prelude::*;

use crate::components::guard::PrivateRoute;
use crate::components::navigation::Navigation;
use crate::state::documents::DocumentsState;
use crate::state::session::SessionState;
use crate::util::format;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    view! {
        <PrivateRoute>
            <div class="documents-page">
                <Navigation/>
                <main class="documents-page__main">
                    <h1>"Your Documents"</h1>
                    <UploadForm/>
                    <DocumentList/>
                </main>
            </div>
        </PrivateRoute>
    }
}

/// Fetch the document list into shared state.
#[cfg(feature = "hydrate")]
async fn load(session: RwSignal<SessionState>, docs: RwSignal<DocumentsState>) {
    match crate::net::api::fetch_documents(session).await {
        Ok(items) => docs.update(|d| d.apply_loaded(items)),
        Err(err) => docs.update(|d| d.apply_error(err.to_string())),
    }
}

#[component]
fn UploadForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let docs = expect_context::<RwSignal<DocumentsState>>();

    let file_input = NodeRef::<leptos::html::Input>::new();
    let description = RwSignal::new(String::new());
    let is_public = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input.get_untracked() else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                docs.update(|d| d.apply_error("Choose a file first"));
                return;
            };

            docs.update(|d| {
                d.uploading = true;
                d.error = None;
            });

            let description_value = description.get_untracked();
            let public = is_public.get_untracked();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::upload_document(
                    session,
                    &file,
                    &description_value,
                    public,
                )
                .await;
                match result {
                    Ok(()) => {
                        input.set_value("");
                        let _ = description.try_set(String::new());
                        let _ = is_public.try_set(false);
                        docs.update(|d| d.uploading = false);
                        load(session, docs).await;
                    }
                    Err(err) => docs.update(|d| d.apply_error(err.to_string())),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, docs, file_input, description, is_public);
        }
    };

    view! {
        <form class="upload-form" on:submit=on_submit>
            <label class="upload-form__label">
                "File"
                <input class="upload-form__file" type="file" required=true node_ref=file_input/>
            </label>

            <label class="upload-form__label">
                "Description"
                <textarea
                    class="upload-form__textarea"
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <label class="upload-form__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || is_public.get()
                    on:change=move |ev| is_public.set(event_target_checked(&ev))
                />
                "Public document"
            </label>

            <button
                class="btn btn--primary"
                type="submit"
                disabled=move || docs.get().uploading
            >
                {move || if docs.get().uploading { "Uploading..." } else { "Upload" }}
            </button>
        </form>
    }
}

#[component]
fn DocumentList() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let docs = expect_context::<RwSignal<DocumentsState>>();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(load(session, docs));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }

    view! {
        <div class="document-list">
            <Show when=move || docs.get().error.is_some()>
                <div class="document-list__error">
                    {move || docs.get().error.unwrap_or_default()}
                </div>
            </Show>

            {move || {
                let state = docs.get();
                if state.loading {
                    return view! { <p class="document-list__empty">"Loading documents..."</p> }
                        .into_any();
                }
                if state.items.is_empty() {
                    return view! { <p class="document-list__empty">"No documents yet"</p> }
                        .into_any();
                }

                state
                    .items
                    .iter()
                    .map(|doc| {
                        let (icon, label) = format::file_type_info(&doc.file_type);
                        let meta = format!(
                            "{label} \u{2022} {} \u{2022} {}",
                            format::file_size(doc.file_size),
                            doc.upload_date
                        );
                        let name = doc.original_filename.clone();
                        let description = doc.description.clone();
                        let id = doc.id;
                        let download_name = doc.original_filename.clone();

                        let on_download = move |_| {
                            #[cfg(feature = "hydrate")]
                            {
                                let filename = download_name.clone();
                                leptos::task::spawn_local(async move {
                                    let result = crate::net::api::download_document(
                                        session, id, &filename,
                                    )
                                    .await;
                                    if let Err(err) = result {
                                        docs.update(|d| d.apply_error(err.to_string()));
                                    }
                                });
                            }
                            #[cfg(not(feature = "hydrate"))]
                            {
                                let _ = (&download_name, id);
                            }
                        };

                        let on_delete = move |_| {
                            #[cfg(feature = "hydrate")]
                            {
                                let confirmed = web_sys::window()
                                    .and_then(|w| {
                                        w.confirm_with_message("Delete this document?").ok()
                                    })
                                    .unwrap_or(false);
                                if !confirmed {
                                    return;
                                }
                                leptos::task::spawn_local(async move {
                                    match crate::net::api::delete_document(session, id).await {
                                        Ok(()) => docs.update(|d| d.remove(id)),
                                        Err(err) => {
                                            docs.update(|d| d.apply_error(err.to_string()));
                                        }
                                    }
                                });
                            }
                            #[cfg(not(feature = "hydrate"))]
                            {
                                let _ = id;
                            }
                        };

                        view! {
                            <div class="document-list__item">
                                <span class="document-list__icon">{icon}</span>
                                <div class="document-list__info">
                                    <h3 class="document-list__name">{name}</h3>
                                    <p class="document-list__description">{description}</p>
                                    <p class="document-list__meta">{meta}</p>
                                </div>
                                <div class="document-list__actions">
                                    <button class="nav__button" on:click=on_download>
                                        "Download"
                                    </button>
                                    <button
                                        class="nav__button nav__button--danger"
                                        on:click=on_delete
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
