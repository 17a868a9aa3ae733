//! Chat panel: local message history and an input row.
//!
//! Messages are appended to [`ChatState`] only; the panel does not call a
//! backend endpoint.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::session::SessionState;

#[component]
pub fn ChatPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }
        chat.update(|c| c.push_user_message(&text, now_ms()));
        input.set(String::new());
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let placeholder = move || {
        let name = session
            .get()
            .user
            .map(|u| u.display_name())
            .unwrap_or_else(|| "you".to_owned());
        format!("Message as {name}...")
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">
                                "Ask anything about your study material"
                            </div>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|msg| {
                            let side = if msg.from_user {
                                "chat-panel__message chat-panel__message--user"
                            } else {
                                "chat-panel__message chat-panel__message--bot"
                            };
                            let content = msg.content.clone();
                            view! {
                                <div class=side>
                                    <p class="chat-panel__text">{content}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
