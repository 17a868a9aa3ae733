//! Slide-in drawer listing previously generated guides.

use leptos::prelude::*;

use crate::state::guide::GuideState;

#[component]
pub fn GuideHistory() -> impl IntoView {
    let guide = expect_context::<RwSignal<GuideState>>();

    let on_close = move |_| {
        guide.update(|g| g.history_open = false);
    };

    view! {
        <Show when=move || guide.get().history_open>
            <aside class="guide-history">
                <header class="guide-history__header">
                    <h2>"Guide History"</h2>
                    <button class="nav__button" title="Close" on:click=on_close>
                        "\u{2715}"
                    </button>
                </header>

                <div class="guide-history__list">
                    {move || {
                        guide
                            .get()
                            .history
                            .iter()
                            .map(|entry| {
                                let title = entry.title.clone();
                                let meta = format!("{} - {}", entry.date, entry.kind);
                                view! {
                                    <div class="guide-history__entry">
                                        <h3 class="guide-history__entry-title">{title}</h3>
                                        <p class="guide-history__entry-meta">{meta}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </aside>
        </Show>
    }
}
