//! Study-guide configuration side panel.

use leptos::prelude::*;

use crate::state::guide::{GuideFormat, GuideLanguage, GuideLevel, GuideState};

#[component]
pub fn GuideConfig() -> impl IntoView {
    let guide = expect_context::<RwSignal<GuideState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let config = guide.get_untracked().config;
        // Guide generation is not wired to the backend yet; record the choice.
        leptos::logging::log!(
            "guide config: topic={:?} level={} format={} language={}",
            config.topic,
            config.level.value(),
            config.format.value(),
            config.language.value()
        );
    };

    view! {
        <form class="guide-config" on:submit=on_submit>
            <h2 class="guide-config__title">"Guide Setup"</h2>

            <label class="guide-config__label">
                "Study topic"
                <input
                    class="guide-config__input"
                    type="text"
                    placeholder="e.g. Linear Algebra"
                    prop:value=move || guide.get().config.topic
                    on:input=move |ev| {
                        guide.update(|g| g.config.topic = event_target_value(&ev));
                    }
                />
            </label>

            <label class="guide-config__label">
                "Level"
                <select
                    class="guide-config__select"
                    on:change=move |ev| {
                        guide
                            .update(|g| {
                                g.config.level = GuideLevel::from_value(&event_target_value(&ev));
                            });
                    }
                >
                    {GuideLevel::ALL
                        .into_iter()
                        .map(|level| {
                            view! {
                                <option
                                    value=level.value()
                                    selected=move || guide.get().config.level == level
                                >
                                    {level.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label class="guide-config__label">
                "Format"
                <select
                    class="guide-config__select"
                    on:change=move |ev| {
                        guide
                            .update(|g| {
                                g.config.format = GuideFormat::from_value(&event_target_value(&ev));
                            });
                    }
                >
                    {GuideFormat::ALL
                        .into_iter()
                        .map(|format| {
                            view! {
                                <option
                                    value=format.value()
                                    selected=move || guide.get().config.format == format
                                >
                                    {format.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label class="guide-config__label">
                "Language"
                <select
                    class="guide-config__select"
                    on:change=move |ev| {
                        guide
                            .update(|g| {
                                g.config.language = GuideLanguage::from_value(
                                    &event_target_value(&ev),
                                );
                            });
                    }
                >
                    {GuideLanguage::ALL
                        .into_iter()
                        .map(|language| {
                            view! {
                                <option
                                    value=language.value()
                                    selected=move || guide.get().config.language == language
                                >
                                    {language.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <button class="btn btn--primary guide-config__submit" type="submit">
                "Generate Guide"
            </button>
        </form>
    }
}
