//! Main application view: chat panel with the guide configuration sidebar.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::guard::PrivateRoute;
use crate::components::guide_config::GuideConfig;
use crate::components::guide_history::GuideHistory;
use crate::components::navigation::Navigation;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <PrivateRoute>
            <div class="chat-page">
                <Navigation/>
                <GuideHistory/>

                <main class="chat-page__main">
                    <section class="chat-page__chat">
                        <ChatPanel/>
                    </section>
                    <aside class="chat-page__sidebar">
                        <GuideConfig/>
                    </aside>
                </main>
            </div>
        </PrivateRoute>
    }
}
