//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    chat::ChatPage, documents::DocumentsPage, login::LoginPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::{
    chat::ChatState, documents::DocumentsState, guide::GuideState, session::SessionState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, kicks off the one-shot session
/// restore on the client, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let chat = RwSignal::new(ChatState::default());
    let guide = RwSignal::new(GuideState::default());
    let documents = RwSignal::new(DocumentsState::default());

    provide_context(session);
    provide_context(chat);
    provide_context(guide);
    provide_context(documents);

    // Restore a persisted session before any guard decides to redirect.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(crate::state::session::restore(session));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/chadbot-client.css"/>
        <Title text="Amigo Chad-Bot"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("documents") view=DocumentsPage/>
            </Routes>
        </Router>
    }
}
