//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::pages::{board::BoardPage, theme::ThemePage};
use crate::state::{board::BoardState, toast::ToastState};

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
/// Provides the shared board and toast state contexts and sets up
/// client-side routing between the theme form and the board view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Reactive state contexts shared by both pages.
    let board = RwSignal::new(BoardState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(board);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/monopoly-mapper.css"/>
        <Title text="Monopoly Mapper"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ThemePage/>
                <Route path=StaticSegment("board") view=BoardPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
