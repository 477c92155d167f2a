//! Root application component and composition root.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::index::IndexPage;
use crate::state::feed::DashboardFeed;

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
/// Builds the dashboard feed and injects it into the single page route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let feed = DashboardFeed::seeded();

    view! {
        <Stylesheet id="leptos" href="/pkg/command-center.css"/>
        <Title text="DisasterAI Command Center"/>
        <Meta name="description" content="Drone fleet status and AI insights for disaster response."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=move || {
                        let feed = feed.clone();
                        view! { <IndexPage feed=feed/> }
                    }
                />
            </Routes>
        </Router>
    }
}
