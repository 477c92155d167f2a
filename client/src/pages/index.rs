//! The single dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fixed composition: navigation, then hero, fleet board and insights inside
//! `<main>`. Record lists arrive through the injected [`DashboardFeed`].

#[cfg(all(test, feature = "ssr"))]
#[path = "index_test.rs"]
mod index_test;

use leptos::prelude::*;

use crate::components::fleet_status_board::FleetStatusBoard;
use crate::components::hero_section::HeroSection;
use crate::components::insights_panel::InsightsPanel;
use crate::components::navigation_bar::NavigationBar;
use crate::state::feed::DashboardFeed;

/// Dashboard page rendering the supplied feed.
#[component]
pub fn IndexPage(feed: DashboardFeed) -> impl IntoView {
    let DashboardFeed { drones, insights } = feed;

    view! {
        <div class="page">
            <NavigationBar/>
            <main>
                <div id="dashboard">
                    <HeroSection/>
                </div>
                <div id="fleet">
                    <FleetStatusBoard drones=drones/>
                </div>
                <div id="insights">
                    <InsightsPanel insights=insights/>
                </div>
            </main>
        </div>
    }
}
