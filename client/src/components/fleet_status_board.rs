//! Fleet status board: one card per drone plus the fleet overview strip.
//!
//! SYSTEM CONTEXT
//! ==============
//! Receives its drone list from the index page. The overview numbers are
//! derived from that same list, so an empty fleet renders an empty grid and
//! an all-zero summary.

use leptos::prelude::*;

use crate::components::primitives::{IconGlyph, Meter};
use crate::state::fleet::{DroneRecord, DroneStatus, FleetSummary, drone_action_label};
use crate::util::style::{Icon, Tone, battery_text_tone, battery_tone, status_style};

/// Fleet grid and summary for the supplied drones, in list order.
#[component]
pub fn FleetStatusBoard(drones: Vec<DroneRecord>) -> impl IntoView {
    let summary = FleetSummary::from_records(&drones);

    view! {
        <section class="fleet-board">
            <div class="section-heading">
                <h2 class="section-heading__title">
                    <span class="tone-text--primary">"Live Drone"</span>
                    " Fleet Status"
                </h2>
                <p class="section-heading__lead">
                    "Real-time monitoring and control of autonomous drone fleet with AI-powered status analysis"
                </p>
            </div>

            <div class="fleet-board__grid">
                {drones
                    .into_iter()
                    .map(|drone| view! { <DroneCard drone=drone/> })
                    .collect::<Vec<_>>()}
            </div>

            <FleetOverview summary=summary/>
        </section>
    }
}

/// Single drone card.
#[component]
fn DroneCard(drone: DroneRecord) -> impl IntoView {
    let style = status_style(drone.status);
    let battery_text_class = battery_text_tone(drone.battery).map(Tone::text_class).unwrap_or_default();
    let is_emergency = drone.status == DroneStatus::Emergency;
    let is_routine = !is_emergency;

    view! {
        <article class="card drone-card" class:drone-card--emergency=is_emergency>
            <header class="drone-card__header">
                <h3 class="drone-card__name">
                    <IconGlyph icon=Icon::Plane tone=Tone::Primary/>
                    {drone.name}
                </h3>
                <span class=style.badge_class()>
                    <IconGlyph icon=style.icon/>
                    {drone.status.label()}
                </span>
            </header>
            <p class="drone-card__id">{drone.id}</p>

            <div class="drone-card__body">
                <div class="drone-card__gauge">
                    <IconGlyph icon=Icon::Battery tone=Tone::Muted/>
                    <div class="drone-card__gauge-track">
                        <div class="drone-card__gauge-label">
                            <span>"Battery"</span>
                            <span class=battery_text_class>{format!("{}%", drone.battery)}</span>
                        </div>
                        <Meter percent=drone.battery tone=battery_tone(drone.battery)/>
                    </div>
                </div>

                <div class="drone-card__gauge">
                    <IconGlyph icon=Icon::Signal tone=Tone::Muted/>
                    <div class="drone-card__gauge-track">
                        <div class="drone-card__gauge-label">
                            <span>"Signal"</span>
                            <span>{format!("{}%", drone.signal)}</span>
                        </div>
                        <Meter percent=drone.signal tone=Tone::Primary/>
                    </div>
                </div>

                <div class="drone-card__row">
                    <IconGlyph icon=Icon::MapPin tone=Tone::Muted/>
                    <span class="tone-text--muted">"Location:"</span>
                    <span class="drone-card__value">{drone.location}</span>
                </div>

                <div class="drone-card__row">
                    <span class="tone-text--muted">"Mission:"</span>
                    <span class="drone-card__value">{drone.mission}</span>
                </div>

                <div class="drone-card__updated">{format!("Last update: {}", drone.last_update)}</div>

                <button
                    class="btn btn--full"
                    class:btn--emergency=is_emergency
                    class:btn--outline=is_routine
                    type="button"
                >
                    {drone_action_label(drone.status)}
                </button>
            </div>
        </article>
    }
}

/// Aggregate strip under the card grid.
#[component]
fn FleetOverview(summary: FleetSummary) -> impl IntoView {
    view! {
        <div class="card fleet-overview">
            <h3 class="fleet-overview__title">
                <IconGlyph icon=Icon::Plane tone=Tone::Primary/>
                "Fleet Overview"
            </h3>
            <div class="fleet-overview__stats">
                <OverviewStat value=summary.active.to_string() label="Active Missions" tone=Tone::Affirmative/>
                <OverviewStat value=summary.emergency.to_string() label="Emergency Response" tone=Tone::Alert/>
                <OverviewStat value=summary.standby.to_string() label="On Standby" tone=Tone::Neutral/>
                <OverviewStat
                    value=format!("{}%", summary.average_battery)
                    label="Avg Battery"
                    tone=Tone::Primary
                />
            </div>
        </div>
    }
}

#[component]
fn OverviewStat(value: String, label: &'static str, tone: Tone) -> impl IntoView {
    view! {
        <div class="fleet-overview__stat">
            <div class=format!("fleet-overview__value {}", tone.text_class())>{value}</div>
            <div class="fleet-overview__label">{label}</div>
        </div>
    }
}
