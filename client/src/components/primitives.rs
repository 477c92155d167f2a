//! Small display building blocks: icon glyphs, linear meters, metric tiles.

use leptos::prelude::*;

use crate::state::insights::MetricTile;
use crate::util::style::{Icon, Tone, meter_width};

/// Decorative icon glyph, optionally tinted.
#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional)] tone: Option<Tone>) -> impl IntoView {
    let class = match tone {
        Some(tone) => format!("icon icon--{} {}", icon.name(), tone.text_class()),
        None => format!("icon icon--{}", icon.name()),
    };
    view! {
        <span class=class aria-hidden="true">
            {icon.glyph()}
        </span>
    }
}

/// Horizontal 0-100 meter with a tone-colored fill.
#[component]
pub fn Meter(percent: u8, tone: Tone) -> impl IntoView {
    view! {
        <div
            class="meter"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=percent.to_string()
        >
            <div class=format!("meter__fill {}", tone.fill_class()) style=meter_width(percent)></div>
        </div>
    }
}

#[component]
pub fn MetricTileCell(tile: MetricTile) -> impl IntoView {
    view! {
        <div class="metric-tile">
            <div class=format!("metric-tile__value {}", tile.tone.text_class())>{tile.value}</div>
            <div class="metric-tile__label">{tile.label}</div>
        </div>
    }
}
