//! AI insights panel: system status block, insight cards, analytics strip.
//!
//! The status block and analytics strip show fixed tiles; only the card grid
//! depends on the supplied insight list.

use leptos::prelude::*;

use crate::components::primitives::{IconGlyph, Meter, MetricTileCell};
use crate::state::insights::{AI_STATUS_TILES, ANALYTICS_TILES, InsightRecord};
use crate::util::style::{Icon, Tone, severity_style};

/// Insight grid for the supplied records, framed by static metric tiles.
#[component]
pub fn InsightsPanel(insights: Vec<InsightRecord>) -> impl IntoView {
    view! {
        <section class="insights-panel">
            <div class="section-heading">
                <h2 class="section-heading__title">
                    <span class="tone-text--accent">"AI-Powered"</span>
                    " Intelligence Hub"
                </h2>
                <p class="section-heading__lead">
                    "Real-time machine learning insights and predictive analytics for enhanced decision-making"
                </p>
            </div>

            <div class="card ai-status">
                <div class="ai-status__identity">
                    <div class="ai-status__icon">
                        <IconGlyph icon=Icon::Brain tone=Tone::Primary/>
                    </div>
                    <div>
                        <h3 class="ai-status__title">"AI System Status"</h3>
                        <p class="tone-text--muted">"Neural networks active and processing"</p>
                    </div>
                </div>
                <div class="ai-status__tiles">
                    {AI_STATUS_TILES.into_iter().map(|tile| view! { <MetricTileCell tile=tile/> }).collect::<Vec<_>>()}
                </div>
            </div>

            <div class="insights-panel__grid">
                {insights
                    .into_iter()
                    .map(|insight| view! { <InsightCard insight=insight/> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="card analytics-strip">
                <h3 class="analytics-strip__title">
                    <IconGlyph icon=Icon::Activity tone=Tone::Accent/>
                    "Live Analytics Dashboard"
                </h3>
                <div class="analytics-strip__tiles">
                    {ANALYTICS_TILES.into_iter().map(|tile| view! { <MetricTileCell tile=tile/> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn InsightCard(insight: InsightRecord) -> impl IntoView {
    let style = severity_style(insight.severity);

    view! {
        <article class="card insight-card">
            <header class="insight-card__header">
                <div class="insight-card__identity">
                    <div class=format!("insight-card__icon tone-tint--{}", style.tone.name())>
                        <IconGlyph icon=style.icon/>
                    </div>
                    <div>
                        <h3 class="insight-card__title">{insight.title}</h3>
                        <p class="tone-text--muted">{insight.source}</p>
                    </div>
                </div>
                <span class=style.badge_class()>{insight.severity.badge_label()}</span>
            </header>

            <div class="insight-card__confidence">
                <div class="insight-card__confidence-label">
                    <span class="tone-text--muted">"AI Confidence"</span>
                    <span>{format!("{}%", insight.confidence)}</span>
                </div>
                <Meter percent=insight.confidence tone=Tone::Primary/>
            </div>

            <p class="insight-card__description">{insight.description}</p>

            <div class="insight-card__recommendations">
                <h4>
                    <IconGlyph icon=Icon::Target tone=Tone::Primary/>
                    "Recommended Actions"
                </h4>
                <ul>
                    {insight
                        .recommendations
                        .into_iter()
                        .map(|rec| view! { <li class="insight-card__bullet">{rec}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>

            // Both actions are placeholders until command dispatch exists.
            <div class="insight-card__actions">
                <button class="btn btn--command" type="button">
                    <IconGlyph icon=Icon::Zap/>
                    "Implement"
                </button>
                <button class="btn btn--outline" type="button">
                    <IconGlyph icon=Icon::Eye/>
                    "Details"
                </button>
            </div>

            <div class="insight-card__timestamp">{format!("Generated {}", insight.timestamp)}</div>
        </article>
    }
}
