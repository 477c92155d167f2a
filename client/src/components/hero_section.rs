//! Static marketing banner at the top of the dashboard.

use leptos::prelude::*;

use crate::components::primitives::IconGlyph;
use crate::util::style::{Icon, Tone};

struct HeroFeature {
    icon: Icon,
    tone: Tone,
    title: &'static str,
    body: &'static str,
}

const HERO_FEATURES: [HeroFeature; 3] = [
    HeroFeature {
        icon: Icon::Zap,
        tone: Tone::Primary,
        title: "Real-Time AI",
        body: "Advanced machine learning for instant threat assessment and response optimization.",
    },
    HeroFeature {
        icon: Icon::Radio,
        tone: Tone::Accent,
        title: "Autonomous Fleet",
        body: "Self-coordinating drone swarms with redundant communication systems.",
    },
    HeroFeature {
        icon: Icon::Shield,
        tone: Tone::Neutral,
        title: "Crisis Management",
        body: "Unified command interface for coordinating multi-agency emergency response.",
    },
];

/// Hero banner: headline, inert call-to-action buttons and feature tiles.
#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__backdrop" aria-hidden="true">
                <div class="hero__overlay"></div>
            </div>

            <div class="hero__content">
                <span class="badge badge--neutral hero__badge">
                    <IconGlyph icon=Icon::Radio/>
                    "AI-Powered Emergency Response"
                </span>

                <h1 class="hero__headline">
                    <span class="hero__headline-gradient">"Intelligent Drone"</span>
                    <br/>
                    <span>"Disaster Management"</span>
                </h1>

                <p class="hero__lead">
                    "Revolutionizing emergency response with autonomous drones, real-time AI analytics, "
                    "and seamless coordination for faster, smarter disaster management."
                </p>

                <div class="hero__actions">
                    <button class="btn btn--command btn--lg" type="button">
                        <IconGlyph icon=Icon::Shield/>
                        "Launch Command Center"
                    </button>
                    <button class="btn btn--outline btn--lg" type="button">
                        <IconGlyph icon=Icon::Eye/>
                        "View Live Demo"
                    </button>
                </div>

                <div class="hero__features">
                    {HERO_FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="hero__feature">
                                    <div class=format!("hero__feature-icon tone-tint--{}", feature.tone.name())>
                                        <IconGlyph icon=feature.icon tone=feature.tone/>
                                    </div>
                                    <h3>{feature.title}</h3>
                                    <p class="tone-text--muted">{feature.body}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="hero__flow hero__flow--left" aria-hidden="true"></div>
            <div class="hero__flow hero__flow--right" aria-hidden="true"></div>
            <div class="hero__flow hero__flow--bottom" aria-hidden="true"></div>
        </section>
    }
}
