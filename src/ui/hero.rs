//! Landing screen

use crate::app::AppState;
use dioxus::prelude::*;

const STATS: [(&str, &str); 3] = [("50+", "Attractions"), ("100+", "Restaurants"), ("24/7", "AI Support")];

#[component]
pub fn HeroSection() -> Element {
    let app_state = use_context::<AppState>();
    let mut flow = app_state.flow;

    rsx! {
        section {
            style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; text-align: center; background: linear-gradient(160deg, #7c2d12, #0e7490); color: white;",

            div {
                style: "max-width: 720px; padding: 24px;",

                div { style: "font-size: 56px;", "📍" }
                h1 {
                    style: "font-size: 64px; margin: 12px 0;",
                    "Discover"
                    span { style: "display: block; color: #fdba74;", "Udupi" }
                }
                p {
                    style: "font-size: 20px; opacity: 0.9; line-height: 1.6;",
                    "Your AI-powered travel companion for exploring the cultural gems, pristine beaches, and divine flavors of Udupi"
                }

                div {
                    style: "display: flex; gap: 16px; justify-content: center; margin: 32px 0 48px;",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| flow.write().get_started(),
                        "✨ Plan My Trip"
                    }
                    button {
                        class: "btn",
                        style: "background: rgba(255,255,255,0.1); color: white; border: 1px solid rgba(255,255,255,0.3);",
                        onclick: move |_| app_state.open_chat(),
                        "💬 Ask AI Guide"
                    }
                }

                div {
                    class: "grid",
                    style: "grid-template-columns: repeat(3, 1fr); max-width: 480px; margin: 0 auto;",
                    for (value, label) in STATS {
                        div {
                            div { style: "font-size: 24px; font-weight: bold;", "{value}" }
                            div { style: "font-size: 14px; opacity: 0.8;", "{label}" }
                        }
                    }
                }
            }
        }
    }
}
