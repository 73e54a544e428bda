//! UI components for Udupi Guide
//!
//! This module contains all user interface components built with Dioxus.

#![allow(non_snake_case)]

pub mod chat;
pub mod hero;
pub mod plan;
pub mod preferences;

use crate::app::{AppState, View};
use crate::storage::settings::save_settings;
use chat::ChatWindow;
use dioxus::prelude::*;
use hero::HeroSection;
use plan::TravelPlan;
use preferences::PreferenceSelector;

const STYLE: &str = r#"
:root { --primary: #c2410c; --primary-soft: #fed7aa; --accent: #0e7490; --bg: #fffaf5; --fg: #1c1917; --muted: #78716c; --card: #ffffff; --border: #e7e5e4; }
.dark { --bg: #1c1917; --fg: #f5f5f4; --muted: #a8a29e; --card: #292524; --border: #44403c; }
body { margin: 0; font-family: system-ui, sans-serif; }
.app { min-height: 100vh; background: var(--bg); color: var(--fg); }
.card { background: var(--card); border: 1px solid var(--border); border-radius: 14px; padding: 20px; }
.btn { border: none; border-radius: 999px; padding: 12px 28px; font-size: 16px; cursor: pointer; }
.btn-primary { background: var(--primary); color: white; }
.btn-primary:disabled { opacity: 0.4; cursor: not-allowed; }
.btn-outline { background: transparent; border: 1px solid var(--primary); color: var(--primary); }
.muted { color: var(--muted); }
.grid { display: grid; gap: 16px; }
.badge { display: inline-block; font-size: 12px; padding: 2px 8px; border-radius: 999px; border: 1px solid var(--border); margin: 2px; }
.preference-card { cursor: pointer; text-align: center; }
.preference-card.selected { border-color: var(--primary); background: var(--primary-soft); color: #1c1917; }
.chat-overlay { position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; }
.chat-bubble { border-radius: 14px; padding: 10px 12px; max-width: 80%; background: var(--border); }
.chat-bubble.user { background: var(--primary); color: white; }
.theme-toggle { position: fixed; top: 12px; right: 12px; z-index: 10; }
"#;

/// Top-level layout: the current screen, the chat overlay and the theme toggle
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let flow = app_state.flow;
    let mut settings = app_state.settings;

    let view = flow.read().view();
    let chat_visible = flow.read().chat_visible();
    let dark = settings.read().theme == "dark";
    let preferences = flow.read().preferences().cloned();

    rsx! {
        style { {STYLE} }
        div {
            class: if dark { "app dark" } else { "app" },

            button {
                class: "btn btn-outline theme-toggle",
                onclick: move |_| {
                    let mut current = settings.write();
                    current.theme = if current.theme == "dark" { "light".to_string() } else { "dark".to_string() };
                    if let Err(error) = save_settings(&current) {
                        tracing::error!("Failed to save settings: {}", error);
                    }
                },
                if dark { "☀️" } else { "🌙" }
            }

            match (view, preferences) {
                (View::Hero, _) => rsx! { HeroSection {} },
                (View::Preferences, _) => rsx! { PreferenceSelector {} },
                (View::Plan, Some(preferences)) => rsx! { TravelPlan { preferences } },
                (View::Plan, None) => rsx! { HeroSection {} },
            }

            if chat_visible {
                ChatWindow {}
            }
        }
    }
}
