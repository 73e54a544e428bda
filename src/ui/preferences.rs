//! Preference form: interests, trip length and budget

use crate::app::AppState;
use crate::planner::preferences::{
    BUDGET_STEP_INR, MAX_DURATION_DAYS, MIN_BUDGET_INR, MIN_DURATION_DAYS,
};
use crate::planner::Interest;
use dioxus::prelude::*;

#[component]
pub fn PreferenceSelector() -> Element {
    let app_state = use_context::<AppState>();
    let mut flow = app_state.flow;
    let settings = app_state.settings;
    let mut prefs = use_signal(|| settings.read().initial_preferences());
    let mut error = use_signal(|| None::<String>);

    let nothing_selected = prefs.read().interests.is_empty();
    let duration = prefs.read().duration_days;
    let budget = prefs.read().budget_inr;

    let handle_submit = move |_: MouseEvent| {
        let submitted = prefs.read().clone();
        match flow.write().submit_preferences(submitted) {
            Ok(()) => error.set(None),
            Err(e) => {
                tracing::debug!("Preferences rejected: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        section {
            style: "padding: 64px 24px;",

            div {
                style: "max-width: 960px; margin: 0 auto;",

                div {
                    style: "text-align: center; margin-bottom: 40px;",
                    h2 { style: "font-size: 36px; margin-bottom: 8px;", "What interests you most?" }
                    p { class: "muted", style: "font-size: 20px;", "Help us create your perfect Udupi experience" }
                }

                div {
                    class: "grid",
                    style: "grid-template-columns: repeat(4, 1fr); margin-bottom: 40px;",
                    for interest in Interest::ALL {
                        div {
                            key: "{interest.id()}",
                            class: if prefs.read().contains(interest) { "card preference-card selected" } else { "card preference-card" },
                            onclick: move |_| prefs.write().toggle(interest),
                            div { style: "font-size: 32px; margin-bottom: 8px;", "{interest.icon()}" }
                            div { style: "font-weight: 500; font-size: 14px;", "{interest.label()}" }
                        }
                    }
                }

                div {
                    class: "grid",
                    style: "grid-template-columns: 1fr 1fr; margin-bottom: 40px;",

                    div {
                        class: "card",
                        label { r#for: "duration", style: "font-weight: 600; font-size: 18px;", "📍 Duration of Stay" }
                        input {
                            id: "duration",
                            r#type: "number",
                            min: "{MIN_DURATION_DAYS}",
                            max: "{MAX_DURATION_DAYS}",
                            value: "{duration}",
                            style: "display: block; width: 100%; margin: 12px 0; font-size: 18px; padding: 8px;",
                            oninput: move |evt| {
                                if let Ok(days) = evt.value().parse::<u32>() {
                                    prefs.write().duration_days = days;
                                }
                            },
                        }
                        p { class: "muted", style: "font-size: 14px;", "How many days will you be in Udupi?" }
                    }

                    div {
                        class: "card",
                        label { r#for: "budget", style: "font-weight: 600; font-size: 18px;", "₹ Budget Range" }
                        input {
                            id: "budget",
                            r#type: "number",
                            min: "{MIN_BUDGET_INR}",
                            step: "{BUDGET_STEP_INR}",
                            value: "{budget}",
                            style: "display: block; width: 100%; margin: 12px 0; font-size: 18px; padding: 8px;",
                            oninput: move |evt| {
                                if let Ok(amount) = evt.value().parse::<u32>() {
                                    prefs.write().budget_inr = amount;
                                }
                            },
                        }
                        p { class: "muted", style: "font-size: 14px;", "Total budget for your trip (including food, travel, accommodation)" }
                    }
                }

                div {
                    style: "text-align: center;",
                    button {
                        class: "btn btn-primary",
                        disabled: nothing_selected,
                        onclick: handle_submit,
                        "Create My Travel Plan →"
                    }
                    if let Some(message) = error() {
                        p { class: "muted", style: "margin-top: 16px;", "{message}" }
                    } else if nothing_selected {
                        p { class: "muted", style: "margin-top: 16px;", "Please select at least one interest to continue" }
                    }
                }
            }
        }
    }
}
