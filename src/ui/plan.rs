//! Itinerary, hotels and travel tips for submitted preferences

use crate::app::AppState;
use crate::planner::catalog::{hotels, travel_tips, Activity, Hotel, HotelTier};
use crate::planner::{build_itinerary, TripPreferences};
use dioxus::prelude::*;

#[component]
pub fn TravelPlan(preferences: TripPreferences) -> Element {
    let app_state = use_context::<AppState>();

    let itinerary = match build_itinerary(&preferences) {
        Ok(itinerary) => itinerary,
        Err(e) => {
            tracing::error!("Plan view reached with invalid preferences: {}", e);
            return rsx! {
                p { class: "muted", style: "padding: 64px; text-align: center;", "{e}" }
            };
        }
    };
    let summary = itinerary.summary();

    rsx! {
        section {
            style: "padding: 64px 24px;",

            div {
                style: "max-width: 1100px; margin: 0 auto;",

                div {
                    style: "text-align: center; margin-bottom: 40px;",
                    h2 { style: "font-size: 36px; margin-bottom: 8px;", "Your Personalized Udupi Experience" }
                    p { class: "muted", style: "font-size: 20px;", "{summary}" }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| app_state.open_chat(),
                        "💬 Ask Travel Assistant"
                    }
                }

                for day in itinerary.days {
                    div {
                        key: "{day.day}",
                        class: "card",
                        style: "margin-bottom: 24px;",
                        h3 { style: "font-size: 24px;", "Day {day.day}" }
                        div {
                            class: "grid",
                            style: "grid-template-columns: repeat(3, 1fr);",
                            for activity in day.activities {
                                ActivityCard { key: "{activity.name}", activity: activity.clone() }
                            }
                        }
                    }
                }

                div {
                    class: "card",
                    style: "margin: 40px 0 24px;",
                    h3 { style: "font-size: 24px;", "🏨 Recommended Accommodations" }
                    div {
                        class: "grid",
                        style: "grid-template-columns: repeat(3, 1fr);",
                        for hotel in hotels() {
                            HotelCard { key: "{hotel.name}", hotel: hotel.clone() }
                        }
                    }
                }

                div {
                    class: "card",
                    h3 { style: "font-size: 24px;", "🚗 Travel Tips & Routes" }
                    div {
                        class: "grid",
                        style: "grid-template-columns: 1fr 1fr;",
                        for tip in travel_tips() {
                            div {
                                h4 { "{tip.title}" }
                                ul {
                                    class: "muted",
                                    style: "font-size: 14px;",
                                    for line in tip.lines {
                                        li { "{line}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ActivityCard(activity: Activity) -> Element {
    rsx! {
        div {
            class: "card",
            div {
                style: "display: flex; justify-content: space-between;",
                h4 { style: "margin: 0;", "{activity.name}" }
                span { style: "color: var(--accent);", "★ {activity.rating}" }
            }
            p { class: "muted", style: "font-size: 14px;", "{activity.description}" }
            div { style: "font-size: 14px;", "🕒 {activity.duration}" }
            div { style: "font-size: 14px;", "₹ {activity.cost}" }
            div {
                style: "margin-top: 8px;",
                for highlight in activity.highlights {
                    span { class: "badge", "{highlight}" }
                }
            }
        }
    }
}

#[component]
fn HotelCard(hotel: Hotel) -> Element {
    let badge_style = match hotel.tier {
        HotelTier::Budget => "background: var(--border);",
        HotelTier::MidRange => "",
        HotelTier::Luxury => "background: var(--primary); color: white;",
    };

    rsx! {
        div {
            class: "card",
            div {
                style: "display: flex; justify-content: space-between; align-items: start;",
                h4 { style: "margin: 0;", "{hotel.name}" }
                span { class: "badge", style: "{badge_style}", "{hotel.tier.label()}" }
            }
            p { class: "muted", style: "font-size: 14px;", "{hotel.location}" }
            p { style: "font-weight: 600; color: var(--primary);", "{hotel.price}" }
            div { style: "font-size: 14px;", "★ {hotel.rating}" }
            div {
                style: "margin-top: 8px;",
                for amenity in hotel.amenities {
                    span { class: "badge", "{amenity}" }
                }
            }
        }
    }
}
