//! Trip planning
//!
//! Preference model, the static recommendation catalog and the itinerary builder.

pub mod catalog;
pub mod itinerary;
pub mod preferences;

use thiserror::Error;

pub use itinerary::{build_itinerary, format_inr, DayPlan, Itinerary};
pub use preferences::{Interest, TripPreferences};

/// Reasons a set of preferences cannot be turned into a plan
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Please select at least one interest to continue")]
    NoInterests,
    #[error("Trip length must be between 1 and 30 days, got {0}")]
    InvalidDuration(u32),
    #[error("Budget must be at least ₹1,000, got ₹{0}")]
    BudgetTooLow(u32),
}
