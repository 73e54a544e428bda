//! Day-by-day itinerary builder

use serde::Serialize;

use crate::planner::catalog::{activities_for, Activity, PLANNED_INTERESTS};
use crate::planner::preferences::TripPreferences;
use crate::planner::PlanError;

/// Most activity cards shown for a single day
pub const MAX_ACTIVITIES_PER_DAY: usize = 3;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DayPlan {
    /// 1-based day number
    pub day: u32,
    pub activities: Vec<&'static Activity>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Itinerary {
    pub duration_days: u32,
    pub budget_inr: u32,
    pub days: Vec<DayPlan>,
}

impl Itinerary {
    /// Header line, e.g. `3 day(s) • ₹10,000 budget`
    pub fn summary(&self) -> String {
        format!(
            "{} day(s) • {} budget",
            self.duration_days,
            format_inr(self.budget_inr)
        )
    }
}

/// Build the plan shown on the plan view. Every day gets the same cards.
pub fn build_itinerary(prefs: &TripPreferences) -> Result<Itinerary, PlanError> {
    prefs.validate()?;

    let activities: Vec<&'static Activity> = PLANNED_INTERESTS
        .into_iter()
        .filter(|interest| prefs.contains(*interest))
        .flat_map(activities_for)
        .take(MAX_ACTIVITIES_PER_DAY)
        .collect();

    let days = (1..=prefs.duration_days)
        .map(|day| DayPlan {
            day,
            activities: activities.clone(),
        })
        .collect();

    tracing::debug!(
        days = prefs.duration_days,
        activities = activities.len(),
        "Built itinerary"
    );

    Ok(Itinerary {
        duration_days: prefs.duration_days,
        budget_inr: prefs.budget_inr,
        days,
    })
}

/// Rupee amount with comma thousands separators
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push('₹');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
