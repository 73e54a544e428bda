//! Trip preferences chosen on the preference form

use serde::{Deserialize, Serialize};

use crate::planner::PlanError;

pub const MIN_DURATION_DAYS: u32 = 1;
pub const MAX_DURATION_DAYS: u32 = 30;
pub const MIN_BUDGET_INR: u32 = 1000;
/// Step used by the budget input
pub const BUDGET_STEP_INR: u32 = 1000;

/// What the traveller wants to see
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Temples,
    Beaches,
    Food,
    Culture,
    Shopping,
    Photography,
    Nature,
    Music,
}

impl Interest {
    /// Display order of the preference grid
    pub const ALL: [Interest; 8] = [
        Interest::Temples,
        Interest::Beaches,
        Interest::Food,
        Interest::Culture,
        Interest::Shopping,
        Interest::Photography,
        Interest::Nature,
        Interest::Music,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Interest::Temples => "temples",
            Interest::Beaches => "beaches",
            Interest::Food => "food",
            Interest::Culture => "culture",
            Interest::Shopping => "shopping",
            Interest::Photography => "photography",
            Interest::Nature => "nature",
            Interest::Music => "music",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Interest::Temples => "Temples & Spirituality",
            Interest::Beaches => "Beaches",
            Interest::Food => "Local Cuisine",
            Interest::Culture => "Cultural Sites",
            Interest::Shopping => "Shopping",
            Interest::Photography => "Photography",
            Interest::Nature => "Nature & Parks",
            Interest::Music => "Music & Arts",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Interest::Temples => "🛕",
            Interest::Beaches => "🌊",
            Interest::Food => "🍽️",
            Interest::Culture => "🏛️",
            Interest::Shopping => "🛍️",
            Interest::Photography => "📷",
            Interest::Nature => "⛰️",
            Interest::Music => "🎵",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|interest| interest.id() == id)
    }
}

/// Form state submitted to the planner
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripPreferences {
    /// Selection order, no duplicates
    pub interests: Vec<Interest>,
    pub duration_days: u32,
    pub budget_inr: u32,
}

impl Default for TripPreferences {
    fn default() -> Self {
        Self {
            interests: Vec::new(),
            duration_days: 3,
            budget_inr: 10_000,
        }
    }
}

impl TripPreferences {
    /// Empty selection with the given trip length and budget
    pub fn with_defaults(duration_days: u32, budget_inr: u32) -> Self {
        Self {
            interests: Vec::new(),
            duration_days,
            budget_inr,
        }
    }

    /// Select the interest if absent, deselect it otherwise
    pub fn toggle(&mut self, interest: Interest) {
        if let Some(pos) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest);
        }
    }

    pub fn contains(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if self.interests.is_empty() {
            return Err(PlanError::NoInterests);
        }
        if !(MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&self.duration_days) {
            return Err(PlanError::InvalidDuration(self.duration_days));
        }
        if self.budget_inr < MIN_BUDGET_INR {
            return Err(PlanError::BudgetTooLow(self.budget_inr));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut prefs = TripPreferences::default();
        prefs.toggle(Interest::Food);
        prefs.toggle(Interest::Temples);
        assert_eq!(prefs.interests, vec![Interest::Food, Interest::Temples]);

        prefs.toggle(Interest::Food);
        assert_eq!(prefs.interests, vec![Interest::Temples]);
        assert!(prefs.contains(Interest::Temples));
        assert!(!prefs.contains(Interest::Food));
    }

    #[test]
    fn test_validation() {
        let mut prefs = TripPreferences::default();
        assert_eq!(prefs.validate(), Err(PlanError::NoInterests));

        prefs.toggle(Interest::Beaches);
        assert_eq!(prefs.validate(), Ok(()));

        prefs.duration_days = 0;
        assert_eq!(prefs.validate(), Err(PlanError::InvalidDuration(0)));
        prefs.duration_days = 31;
        assert_eq!(prefs.validate(), Err(PlanError::InvalidDuration(31)));
        prefs.duration_days = 30;

        prefs.budget_inr = 999;
        assert_eq!(prefs.validate(), Err(PlanError::BudgetTooLow(999)));
        prefs.budget_inr = MIN_BUDGET_INR;
        assert_eq!(prefs.validate(), Ok(()));
    }

    #[test]
    fn test_interest_ids_round_trip() {
        for interest in Interest::ALL {
            assert_eq!(Interest::from_id(interest.id()), Some(interest));
        }
        assert_eq!(Interest::from_id("skiing"), None);
    }

    #[test]
    fn test_default_preferences() {
        let prefs = TripPreferences::default();
        assert!(prefs.interests.is_empty());
        assert_eq!(prefs.duration_days, 3);
        assert_eq!(prefs.budget_inr, 10_000);
    }
}
