//! Static recommendation tables

use serde::Serialize;

use crate::planner::preferences::Interest;

/// A thing to do, shown as a card in the day plan
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Activity {
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub cost: &'static str,
    pub rating: f32,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HotelTier {
    Budget,
    MidRange,
    Luxury,
}

impl HotelTier {
    pub fn label(self) -> &'static str {
        match self {
            HotelTier::Budget => "Budget",
            HotelTier::MidRange => "Mid-range",
            HotelTier::Luxury => "Luxury",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Hotel {
    pub name: &'static str,
    pub tier: HotelTier,
    pub price: &'static str,
    pub rating: f32,
    pub amenities: &'static [&'static str],
    pub location: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TravelTip {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

static TEMPLES: &[Activity] = &[Activity {
    name: "Sri Krishna Temple",
    description: "Ancient temple with unique architecture and spiritual significance",
    duration: "2-3 hours",
    cost: "Free",
    rating: 4.8,
    highlights: &["Darshan", "Architecture", "Spiritual experience"],
}];

static BEACHES: &[Activity] = &[Activity {
    name: "Malpe Beach",
    description: "Pristine beach perfect for sunset views and water activities",
    duration: "3-4 hours",
    cost: "₹200-500",
    rating: 4.6,
    highlights: &["Sunset", "Water sports", "Beach walks"],
}];

static FOOD: &[Activity] = &[Activity {
    name: "Traditional Udupi Cuisine",
    description: "Authentic South Indian vegetarian delicacies",
    duration: "1-2 hours",
    cost: "₹150-400 per person",
    rating: 4.9,
    highlights: &["Dosa varieties", "Filter coffee", "Traditional ambiance"],
}];

static HOTELS: &[Hotel] = &[
    Hotel {
        name: "Hotel Janardana",
        tier: HotelTier::Budget,
        price: "₹1,500-2,500/night",
        rating: 4.2,
        amenities: &["AC", "WiFi", "Restaurant"],
        location: "Near Krishna Temple",
    },
    Hotel {
        name: "Fortune Inn Valley View",
        tier: HotelTier::MidRange,
        price: "₹3,500-5,500/night",
        rating: 4.5,
        amenities: &["Pool", "Spa", "Multi-cuisine restaurant"],
        location: "Manipal Road",
    },
    Hotel {
        name: "The Ocean Pearl",
        tier: HotelTier::Luxury,
        price: "₹6,000-10,000/night",
        rating: 4.7,
        amenities: &["Sea view", "Premium dining", "Conference facilities"],
        location: "Near Malpe Beach",
    },
];

static TIPS: &[TravelTip] = &[
    TravelTip {
        title: "Getting Around",
        lines: &[
            "Auto-rickshaws: ₹20-50 for short distances",
            "Local buses: ₹10-30 per journey",
            "Rental scooter: ₹300-500 per day",
            "Taxi services: ₹15-20 per km",
        ],
    },
    TravelTip {
        title: "Best Times to Visit",
        lines: &[
            "Temples: Early morning (6-8 AM) or evening (6-8 PM)",
            "Beaches: Late afternoon for sunset views",
            "Restaurants: Avoid peak lunch hours (12-2 PM)",
            "Markets: Morning hours for fresh produce",
        ],
    },
];

/// Interests that have catalog entries, in the order they fill a day
pub const PLANNED_INTERESTS: [Interest; 3] = [Interest::Temples, Interest::Beaches, Interest::Food];

/// Catalog entries for an interest; empty for interests without recommendations
pub fn activities_for(interest: Interest) -> &'static [Activity] {
    match interest {
        Interest::Temples => TEMPLES,
        Interest::Beaches => BEACHES,
        Interest::Food => FOOD,
        _ => &[],
    }
}

pub fn hotels() -> &'static [Hotel] {
    HOTELS
}

pub fn travel_tips() -> &'static [TravelTip] {
    TIPS
}
