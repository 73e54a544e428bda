//! Keyword-routed response selection
//!
//! Maps free text to one canned answer. Topics are tested in priority order and
//! the first whose trigger set matches wins.

use serde::{Deserialize, Serialize};

/// Introductory message seeded into every new session
pub const GREETING: &str = "Hello! I'm your Udupi travel assistant. I can help you with information about temples, beaches, food, hotels, transportation, and more. What would you like to know?";

/// Reply used when no topic matches
pub const FALLBACK: &str = "I'm here to help with your Udupi trip! You can ask me about temples, beaches, food, hotels, transportation, weather, or shopping. What would you like to know?";

/// A category the assistant knows how to answer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Temple,
    Beach,
    Food,
    Hotel,
    Transport,
    Weather,
    Shopping,
}

impl Topic {
    /// All topics, highest priority first
    pub const ALL: [Topic; 7] = [
        Topic::Temple,
        Topic::Beach,
        Topic::Food,
        Topic::Hotel,
        Topic::Transport,
        Topic::Weather,
        Topic::Shopping,
    ];

    /// Lowercase substrings that select this topic
    pub fn triggers(self) -> &'static [&'static str] {
        match self {
            Topic::Temple => &["temple", "krishna"],
            Topic::Beach => &["beach", "malpe"],
            Topic::Food => &["food", "eat", "restaurant"],
            Topic::Hotel => &["hotel", "stay", "accommodation"],
            Topic::Transport => &["transport", "travel", "bus", "auto"],
            Topic::Weather => &["weather", "climate"],
            Topic::Shopping => &["shop", "market", "buy"],
        }
    }

    pub fn response(self) -> &'static str {
        match self {
            Topic::Temple => "The Sri Krishna Temple is open from 5:30 AM to 1:00 PM and 3:00 PM to 9:00 PM. The best time to visit is early morning or evening. Don't miss the unique architecture and the famous 'Kanakana Kindi' window!",
            Topic::Beach => "Malpe Beach is about 6 km from Udupi city center. You can take a bus (₹15) or auto-rickshaw (₹80-100). Best time for sunset is around 6-7 PM. Water sports are available at ₹200-500 per activity.",
            Topic::Food => "Must-try dishes in Udupi: 1) Masala Dosa at Diana Restaurant, 2) Goli Baje at local eateries, 3) Traditional meals at Mitra Samaj. Average cost per meal: ₹150-400.",
            Topic::Hotel => "Based on your budget, I recommend Hotel Janardana (₹1,500-2,500/night) near Krishna Temple. It's clean, has good reviews, and walking distance to major attractions.",
            Topic::Transport => "Local transport options: 1) City buses (₹10-30), 2) Auto-rickshaws (₹20-50 for short trips), 3) Rental scooters (₹300-500/day). Book through local operators or hotel reception.",
            Topic::Weather => "Udupi has a tropical climate. Best months: October-March. Carry light cotton clothes, sunscreen, and an umbrella. Current season recommendations will vary.",
            Topic::Shopping => "Visit Car Street for traditional items, handicrafts, and souvenirs. Bargaining is common. Must-buy: Udupi sarees, wooden toys, and local spices. Budget: ₹500-2000 for souvenirs.",
        }
    }

    fn matches(self, normalized: &str) -> bool {
        self.triggers().iter().any(|trigger| normalized.contains(trigger))
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Topic::Temple => "temple",
            Topic::Beach => "beach",
            Topic::Food => "food",
            Topic::Hotel => "hotel",
            Topic::Transport => "transport",
            Topic::Weather => "weather",
            Topic::Shopping => "shopping",
        };
        f.write_str(name)
    }
}

/// Highest-priority topic whose triggers appear in `text`, ignoring case
pub fn classify(text: &str) -> Option<Topic> {
    let normalized = text.to_lowercase();
    Topic::ALL.into_iter().find(|topic| topic.matches(&normalized))
}

/// Canned reply for `text`; never fails, the empty string gets the fallback
pub fn select_response(text: &str) -> &'static str {
    classify(text).map(Topic::response).unwrap_or(FALLBACK)
}
