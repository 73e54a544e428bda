//! Configuration types
//!
//! Runtime configuration handed to the chat session.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default pause before the assistant answers
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// How delayed replies are scheduled when the user types faster than the delay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyPolicy {
    /// Every submission gets its own timer; replies land in completion order
    #[default]
    Independent,
    /// One pending reply at a time, answered in submission order
    Serialized,
}

/// Chat session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Artificial pause before each bot reply
    pub reply_delay: Duration,
    pub reply_policy: ReplyPolicy,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            reply_policy: ReplyPolicy::Independent,
        }
    }
}
