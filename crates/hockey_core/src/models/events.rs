use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of the match timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    /// Quarter (1-4) that was current when the event was recorded.
    quarter: u8,
    description: String,
}

impl MatchEvent {
    pub fn new(quarter: u8, description: impl Into<String>) -> Self {
        Self { quarter, description: description.into() }
    }

    pub fn quarter(&self) -> u8 {
        self.quarter
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Q{} - {}", self.quarter, self.description)
    }
}
