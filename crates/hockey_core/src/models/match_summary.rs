use serde::{Deserialize, Serialize};

use super::hockey_match::MatchPhase;
use super::team::Team;

/// Final (or in-progress) match state flattened for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub home: TeamSummary,
    pub away: TeamSummary,
    pub quarter: u8,
    pub phase: MatchPhase,
    /// Timeline entries as displayed, e.g. `"Q2 - A goal!"`.
    pub events: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub name: String,
    pub goals: u32,
    pub green_cards: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub penalty_corners: u32,
}

impl From<&Team> for TeamSummary {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name().to_string(),
            goals: team.goals(),
            green_cards: team.green_cards(),
            yellow_cards: team.yellow_cards(),
            red_cards: team.red_cards(),
            penalty_corners: team.penalty_corners(),
        }
    }
}

impl MatchSummary {
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
