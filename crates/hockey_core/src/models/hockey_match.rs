use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::events::MatchEvent;
use super::match_summary::{MatchSummary, TeamSummary};
use super::team::{CardKind, Team, TeamSide};
use crate::config::ScoreboardConfig;

/// Number of quarters in a regulation match.
pub const QUARTERS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    #[default]
    InProgress,
    FullTime,
}

/// Result of a quarter break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuarterAdvance {
    /// Play resumes in `quarter`.
    Continuing { quarter: u8 },
    MatchOver,
}

impl QuarterAdvance {
    pub fn is_match_over(self) -> bool {
        matches!(self, QuarterAdvance::MatchOver)
    }
}

/// A single match: both teams, the quarter clock and the timeline.
///
/// Each action updates the team counter and appends its timeline entry in one
/// call, so the two never drift apart.
#[derive(Debug, Clone)]
pub struct HockeyMatch {
    home: Team,
    away: Team,
    quarter: u8,
    phase: MatchPhase,
    events: Vec<MatchEvent>,
    config: ScoreboardConfig,
}

impl HockeyMatch {
    pub fn new(home_name: impl Into<String>, away_name: impl Into<String>) -> Self {
        Self::with_config(home_name, away_name, &ScoreboardConfig::default())
    }

    pub fn with_config(
        home_name: impl Into<String>,
        away_name: impl Into<String>,
        config: &ScoreboardConfig,
    ) -> Self {
        let mut hockey_match = Self {
            home: Team::new(home_name),
            away: Team::new(away_name),
            quarter: 1,
            phase: MatchPhase::InProgress,
            events: Vec::new(),
            config: config.clone(),
        };

        if config.log_match_start {
            hockey_match.log("=== Start of Q1 ===");
        }
        info!(home = hockey_match.home.name(), away = hockey_match.away.name(), "match created");

        hockey_match
    }

    // ----------------------------------------------------------------------
    // Accessors
    // ----------------------------------------------------------------------

    pub fn home(&self) -> &Team {
        &self.home
    }

    pub fn away(&self) -> &Team {
        &self.away
    }

    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    /// Current quarter, 1..=4. Stays at 4 after full time.
    pub fn quarter(&self) -> u8 {
        self.quarter
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::FullTime
    }

    /// Timeline in the order events were recorded.
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    // ----------------------------------------------------------------------
    // Match actions
    // ----------------------------------------------------------------------

    pub fn goal_for(&mut self, side: TeamSide) {
        self.goal_for_with_scorer(side, "");
    }

    /// Goal credited to `scorer`; a blank scorer records a plain goal.
    pub fn goal_for_with_scorer(&mut self, side: TeamSide, scorer: &str) {
        self.warn_if_over("goal");
        let team = self.team_mut(side);
        team.score_goal();

        let scorer = scorer.trim();
        let description = if scorer.is_empty() {
            format!("{} goal!", team.name())
        } else {
            format!("{} goal! ({})", team.name(), scorer)
        };
        self.log(description);
    }

    pub fn card_for(&mut self, side: TeamSide, kind: CardKind) {
        self.warn_if_over("card");
        let team = self.team_mut(side);
        team.award_card(kind);

        let description = format!("{} card - {}", kind.name(), team.name());
        self.log(description);
    }

    pub fn penalty_corner_for(&mut self, side: TeamSide) {
        self.warn_if_over("penalty corner");
        let team = self.team_mut(side);
        team.award_penalty_corner();

        let description = format!("Penalty corner - {}", team.name());
        self.log(description);
    }

    /// Close the current quarter.
    ///
    /// Before Q4 this records the end marker, moves to the next quarter and
    /// (when configured) records its start marker. Ending Q4 records the end
    /// marker and reaches full time; later calls change nothing.
    pub fn advance_quarter(&mut self) -> QuarterAdvance {
        if self.is_over() {
            return QuarterAdvance::MatchOver;
        }

        let ended = self.quarter;
        self.log(format!("=== End of Q{ended} ==="));

        if ended < QUARTERS {
            self.quarter += 1;
            if self.config.log_quarter_start {
                self.log(format!("=== Start of Q{} ===", self.quarter));
            }
            info!(quarter = self.quarter, "quarter started");
            QuarterAdvance::Continuing { quarter: self.quarter }
        } else {
            self.phase = MatchPhase::FullTime;
            info!(
                home_goals = self.home.goals(),
                away_goals = self.away.goals(),
                "full time"
            );
            QuarterAdvance::MatchOver
        }
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            home: TeamSummary::from(&self.home),
            away: TeamSummary::from(&self.away),
            quarter: self.quarter,
            phase: self.phase,
            events: self.events.iter().map(ToString::to_string).collect(),
        }
    }

    // ----------------------------------------------------------------------
    // Internals
    // ----------------------------------------------------------------------

    fn team_mut(&mut self, side: TeamSide) -> &mut Team {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    fn log(&mut self, description: impl Into<String>) {
        let event = MatchEvent::new(self.quarter, description);
        debug!(event = %event, "event recorded");
        self.events.push(event);
    }

    fn warn_if_over(&self, action: &str) {
        if self.is_over() {
            warn!(action, "action recorded after full time");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions(m: &HockeyMatch) -> Vec<&str> {
        m.events().iter().map(MatchEvent::description).collect()
    }

    #[test]
    fn test_new_match_initial_state() {
        let m = HockeyMatch::new("A", "B");
        assert_eq!(m.home().name(), "A");
        assert_eq!(m.away().name(), "B");
        assert_eq!(m.quarter(), 1);
        assert_eq!(m.phase(), MatchPhase::InProgress);
        assert!(m.events().is_empty());
    }

    #[test]
    fn test_match_start_marker_when_configured() {
        let config = ScoreboardConfig { log_match_start: true, ..Default::default() };
        let m = HockeyMatch::with_config("A", "B", &config);

        assert_eq!(m.events().len(), 1);
        assert_eq!(m.events()[0].to_string(), "Q1 - === Start of Q1 ===");
    }

    #[test]
    fn test_reference_scenario() {
        let mut m = HockeyMatch::new("A", "B");
        m.goal_for(TeamSide::Home);
        m.card_for(TeamSide::Away, CardKind::Yellow);
        let advance = m.advance_quarter();

        assert_eq!(advance, QuarterAdvance::Continuing { quarter: 2 });
        assert_eq!(m.home().goals(), 1);
        assert_eq!(m.away().yellow_cards(), 1);
        assert_eq!(m.quarter(), 2);
        assert_eq!(
            descriptions(&m),
            vec!["A goal!", "Yellow card - B", "=== End of Q1 ===", "=== Start of Q2 ==="]
        );
    }

    #[test]
    fn test_events_tagged_with_current_quarter() {
        let mut m = HockeyMatch::new("A", "B");
        m.advance_quarter();
        m.penalty_corner_for(TeamSide::Away);

        let lines: Vec<String> = m.events().iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "Q1 - === End of Q1 ===",
                "Q2 - === Start of Q2 ===",
                "Q2 - Penalty corner - B",
            ]
        );
    }

    #[test]
    fn test_four_advances_reach_full_time() {
        let mut m = HockeyMatch::new("A", "B");

        assert_eq!(m.advance_quarter(), QuarterAdvance::Continuing { quarter: 2 });
        assert_eq!(m.advance_quarter(), QuarterAdvance::Continuing { quarter: 3 });
        assert_eq!(m.advance_quarter(), QuarterAdvance::Continuing { quarter: 4 });
        assert!(!m.is_over());

        assert_eq!(m.advance_quarter(), QuarterAdvance::MatchOver);
        assert!(m.is_over());
        assert_eq!(m.quarter(), 4);
        assert_eq!(m.events().len(), 3 * 2 + 1);
        assert_eq!(m.events().last().unwrap().to_string(), "Q4 - === End of Q4 ===");

        let before = m.events().len();
        assert!(m.advance_quarter().is_match_over());
        assert_eq!(m.events().len(), before);
        assert_eq!(m.quarter(), 4);
    }

    #[test]
    fn test_quarter_start_markers_can_be_disabled() {
        let config = ScoreboardConfig { log_quarter_start: false, ..Default::default() };
        let mut m = HockeyMatch::with_config("A", "B", &config);
        m.advance_quarter();
        m.advance_quarter();

        assert_eq!(descriptions(&m), vec!["=== End of Q1 ===", "=== End of Q2 ==="]);
        assert_eq!(m.quarter(), 3);
    }

    #[test]
    fn test_goal_with_scorer() {
        let mut m = HockeyMatch::new("Oranje", "Lions");
        m.goal_for_with_scorer(TeamSide::Home, "de Vries");
        m.goal_for_with_scorer(TeamSide::Away, "   ");

        assert_eq!(descriptions(&m), vec!["Oranje goal! (de Vries)", "Lions goal!"]);
        assert_eq!(m.home().goals(), 1);
        assert_eq!(m.away().goals(), 1);
    }

    #[test]
    fn test_card_and_corner_descriptions() {
        let mut m = HockeyMatch::new("A", "B");
        m.card_for(TeamSide::Home, CardKind::Green);
        m.card_for(TeamSide::Away, CardKind::Red);
        m.penalty_corner_for(TeamSide::Home);

        assert_eq!(descriptions(&m), vec!["Green card - A", "Red card - B", "Penalty corner - A"]);
        assert_eq!(m.team(TeamSide::Home).green_cards(), 1);
        assert_eq!(m.team(TeamSide::Home).penalty_corners(), 1);
        assert_eq!(m.team(TeamSide::Away).red_cards(), 1);
        assert_eq!(m.team(TeamSide::Away).penalty_corners(), 0);
    }

    #[test]
    fn test_actions_after_full_time_still_recorded() {
        let mut m = HockeyMatch::new("A", "B");
        for _ in 0..QUARTERS {
            m.advance_quarter();
        }
        m.goal_for(TeamSide::Away);

        assert_eq!(m.away().goals(), 1);
        assert_eq!(m.events().last().unwrap().to_string(), "Q4 - B goal!");
    }

    #[test]
    fn test_summary_reflects_state() {
        let mut m = HockeyMatch::new("A", "B");
        m.goal_for(TeamSide::Home);
        m.card_for(TeamSide::Away, CardKind::Yellow);

        let summary = m.summary();
        assert_eq!(summary.home.name, "A");
        assert_eq!(summary.home.goals, 1);
        assert_eq!(summary.away.yellow_cards, 1);
        assert_eq!(summary.quarter, 1);
        assert_eq!(summary.phase, MatchPhase::InProgress);
        assert_eq!(summary.events, vec!["Q1 - A goal!", "Q1 - Yellow card - B"]);
    }
}
