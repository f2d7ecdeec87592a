//! # hockey_core - Field hockey match bookkeeping
//!
//! Tracks both teams' goals, cards and penalty corners across four quarters
//! and keeps a timeline of everything that happened.
//!
//! ```
//! use hockey_core::{CardKind, HockeyMatch, TeamSide};
//!
//! let mut m = HockeyMatch::new("A", "B");
//! m.goal_for(TeamSide::Home);
//! m.card_for(TeamSide::Away, CardKind::Yellow);
//! m.advance_quarter();
//!
//! assert_eq!(m.home().goals(), 1);
//! assert_eq!(m.quarter(), 2);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod report;

pub use config::{ScoreboardConfig, CONFIG_PATH_ENV};
pub use error::{MatchError, Result};
pub use models::{
    CardKind, HockeyMatch, MatchEvent, MatchPhase, MatchSummary, QuarterAdvance, Team, TeamSide,
    TeamSummary, QUARTERS,
};
pub use report::{render_event_log, render_scoreboard};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
