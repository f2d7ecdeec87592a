pub mod events;
pub mod hockey_match;
pub mod match_summary;
pub mod team;


pub use events::MatchEvent;
pub use hockey_match::{HockeyMatch, MatchPhase, QuarterAdvance, QUARTERS};
pub use match_summary::{MatchSummary, TeamSummary};
pub use team::{CardKind, Team, TeamSide};
