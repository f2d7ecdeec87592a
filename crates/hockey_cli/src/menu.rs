//! Numbered action menu.

use std::str::FromStr;

use hockey_core::{CardKind, HockeyMatch, TeamSide};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Goal(TeamSide),
    Card(CardKind),
    PenaltyCorner,
    NextQuarter,
    ShowEventLog,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MenuError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("unknown menu choice: {0}")]
    UnknownChoice(u32),
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number: u32 = trimmed.parse().map_err(|_| MenuError::NotANumber(trimmed.to_string()))?;

        match number {
            1 => Ok(MenuChoice::Goal(TeamSide::Home)),
            2 => Ok(MenuChoice::Goal(TeamSide::Away)),
            // 3 => green, 4 => yellow, 5 => red
            3..=5 => CardKind::try_from((number - 2) as u8)
                .map(MenuChoice::Card)
                .map_err(|_| MenuError::UnknownChoice(number)),
            6 => Ok(MenuChoice::PenaltyCorner),
            7 => Ok(MenuChoice::NextQuarter),
            8 => Ok(MenuChoice::ShowEventLog),
            9 => Ok(MenuChoice::Quit),
            other => Err(MenuError::UnknownChoice(other)),
        }
    }
}

pub fn render_menu(m: &HockeyMatch) -> String {
    format!(
        "Actions:\n\
         1. Goal {}\n\
         2. Goal {}\n\
         3. Green card\n\
         4. Yellow card\n\
         5. Red card\n\
         6. Penalty corner\n\
         7. Next quarter\n\
         8. Show event log\n\
         9. Quit match early\n",
        m.home().name(),
        m.away().name()
    )
}
