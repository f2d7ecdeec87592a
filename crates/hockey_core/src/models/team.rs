use std::fmt;
use std::str::FromStr;

use crate::error::{MatchError, Result};

/// Disciplinary card shown by the umpire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum CardKind {
    Green,
    Yellow,
    Red,
}

impl CardKind {
    pub const ALL: [CardKind; 3] = [CardKind::Green, CardKind::Yellow, CardKind::Red];

    pub const fn name(self) -> &'static str {
        match self {
            CardKind::Green => "Green",
            CardKind::Yellow => "Yellow",
            CardKind::Red => "Red",
        }
    }

    /// Slot in a per-kind counter array.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CardKind::Green => 0,
            CardKind::Yellow => 1,
            CardKind::Red => 2,
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card code as entered at the console: 1 = green, 2 = yellow, 3 = red.
impl TryFrom<u8> for CardKind {
    type Error = MatchError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            1 => Ok(CardKind::Green),
            2 => Ok(CardKind::Yellow),
            3 => Ok(CardKind::Red),
            other => Err(MatchError::InvalidCardKind(other.to_string())),
        }
    }
}

impl FromStr for CardKind {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        CardKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MatchError::InvalidCardKind(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TeamSide {
    #[default]
    Home,
    Away,
}

/// Console side selection: first non-blank character `h` or `a`, any case.
impl FromStr for TeamSide {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('h') => Ok(TeamSide::Home),
            Some('a') => Ok(TeamSide::Away),
            _ => Err(MatchError::InvalidSide(s.trim().to_string())),
        }
    }
}

/// Running counters for one side of the match.
///
/// Every counter starts at zero and only ever goes up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    name: String,
    goals: u32,
    cards: [u32; 3],
    penalty_corners: u32,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), goals: 0, cards: [0; 3], penalty_corners: 0 }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn goals(&self) -> u32 {
        self.goals
    }

    pub fn penalty_corners(&self) -> u32 {
        self.penalty_corners
    }

    pub fn card_count(&self, kind: CardKind) -> u32 {
        self.cards[kind.index()]
    }

    pub fn green_cards(&self) -> u32 {
        self.card_count(CardKind::Green)
    }

    pub fn yellow_cards(&self) -> u32 {
        self.card_count(CardKind::Yellow)
    }

    pub fn red_cards(&self) -> u32 {
        self.card_count(CardKind::Red)
    }

    pub fn score_goal(&mut self) {
        self.goals += 1;
    }

    pub fn award_card(&mut self, kind: CardKind) {
        self.cards[kind.index()] += 1;
    }

    pub fn award_penalty_corner(&mut self) {
        self.penalty_corners += 1;
    }

    /// `"<G>G <Y>Y <R>R <PC>PC"`
    pub fn stats_line(&self) -> String {
        format!(
            "{}G {}Y {}R {}PC",
            self.green_cards(),
            self.yellow_cards(),
            self.red_cards(),
            self.penalty_corners
        )
    }
}
