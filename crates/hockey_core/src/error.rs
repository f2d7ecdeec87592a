use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid card kind: {0}")]
    InvalidCardKind(String),

    #[error("Invalid team side: {0:?}")]
    InvalidSide(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl MatchError {
    /// Errors caused by console input; the caller re-prompts without touching
    /// the match.
    pub fn is_input_error(&self) -> bool {
        match self {
            MatchError::InvalidCardKind(_) => true,
            MatchError::InvalidSide(_) => true,
            MatchError::Config(_) => false,
        }
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        MatchError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
