#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid close bracket at {position}")]
    UnmatchedCloseBracket { position: usize },

    #[error("Unterminated bracket opened at {position}")]
    UnterminatedBracket { position: usize },

    #[error("Brackets nested deeper than {limit} at {position}")]
    NestingTooDeep { position: usize, limit: usize },

    #[error("Keyword dictionary error: {0}")]
    Keywords(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    /// True for failures caused by the bracket structure of the parsed text.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::UnmatchedCloseBracket { .. }
                | Error::UnterminatedBracket { .. }
                | Error::NestingTooDeep { .. }
        )
    }

    /// Word index a structural failure was reported at.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::UnmatchedCloseBracket { position }
            | Error::UnterminatedBracket { position }
            | Error::NestingTooDeep { position, .. } => Some(*position),
            _ => None,
        }
    }
}
