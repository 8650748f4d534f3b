use thiserror::Error;

#[derive(Debug, Error)]
pub enum VigilError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("overlapping highlights: {0}")]
    Overlap(String),

    #[error("out of range: {0}")]
    Range(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl VigilError {
    /// The bare message of an error caused by malformed caller input, or
    /// `None` for every other kind.
    pub fn client_message(&self) -> Option<&str> {
        match self {
            Self::InvalidInput(msg)
            | Self::Validation(msg)
            | Self::Overlap(msg)
            | Self::Range(msg) => Some(msg),
            _ => None,
        }
    }
}

pub type VigilResult<T> = Result<T, VigilError>;
