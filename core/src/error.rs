use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The requested board cannot be set up: non-positive dimensions,
    /// more mines than cells, or a second planting pass.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: &'static str },
}

impl GameError {
    pub(crate) const fn invalid(reason: &'static str) -> Self {
        Self::InvalidConfiguration { reason }
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
