use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const INVALID_DATA_MESSAGE: &str = "Invalid or empty user data received";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    InvalidData,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The source answered, but not with a non-empty array of users.
    #[error("Invalid or empty user data received")]
    InvalidData,
    #[error("{0}")]
    Transport(String),
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Transport(UNKNOWN_ERROR_MESSAGE.to_string())
        } else {
            Self::Transport(message)
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::InvalidData => FetchErrorKind::InvalidData,
            Self::Transport(_) => FetchErrorKind::Transport,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}
