//! Error types for the depth chart service

use thiserror::Error;


pub type Result<T> = std::result::Result<T, DepthChartError>;

#[derive(Error, Debug)]
pub enum DepthChartError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("A player with number {number} already exists in the {position} position.")]
    Conflict { number: u32, position: String },

    #[error("Rank {rank} exceeds roster size {len}")]
    OutOfRange { rank: usize, len: usize },

    #[error("Player #{number} not found at position {position}")]
    NotFound { number: u32, position: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid bind address: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),
}

impl DepthChartError {
    /// Shorthand for [`DepthChartError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        DepthChartError::InvalidArgument {
            message: message.into(),
        }
    }

    /// True for failures the caller must fix in the request itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DepthChartError::InvalidArgument { .. }
                | DepthChartError::Conflict { .. }
                | DepthChartError::OutOfRange { .. }
        )
    }
}
