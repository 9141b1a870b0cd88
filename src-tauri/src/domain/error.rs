//! Domain Errors

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// The upstream service could not be reached or the body could not be read
    Transport(String),
    /// The upstream service answered with a non-success status
    Upstream { status: u16, body: String },
    /// Invalid configuration value
    Config(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Transport(msg) => write!(f, "Transport error: {}", msg),
            DomainError::Upstream { status, body } if body.is_empty() => {
                write!(f, "Upstream returned {}", status)
            }
            DomainError::Upstream { status, body } => {
                write!(f, "Upstream returned {}: {}", status, body)
            }
            DomainError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
