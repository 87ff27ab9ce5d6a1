use std::fmt;
use std::io;
use thiserror::Error;

/// Which side of a trip an unresolved input belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Starting,
    Destination,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Starting => write!(f, "Starting"),
            Role::Destination => write!(f, "Destination"),
        }
    }
}

#[derive(Error, Debug)]
pub enum HallwayError {
    #[error("room '{0}' not found.")]
    RoomNotFound(String),
    #[error("{role} room '{input}' not found.")]
    UnresolvedRoom { role: Role, input: String },
    #[error("Layout error: {0}")]
    LayoutError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl HallwayError {
    /// Attach the trip side to a resolver miss. Other variants pass through.
    pub fn with_role(self, role: Role) -> Self {
        match self {
            HallwayError::RoomNotFound(input) => HallwayError::UnresolvedRoom { role, input },
            other => other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HallwayError::RoomNotFound(_) | HallwayError::UnresolvedRoom { .. }
        )
    }
}
