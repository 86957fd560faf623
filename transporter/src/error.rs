use std::fmt;

use crate::teleport::TransitionPolicy;

/// Errors raised by the teleport system.
///
/// Misses, rejected categories and zero-length transitions are normal outcomes
/// and never show up here.
#[derive(Debug, Clone, PartialEq)]
pub enum TeleportError {
    /// A configuration value failed validation at construction time
    InvalidConfig { field: &'static str, reason: String },

    /// `begin` was called while another transition was still running
    TransitionActive {
        policy: TransitionPolicy,
        progress: f32,
    },
}

impl fmt::Display for TeleportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeleportError::InvalidConfig { field, reason } => {
                write!(f, "Invalid teleport configuration '{}': {}", field, reason)
            }
            TeleportError::TransitionActive { policy, progress } => {
                write!(
                    f,
                    "A {:?} transition is already active (progress {:.2})",
                    policy, progress
                )
            }
        }
    }
}

impl std::error::Error for TeleportError {}

impl TeleportError {
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        TeleportError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
