//! Common error infrastructure for scout-core.
//!
//! No error in this crate is allowed to abort a tick. Policies report
//! invariant violations as [`PolicyError`], which the controller logs and
//! turns into a zero step; [`ConfigError`] is only produced while setting a
//! mission up, before any decision is made.

use crate::state::{ControlState, Coordinate};

/// Severity level of an error, used for logging and recovery decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the next tick may succeed.
    Recoverable,

    /// Invalid input, should not be retried unchanged.
    Validation,

    /// A state the transition table should have ruled out. Indicates a bug.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all scout-core errors.
pub trait ScoutError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Failures raised by movement policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolicyError {
    #[error("{state} policy ran without a landmark in view")]
    LandmarkNotInView { state: ControlState },

    #[error("{state} policy ran before the agent was oriented")]
    NotOriented { state: ControlState },

    #[error("{state} policy needs a home outpost but none is assigned")]
    NoHome { state: ControlState },
}

impl ScoutError for PolicyError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LandmarkNotInView { .. } | Self::NotOriented { .. } => ErrorSeverity::Internal,
            Self::NoHome { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LandmarkNotInView { .. } => "policy.landmark_not_in_view",
            Self::NotOriented { .. } => "policy.not_oriented",
            Self::NoHome { .. } => "policy.no_home",
        }
    }
}

/// Invalid mission parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    EmptyBoard,

    #[error("board size {board_size} exceeds the maximum of {max}")]
    BoardTooLarge { board_size: u32, max: u32 },

    #[error("landmark {landmark} lies outside a board of size {board_size}")]
    LandmarkOffBoard {
        landmark: Coordinate,
        board_size: u32,
    },
}

impl ScoutError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyBoard => "config.empty_board",
            Self::BoardTooLarge { .. } => "config.board_too_large",
            Self::LandmarkOffBoard { .. } => "config.landmark_off_board",
        }
    }
}
