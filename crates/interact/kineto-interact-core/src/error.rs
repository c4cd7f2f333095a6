//! Error types for the interactivity engine.

use serde::{Deserialize, Serialize};

use crate::actions::ActionKind;
use crate::mode::Mode;

/// Configuration and dispatch irregularities.
///
/// Only `PlayerUnresolved` is fatal, and only at construction time in an
/// adapter. Everything else is a diagnostic: construction logs it and the
/// offending action is skipped per event.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum InteractError {
    /// No usable player reference could be resolved
    #[error("Player could not be resolved: {reason}")]
    PlayerUnresolved { reason: String },

    /// Action progress range is malformed
    #[error("Action {index} has an invalid range [{start}, {end}]")]
    InvalidRange { index: usize, start: f32, end: f32 },

    /// Action lacks the frame data its kind requires
    #[error("Action {index} ({kind:?}) is missing frame data")]
    MissingFrames { index: usize, kind: ActionKind },

    /// Action kind has no transition in the configured mode
    #[error("Action {index} ({kind:?}) is not driven by {mode:?} mode")]
    UnsupportedKind {
        index: usize,
        kind: ActionKind,
        mode: Mode,
    },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },
}

impl InteractError {
    /// Check whether dispatch may continue after this error
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::PlayerUnresolved { .. } | Self::Config { .. })
    }

    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::PlayerUnresolved { .. } => "player",
            Self::InvalidRange { .. }
            | Self::MissingFrames { .. }
            | Self::UnsupportedKind { .. } => "validation",
            Self::Config { .. } => "config",
        }
    }
}

impl From<serde_json::Error> for InteractError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_recoverability() {
        let recoverable = InteractError::MissingFrames {
            index: 2,
            kind: ActionKind::Loop,
        };
        assert!(recoverable.is_recoverable());

        let fatal = InteractError::PlayerUnresolved {
            reason: "nothing configured".to_string(),
        };
        assert!(!fatal.is_recoverable());
    }

    #[test]
    fn test_error_categories() {
        let validation = InteractError::InvalidRange {
            index: 0,
            start: 0.9,
            end: 0.1,
        };
        assert_eq!(validation.category(), "validation");

        let player = InteractError::PlayerUnresolved {
            reason: "selector matched nothing".to_string(),
        };
        assert_eq!(player.category(), "player");
    }

    #[test]
    fn test_serialization() {
        let error = InteractError::UnsupportedKind {
            index: 1,
            kind: ActionKind::SeekXAxis,
            mode: Mode::Hover,
        };
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: InteractError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);
    }
}
