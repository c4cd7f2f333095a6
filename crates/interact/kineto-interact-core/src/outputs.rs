//! Dispatch outcomes surfaced to hosts and tests.

use serde::{Deserialize, Serialize};

use crate::actions::ActionKind;

/// What a single dispatch did. Dispatch itself never fails; every irregular
/// path is a variant here, so hosts and tests can observe skips that the
/// player never sees.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Outcome {
    /// A transition ran for the matched action.
    Applied(ActionKind),
    /// The engine is stopped; the player was not touched.
    Inactive,
    /// The event kind is not handled by the configured mode.
    Ignored,
    /// No sample: the container is outside the tracked window.
    OutOfView,
    /// A sample was taken but no action range contained it.
    NoMatch,
    /// The matched action's kind has no transition in this mode.
    Unsupported,
    /// The matched action's data cannot drive its transition; details were
    /// logged where they were detected.
    Invalid,
}

impl Outcome {
    /// Whether this dispatch reached a transition table.
    #[inline]
    pub fn applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }
}
