//! Interaction modes and the host listeners they require.

use serde::{Deserialize, Serialize};

use crate::actions::ActionKind;

/// Which input signal drives the engine. Fixed at construction; switching
/// modes means building a new engine.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Scroll,
    Hover,
    MousePosition,
}

/// One host listener the adapter keeps attached while the engine is active.
/// Scroll is page-level; the pointer listeners target the container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Listener {
    Scroll,
    PointerEnter,
    PointerLeave,
    PointerMove,
}

impl Mode {
    /// Listener set for this mode.
    #[inline]
    pub fn listeners(&self) -> &'static [Listener] {
        match self {
            Mode::Scroll => &[Listener::Scroll],
            Mode::Hover => &[Listener::PointerEnter, Listener::PointerLeave],
            Mode::MousePosition => &[Listener::PointerMove],
        }
    }

    /// Whether an action kind has a transition in this mode's table.
    #[inline]
    pub fn supports(&self, kind: ActionKind) -> bool {
        match self {
            Mode::Scroll => matches!(
                kind,
                ActionKind::Seek | ActionKind::Loop | ActionKind::Play | ActionKind::Stop
            ),
            Mode::Hover => matches!(
                kind,
                ActionKind::Loop | ActionKind::Play | ActionKind::Stop
            ),
            Mode::MousePosition => {
                matches!(kind, ActionKind::SeekXAxis | ActionKind::SeekYAxis)
            }
        }
    }
}
