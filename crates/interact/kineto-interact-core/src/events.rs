//! Host input signals delivered to the engine.

use serde::{Deserialize, Serialize};

/// One input signal from the host. Pointer coordinates are page
/// coordinates; the engine subtracts the container origin itself.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The page scrolled or resized.
    Scroll,
    /// The pointer entered the container.
    PointerEnter,
    /// The pointer left the container.
    PointerLeave,
    /// The pointer moved over the container.
    PointerMove { x: f32, y: f32 },
}
