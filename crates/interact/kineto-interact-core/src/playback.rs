//! Transition tables: from a matched action and its triggering signal to
//! concrete player calls.
//!
//! The tables speak only through [`PlayerHandle`]; they never touch the
//! host. A table errors only when the matched action's own data cannot
//! drive its transition, and the engine downgrades that to a logged skip.

use crate::actions::{Action, ActionKind, FrameSpan};
use crate::error::InteractError;
use crate::geometry::ContainerRect;
use crate::mode::Mode;
use crate::sampling::{axis_percent, PointerSample, Sample};

/// Capability surface of the external player. Adapters wrap the real
/// player; tests record calls.
pub trait PlayerHandle {
    /// Confine playback to a frame window. `force` restarts the window even
    /// mid-flight.
    fn play_segments(&mut self, span: FrameSpan, force: bool);
    /// Clear any segment confinement back to the full animation.
    fn reset_segments(&mut self);
    fn play(&mut self);
    fn stop(&mut self);
    /// Jump to a frame and hold there. Frame units, not time.
    fn go_to_and_stop(&mut self, frame: f32);
    /// Jump to a whole-percent position of the full timeline.
    fn seek_to_percent(&mut self, percent: u32);
    fn is_paused(&self) -> bool;
    /// Write the player's loop flag.
    fn set_loop(&mut self, looping: bool);
    fn total_frames(&self) -> f32;
}

fn require_frames(index: usize, action: &Action) -> Result<FrameSpan, InteractError> {
    action.frames.ok_or(InteractError::MissingFrames {
        index,
        kind: action.kind,
    })
}

/// Frame reached by a scroll seek at `progress`. The mapping spans the
/// player's full timeline, not the action's frame window.
fn seek_frame(progress: f32, action: &Action, total_frames: f32) -> f32 {
    (((progress - action.start) / (action.end - action.start)) * total_frames).ceil()
}

/// Scroll-mode table, run once per scroll tick for the matched action.
pub fn apply_scroll<P: PlayerHandle>(
    player: &mut P,
    index: usize,
    action: &Action,
    sample: &Sample,
) -> Result<(), InteractError> {
    match action.kind {
        ActionKind::Seek => {
            let span = require_frames(index, action)?;
            let frame = seek_frame(sample.progress, action, player.total_frames());
            if !frame.is_finite() {
                return Err(InteractError::InvalidRange {
                    index,
                    start: action.start,
                    end: action.end,
                });
            }
            player.play_segments(span, true);
            player.go_to_and_stop(frame);
        }
        ActionKind::Loop => {
            if player.is_paused() {
                let span = require_frames(index, action)?;
                player.play_segments(span, true);
            }
        }
        ActionKind::Play => {
            if player.is_paused() {
                player.reset_segments();
                player.play();
            }
        }
        ActionKind::Stop => {
            let span = require_frames(index, action)?;
            player.go_to_and_stop(span.start);
            player.stop();
        }
        kind => {
            return Err(InteractError::UnsupportedKind {
                index,
                kind,
                mode: Mode::Scroll,
            });
        }
    }
    Ok(())
}

/// Hover-mode table for the pointer entering the container.
pub fn apply_hover_enter<P: PlayerHandle>(
    player: &mut P,
    index: usize,
    action: &Action,
) -> Result<(), InteractError> {
    match action.kind {
        ActionKind::Loop => {
            if player.is_paused() {
                let span = require_frames(index, action)?;
                player.play_segments(span, true);
            }
        }
        ActionKind::Play => {
            if player.is_paused() {
                let span = require_frames(index, action)?;
                player.reset_segments();
                player.play_segments(span, true);
            }
        }
        ActionKind::Stop => {
            let span = require_frames(index, action)?;
            player.go_to_and_stop(span.start);
            player.stop();
        }
        kind => {
            return Err(InteractError::UnsupportedKind {
                index,
                kind,
                mode: Mode::Hover,
            });
        }
    }
    Ok(())
}

/// Hover-mode table for the pointer leaving. Not the mirror image of
/// entering: a `stop` action resumes motion on leave.
pub fn apply_hover_leave<P: PlayerHandle>(
    player: &mut P,
    index: usize,
    action: &Action,
) -> Result<(), InteractError> {
    match action.kind {
        ActionKind::Loop | ActionKind::Play => player.stop(),
        ActionKind::Stop => {
            let span = require_frames(index, action)?;
            player.play_segments(span, true);
        }
        kind => {
            return Err(InteractError::UnsupportedKind {
                index,
                kind,
                mode: Mode::Hover,
            });
        }
    }
    Ok(())
}

/// Pointer-position table: axis seeks as whole percentages of the timeline.
pub fn apply_pointer<P: PlayerHandle>(
    player: &mut P,
    index: usize,
    action: &Action,
    pointer: &PointerSample,
    container: &ContainerRect,
) -> Result<(), InteractError> {
    match action.kind {
        ActionKind::SeekYAxis => {
            if let Some(percent) = axis_percent(pointer.y, container.height) {
                player.seek_to_percent(percent);
            }
        }
        // The x axis normalizes by the container's bottom edge, not its
        // width; existing content is scaled to that divisor.
        ActionKind::SeekXAxis => {
            if let Some(percent) = axis_percent(pointer.x, container.bottom) {
                player.seek_to_percent(percent);
            }
        }
        kind => {
            return Err(InteractError::UnsupportedKind {
                index,
                kind,
                mode: Mode::MousePosition,
            });
        }
    }
    Ok(())
}

/// Candidate fraction for pointer-mode matching, per the action's axis.
/// Kinds without an axis never match in pointer mode.
pub(crate) fn axis_fraction(
    action: &Action,
    pointer: &PointerSample,
    container: &ContainerRect,
) -> Option<f32> {
    let (offset, extent) = match action.kind {
        ActionKind::SeekYAxis => (pointer.y, container.height),
        ActionKind::SeekXAxis => (pointer.x, container.bottom),
        _ => return None,
    };
    if !(extent.is_finite() && extent > 0.0) {
        return None;
    }
    let fraction = offset / extent;
    fraction.is_finite().then_some(fraction)
}
