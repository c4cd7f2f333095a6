//! The interaction engine: lifecycle plus the per-event dispatch pass.

use tracing::{debug, warn};

use crate::actions::{ActionKind, ActionSet};
use crate::config::Config;
use crate::error::InteractError;
use crate::events::InputEvent;
use crate::geometry::Geometry;
use crate::mode::{Listener, Mode};
use crate::outputs::Outcome;
use crate::playback::{self, PlayerHandle};
use crate::sampling;

/// Binds an action set to a player and turns host events into playback
/// calls.
///
/// The engine owns no host resources. Adapters attach and detach the
/// listeners named by [`Mode::listeners`] around [`Engine::start`] and
/// [`Engine::stop`], and hand a fresh [`Geometry`] to every dispatch.
#[derive(Debug)]
pub struct Engine<P> {
    actions: ActionSet,
    mode: Mode,
    player: P,
    active: bool,
}

impl<P: PlayerHandle> Engine<P> {
    /// Build an engine from a parsed configuration and a resolved player.
    ///
    /// Never fails: configuration findings are logged as warnings and the
    /// offending actions are skipped when they match.
    pub fn new(config: Config, player: P) -> Self {
        let Config { actions, mode } = config;
        for (index, action) in actions.iter().enumerate() {
            if !mode.supports(action.kind) {
                let finding = InteractError::UnsupportedKind {
                    index,
                    kind: action.kind,
                    mode,
                };
                warn!(category = finding.category(), "{finding}");
            }
        }
        Self {
            actions: ActionSet::new(actions),
            mode,
            player,
            active: false,
        }
    }

    /// Mark the engine active. Idempotent; the adapter attaches listeners
    /// alongside this call.
    pub fn start(&mut self) {
        if !self.active {
            self.active = true;
            debug!(mode = ?self.mode, actions = self.actions.len(), "interaction started");
        }
    }

    /// Mark the engine inactive. Subsequent dispatches return
    /// [`Outcome::Inactive`] without touching the player.
    pub fn stop(&mut self) {
        if self.active {
            self.active = false;
            debug!("interaction stopped");
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Listeners the host must keep attached while the engine is active.
    #[inline]
    pub fn listeners(&self) -> &'static [Listener] {
        self.mode.listeners()
    }

    #[inline]
    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    #[inline]
    pub fn player(&self) -> &P {
        &self.player
    }

    #[inline]
    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    /// Run one complete sample, resolve, apply pass for a host event.
    ///
    /// Never panics and never errors: every irregular path maps to an
    /// [`Outcome`] variant, and data defects are logged where they are
    /// detected.
    pub fn dispatch(&mut self, event: InputEvent, geometry: &Geometry) -> Outcome {
        if !self.active {
            return Outcome::Inactive;
        }
        match (self.mode, event) {
            (Mode::Scroll, InputEvent::Scroll) => self.scroll_tick(geometry),
            (Mode::Hover, event @ (InputEvent::PointerEnter | InputEvent::PointerLeave)) => {
                self.hover_tick(geometry, event)
            }
            (Mode::MousePosition, InputEvent::PointerMove { x, y }) => {
                self.pointer_tick(geometry, x, y)
            }
            _ => Outcome::Ignored,
        }
    }

    fn scroll_tick(&mut self, geometry: &Geometry) -> Outcome {
        // Scroll reasserts the loop flag on every tick, before sampling; a
        // no-match tick still reasserts it.
        self.player.set_loop(true);
        let Some(sample) = sampling::visibility_sample(geometry) else {
            return Outcome::OutOfView;
        };
        let Some((index, action)) = self.actions.resolve(sample.progress) else {
            return Outcome::NoMatch;
        };
        let kind = action.kind;
        Self::finish(
            playback::apply_scroll(&mut self.player, index, action, &sample),
            kind,
        )
    }

    fn hover_tick(&mut self, geometry: &Geometry, event: InputEvent) -> Outcome {
        let Some(sample) = sampling::visibility_sample(geometry) else {
            return Outcome::OutOfView;
        };
        let Some((index, action)) = self.actions.resolve(sample.progress) else {
            return Outcome::NoMatch;
        };
        let kind = action.kind;
        let result = if matches!(event, InputEvent::PointerEnter) {
            playback::apply_hover_enter(&mut self.player, index, action)
        } else {
            playback::apply_hover_leave(&mut self.player, index, action)
        };
        Self::finish(result, kind)
    }

    fn pointer_tick(&mut self, geometry: &Geometry, x: f32, y: f32) -> Outcome {
        let pointer = sampling::pointer_sample(geometry, x, y);
        let container = geometry.container;
        let Some((index, action)) = self
            .actions
            .resolve_by(|action| playback::axis_fraction(action, &pointer, &container))
        else {
            return Outcome::NoMatch;
        };
        let kind = action.kind;
        Self::finish(
            playback::apply_pointer(&mut self.player, index, action, &pointer, &container),
            kind,
        )
    }

    fn finish(result: Result<(), InteractError>, kind: ActionKind) -> Outcome {
        match result {
            Ok(()) => Outcome::Applied(kind),
            Err(InteractError::UnsupportedKind { .. }) => Outcome::Unsupported,
            Err(err) => {
                warn!(category = err.category(), "action skipped: {err}");
                Outcome::Invalid
            }
        }
    }
}
