#![allow(dead_code)]
//! Kineto Interact Core (engine-agnostic)
//!
//! Binds declarative positional actions to host input signals and drives an
//! external player's playback. This crate holds the data model, sampling,
//! first-match resolution, the per-mode transition tables, and the engine
//! lifecycle. Hosts (see the wasm adapter) own listeners, geometry reads,
//! and the player reference itself.

pub mod actions;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod geometry;
pub mod mode;
pub mod outputs;
pub mod playback;
pub mod sampling;

// Re-exports for consumers (adapters)
pub use actions::{Action, ActionKind, ActionSet, FrameSpan};
pub use config::{parse_config_json, Config};
pub use engine::Engine;
pub use error::InteractError;
pub use events::InputEvent;
pub use geometry::{ContainerRect, Geometry, Point};
pub use mode::{Listener, Mode};
pub use outputs::Outcome;
pub use playback::PlayerHandle;
pub use sampling::{axis_percent, pointer_sample, visibility_sample, PointerSample, Sample};
