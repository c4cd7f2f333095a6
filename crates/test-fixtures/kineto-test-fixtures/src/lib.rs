use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    configs: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod configs {
    use super::*;
    use kineto_interact_core::{parse_config_json, Config};

    pub fn keys() -> Vec<String> {
        MANIFEST.configs.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.configs, "config", name)?;
        read_to_string(rel)
    }

    pub fn load(name: &str) -> Result<Config> {
        let text = json(name)?;
        parse_config_json(&text)
            .map_err(|err| anyhow!("failed to parse config fixture '{name}': {err}"))
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.configs, "config", name)?;
        Ok(resolve_path(rel))
    }
}

pub mod player {
    use kineto_interact_core::{FrameSpan, PlayerHandle};

    /// One recorded call against the mock player.
    #[derive(Clone, Debug, PartialEq)]
    pub enum PlayerCall {
        PlaySegments { span: FrameSpan, force: bool },
        ResetSegments,
        Play,
        Stop,
        GoToAndStop { frame: f32 },
        SeekToPercent { percent: u32 },
        SetLoop { looping: bool },
    }

    /// Player double that records every call and answers reads from
    /// scripted values. Reads stay constant unless a test mutates them.
    #[derive(Clone, Debug)]
    pub struct RecordingPlayer {
        pub calls: Vec<PlayerCall>,
        pub paused: bool,
        pub total_frames: f32,
    }

    impl RecordingPlayer {
        pub fn new(total_frames: f32) -> Self {
            Self {
                calls: Vec::new(),
                paused: false,
                total_frames,
            }
        }

        pub fn with_paused(mut self, paused: bool) -> Self {
            self.paused = paused;
            self
        }

        /// Calls made since construction or the last take.
        pub fn take_calls(&mut self) -> Vec<PlayerCall> {
            std::mem::take(&mut self.calls)
        }
    }

    impl PlayerHandle for RecordingPlayer {
        fn play_segments(&mut self, span: FrameSpan, force: bool) {
            self.calls.push(PlayerCall::PlaySegments { span, force });
        }

        fn reset_segments(&mut self) {
            self.calls.push(PlayerCall::ResetSegments);
        }

        fn play(&mut self) {
            self.calls.push(PlayerCall::Play);
        }

        fn stop(&mut self) {
            self.calls.push(PlayerCall::Stop);
        }

        fn go_to_and_stop(&mut self, frame: f32) {
            self.calls.push(PlayerCall::GoToAndStop { frame });
        }

        fn seek_to_percent(&mut self, percent: u32) {
            self.calls.push(PlayerCall::SeekToPercent { percent });
        }

        fn is_paused(&self) -> bool {
            self.paused
        }

        fn set_loop(&mut self, looping: bool) {
            self.calls.push(PlayerCall::SetLoop { looping });
        }

        fn total_frames(&self) -> f32 {
            self.total_frames
        }
    }
}

pub mod geometry {
    use kineto_interact_core::{ContainerRect, Geometry, Point};

    /// Geometry with the container `top` pixels below the viewport top.
    pub fn container_at(top: f32, height: f32, viewport_height: f32) -> Geometry {
        Geometry::new(ContainerRect::new(top, height), viewport_height)
    }

    /// Geometry placed so the visibility progress lands exactly on
    /// `progress`.
    pub fn at_progress(progress: f32, height: f32, viewport_height: f32) -> Geometry {
        let top = viewport_height - progress * (viewport_height + height);
        Geometry::new(ContainerRect::new(top, height), viewport_height)
    }

    /// Pointer-mode geometry: container box plus its page origin.
    pub fn with_origin(top: f32, height: f32, viewport_height: f32, origin: Point) -> Geometry {
        container_at(top, height, viewport_height).with_origin(origin)
    }
}
