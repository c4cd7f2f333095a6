//! Geometry snapshots handed to dispatch by the host.
//!
//! The engine never queries the host; adapters assemble one `Geometry` per
//! event from whatever the host reports and pass it in.

use serde::{Deserialize, Serialize};

/// A 2D point in page coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Container bounding box in viewport coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    pub top: f32,
    pub height: f32,
    pub bottom: f32,
}

impl ContainerRect {
    /// Box with `bottom` derived from `top + height`.
    #[inline]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height,
            bottom: top + height,
        }
    }
}

/// Everything the engine reads about the host for one event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub container: ContainerRect,
    pub viewport_height: f32,
    /// Cumulative page offset of the container (the adapter sums the
    /// offset-parent chain). Only pointer math reads it.
    #[serde(default)]
    pub origin: Point,
}

impl Geometry {
    #[inline]
    pub fn new(container: ContainerRect, viewport_height: f32) -> Self {
        Self {
            container,
            viewport_height,
            origin: Point::default(),
        }
    }

    #[inline]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }
}
