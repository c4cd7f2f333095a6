//! Positional sampling: viewport visibility and container-relative pointer
//! math.
//!
//! Samples are ephemeral. Every dispatch computes them fresh from the
//! geometry snapshot and discards them; no positional state survives an
//! event.

use crate::geometry::Geometry;

/// Visibility sample for scroll and hover dispatch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    /// Container progress through the viewport, normalized to [0, 1].
    pub progress: f32,
    /// Container height, carried for pointer-axis math.
    pub height: f32,
    /// Container bottom edge, carried for the x-axis divisor.
    pub bottom: f32,
}

/// Pointer position in container-relative pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

/// Sample how far the container has travelled through the viewport.
///
/// `progress` is 0 when the container top sits at the viewport bottom and 1
/// when the container bottom clears the viewport top. Returns `None` when
/// the container is outside that window or the geometry is degenerate; both
/// are routine outcomes, not errors.
pub fn visibility_sample(geometry: &Geometry) -> Option<Sample> {
    let current = geometry.viewport_height - geometry.container.top;
    let max = geometry.viewport_height + geometry.container.height;
    let progress = current / max;
    if !progress.is_finite() || !(0.0..=1.0).contains(&progress) {
        return None;
    }
    Some(Sample {
        progress,
        height: geometry.container.height,
        bottom: geometry.container.bottom,
    })
}

/// Translate page coordinates into container-relative pixels.
#[inline]
pub fn pointer_sample(geometry: &Geometry, x: f32, y: f32) -> PointerSample {
    PointerSample {
        x: x - geometry.origin.x,
        y: y - geometry.origin.y,
    }
}

/// Whole percentage of `offset` within `extent`, rounded up and floored at
/// zero. `None` when the extent is not a positive finite number or the
/// quotient is not finite.
pub fn axis_percent(offset: f32, extent: f32) -> Option<u32> {
    if !(extent.is_finite() && extent > 0.0) {
        return None;
    }
    let ratio = offset / extent;
    if !ratio.is_finite() {
        return None;
    }
    Some((ratio * 100.0).ceil().max(0.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ContainerRect;

    #[test]
    fn test_visibility_progress() {
        let geometry = Geometry::new(ContainerRect::new(100.0, 400.0), 800.0);
        let sample = visibility_sample(&geometry).unwrap();
        assert!((sample.progress - 700.0 / 1200.0).abs() < 1e-6);
        assert_eq!(sample.height, 400.0);
        assert_eq!(sample.bottom, 500.0);
    }

    #[test]
    fn test_visibility_outside_window() {
        // Container fully below the viewport: negative progress.
        let below = Geometry::new(ContainerRect::new(1000.0, 300.0), 800.0);
        assert!(visibility_sample(&below).is_none());
        // Container scrolled past the top: progress above one.
        let above = Geometry::new(ContainerRect::new(-2000.0, 300.0), 800.0);
        assert!(visibility_sample(&above).is_none());
    }

    #[test]
    fn test_visibility_degenerate_geometry() {
        let nan = Geometry::new(ContainerRect::new(f32::NAN, 300.0), 800.0);
        assert!(visibility_sample(&nan).is_none());
        let zero = Geometry::new(ContainerRect::new(0.0, -800.0), 800.0);
        assert!(visibility_sample(&zero).is_none());
    }

    #[test]
    fn test_axis_percent_rounds_up() {
        assert_eq!(axis_percent(50.0, 200.0), Some(25));
        assert_eq!(axis_percent(1.0, 3.0), Some(34));
        assert_eq!(axis_percent(-10.0, 200.0), Some(0));
        assert_eq!(axis_percent(10.0, 0.0), None);
        assert_eq!(axis_percent(10.0, f32::NAN), None);
    }
}
