use crate::orbit::{NARROW_BREAKPOINT, NARROW_SCALE};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Offset of a feature from the pivot for a given ring angle and radius.
///
/// Viewports narrower than [`NARROW_BREAKPOINT`] shrink the ring by
/// [`NARROW_SCALE`]; non-positive widths count as narrow. The result is
/// relative to the dashboard center, not absolute screen coordinates.
pub fn position(angle_degrees: f64, base_radius: f64, viewport_width: f64) -> Point {
    let radians = angle_degrees * PI / 180.0;
    let scaled_radius = if viewport_width < NARROW_BREAKPOINT {
        base_radius * NARROW_SCALE
    } else {
        base_radius
    };
    Point::new(radians.cos() * scaled_radius, radians.sin() * scaled_radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_offset_lies_on_scaled_ring() {
        for angle in [0.0, 45.0, 72.0, 135.0, 216.0, 288.0, 359.0] {
            for (width, expected_radius) in [(1024.0, 120.0), (767.9, 120.0 * NARROW_SCALE)] {
                let p = position(angle, 120.0, width);
                let r = (p.x * p.x + p.y * p.y).sqrt();
                assert!(
                    (r - expected_radius).abs() < EPSILON,
                    "angle {angle} width {width}: radius {r}"
                );
            }
        }
    }

    #[test]
    fn test_wide_viewport_scenario() {
        // primary ring entry at 72 degrees, desktop width
        let p = position(72.0, 120.0, 1024.0);
        assert!((p.x - 37.08).abs() < 0.01);
        assert!((p.y - 114.13).abs() < 0.01);
    }

    #[test]
    fn test_narrow_viewport_scenario() {
        let p = position(72.0, 120.0, 400.0);
        assert!((p.x - 25.96).abs() < 0.01);
        assert!((p.y - 79.89).abs() < 0.01);
    }

    #[test]
    fn test_breakpoint_boundary() {
        let at = position(0.0, 100.0, NARROW_BREAKPOINT);
        let below = position(0.0, 100.0, NARROW_BREAKPOINT - 1.0);
        assert!((at.x - 100.0).abs() < EPSILON);
        assert!((below.x - 70.0).abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_widths_are_narrow() {
        for width in [0.0, -1.0, -10_000.0] {
            let p = position(0.0, 100.0, width);
            assert!((p.x - 70.0).abs() < EPSILON);
            assert!(p.y.abs() < EPSILON);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = position(123.4, 80.0, 500.0);
        let b = position(123.4, 80.0, 500.0);
        assert_eq!(a, b);
    }
}
