// ABOUTME: Pure numeric helpers for panel rectangles.
// ABOUTME: Clamping to container bounds, overlap tests, and size string parsing.

use serde::{Deserialize, Serialize};

/// Rectangle in container pixels, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Size of the bounding workspace
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ContainerSize {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl ContainerSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Area shared with another rectangle (0 when disjoint or only touching)
    pub fn overlap_area(&self, other: &Rect) -> f32 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w <= 0.0 || h <= 0.0 {
            0.0
        } else {
            w * h
        }
    }

    pub fn overlaps(&self, other: &Rect, epsilon: f32) -> bool {
        self.overlap_area(other) > epsilon
    }

    /// Replace NaN/infinite components with 0
    pub fn sanitized(self) -> Self {
        Self {
            x: sanitize(self.x),
            y: sanitize(self.y),
            width: sanitize(self.width),
            height: sanitize(self.height),
        }
    }
}

/// Clamp `value` into `[min, max]`. When the range is inverted the lower bound wins.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Force a rectangle to respect its minimum size and the container bounds.
///
/// Minimums take precedence over the container: a panel whose minimum is
/// larger than the container is pinned at the origin and overflows.
pub fn clamp_to_bounds(
    rect: Rect,
    min_width: f32,
    min_height: f32,
    container: ContainerSize,
) -> Rect {
    let rect = rect.sanitized();
    let min_width = sanitize(min_width).max(0.0);
    let min_height = sanitize(min_height).max(0.0);

    let width = clamp(rect.width, min_width, container.width.max(min_width));
    let height = clamp(rect.height, min_height, container.height.max(min_height));

    Rect {
        x: clamp(rect.x, 0.0, container.width - width),
        y: clamp(rect.y, 0.0, container.height - height),
        width,
        height,
    }
}

/// Parse a size value such as `"400"`, `"400px"` or `" 12.5 "` into pixels.
/// Anything that is not a finite number is treated as 0.
pub fn parse_size(text: &str) -> f32 {
    let trimmed = text.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    digits.parse::<f32>().map(sanitize).unwrap_or(0.0)
}

/// Replace NaN and infinities with 0
pub fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 400.0, 300.0);
        let b = Rect::new(400.0, 0.0, 400.0, 300.0);
        assert_eq!(a.overlap_area(&b), 0.0);
        assert!(!a.overlaps(&b, 0.5));
    }

    #[test]
    fn overlap_area_is_intersection() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 80.0, 100.0, 100.0);
        assert!((a.overlap_area(&b) - 50.0 * 20.0).abs() < 0.001);
        assert!(a.overlaps(&b, 0.5));
    }

    #[test]
    fn clamp_prefers_lower_bound_when_inverted() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(5.0, 4.0, 2.0), 4.0);
    }

    #[test]
    fn clamp_to_bounds_pulls_rect_inside_container() {
        let container = ContainerSize::new(800.0, 600.0);
        let rect = clamp_to_bounds(Rect::new(700.0, -20.0, 200.0, 100.0), 0.0, 0.0, container);
        assert_eq!(rect, Rect::new(600.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn clamp_to_bounds_enforces_minimums() {
        let container = ContainerSize::new(800.0, 600.0);
        let rect = clamp_to_bounds(Rect::new(10.0, 10.0, 5.0, 5.0), 120.0, 80.0, container);
        assert_eq!(rect.width, 120.0);
        assert_eq!(rect.height, 80.0);
    }

    #[test]
    fn minimum_wins_over_small_container() {
        let container = ContainerSize::new(100.0, 100.0);
        let rect = clamp_to_bounds(Rect::new(50.0, 50.0, 150.0, 50.0), 150.0, 0.0, container);
        assert_eq!(rect.width, 150.0);
        assert_eq!(rect.x, 0.0);
    }

    #[test]
    fn nan_geometry_becomes_zero_before_clamping() {
        let container = ContainerSize::new(800.0, 600.0);
        let rect = clamp_to_bounds(Rect::new(f32::NAN, 10.0, f32::NAN, 50.0), 40.0, 0.0, container);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.width, 40.0);
    }

    #[test]
    fn parse_size_accepts_plain_and_px() {
        assert_eq!(parse_size("400"), 400.0);
        assert_eq!(parse_size("400px"), 400.0);
        assert_eq!(parse_size(" 12.5 "), 12.5);
    }

    #[test]
    fn parse_size_treats_garbage_as_zero() {
        assert_eq!(parse_size("wide"), 0.0);
        assert_eq!(parse_size(""), 0.0);
        assert_eq!(parse_size("NaN"), 0.0);
        assert_eq!(parse_size("inf"), 0.0);
    }
}
