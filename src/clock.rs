//! Clock-face geometry.
//!
//! Maps a progress fraction onto a point on a circle, sweeping clockwise
//! from twelve o'clock. Coordinates are screen-style: `y` grows downwards.

use std::f64::consts::PI;

/// A point in screen coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An axis-aligned area in screen coordinates (`y` grows downwards).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Radius of the full-height circle scaled by `radius_scale`.
    pub fn radius(&self, radius_scale: f64) -> f64 {
        self.height / 2.0 * radius_scale
    }
}

/// Unit direction for `progress`: `(0, -1)` at zero, a full clockwise turn at one.
pub fn direction(progress: f64) -> (f64, f64) {
    if progress == 0.0 {
        return (0.0, -1.0);
    }
    let angle = PI - 2.0 * PI * progress;
    (angle.sin(), angle.cos())
}

/// End point of a clock hand of length `bounds.height / 2 * radius_scale`
/// starting at the centre of `bounds`.
pub fn angle_endpoint(bounds: Rect, progress: f64, radius_scale: f64) -> Point {
    let center = bounds.center();
    let radius = bounds.radius(radius_scale);
    let (dx, dy) = direction(progress);
    Point {
        x: center.x + dx * radius,
        y: center.y + dy * radius,
    }
}

/// Shift `p` up by `inset` times the height of `bounds`.
///
/// Used by the renderer so the hand's pivot sits slightly above true centre.
pub fn lift(p: Point, bounds: Rect, inset: f64) -> Point {
    Point {
        x: p.x,
        y: p.y - bounds.height * inset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn zero_progress_points_straight_up() {
        for (bounds, scale) in [
            (Rect::new(0.0, 0.0, 100.0, 100.0), 1.0),
            (Rect::new(10.0, 20.0, 300.0, 80.0), 0.5),
            (Rect::new(-5.0, -5.0, 1.0, 2.0), 3.0),
        ] {
            let p = angle_endpoint(bounds, 0.0, scale);
            let c = bounds.center();
            assert_eq!(p.x, c.x);
            assert_eq!(p.y, c.y - bounds.radius(scale));
        }
    }

    #[test]
    fn quarter_turns_sweep_clockwise() {
        let b = Rect::new(0.0, 0.0, 200.0, 200.0);
        // Centre (100, 100), radius 100.
        assert!(close(angle_endpoint(b, 0.25, 1.0), Point { x: 200.0, y: 100.0 }));
        assert!(close(angle_endpoint(b, 0.5, 1.0), Point { x: 100.0, y: 200.0 }));
        assert!(close(angle_endpoint(b, 0.75, 1.0), Point { x: 0.0, y: 100.0 }));
        assert!(close(angle_endpoint(b, 1.0, 1.0), Point { x: 100.0, y: 0.0 }));
    }

    #[test]
    fn endpoints_lie_on_the_scaled_circle() {
        let b = Rect::new(3.0, 7.0, 120.0, 60.0);
        let scale = 0.8;
        let c = b.center();
        for i in 1..100 {
            let p = angle_endpoint(b, i as f64 / 100.0, scale);
            let r = ((p.x - c.x).powi(2) + (p.y - c.y).powi(2)).sqrt();
            assert!((r - 24.0).abs() < EPS, "radius {r} at step {i}");
        }
    }

    #[test]
    fn direction_is_periodic_in_whole_turns() {
        for p in [0.1, 0.33, 0.5, 0.9] {
            let (ax, ay) = direction(p);
            let (bx, by) = direction(p + 1.0);
            assert!((ax - bx).abs() < EPS);
            assert!((ay - by).abs() < EPS);
        }
    }

    #[test]
    fn lift_moves_up_by_fraction_of_height() {
        let b = Rect::new(0.0, 0.0, 100.0, 200.0);
        let p = lift(Point { x: 5.0, y: 50.0 }, b, 0.07);
        assert_eq!(p.x, 5.0);
        assert!((p.y - 36.0).abs() < EPS);
    }
}
