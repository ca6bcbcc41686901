//! Layout math for the progress widgets
//!
//! Nothing here is stored on a widget: every paint pass recomputes the
//! geometry from the bounds it is handed.

use iced::{Point, Radians, Rectangle, Size};

/// Degrees at which every sweep starts (12 o'clock)
pub const START_DEGREES: f32 = -90.0;

/// How much the inner disc is grown on each side to cover anti-aliasing seams
const INNER_BLEED: f32 = 0.5;

/// A single-axis layout constraint handed down by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The host decided the size; use it
    Exactly(f32),
    /// Use the desired size, but no more than this
    AtMost(f32),
    /// No constraint
    Unspecified,
}

/// Resolve a desired size against a host constraint
pub fn resolve_size(desired: f32, spec: MeasureSpec) -> f32 {
    match spec {
        MeasureSpec::Exactly(size) => size,
        MeasureSpec::AtMost(limit) => desired.min(limit),
        MeasureSpec::Unspecified => desired,
    }
}

/// Measure a square widget of intrinsic size `drawable_size`
pub fn measure(drawable_size: f32, width: MeasureSpec, height: MeasureSpec) -> Size {
    Size::new(
        resolve_size(drawable_size, width),
        resolve_size(drawable_size, height),
    )
}

/// Per-paint geometry of a progress widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Square of the intrinsic drawable size, centred in the bounds
    pub outer: Rectangle,
    /// Disc the progress is drawn into
    pub inner: Rectangle,
    /// Anchor of the centred label
    pub center: Point,
}

impl Geometry {
    pub fn compute(bounds: Size, drawable_size: f32, inner_size: f32) -> Self {
        let outer = Rectangle::new(
            Point::new(
                centered_offset(bounds.width, drawable_size),
                centered_offset(bounds.height, drawable_size),
            ),
            Size::new(drawable_size, drawable_size),
        );

        let inner = Rectangle::new(
            Point::new(
                centered_offset(bounds.width, inner_size) - INNER_BLEED,
                centered_offset(bounds.height, inner_size) - INNER_BLEED,
            ),
            Size::new(inner_size + INNER_BLEED * 2.0, inner_size + INNER_BLEED * 2.0),
        );

        let center = Point::new(
            (bounds.width as i32 / 2) as f32,
            (bounds.height as i32 / 2) as f32,
        );

        Self {
            outer,
            inner,
            center,
        }
    }

    /// Centre of the inner disc
    pub fn disc_center(&self) -> Point {
        self.inner.center()
    }

    /// Radius of the inner disc
    pub fn disc_radius(&self) -> f32 {
        self.inner.width / 2.0
    }
}

/// Whole-pixel offset that centres `size` in `extent`, truncating like the
/// integer layout math of the host toolkit
fn centered_offset(extent: f32, size: f32) -> f32 {
    ((extent as i32 - size as i32) / 2) as f32
}

/// Start and end angles of a pie sweep, or `None` when nothing is drawn.
///
/// The stored sweep is unclamped; only the drawn part is limited to one turn.
pub fn pie_angles(sweep_degrees: i32) -> Option<(Radians, Radians)> {
    if sweep_degrees <= 0 {
        return None;
    }
    let sweep = sweep_degrees.min(360) as f32;
    Some((
        Radians(START_DEGREES.to_radians()),
        Radians((START_DEGREES + sweep).to_radians()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_size_follows_spec_mode() {
        assert_eq!(resolve_size(48.0, MeasureSpec::Exactly(100.0)), 100.0);
        assert_eq!(resolve_size(48.0, MeasureSpec::Exactly(10.0)), 10.0);
        assert_eq!(resolve_size(48.0, MeasureSpec::AtMost(100.0)), 48.0);
        assert_eq!(resolve_size(48.0, MeasureSpec::AtMost(30.0)), 30.0);
        assert_eq!(resolve_size(48.0, MeasureSpec::Unspecified), 48.0);
    }

    #[test]
    fn measure_reports_intrinsic_square() {
        let size = measure(48.0, MeasureSpec::Unspecified, MeasureSpec::AtMost(500.0));
        assert_eq!(size, Size::new(48.0, 48.0));

        let constrained = measure(48.0, MeasureSpec::Exactly(64.0), MeasureSpec::AtMost(20.0));
        assert_eq!(constrained, Size::new(64.0, 20.0));
    }

    #[test]
    fn geometry_is_centred() {
        let geometry = Geometry::compute(Size::new(100.0, 60.0), 48.0, 28.0);

        assert_eq!(geometry.outer.x, 26.0);
        assert_eq!(geometry.outer.y, 6.0);
        assert_eq!(geometry.outer.width, 48.0);

        assert_eq!(geometry.inner.x, 35.5);
        assert_eq!(geometry.inner.y, 15.5);
        assert_eq!(geometry.inner.width, 29.0);

        assert_eq!(geometry.center, Point::new(50.0, 30.0));
        assert_eq!(geometry.disc_center(), Point::new(50.0, 30.0));
        assert_eq!(geometry.disc_radius(), 14.5);
    }

    #[test]
    fn geometry_truncates_odd_offsets() {
        let geometry = Geometry::compute(Size::new(49.0, 49.0), 48.0, 28.0);
        // (49 - 48) / 2 == 0 in integer math
        assert_eq!(geometry.outer.x, 0.0);
        assert_eq!(geometry.center, Point::new(24.0, 24.0));
    }

    #[test]
    fn pie_angles_start_at_twelve_oclock() {
        assert_eq!(pie_angles(0), None);
        assert_eq!(pie_angles(-90), None);

        let (start, end) = pie_angles(90).unwrap();
        assert!((start.0 + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(end.0.abs() < 1e-6);

        let (start, end) = pie_angles(720).unwrap();
        assert!((end.0 - start.0 - std::f32::consts::TAU).abs() < 1e-5);
    }
}
