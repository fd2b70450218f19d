//! Pure layout computation for both charts.
//!
//! Everything here is coordinate math with no I/O, so the rendering
//! policies (arrowhead placement, viewport projection, journey column
//! layout) are unit-testable on their own.

use crate::geometry::{Point, Size};

/// Arrowhead distance from the destination node, in unit-square space.
pub const ARROWHEAD_OFFSET: f32 = 0.03;

/// Placement of a directional arrowhead on an edge segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrowhead {
    position: Point,
    angle_degrees: f32,
}

impl Arrowhead {
    /// Returns the arrowhead center position.
    pub fn position(self) -> Point {
        self.position
    }

    /// Returns the rotation angle in degrees, measured from the positive
    /// x-axis toward positive y.
    pub fn angle_degrees(self) -> f32 {
        self.angle_degrees
    }
}

/// Computes the arrowhead for a directed segment.
///
/// The arrowhead sits at `end − offset · direction` where `direction` is
/// the unit vector from `start` to `end`, and is oriented by
/// `atan2(dy, dx)` converted to degrees.
///
/// Returns `None` when the endpoints coincide; zero-length segments
/// produce no arrowhead.
pub fn arrowhead_for_segment(start: Point, end: Point, offset: f32) -> Option<Arrowhead> {
    let delta = end.sub_point(start);
    if delta.is_zero() {
        return None;
    }

    let length = delta.hypot();
    let direction = delta.scale(1.0 / length);
    Some(Arrowhead {
        position: end.sub_point(direction.scale(offset)),
        angle_degrees: delta.y().atan2(delta.x()).to_degrees(),
    })
}

/// Maps chart coordinates (y up) onto a pixel canvas (y down).
///
/// The plot area is a sub-rectangle of the canvas; the margins around it
/// hold the title and legend.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    x_range: (f32, f32),
    y_range: (f32, f32),
    origin: Point,
    plot: Size,
}

impl Viewport {
    /// Creates a viewport mapping the given chart ranges onto a plot area
    /// with top-left corner `origin` and pixel dimensions `plot`.
    pub fn new(x_range: (f32, f32), y_range: (f32, f32), origin: Point, plot: Size) -> Self {
        Self {
            x_range,
            y_range,
            origin,
            plot,
        }
    }

    /// Projects a chart-space point into canvas pixels, flipping the
    /// y-axis.
    pub fn project(&self, point: Point) -> Point {
        let fx = (point.x() - self.x_range.0) / (self.x_range.1 - self.x_range.0);
        let fy = (point.y() - self.y_range.0) / (self.y_range.1 - self.y_range.0);

        Point::new(
            self.origin.x() + fx * self.plot.width(),
            self.origin.y() + (1.0 - fy) * self.plot.height(),
        )
    }

    /// Pixels per chart unit along the x-axis.
    pub fn scale_x(&self) -> f32 {
        self.plot.width() / (self.x_range.1 - self.x_range.0)
    }

    /// Pixels per chart unit along the y-axis.
    pub fn scale_y(&self) -> f32 {
        self.plot.height() / (self.y_range.1 - self.y_range.0)
    }
}

/// Journey column x-coordinate in chart space.
pub const JOURNEY_COLUMN_X: f32 = 2.0;

/// Assigns chart-space positions to journey steps: a single column at
/// x = 2 with y descending from `step_count` down to 1, so the first step
/// lands at the top of the flipped canvas.
pub fn journey_positions(step_count: usize) -> Vec<Point> {
    (0..step_count)
        .map(|i| Point::new(JOURNEY_COLUMN_X, (step_count - i) as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_arrowhead_on_horizontal_segment() {
        // Nodes A(0,0) and B(1,0): direction (1,0), arrowhead at (0.97, 0).
        let arrowhead =
            arrowhead_for_segment(Point::new(0.0, 0.0), Point::new(1.0, 0.0), ARROWHEAD_OFFSET)
                .unwrap();

        assert_approx_eq!(f32, arrowhead.position().x(), 0.97);
        assert_approx_eq!(f32, arrowhead.position().y(), 0.0);
        assert_approx_eq!(f32, arrowhead.angle_degrees(), 0.0);
    }

    #[test]
    fn test_arrowhead_on_vertical_segment() {
        let arrowhead =
            arrowhead_for_segment(Point::new(0.5, 0.0), Point::new(0.5, 1.0), ARROWHEAD_OFFSET)
                .unwrap();

        assert_approx_eq!(f32, arrowhead.position().x(), 0.5);
        assert_approx_eq!(f32, arrowhead.position().y(), 0.97);
        assert_approx_eq!(f32, arrowhead.angle_degrees(), 90.0);
    }

    #[test]
    fn test_zero_length_segment_has_no_arrowhead() {
        let point = Point::new(0.3, 0.7);
        assert!(arrowhead_for_segment(point, point, ARROWHEAD_OFFSET).is_none());
    }

    #[test]
    fn test_viewport_projects_corners() {
        let viewport = Viewport::new(
            (0.0, 1.0),
            (0.0, 1.0),
            Point::new(40.0, 110.0),
            Size::new(720.0, 680.0),
        );

        // Chart origin maps to the bottom-left of the plot area.
        let bottom_left = viewport.project(Point::new(0.0, 0.0));
        assert_approx_eq!(f32, bottom_left.x(), 40.0);
        assert_approx_eq!(f32, bottom_left.y(), 790.0);

        let top_right = viewport.project(Point::new(1.0, 1.0));
        assert_approx_eq!(f32, top_right.x(), 760.0);
        assert_approx_eq!(f32, top_right.y(), 110.0);

        assert_approx_eq!(f32, viewport.scale_x(), 720.0);
        assert_approx_eq!(f32, viewport.scale_y(), 680.0);
    }

    #[test]
    fn test_journey_positions_descend() {
        let positions = journey_positions(3);
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[0], Point::new(JOURNEY_COLUMN_X, 3.0));
        assert_eq!(positions[2], Point::new(JOURNEY_COLUMN_X, 1.0));
    }

    proptest! {
        // The arrowhead lies strictly between the endpoints, at distance
        // `offset` from the destination.
        #[test]
        fn arrowhead_lies_between_endpoints(
            ax in -1.0f32..1.0,
            ay in -1.0f32..1.0,
            bx in -1.0f32..1.0,
            by in -1.0f32..1.0,
        ) {
            let start = Point::new(ax, ay);
            let end = Point::new(bx, by);
            let length = end.sub_point(start).hypot();
            prop_assume!(length > 0.05);

            let arrowhead = arrowhead_for_segment(start, end, ARROWHEAD_OFFSET).unwrap();
            let to_end = end.sub_point(arrowhead.position()).hypot();
            let to_start = arrowhead.position().sub_point(start).hypot();

            prop_assert!((to_end - ARROWHEAD_OFFSET).abs() < 1e-4);
            // On the segment: the two partial distances sum to the whole.
            prop_assert!((to_start + to_end - length).abs() < 1e-4);
            prop_assert!(to_start > 0.0 && to_end > 0.0);
        }
    }
}
