//! Path data and arrowhead construction for edge rendering.

use svg::node::element::Path;

use crate::{geometry::Point, layout::Arrowhead};

/// Create a straight path data string from two points.
pub fn straight_path_data(start: Point, end: Point) -> String {
    format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
}

/// Create a path data string visiting each point in turn.
///
/// Used for the orthogonal loop-back route on decision branches.
pub fn polyline_path_data(points: &[Point]) -> String {
    let mut data = String::new();
    for (i, point) in points.iter().enumerate() {
        let op = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            data.push(' ');
        }
        data.push_str(&format!("{op} {} {}", point.x(), point.y()));
    }
    data
}

/// Builds the arrowhead triangle for an edge, translated to its computed
/// position and rotated to its computed angle.
///
/// The base triangle points along the positive x-axis and is centered on
/// the origin, so the transform places its midpoint exactly at the
/// arrowhead position.
pub fn arrowhead_marker(arrowhead: Arrowhead, size: f32, fill: &str) -> Path {
    let half = size / 2.0;
    let data = format!(
        "M {} {} L {} {} L {} {} z",
        -half,
        -half * 0.8,
        half,
        0.0,
        -half,
        half * 0.8
    );

    Path::new().set("d", data).set("fill", fill).set(
        "transform",
        format!(
            "translate({} {}) rotate({})",
            arrowhead.position().x(),
            arrowhead.position().y(),
            arrowhead.angle_degrees()
        ),
    )
}

#[cfg(test)]
mod tests {
    use crate::layout::arrowhead_for_segment;

    use super::*;

    #[test]
    fn test_straight_path_data() {
        let data = straight_path_data(Point::new(1.0, 2.0), Point::new(3.5, 4.0));
        assert_eq!(data, "M 1 2 L 3.5 4");
    }

    #[test]
    fn test_polyline_path_data() {
        let data = polyline_path_data(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 2.0),
        ]);
        assert_eq!(data, "M 0 0 L 1 0 L 1 2");
    }

    #[test]
    fn test_arrowhead_marker_transform() {
        let arrowhead =
            arrowhead_for_segment(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 2.0).unwrap();
        let rendered = arrowhead_marker(arrowhead, 12.0, "#455A64").to_string();

        assert!(rendered.contains("translate(8 0) rotate(0)"), "got: {rendered}");
        assert!(rendered.contains("fill=\"#455A64\""));
    }
}
