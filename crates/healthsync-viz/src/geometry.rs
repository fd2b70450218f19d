//! Basic geometric types shared by layout and rendering.

/// A point in 2D chart space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Subtracts another point from this point, returning a new point.
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin).
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Checks if both x and y coordinates are zero.
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// The dimensions of a canvas or element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size.
    pub fn height(self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default_is_zero() {
        let point = Point::default();
        assert!(point.is_zero());
    }

    #[test]
    fn test_point_sub() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p2.sub_point(p1), Point::new(2.0, 2.0));
    }

    #[test]
    fn test_point_scale() {
        let point = Point::new(2.0, 3.0);
        assert_eq!(point.scale(2.5), Point::new(5.0, 7.5));
        assert!(point.scale(0.0).is_zero());
    }

    #[test]
    fn test_point_hypot() {
        assert_eq!(Point::new(3.0, 4.0).hypot(), 5.0);
        assert_eq!(Point::new(0.0, 0.0).hypot(), 0.0);
    }

    #[test]
    fn test_size_accessors() {
        let size = Size::new(800.0, 600.0);
        assert_eq!(size.width(), 800.0);
        assert_eq!(size.height(), 600.0);
    }
}
