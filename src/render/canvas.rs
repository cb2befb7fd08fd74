//! Drawing surface consumed by the scene renderer

use crate::domain::{Point2, ShapeColor};

/// The two primitives the fractal renderer needs from a backend
///
/// Points are already projected onto the image plane (world units, Y up);
/// mapping to device pixels belongs to the implementation.
pub trait Canvas {
    /// Fill a closed polygon given its boundary in order
    fn fill_polygon(&mut self, points: &[Point2], color: ShapeColor);

    /// Draw a straight segment between two points
    fn draw_segment(&mut self, a: Point2, b: Point2, color: ShapeColor);
}
