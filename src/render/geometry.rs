//! Shared geometry calculations for the fractal scene
//!
//! This module contains the cube index tables and the view math shared
//! between face filling, edge collection and outline drawing.

use crate::domain::{Cube, Point2, Point3};

/// Cube corner enumeration and the index tables defined against it
pub mod cube {
    use crate::domain::{Cube, Point3};

    /// Corner signs, bottom ring (z = -s) then top ring (z = +s)
    ///
    /// Each ring walks (-,-) (+,-) (+,+) (-,+) so consecutive indices
    /// are adjacent corners.
    pub const CORNERS: [[f64; 3]; 8] = [
        [-1.0, -1.0, -1.0],
        [1.0, -1.0, -1.0],
        [1.0, 1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, 1.0],
        [-1.0, 1.0, 1.0],
    ];

    /// Bottom cycle, top cycle, then the four vertical connectors
    pub const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    /// One boundary cycle per face: z-, z+, y-, y+, x+, x-
    pub const FACES: [[usize; 4]; 6] = [
        [0, 1, 2, 3],
        [4, 5, 6, 7],
        [0, 1, 5, 4],
        [2, 3, 7, 6],
        [1, 2, 6, 5],
        [0, 3, 7, 4],
    ];

    /// The 8 corners of a cube in `CORNERS` order
    pub fn vertices(cube: &Cube) -> [Point3; 8] {
        let s = cube.half();
        CORNERS.map(|[sx, sy, sz]| cube.center.offset(sx * s, sy * s, sz * s))
    }

    /// The 12 edges of a cube as endpoint pairs
    pub fn edges(cube: &Cube) -> impl Iterator<Item = (Point3, Point3)> {
        let v = vertices(cube);
        EDGES.into_iter().map(move |(i, j)| (v[i], v[j]))
    }
}

/// Substituted for a zero projection denominator
pub const PROJECTION_EPSILON: f64 = 1e-4;

/// Rotate about the X axis (right-handed)
#[inline]
pub fn rotate_x(p: Point3, angle: f64) -> Point3 {
    let (sin_a, cos_a) = angle.sin_cos();
    Point3 {
        x: p.x,
        y: p.y * cos_a - p.z * sin_a,
        z: p.y * sin_a + p.z * cos_a,
    }
}

/// Rotate about the Y axis (right-handed)
#[inline]
pub fn rotate_y(p: Point3, angle: f64) -> Point3 {
    let (sin_b, cos_b) = angle.sin_cos();
    Point3 {
        x: p.x * cos_b + p.z * sin_b,
        y: p.y,
        z: -p.x * sin_b + p.z * cos_b,
    }
}

/// Pinhole projection after pushing the point `observer_distance` along Z
#[inline]
pub fn project(p: Point3, focal_length: f64, observer_distance: f64) -> Point2 {
    let mut z = p.z + observer_distance;
    if z == 0.0 {
        z = PROJECTION_EPSILON;
    }
    Point2 {
        x: focal_length * p.x / z,
        y: focal_length * p.y / z,
    }
}

/// Fixed oblique camera: rotate about X, then Y, then project
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub focal_length: f64,
    pub observer_distance: f64,
    pub angle_x: f64,
    pub angle_y: f64,
}

impl ViewTransform {
    /// Map a world point to the image plane
    pub fn apply(&self, p: Point3) -> Point2 {
        let rotated = rotate_y(rotate_x(p, self.angle_x), self.angle_y);
        project(rotated, self.focal_length, self.observer_distance)
    }

    /// Project all corners of a cube, in `cube::CORNERS` order
    pub fn cube_corners(&self, c: &Cube) -> [Point2; 8] {
        cube::vertices(c).map(|v| self.apply(v))
    }
}

/// Maps image-plane points (Y up, square window of +-`extent`) to pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMapping {
    pub extent: f64,
    pub width: u32,
    pub height: u32,
}

impl ScreenMapping {
    /// Pixel coordinates for a projected point (Y down)
    pub fn to_pixel(&self, p: Point2) -> (f32, f32) {
        let span = 2.0 * self.extent;
        let px = (p.x + self.extent) / span * self.width as f64;
        let py = (self.extent - p.y) / span * self.height as f64;
        (px as f32, py as f32)
    }
}
