//! Geometric value types for scene coordinates

/// A point in world space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Create a new point from coordinates
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Translate the point by the given offset
    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Point3 {
        Point3 {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Coordinates as an array, in x, y, z order
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// A projected point on the image plane (world units, Y up)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Create a new point from coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned cube described by its center and edge length
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    pub center: Point3,
    pub size: f64,
}

impl Cube {
    /// Create a new cube
    pub const fn new(center: Point3, size: f64) -> Self {
        Self { center, size }
    }

    /// Half of the edge length (distance from center to each face)
    pub fn half(&self) -> f64 {
        self.size * 0.5
    }
}
