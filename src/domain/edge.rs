//! Canonical edge keys for seam detection
//!
//! Endpoints are snapped onto an integer lattice before comparison, so two
//! cubes that share an edge produce the same key even when their float
//! coordinates drifted apart during subdivision.

use super::geometry::Point3;

/// A snapped endpoint, stored as lattice indices (coordinate / precision)
pub type GridPoint = [i64; 3];

/// Order-independent identity of a cube edge
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    lo: GridPoint,
    hi: GridPoint,
}

impl EdgeKey {
    /// Build a key from two snapped endpoints in either order
    pub fn new(a: GridPoint, b: GridPoint) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }
}

/// Largest lattice index that f64 and i64 both represent exactly (2^53)
pub const LATTICE_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Snap a point onto the lattice with the given spacing
///
/// Indices are exact only while `|coord| / precision <= LATTICE_LIMIT`;
/// render configs outside that range are rejected before traversal.
pub fn grid_point(p: Point3, precision: f64) -> GridPoint {
    p.to_array().map(|c| (c / precision).round() as i64)
}
