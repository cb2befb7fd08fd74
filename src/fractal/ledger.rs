//! Edge multiplicity ledger
//!
//! Every leaf cube records its 12 edges. An edge recorded once lies on the
//! outer shell of the fractal; an edge recorded more than once is shared by
//! neighbouring leaves and is an internal seam.

use std::collections::BTreeMap;

use crate::domain::{Cube, EdgeKey, Point3, grid_point};
use crate::render::geometry::cube;

/// Default lattice spacing for endpoint snapping
pub const DEFAULT_PRECISION: f64 = 0.001;

/// Snap each coordinate to the nearest multiple of `precision`
pub fn quantize(p: Point3, precision: f64) -> Point3 {
    let [x, y, z] = p.to_array().map(|c| (c / precision).round() * precision);
    Point3 { x, y, z }
}

/// Order-independent key for the edge between `p1` and `p2`
pub fn canonical_key(p1: Point3, p2: Point3, precision: f64) -> EdgeKey {
    EdgeKey::new(grid_point(p1, precision), grid_point(p2, precision))
}

/// Occurrence count plus the endpoints as first recorded
#[derive(Clone, Copy, Debug)]
struct EdgeTally {
    count: u32,
    endpoints: (Point3, Point3),
}

/// Counts edge occurrences across one full traversal
#[derive(Debug)]
pub struct EdgeLedger {
    precision: f64,
    tallies: BTreeMap<EdgeKey, EdgeTally>,
    recorded: usize,
}

impl EdgeLedger {
    pub fn new(precision: f64) -> Self {
        Self {
            precision,
            tallies: BTreeMap::new(),
            recorded: 0,
        }
    }

    /// Count one occurrence of the edge `p1`-`p2`
    pub fn record(&mut self, p1: Point3, p2: Point3) {
        let key = canonical_key(p1, p2, self.precision);
        self.tallies
            .entry(key)
            .and_modify(|t| t.count += 1)
            .or_insert(EdgeTally {
                count: 1,
                endpoints: (p1, p2),
            });
        self.recorded += 1;
    }

    /// Record all 12 edges of a leaf cube
    pub fn record_cube(&mut self, c: &Cube) {
        for (a, b) in cube::edges(c) {
            self.record(a, b);
        }
    }

    /// How many times the edge `p1`-`p2` has been recorded
    pub fn count(&self, p1: Point3, p2: Point3) -> u32 {
        self.tallies
            .get(&canonical_key(p1, p2, self.precision))
            .map_or(0, |t| t.count)
    }

    /// Unsnapped endpoints of every edge recorded exactly once
    pub fn outer_edges(&self) -> Vec<(Point3, Point3)> {
        self.tallies
            .values()
            .filter(|t| t.count == 1)
            .map(|t| t.endpoints)
            .collect()
    }

    /// Total `record` calls so far
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    /// Number of distinct edges
    pub fn unique(&self) -> usize {
        self.tallies.len()
    }

    /// Multiplicity -> number of distinct edges with that multiplicity
    pub fn histogram(&self) -> BTreeMap<u32, usize> {
        let mut hist = BTreeMap::new();
        for t in self.tallies.values() {
            *hist.entry(t.count).or_insert(0) += 1;
        }
        hist
    }
}

impl Default for EdgeLedger {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}
