//! Recursive 20-of-27 cube subdivision
//!
//! A cube is cut into a 3x3x3 grid. The center cell and the six
//! face-center cells (`|dx| + |dy| + |dz| <= 1`) are dropped, the 12 edge
//! cells and 8 corner cells are kept and subdivided again.

use crate::domain::Cube;

/// Number of sub-cubes kept per subdivision
pub const KEPT_PER_LEVEL: usize = 20;

/// Retained grid offsets in fixed dx, dy, dz nesting order
pub const OFFSETS: [[i8; 3]; KEPT_PER_LEVEL] = retained_offsets();

const fn retained_offsets() -> [[i8; 3]; KEPT_PER_LEVEL] {
    let mut out = [[0i8; 3]; KEPT_PER_LEVEL];
    let mut n = 0;
    let mut dx = -1i8;
    while dx <= 1 {
        let mut dy = -1i8;
        while dy <= 1 {
            let mut dz = -1i8;
            while dz <= 1 {
                if dx.abs() + dy.abs() + dz.abs() > 1 {
                    out[n] = [dx, dy, dz];
                    n += 1;
                }
                dz += 1;
            }
            dy += 1;
        }
        dx += 1;
    }
    out
}

/// Walk the fractal and call `visit` once per leaf cube
///
/// Leaves are visited in a reproducible order: depth-first, children in
/// `OFFSETS` order. `depth == 0` visits `root` itself.
pub fn generate<F>(root: Cube, depth: u32, visit: &mut F)
where
    F: FnMut(Cube),
{
    if depth == 0 {
        visit(root);
        return;
    }

    let step = root.size / 3.0;
    for [dx, dy, dz] in OFFSETS {
        let center = root.center.offset(
            f64::from(dx) * step,
            f64::from(dy) * step,
            f64::from(dz) * step,
        );
        generate(Cube::new(center, step), depth - 1, visit);
    }
}

/// Collect every leaf cube into a vector
pub fn leaves(root: Cube, depth: u32) -> Vec<Cube> {
    let mut out = Vec::with_capacity(leaf_count(depth).min(1 << 20));
    generate(root, depth, &mut |c| out.push(c));
    out
}

/// Leaves produced at `depth`: 20^depth, saturating at usize::MAX
pub fn leaf_count(depth: u32) -> usize {
    KEPT_PER_LEVEL.saturating_pow(depth)
}
