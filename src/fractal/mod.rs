//! Recursive subdivision and the seam ledger
//!
//! - `generator` walks the 20-of-27 subdivision down to the leaf cubes
//! - `ledger` counts every leaf edge so shared seams can be left undrawn

pub mod generator;
pub mod ledger;

pub use generator::{generate, leaf_count, leaves};
pub use ledger::{EdgeLedger, canonical_key, quantize};
