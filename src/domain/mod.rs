//! Pure domain types with minimal dependencies
//!
//! This module contains the value types shared by the fractal traversal
//! and the renderer. Types here have no rendering backend dependencies
//! (tiny-skia, image) so the geometry pipeline can be tested in isolation.

pub mod color;
pub mod edge;
pub mod geometry;

pub use color::*;
pub use edge::*;
pub use geometry::*;
