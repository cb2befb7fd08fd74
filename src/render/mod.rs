//! Fractal rendering module
//!
//! This module contains:
//! - Geometry shared by traversal and drawing (cube tables, camera, pixel mapping)
//! - The `Canvas` seam the scene draws through
//! - Image rendering using tiny-skia (for saving to file)
//! - Scene composition (fills during traversal, outlines afterwards)

pub mod canvas;
pub mod geometry;
pub mod image;
pub mod scene;

pub use canvas::Canvas;
pub use self::image::PixmapCanvas;
pub use scene::{SceneStats, render_scene};
