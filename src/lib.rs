//! hollowcube - render a recursive 20-cube Sierpinski fractal
//!
//! The cube is subdivided into 27 cells, the center and face-center cells
//! are dropped and the remaining 20 recurse. Leaves are filled, then only
//! the edges no two leaves share are outlined, so the fractal reads as a
//! hollow shell without internal seams.

pub mod config;
pub mod domain;
pub mod fractal;
pub mod output;
pub mod render;
