//! Render configuration
//!
//! Settings are fixed for the lifetime of one render. They come from an
//! optional JSON file and are then overridden by command-line flags.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Cube, LATTICE_LIMIT, Point3};
use crate::fractal::ledger::DEFAULT_PRECISION;
use crate::render::geometry::{ScreenMapping, ViewTransform};

/// Deepest recursion accepted (20^4 = 160k leaves)
///
/// Depth 5 already needs tens of millions of ledger entries.
pub const MAX_DEPTH: u32 = 4;

/// Snapping must be at least this many times finer than the smallest leaf
const PRECISION_HEADROOM: f64 = 10.0;

/// Invalid configuration detected before rendering starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Root cube size must be a positive finite number.
    #[error("invalid size {0}: must be a positive finite number")]
    InvalidSize(f64),

    /// Quantization precision must be a positive finite number.
    #[error("invalid edge quantization precision {0}: must be a positive finite number")]
    InvalidPrecision(f64),

    /// Precision would merge distinct edges of the smallest leaves.
    #[error(
        "edge quantization precision {precision} is too coarse for leaf cubes of size {leaf_size}"
    )]
    PrecisionTooCoarse {
        /// Configured precision.
        precision: f64,
        /// Edge length of a leaf at the configured depth.
        leaf_size: f64,
    },

    /// Scene reaches too far from the origin to snap edges exactly.
    #[error(
        "scene extends to {reach} units, more than 2^53 steps of precision {precision}"
    )]
    LatticeOverflow {
        /// Largest absolute coordinate any vertex can have.
        reach: f64,
        /// Configured precision.
        precision: f64,
    },

    /// Recursion depth above the supported maximum.
    #[error("recursion depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge {
        /// Requested depth.
        depth: u32,
        /// Largest accepted depth.
        max: u32,
    },

    /// A camera or scene parameter is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Output image has a zero dimension.
    #[error("invalid image size {width}x{height}")]
    InvalidImageSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Visible world window half-width must be positive.
    #[error("invalid world extent {0}: must be a positive finite number")]
    InvalidExtent(f64),

    /// Outline stroke width must be positive.
    #[error("invalid line width {0}: must be a positive finite number")]
    InvalidLineWidth(f64),
}

/// Everything needed to produce one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Projection scale
    pub focal_length: f64,
    /// Camera offset along Z
    pub observer_distance: f64,
    /// First rotation, about X (radians)
    pub rotation_angle_x: f64,
    /// Second rotation, about Y (radians)
    pub rotation_angle_y: f64,
    /// Subdivision levels below the root cube
    pub recursion_depth: u32,
    /// Lattice spacing used to match shared edges
    pub edge_quantization_precision: f64,
    /// Edge length of the root cube
    pub size: f64,
    /// Center of the root cube
    pub center: [f64; 3],
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Half-width of the visible image-plane window
    pub world_extent: f64,
    /// Stroke width in pixels
    pub line_width: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            focal_length: 200.0,
            observer_distance: 400.0,
            rotation_angle_x: 30f64.to_radians(),
            rotation_angle_y: 30f64.to_radians(),
            recursion_depth: 2,
            edge_quantization_precision: DEFAULT_PRECISION,
            size: 200.0,
            center: [0.0; 3],
            width: 800,
            height: 800,
            world_extent: 400.0,
            line_width: 1.0,
        }
    }
}

impl RenderConfig {
    /// Load settings from a JSON file; missing keys keep their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: RenderConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject settings that would make the render meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ConfigError::InvalidSize(self.size));
        }
        let precision = self.edge_quantization_precision;
        if !(precision.is_finite() && precision > 0.0) {
            return Err(ConfigError::InvalidPrecision(precision));
        }
        if self.recursion_depth > MAX_DEPTH {
            return Err(ConfigError::DepthTooLarge {
                depth: self.recursion_depth,
                max: MAX_DEPTH,
            });
        }
        let leaf_size = self.leaf_size();
        if precision * PRECISION_HEADROOM >= leaf_size {
            return Err(ConfigError::PrecisionTooCoarse {
                precision,
                leaf_size,
            });
        }

        let finite = [
            ("focal_length", self.focal_length),
            ("observer_distance", self.observer_distance),
            ("rotation_angle_x", self.rotation_angle_x),
            ("rotation_angle_y", self.rotation_angle_y),
            ("center.x", self.center[0]),
            ("center.y", self.center[1]),
            ("center.z", self.center[2]),
        ];
        if let Some(&(field, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field, value });
        }

        let reach = self.reach();
        if reach / precision > LATTICE_LIMIT {
            return Err(ConfigError::LatticeOverflow { reach, precision });
        }

        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidImageSize {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.world_extent.is_finite() && self.world_extent > 0.0) {
            return Err(ConfigError::InvalidExtent(self.world_extent));
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(ConfigError::InvalidLineWidth(self.line_width));
        }
        Ok(())
    }

    /// Edge length of a leaf cube at the configured depth
    pub fn leaf_size(&self) -> f64 {
        self.size / 3f64.powi(self.recursion_depth as i32)
    }

    /// Largest absolute coordinate of any vertex in the scene
    pub fn reach(&self) -> f64 {
        let far = self.center.iter().fold(0.0f64, |m, c| m.max(c.abs()));
        far + self.size * 0.5
    }

    /// The cube the subdivision starts from
    pub fn root(&self) -> Cube {
        let [x, y, z] = self.center;
        Cube::new(Point3::new(x, y, z), self.size)
    }

    pub fn view(&self) -> ViewTransform {
        ViewTransform {
            focal_length: self.focal_length,
            observer_distance: self.observer_distance,
            angle_x: self.rotation_angle_x,
            angle_y: self.rotation_angle_y,
        }
    }

    pub fn mapping(&self) -> ScreenMapping {
        ScreenMapping {
            extent: self.world_extent,
            width: self.width,
            height: self.height,
        }
    }
}
