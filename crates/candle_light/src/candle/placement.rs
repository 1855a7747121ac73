//! Where and how big the candle is

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// Placement snapshot taken when the candle is loaded
///
/// Scale is not validated; a non-positive scale produces a degenerate model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// World X
    pub x: f32,
    /// World Y
    pub y: f32,
    /// World Z
    pub z: f32,
    /// Uniform model scale
    pub scale: f32,
    /// Rotation about +Y in radians
    pub rotation: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            scale: 0.1,
            rotation: 0.0,
        }
    }
}

impl PlacementConfig {
    /// Default-scaled, unrotated placement at a position
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            ..Self::default()
        }
    }

    /// Builder: set the uniform scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Builder: set the rotation about +Y in radians
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Position as a vector
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}
