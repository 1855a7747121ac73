//! Lighting system

use crate::foundation::math::Vec3;

/// Shadow camera settings for a shadow-casting light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowCamera {
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
    /// Shadow map resolution (square)
    pub map_size: u32,
}

impl Default for ShadowCamera {
    fn default() -> Self {
        Self {
            near: 0.5,
            far: 500.0,
            map_size: 512,
        }
    }
}

/// Point light that radiates in all directions from its node's position
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    /// Light color
    pub color: Vec3,
    /// Light intensity
    pub intensity: f32,
    /// Falloff radius; 0 means unlimited
    pub distance: f32,
    /// Falloff exponent over `distance`
    pub decay: f32,
    /// Whether this light should cast shadows
    pub cast_shadows: bool,
    /// Shadow camera used when `cast_shadows` is set
    pub shadow: ShadowCamera,
}

impl PointLight {
    /// Create a point light
    pub fn new(color: Vec3, intensity: f32, distance: f32) -> Self {
        Self {
            color,
            intensity,
            distance,
            decay: 2.0,
            cast_shadows: false,
            shadow: ShadowCamera::default(),
        }
    }

    /// Enable shadow casting with the given shadow camera clip planes
    pub fn with_shadows(mut self, near: f32, far: f32) -> Self {
        self.cast_shadows = true;
        self.shadow.near = near;
        self.shadow.far = far;
        self
    }
}
