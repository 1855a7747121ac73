//! Material system for rendering

/// How a material responds to scene lighting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// Lit by scene lights
    Lit,
    /// Flat color, ignores scene lights
    Unlit,
}

/// Material properties for 3D rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name (from the MTL file for imported meshes)
    pub name: String,

    /// Base color (RGB)
    pub base_color: [f32; 3],

    /// Alpha/transparency (0.0 = transparent, 1.0 = opaque)
    pub alpha: f32,

    /// Whether the renderer should alpha-blend this material
    pub transparent: bool,

    /// Lighting model
    pub shading: Shading,

    /// Set when properties changed and the renderer must rebuild its state
    pub needs_update: bool,
}

impl Material {
    /// Create a new material with default properties
    pub fn new() -> Self {
        Self {
            name: "Default".to_string(),
            base_color: [1.0, 1.0, 1.0], // White
            alpha: 1.0,
            transparent: false,
            shading: Shading::Lit,
            needs_update: false,
        }
    }

    /// Unlit material, the equivalent of a "basic" material
    pub fn basic(base_color: [f32; 3]) -> Self {
        Self {
            base_color,
            shading: Shading::Unlit,
            ..Self::new()
        }
    }

    /// Convert a packed `0xRRGGBB` color into float RGB in `[0, 1]`
    pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0)]
    }

    /// Set the material name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the base color
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.base_color = [r, g, b];
        self
    }

    /// Set the alpha/transparency
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Enable alpha blending with the given opacity
    pub fn translucent(mut self, opacity: f32) -> Self {
        self.transparent = true;
        self.with_alpha(opacity)
    }

    /// Flag the material so the renderer rebuilds it before the next draw
    pub fn mark_needs_update(&mut self) {
        self.needs_update = true;
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_conversion() {
        assert_eq!(Material::rgb_from_hex(0xff0000), [1.0, 0.0, 0.0]);
        assert_eq!(Material::rgb_from_hex(0x00ff00), [0.0, 1.0, 0.0]);
        let [r, g, b] = Material::rgb_from_hex(0xff6600);
        assert_eq!(r, 1.0);
        assert!((g - 0.4).abs() < 1e-6);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn test_translucent_basic_material() {
        let material = Material::basic([1.0, 0.5, 0.0]).translucent(0.8);
        assert!(material.transparent);
        assert_eq!(material.alpha, 0.8);
        assert_eq!(material.shading, Shading::Unlit);
        assert!(!material.needs_update);
    }

    #[test]
    fn test_alpha_is_clamped() {
        assert_eq!(Material::new().with_alpha(1.7).alpha, 1.0);
        assert_eq!(Material::new().with_alpha(-0.2).alpha, 0.0);
    }

    #[test]
    fn test_mark_needs_update() {
        let mut material = Material::new().with_name("wax").with_color(0.9, 0.9, 0.8);
        material.mark_needs_update();
        assert!(material.needs_update);
        assert_eq!(material.name, "wax");
    }
}
