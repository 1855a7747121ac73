//! Flame effect construction
//!
//! Two nested translucent cones under one group, plus a shadow-casting point
//! light just above them. The nodes are returned detached; the controller
//! attaches them.

use crate::foundation::math::{Transform, Vec3};
use crate::render::{Material, Mesh, PointLight};
use crate::scene::SceneNode;

use super::placement::PlacementConfig;

/// Candle height in model units; the flame sits this many scale units up
pub const MODEL_HEIGHT_UNITS: f32 = 17.0;

/// Flame group scale relative to the model scale
pub const FLAME_SCALE_FACTOR: f32 = 2.0;

/// Light height above the flame group origin
pub const LIGHT_HEIGHT_OFFSET: f32 = 0.5;

/// Resting light intensity
pub const BASE_LIGHT_INTENSITY: f32 = 1.5;

/// Light falloff radius
pub const LIGHT_DISTANCE: f32 = 10.0;

const LIGHT_COLOR: u32 = 0xff_99_33;
const SHADOW_NEAR: f32 = 0.1;
const SHADOW_FAR: f32 = 10.0;

/// One flame cone
#[derive(Debug, Clone, Copy)]
pub(crate) struct ConeSpec {
    pub name: &'static str,
    pub radius: f32,
    pub height: f32,
    pub radial_segments: u32,
    pub color: u32,
    pub opacity: f32,
    /// Raises the cone so its base rests on the group origin
    pub lift: f32,
}

pub(crate) const OUTER_CONE: ConeSpec = ConeSpec {
    name: "flame_outer",
    radius: 0.3,
    height: 1.0,
    radial_segments: 8,
    color: 0xff_66_00,
    opacity: 0.8,
    lift: 0.5,
};

pub(crate) const INNER_CONE: ConeSpec = ConeSpec {
    name: "flame_inner",
    radius: 0.15,
    height: 0.7,
    radial_segments: 8,
    color: 0xff_dd_33,
    opacity: 0.9,
    lift: 0.4,
};

impl ConeSpec {
    fn build(&self) -> SceneNode {
        let material = Material::basic(Material::rgb_from_hex(self.color))
            .with_name(self.name)
            .translucent(self.opacity);
        let mesh = Mesh::cone(self.radius, self.height, self.radial_segments);
        SceneNode::mesh(self.name, mesh, material)
            .with_transform(Transform::from_position(Vec3::new(0.0, self.lift, 0.0)))
    }
}

/// Where the flame group sits for a given candle placement
pub fn flame_anchor(placement: &PlacementConfig) -> Vec3 {
    Vec3::new(
        placement.x,
        placement.y + MODEL_HEIGHT_UNITS * placement.scale,
        placement.z,
    )
}

/// Resting light position for a given candle placement
pub fn light_anchor(placement: &PlacementConfig) -> Vec3 {
    flame_anchor(placement) + Vec3::new(0.0, LIGHT_HEIGHT_OFFSET, 0.0)
}

/// Child indices of the cones inside the flame group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ConeSlots {
    pub outer: usize,
    pub inner: usize,
}

/// Build the detached flame group for a placement
pub(crate) fn build_flame_group(placement: &PlacementConfig) -> (SceneNode, ConeSlots) {
    let mut transform = Transform::from_position(flame_anchor(placement));
    transform.set_uniform_scale(FLAME_SCALE_FACTOR * placement.scale);

    let mut group = SceneNode::group("candle_flame").with_transform(transform);
    let outer = group.add_child(OUTER_CONE.build());
    let inner = group.add_child(INNER_CONE.build());

    (group, ConeSlots { outer, inner })
}

/// Build the detached flame light for a placement
pub(crate) fn build_flame_light(placement: &PlacementConfig) -> SceneNode {
    let color = Vec3::from(Material::rgb_from_hex(LIGHT_COLOR));
    let light = PointLight::new(color, BASE_LIGHT_INTENSITY, LIGHT_DISTANCE)
        .with_shadows(SHADOW_NEAR, SHADOW_FAR);

    SceneNode::point_light("candle_light", light)
        .with_transform(Transform::from_position(light_anchor(placement)))
}
