//! Scene node tree
//!
//! A node owns its children, so a whole model (or the flame group) moves in
//! and out of a scene as one value. What a node *is* is spelled out by
//! [`NodeKind`]; callers match on it instead of probing for capabilities.

use crate::foundation::math::{Point3, Transform};
use crate::render::{Bounds, Material, Mesh, PointLight};

/// Renderable mesh with its material and shadow flags
#[derive(Debug, Clone, PartialEq)]
pub struct MeshNode {
    /// Geometry
    pub mesh: Mesh,
    /// Surface material
    pub material: Material,
    /// Whether the mesh is drawn into shadow maps
    pub cast_shadow: bool,
    /// Whether the mesh samples shadow maps
    pub receive_shadow: bool,
}

impl MeshNode {
    /// Mesh that neither casts nor receives shadows
    pub fn new(mesh: Mesh, material: Material) -> Self {
        Self {
            mesh,
            material,
            cast_shadow: false,
            receive_shadow: false,
        }
    }
}

/// The kinds of node a scene can hold
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Pure transform node
    Group,
    /// Renderable mesh
    Mesh(MeshNode),
    /// Point light positioned at the node origin
    PointLight(PointLight),
}

/// A node and its subtree
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Display name
    pub name: String,
    /// Transform relative to the parent
    pub transform: Transform,
    /// Node payload
    pub kind: NodeKind,
    /// Owned children
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    fn with_kind(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            kind,
            children: Vec::new(),
        }
    }

    /// Empty group node
    pub fn group(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Group)
    }

    /// Mesh node
    pub fn mesh(name: impl Into<String>, mesh: Mesh, material: Material) -> Self {
        Self::with_kind(name, NodeKind::Mesh(MeshNode::new(mesh, material)))
    }

    /// Point light node
    pub fn point_light(name: impl Into<String>, light: PointLight) -> Self {
        Self::with_kind(name, NodeKind::PointLight(light))
    }

    /// Builder: replace the local transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Append a child and return its index
    pub fn add_child(&mut self, child: SceneNode) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    /// Child by index
    pub fn child(&self, index: usize) -> Option<&SceneNode> {
        self.children.get(index)
    }

    /// Mutable child by index
    pub fn child_mut(&mut self, index: usize) -> Option<&mut SceneNode> {
        self.children.get_mut(index)
    }

    /// Mesh payload, if this node is a mesh
    pub fn as_mesh(&self) -> Option<&MeshNode> {
        match &self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    /// Mutable mesh payload, if this node is a mesh
    pub fn as_mesh_mut(&mut self) -> Option<&mut MeshNode> {
        match &mut self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    /// Light payload, if this node is a point light
    pub fn as_point_light(&self) -> Option<&PointLight> {
        match &self.kind {
            NodeKind::PointLight(light) => Some(light),
            _ => None,
        }
    }

    /// Mutable light payload, if this node is a point light
    pub fn as_point_light_mut(&mut self) -> Option<&mut PointLight> {
        match &mut self.kind {
            NodeKind::PointLight(light) => Some(light),
            _ => None,
        }
    }

    /// Visit this node and every descendant, parents before children
    pub fn traverse(&self, visit: &mut impl FnMut(&SceneNode)) {
        visit(self);
        for child in &self.children {
            child.traverse(visit);
        }
    }

    /// Mutable depth-first visit of this node and every descendant
    pub fn traverse_mut(&mut self, visit: &mut impl FnMut(&mut SceneNode)) {
        visit(self);
        for child in &mut self.children {
            child.traverse_mut(visit);
        }
    }

    /// Bounds of every mesh in the subtree, in the space of `parent`
    pub fn bounds_in(&self, parent: &Transform) -> Option<Bounds> {
        let world = parent.combine(&self.transform);

        let own = self.as_mesh().and_then(|m| m.mesh.bounds()).map(|local| {
            let corners = (0..8).map(|i| {
                let pick = |bit: usize, lo: f32, hi: f32| if i & bit == 0 { lo } else { hi };
                world.transform_point(Point3::new(
                    pick(1, local.min.x, local.max.x),
                    pick(2, local.min.y, local.max.y),
                    pick(4, local.min.z, local.max.z),
                ))
            });
            corners.fold(None, |acc: Option<Bounds>, p| {
                let point = Bounds {
                    min: p.coords,
                    max: p.coords,
                };
                Some(acc.map_or(point, |b| b.union(&point)))
            })
        });

        self.children
            .iter()
            .filter_map(|child| child.bounds_in(&world))
            .fold(own.flatten(), |acc, b| Some(acc.map_or(b, |a| a.union(&b))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    fn sample_tree() -> SceneNode {
        let mut root = SceneNode::group("root");
        let mut body = SceneNode::group("body");
        body.add_child(SceneNode::mesh("wax", Mesh::cone(1.0, 2.0, 8), Material::new()));
        root.add_child(body);
        root.add_child(SceneNode::point_light(
            "glow",
            PointLight::new(Vec3::new(1.0, 1.0, 1.0), 1.0, 1.0),
        ));
        root
    }

    #[test]
    fn test_traverse_visits_all_descendants() {
        let tree = sample_tree();
        let mut names = Vec::new();
        tree.traverse(&mut |node| names.push(node.name.clone()));
        assert_eq!(names, ["root", "body", "wax", "glow"]);
    }

    #[test]
    fn test_traverse_mut_reaches_nested_meshes() {
        let mut tree = sample_tree();
        tree.traverse_mut(&mut |node| {
            if let Some(mesh) = node.as_mesh_mut() {
                mesh.cast_shadow = true;
            }
        });
        let wax = tree.child(0).and_then(|b| b.child(0)).unwrap();
        assert!(wax.as_mesh().unwrap().cast_shadow);
        assert!(tree.child(1).unwrap().as_mesh().is_none());
        assert!(tree.child(1).unwrap().as_point_light().is_some());
    }

    #[test]
    fn test_bounds_follow_parent_transform() {
        let mut tree = sample_tree();
        let mut transform = Transform::from_position(Vec3::new(0.0, 1.0, 0.0));
        transform.set_uniform_scale(0.5);
        tree.transform = transform;

        let bounds = tree.bounds_in(&Transform::identity()).unwrap();
        // Cone spans y in [-1, 1]; scaled by 0.5 and lifted by 1
        assert_relative_eq!(bounds.min.y, 0.5, epsilon = 1e-5);
        assert_relative_eq!(bounds.max.y, 1.5, epsilon = 1e-5);
        assert_relative_eq!(bounds.extents().y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_group_without_meshes_has_no_bounds() {
        let node = SceneNode::group("empty");
        assert!(node.bounds_in(&Transform::identity()).is_none());
    }
}
