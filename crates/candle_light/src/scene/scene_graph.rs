//! Scene graph trait and implementations
//!
//! The candle controller only ever talks to a scene through [`SceneGraph`], so
//! a host can hand it its own scene, and tests can hand it a recorder.

use crate::foundation::collections::{HandleMap, NodeId};

use super::node::SceneNode;

/// Container of top-level scene nodes
pub trait SceneGraph {
    /// Attach a node tree at the top level and return its handle
    fn add(&mut self, node: SceneNode) -> NodeId;

    /// Detach a node tree, handing it back to the caller
    fn remove(&mut self, id: NodeId) -> Option<SceneNode>;

    /// Look up a top-level node
    fn get(&self, id: NodeId) -> Option<&SceneNode>;

    /// Look up a top-level node for mutation
    fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode>;

    /// Number of top-level nodes
    fn node_count(&self) -> usize;

    /// Whether a handle still refers to an attached node
    fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }
}

impl<S: SceneGraph + ?Sized> SceneGraph for &mut S {
    fn add(&mut self, node: SceneNode) -> NodeId {
        (**self).add(node)
    }

    fn remove(&mut self, id: NodeId) -> Option<SceneNode> {
        (**self).remove(id)
    }

    fn get(&self, id: NodeId) -> Option<&SceneNode> {
        (**self).get(id)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        (**self).get_mut(id)
    }

    fn node_count(&self) -> usize {
        (**self).node_count()
    }
}

/// Simple slot-map backed scene (no spatial optimization)
#[derive(Debug, Default)]
pub struct SimpleScene {
    nodes: HandleMap<SceneNode>,
}

impl SimpleScene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the attached top-level nodes
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter()
    }
}

impl SceneGraph for SimpleScene {
    fn add(&mut self, node: SceneNode) -> NodeId {
        log::trace!("Scene add: {}", node.name);
        self.nodes.insert(node)
    }

    fn remove(&mut self, id: NodeId) -> Option<SceneNode> {
        let removed = self.nodes.remove(id);
        if let Some(node) = &removed {
            log::trace!("Scene remove: {}", node.name);
        }
        removed
    }

    fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
