//! Scene management system
//!
//! A deliberately small scene graph: top-level nodes live in a slot map and
//! own their subtrees. It is enough for the candle controller to attach,
//! mutate and detach what it owns; rendering the result is someone else's job.

mod node;
mod scene_graph;

pub use node::{MeshNode, NodeKind, SceneNode};
pub use scene_graph::{SceneGraph, SimpleScene};
