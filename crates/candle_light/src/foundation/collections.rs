//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a top-level node in a scene graph
    pub struct NodeId;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<T> = SlotMap<NodeId, T>;
