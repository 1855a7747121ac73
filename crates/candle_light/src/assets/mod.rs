//! Asset loading
//!
//! Loaders turn a relative asset path into a detached [`SceneNode`] tree. The
//! candle controller is written against [`AssetLoader`], so the OBJ loader
//! here can be swapped for a host's own pipeline.

pub mod obj_loader;

pub use obj_loader::ObjLoader;

use futures::future::LocalBoxFuture;
use thiserror::Error;

use crate::scene::SceneNode;

/// Byte-level progress of a running load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadProgress {
    /// Bytes read so far
    pub loaded: u64,
    /// Total bytes, 0 when unknown
    pub total: u64,
}

impl LoadProgress {
    /// Completed fraction in `[0, 1]`, or `None` when the total is unknown
    pub fn fraction(&self) -> Option<f32> {
        (self.total > 0).then(|| (self.loaded as f64 / self.total as f64).min(1.0) as f32)
    }
}

/// Progress callback handed to a loader for the duration of one load
pub type ProgressCallback<'a> = &'a mut dyn FnMut(LoadProgress);

/// Source of model node trees
pub trait AssetLoader {
    /// Fetch and parse the model at `path`
    ///
    /// Exactly one attempt is made; failures are returned, never retried.
    fn load<'a>(
        &'a self,
        path: &'a str,
        progress: Option<ProgressCallback<'a>>,
    ) -> LocalBoxFuture<'a, Result<SceneNode, AssetError>>;
}

impl<L: AssetLoader + ?Sized> AssetLoader for &L {
    fn load<'a>(
        &'a self,
        path: &'a str,
        progress: Option<ProgressCallback<'a>>,
    ) -> LocalBoxFuture<'a, Result<SceneNode, AssetError>> {
        (**self).load(path, progress)
    }
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Asset file could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Asset parsed but holds no meshes
    #[error("Asset contains no meshes: {0}")]
    Empty(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
