//! Test doubles for the scene and the asset loader

use std::cell::{Cell, RefCell};

use futures::future::{FutureExt, LocalBoxFuture};

use crate::assets::{AssetError, AssetLoader, LoadProgress, ProgressCallback};
use crate::foundation::collections::NodeId;
use crate::foundation::math::{Transform, Vec3};
use crate::render::{Material, Mesh};
use crate::scene::{SceneGraph, SceneNode, SimpleScene};

/// A 17-unit candle: wax body plus a nested wick
pub fn candle_model() -> SceneNode {
    let mut root = SceneNode::group("candle");
    root.add_child(
        SceneNode::mesh("wax", Mesh::cone(2.0, 16.0, 8), Material::new().with_name("wax"))
            .with_transform(Transform::from_position(Vec3::new(0.0, 8.0, 0.0))),
    );

    let mut top = SceneNode::group("top")
        .with_transform(Transform::from_position(Vec3::new(0.0, 16.0, 0.0)));
    top.add_child(
        SceneNode::mesh("wick", Mesh::cone(0.1, 1.0, 4), Material::new().with_name("wick"))
            .with_transform(Transform::from_position(Vec3::new(0.0, 0.5, 0.0))),
    );
    root.add_child(top);
    root
}

/// Loader that hands out [`candle_model`] and records every request
#[derive(Default)]
pub struct FakeLoader {
    pub calls: Cell<usize>,
    pub paths: RefCell<Vec<String>>,
    pub fail_next: Cell<bool>,
}

impl FakeLoader {
    pub fn failing_once() -> Self {
        let loader = Self::default();
        loader.fail_next.set(true);
        loader
    }
}

impl AssetLoader for FakeLoader {
    fn load<'a>(
        &'a self,
        path: &'a str,
        progress: Option<ProgressCallback<'a>>,
    ) -> LocalBoxFuture<'a, Result<SceneNode, AssetError>> {
        async move {
            self.calls.set(self.calls.get() + 1);
            self.paths.borrow_mut().push(path.to_string());

            if let Some(report) = progress {
                for loaded in [64, 128] {
                    report(LoadProgress { loaded, total: 128 });
                }
            }

            if self.fail_next.replace(false) {
                return Err(AssetError::NotFound(path.to_string()));
            }
            Ok(candle_model())
        }
        .boxed_local()
    }
}

/// Scene that counts every structural change and every mutable lookup
#[derive(Default)]
pub struct RecordingScene {
    pub inner: SimpleScene,
    pub adds: usize,
    pub removes: usize,
    pub mutations: usize,
}

impl SceneGraph for RecordingScene {
    fn add(&mut self, node: SceneNode) -> NodeId {
        self.adds += 1;
        self.inner.add(node)
    }

    fn remove(&mut self, id: NodeId) -> Option<SceneNode> {
        self.removes += 1;
        self.inner.remove(id)
    }

    fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.inner.get(id)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.mutations += 1;
        self.inner.get_mut(id)
    }

    fn node_count(&self) -> usize {
        self.inner.node_count()
    }
}
