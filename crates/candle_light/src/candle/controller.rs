//! Candle lifecycle: load, animate, reposition, remove

use thiserror::Error;

use crate::assets::{AssetError, AssetLoader, LoadProgress, ProgressCallback};
use crate::foundation::collections::NodeId;
use crate::foundation::math::{Transform, Vec3};
use crate::scene::SceneGraph;

use super::flame::{self, ConeSlots, BASE_LIGHT_INTENSITY, MODEL_HEIGHT_UNITS};
use super::flicker::FlickerFrame;
use super::placement::PlacementConfig;

/// Path of the candle model, relative to the loader's search paths
pub const CANDLE_ASSET_PATH: &str = "models/candle/candle.obj";

/// Frame time used by [`CandleAssetController::animate_default`]
pub const DEFAULT_DELTA_TIME: f32 = 0.016;

/// Errors surfaced by the candle controller
#[derive(Error, Debug)]
pub enum CandleError {
    /// The model could not be fetched or parsed
    #[error("Failed to load candle model: {0}")]
    Asset(#[from] AssetError),

    /// `load` was called while a candle is already in the scene
    #[error("A candle is already loaded; remove it before loading again")]
    AlreadyLoaded,
}

/// Handle to the loaded model's root node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetHandle(NodeId);

impl AssetHandle {
    /// Scene node id of the model root
    pub fn node_id(&self) -> NodeId {
        self.0
    }
}

/// The flame group and where its cones live inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlameEffect {
    group: NodeId,
    cones: ConeSlots,
}

impl FlameEffect {
    /// Scene node id of the flame group
    pub fn group(&self) -> NodeId {
        self.group
    }

    /// Child index of the outer cone inside the group
    pub fn outer_index(&self) -> usize {
        self.cones.outer
    }

    /// Child index of the inner cone inside the group
    pub fn inner_index(&self) -> usize {
        self.cones.inner
    }
}

/// The flame's point light and the height it flickers around
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    node: NodeId,
    base_height: f32,
}

impl LightSource {
    /// Scene node id of the light
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Resting world height; each frame places the light relative to this
    pub fn base_height(&self) -> f32 {
        self.base_height
    }
}

/// Time accumulated across `animate` calls
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationState {
    /// Seconds of animation applied so far
    pub elapsed_time: f32,
}

/// Everything that exists only while a candle is loaded
#[derive(Debug, Clone, Copy)]
struct LoadedCandle {
    placement: PlacementConfig,
    model: AssetHandle,
    flame: FlameEffect,
    light: LightSource,
}

/// Loads the candle model into a scene and drives its flame
///
/// The scene and the loader are injected; pass `&mut scene` to keep
/// ownership of the scene on the host side.
pub struct CandleAssetController<S: SceneGraph, L: AssetLoader> {
    scene: S,
    loader: L,
    loaded: Option<LoadedCandle>,
    animation: AnimationState,
}

impl<S: SceneGraph, L: AssetLoader> CandleAssetController<S, L> {
    /// Create an empty controller
    pub fn new(scene: S, loader: L) -> Self {
        Self {
            scene,
            loader,
            loaded: None,
            animation: AnimationState::default(),
        }
    }

    /// Load the candle and its flame
    ///
    /// Fails with [`CandleError::AlreadyLoaded`] if a candle is present; call
    /// [`remove`](Self::remove) first to replace it.
    #[allow(clippy::future_not_send)]
    pub async fn load(&mut self, placement: PlacementConfig) -> Result<AssetHandle, CandleError> {
        self.load_with_progress(placement, None).await
    }

    /// [`load`](Self::load) with a byte-progress callback
    #[allow(clippy::future_not_send)]
    pub async fn load_with_progress(
        &mut self,
        placement: PlacementConfig,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<AssetHandle, CandleError> {
        if self.loaded.is_some() {
            log::warn!("Ignoring candle load: a candle is already loaded");
            return Err(CandleError::AlreadyLoaded);
        }
        if placement.scale <= 0.0 {
            log::warn!(
                "Candle scale {} is not positive; the model will be degenerate",
                placement.scale
            );
        }

        // Shorten the callback's lifetime to the loader borrow
        let progress = progress.map(|report| report as &mut dyn FnMut(LoadProgress));
        let mut model = self.loader.load(CANDLE_ASSET_PATH, progress).await.map_err(|e| {
            log::error!("Candle model failed to load: {}", e);
            e
        })?;

        let mut transform = Transform::from_position(placement.position());
        transform.set_uniform_scale(placement.scale);
        transform.set_rotation_y(placement.rotation);
        model.transform = transform;

        let mut mesh_count = 0;
        model.traverse_mut(&mut |node| {
            if let Some(mesh) = node.as_mesh_mut() {
                mesh.cast_shadow = true;
                mesh.receive_shadow = true;
                mesh.material.mark_needs_update();
                mesh_count += 1;
            }
        });

        if let Some(bounds) = model.bounds_in(&Transform::identity()) {
            log::debug!(
                "Candle model spans {:.3} units vertically; flame anchored {:.3} above its origin",
                bounds.extents().y,
                MODEL_HEIGHT_UNITS * placement.scale
            );
        }

        let model = AssetHandle(self.scene.add(model));
        let (group, cones) = flame::build_flame_group(&placement);
        let flame = FlameEffect {
            group: self.scene.add(group),
            cones,
        };
        let light = LightSource {
            node: self.scene.add(flame::build_flame_light(&placement)),
            base_height: flame::light_anchor(&placement).y,
        };

        self.loaded = Some(LoadedCandle {
            placement,
            model,
            flame,
            light,
        });

        log::info!(
            "Candle loaded at ({}, {}, {}) with scale {} ({} meshes)",
            placement.x,
            placement.y,
            placement.z,
            placement.scale,
            mesh_count
        );
        Ok(model)
    }

    /// Advance the flame animation by `delta_time` seconds
    ///
    /// Does nothing while no candle is loaded.
    pub fn animate(&mut self, delta_time: f32) {
        let Some(candle) = self.loaded else {
            return;
        };

        self.animation.elapsed_time += delta_time;
        let frame = FlickerFrame::at(self.animation.elapsed_time, BASE_LIGHT_INTENSITY);

        if let Some(group) = self.scene.get_mut(candle.flame.group) {
            if let Some(outer) = group.child_mut(candle.flame.cones.outer) {
                outer.transform.set_uniform_scale(frame.outer_scale);
                outer.transform.position.x = frame.outer_offset_x;
            }
            if let Some(inner) = group.child_mut(candle.flame.cones.inner) {
                inner.transform.set_uniform_scale(frame.inner_scale);
                inner.transform.position.x = frame.inner_offset_x;
            }
        }

        if let Some(node) = self.scene.get_mut(candle.light.node) {
            node.transform.position.y = candle.light.base_height + frame.light_lift;
            if let Some(light) = node.as_point_light_mut() {
                light.intensity = frame.light_intensity;
            }
        }
    }

    /// [`animate`](Self::animate) with a 60 Hz frame time
    pub fn animate_default(&mut self) {
        self.animate(DEFAULT_DELTA_TIME);
    }

    /// Move the candle, carrying the flame and light along with it
    ///
    /// Does nothing while no candle is loaded.
    pub fn update_position(&mut self, x: f32, y: f32, z: f32) {
        let Some(candle) = self.loaded.as_mut() else {
            return;
        };

        candle.placement.x = x;
        candle.placement.y = y;
        candle.placement.z = z;
        let placement = candle.placement;

        if let Some(model) = self.scene.get_mut(candle.model.node_id()) {
            model.transform.position = placement.position();
        }
        if let Some(group) = self.scene.get_mut(candle.flame.group) {
            group.transform.position = flame::flame_anchor(&placement);
        }

        let anchor = flame::light_anchor(&placement);
        candle.light.base_height = anchor.y;
        let lift = FlickerFrame::at(self.animation.elapsed_time, BASE_LIGHT_INTENSITY).light_lift;
        if let Some(light) = self.scene.get_mut(candle.light.node) {
            light.transform.position = Vec3::new(anchor.x, anchor.y + lift, anchor.z);
        }

        log::debug!("Candle moved to ({}, {}, {})", x, y, z);
    }

    /// Detach the model, flame and light from the scene
    ///
    /// Safe to call when nothing is loaded.
    pub fn remove(&mut self) {
        let Some(candle) = self.loaded.take() else {
            return;
        };

        self.scene.remove(candle.model.node_id());
        self.scene.remove(candle.flame.group);
        self.scene.remove(candle.light.node);
        log::info!("Candle removed");
    }

    /// Whether a candle is currently in the scene
    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Handle of the loaded model
    pub fn asset_handle(&self) -> Option<AssetHandle> {
        self.loaded.map(|c| c.model)
    }

    /// Flame group of the loaded candle
    pub fn flame_effect(&self) -> Option<FlameEffect> {
        self.loaded.map(|c| c.flame)
    }

    /// Point light of the loaded candle
    pub fn light_source(&self) -> Option<LightSource> {
        self.loaded.map(|c| c.light)
    }

    /// Placement the candle currently uses
    pub fn placement(&self) -> Option<PlacementConfig> {
        self.loaded.map(|c| c.placement)
    }

    /// Accumulated animation time
    pub fn elapsed_time(&self) -> f32 {
        self.animation.elapsed_time
    }

    /// The scene the candle lives in
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Mutable access to the scene
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// The asset loader
    pub fn loader(&self) -> &L {
        &self.loader
    }
}
