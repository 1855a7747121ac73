//! # Candle Light
//!
//! Drops a candle model into a scene graph, hangs a flickering two-cone flame
//! and a shadow-casting point light above it, and animates them frame by
//! frame.
//!
//! ## Features
//!
//! - **Injected scene**: works against any [`scene::SceneGraph`]
//! - **Pluggable loading**: [`assets::AssetLoader`] with an OBJ/MTL implementation
//! - **Procedural flame**: cone meshes and a time-driven flicker curve
//! - **Config files**: placement and app settings from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use candle_light::prelude::*;
//!
//! fn main() -> Result<(), CandleError> {
//!     let mut scene = SimpleScene::new();
//!     let mut candle = CandleAssetController::new(&mut scene, ObjLoader::new());
//!
//!     futures::executor::block_on(candle.load(PlacementConfig::default()))?;
//!     for _ in 0..60 {
//!         candle.animate_default();
//!     }
//!     candle.remove();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod assets;
pub mod candle;
pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, AssetLoader, LoadProgress, ObjLoader},
        candle::{
            AssetHandle, CandleAssetController, CandleError, FlameEffect, LightSource,
            PlacementConfig,
        },
        config::{Config, ConfigError},
        foundation::{
            math::{Transform, Vec3},
            time::Timer,
        },
        scene::{SceneGraph, SceneNode, SimpleScene},
    };
}
