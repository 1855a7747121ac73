//! Candle asset controller
//!
//! Loads the candle model into an injected scene, hangs a flickering flame
//! and a point light above it, and keeps the three in step.
//!
//! ```no_run
//! use candle_light::prelude::*;
//!
//! let mut scene = SimpleScene::new();
//! let mut candle = CandleAssetController::new(&mut scene, ObjLoader::new());
//! futures::executor::block_on(candle.load(PlacementConfig::at(0.0, 1.0, 0.0)))?;
//! candle.animate(1.0 / 60.0);
//! candle.remove();
//! # Ok::<(), CandleError>(())
//! ```

mod controller;
pub mod flame;
pub mod flicker;
mod placement;

#[cfg(test)]
mod tests;

pub use controller::{
    AnimationState, AssetHandle, CandleAssetController, CandleError, FlameEffect, LightSource,
    CANDLE_ASSET_PATH, DEFAULT_DELTA_TIME,
};
pub use flicker::FlickerFrame;
pub use placement::PlacementConfig;
