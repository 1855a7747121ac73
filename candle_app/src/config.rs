//! Demo configuration

use std::path::PathBuf;

use candle_light::candle::PlacementConfig;
use candle_light::config::{Config, Deserialize, Serialize};

/// Settings for the headless candle demo
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the candle asset path is resolved against
    pub asset_root: PathBuf,
    /// Where the candle is placed
    pub placement: PlacementConfig,
    /// Fixed simulation step in seconds
    pub frame_delta: f32,
    /// Number of frames to simulate
    pub frame_count: u32,
    /// Position to move the candle to halfway through the run
    pub move_to: Option<[f32; 3]>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),
            placement: PlacementConfig::default(),
            frame_delta: 1.0 / 60.0,
            frame_count: 180,
            move_to: None,
        }
    }
}

impl Config for AppConfig {}
