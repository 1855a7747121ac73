//! Headless candle demo
//!
//! Loads the candle into an in-memory scene, runs the flame for a fixed
//! number of frames and logs what the renderer would see.
//!
//! Usage: `candle_demo [config.toml|config.ron]` (defaults to `candle.toml`).

mod config;

use candle_light::candle::{CandleAssetController, CandleError};
use candle_light::config::{Config, ConfigError};
use candle_light::foundation::logging;
use candle_light::foundation::time::Timer;
use candle_light::prelude::{LoadProgress, ObjLoader, SceneGraph, SimpleScene};
use thiserror::Error;

use config::AppConfig;

const DEFAULT_CONFIG_PATH: &str = "candle.toml";
const REPORT_INTERVAL: u64 = 60;

/// Errors that end the demo
#[derive(Error, Debug)]
enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Candle error: {0}")]
    Candle(#[from] CandleError),
}

fn run(config: &AppConfig) -> Result<(), AppError> {
    let mut scene = SimpleScene::new();
    let loader = ObjLoader::with_root(&config.asset_root);
    let mut candle = CandleAssetController::new(&mut scene, loader);

    let mut report_progress = |p: LoadProgress| {
        if let Some(fraction) = p.fraction() {
            log::debug!("Loading candle: {:.0}%", fraction * 100.0);
        }
    };
    futures::executor::block_on(
        candle.load_with_progress(config.placement, Some(&mut report_progress)),
    )?;
    log::info!(
        "Scene holds {} top-level nodes",
        candle.scene().node_count()
    );

    let mut clock = Timer::new();
    let halfway = u64::from(config.frame_count / 2);

    for _ in 0..config.frame_count {
        clock.advance(config.frame_delta);
        candle.animate(clock.delta_time());

        if clock.frame_count() == halfway {
            if let Some([x, y, z]) = config.move_to {
                candle.update_position(x, y, z);
                log::info!("Moved candle to ({}, {}, {})", x, y, z);
            }
        }

        if clock.frame_count() % REPORT_INTERVAL == 0 {
            let light = candle
                .light_source()
                .and_then(|l| candle.scene().get(l.node()));
            if let Some(light) = light {
                let intensity = light.as_point_light().map_or(0.0, |p| p.intensity);
                log::info!(
                    "t={:.2}s light at y={:.3} intensity {:.3}",
                    clock.total_time(),
                    light.transform.position.y,
                    intensity
                );
            }
        }
    }

    log::info!(
        "Simulated {} frames ({:.2}s, {:.0} fps)",
        clock.frame_count(),
        clock.total_time(),
        clock.average_fps()
    );

    candle.remove();
    log::info!(
        "Scene holds {} top-level nodes after removal",
        scene.node_count()
    );
    Ok(())
}

fn main() {
    logging::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let result = AppConfig::load_or_default(&config_path)
        .map_err(AppError::from)
        .and_then(|config| {
            log::info!("Starting candle demo with {:?}", config);
            run(&config)
        });

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
