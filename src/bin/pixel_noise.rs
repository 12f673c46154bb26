//! Pixel noise demo
//!
//! A 256x240 screen of 4x4 pixels, each set to a random color every frame.
//!
//! Run with: `cargo run --bin pixel_noise`

use ocean_demos::{config::AppConfig, demos};

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    demos::init_logging(&config.debug.log_level);
    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    // An invalid screen never reaches the run loop
    let engine = match demos::noise_engine(&config.noise) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    if let Err(e) = engine.start() {
        log::error!("{}", e);
    }
}
