//! Green circle demo
//!
//! A 200x200 window showing one green circle until it is closed.
//!
//! Run with: `cargo run --bin green_circle`

use ocean_demos::{config::AppConfig, demos};

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    demos::init_logging(&config.debug.log_level);
    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    if let Err(e) = demos::circle_window(&config.circle).run() {
        log::error!("{}", e);
    }
}
