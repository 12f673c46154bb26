//! The two demo programs, wired from configuration

mod noise;

pub use noise::NoiseApp;

use ocean_pixel::PixelRng;
use crate::config::{CircleConfig, NoiseConfig};
use crate::engine::{EngineError, PixelEngine, ShapeWindow};

/// Pixel engine hosting the random pixel fill
pub fn noise_engine(config: &NoiseConfig) -> Result<PixelEngine<NoiseApp>, EngineError> {
    let app = NoiseApp::new(config.title.clone(), PixelRng::from_optional_seed(config.seed));
    Ok(PixelEngine::construct(app, config.screen_spec())?.with_vsync(config.vsync))
}

/// Window drawing the configured circle
pub fn circle_window(config: &CircleConfig) -> ShapeWindow {
    ShapeWindow::new(config.title.clone(), config.width, config.height, config.circle())
        .with_clear_color(config.clear_pixel())
        .with_vsync(config.vsync)
}

/// Initialise env_logger with `level` as the default filter; `RUST_LOG` wins
pub fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocean_pixel::Pixel;

    #[test]
    fn test_noise_engine_from_defaults() {
        let engine = noise_engine(&NoiseConfig::default()).unwrap();
        assert_eq!(engine.screen().window_size(), (1024, 960));
        assert_eq!(ocean_pixel::PixelApp::name(engine.app()), "Ocean Test");
    }

    #[test]
    fn test_noise_engine_rejects_zero_width() {
        let config = NoiseConfig {
            width: 0,
            ..NoiseConfig::default()
        };
        assert!(matches!(
            noise_engine(&config),
            Err(EngineError::InvalidScreen(_))
        ));
    }

    #[test]
    fn test_circle_window_from_defaults() {
        let window = circle_window(&CircleConfig::default());
        assert_eq!(window.circle().radius, 100.0);
        assert_eq!(window.circle().fill, Pixel::GREEN);
    }
}
