//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`OCEAN_SECTION__KEY`)
//!
//! Every field has a default equal to the demo's built-in value, so all
//! sources are optional.

use figment::{Figment, providers::{Format, Toml, Env}};
use ocean_pixel::{CircleShape, Pixel, ScreenSpec};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Random pixel demo
    #[serde(default)]
    pub noise: NoiseConfig,
    /// Circle window demo
    #[serde(default)]
    pub circle: CircleConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`OCEAN_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // OCEAN_NOISE__SEED=7 -> noise.seed = 7
        figment = figment.merge(Env::prefixed("OCEAN_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Random pixel demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// App name, shown in the window title
    pub title: String,
    /// Virtual screen width in pixels
    pub width: u32,
    /// Virtual screen height in pixels
    pub height: u32,
    /// Horizontal size of each virtual pixel
    pub pixel_width: u32,
    /// Vertical size of each virtual pixel
    pub pixel_height: u32,
    /// Enable VSync
    pub vsync: bool,
    /// Fixed noise seed; entropy when unset
    pub seed: Option<u64>,
}

impl NoiseConfig {
    pub fn screen_spec(&self) -> ScreenSpec {
        ScreenSpec::new(self.width, self.height, self.pixel_width, self.pixel_height)
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            title: "Ocean Test".to_string(),
            width: 256,
            height: 240,
            pixel_width: 4,
            pixel_height: 4,
            vsync: true,
            seed: None,
        }
    }
}

/// Circle window demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Circle radius
    pub radius: f32,
    /// Circle fill [r, g, b]
    pub fill_color: [u8; 3],
    /// Background [r, g, b]
    pub clear_color: [u8; 3],
    /// Enable VSync
    pub vsync: bool,
}

impl CircleConfig {
    /// The circle described by this config, at the window origin
    pub fn circle(&self) -> CircleShape {
        CircleShape::new(self.radius).with_fill(Pixel::from(self.fill_color))
    }

    pub fn clear_pixel(&self) -> Pixel {
        Pixel::from(self.clear_color)
    }
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            title: "Ocean with SFML".to_string(),
            width: 200,
            height: 200,
            radius: 100.0,
            fill_color: [0, 255, 0],
            clear_color: [0, 0, 0],
            vsync: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.noise.screen_spec(), ScreenSpec::new(256, 240, 4, 4));
        assert_eq!(config.noise.seed, None);
        assert_eq!(config.circle.width, 200);
        assert_eq!(config.circle.radius, 100.0);
    }

    #[test]
    fn test_default_circle() {
        let config = CircleConfig::default();
        let circle = config.circle();
        assert_eq!(circle.fill, Pixel::GREEN);
        assert_eq!(circle.position, [0.0, 0.0]);
        assert_eq!(config.clear_pixel(), Pixel::BLACK);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("pixel_width"));
        assert!(toml.contains("fill_color"));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = toml::from_str("[noise]\nseed = 9\n").unwrap();
        assert_eq!(config.noise.seed, Some(9));
        assert_eq!(config.noise.width, 256);
        assert_eq!(config.circle.title, "Ocean with SFML");
    }
}
