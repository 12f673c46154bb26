//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use ocean_demos::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("OCEAN_NOISE__SEED", "7");
    std::env::set_var("OCEAN_CIRCLE__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("OCEAN_NOISE__SEED");
    std::env::remove_var("OCEAN_CIRCLE__TITLE");

    assert_eq!(config.noise.seed, Some(7));
    assert_eq!(config.circle.title, "Test From Env");
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let config = AppConfig::load().unwrap();
    let builtin = AppConfig::default();

    assert_eq!(config.noise.screen_spec(), builtin.noise.screen_spec());
    assert_eq!(config.noise.title, builtin.noise.title);
    assert_eq!(config.circle.width, builtin.circle.width);
    assert_eq!(config.circle.height, builtin.circle.height);
    assert_eq!(config.circle.radius, builtin.circle.radius);
    assert_eq!(config.circle.fill_color, builtin.circle.fill_color);
    assert_eq!(config.circle.clear_color, builtin.circle.clear_color);
}

#[test]
#[serial]
fn test_missing_config_dir_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.noise.width, 256);
    assert_eq!(config.circle.title, "Ocean with SFML");
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    let dir = std::env::temp_dir().join(format!("ocean_config_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("default.toml"), "[noise]\nwidth = 128\nheight = 120\n").unwrap();
    std::fs::write(dir.join("user.toml"), "[noise]\nwidth = 64\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.noise.width, 64);
    assert_eq!(config.noise.height, 120);
    assert_eq!(config.noise.pixel_width, 4);
}

#[test]
#[serial]
fn test_bad_env_value_is_an_error() {
    std::env::set_var("OCEAN_NOISE__WIDTH", "wide");
    let result = AppConfig::load_from("does/not/exist");
    std::env::remove_var("OCEAN_NOISE__WIDTH");

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
