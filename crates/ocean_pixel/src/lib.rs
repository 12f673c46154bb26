//! Pixel types for the Ocean demos
//!
//! This crate holds everything the demos compute on the CPU before a frame
//! reaches the GPU:
//!
//! - [`Pixel`] - 8-bit RGBA color
//! - [`Canvas`] - Row-major frame buffer of pixels
//! - [`DrawTarget`] - Anything that accepts per-pixel draw calls
//! - [`ScreenSpec`] - Virtual screen dimensions and pixel scale
//! - [`CircleShape`] - A filled circle descriptor
//! - [`PixelRng`] - Seedable color source for noise fills
//! - [`PixelApp`] - Per-frame callbacks hosted by the pixel engine

mod color;
mod canvas;
mod screen;
mod shape;
mod random;
mod app;

pub use color::Pixel;
pub use canvas::{Canvas, DrawTarget};
pub use screen::{ScreenSpec, ScreenError, MAX_WINDOW_EXTENT};
pub use shape::CircleShape;
pub use random::{PixelRng, fill_random};
pub use app::PixelApp;
