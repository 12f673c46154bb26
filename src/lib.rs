//! Ocean demos
//!
//! Two small windowed programs on top of winit and wgpu: a pixel engine
//! filling its screen with random colors, and a window drawing one green
//! circle until closed.

pub mod config;
pub mod systems;
pub mod engine;
pub mod demos;
