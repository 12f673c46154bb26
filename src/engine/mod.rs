//! Frame loop hosts
//!
//! - [`PixelEngine`] hosts a [`ocean_pixel::PixelApp`] over a scaled canvas
//! - [`ShapeWindow`] polls for close and redraws one circle every frame

mod frame_counter;
mod pixel_engine;
mod shape_window;

pub use frame_counter::FrameCounter;
pub use pixel_engine::PixelEngine;
pub use shape_window::{loop_control, LoopControl, ShapeWindow};

use std::fmt;
use winit::{application::ApplicationHandler, event_loop::{ControlFlow, EventLoop}};

use ocean_pixel::ScreenError;
use ocean_render::ContextError;
use crate::systems::{RenderError, WindowError};

/// Errors that stop a frame loop from starting or running
#[derive(Debug)]
pub enum EngineError {
    /// Screen spec rejected at construction
    InvalidScreen(ScreenError),
    /// Window could not be created
    Window(WindowError),
    /// GPU setup failed
    Context(ContextError),
    /// Unrecoverable presentation failure
    Render(RenderError),
    /// The event loop could not be created or failed while running
    EventLoop(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidScreen(e) => write!(f, "Invalid screen: {}", e),
            EngineError::Window(e) => write!(f, "{}", e),
            EngineError::Context(e) => write!(f, "GPU setup failed: {}", e),
            EngineError::Render(e) => write!(f, "{}", e),
            EngineError::EventLoop(msg) => write!(f, "Event loop error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidScreen(e) => Some(e),
            EngineError::Window(e) => Some(e),
            EngineError::Context(e) => Some(e),
            EngineError::Render(e) => Some(e),
            EngineError::EventLoop(_) => None,
        }
    }
}

impl From<ScreenError> for EngineError {
    fn from(e: ScreenError) -> Self {
        EngineError::InvalidScreen(e)
    }
}

impl From<WindowError> for EngineError {
    fn from(e: WindowError) -> Self {
        EngineError::Window(e)
    }
}

impl From<ContextError> for EngineError {
    fn from(e: ContextError) -> Self {
        EngineError::Context(e)
    }
}

impl From<RenderError> for EngineError {
    fn from(e: RenderError) -> Self {
        EngineError::Render(e)
    }
}

/// Run `handler` on a fresh polling event loop until it exits
fn run_event_loop<H: ApplicationHandler>(handler: &mut H) -> Result<(), EngineError> {
    let event_loop = EventLoop::new().map_err(|e| EngineError::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run_app(handler)
        .map_err(|e| EngineError::EventLoop(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::from(ScreenError::ZeroSize { width: 0, height: 0 });
        assert!(err.to_string().starts_with("Invalid screen"));
        assert!(err.source().is_some());

        let err = EngineError::EventLoop("gone".to_string());
        assert_eq!(err.to_string(), "Event loop error: gone");
        assert!(err.source().is_none());
    }
}
