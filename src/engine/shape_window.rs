//! Shape window loop
//!
//! Poll events; a close request ends the loop, anything else leads to
//! clear, draw, present.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::WindowId,
};

use ocean_pixel::{CircleShape, Pixel};
use crate::systems::{RenderError, ShapeRenderer, WindowSystem};
use super::{run_event_loop, EngineError};

/// What the loop does after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Only a close request ends the loop
pub fn loop_control(event: &WindowEvent) -> LoopControl {
    match event {
        WindowEvent::CloseRequested => LoopControl::Exit,
        _ => LoopControl::Continue,
    }
}

/// A window that redraws one fixed circle until closed
pub struct ShapeWindow {
    title: String,
    size: (u32, u32),
    circle: CircleShape,
    clear: Pixel,
    vsync: bool,
    window: Option<WindowSystem>,
    renderer: Option<ShapeRenderer>,
    exit_error: Option<EngineError>,
}

impl ShapeWindow {
    pub fn new(title: impl Into<String>, width: u32, height: u32, circle: CircleShape) -> Self {
        Self {
            title: title.into(),
            size: (width, height),
            circle,
            clear: Pixel::BLACK,
            vsync: true,
            window: None,
            renderer: None,
            exit_error: None,
        }
    }

    pub fn with_clear_color(mut self, clear: Pixel) -> Self {
        self.clear = clear;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn circle(&self) -> &CircleShape {
        &self.circle
    }

    /// Run until a close event arrives
    pub fn run(mut self) -> Result<(), EngineError> {
        run_event_loop(&mut self)?;

        match self.exit_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: EngineError) {
        log::error!("{}", err);
        self.exit_error = Some(err);
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), EngineError> {
        let (width, height) = self.size;
        let window = WindowSystem::create(event_loop, &self.title, width, height)?;
        let renderer =
            ShapeRenderer::new(window.window().clone(), self.circle, self.clear, self.vsync)?;
        window.request_redraw();

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let result = match &mut self.renderer {
            Some(renderer) => renderer.render_frame(),
            None => return,
        };
        match result {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                log::warn!("Surface lost, reconfiguring");
                if let Some(renderer) = &mut self.renderer {
                    renderer.reconfigure();
                }
            }
            Err(RenderError::OutOfMemory) => {
                self.fail(event_loop, RenderError::OutOfMemory.into());
                return;
            }
            Err(e) => log::warn!("Skipping frame: {}", e),
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for ShapeWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.init(event_loop) {
                self.fail(event_loop, err);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if loop_control(&event) == LoopControl::Exit {
            log::info!("Close requested");
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn test_close_exits() {
        assert_eq!(loop_control(&WindowEvent::CloseRequested), LoopControl::Exit);
    }

    #[test]
    fn test_other_events_continue() {
        let events = [
            WindowEvent::RedrawRequested,
            WindowEvent::Focused(false),
            WindowEvent::Resized(PhysicalSize::new(10, 10)),
            WindowEvent::Destroyed,
            WindowEvent::Occluded(true),
        ];
        for event in &events {
            assert_eq!(loop_control(event), LoopControl::Continue, "{:?}", event);
        }
    }

    #[test]
    fn test_new_window_defaults() {
        let circle = CircleShape::new(100.0).with_fill(Pixel::GREEN);
        let window = ShapeWindow::new("Test", 200, 200, circle);
        assert_eq!(window.circle().fill, Pixel::GREEN);
        assert_eq!(window.clear, Pixel::BLACK);
        assert!(window.window.is_none());
    }
}
