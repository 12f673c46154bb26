//! Pixel engine
//!
//! Hosts a [`PixelApp`] the way a pixel-game-engine does: the engine builds a
//! window of `width*pixel_width × height*pixel_height`, hands the app a canvas
//! of `width × height` virtual pixels each frame, and presents it scaled up.

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::WindowId,
};

use ocean_pixel::{Canvas, PixelApp, ScreenSpec};
use crate::systems::{CanvasRenderer, RenderError, WindowSystem};
use super::{run_event_loop, EngineError, FrameCounter};

/// Frame loop host for a [`PixelApp`]
pub struct PixelEngine<A: PixelApp> {
    app: A,
    screen: ScreenSpec,
    vsync: bool,
    canvas: Canvas,
    window: Option<WindowSystem>,
    renderer: Option<CanvasRenderer>,
    frame_counter: FrameCounter,
    last_frame: Instant,
    /// Set when the loop stopped because of a failure
    exit_error: Option<EngineError>,
}

impl<A: PixelApp> PixelEngine<A> {
    /// Validate `screen` and prepare the engine
    ///
    /// Nothing is opened until [`PixelEngine::start`]; an invalid screen means
    /// the run loop is never entered.
    pub fn construct(app: A, screen: ScreenSpec) -> Result<Self, EngineError> {
        screen.validate()?;

        Ok(Self {
            app,
            screen,
            vsync: true,
            canvas: Canvas::new(screen.width, screen.height),
            window: None,
            renderer: None,
            frame_counter: FrameCounter::new(),
            last_frame: Instant::now(),
            exit_error: None,
        })
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn screen(&self) -> ScreenSpec {
        self.screen
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    /// Run until the window closes or the app asks to stop
    pub fn start(mut self) -> Result<(), EngineError> {
        log::info!(
            "Starting '{}' at {}x{} (pixel {}x{})",
            self.app.name(),
            self.screen.width,
            self.screen.height,
            self.screen.pixel_width,
            self.screen.pixel_height
        );

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
        let (width, height) = self.screen.window_size();
        let window = WindowSystem::create(event_loop, self.app.name(), width, height)?;
        let renderer = CanvasRenderer::new(
            window.window().clone(),
            self.screen.width,
            self.screen.height,
            self.vsync,
        )?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if !self.app.on_user_update(&mut self.canvas, elapsed) {
            log::info!("'{}' requested exit", self.app.name());
            event_loop.exit();
            return;
        }

        let result = match &mut self.renderer {
            Some(renderer) => renderer.render_canvas(&self.canvas),
            None => Ok(()),
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
            if let Some(fps) = self.frame_counter.tick(elapsed) {
                window.update_title(fps);
            }
            window.request_redraw();
        }
    }
}

impl<A: PixelApp> ApplicationHandler for PixelEngine<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
            return;
        }

        if !self.app.on_user_create() {
            log::info!("'{}' declined to start", self.app.name());
            event_loop.exit();
            return;
        }

        self.last_frame = Instant::now();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }
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

    struct NullApp;

    impl PixelApp for NullApp {
        fn name(&self) -> &str {
            "Null"
        }

        fn on_user_update(&mut self, _canvas: &mut Canvas, _elapsed: f32) -> bool {
            true
        }
    }

    #[test]
    fn test_construct_valid_screen() {
        let engine = PixelEngine::construct(NullApp, ScreenSpec::new(256, 240, 4, 4)).unwrap();
        assert_eq!(engine.screen().window_size(), (1024, 960));
        assert_eq!(engine.canvas.pixels().len(), 256 * 240);
        assert!(engine.window.is_none());
    }

    #[test]
    fn test_construct_rejects_invalid_screen() {
        let result = PixelEngine::construct(NullApp, ScreenSpec::new(0, 240, 4, 4));
        assert!(matches!(result, Err(EngineError::InvalidScreen(_))));

        let result = PixelEngine::construct(NullApp, ScreenSpec::new(256, 240, 0, 4));
        assert!(matches!(result, Err(EngineError::InvalidScreen(_))));
    }
}
