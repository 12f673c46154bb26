//! GPU rendering systems
//!
//! Each demo owns one renderer:
//! - [`CanvasRenderer`] presents the pixel engine's CPU canvas
//! - [`ShapeRenderer`] clears the window and draws the circle

use std::sync::Arc;
use winit::{dpi::PhysicalSize, window::Window};
use ocean_pixel::{Canvas, CircleShape, DrawTarget, Pixel};
use ocean_render::{
    context::{ContextError, RenderContext},
    pipeline::{clear_color, BlitPipeline, ShapePipeline, ShapeUniforms},
};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

/// Acquire a surface texture, encode with `draw`, submit and present
fn present<F>(context: &RenderContext, label: &str, draw: F) -> Result<(), RenderError>
where
    F: FnOnce(&mut wgpu::CommandEncoder, &wgpu::TextureView),
{
    let output = context.surface.get_current_texture()?;
    let view = output
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = context
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some(label) });

    draw(&mut encoder, &view);

    context.queue.submit(std::iter::once(encoder.finish()));
    output.present();
    Ok(())
}

/// Presents a CPU canvas, stretched over the window
pub struct CanvasRenderer {
    context: RenderContext,
    blit_pipeline: BlitPipeline,
}

impl CanvasRenderer {
    /// Create a renderer for a `width × height` canvas
    pub fn new(
        window: Arc<Window>,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;
        let blit_pipeline = BlitPipeline::new(&context.device, context.config.format, width, height);

        Ok(Self {
            context,
            blit_pipeline,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.context.resize(size);
    }

    /// Reconfigure after a lost surface
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }

    /// Upload the canvas and present it
    pub fn render_canvas(&mut self, canvas: &Canvas) -> Result<(), RenderError> {
        if self.blit_pipeline.texture_size() != (canvas.width(), canvas.height()) {
            return Err(RenderError::Other(format!(
                "Canvas is {}x{} but texture is {:?}",
                canvas.width(),
                canvas.height(),
                self.blit_pipeline.texture_size()
            )));
        }

        self.blit_pipeline.upload(&self.context.queue, canvas.as_bytes());
        let blit = &self.blit_pipeline;
        present(&self.context, "Canvas Encoder", |encoder, view| {
            blit.render(encoder, view);
        })
    }
}

/// Draws one circle over a cleared background
pub struct ShapeRenderer {
    context: RenderContext,
    shape_pipeline: ShapePipeline,
    circle: CircleShape,
    clear: Pixel,
    /// Size of the view the circle is positioned in; stays fixed on resize
    viewport: [f32; 2],
}

impl ShapeRenderer {
    pub fn new(
        window: Arc<Window>,
        circle: CircleShape,
        clear: Pixel,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;
        let shape_pipeline = ShapePipeline::new(&context.device, context.config.format);
        let viewport = context.surface_size();

        let renderer = Self {
            context,
            shape_pipeline,
            circle,
            clear,
            viewport,
        };
        renderer.write_uniforms();
        Ok(renderer)
    }

    /// Handle window resize
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.context.resize(size);
        self.write_uniforms();
    }

    /// Reconfigure after a lost surface
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }

    /// Clear, draw the circle and present
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        let shape = &self.shape_pipeline;
        let clear = clear_color(self.clear);
        present(&self.context, "Shape Encoder", |encoder, view| {
            shape.render(encoder, view, clear);
        })
    }

    fn write_uniforms(&self) {
        let uniforms =
            ShapeUniforms::for_circle(&self.circle, self.viewport, self.context.surface_size());
        self.shape_pipeline
            .update_uniforms(&self.context.queue, &uniforms);
    }
}
