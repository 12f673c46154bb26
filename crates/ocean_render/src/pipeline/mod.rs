//! Render pipelines
//!
//! Both pipelines draw a single fullscreen triangle; the blit pipeline samples
//! the canvas texture, the shape pipeline evaluates a circle per fragment.

pub mod types;
pub mod blit_pipeline;
pub mod shape_pipeline;

pub use types::ShapeUniforms;
pub use blit_pipeline::BlitPipeline;
pub use shape_pipeline::ShapePipeline;

/// Convert an 8-bit pixel to a wgpu clear color
pub fn clear_color(pixel: ocean_pixel::Pixel) -> wgpu::Color {
    let [r, g, b, a] = pixel.to_f32_array();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

/// Primitive state shared by the fullscreen-triangle pipelines
fn fullscreen_primitive() -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: None,
        unclipped_depth: false,
        polygon_mode: wgpu::PolygonMode::Fill,
        conservative: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocean_pixel::Pixel;

    #[test]
    fn test_clear_color_black() {
        let c = clear_color(Pixel::BLACK);
        assert_eq!((c.r, c.g, c.b, c.a), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_clear_color_green() {
        let c = clear_color(Pixel::GREEN);
        assert_eq!((c.r, c.g, c.b), (0.0, 1.0, 0.0));
    }
}
