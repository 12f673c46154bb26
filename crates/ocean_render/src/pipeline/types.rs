//! GPU-compatible data types
//!
//! These types match the shader layouts exactly.

use bytemuck::{Pod, Zeroable};
use ocean_pixel::CircleShape;

/// Uniforms for the shape shader
/// Layout: 48 bytes total (must match shape.wgsl ShapeUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeUniforms {
    /// Circle center in view coordinates
    pub center: [f32; 2],
    /// Circle radius in view coordinates
    pub radius: f32,
    pub _padding: f32,
    /// Size of the view the circle is positioned in
    pub viewport: [f32; 2],
    /// Size of the surface in physical pixels
    pub surface_size: [f32; 2],
    /// RGBA fill color
    pub color: [f32; 4],
}

impl ShapeUniforms {
    /// Uniforms for `circle` in a view of `viewport` size stretched over the surface
    pub fn for_circle(circle: &CircleShape, viewport: [f32; 2], surface_size: [f32; 2]) -> Self {
        Self {
            center: circle.center(),
            radius: circle.radius,
            _padding: 0.0,
            viewport,
            surface_size,
            color: circle.fill.to_f32_array(),
        }
    }
}

impl Default for ShapeUniforms {
    fn default() -> Self {
        Self {
            center: [0.0; 2],
            radius: 0.0,
            _padding: 0.0,
            viewport: [1.0; 2],
            surface_size: [1.0; 2],
            color: [1.0; 4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocean_pixel::Pixel;

    #[test]
    fn test_shape_uniforms_size() {
        assert_eq!(std::mem::size_of::<ShapeUniforms>(), 48);
    }

    #[test]
    fn test_for_circle() {
        let circle = CircleShape::new(100.0).with_fill(Pixel::GREEN);
        let u = ShapeUniforms::for_circle(&circle, [200.0, 200.0], [400.0, 400.0]);
        assert_eq!(u.center, [100.0, 100.0]);
        assert_eq!(u.radius, 100.0);
        assert_eq!(u.color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(u.surface_size, [400.0, 400.0]);
    }
}
