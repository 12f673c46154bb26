//! 8-bit RGBA color

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A single pixel color
///
/// Laid out as four consecutive bytes so a slice of pixels can be uploaded
/// directly into an `Rgba8Unorm` texture.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);
    pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);
    pub const GREEN: Pixel = Pixel::rgb(0, 255, 0);

    /// Create a fully opaque pixel
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a pixel with explicit alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalized [r, g, b, a] for shader uniforms
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(c: [u8; 3]) -> Self {
        Pixel::rgb(c[0], c[1], c[2])
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(c: [u8; 4]) -> Self {
        Pixel::rgba(c[0], c[1], c[2], c[3])
    }
}
