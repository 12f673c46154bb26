//! CPU frame buffer

use crate::color::Pixel;

/// Anything that accepts per-pixel draw calls
///
/// The noise fill is written against this trait so it can target the real
/// canvas or a recording target in tests.
pub trait DrawTarget {
    /// Width in pixels
    fn width(&self) -> u32;
    /// Height in pixels
    fn height(&self) -> u32;
    /// Set the pixel at (x, y). Out-of-bounds coordinates are ignored.
    fn draw(&mut self, x: u32, y: u32, pixel: Pixel);
}

/// Row-major pixel buffer matching the virtual screen
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Canvas {
    /// Create a canvas filled with black
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::BLACK; width as usize * height as usize],
        }
    }

    /// Fill every pixel with one color
    pub fn clear(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }

    /// Read a pixel, `None` when out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Raw RGBA bytes, ready for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

impl DrawTarget for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw(&mut self, x: u32, y: u32, pixel: Pixel) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = pixel;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_black() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.pixels().len(), 12);
        assert!(canvas.pixels().iter().all(|p| *p == Pixel::BLACK));
        assert_eq!(canvas.as_bytes().len(), 48);
    }

    #[test]
    fn test_draw_and_get() {
        let mut canvas = Canvas::new(4, 3);
        canvas.draw(3, 2, Pixel::GREEN);
        assert_eq!(canvas.get(3, 2), Some(Pixel::GREEN));
        // Row-major: last pixel
        assert_eq!(canvas.pixels()[11], Pixel::GREEN);
    }

    #[test]
    fn test_out_of_bounds_draw_is_ignored() {
        let mut canvas = Canvas::new(2, 2);
        canvas.draw(2, 0, Pixel::WHITE);
        canvas.draw(0, 5, Pixel::WHITE);
        assert!(canvas.pixels().iter().all(|p| *p == Pixel::BLACK));
        assert_eq!(canvas.get(2, 0), None);
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear(Pixel::WHITE);
        assert!(canvas.pixels().iter().all(|p| *p == Pixel::WHITE));
    }
}
