//! Random pixel colors
//!
//! Uses PCG so a configured seed reproduces the same noise frames; without a
//! seed the generator is seeded from OS entropy.

use rand::prelude::*;
use rand_pcg::Pcg64;

use crate::canvas::DrawTarget;
use crate::color::Pixel;

/// Color source for noise fills
#[derive(Debug, Clone)]
pub struct PixelRng {
    rng: Pcg64,
}

impl PixelRng {
    /// Deterministic generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg64::from_entropy(),
        }
    }

    /// Use `seed` when given, entropy otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                log::debug!("Noise generator seeded with {}", seed);
                Self::seeded(seed)
            }
            None => Self::from_entropy(),
        }
    }

    /// Opaque pixel with each channel uniform over 0..=255
    pub fn next_pixel(&mut self) -> Pixel {
        Pixel::rgb(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}

/// Draw one random pixel at every coordinate of `target`
pub fn fill_random<T: DrawTarget + ?Sized>(target: &mut T, rng: &mut PixelRng) {
    for x in 0..target.width() {
        for y in 0..target.height() {
            let pixel = rng.next_pixel();
            target.draw(x, y, pixel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    /// Records every draw call instead of storing pixels
    struct RecordingTarget {
        width: u32,
        height: u32,
        draws: Vec<(u32, u32, Pixel)>,
    }

    impl DrawTarget for RecordingTarget {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn draw(&mut self, x: u32, y: u32, pixel: Pixel) {
            self.draws.push((x, y, pixel));
        }
    }

    #[test]
    fn test_every_pixel_drawn_exactly_once() {
        let mut target = RecordingTarget {
            width: 16,
            height: 9,
            draws: Vec::new(),
        };
        let mut rng = PixelRng::seeded(1);
        fill_random(&mut target, &mut rng);

        assert_eq!(target.draws.len(), 16 * 9);
        let mut hits = vec![0u32; 16 * 9];
        for (x, y, _) in &target.draws {
            assert!(*x < 16 && *y < 9);
            hits[(*y * 16 + *x) as usize] += 1;
        }
        assert!(hits.iter().all(|&h| h == 1));
    }

    #[test]
    fn test_pixels_are_opaque() {
        let mut rng = PixelRng::seeded(7);
        for _ in 0..1000 {
            assert_eq!(rng.next_pixel().a, 255);
        }
    }

    #[test]
    fn test_channels_span_full_range() {
        let mut rng = PixelRng::seeded(3);
        let mut min = 255u8;
        let mut max = 0u8;
        for _ in 0..20_000 {
            let p = rng.next_pixel();
            min = min.min(p.r).min(p.g).min(p.b);
            max = max.max(p.r).max(p.g).max(p.b);
        }
        assert_eq!(min, 0);
        assert_eq!(max, 255);
    }

    #[test]
    fn test_seeded_fill_is_reproducible() {
        let mut a = Canvas::new(8, 8);
        let mut b = Canvas::new(8, 8);
        fill_random(&mut a, &mut PixelRng::seeded(42));
        fill_random(&mut b, &mut PixelRng::seeded(42));
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn test_consecutive_frames_differ() {
        let mut rng = PixelRng::seeded(42);
        let mut canvas = Canvas::new(8, 8);
        fill_random(&mut canvas, &mut rng);
        let first = canvas.pixels().to_vec();
        fill_random(&mut canvas, &mut rng);
        assert_ne!(first, canvas.pixels());
    }

    #[test]
    fn test_empty_target() {
        let mut target = RecordingTarget {
            width: 0,
            height: 5,
            draws: Vec::new(),
        };
        fill_random(&mut target, &mut PixelRng::seeded(0));
        assert!(target.draws.is_empty());
    }
}
