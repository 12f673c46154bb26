//! Random pixel fill

use ocean_pixel::{fill_random, Canvas, PixelApp, PixelRng};

/// Fills every pixel with a random color each frame
pub struct NoiseApp {
    name: String,
    rng: PixelRng,
}

impl NoiseApp {
    pub fn new(name: impl Into<String>, rng: PixelRng) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl PixelApp for NoiseApp {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_user_update(&mut self, canvas: &mut Canvas, _elapsed: f32) -> bool {
        fill_random(canvas, &mut self.rng);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_update_keep_running() {
        let mut app = NoiseApp::new("Ocean Test", PixelRng::seeded(5));
        let mut canvas = Canvas::new(32, 30);
        assert!(app.on_user_create());
        assert!(app.on_user_update(&mut canvas, 0.016));
        assert!(canvas.pixels().iter().all(|p| p.a == 255));
    }

    #[test]
    fn test_each_frame_redraws() {
        let mut app = NoiseApp::new("Ocean Test", PixelRng::seeded(5));
        let mut canvas = Canvas::new(32, 30);
        app.on_user_update(&mut canvas, 0.016);
        let first = canvas.pixels().to_vec();
        app.on_user_update(&mut canvas, 0.016);
        assert_ne!(first, canvas.pixels());
    }
}
