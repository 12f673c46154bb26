//! Pixel engine callbacks

use crate::canvas::Canvas;

/// User code hosted by the pixel engine
///
/// The engine owns the window and frame loop; an app only supplies the
/// per-frame draw instructions. Returning `false` from either callback stops
/// the engine.
pub trait PixelApp {
    /// Name shown in the window title
    fn name(&self) -> &str;

    /// Called once after the window and GPU are ready
    fn on_user_create(&mut self) -> bool {
        true
    }

    /// Called once per frame with the seconds elapsed since the last frame
    fn on_user_update(&mut self, canvas: &mut Canvas, elapsed: f32) -> bool;
}
