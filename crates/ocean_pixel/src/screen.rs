//! Virtual screen dimensions
//!
//! A pixel-engine screen is a grid of `width × height` virtual pixels, each
//! drawn as a `pixel_width × pixel_height` block on the real window.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest window side the engine will try to create, in physical pixels.
///
/// Matches the default `max_texture_dimension_2d` limit of wgpu, since the
/// surface must fit in a single texture.
pub const MAX_WINDOW_EXTENT: u32 = 8192;

/// Screen size and pixel scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSpec {
    /// Virtual screen width in pixels
    pub width: u32,
    /// Virtual screen height in pixels
    pub height: u32,
    /// Horizontal scale of each virtual pixel
    pub pixel_width: u32,
    /// Vertical scale of each virtual pixel
    pub pixel_height: u32,
}

impl ScreenSpec {
    pub fn new(width: u32, height: u32, pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            width,
            height,
            pixel_width,
            pixel_height,
        }
    }

    /// Check the spec can back a real window
    pub fn validate(&self) -> Result<(), ScreenError> {
        if self.width == 0 || self.height == 0 {
            return Err(ScreenError::ZeroSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.pixel_width == 0 || self.pixel_height == 0 {
            return Err(ScreenError::ZeroPixelScale {
                pixel_width: self.pixel_width,
                pixel_height: self.pixel_height,
            });
        }

        let window_width = self.width.checked_mul(self.pixel_width);
        let window_height = self.height.checked_mul(self.pixel_height);
        match (window_width, window_height) {
            (Some(w), Some(h)) if w <= MAX_WINDOW_EXTENT && h <= MAX_WINDOW_EXTENT => Ok(()),
            _ => Err(ScreenError::TooLarge {
                width: self.width as u64 * self.pixel_width as u64,
                height: self.height as u64 * self.pixel_height as u64,
            }),
        }
    }

    /// Window size in physical pixels
    ///
    /// Only meaningful for a spec that passed [`ScreenSpec::validate`].
    pub fn window_size(&self) -> (u32, u32) {
        (
            self.width.saturating_mul(self.pixel_width),
            self.height.saturating_mul(self.pixel_height),
        )
    }
}

/// Rejected screen spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    ZeroSize { width: u32, height: u32 },
    ZeroPixelScale { pixel_width: u32, pixel_height: u32 },
    TooLarge { width: u64, height: u64 },
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::ZeroSize { width, height } => {
                write!(f, "Screen size must be non-zero, got {}x{}", width, height)
            }
            ScreenError::ZeroPixelScale {
                pixel_width,
                pixel_height,
            } => write!(
                f,
                "Pixel scale must be non-zero, got {}x{}",
                pixel_width, pixel_height
            ),
            ScreenError::TooLarge { width, height } => write!(
                f,
                "Window of {}x{} exceeds the {} pixel limit",
                width, height, MAX_WINDOW_EXTENT
            ),
        }
    }
}

impl std::error::Error for ScreenError {}
