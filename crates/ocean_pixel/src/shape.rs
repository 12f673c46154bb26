//! Shape descriptors

use crate::color::Pixel;
use serde::{Deserialize, Serialize};

/// A filled circle
///
/// `position` is the top-left corner of the bounding box, so the center sits
/// at `position + radius` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub position: [f32; 2],
    pub radius: f32,
    pub fill: Pixel,
}

impl CircleShape {
    /// Circle at the origin with a white fill
    pub fn new(radius: f32) -> Self {
        Self {
            position: [0.0, 0.0],
            radius,
            fill: Pixel::WHITE,
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = [x, y];
        self
    }

    pub fn with_fill(mut self, fill: Pixel) -> Self {
        self.fill = fill;
        self
    }

    pub fn center(&self) -> [f32; 2] {
        [self.position[0] + self.radius, self.position[1] + self.radius]
    }

    /// Whether a point lies inside or on the circle
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let [cx, cy] = self.center();
        let dx = x - cx;
        let dy = y - cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}
