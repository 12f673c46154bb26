//! Application systems
//!
//! Window and GPU plumbing shared by the pixel engine and the shape window.

mod render;
mod window;

pub use render::{CanvasRenderer, RenderError, ShapeRenderer};
pub use window::{fps_title, WindowError, WindowSystem};
