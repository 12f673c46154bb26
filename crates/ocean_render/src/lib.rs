//! GPU presentation for the Ocean demos
//!
//! This crate owns everything that talks to wgpu:
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::BlitPipeline`] - Stretches a CPU canvas over the surface
//! - [`pipeline::ShapePipeline`] - Clears the surface and draws a filled circle

pub mod context;
pub mod pipeline;

pub use context::{ContextError, RenderContext};
pub use pipeline::{BlitPipeline, ShapePipeline, ShapeUniforms};
