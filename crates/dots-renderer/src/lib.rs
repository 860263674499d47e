//! # Dots Renderer
//!
//! Draws the pixel-space markers produced by the simulation as instanced quads.

pub mod renderer;
pub mod viewport;

pub use renderer::*;
pub use viewport::*;
