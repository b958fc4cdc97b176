//! # Photoelectric Renderer
//!
//! Visualization of the photoelectric scene and its diagrams on an egui painter.

pub mod camera;
pub mod canvas;
pub mod scene;

pub use camera::*;
pub use canvas::*;
pub use scene::*;
