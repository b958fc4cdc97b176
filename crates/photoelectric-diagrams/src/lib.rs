//! # Photoelectric Diagrams
//!
//! The two auxiliary 2D views, produced as display lists of primitive shapes
//! in canvas pixel coordinates (origin top left, y down). Nothing here
//! depends on a graphics backend.

pub mod energy;
pub mod graph;
pub mod primitives;
pub mod views;

pub use energy::*;
pub use graph::*;
pub use primitives::*;
pub use views::*;

/// Width of both diagram canvases in pixels
pub const CANVAS_WIDTH: f32 = 280.0;
/// Height of both diagram canvases in pixels
pub const CANVAS_HEIGHT: f32 = 200.0;
