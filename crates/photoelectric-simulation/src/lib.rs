//! # Photoelectric Simulation
//!
//! Frame-driven photon and electron simulation. A single [`SimulationState`]
//! owns every live particle and is advanced once per display frame.

pub mod circuit;
pub mod emission;
pub mod history;
pub mod lifecycle;
pub mod params;
pub mod particle;
pub mod simulation;

pub use circuit::*;
pub use emission::*;
pub use history::*;
pub use lifecycle::*;
pub use params::*;
pub use particle::*;
pub use simulation::*;
