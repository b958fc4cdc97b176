//! # Photoelectric Physics
//!
//! Closed-form photoelectric relations, the metal table and the
//! wavelength-to-colour mapping used to tint photons.

pub mod constants;
pub mod metal;
pub mod photoelectric;
pub mod spectrum;

pub use constants::*;
pub use metal::*;
pub use photoelectric::*;
pub use spectrum::*;
