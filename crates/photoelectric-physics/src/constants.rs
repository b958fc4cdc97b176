//! Physical constants and slider domains
//!
//! Frequencies throughout the crate are expressed in units of 10^14 Hz, the
//! unit the frequency control works in.

/// Planck's constant in eV·s
pub const PLANCK_EV_S: f64 = 4.1357e-15;

/// Speed of light in m/s
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// One frequency unit in Hz
pub const FREQUENCY_UNIT_HZ: f64 = 1e14;

/// Lowest selectable frequency (10^14 Hz)
pub const MIN_FREQUENCY: f64 = 1.0;

/// Highest selectable frequency (10^14 Hz)
pub const MAX_FREQUENCY: f64 = 30.0;

/// Frequency slider resolution
pub const FREQUENCY_STEP: f64 = 0.1;

pub const MIN_INTENSITY: u32 = 1;
pub const MAX_INTENSITY: u32 = 10;

/// Current at which the bulb is drawn fully lit, also the graph's y-axis ceiling
pub const FULL_SCALE_CURRENT: f64 = 100.0;
