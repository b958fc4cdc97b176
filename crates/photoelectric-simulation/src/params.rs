//! User parameters and tick tuning

use glam::Vec3;
use photoelectric_physics::{Metal, MAX_FREQUENCY, MAX_INTENSITY, MIN_FREQUENCY, MIN_INTENSITY};

/// Values chosen by the user through the control panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    /// Light frequency in 10^14 Hz, in [1, 30]
    pub frequency: f64,
    /// Light intensity, in [1, 10]
    pub intensity: u32,
    pub metal: Metal,
}

impl SimulationParameters {
    /// Build a parameter set, clamping each value into its control range
    pub fn new(frequency: f64, intensity: u32, metal: Metal) -> Self {
        Self {
            frequency,
            intensity,
            metal,
        }
        .clamped()
    }

    pub fn clamped(self) -> Self {
        let frequency = if self.frequency.is_nan() {
            MIN_FREQUENCY
        } else {
            self.frequency.clamp(MIN_FREQUENCY, MAX_FREQUENCY)
        };

        Self {
            frequency,
            intensity: self.intensity.clamp(MIN_INTENSITY, MAX_INTENSITY),
            metal: self.metal,
        }
    }

    pub fn with_frequency(self, frequency: f64) -> Self {
        Self { frequency, ..self }.clamped()
    }

    pub fn with_intensity(self, intensity: u32) -> Self {
        Self { intensity, ..self }.clamped()
    }

    pub fn with_metal(self, metal: Metal) -> Self {
        Self { metal, ..self }
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            frequency: 10.0,
            intensity: 5,
            metal: Metal::Sodium,
        }
    }
}

/// Scene geometry and per-tick rates
///
/// All distances are world units, all rates are per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Vertical distance a photon covers per tick, falling or bouncing
    pub photon_step: f32,
    /// Photons at or below this height have reached the metal
    pub surface_height: f32,
    /// Bouncing photons at or above this height have left the scene
    pub escape_height: f32,

    /// Fraction of the circuit an electron covers per tick
    pub electron_step: f32,
    /// Opacity lost by an electron per tick
    pub electron_fade: f32,

    /// Opacity lost by an absorption flash per tick
    pub effect_fade: f32,

    /// Batches per second per unit of intensity
    pub emission_rate: f64,
    /// Corner of the emission volume
    pub emission_min: Vec3,
    /// Opposite corner of the emission volume (exclusive)
    pub emission_max: Vec3,

    /// Depth of the wire plane
    pub circuit_depth: f32,
    /// Left wire corner, top (bulb) and right wire corner of the circuit
    pub circuit_waypoints: [Vec3; 3],
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            photon_step: 0.2,
            surface_height: 0.5,
            escape_height: 20.0,

            electron_step: 0.01,
            electron_fade: 0.005,

            effect_fade: 0.05,

            emission_rate: 5.0,
            emission_min: Vec3::new(-9.0, 25.0, -4.0),
            emission_max: Vec3::new(9.0, 30.0, 4.0),

            circuit_depth: -5.0,
            circuit_waypoints: [
                Vec3::new(-10.0, 10.0, -5.0),
                Vec3::new(0.0, 20.0, -5.0),
                Vec3::new(10.0, 10.0, -5.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        let params = SimulationParameters::new(45.0, 0, Metal::Zinc);
        assert_eq!(params.frequency, 30.0);
        assert_eq!(params.intensity, 1);

        let params = SimulationParameters::new(0.2, 99, Metal::Zinc);
        assert_eq!(params.frequency, 1.0);
        assert_eq!(params.intensity, 10);
    }

    #[test]
    fn test_nan_frequency_falls_back() {
        let params = SimulationParameters::default().with_frequency(f64::NAN);
        assert_eq!(params.frequency, 1.0);
    }

    #[test]
    fn test_builders_keep_other_fields() {
        let params = SimulationParameters::default()
            .with_metal(Metal::Copper)
            .with_frequency(12.5);
        assert_eq!(params.metal, Metal::Copper);
        assert_eq!(params.frequency, 12.5);
        assert_eq!(params.intensity, 5);
    }
}
