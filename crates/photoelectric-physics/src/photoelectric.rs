//! Photoelectric relations
//!
//! Pure functions of frequency (10^14 Hz), work function (eV) and intensity.
//! Kinetic energy and current are clamped at zero below threshold.

use crate::constants::{FREQUENCY_UNIT_HZ, FULL_SCALE_CURRENT, PLANCK_EV_S};
use crate::metal::Metal;

/// Photon energy in eV, E = h·f
pub fn photon_energy(frequency: f64) -> f64 {
    PLANCK_EV_S * frequency * FREQUENCY_UNIT_HZ
}

/// Excess energy of an ejected electron, zero when E ≤ W
pub fn kinetic_energy(frequency: f64, work_function: f64) -> f64 {
    let energy = photon_energy(frequency);
    if energy > work_function {
        energy - work_function
    } else {
        0.0
    }
}

/// Frequency (10^14 Hz) at which E equals W
pub fn threshold_frequency(work_function: f64) -> f64 {
    work_function / PLANCK_EV_S / FREQUENCY_UNIT_HZ
}

/// Simplified current proxy: intensity × kinetic energy above threshold
pub fn current(frequency: f64, work_function: f64, intensity: u32) -> f64 {
    let energy = photon_energy(frequency);
    if energy > work_function {
        intensity as f64 * (energy - work_function)
    } else {
        0.0
    }
}

/// Number of electrons released by one absorbed photon
pub fn electron_batch_size(kinetic_energy: f64) -> u32 {
    if kinetic_energy > 0.0 {
        kinetic_energy.ceil() as u32
    } else {
        0
    }
}

/// How brightly the circuit bulb shines for a given current
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulbGlow {
    /// Emissive intensity in [0, 1]
    pub emissive_intensity: f32,
    /// HSL lightness of the filament in [0.2, 0.7]
    pub filament_lightness: f32,
}

impl BulbGlow {
    pub const FILAMENT_HUE: f32 = 0.1;

    pub fn from_current(current: f64) -> Self {
        let fraction = (current / FULL_SCALE_CURRENT) as f32;
        Self {
            emissive_intensity: fraction.min(1.0),
            filament_lightness: fraction.min(0.5) + 0.2,
        }
    }
}

/// Everything the readout panel shows for one parameter set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub frequency: f64,
    pub intensity: u32,
    pub work_function: f64,
    pub photon_energy: f64,
    pub kinetic_energy: f64,
    pub current: f64,
    pub threshold_frequency: f64,
    pub bulb: BulbGlow,
}

impl Readout {
    pub fn compute(frequency: f64, intensity: u32, metal: Metal) -> Self {
        let work_function = metal.work_function();
        let current = current(frequency, work_function, intensity);

        Self {
            frequency,
            intensity,
            work_function,
            photon_energy: photon_energy(frequency),
            kinetic_energy: kinetic_energy(frequency, work_function),
            current,
            threshold_frequency: threshold_frequency(work_function),
            bulb: BulbGlow::from_current(current),
        }
    }

    /// Whether a photon at this frequency ejects electrons
    pub fn emits(&self) -> bool {
        self.kinetic_energy > 0.0
    }

    pub fn kinetic_energy_text(&self) -> String {
        format!("{:.2}", self.kinetic_energy)
    }

    pub fn current_text(&self) -> String {
        format!("{:.2}", self.current)
    }

    pub fn work_function_text(&self) -> String {
        format!("{:.2}", self.work_function)
    }

    pub fn threshold_frequency_text(&self) -> String {
        format!("{:.1}", self.threshold_frequency)
    }

    pub fn frequency_text(&self) -> String {
        format!("{:.1}", self.frequency)
    }

    pub fn intensity_text(&self) -> String {
        self.intensity.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_sodium_at_ten() {
        let readout = Readout::compute(10.0, 5, Metal::Sodium);
        assert!((readout.photon_energy - 4.1357).abs() < EPS);
        assert!((readout.kinetic_energy - 1.8557).abs() < EPS);
        assert!((readout.current - 9.2785).abs() < 1e-8);
        assert_eq!(readout.kinetic_energy_text(), "1.86");
        assert_eq!(readout.current_text(), "9.28");
        assert_eq!(readout.work_function_text(), "2.28");
    }

    #[test]
    fn test_below_threshold_is_zero() {
        let readout = Readout::compute(3.0, 5, Metal::Sodium);
        assert!((readout.photon_energy - 1.24071).abs() < EPS);
        assert_eq!(readout.kinetic_energy, 0.0);
        assert_eq!(readout.current, 0.0);
        assert!(!readout.emits());
    }

    #[test]
    fn test_kinetic_energy_at_exact_threshold() {
        let w = photon_energy(12.0);
        assert_eq!(kinetic_energy(12.0, w), 0.0);
        assert_eq!(current(12.0, w, 10), 0.0);
    }

    #[test]
    fn test_kinetic_energy_matches_difference() {
        let mut f = 1.0;
        while f <= 30.0 {
            for metal in Metal::ALL {
                let w = metal.work_function();
                let e = photon_energy(f);
                let k = kinetic_energy(f, w);
                if e > w {
                    assert!((k - (e - w)).abs() < EPS);
                } else {
                    assert_eq!(k, 0.0);
                }
                assert!(k >= 0.0);
            }
            f += 0.1;
        }
    }

    #[test]
    fn test_threshold_round_trip() {
        for metal in Metal::ALL {
            let w = metal.work_function();
            let f0 = threshold_frequency(w);
            assert!((f0 * PLANCK_EV_S * FREQUENCY_UNIT_HZ - w).abs() < EPS);
        }
    }

    #[test]
    fn test_copper_threshold() {
        let readout = Readout::compute(10.0, 1, Metal::Copper);
        assert_eq!(readout.work_function, 4.7);
        assert_eq!(readout.threshold_frequency_text(), "11.4");
    }

    #[test]
    fn test_current_monotonic_in_intensity() {
        for f in [2.0, 8.0, 15.5, 30.0] {
            let mut previous = 0.0;
            for intensity in 1..=10 {
                let i = current(f, Metal::Zinc.work_function(), intensity);
                assert!(i >= previous);
                previous = i;
            }
        }
    }

    #[test]
    fn test_batch_size() {
        assert_eq!(electron_batch_size(0.0), 0);
        assert_eq!(electron_batch_size(0.01), 1);
        assert_eq!(electron_batch_size(1.0), 1);
        assert_eq!(electron_batch_size(1.8557), 2);
        assert_eq!(electron_batch_size(7.2), 8);
    }

    #[test]
    fn test_bulb_glow_saturates() {
        let dim = BulbGlow::from_current(0.0);
        assert_eq!(dim.emissive_intensity, 0.0);
        assert!((dim.filament_lightness - 0.2).abs() < 1e-6);

        let bright = BulbGlow::from_current(250.0);
        assert_eq!(bright.emissive_intensity, 1.0);
        assert!((bright.filament_lightness - 0.7).abs() < 1e-6);
    }
}
