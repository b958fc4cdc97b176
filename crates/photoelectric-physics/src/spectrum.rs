//! Wavelength to display colour
//!
//! Piecewise-linear approximation of the visible spectrum. Ultraviolet is
//! drawn violet and infrared dark red so that invisible photons still show.

use glam::Vec3;

use crate::constants::{FREQUENCY_UNIT_HZ, SPEED_OF_LIGHT};

/// Shortest visible wavelength (nm)
pub const VISIBLE_MIN_NM: f64 = 380.0;
/// Longest visible wavelength (nm)
pub const VISIBLE_MAX_NM: f64 = 780.0;

pub const ULTRAVIOLET_COLOR: Vec3 = Vec3::new(0.5, 0.0, 1.0);
pub const INFRARED_COLOR: Vec3 = Vec3::new(0.5, 0.0, 0.0);

/// Wavelength in nanometres for a frequency in 10^14 Hz
pub fn wavelength_nm(frequency: f64) -> f64 {
    SPEED_OF_LIGHT / (frequency * FREQUENCY_UNIT_HZ) * 1e9
}

/// RGB in [0, 1]^3 for a wavelength in nanometres
pub fn wavelength_to_color(wavelength: f64) -> Vec3 {
    let (r, g, b) = if (380.0..=440.0).contains(&wavelength) {
        (-(wavelength - 440.0) / (440.0 - 380.0), 0.0, 1.0)
    } else if wavelength > 440.0 && wavelength <= 490.0 {
        (0.0, (wavelength - 440.0) / (490.0 - 440.0), 1.0)
    } else if wavelength > 490.0 && wavelength <= 510.0 {
        (0.0, 1.0, -(wavelength - 510.0) / (510.0 - 490.0))
    } else if wavelength > 510.0 && wavelength <= 580.0 {
        ((wavelength - 510.0) / (580.0 - 510.0), 1.0, 0.0)
    } else if wavelength > 580.0 && wavelength <= 645.0 {
        (1.0, -(wavelength - 645.0) / (645.0 - 580.0), 0.0)
    } else if wavelength > 645.0 && wavelength <= VISIBLE_MAX_NM {
        (1.0, 0.0, 0.0)
    } else if wavelength < VISIBLE_MIN_NM {
        return ULTRAVIOLET_COLOR;
    } else if wavelength > VISIBLE_MAX_NM {
        return INFRARED_COLOR;
    } else {
        // NaN
        (0.0, 0.0, 0.0)
    };

    Vec3::new(r as f32, g as f32, b as f32)
}

/// Colour of a photon emitted at the given frequency (10^14 Hz)
pub fn photon_color(frequency: f64) -> Vec3 {
    wavelength_to_color(wavelength_nm(frequency))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-3
    }

    #[test]
    fn test_band_endpoints() {
        assert!(close(wavelength_to_color(380.0), Vec3::new(1.0, 0.0, 1.0)));
        assert!(close(wavelength_to_color(440.0), Vec3::new(0.0, 0.0, 1.0)));
        assert!(close(wavelength_to_color(490.0), Vec3::new(0.0, 1.0, 1.0)));
        assert!(close(wavelength_to_color(510.0), Vec3::new(0.0, 1.0, 0.0)));
        assert!(close(wavelength_to_color(580.0), Vec3::new(1.0, 1.0, 0.0)));
        assert!(close(wavelength_to_color(645.0), Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(wavelength_to_color(780.0), Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_continuous_at_boundaries() {
        for boundary in [440.0, 490.0, 510.0, 580.0, 645.0] {
            let below = wavelength_to_color(boundary - 1e-6);
            let above = wavelength_to_color(boundary + 1e-6);
            assert!(close(below, above), "discontinuity at {boundary}");
        }
    }

    #[test]
    fn test_invisible_fallbacks() {
        assert_eq!(wavelength_to_color(100.0), ULTRAVIOLET_COLOR);
        assert_eq!(wavelength_to_color(379.9), ULTRAVIOLET_COLOR);
        assert_eq!(wavelength_to_color(780.1), INFRARED_COLOR);
        assert_eq!(wavelength_to_color(3000.0), INFRARED_COLOR);
        assert_eq!(wavelength_to_color(f64::NAN), Vec3::ZERO);
    }

    #[test]
    fn test_wavelength_from_frequency() {
        assert!((wavelength_nm(10.0) - 300.0).abs() < 1e-9);
        assert!((wavelength_nm(5.0) - 600.0).abs() < 1e-9);
        assert_eq!(photon_color(10.0), ULTRAVIOLET_COLOR);
        assert_eq!(photon_color(1.0), INFRARED_COLOR);
    }
}
