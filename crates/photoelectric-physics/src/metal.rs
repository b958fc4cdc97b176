//! Selectable emitter surfaces and their fixed properties

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use thiserror::Error;

/// Surface materials the light can be shone on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metal {
    #[default]
    Sodium,
    Copper,
    Zinc,
    SolarPanel,
}

/// Immutable per-metal record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetalProperties {
    /// Work function in eV
    pub work_function: f64,
    /// Surface colour as 0xRRGGBB
    pub color: u32,
}

impl MetalProperties {
    /// Surface colour as linear RGB in [0, 1]
    pub fn rgb(&self) -> Vec3 {
        let r = (self.color >> 16) & 0xff;
        let g = (self.color >> 8) & 0xff;
        let b = self.color & 0xff;
        Vec3::new(r as f32, g as f32, b as f32) / 255.0
    }
}

const SODIUM: MetalProperties = MetalProperties {
    work_function: 2.28,
    color: 0xf4d03f,
};

const COPPER: MetalProperties = MetalProperties {
    work_function: 4.7,
    color: 0xb87333,
};

const ZINC: MetalProperties = MetalProperties {
    work_function: 4.3,
    color: 0x7f8c8d,
};

// Dark gray panel
const SOLAR_PANEL: MetalProperties = MetalProperties {
    work_function: 4.5,
    color: 0x2e2e2e,
};

impl Metal {
    pub const ALL: [Metal; 4] = [Metal::Sodium, Metal::Copper, Metal::Zinc, Metal::SolarPanel];

    pub const fn properties(self) -> MetalProperties {
        match self {
            Metal::Sodium => SODIUM,
            Metal::Copper => COPPER,
            Metal::Zinc => ZINC,
            Metal::SolarPanel => SOLAR_PANEL,
        }
    }

    pub const fn work_function(self) -> f64 {
        self.properties().work_function
    }

    /// Identifier used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Metal::Sodium => "sodium",
            Metal::Copper => "copper",
            Metal::Zinc => "zinc",
            Metal::SolarPanel => "solarPanel",
        }
    }

    /// Human readable label for the selector
    pub const fn label(self) -> &'static str {
        match self {
            Metal::Sodium => "Sodium",
            Metal::Copper => "Copper",
            Metal::Zinc => "Zinc",
            Metal::SolarPanel => "Solar Panel",
        }
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown metal '{0}' (expected one of: sodium, copper, zinc, solarPanel)")]
pub struct ParseMetalError(pub String);

impl FromStr for Metal {
    type Err = ParseMetalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "sodium" => Ok(Metal::Sodium),
            "copper" => Ok(Metal::Copper),
            "zinc" => Ok(Metal::Zinc),
            "solarpanel" => Ok(Metal::SolarPanel),
            _ => Err(ParseMetalError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_functions() {
        assert_eq!(Metal::Sodium.work_function(), 2.28);
        assert_eq!(Metal::Copper.work_function(), 4.7);
        assert_eq!(Metal::Zinc.work_function(), 4.3);
        assert_eq!(Metal::SolarPanel.work_function(), 4.5);
    }

    #[test]
    fn test_name_round_trip() {
        for metal in Metal::ALL {
            assert_eq!(metal.name().parse::<Metal>(), Ok(metal));
        }
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("solar-panel".parse::<Metal>(), Ok(Metal::SolarPanel));
        assert_eq!("SODIUM".parse::<Metal>(), Ok(Metal::Sodium));
        assert!("lead".parse::<Metal>().is_err());
    }

    #[test]
    fn test_surface_rgb() {
        let rgb = Metal::SolarPanel.properties().rgb();
        let expected = 0x2e as f32 / 255.0;
        assert!((rgb.x - expected).abs() < 1e-6);
        assert!((rgb.y - expected).abs() < 1e-6);
        assert!((rgb.z - expected).abs() < 1e-6);
    }
}
