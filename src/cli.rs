//! Command line arguments

use clap::Parser;
use photoelectric_physics::Metal;
use photoelectric_simulation::SimulationParameters;

/// Photoelectric effect simulation
#[derive(Parser, Debug)]
#[command(name = "photoelectric")]
#[command(about = "Interactive photoelectric effect simulation")]
#[command(version)]
pub struct Args {
    /// Target metal: sodium, copper, zinc or solarPanel
    #[arg(long, default_value = "sodium")]
    pub metal: Metal,

    /// Light frequency in units of 10^14 Hz (clamped to [1, 30])
    #[arg(long, default_value_t = 10.0)]
    pub frequency: f64,

    /// Light intensity (clamped to [1, 10])
    #[arg(long, default_value_t = 5)]
    pub intensity: u32,

    /// Run without a window for this many frames at 60 Hz and log a summary
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,

    /// Seed for the photon placement RNG in headless mode
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn parameters(&self) -> SimulationParameters {
        SimulationParameters::new(self.frequency, self.intensity, self.metal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["photoelectric"]).unwrap();
        assert_eq!(args.parameters(), SimulationParameters::default());
        assert!(args.headless.is_none());
    }

    #[test]
    fn test_headless_flags() {
        let args = Args::try_parse_from([
            "photoelectric",
            "--metal",
            "solarPanel",
            "--frequency",
            "42",
            "--intensity",
            "3",
            "--headless",
            "600",
            "--seed",
            "7",
        ])
        .unwrap();

        let params = args.parameters();
        assert_eq!(params.metal, Metal::SolarPanel);
        assert_eq!(params.frequency, 30.0);
        assert_eq!(params.intensity, 3);
        assert_eq!(args.headless, Some(600));
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn test_unknown_metal_rejected() {
        assert!(Args::try_parse_from(["photoelectric", "--metal", "gold"]).is_err());
    }
}
