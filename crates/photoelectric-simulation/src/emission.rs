//! Photon emission timing and placement

use std::time::Duration;

use glam::Vec3;
use rand::Rng;

use crate::params::SimulationConfig;
use crate::particle::Photon;

/// Decides once per tick whether a new batch of photons is due
#[derive(Debug, Clone)]
pub struct EmissionScheduler {
    /// `None` until the first batch, so the first poll always emits
    last_emission: Option<Duration>,
    interval: Duration,
}

impl EmissionScheduler {
    pub fn new(intensity: u32, config: &SimulationConfig) -> Self {
        Self {
            last_emission: None,
            interval: emission_interval(intensity, config),
        }
    }

    pub fn set_intensity(&mut self, intensity: u32, config: &SimulationConfig) {
        self.interval = emission_interval(intensity, config);
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_emission(&self) -> Option<Duration> {
        self.last_emission
    }

    /// Returns true (and restarts the interval) on the first poll and
    /// whenever strictly more than one interval has passed since the
    /// previous batch
    pub fn poll(&mut self, now: Duration) -> bool {
        let due = match self.last_emission {
            None => true,
            Some(last) => now.saturating_sub(last) > self.interval,
        };
        if due {
            self.last_emission = Some(now);
        }
        due
    }
}

/// Time between batches: 1000 / (intensity × rate) ms
pub fn emission_interval(intensity: u32, config: &SimulationConfig) -> Duration {
    let per_second = intensity.max(1) as f64 * config.emission_rate;
    Duration::from_secs_f64(1.0 / per_second)
}

/// Photons per batch
pub fn batch_size(intensity: u32) -> u32 {
    intensity.max(1)
}

/// Uniformly random point inside the emission volume
pub fn emission_position<R: Rng + ?Sized>(rng: &mut R, config: &SimulationConfig) -> Vec3 {
    let unit = Vec3::new(rng.random(), rng.random(), rng.random());
    config.emission_min + unit * (config.emission_max - config.emission_min)
}

/// A batch of falling photons sharing one colour
pub fn emit_batch<R: Rng + ?Sized>(
    rng: &mut R,
    count: u32,
    color: Vec3,
    config: &SimulationConfig,
) -> Vec<Photon> {
    (0..count)
        .map(|_| Photon::new(emission_position(rng, config), color))
        .collect()
}
