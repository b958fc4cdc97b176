//! Per-tick advancement of every live photon, electron and flash
//!
//! Collections are compacted in place after each tick so no entity is ever
//! visited twice or skipped while another is removed.

use glam::Vec3;
use photoelectric_physics::electron_batch_size;

use crate::params::SimulationConfig;
use crate::particle::{
    electron_batch, Electron, ElectronFate, InteractionEffect, Photon, PhotonFate,
};

/// Counts of lifecycle transitions that happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifecycleReport {
    pub photons_absorbed: u32,
    pub photons_escaped: u32,
    pub electrons_emitted: u32,
    pub electrons_completed: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ParticleLifecycle {
    photons: Vec<Photon>,
    electrons: Vec<Electron>,
    effects: Vec<InteractionEffect>,
}

impl ParticleLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn photons(&self) -> &[Photon] {
        &self.photons
    }

    pub fn electrons(&self) -> &[Electron] {
        &self.electrons
    }

    pub fn effects(&self) -> &[InteractionEffect] {
        &self.effects
    }

    pub fn add_photons(&mut self, photons: impl IntoIterator<Item = Photon>) {
        self.photons.extend(photons);
    }

    pub fn is_empty(&self) -> bool {
        self.photons.is_empty() && self.electrons.is_empty() && self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.photons.clear();
        self.electrons.clear();
        self.effects.clear();
    }

    /// Advance everything by one tick
    ///
    /// `kinetic_energy` is the value for the currently selected light and
    /// metal; it decides the fate of every photon reaching the surface this
    /// tick. Electrons released this tick take their first step immediately.
    pub fn step(&mut self, kinetic_energy: f64, config: &SimulationConfig) -> LifecycleReport {
        let mut report = LifecycleReport::default();
        let mut impacts: Vec<Vec3> = Vec::new();

        self.photons.retain_mut(|photon| match photon.step(kinetic_energy, config) {
            PhotonFate::InFlight => true,
            PhotonFate::Absorbed => {
                impacts.push(photon.position);
                report.photons_absorbed += 1;
                false
            }
            PhotonFate::Escaped => {
                report.photons_escaped += 1;
                false
            }
        });

        let batch = electron_batch_size(kinetic_energy);
        for impact in impacts {
            log::trace!(
                "photon absorbed at ({:.2}, {:.2}, {:.2}), releasing {} electrons",
                impact.x,
                impact.y,
                impact.z,
                batch
            );
            self.electrons.extend(electron_batch(impact, batch, config));
            self.effects.push(InteractionEffect::new(impact, config));
            report.electrons_emitted += batch;
        }

        self.electrons
            .retain_mut(|electron| match electron.step(config) {
                ElectronFate::Traveling => true,
                ElectronFate::Done => {
                    report.electrons_completed += 1;
                    false
                }
            });

        self.effects.retain_mut(InteractionEffect::step);

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photon_at(y: f32) -> Photon {
        Photon::new(Vec3::new(2.0, y, 1.0), Vec3::ONE)
    }

    #[test]
    fn test_absorption_spawns_batch_and_flash() {
        let config = SimulationConfig::default();
        let mut lifecycle = ParticleLifecycle::new();
        lifecycle.add_photons([photon_at(0.6), photon_at(10.0)]);

        let report = lifecycle.step(1.8557, &config);

        assert_eq!(report.photons_absorbed, 1);
        assert_eq!(report.electrons_emitted, 2);
        assert_eq!(lifecycle.photons().len(), 1);
        assert_eq!(lifecycle.electrons().len(), 2);
        assert_eq!(lifecycle.effects().len(), 1);
    }

    #[test]
    fn test_no_energy_means_bounce() {
        let config = SimulationConfig::default();
        let mut lifecycle = ParticleLifecycle::new();
        lifecycle.add_photons([photon_at(0.6)]);

        let report = lifecycle.step(0.0, &config);

        assert_eq!(report.photons_absorbed, 0);
        assert!(lifecycle.electrons().is_empty());
        assert!(lifecycle.photons()[0].is_bouncing());
    }

    #[test]
    fn test_everything_drains() {
        let config = SimulationConfig::default();
        let mut lifecycle = ParticleLifecycle::new();
        lifecycle.add_photons((0..20).map(|i| photon_at(25.0 + i as f32 * 0.25)));

        let mut absorbed = 0;
        let mut completed = 0;
        let mut emitted = 0;
        for _ in 0..400 {
            let report = lifecycle.step(2.5, &config);
            absorbed += report.photons_absorbed;
            emitted += report.electrons_emitted;
            completed += report.electrons_completed;
        }

        assert!(lifecycle.is_empty());
        assert_eq!(absorbed, 20);
        assert_eq!(emitted, 60);
        assert_eq!(completed, emitted);
    }

    #[test]
    fn test_bouncing_photons_escape() {
        let config = SimulationConfig::default();
        let mut lifecycle = ParticleLifecycle::new();
        lifecycle.add_photons((0..5).map(|i| photon_at(25.0 + i as f32)));

        let mut escaped = 0;
        for _ in 0..300 {
            escaped += lifecycle.step(0.0, &config).photons_escaped;
        }

        assert_eq!(escaped, 5);
        assert!(lifecycle.photons().is_empty());
    }
}
