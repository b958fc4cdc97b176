//! Simulation state and the per-frame tick
//!
//! [`SimulationState`] is owned by the driving loop. Input handlers call
//! [`SimulationState::apply_settings`] between frames; the loop calls
//! [`SimulationState::tick`] once per frame, which runs emission followed by
//! the particle lifecycle.

use std::time::Duration;

use photoelectric_physics::{photon_color, Metal, Readout};
use rand::Rng;

use crate::emission::{batch_size, emit_batch, EmissionScheduler};
use crate::history::{GraphHistory, GraphSample};
use crate::lifecycle::{LifecycleReport, ParticleLifecycle};
use crate::params::{SimulationConfig, SimulationParameters};

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub photons_emitted: u32,
    pub photons_absorbed: u32,
    pub photons_escaped: u32,
    pub electrons_emitted: u32,
    pub electrons_completed: u32,
}

impl TickReport {
    fn merge_lifecycle(&mut self, lifecycle: LifecycleReport) {
        self.photons_absorbed += lifecycle.photons_absorbed;
        self.photons_escaped += lifecycle.photons_escaped;
        self.electrons_emitted += lifecycle.electrons_emitted;
        self.electrons_completed += lifecycle.electrons_completed;
    }

    /// Running totals across ticks
    pub fn accumulate(&mut self, other: TickReport) {
        self.photons_emitted += other.photons_emitted;
        self.photons_absorbed += other.photons_absorbed;
        self.photons_escaped += other.photons_escaped;
        self.electrons_emitted += other.electrons_emitted;
        self.electrons_completed += other.electrons_completed;
    }
}

pub struct SimulationState {
    params: SimulationParameters,
    config: SimulationConfig,
    readout: Readout,
    scheduler: EmissionScheduler,
    lifecycle: ParticleLifecycle,
    history: GraphHistory,
    frame: u64,
}

impl SimulationState {
    pub fn new(params: SimulationParameters, config: SimulationConfig) -> Self {
        let params = params.clamped();
        let mut state = Self {
            params,
            config,
            readout: Readout::compute(params.frequency, params.intensity, params.metal),
            scheduler: EmissionScheduler::new(params.intensity, &config),
            lifecycle: ParticleLifecycle::new(),
            history: GraphHistory::new(),
            frame: 0,
        };
        state.apply_settings(params);
        state
    }

    /// Take a new parameter set from the controls
    ///
    /// Recomputes the readout and emission interval and records a graph
    /// sample. Photons already in flight see the new values on their next
    /// step.
    pub fn apply_settings(&mut self, params: SimulationParameters) -> &Readout {
        let params = params.clamped();
        if params.metal != self.params.metal {
            log::debug!("metal changed: {} -> {}", self.params.metal, params.metal);
        }

        self.params = params;
        self.readout = Readout::compute(params.frequency, params.intensity, params.metal);
        self.scheduler.set_intensity(params.intensity, &self.config);
        self.history.push(GraphSample {
            frequency: params.frequency,
            current: self.readout.current,
        });

        log::debug!(
            "settings: f={} x10^14 Hz, I={}, {} (W={} eV) -> KE={} eV, current={}, f0={}",
            self.readout.frequency_text(),
            self.readout.intensity_text(),
            params.metal,
            self.readout.work_function_text(),
            self.readout.kinetic_energy_text(),
            self.readout.current_text(),
            self.readout.threshold_frequency_text(),
        );

        &self.readout
    }

    pub fn set_frequency(&mut self, frequency: f64) -> &Readout {
        self.apply_settings(self.params.with_frequency(frequency))
    }

    pub fn set_intensity(&mut self, intensity: u32) -> &Readout {
        self.apply_settings(self.params.with_intensity(intensity))
    }

    pub fn set_metal(&mut self, metal: Metal) -> &Readout {
        self.apply_settings(self.params.with_metal(metal))
    }

    /// Advance one display frame; `now` is time since the loop started
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Duration, rng: &mut R) -> TickReport {
        let mut report = TickReport::default();

        if self.scheduler.poll(now) {
            let count = batch_size(self.params.intensity);
            let color = photon_color(self.params.frequency);
            self.lifecycle
                .add_photons(emit_batch(rng, count, color, &self.config));
            report.photons_emitted = count;
        }

        let lifecycle = self
            .lifecycle
            .step(self.readout.kinetic_energy, &self.config);
        report.merge_lifecycle(lifecycle);

        self.frame += 1;
        report
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    pub fn lifecycle(&self) -> &ParticleLifecycle {
        &self.lifecycle
    }

    pub fn history(&self) -> &GraphHistory {
        &self.history
    }

    pub fn scheduler(&self) -> &EmissionScheduler {
        &self.scheduler
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(SimulationParameters::default(), SimulationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photoelectric_physics::threshold_frequency;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FRAME: Duration = Duration::from_micros(16_667);

    fn run(state: &mut SimulationState, rng: &mut StdRng, start: u32, frames: u32) -> TickReport {
        let mut total = TickReport::default();
        for i in start..start + frames {
            total.accumulate(state.tick(FRAME * i, rng));
        }
        total
    }

    #[test]
    fn test_initial_settings_recorded() {
        let state = SimulationState::default();
        assert_eq!(state.history().len(), 1);
        assert!((state.readout().kinetic_energy - 1.8557).abs() < 1e-9);
        assert_eq!(state.scheduler().interval(), Duration::from_millis(40));
    }

    #[test]
    fn test_each_settings_update_appends_sample() {
        let mut state = SimulationState::default();
        for i in 0..80 {
            state.set_frequency(1.0 + i as f64 * 0.1);
        }
        assert_eq!(state.history().len(), 50);
        let latest = state.history().latest().copied();
        assert_eq!(latest.map(|s| s.frequency), Some(1.0 + 79.0 * 0.1));
    }

    #[test]
    fn test_metal_switch_is_immediate() {
        let mut state = SimulationState::default();
        let readout = *state.set_metal(Metal::Copper);
        assert_eq!(readout.work_function, 4.7);
        assert!((readout.threshold_frequency - threshold_frequency(4.7)).abs() < 1e-12);
        assert_eq!(readout.threshold_frequency_text(), "11.4");
        // 10 x10^14 Hz is below copper's threshold
        assert_eq!(readout.kinetic_energy, 0.0);
    }

    #[test]
    fn test_emission_and_absorption() {
        let mut state = SimulationState::default();
        let mut rng = StdRng::seed_from_u64(42);

        let total = run(&mut state, &mut rng, 1, 600);

        assert!(total.photons_emitted > 0);
        assert!(total.photons_absorbed > 0);
        assert_eq!(total.photons_escaped, 0);
        // KE 1.8557 eV releases two electrons per absorbed photon
        assert_eq!(total.electrons_emitted, total.photons_absorbed * 2);
        assert_eq!(state.frame(), 600);
    }

    #[test]
    fn test_below_threshold_only_bounces() {
        let params = SimulationParameters::new(3.0, 5, Metal::Sodium);
        let mut state = SimulationState::new(params, SimulationConfig::default());
        let mut rng = StdRng::seed_from_u64(1);

        let total = run(&mut state, &mut rng, 1, 600);

        assert!(total.photons_emitted > 0);
        assert_eq!(total.photons_absorbed, 0);
        assert!(total.photons_escaped > 0);
        assert!(state.lifecycle().electrons().is_empty());
    }

    #[test]
    fn test_in_flight_photons_use_current_frequency() {
        let params = SimulationParameters::new(3.0, 1, Metal::Sodium);
        let mut state = SimulationState::new(params, SimulationConfig::default());
        let mut rng = StdRng::seed_from_u64(3);

        // Emit one batch, then raise the frequency before it lands
        run(&mut state, &mut rng, 13, 1);
        assert_eq!(state.lifecycle().photons().len(), 1);
        state.set_frequency(12.0);

        let mut total = TickReport::default();
        for _ in 0..250 {
            // Earlier than the last batch, so nothing new is emitted
            total.accumulate(state.tick(Duration::from_millis(210), &mut rng));
        }
        assert_eq!(total.photons_emitted, 0);
        assert_eq!(total.photons_absorbed, 1);
        // KE at 12 x10^14 Hz on sodium is about 2.68 eV
        assert_eq!(total.electrons_emitted, 3);
        assert_eq!(total.electrons_completed, 3);
        assert!(state.lifecycle().electrons().is_empty());
    }

    #[test]
    fn test_metal_switch_changes_pending_impact() {
        let params = SimulationParameters::new(10.0, 1, Metal::Sodium);
        let mut state = SimulationState::new(params, SimulationConfig::default());
        let mut rng = StdRng::seed_from_u64(8);

        run(&mut state, &mut rng, 1, 1);
        assert_eq!(state.lifecycle().photons().len(), 1);
        state.set_metal(Metal::Copper);

        let mut total = TickReport::default();
        for _ in 0..300 {
            total.accumulate(state.tick(FRAME, &mut rng));
        }
        assert_eq!(total.photons_emitted, 0);
        assert_eq!(total.photons_absorbed, 0);
        assert_eq!(total.photons_escaped, 1);
        assert!(state.lifecycle().photons().is_empty());
    }

    #[test]
    fn test_particle_sets_stay_bounded() {
        let params = SimulationParameters::new(30.0, 10, Metal::Sodium);
        let mut state = SimulationState::new(params, SimulationConfig::default());
        let mut rng = StdRng::seed_from_u64(9);

        run(&mut state, &mut rng, 1, 3000);

        // One batch of 10 every other frame, each photon lives < 150 frames
        assert!(state.lifecycle().photons().len() < 1000);
        assert!(state.lifecycle().electrons().len() < 20_000);
    }
}
