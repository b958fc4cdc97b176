//! Frame driver around [`SimulationState`]
//!
//! The window drives it with wall-clock time since startup; headless runs
//! use a fixed 60 Hz clock.

use std::time::Duration;

use photoelectric_simulation::{SimulationConfig, SimulationParameters, SimulationState, TickReport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Simulated frame period of headless runs
pub const HEADLESS_FRAME: Duration = Duration::from_nanos(16_666_667);

pub struct SimulationLoop<R> {
    state: SimulationState,
    rng: R,
    totals: TickReport,
}

impl<R: Rng> SimulationLoop<R> {
    pub fn new(params: SimulationParameters, rng: R) -> Self {
        Self {
            state: SimulationState::new(params, SimulationConfig::default()),
            rng,
            totals: TickReport::default(),
        }
    }

    /// Run one tick at `now` and fold its report into the totals
    pub fn advance(&mut self, now: Duration) -> TickReport {
        let report = self.state.tick(now, &mut self.rng);
        if report != TickReport::default() {
            log::trace!("frame {}: {:?}", self.state.frame(), report);
        }
        self.totals.accumulate(report);
        report
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn totals(&self) -> &TickReport {
        &self.totals
    }
}

/// Run `frames` ticks without a window and return the accumulated report
pub fn run_headless(params: SimulationParameters, frames: u64, seed: Option<u64>) -> TickReport {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut sim = SimulationLoop::new(params, rng);

    let readout = *sim.state().readout();
    log::info!(
        "Headless run: {} frames, f={} x10^14 Hz, I={}, {} (W={} eV, f0={}), KE={} eV, current={}",
        frames,
        readout.frequency_text(),
        readout.intensity_text(),
        params.metal,
        readout.work_function_text(),
        readout.threshold_frequency_text(),
        readout.kinetic_energy_text(),
        readout.current_text(),
    );

    let mut now = Duration::ZERO;
    for _ in 0..frames {
        now += HEADLESS_FRAME;
        sim.advance(now);
    }

    let totals = *sim.totals();
    let lifecycle = sim.state().lifecycle();
    log::info!(
        "✓ {} photons emitted, {} absorbed, {} escaped; {} electrons emitted, {} completed",
        totals.photons_emitted,
        totals.photons_absorbed,
        totals.photons_escaped,
        totals.electrons_emitted,
        totals.electrons_completed,
    );
    log::info!(
        "  live at exit: {} photons, {} electrons, {} flashes",
        lifecycle.photons().len(),
        lifecycle.electrons().len(),
        lifecycle.effects().len(),
    );

    totals
}
