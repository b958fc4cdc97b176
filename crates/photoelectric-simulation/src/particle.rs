//! Transient scene entities
//!
//! Photons fall onto the metal and are either absorbed or bounce away.
//! Electrons run once around the circuit. Absorption flashes fade out over a
//! fixed number of ticks.

use std::sync::Arc;

use glam::Vec3;

use crate::circuit::CircuitPath;
use crate::params::SimulationConfig;

/// Live photon states; absorption and escape remove the photon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotonState {
    Falling,
    Bouncing,
}

/// Result of advancing a photon by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotonFate {
    InFlight,
    Absorbed,
    Escaped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Photon {
    pub position: Vec3,
    /// Colour of the light at the moment of emission
    pub color: Vec3,
    pub state: PhotonState,
}

impl Photon {
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            position,
            color,
            state: PhotonState::Falling,
        }
    }

    pub fn is_bouncing(&self) -> bool {
        self.state == PhotonState::Bouncing
    }

    /// Advance one tick
    ///
    /// `kinetic_energy` is evaluated for the light currently selected, not
    /// the light the photon was emitted with.
    pub fn step(&mut self, kinetic_energy: f64, config: &SimulationConfig) -> PhotonFate {
        match self.state {
            PhotonState::Falling => {
                self.position.y -= config.photon_step;
                if self.position.y <= config.surface_height {
                    if kinetic_energy > 0.0 {
                        return PhotonFate::Absorbed;
                    }
                    self.state = PhotonState::Bouncing;
                }
                PhotonFate::InFlight
            }
            PhotonState::Bouncing => {
                self.position.y += config.photon_step;
                if self.position.y >= config.escape_height {
                    PhotonFate::Escaped
                } else {
                    PhotonFate::InFlight
                }
            }
        }
    }
}

/// Result of advancing an electron by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElectronFate {
    Traveling,
    Done,
}

#[derive(Debug, Clone)]
pub struct Electron {
    /// Shared by every electron of one batch
    pub path: Arc<CircuitPath>,
    /// Fraction of the circuit covered, in [0, 1)
    pub progress: f32,
    /// Cosmetic only, never ends the traversal
    pub opacity: f32,
    pub position: Vec3,
}

impl Electron {
    pub fn new(path: Arc<CircuitPath>, progress: f32, position: Vec3) -> Self {
        Self {
            path,
            progress,
            opacity: 1.0,
            position,
        }
    }

    pub fn step(&mut self, config: &SimulationConfig) -> ElectronFate {
        self.progress += config.electron_step;
        self.opacity = (self.opacity - config.electron_fade).max(0.0);

        if self.progress >= 1.0 {
            return ElectronFate::Done;
        }

        self.position = self.path.point_at(self.progress);
        ElectronFate::Traveling
    }
}

/// Build the electrons released by one absorbed photon
///
/// Member `i` of `count` starts at progress `i / count` so the batch is
/// spread along the circuit.
pub fn electron_batch(impact: Vec3, count: u32, config: &SimulationConfig) -> Vec<Electron> {
    if count == 0 {
        return Vec::new();
    }

    let path = Arc::new(CircuitPath::for_impact(impact.x, config));
    (0..count)
        .map(|i| Electron::new(path.clone(), i as f32 / count as f32, impact))
        .collect()
}

/// Short flash marking an absorption
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionEffect {
    pub position: Vec3,
    remaining_ticks: u32,
    lifetime_ticks: u32,
}

impl InteractionEffect {
    pub fn new(position: Vec3, config: &SimulationConfig) -> Self {
        let lifetime_ticks = (1.0 / config.effect_fade).round().max(1.0) as u32;
        Self {
            position,
            remaining_ticks: lifetime_ticks,
            lifetime_ticks,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.remaining_ticks as f32 / self.lifetime_ticks as f32
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.remaining_ticks
    }

    /// Fade one tick; returns whether the flash is still visible
    pub fn step(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks > 0
    }
}
