//! Energy-level diagram
//!
//! Two horizontal levels separated by the work function and a vertical
//! arrow whose length is the photon energy, both at 30 px per eV.

use crate::primitives::{Canvas, Color, Rect, Stroke};
use crate::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Pixels per electronvolt
pub const ENERGY_SCALE: f32 = 30.0;
/// Canvas y of the baseline level
pub const VACUUM_LEVEL_Y: f32 = 180.0;

const LEVEL_X: f32 = 50.0;
const LEVEL_WIDTH: f32 = 200.0;
const LEVEL_THICKNESS: f32 = 2.0;
const LABEL_X: f32 = 10.0;
const ARROW_X: f32 = 150.0;
const STATUS_X: f32 = 100.0;

pub const EMITTED_TEXT: &str = "Electron Emitted";
pub const NOT_EMITTED_TEXT: &str = "No Electron Emission";

/// Geometry of the diagram for one (frequency, photon energy, work function)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyDiagram {
    pub frequency: f64,
    pub photon_energy: f64,
    pub work_function: f64,
    pub vacuum_level: f32,
    pub fermi_level: f32,
    /// Canvas y of the arrow head
    pub photon_level: f32,
}

impl EnergyDiagram {
    pub fn new(frequency: f64, photon_energy: f64, work_function: f64) -> Self {
        Self {
            frequency,
            photon_energy,
            work_function,
            vacuum_level: VACUUM_LEVEL_Y,
            fermi_level: VACUUM_LEVEL_Y - work_function as f32 * ENERGY_SCALE,
            photon_level: VACUUM_LEVEL_Y - photon_energy as f32 * ENERGY_SCALE,
        }
    }

    /// Arrow length in pixels
    pub fn arrow_length(&self) -> f32 {
        self.vacuum_level - self.photon_level
    }

    /// Whether the photon carries at least the work function
    pub fn electron_emitted(&self) -> bool {
        self.photon_energy >= self.work_function
    }

    pub fn status_text(&self) -> &'static str {
        if self.electron_emitted() {
            EMITTED_TEXT
        } else {
            NOT_EMITTED_TEXT
        }
    }

    pub fn render(&self) -> Canvas {
        let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);

        for (level, label) in [
            (self.vacuum_level, "Vacuum Level"),
            (self.fermi_level, "Fermi Level"),
        ] {
            canvas.fill_rect(
                Rect::from_min_size([LEVEL_X, level], [LEVEL_WIDTH, LEVEL_THICKNESS]),
                Color::WHITE,
            );
            canvas.text([LABEL_X, level + 5.0], label, Color::WHITE);
        }

        canvas.line(
            [ARROW_X, self.vacuum_level],
            [ARROW_X, self.photon_level],
            Stroke::new(1.0, Color::RED),
        );
        canvas.text(
            [ARROW_X + 5.0, (self.vacuum_level + self.photon_level) / 2.0],
            "Photon Energy",
            Color::WHITE,
        );

        let status_color = if self.electron_emitted() {
            Color::GREEN
        } else {
            Color::RED
        };
        canvas.text(
            [STATUS_X, self.fermi_level - 10.0],
            self.status_text(),
            status_color,
        );

        canvas
    }
}
