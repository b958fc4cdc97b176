//! Current-vs-frequency strip chart
//!
//! Redrawn from scratch on every settings update from the retained history.

use photoelectric_physics::{FULL_SCALE_CURRENT, MAX_FREQUENCY, MIN_FREQUENCY};
use photoelectric_simulation::GraphSample;

use crate::primitives::{Canvas, Color, Stroke};
use crate::{CANVAS_HEIGHT, CANVAS_WIDTH};

pub const PLOT_LEFT: f32 = 30.0;
pub const PLOT_TOP: f32 = 10.0;
pub const PLOT_BOTTOM: f32 = 170.0;
pub const PLOT_WIDTH: f32 = 260.0;

pub const THRESHOLD_LABEL: &str = "f₀";
pub const FREQUENCY_AXIS_LABEL: &str = "Frequency (x10^14 Hz)";
pub const CURRENT_AXIS_LABEL: &str = "Current (mA)";

/// Canvas x for a frequency in 10^14 Hz
pub fn frequency_to_x(frequency: f64) -> f32 {
    let fraction = (frequency - MIN_FREQUENCY) / (MAX_FREQUENCY - MIN_FREQUENCY);
    PLOT_LEFT + fraction as f32 * PLOT_WIDTH
}

/// Canvas y for a current value
pub fn current_to_y(current: f64) -> f32 {
    PLOT_BOTTOM - (current / FULL_SCALE_CURRENT) as f32 * (PLOT_BOTTOM - PLOT_TOP)
}

pub fn sample_to_point(sample: &GraphSample) -> [f32; 2] {
    [frequency_to_x(sample.frequency), current_to_y(sample.current)]
}

/// Draw the chart: axes, one polyline through every sample (oldest first),
/// and a marker at the threshold frequency
pub fn render_graph<'a>(
    samples: impl IntoIterator<Item = &'a GraphSample>,
    threshold_frequency: f64,
) -> Canvas {
    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    let axis = Stroke::new(1.0, Color::WHITE);

    // x axis along the baseline rather than the top edge, so data and the
    // threshold marker share it
    canvas.polyline(
        vec![
            [PLOT_LEFT, PLOT_TOP],
            [PLOT_LEFT, PLOT_BOTTOM],
            [PLOT_LEFT + PLOT_WIDTH, PLOT_BOTTOM],
        ],
        axis,
    );

    let points: Vec<[f32; 2]> = samples.into_iter().map(sample_to_point).collect();
    canvas.polyline(points, Stroke::new(1.0, Color::GREEN));

    canvas.text([100.0, 190.0], FREQUENCY_AXIS_LABEL, Color::WHITE);
    canvas.rotated_text(
        [10.0, 100.0],
        CURRENT_AXIS_LABEL,
        Color::WHITE,
        -std::f32::consts::FRAC_PI_2,
    );

    let threshold_x = frequency_to_x(threshold_frequency);
    canvas.line(
        [threshold_x, PLOT_BOTTOM],
        [threshold_x, PLOT_TOP],
        Stroke::new(1.0, Color::RED),
    );
    canvas.text([threshold_x - 5.0, 180.0], THRESHOLD_LABEL, Color::RED);

    canvas
}
