use photoelectric_physics::Readout;
use photoelectric_simulation::GraphHistory;

use crate::energy::EnergyDiagram;
use crate::graph::render_graph;
use crate::primitives::Canvas;

/// Both diagram canvases for one settings snapshot
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramSet {
    pub energy: Canvas,
    pub graph: Canvas,
}

impl DiagramSet {
    pub fn build(readout: &Readout, history: &GraphHistory) -> Self {
        let energy = EnergyDiagram::new(
            readout.frequency,
            readout.photon_energy,
            readout.work_function,
        );

        Self {
            energy: energy.render(),
            graph: render_graph(history.iter(), readout.threshold_frequency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::NOT_EMITTED_TEXT;
    use photoelectric_physics::Metal;
    use photoelectric_simulation::SimulationState;

    #[test]
    fn test_rebuilt_after_metal_change() {
        let mut state = SimulationState::default();
        let before = DiagramSet::build(state.readout(), state.history());

        state.set_metal(Metal::Copper);
        let after = DiagramSet::build(state.readout(), state.history());

        assert_ne!(before, after);
        assert!(after.energy.find_label(NOT_EMITTED_TEXT).is_some());
    }
}
