//! Event records and the output of a simulation run.

use super::states::StepPosition;

/// Something that happened to a set of point bodies at one step
///
/// A collision with a single index is a hit on the center object; more
/// indexes mean point bodies that landed on the same pixel. Close calls
/// always list at least two indexes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    step: usize,
    indexes: Vec<usize>, // sorted, no duplicates
}

impl Event {
    pub fn new(step: usize, indexes: impl IntoIterator<Item = usize>) -> Self {
        let mut indexes: Vec<usize> = indexes.into_iter().collect();
        indexes.sort_unstable();
        indexes.dedup();
        Self { step, indexes }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn indexes(&self) -> &[usize] {
        &self.indexes
    }

    pub fn involves(&self, index: usize) -> bool {
        self.indexes.binary_search(&index).is_ok()
    }
}

/// Everything one call to `Simulation::run` produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationOutput {
    /// `steps + 1` entries, the first being the starting positions
    pub simulation_steps: Vec<Vec<StepPosition>>,
    pub collisions: Vec<Event>,
    pub close_calls: Vec<Event>,
}

impl SimulationOutput {
    /// Step at which body `index` collided, if it did
    pub fn collision_step(&self, index: usize) -> Option<usize> {
        self.collisions
            .iter()
            .find(|c| c.involves(index))
            .map(Event::step)
    }
}
