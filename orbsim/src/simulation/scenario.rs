//! Build a fully-initialized, runnable scenario from configuration
//!
//! Takes a validated `ScenarioConfig` (file-facing) and produces the runtime
//! bundle: how many steps to run, the output resolution, and the engine with
//! its bodies, parameters and force set in place.

use crate::configuration::config::ScenarioConfig;
use crate::error::ConfigError;
use crate::simulation::engine::Simulation;
use crate::simulation::events::SimulationOutput;

pub struct Scenario {
    pub steps: usize,
    pub resolution: [u32; 2],
    pub simulation: Simulation,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        let steps = cfg.steps()?;
        let resolution = cfg.resolution()?;

        // Bodies: map file records -> runtime objects using nalgebra vectors
        let parameters = cfg.parameters()?;
        let center = cfg.center_object.to_center_object()?;
        let points = cfg.point_objects()?;

        Ok(Self {
            steps,
            resolution,
            simulation: Simulation::new(center, points, parameters),
        })
    }

    /// Run the configured number of steps
    pub fn run(&mut self) -> crate::error::Result<SimulationOutput> {
        self.simulation.run(self.steps)
    }

    /// Scenario record of the bodies as they are now, for saving
    pub fn to_config(&self) -> ScenarioConfig {
        ScenarioConfig::from_state(
            self.steps,
            self.resolution,
            self.simulation.parameters(),
            self.simulation.center(),
            self.simulation.point_objects(),
        )
    }
}
