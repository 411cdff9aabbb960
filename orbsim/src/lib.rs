pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use error::{ConfigError, Degeneracy, SimError};

pub use simulation::states::{CenterObject, PointObject, StepPosition, NVec2};
pub use simulation::params::{Parameters, GRAVITATIONAL_CONSTANT, TIME_STEP};
pub use simulation::forces::{Acceleration, AccelSet, CenterGravity};
pub use simulation::integrator::euler_step;
pub use simulation::events::{Event, SimulationOutput};
pub use simulation::engine::Simulation;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, CenterObjectConfig, PointObjectConfig};
pub use configuration::prompt::Prompter;

pub use visualization::raster::{Visualizer, Palette, clamp_color};
pub use visualization::report::generate_report;
