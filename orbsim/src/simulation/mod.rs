pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod collisions;
pub mod events;
pub mod scenario;
