//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `g` and integration step `dt`,
//! - `meters_per_pixel`, the grid used to decide point-point collisions,
//! - `close_call_distance`, the proximity threshold between point bodies

use crate::error::{Result, SimError};
use crate::simulation::states::check_finite;

/// Newtonian constant of gravitation (m^3 kg^-1 s^-2)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Default integration step (s)
pub const TIME_STEP: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub dt: f64, // step size
    pub meters_per_pixel: f64, // collision grid size
    pub close_call_distance: f64, // close call threshold (meters)
}

impl Parameters {
    /// Parameters with the physical `G` and a one second step
    pub fn new(meters_per_pixel: f64, close_call_distance: f64) -> Result<Self> {
        Self {
            g: GRAVITATIONAL_CONSTANT,
            dt: TIME_STEP,
            meters_per_pixel,
            close_call_distance,
        }
        .validated()
    }

    pub fn with_constants(mut self, g: f64, dt: f64) -> Result<Self> {
        self.g = g;
        self.dt = dt;
        self.validated()
    }

    fn validated(self) -> Result<Self> {
        check_finite(self.g, "gravitational_constant")?;
        check_finite(self.dt, "time_step")?;
        check_finite(self.meters_per_pixel, "meters_per_pixel")?;
        check_finite(self.close_call_distance, "close_call_distance")?;

        if self.dt <= 0.0 {
            return Err(SimError::InvalidTimeStep(self.dt));
        }
        if self.meters_per_pixel <= 0.0 {
            return Err(SimError::InvalidMetersPerPixel(self.meters_per_pixel));
        }
        if self.close_call_distance <= 0.0 {
            return Err(SimError::InvalidCloseCallDistance(self.close_call_distance));
        }
        Ok(self)
    }
}
