//! Core state types for the orbit simulation.
//!
//! Defines the two body kinds and the per-step position record:
//! - `CenterObject` - the fixed massive body everything orbits
//! - `PointObject`  - a mobile body pulled only by the center
//! - `StepPosition` - where a point body was at a step, or that it is retired
//!
//! All vectors are `NVec2` (2d, meters / meters per second).

use nalgebra::Vector2;

use crate::error::{Result, SimError};

pub type NVec2 = Vector2<f64>;

/// Reject non-finite scalars before they can reach the integrator
pub(crate) fn check_finite(value: f64, field: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::NonFinite { field })
    }
}

pub(crate) fn check_vector(value: NVec2, field: &'static str) -> Result<NVec2> {
    check_finite(value.x, field)?;
    check_finite(value.y, field)?;
    Ok(value)
}

/// Shared mass rule for both body kinds
pub(crate) fn check_mass(mass: f64) -> Result<f64> {
    check_finite(mass, "mass")?;
    if mass < 0.0 {
        return Err(SimError::NegativeMass(mass));
    }
    Ok(mass)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CenterObject {
    diameter: f64, // meters, always > 0
    mass: f64, // kilograms
    position: NVec2, // fixed for the object's whole life
}

impl CenterObject {
    /// Center object at the coordinate origin
    pub fn new(diameter: f64, mass: f64) -> Result<Self> {
        Self::with_position(diameter, mass, NVec2::zeros())
    }

    pub fn with_position(diameter: f64, mass: f64, position: NVec2) -> Result<Self> {
        check_finite(diameter, "diameter")?;
        if diameter <= 0.0 {
            return Err(SimError::InvalidDiameter(diameter));
        }
        Ok(Self {
            diameter,
            mass: check_mass(mass)?,
            position: check_vector(position, "position")?,
        })
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> NVec2 {
        self.position
    }
}

impl Default for CenterObject {
    fn default() -> Self {
        Self {
            diameter: 1.0,
            mass: 1.0,
            position: NVec2::zeros(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointObject {
    position: NVec2, // meters
    mass: f64, // kilograms
    velocity: NVec2, // meters per second
}

impl PointObject {
    pub fn new(position: NVec2, mass: f64, velocity: NVec2) -> Result<Self> {
        Ok(Self {
            position: check_vector(position, "position")?,
            mass: check_mass(mass)?,
            velocity: check_vector(velocity, "velocity")?,
        })
    }

    pub fn position(&self) -> NVec2 {
        self.position
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn velocity(&self) -> NVec2 {
        self.velocity
    }

    // Only the integrator moves bodies
    pub(crate) fn set_kinematics(&mut self, position: NVec2, velocity: NVec2) {
        self.position = position;
        self.velocity = velocity;
    }
}

impl Default for PointObject {
    fn default() -> Self {
        Self {
            position: NVec2::zeros(),
            mass: 1.0,
            velocity: NVec2::zeros(),
        }
    }
}

/// Position of one point body at one step of the history
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepPosition {
    Active(NVec2),
    /// The body collided earlier and is no longer advanced
    Retired,
}

impl StepPosition {
    pub fn active(&self) -> Option<NVec2> {
        match self {
            StepPosition::Active(p) => Some(*p),
            StepPosition::Retired => None,
        }
    }

    pub fn is_retired(&self) -> bool {
        matches!(self, StepPosition::Retired)
    }
}
