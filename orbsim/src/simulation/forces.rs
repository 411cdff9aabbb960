//! Force / acceleration contributors for the orbit engine
//!
//! Only the center body attracts; point bodies never pull on each other.
//! Terms report a [`Degeneracy`] instead of producing NaN or inf.

use crate::error::Degeneracy;
use crate::simulation::states::{CenterObject, NVec2, PointObject};

/// Collection of acceleration terms acting on a single point body
/// Each term implements [`Acceleration`] and their contributions are summed
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total acceleration on `point` from every registered term
    pub fn total(&self, center: &CenterObject, point: &PointObject) -> Result<NVec2, Degeneracy> {
        let mut a = NVec2::zeros();
        for term in &self.terms {
            a += term.acceleration(center, point)?;
        }
        Ok(a)
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources acting on a point body
pub trait Acceleration {
    fn acceleration(&self, center: &CenterObject, point: &PointObject) -> Result<NVec2, Degeneracy>;
}

/// Newtonian pull of the center body, no softening
pub struct CenterGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for CenterGravity {
    fn acceleration(&self, center: &CenterObject, point: &PointObject) -> Result<NVec2, Degeneracy> {
        // r points from the point body toward the center
        let r = center.position() - point.position();
        let dist = r.norm();
        if dist == 0.0 {
            return Err(Degeneracy::CoincidentWithCenter);
        }
        if point.mass() == 0.0 {
            return Err(Degeneracy::ZeroMass);
        }

        // F = G * M * m / d^2 along the unit vector r / d
        let force = self.g * center.mass() * point.mass() / (dist * dist);
        let force_vec = force * (r / dist);

        // a = F / m, m cancels
        let a = force_vec / point.mass();

        // d^2 underflows to subnormal or zero well before d reaches 0
        if !(a.x.is_finite() && a.y.is_finite()) {
            return Err(Degeneracy::CoincidentWithCenter);
        }
        Ok(a)
    }
}
