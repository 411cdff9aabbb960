//! Fixed-step time integrator for a single point body
//!
//! Semi-implicit (symplectic) Euler driven by an `AccelSet` and `Parameters`:
//! the velocity is kicked first and the drift uses the new velocity.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{CenterObject, NVec2, PointObject};
use crate::error::Degeneracy;

/// Advance `point` by one step of `params.dt` under the pull of `center`
/// Updates velocity and position in-place and returns the new position
pub fn euler_step(
    center: &CenterObject,
    point: &mut PointObject,
    forces: &AccelSet,
    params: &Parameters,
) -> Result<NVec2, Degeneracy> {
    let dt = params.dt;
    let a = forces.total(center, point)?;

    // Kick: v_n+1 = v_n + dt * a_n
    let v = point.velocity() + dt * a;

    // Drift: x_n+1 = x_n + dt * v_n+1
    let x = point.position() + dt * v;

    point.set_kinematics(x, v);
    Ok(x)
}
