//! The orbit engine
//!
//! `Simulation` owns the center object and the point objects for its whole
//! life and advances them step by step, recording positions and events.
//!
//! Order of work inside step `k` (0-based):
//! 1. pixel collisions between the positions recorded at the end of the
//!    previous step; every body involved retires now
//! 2. for each body still active, in index order:
//!    close calls against the positions at the start of the step,
//!    one Euler step, then the center hit check
//! 3. the positions (or `Retired`) of all bodies are appended to the history
//!
//! Retirement outlives a single `run`: a body that collided stays out of
//! every later run on the same `Simulation`.

use std::collections::HashSet;

use log::{debug, info, trace};

use super::collisions::{close_call, hits_center, pixel_collisions};
use super::events::{Event, SimulationOutput};
use super::forces::{AccelSet, CenterGravity};
use super::integrator::euler_step;
use super::params::Parameters;
use super::states::{CenterObject, PointObject, StepPosition};
use crate::error::{Result, SimError};

pub struct Simulation {
    center: CenterObject,
    points: Vec<PointObject>,
    parameters: Parameters,
    forces: AccelSet,
    retired: HashSet<usize>,
}

impl Simulation {
    /// Build an engine with Newtonian center gravity registered
    pub fn new(center: CenterObject, points: Vec<PointObject>, parameters: Parameters) -> Self {
        let forces = AccelSet::new().with(CenterGravity { g: parameters.g });
        Self::with_forces(center, points, parameters, forces)
    }

    pub fn with_forces(
        center: CenterObject,
        points: Vec<PointObject>,
        parameters: Parameters,
        forces: AccelSet,
    ) -> Self {
        Self {
            center,
            points,
            parameters,
            forces,
            retired: HashSet::new(),
        }
    }

    pub fn center(&self) -> &CenterObject {
        &self.center
    }

    /// Current state of every point object, retired ones included
    pub fn point_objects(&self) -> &[PointObject] {
        &self.points
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Whether point object `index` has collided in an earlier step
    pub fn is_retired(&self, index: usize) -> bool {
        self.retired.contains(&index)
    }

    /// Run exactly `steps` iterations and return the full history
    ///
    /// A degenerate state (a body sitting on the center, or a massless body)
    /// aborts the run with [`SimError::Degenerate`]; point objects keep
    /// whatever state they reached before that.
    ///
    /// Calling `run` again continues from the current state. Bodies retired
    /// by an earlier call are recorded as `Retired` from entry 0 on and never
    /// move again.
    pub fn run(&mut self, steps: usize) -> Result<SimulationOutput> {
        let n = self.points.len();
        info!("running {} steps with {} point objects", steps, n);

        let mut output = SimulationOutput::default();
        output.simulation_steps.reserve(steps + 1);
        let initial: Vec<StepPosition> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if self.retired.contains(&i) {
                    StepPosition::Retired
                } else {
                    StepPosition::Active(p.position())
                }
            })
            .collect();
        output.simulation_steps.push(initial);

        for step in 0..steps {
            // Positions as of the start of this step
            let mut current = match output.simulation_steps.last() {
                Some(last) => last.clone(),
                None => vec![StepPosition::Retired; n],
            };

            let colliding = pixel_collisions(&current, self.parameters.meters_per_pixel);
            if !colliding.is_empty() {
                debug!("k={}: point objects {:?} collided", step, colliding);
                for &i in &colliding {
                    self.retired.insert(i);
                    current[i] = StepPosition::Retired;
                }
                output.collisions.push(Event::new(step, colliding));
            }

            let mut next = vec![StepPosition::Retired; n];
            let mut seen_close_calls: HashSet<Vec<usize>> = HashSet::new();

            for i in 0..n {
                if self.retired.contains(&i) {
                    continue;
                }

                if let Some(participants) =
                    close_call(i, &current, self.parameters.close_call_distance)
                {
                    if seen_close_calls.insert(participants.clone()) {
                        debug!("k={}: close call between {:?}", step, participants);
                        output.close_calls.push(Event::new(step, participants));
                    }
                }

                let position = euler_step(
                    &self.center,
                    &mut self.points[i],
                    &self.forces,
                    &self.parameters,
                )
                .map_err(|reason| SimError::Degenerate {
                    step,
                    index: i,
                    reason,
                })?;

                if hits_center(&self.center, position) {
                    debug!("k={}: point object {} hit the center object", step, i);
                    self.retired.insert(i);
                    output.collisions.push(Event::new(step, [i]));
                } else {
                    next[i] = StepPosition::Active(position);
                }
            }

            trace!("k={}: {} of {} point objects active", step, n - self.retired.len(), n);
            output.simulation_steps.push(next);
        }

        info!(
            "finished: {} collisions, {} close calls",
            output.collisions.len(),
            output.close_calls.len()
        );
        Ok(output)
    }
}
