//! Interactive console input of a scenario.
//!
//! Values are read line by line. Anything that does not parse is re-asked on
//! the spot; a group of values that parses but fails validation (the run
//! settings, the center object, one point object) is re-asked as a whole.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::configuration::config::{CenterObjectConfig, PointObjectConfig, ScenarioConfig};
use crate::error::ConfigError;
use crate::simulation::params::{GRAVITATIONAL_CONSTANT, TIME_STEP};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn say(&mut self, msg: &str) -> Result<(), ConfigError> {
        writeln!(self.output, "{}", msg)?;
        Ok(())
    }

    /// Ask until the answer parses as `T`
    fn ask<T: FromStr>(&mut self, label: &str, kind: &str) -> Result<T, ConfigError> {
        loop {
            write!(self.output, "{}: ", label)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConfigError::Prompt);
            }
            match line.trim().parse::<T>() {
                Ok(v) => return Ok(v),
                Err(_) => self.say(&format!("This value must be {}.", kind))?,
            }
        }
    }

    fn ask_float(&mut self, label: &str) -> Result<f64, ConfigError> {
        self.ask(label, "a number")
    }

    fn ask_int(&mut self, label: &str) -> Result<i64, ConfigError> {
        self.ask(label, "an integer")
    }

    /// Walk through the whole scenario, group by group
    pub fn load_scenario(&mut self) -> Result<ScenarioConfig, ConfigError> {
        let mut cfg = ScenarioConfig {
            steps: 0,
            resolution: [0, 0],
            meters_per_pixel: 0.0,
            close_call_distance: 0.0,
            center_object: CenterObjectConfig {
                diameter: 0.0,
                mass: 0.0,
            },
            point_objects: Vec::new(),
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            time_step: TIME_STEP,
        };

        // Run settings
        loop {
            cfg.steps = self.ask_int("Amount of steps (k)")?;
            cfg.resolution = [self.ask_int("X resolution")?, self.ask_int("Y resolution")?];
            cfg.meters_per_pixel = self.ask_float("Meters per pixel")?;
            cfg.close_call_distance = self.ask_float("Close call distance in meters")?;

            let checked = cfg
                .steps()
                .and_then(|_| cfg.resolution())
                .and_then(|_| cfg.parameters());
            match checked {
                Ok(_) => break,
                Err(e) => self.say(&e.to_string())?,
            }
        }

        // Center object
        loop {
            cfg.center_object.diameter = self.ask_float("Center object's diameter in meters")?;
            cfg.center_object.mass = self.ask_float("Center object's mass in kilograms")?;
            match cfg.center_object.to_center_object() {
                Ok(_) => break,
                Err(e) => self.say(&e.to_string())?,
            }
        }

        // Point objects
        let n = loop {
            let n = self.ask_int("Amount of point objects (n)")?;
            match usize::try_from(n) {
                Ok(n) => break n,
                Err(_) => self.say("Amount of point objects cannot be negative.")?,
            }
        };

        for i in 0..n {
            let point = loop {
                let position = [
                    self.ask_float(&format!("X position of n={} in meters", i))?,
                    self.ask_float(&format!("Y position of n={} in meters", i))?,
                ];
                let velocity = [
                    self.ask_float(&format!("X velocity of n={} in m/s", i))?,
                    self.ask_float(&format!("Y velocity of n={} in m/s", i))?,
                ];
                let mass = self.ask_float(&format!("Mass of n={} in kilograms", i))?;

                let point = PointObjectConfig {
                    position,
                    mass,
                    velocity,
                };
                match point.to_point_object(i) {
                    Ok(_) => break point,
                    Err(e) => self.say(&e.to_string())?,
                }
            };
            cfg.point_objects.push(point);
        }

        Ok(cfg)
    }
}
