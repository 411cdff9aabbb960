//! Configuration types for loading and saving simulation scenarios.
//!
//! This module defines a thin, `serde`-facing representation of a
//! scenario. A scenario consists of:
//!
//! - run settings: `steps`, `resolution`, `meters_per_pixel`, `close_call_distance`
//! - [`CenterObjectConfig`] - diameter and mass of the center object
//! - [`PointObjectConfig`]  - initial state of each point object
//! - optional physical constants `gravitational_constant` and `time_step`
//!
//! # JSON format
//! The native format. YAML with the same keys is accepted for `.yaml`/`.yml`.
//!
//! ```json
//! {
//!     "steps": 3000,
//!     "resolution": [256, 256],
//!     "meters_per_pixel": 55000.0,
//!     "close_call_distance": 100000.0,
//!     "center_object": { "diameter": 12742000.0, "mass": 5.972e24 },
//!     "point_objects": [
//!         { "position": [0.0, 7000000.0], "mass": 1000.0, "velocity": [7500.0, 0.0] }
//!     ]
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::simulation::params::{Parameters, GRAVITATIONAL_CONSTANT, TIME_STEP};
use crate::simulation::states::{CenterObject, NVec2, PointObject};

/// Center object as stored on disk
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CenterObjectConfig {
    pub diameter: f64, // meters
    pub mass: f64, // kilograms
}

/// One point object's state as stored on disk
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PointObjectConfig {
    pub position: [f64; 2], // meters
    pub mass: f64, // kilograms
    pub velocity: [f64; 2], // meters per second
}

/// Top-level scenario record
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub steps: i64,
    pub resolution: [i64; 2],
    pub meters_per_pixel: f64,
    pub close_call_distance: f64,
    pub center_object: CenterObjectConfig,
    pub point_objects: Vec<PointObjectConfig>,
    #[serde(default = "default_g", skip_serializing_if = "is_default_g")]
    pub gravitational_constant: f64,
    #[serde(default = "default_dt", skip_serializing_if = "is_default_dt")]
    pub time_step: f64,
}

fn default_g() -> f64 {
    GRAVITATIONAL_CONSTANT
}

fn default_dt() -> f64 {
    TIME_STEP
}

fn is_default_g(g: &f64) -> bool {
    *g == GRAVITATIONAL_CONSTANT
}

fn is_default_dt(dt: &f64) -> bool {
    *dt == TIME_STEP
}

enum Format {
    Json,
    Yaml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => Ok(Format::Json),
        "yaml" | "yml" => Ok(Format::Yaml),
        _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}

impl CenterObjectConfig {
    pub fn to_center_object(&self) -> Result<CenterObject, ConfigError> {
        CenterObject::new(self.diameter, self.mass).map_err(ConfigError::InvalidCenterObject)
    }
}

impl From<&CenterObject> for CenterObjectConfig {
    fn from(center: &CenterObject) -> Self {
        Self {
            diameter: center.diameter(),
            mass: center.mass(),
        }
    }
}

impl PointObjectConfig {
    pub fn to_point_object(&self, index: usize) -> Result<PointObject, ConfigError> {
        PointObject::new(
            NVec2::from(self.position),
            self.mass,
            NVec2::from(self.velocity),
        )
        .map_err(|source| ConfigError::InvalidPointObject { index, source })
    }
}

impl From<&PointObject> for PointObjectConfig {
    fn from(point: &PointObject) -> Self {
        let (x, v) = (point.position(), point.velocity());
        Self {
            position: [x.x, x.y],
            mass: point.mass(),
            velocity: [v.x, v.y],
        }
    }
}

impl ScenarioConfig {
    /// Record the given bodies together with run settings
    pub fn from_state(
        steps: usize,
        resolution: [u32; 2],
        parameters: &Parameters,
        center: &CenterObject,
        points: &[PointObject],
    ) -> Self {
        Self {
            steps: steps as i64,
            resolution: [resolution[0] as i64, resolution[1] as i64],
            meters_per_pixel: parameters.meters_per_pixel,
            close_call_distance: parameters.close_call_distance,
            center_object: center.into(),
            point_objects: points.iter().map(PointObjectConfig::from).collect(),
            gravitational_constant: parameters.g,
            time_step: parameters.dt,
        }
    }

    /// Parse and validate a scenario file, format chosen by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = format_of(path)?;
        let reader = BufReader::new(File::open(path)?);
        let cfg: ScenarioConfig = match format {
            Format::Json => serde_json::from_reader(reader)?,
            Format::Yaml => serde_yaml::from_reader(reader)?,
        };
        cfg.validate()?;
        log::info!(
            "loaded {} with {} point objects",
            path.display(),
            cfg.point_objects.len()
        );
        Ok(cfg)
    }

    /// Write the scenario, format chosen by extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let format = format_of(path)?;
        let writer = BufWriter::new(File::create(path)?);
        match format {
            Format::Json => serde_json::to_writer_pretty(writer, self)?,
            Format::Yaml => serde_yaml::to_writer(writer, self)?,
        }
        Ok(())
    }

    /// Check every field without building anything
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.steps()?;
        self.resolution()?;
        self.parameters()?;
        self.center_object.to_center_object()?;
        self.point_objects()?;
        Ok(())
    }

    pub fn steps(&self) -> Result<usize, ConfigError> {
        usize::try_from(self.steps).map_err(|_| ConfigError::InvalidSteps(self.steps))
    }

    pub fn resolution(&self) -> Result<[u32; 2], ConfigError> {
        let [w, h] = self.resolution;
        match (u32::try_from(w), u32::try_from(h)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok([w, h]),
            _ => Err(ConfigError::InvalidResolution(w, h)),
        }
    }

    pub fn parameters(&self) -> Result<Parameters, ConfigError> {
        if !(self.meters_per_pixel.is_finite() && self.meters_per_pixel > 0.0) {
            return Err(ConfigError::InvalidMetersPerPixel(self.meters_per_pixel));
        }
        if !(self.close_call_distance.is_finite() && self.close_call_distance > 0.0) {
            return Err(ConfigError::InvalidCloseCallDistance(self.close_call_distance));
        }
        Parameters::new(self.meters_per_pixel, self.close_call_distance)
            .and_then(|p| p.with_constants(self.gravitational_constant, self.time_step))
            .map_err(ConfigError::InvalidParameters)
    }

    pub fn point_objects(&self) -> Result<Vec<PointObject>, ConfigError> {
        self.point_objects
            .iter()
            .enumerate()
            .map(|(i, p)| p.to_point_object(i))
            .collect()
    }
}
