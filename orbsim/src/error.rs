//! Error types for the orbit simulator.
//!
//! [`SimError`] covers everything the physics core can reject: bad
//! construction input and degenerate states hit during a run.
//! [`ConfigError`] covers loading, validating and saving scenario files.

use thiserror::Error;

/// Why a physics step could not be evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Degeneracy {
    #[error("point object coincides with the center object")]
    CoincidentWithCenter,

    #[error("point object has zero mass")]
    ZeroMass,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("Diameter must be positive, got {0}.")]
    InvalidDiameter(f64),

    #[error("Mass cannot be negative, got {0}.")]
    NegativeMass(f64),

    #[error("Value of `{field}` must be a finite number.")]
    NonFinite { field: &'static str },

    #[error("Meters per pixel must be positive, got {0}.")]
    InvalidMetersPerPixel(f64),

    #[error("Close call distance must be positive, got {0}.")]
    InvalidCloseCallDistance(f64),

    #[error("Time step must be positive, got {0}.")]
    InvalidTimeStep(f64),

    #[error("Degenerate configuration at k={step}, n={index}: {reason}")]
    Degenerate {
        step: usize,
        index: usize,
        #[source]
        reason: Degeneracy,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to open config: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported config format `{0}`, expected .json, .yaml or .yml")]
    UnsupportedFormat(String),

    #[error("Steps must be a non-negative integer, got {0}.")]
    InvalidSteps(i64),

    #[error("Resolution must be two positive integers, got {0}x{1}.")]
    InvalidResolution(i64, i64),

    #[error("Meters per pixel must be a positive number, got {0}.")]
    InvalidMetersPerPixel(f64),

    #[error("Close call distance must be a positive number, got {0}.")]
    InvalidCloseCallDistance(f64),

    #[error("Invalid simulation parameters: {0}")]
    InvalidParameters(#[source] SimError),

    #[error("The center object's values are incorrect: {0}")]
    InvalidCenterObject(#[source] SimError),

    #[error("The values of point object n={index} are incorrect: {source}")]
    InvalidPointObject {
        index: usize,
        #[source]
        source: SimError,
    },

    #[error("Interactive input ended before the configuration was complete")]
    Prompt,
}

pub type Result<T> = std::result::Result<T, SimError>;
