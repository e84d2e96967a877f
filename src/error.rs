//! # Error Taxonomy (spec §7)
//!
//! Configuration errors surface synchronously and abort startup before a
//! single event is popped. Geometry errors never leave the geometry
//! module — they are consumed locally by the SEC step, which chooses a
//! fallback (see [`crate::geometry::welzl`]). `DegenerateGeometry` and
//! `QueueEmpty` are not modeled here at all: per spec they are sentinel
//! return values and an exit code respectively, never raised errors.
//!
//! Spec §7 also names an invalid-enum-value case. Every enumerated config
//! field (`Algorithm`, `FaultKind`, `SchedulerType`,
//! `ProbabilityDistribution`) deserializes straight through serde from
//! TOML, so a bad value there is already rejected before `validate()`
//! ever runs — it surfaces as `SimError::TomlParse`, not a `ConfigError`
//! variant.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("expected {expected} robots, got {actual} entries for `{field}`")]
    RobotCountMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("robot speed must be positive, got {0}")]
    NegativeSpeed(f64),

    #[error("`{field}` must be positive, got {value}")]
    NonPositiveScalar { field: &'static str, value: f64 },

    #[error("num_of_robots must be at least 1")]
    EmptyRobotSet,
}

#[derive(Debug, Error, PartialEq, Clone, Copy)]
pub enum GeometryError {
    #[error("three points are collinear; no unique circumscribed circle exists")]
    CollinearPoints,
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize data: {0}")]
    Serialize(String),
}
