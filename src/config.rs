//! # Configuration ingestion (spec §6, ambient per Design Notes)
//!
//! `spec.md` treats configuration ingestion as an external collaborator,
//! but a runnable crate still needs a concrete type for the input
//! listed in §6 and a validated path from file to scheduler. This module
//! is that plumbing: a `SimulationConfig` matching §6's field list,
//! loaded from TOML (the teacher's chosen format for its own
//! configuration-shaped data), and validated against the §7
//! `ConfigError` taxonomy before a single event is popped.

use crate::error::ConfigError;
use crate::geometry::Coordinates;
use crate::robot::{Algorithm, FaultKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One robot's initial position, broadcast or per-robot speed override,
/// and optional fault assignment — see [`RobotFaultConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialPosition {
    pub x: f64,
    pub y: f64,
}

impl From<InitialPosition> for Coordinates {
    fn from(p: InitialPosition) -> Self {
        Coordinates::new(p.x, p.y)
    }
}

/// A speed value supplied either as one scalar broadcast to every robot,
/// or as a list with one entry per robot (spec §6, `robot_speeds`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpeedSpec {
    Broadcast(f64),
    PerRobot(Vec<f64>),
}

/// `{type, probability}` per spec §6's `robot_faults`; `fault_kind`
/// mirrors the field name spec.md uses internally (`fault_type`)
/// renamed to avoid the `type` keyword collision noted in SPEC_FULL §4.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RobotFaultConfig {
    pub fault_kind: FaultKind,
    pub probability: f64,
}

/// The scheduler's only supported value for `scheduler_type` (spec §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulerType {
    Async,
}

/// The scheduler's only supported value for `probability_distribution`
/// (spec §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbabilityDistribution {
    Exponential,
}

/// Raw, pre-validation configuration mirroring every field enumerated in
/// spec §6, deserialized directly from a TOML document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub seed: u64,
    pub num_of_robots: usize,

    /// Empty means "draw uniformly from the width/height bounds below".
    #[serde(default)]
    pub initial_positions: Vec<InitialPosition>,
    #[serde(default = "default_width_bound")]
    pub width_bound: f64,
    #[serde(default = "default_height_bound")]
    pub height_bound: f64,

    pub robot_speeds: SpeedSpec,
    pub visibility_radius: Option<f64>,
    pub rigid_movement: bool,
    pub multiplicity_detection: bool,
    pub obstructed_visibility: bool,

    pub scheduler_type: SchedulerType,
    pub probability_distribution: ProbabilityDistribution,

    pub time_precision: u32,
    pub threshold_precision: u32,
    pub sampling_rate: f64,
    pub lambda_rate: f64,

    pub algorithm: Algorithm,

    #[serde(default)]
    pub robot_faults: Option<Vec<RobotFaultConfig>>,
}

fn default_width_bound() -> f64 {
    10.0
}

fn default_height_bound() -> f64 {
    10.0
}

impl SimulationConfig {
    /// Reads and parses a TOML configuration file. Parse failures
    /// surface as [`crate::error::SimError::TomlParse`] /
    /// [`crate::error::SimError::Io`] at the call site via `?`.
    pub fn load_from_path(path: &Path) -> Result<Self, crate::error::SimError> {
        let text = std::fs::read_to_string(path)?;
        let config: SimulationConfig = toml::from_str(&text)?;
        Ok(config)
    }

    /// Checks every field against the §7 `ConfigError` taxonomy.
    /// Configuration errors surface synchronously and abort startup
    /// before the scheduler constructs a single robot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_of_robots == 0 {
            return Err(ConfigError::EmptyRobotSet);
        }

        if !self.initial_positions.is_empty() && self.initial_positions.len() != self.num_of_robots
        {
            return Err(ConfigError::RobotCountMismatch {
                field: "initial_positions",
                expected: self.num_of_robots,
                actual: self.initial_positions.len(),
            });
        }

        match &self.robot_speeds {
            SpeedSpec::Broadcast(speed) => {
                if *speed <= 0.0 {
                    return Err(ConfigError::NegativeSpeed(*speed));
                }
            }
            SpeedSpec::PerRobot(speeds) => {
                if speeds.len() != self.num_of_robots {
                    return Err(ConfigError::RobotCountMismatch {
                        field: "robot_speeds",
                        expected: self.num_of_robots,
                        actual: speeds.len(),
                    });
                }
                if let Some(&bad) = speeds.iter().find(|&&s| s <= 0.0) {
                    return Err(ConfigError::NegativeSpeed(bad));
                }
            }
        }

        if let Some(radius) = self.visibility_radius {
            if radius <= 0.0 {
                return Err(ConfigError::NonPositiveScalar {
                    field: "visibility_radius",
                    value: radius,
                });
            }
        }

        if self.sampling_rate <= 0.0 {
            return Err(ConfigError::NonPositiveScalar {
                field: "sampling_rate",
                value: self.sampling_rate,
            });
        }

        if self.lambda_rate <= 0.0 {
            return Err(ConfigError::NonPositiveScalar {
                field: "lambda_rate",
                value: self.lambda_rate,
            });
        }

        if let Some(faults) = &self.robot_faults {
            if faults.len() != self.num_of_robots {
                return Err(ConfigError::RobotCountMismatch {
                    field: "robot_faults",
                    expected: self.num_of_robots,
                    actual: faults.len(),
                });
            }
        }

        Ok(())
    }

    /// The per-robot speed implied by `robot_speeds`, broadcasting a
    /// single scalar to every robot when not given per-robot.
    pub fn speeds(&self) -> Vec<f64> {
        match &self.robot_speeds {
            SpeedSpec::Broadcast(speed) => vec![*speed; self.num_of_robots],
            SpeedSpec::PerRobot(speeds) => speeds.clone(),
        }
    }

    /// The per-robot fault assignment, defaulting every robot to
    /// `FaultKind::None` with probability `0.0` when `robot_faults` is
    /// absent.
    pub fn faults(&self) -> Vec<RobotFaultConfig> {
        self.robot_faults.clone().unwrap_or_else(|| {
            vec![
                RobotFaultConfig {
                    fault_kind: FaultKind::None,
                    probability: 0.0,
                };
                self.num_of_robots
            ]
        })
    }
}
