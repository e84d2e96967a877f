//! # Geometry Module - 2D Primitives for the LCM Simulation
//!
//! This module provides the 2D coordinate and circle primitives used by the
//! robot state machine and the scheduler: Euclidean distance, linear
//! interpolation along a move segment, and the circle constructions that
//! back the Smallest Enclosing Circle (SEC) algorithm.
//!
//! ## Submodules
//!
//! - [`ops`]: operator overloads for [`Coordinates`] (`Add`, `Sub`, `Mul`,
//!   `Div`, `Neg`), in both by-value and by-reference form.
//! - [`math`]: distance, interpolation, circle construction, and the
//!   numeric-threshold predicates that decide termination.
//! - [`welzl`]: the randomized incremental Smallest Enclosing Circle
//!   algorithm, drawing its randomness from the simulation's shared RNG.
//! - [`tests`]: unit tests for the primitives above.

pub mod math;
pub mod ops;
pub mod tests;
pub mod welzl;

pub use math::{
    circle_from_three, circle_from_two, closest_point_on_circle, distance, interpolate,
    is_acute_triangle, is_point_on_circle,
};
pub use welzl::smallest_enclosing_circle;

/// An immutable 2D point in the simulation plane.
///
/// Equality between two `Coordinates` values is only meaningful up to a
/// configured decimal precision (`threshold_precision`, see
/// [`math::is_point_on_circle`] and the scheduler's multiplicity
/// detection) — `Coordinates` itself derives bitwise `PartialEq` for use
/// as a plain value type, callers that need tolerant equality use
/// [`distance`] against an epsilon.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Coordinates { x, y }
    }

    pub fn zero() -> Self {
        Coordinates { x: 0.0, y: 0.0 }
    }

    /// Euclidean norm of this point treated as a vector from the origin.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.x, self.y)
    }
}

/// A circle described by its center and radius.
///
/// `radius` is non-negative except for the `-1.0` sentinel used internally
/// by [`welzl::smallest_enclosing_circle`] while it has not yet
/// incorporated any boundary points.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Circle {
    pub center: Coordinates,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Coordinates, radius: f64) -> Self {
        Circle { center, radius }
    }

    /// The uninitialized sentinel circle used by Welzl's algorithm before
    /// any point has forced a boundary.
    pub(crate) fn sentinel() -> Self {
        Circle {
            center: Coordinates::zero(),
            radius: -1.0,
        }
    }

    pub fn contains(&self, p: &Coordinates, epsilon: f64) -> bool {
        distance(&self.center, p) <= self.radius + epsilon
    }
}
