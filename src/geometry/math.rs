//! Distance, interpolation, and circle-construction primitives (spec §4.1).

use super::{Circle, Coordinates};
use crate::error::GeometryError;

/// Euclidean distance between two points.
pub fn distance(a: &Coordinates, b: &Coordinates) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Linear interpolation from `a` to `b` at parameter `t`. Not clamped —
/// callers that need a point strictly between `a` and `b` must supply
/// `t` in `[0, 1]` themselves.
pub fn interpolate(a: &Coordinates, b: &Coordinates, t: f64) -> Coordinates {
    Coordinates {
        x: a.x + t * (b.x - a.x),
        y: a.y + t * (b.y - a.y),
    }
}

/// The circle through `a` and `b` with `(a, b)` as a diameter.
pub fn circle_from_two(a: &Coordinates, b: &Coordinates) -> Circle {
    let center = interpolate(a, b, 0.5);
    let radius = distance(a, b) / 2.0;
    Circle::new(center, radius)
}

/// The unique circle through three non-collinear points, via the
/// determinant form of the circumcenter. Fails with
/// [`GeometryError::CollinearPoints`] when the three points are collinear
/// (determinant `D` is zero); the caller (the SEC step) is responsible
/// for falling back to a two-point circle.
pub fn circle_from_three(
    a: &Coordinates,
    b: &Coordinates,
    c: &Coordinates,
) -> Result<Circle, GeometryError> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d == 0.0 {
        return Err(GeometryError::CollinearPoints);
    }

    let a_sq = a.x * a.x + a.y * a.y;
    let b_sq = b.x * b.x + b.y * b.y;
    let c_sq = c.x * c.x + c.y * c.y;

    let ux = (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d;
    let uy = (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d;

    let center = Coordinates::new(ux, uy);
    let radius = distance(&center, a);
    Ok(Circle::new(center, radius))
}

/// True iff the triangle `(a, b, c)` is acute: every `side_i^2 + side_j^2 >
/// side_k^2` across the three pairings.
pub fn is_acute_triangle(a: &Coordinates, b: &Coordinates, c: &Coordinates) -> bool {
    let ab = distance(a, b).powi(2);
    let bc = distance(b, c).powi(2);
    let ca = distance(c, a).powi(2);

    ab + bc > ca && bc + ca > ab && ca + ab > bc
}

/// True iff `p` lies on the boundary of `c`, within `10^-precision`.
pub fn is_point_on_circle(p: &Coordinates, c: &Circle, precision: u32) -> bool {
    let epsilon = 10f64.powi(-(precision as i32));
    (distance(p, &c.center) - c.radius).abs() < epsilon
}

/// The point on the boundary of `c` closest to `p`.
///
/// Undefined when `p` coincides with `c.center` (the direction from
/// center to `p` has no defined angle); per spec §7
/// (`DegenerateGeometry`) this never fails — it returns the stable
/// tie-break sentinel `center + (radius, 0)`.
pub fn closest_point_on_circle(c: &Circle, p: &Coordinates) -> Coordinates {
    let v = p - &c.center;
    let d = v.norm();
    if d == 0.0 {
        return Coordinates::new(c.center.x + c.radius, c.center.y);
    }
    let scaled = v * (c.radius / d);
    &c.center + &scaled
}
