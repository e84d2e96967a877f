//! Arithmetic operator overloads for [`super::Coordinates`].
//!
//! Mirrors the teacher crate's vector arithmetic: both by-value and
//! by-reference impls so hot loops in the robot/scheduler code can avoid
//! copies where it matters without losing ergonomics elsewhere.

use super::Coordinates;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Add for Coordinates {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Coordinates {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Add for &Coordinates {
    type Output = Coordinates;
    #[inline]
    fn add(self, rhs: &Coordinates) -> Self::Output {
        Coordinates {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Coordinates {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Coordinates {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Sub for &Coordinates {
    type Output = Coordinates;
    #[inline]
    fn sub(self, rhs: &Coordinates) -> Self::Output {
        Coordinates {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Coordinates {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Coordinates {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Mul<Coordinates> for f64 {
    type Output = Coordinates;
    #[inline]
    fn mul(self, rhs: Coordinates) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Coordinates {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Coordinates {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl Neg for Coordinates {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Coordinates {
            x: -self.x,
            y: -self.y,
        }
    }
}
