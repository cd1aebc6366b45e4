//! This module contains a struct, [`Coord`](coord::Coord), that models a 3D coordinate space and
//! supports limited math in 3 dimensions with scalars and other coordinates. Every color type here
//! projects into a `Coord`, which is where blending actually happens.

use std::ops::{Add, Mul};

/// A point in 3D space. Supports the few arithmetic operations blending needs.
/// `Coord` has three axes, denoted `x`, `y`, and `z`, which are not treated differently by any
/// method. A color maps its components onto the axes in the order of the letters in its name:
/// `CIELUVColor` puts `l` on x, `u` on y and `v` on z.
///
/// # Example
/// ```
/// # use luvtone::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let sum = point_1 + point_2;
/// assert_eq!(sum, Coord{x: 8., y: 10., z: 10.});
/// let scaled = point_1 * 2.;
/// assert_eq!(scaled, Coord{x: 2., y: 16., z: 14.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Mul<f64> for Coord {
    type Output = Coord;
    fn mul(self, rhs: f64) -> Coord {
        Coord {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Coord {
    /// Linear interpolation: `self * (1 - weight) + other * weight`, component by component. A
    /// weight of 0 gives `self` back exactly and a weight of 1 gives `other` back exactly, which is
    /// why this is not written as `self + (other - self) * weight`.
    /// # Example
    /// ```
    /// # use luvtone::coord::Coord;
    /// let point1 = Coord{x: 0.2, y: 0., z: 1.};
    /// let point2 = Coord{x: 1., y: 0.8, z: 1.};
    /// let mid = point1.lerp(&point2, 0.25);
    /// assert!((mid.x - 0.4).abs() <= 1e-10);
    /// assert!((mid.y - 0.2).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn lerp(&self, other: &Coord, weight: f64) -> Coord {
        *self * (1.0 - weight) + *other * weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_exact() {
        let a = Coord {
            x: 13.0,
            y: 1.8,
            z: -0.6,
        };
        let b = Coord {
            x: 87.0,
            y: 12.7,
            z: -16.4,
        };
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = Coord {
            x: 0.5,
            y: 0.25,
            z: 0.75,
        };
        let b = Coord {
            x: 0.125,
            y: 0.5,
            z: 0.25,
        };
        assert_eq!((a + b) * 0.5, a.lerp(&b, 0.5));
    }
}
