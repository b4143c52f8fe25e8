// Copyright 2025 the progress_ring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affine transforms.

use core::ops::Mul;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::Point;

/// A 2D affine transform.
///
/// The coefficients `[a, b, c, d, e, f]` are laid out as in the SVG
/// `matrix(a b c d e f)` transform function, so a point maps to
/// `(a·x + c·y + e, b·x + d·y + f)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Affine([f64; 6]);

impl Affine {
    /// The identity transform.
    pub const IDENTITY: Self = Self([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    /// Construct an affine transform from coefficients.
    #[inline]
    pub const fn new(c: [f64; 6]) -> Self {
        Self(c)
    }

    /// An affine transform representing translation.
    #[inline]
    pub const fn translate(dx: f64, dy: f64) -> Self {
        Self([1.0, 0.0, 0.0, 1.0, dx, dy])
    }

    /// An affine transform representing rotation.
    ///
    /// A positive angle rotates the positive X direction into positive Y,
    /// which is clockwise on a Y-down screen.
    ///
    /// The angle, `th`, is expressed in radians.
    #[inline]
    pub fn rotate(th: f64) -> Self {
        let (s, c) = th.sin_cos();
        Self([c, s, -s, c, 0.0, 0.0])
    }

    /// An affine transform representing a rotation of `th` radians about `center`.
    ///
    /// This matches the SVG `rotate(angle cx cy)` transform function, apart
    /// from the angle being in radians.
    #[inline]
    pub fn rotate_about(th: f64, center: impl Into<Point>) -> Self {
        let center = center.into();
        Self::translate(center.x, center.y)
            * Self::rotate(th)
            * Self::translate(-center.x, -center.y)
    }

    /// Get the coefficients of the transform.
    #[inline]
    pub const fn as_coeffs(self) -> [f64; 6] {
        self.0
    }

    /// Does this transform leave every point where it is?
    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

impl Default for Affine {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Point> for Affine {
    type Output = Point;

    #[inline]
    fn mul(self, other: Point) -> Point {
        Point::new(
            self.0[0] * other.x + self.0[2] * other.y + self.0[4],
            self.0[1] * other.x + self.0[3] * other.y + self.0[5],
        )
    }
}

impl Mul for Affine {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self([
            self.0[0] * other.0[0] + self.0[2] * other.0[1],
            self.0[1] * other.0[0] + self.0[3] * other.0[1],
            self.0[0] * other.0[2] + self.0[2] * other.0[3],
            self.0[1] * other.0[2] + self.0[3] * other.0[3],
            self.0[0] * other.0[4] + self.0[2] * other.0[5] + self.0[4],
            self.0[1] * other.0[4] + self.0[3] * other.0[5] + self.0[5],
        ])
    }
}

#[cfg(test)]
mod tests {
    use crate::{Affine, Point};
    use std::f64::consts::PI;

    fn assert_near(p0: Point, p1: Point) {
        assert!(p0.is_near(p1, 1e-9), "{p0:?} != {p1:?}");
    }

    #[test]
    fn affine_basic() {
        let p = Point::new(3.0, 4.0);

        assert_near(Affine::default() * p, p);
        assert_near(Affine::rotate(0.0) * p, p);
        assert_near(Affine::rotate(PI / 2.0) * p, Point::new(-4.0, 3.0));
        assert_near(Affine::translate(5.0, 6.0) * p, Point::new(8.0, 10.0));
    }

    #[test]
    fn rotate_about_fixes_center() {
        let center = Point::new(50.0, 50.0);
        let a = Affine::rotate_about(PI / 2.0, center);
        assert_near(a * center, center);
        // Quarter turn clockwise on screen: top goes to the right.
        assert_near(a * Point::new(50.0, 5.0), Point::new(95.0, 50.0));
    }

    #[test]
    fn affine_mul() {
        let a1 = Affine::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let a2 = Affine::new([0.1, 1.2, 2.3, 3.4, 4.5, 5.6]);

        let px = Point::new(1.0, 0.0);
        let py = Point::new(0.0, 1.0);
        assert_near(a1 * (a2 * px), (a1 * a2) * px);
        assert_near(a1 * (a2 * py), (a1 * a2) * py);
    }
}
