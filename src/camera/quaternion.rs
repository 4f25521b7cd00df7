//! Quaternion algebra for camera rotations.
//!
//! A small, explicit quaternion type in double precision. The camera code
//! relies on exact degenerate-input behavior (zero-length axis, zero norm)
//! and component-wise epsilon equality, so the algebra is spelled out here
//! rather than delegated to a generic math type.

use std::ops::Mul;

use glam::DVec3;

/// Component-wise tolerance for quaternion equality.
pub const QUAT_EQ_EPS: f64 = 1e-15;

/// Norm threshold below which a quaternion or axis is treated as zero.
const NORM_EPS: f64 = 1e-12;

/// A quaternion `r + i·î + j·ĵ + k·k̂` in double precision.
///
/// Value type with no identity; rotation quaternions are built with
/// [`Quaternion::from_rotation`] and applied to vectors with
/// [`Quaternion::rotate_vector`].
#[derive(Debug, Clone, Copy)]
pub struct Quaternion {
    /// Scalar (real) component.
    pub r: f64,
    /// First imaginary component.
    pub i: f64,
    /// Second imaginary component.
    pub j: f64,
    /// Third imaginary component.
    pub k: f64,
}

impl Quaternion {
    /// The zero quaternion.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Quaternion from its four components. No validation.
    #[must_use]
    pub const fn new(r: f64, i: f64, j: f64, k: f64) -> Self {
        Self { r, i, j, k }
    }

    /// Quaternion from a scalar and a vector part. No validation.
    #[must_use]
    pub const fn from_parts(scalar: f64, v: DVec3) -> Self {
        Self::new(scalar, v.x, v.y, v.z)
    }

    /// Unit rotation quaternion: rotation by `angle` radians about `axis`.
    ///
    /// `r = cos(angle/2)`, vector part `sin(angle/2) · normalize(axis)`.
    /// A ~zero-length axis produces no rotation (the identity is returned);
    /// callers must not rely on anything beyond that.
    #[must_use]
    pub fn from_rotation(angle: f64, axis: DVec3) -> Self {
        let len = axis.length();
        if len < NORM_EPS {
            return Self::IDENTITY;
        }
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        Self::from_parts(cos_half, axis * (sin_half / len))
    }

    /// Assign all four components in place.
    pub fn set(&mut self, r: f64, i: f64, j: f64, k: f64) {
        *self = Self::new(r, i, j, k);
    }

    /// Assign from a scalar and a vector part in place.
    pub fn set_parts(&mut self, scalar: f64, v: DVec3) {
        *self = Self::from_parts(scalar, v);
    }

    /// Replace `self` with the rotation by `angle` about `axis`.
    ///
    /// Same degenerate-axis behavior as [`Quaternion::from_rotation`].
    pub fn set_rotation(&mut self, angle: f64, axis: DVec3) {
        *self = Self::from_rotation(angle, axis);
    }

    /// Scalar (real) part.
    #[must_use]
    pub const fn scalar(&self) -> f64 {
        self.r
    }

    /// Vector (imaginary) part.
    #[must_use]
    pub const fn vector(&self) -> DVec3 {
        DVec3::new(self.i, self.j, self.k)
    }

    /// Conjugate: the vector part negated.
    #[must_use]
    pub const fn conj(&self) -> Self {
        Self::new(self.r, -self.i, -self.j, -self.k)
    }

    /// Squared norm `r² + i² + j² + k²`.
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.r * self.r + self.i * self.i + self.j * self.j + self.k * self.k
    }

    /// Norm (Euclidean length of the four components).
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Inverse, `conj() · (1/‖q‖)`.
    ///
    /// Exact for the unit quaternions produced by
    /// [`Quaternion::from_rotation`], which are the only quaternions the
    /// camera inverts. Returns the zero quaternion when the norm is below
    /// epsilon instead of dividing by zero.
    #[must_use]
    pub fn inv(&self) -> Self {
        let n = self.norm();
        if n < NORM_EPS {
            return Self::ZERO;
        }
        self.conj() * (1.0 / n)
    }

    /// Conjugation `q · p · conj(q)`.
    ///
    /// With `q` a unit rotation quaternion and `p` a pure quaternion this
    /// rotates the vector part of `p`.
    #[must_use]
    pub fn sandwich(&self, p: Self) -> Self {
        *self * p * self.conj()
    }

    /// Rotate a vector by this (unit) quaternion via the sandwich operator.
    #[must_use]
    pub fn rotate_vector(&self, v: DVec3) -> DVec3 {
        self.sandwich(Self::from_parts(0.0, v)).vector()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product (non-commutative).
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.r * rhs.r - self.i * rhs.i - self.j * rhs.j - self.k * rhs.k,
            self.r * rhs.i + self.i * rhs.r + self.j * rhs.k - self.k * rhs.j,
            self.r * rhs.j - self.i * rhs.k + self.j * rhs.r + self.k * rhs.i,
            self.r * rhs.k + self.i * rhs.j - self.j * rhs.i + self.k * rhs.r,
        )
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self::new(self.r * s, self.i * s, self.j * s, self.k * s)
    }
}

impl PartialEq for Quaternion {
    /// Component-wise comparison within [`QUAT_EQ_EPS`].
    fn eq(&self, other: &Self) -> bool {
        (self.r - other.r).abs() < QUAT_EQ_EPS
            && (self.i - other.i).abs() < QUAT_EQ_EPS
            && (self.j - other.j).abs() < QUAT_EQ_EPS
            && (self.k - other.k).abs() < QUAT_EQ_EPS
    }
}
