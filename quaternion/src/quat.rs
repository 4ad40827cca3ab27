use std::any::Any;

use tracing::{debug, trace};

use crate::result::{Error, Result};
use crate::traits::{Identity, Zero};
use crate::vec3::Vec3;

/// Above this dot product `slerp` falls back to linear interpolation.
pub const SLERP_LINEAR_THRESHOLD: f64 = 0.9995;
/// Below this `sin(angle / 2)` the rotation axis is returned unnormalized.
pub const ANGLE_AXIS_MIN_SINE: f64 = 0.001;

/// `w + xi + yj + zk`
#[derive(Copy, Clone, Debug)]
pub struct Quaternion {
    w: f64,
    v: Vec3<f64>,
}

impl Zero for Quaternion {
    const ZERO: Self = Self {
        w: 0.0,
        v: Vec3::ZERO,
    };
}

impl Identity for Quaternion {
    const IDENTITY: Self = Self {
        w: 1.0,
        v: Vec3::ZERO,
    };
}

/// Right-hand side of [`Quaternion::multiply`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Operand {
    Quaternion(Quaternion),
    Scalar(f64),
}

impl From<Quaternion> for Operand {
    #[inline]
    fn from(value: Quaternion) -> Self {
        Self::Quaternion(value)
    }
}

impl From<f64> for Operand {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl Operand {
    /// Classifies an arbitrary value as a quaternion or a real scalar.
    ///
    /// `f32` and the 32/64-bit integers are widened to `f64`. `i64` and `u64`
    /// values beyond 2^53 round to the nearest representable `f64`. Any other
    /// type yields [`Error::UnsupportedOperand`] carrying its type name.
    pub fn try_from_value<T: Any>(value: T) -> Result<Self> {
        let any = &value as &dyn Any;

        if let Some(q) = any.downcast_ref::<Quaternion>() {
            return Ok(Self::Quaternion(*q));
        }
        if let Some(s) = any.downcast_ref::<f64>() {
            return Ok(Self::Scalar(*s));
        }
        if let Some(s) = any.downcast_ref::<f32>() {
            return Ok(Self::Scalar(f64::from(*s)));
        }
        if let Some(s) = any.downcast_ref::<i32>() {
            return Ok(Self::Scalar(f64::from(*s)));
        }
        if let Some(s) = any.downcast_ref::<u32>() {
            return Ok(Self::Scalar(f64::from(*s)));
        }
        if let Some(s) = any.downcast_ref::<i64>() {
            return Ok(Self::Scalar(*s as f64));
        }
        if let Some(s) = any.downcast_ref::<u64>() {
            return Ok(Self::Scalar(*s as f64));
        }

        Err(Error::UnsupportedOperand(std::any::type_name::<T>()))
    }
}

impl Quaternion {
    #[inline]
    pub const fn from_components(w: f64, v: Vec3<f64>) -> Self {
        Self { w, v }
    }
    /// Rotation of `angle_degrees` about `axis`.
    ///
    /// The axis is used as given; pass a unit vector to get a unit quaternion.
    #[inline]
    pub fn from_angle_axis(angle_degrees: f64, axis: Vec3<f64>) -> Self {
        let half = angle_degrees.to_radians() * 0.5;
        let (s, c) = half.sin_cos();

        Self {
            w: c,
            v: axis.scaled(s),
        }
    }
    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }
    #[inline]
    pub const fn v(&self) -> Vec3<f64> {
        self.v
    }
    #[inline]
    pub const fn x(&self) -> f64 {
        self.v.x()
    }
    #[inline]
    pub const fn y(&self) -> f64 {
        self.v.y()
    }
    #[inline]
    pub const fn z(&self) -> f64 {
        self.v.z()
    }
    #[inline]
    pub const fn add(self, rhs: Self) -> Self {
        Self {
            w: self.w + rhs.w,
            v: self.v.add(rhs.v),
        }
    }
    #[inline]
    pub const fn subtract(self, rhs: Self) -> Self {
        Self {
            w: self.w - rhs.w,
            v: self.v.sub(rhs.v),
        }
    }
    pub fn multiply(self, rhs: impl Into<Operand>) -> Self {
        match rhs.into() {
            Operand::Quaternion(q) => self.multiply_quaternion(q),
            Operand::Scalar(s) => self.multiply_scalar(s),
        }
    }
    /// Like [`Quaternion::multiply`] but accepts any value, failing on
    /// types that are neither a quaternion nor a real number.
    pub fn multiply_dyn<T: Any>(self, rhs: T) -> Result<Self> {
        let rhs = Operand::try_from_value(rhs).inspect_err(|e| {
            debug!(operation = "multiply", error = %e, "unsupported operand");
        })?;

        Ok(self.multiply(rhs))
    }
    /// Hamilton product `self * rhs`. Not commutative.
    #[inline]
    pub const fn multiply_quaternion(self, rhs: Self) -> Self {
        let w = self.w * rhs.w - self.v.dot(rhs.v);
        let v = rhs
            .v
            .scaled(self.w)
            .add(self.v.scaled(rhs.w).add(self.v.cross(rhs.v)));

        Self { w, v }
    }
    #[inline]
    pub const fn multiply_scalar(self, s: f64) -> Self {
        Self {
            w: self.w * s,
            v: self.v.scaled(s),
        }
    }
    /// Negates all four components. Not the conjugate.
    #[inline]
    pub const fn negate(self) -> Self {
        Self {
            w: -self.w,
            v: self.v.negated(),
        }
    }
    #[inline]
    pub const fn conjugate(self) -> Self {
        Self {
            w: self.w,
            v: self.v.negated(),
        }
    }
    #[inline]
    pub const fn magnitude_squared(&self) -> f64 {
        self.w * self.w + self.v.length_squared()
    }
    /// Euclidean norm, computed with `hypot` so large components do not overflow.
    pub fn magnitude(&self) -> f64 {
        self.w.hypot(self.x()).hypot(self.y()).hypot(self.z())
    }
    #[inline]
    const fn divided(self, d: f64) -> Self {
        Self {
            w: self.w / d,
            v: Vec3::new(self.v.x() / d, self.v.y() / d, self.v.z() / d),
        }
    }
    fn nonzero_magnitude(&self, operation: &'static str) -> Result<f64> {
        let magnitude = self.magnitude();

        if magnitude < f64::EPSILON {
            debug!(operation, quaternion = %self, "zero-magnitude quaternion");
            return Err(Error::DegenerateMagnitude);
        }
        if !magnitude.is_finite() {
            debug!(operation, quaternion = %self, "non-finite magnitude");
            return Err(Error::NonFiniteMagnitude);
        }

        Ok(magnitude)
    }
    /// `conjugate / |q|^2`
    pub fn invert(self) -> Result<Self> {
        let magnitude = self.nonzero_magnitude("invert")?;

        // |q|^2 itself may overflow
        Ok(self.conjugate().divided(magnitude).divided(magnitude))
    }
    /// `self * other^-1`
    pub fn difference(self, other: Self) -> Result<Self> {
        Ok(self.multiply_quaternion(other.invert()?))
    }
    pub fn normalize(self) -> Result<Self> {
        let magnitude = self.nonzero_magnitude("normalize")?;

        Ok(self.divided(magnitude))
    }
    /// Sum of the component-wise products, `w` included.
    #[inline]
    pub const fn dot(&self, other: Self) -> f64 {
        self.w * other.w + self.v.dot(other.v)
    }
    // this is shorthand for q * p * q^-1
    pub fn transform(&self, point: Vec3<f64>) -> Result<Vec3<f64>> {
        let inv = self.invert()?;
        let p = Self { w: 0.0, v: point };

        Ok(self.multiply_quaternion(p).multiply_quaternion(inv).v)
    }
    /// Spherical linear interpolation along the shorter arc.
    ///
    /// Both operands are normalized first. `t` is not clamped, values outside
    /// `[0, 1]` extrapolate. Nearly parallel inputs are interpolated linearly.
    pub fn slerp(self, other: Self, t: f64) -> Result<Self> {
        let self_normalized = self.normalize()?;
        let other_normalized = other.normalize()?;

        let dot = self_normalized.dot(other_normalized);
        let (other_normalized, dot) = if dot < 0.0 {
            (other_normalized.negate(), -dot)
        } else {
            (other_normalized, dot)
        };

        if dot > SLERP_LINEAR_THRESHOLD {
            trace!(dot, t, "slerp falling back to linear interpolation");
            return Ok(self_normalized.add(
                other_normalized
                    .subtract(self_normalized)
                    .multiply_scalar(t),
            ));
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();

        let a = self_normalized.multiply_scalar(((1.0 - t) * theta).sin() / sin_theta);
        let b = other_normalized.multiply_scalar((t * theta).sin() / sin_theta);

        Ok(a.add(b))
    }
    /// Returns `(angle in degrees, axis)`.
    ///
    /// For rotations close to zero the axis is the raw vector part.
    pub fn to_angle_axis(&self) -> Result<(f64, Vec3<f64>)> {
        if !(-1.0..=1.0).contains(&self.w) {
            debug!(operation = "to_angle_axis", w = self.w, "scalar part outside [-1, 1]");
            return Err(Error::DomainError(self.w));
        }

        let angle = (2.0 * self.w.acos()).to_degrees();
        let s = (1.0 - self.w * self.w).sqrt();

        if s < ANGLE_AXIS_MIN_SINE {
            trace!(angle, s, "near-zero rotation, axis left unnormalized");
            return Ok((angle, self.v));
        }

        Ok((
            angle,
            Vec3::new(self.v.x() / s, self.v.y() / s, self.v.z() / s),
        ))
    }
}

impl std::fmt::Display for Quaternion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = |c: f64| if c >= 0.0 { "+ " } else { "- " };
        let (x, y, z) = (self.x(), self.y(), self.z());

        write!(
            f,
            "{} {}{}i {}{}j {}{}k",
            self.w,
            sign(x),
            x.abs(),
            sign(y),
            y.abs(),
            sign(z),
            z.abs()
        )
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        self.w == other.w && self.v == other.v
    }
}

impl std::ops::Add for Quaternion {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Quaternion::add(self, rhs)
    }
}

impl std::ops::Sub for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply_quaternion(rhs)
    }
}

impl std::ops::Mul<f64> for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.multiply_scalar(rhs)
    }
}

impl std::ops::Mul<Quaternion> for f64 {
    type Output = Quaternion;
    #[inline]
    fn mul(self, rhs: Quaternion) -> Self::Output {
        rhs.multiply_scalar(self)
    }
}
