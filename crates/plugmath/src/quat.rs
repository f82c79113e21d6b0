use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{Epsilon, Math, MathError, Number, Operand, UnitQuaternion, Vector3};

/// Quaternion `xi + yj + zk + w` of unconstrained length.
///
/// Multiplying a vector applies the full sandwich product `q v q*`, so a
/// non-unit quaternion rotates and scales by `|q|²`. Use
/// [`UnitQuaternion`] for pure rotations.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Quaternion<K> {
    pub x: Operand<K>,
    pub y: Operand<K>,
    pub z: Operand<K>,
    pub w: Operand<K>,
}

impl<K: Number> Quaternion<K> {
    #[inline]
    pub fn new(x: Operand<K>, y: Operand<K>, z: Operand<K>, w: Operand<K>) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn from_scalars(x: K, y: K, z: K, w: K) -> Self {
        Self::new(
            Operand::from_scalar(x),
            Operand::from_scalar(y),
            Operand::from_scalar(z),
            Operand::from_scalar(w),
        )
    }

    /// `(0, 0, 0, 1)`
    #[inline]
    pub fn identity() -> Self {
        Self::new(Operand::zero(), Operand::zero(), Operand::zero(), Operand::one())
    }

    #[inline]
    pub fn from_unit(q: UnitQuaternion<K>) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }

    /// The imaginary part `(x, y, z)`.
    #[inline]
    pub fn vector(self) -> Vector3<K> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// The real part `w`.
    #[inline]
    pub fn scalar(self) -> Operand<K> {
        self.w
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> Operand<K> {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    #[inline]
    pub fn length_sqr(self) -> Operand<K> {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> Operand<K> {
        Math::sqrt(self.length_sqr())
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// `conjugate / length_sqr`. Unguarded: NaN/inf at zero length.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() / self.length_sqr()
    }

    /// Like [`inverse`](Self::inverse), but rejects quaternions whose squared
    /// length is below `Epsilon::sqr()`.
    pub fn try_inverse(self) -> Result<Self, MathError> {
        let length_sqr = self.length_sqr();
        if length_sqr < Epsilon::<K>::sqr() {
            return Err(MathError::ZeroLength);
        }
        Ok(self.conjugate() / length_sqr)
    }

    /// Unguarded: NaN/inf at zero length.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Normalizes, or returns `fallback` when the squared length is below
    /// `Epsilon::sqr()`.
    pub fn normalize_safe(self, fallback: Self) -> Self {
        let length_sqr = self.length_sqr();
        if length_sqr < Epsilon::<K>::sqr() {
            trace_fallback!(length_sqr = length_sqr.to_debug_float(), "normalize_safe: degenerate quaternion, using fallback");
            return fallback;
        }
        self / Math::sqrt(length_sqr)
    }

    /// Picks the sign of `other` for interpolation: the same hemisphere as
    /// `self` for the short path, the opposite one for the long path.
    #[inline]
    fn hemisphere(self, other: Self, long_path: bool) -> Self {
        let dot = self.dot(other);
        let flip = if long_path { dot > Operand::zero() } else { dot < Operand::zero() };
        if flip {
            -other
        } else {
            other
        }
    }

    /// Componentwise interpolation `a (1 - t) + b t` after the hemisphere check.
    pub fn lerp(self, other: Self, t: Operand<K>, long_path: bool) -> Self {
        let other = self.hemisphere(other, long_path);
        self * (Operand::one() - t) + other * t
    }

    /// Normalized lerp, rescaled to the linearly interpolated length of the
    /// inputs. Commutative and torque-minimal, but not constant velocity.
    pub fn nlerp(self, other: Self, t: Operand<K>, long_path: bool) -> Self {
        let other = self.hemisphere(other, long_path);
        let s = Operand::one() - t;
        let length = self.length() * s + other.length() * t;
        (self * s + other * t).normalize() * length
    }

    /// Spherical interpolation: constant velocity and torque-minimal for
    /// inputs of equal length. Falls back to [`lerp`](Self::lerp) when the
    /// inputs are nearly parallel.
    pub fn slerp(self, other: Self, t: Operand<K>, long_path: bool) -> Self {
        let mut other = other;
        let mut cos_half_theta = self.normalize().dot(other.normalize());

        let flip = if long_path {
            cos_half_theta > Operand::zero()
        } else {
            cos_half_theta < Operand::zero()
        };
        if flip {
            other = -other;
            cos_half_theta = -cos_half_theta;
        }

        if Math::abs(cos_half_theta) > Operand::one() - Math::epsilon() {
            trace_fallback!(cos_half_theta = cos_half_theta.to_debug_float(), "slerp: nearly parallel inputs, using lerp");
            return self.lerp(other, t, long_path);
        }

        let half_theta = Math::acos(cos_half_theta);
        let sin_half_theta = Math::sin(half_theta);
        let weight_a = Math::sin((Operand::one() - t) * half_theta) / sin_half_theta;
        let weight_b = Math::sin(t * half_theta) / sin_half_theta;
        self * weight_a + other * weight_b
    }

    /// Componentwise `equal_to`. Same as `==`.
    #[inline]
    pub fn exactly_equals(self, other: Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z && self.w == other.w
    }

    /// `|1 - |dot(a, b)|| < Epsilon::sqr()`. Treats `q` and `-q` as equal.
    #[inline]
    pub fn approximately_equals(self, other: Self) -> bool {
        self.approximately_equals_eps(other, Epsilon::<K>::sqr())
    }

    #[inline]
    pub fn approximately_equals_eps(self, other: Self, epsilon: Operand<K>) -> bool {
        Math::abs(Operand::one() - Math::abs(self.dot(other))) < epsilon
    }
}

impl<K: Number> Default for Quaternion<K> {
    /// The zero quaternion.
    fn default() -> Self {
        Self::new(Operand::zero(), Operand::zero(), Operand::zero(), Operand::zero())
    }
}

impl<K: Number> PartialEq for Quaternion<K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.exactly_equals(*other)
    }
}

impl<K: Number> From<UnitQuaternion<K>> for Quaternion<K> {
    #[inline]
    fn from(q: UnitQuaternion<K>) -> Self {
        Self::from_unit(q)
    }
}

impl<K: Number> Add for Quaternion<K> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl<K: Number> Sub for Quaternion<K> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl<K: Number> Neg for Quaternion<K> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<K: Number> Mul<Operand<K>> for Quaternion<K> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Operand<K>) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl<K: Number> Mul<Quaternion<K>> for Operand<K> {
    type Output = Quaternion<K>;
    #[inline]
    fn mul(self, rhs: Quaternion<K>) -> Quaternion<K> {
        rhs * self
    }
}

impl<K: Number> Div<Operand<K>> for Quaternion<K> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Operand<K>) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

/// Hamilton product: applies `rhs` first, then `self`.
impl<K: Number> Mul for Quaternion<K> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y + a.y * b.w + a.z * b.x - a.x * b.z,
            a.w * b.z + a.z * b.w + a.x * b.y - a.y * b.x,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

/// `a * inverse(b)`
impl<K: Number> Div for Quaternion<K> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<K: Number> AddAssign for Quaternion<K> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<K: Number> SubAssign for Quaternion<K> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<K: Number> MulAssign for Quaternion<K> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Sandwich product `q v q*`: rotation scaled by `|q|²`.
impl<K: Number> Mul<Vector3<K>> for Quaternion<K> {
    type Output = Vector3<K>;
    fn mul(self, v: Vector3<K>) -> Vector3<K> {
        let two = Operand::from_int(2);
        let (two_x, two_y, two_z) = (self.x * two, self.y * two, self.z * two);

        let xx = self.x * self.x;
        let yy = self.y * self.y;
        let zz = self.z * self.z;
        let ww = self.w * self.w;
        let xy2 = self.x * two_y;
        let xz2 = self.x * two_z;
        let yz2 = self.y * two_z;
        let wx2 = self.w * two_x;
        let wy2 = self.w * two_y;
        let wz2 = self.w * two_z;

        Vector3::new(
            (ww + xx - yy - zz) * v.x + (xy2 - wz2) * v.y + (xz2 + wy2) * v.z,
            (xy2 + wz2) * v.x + (ww - xx + yy - zz) * v.y + (yz2 - wx2) * v.z,
            (xz2 - wy2) * v.x + (yz2 + wx2) * v.y + (ww - xx - yy + zz) * v.z,
        )
    }
}

impl<K: Number> fmt::Display for Quaternion<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
