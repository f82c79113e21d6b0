use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::{Epsilon, Math, MathError, Number, Operand, Quaternion, Vector3};

/// Rotation quaternion, intended to stay on the unit sphere.
///
/// The unit-length invariant is not enforced by [`new`](Self::new) or
/// [`Default`] (the zero quaternion). Products and [`slerp`](Self::slerp)
/// re-normalize through [`ensure_normalization`](Self::ensure_normalization)
/// to stop rounding drift from accumulating. Use
/// [`try_new`](Self::try_new) to reject non-unit input.
///
/// Operations that leave the unit sphere (sums, differences and scalar
/// products) return a plain [`Quaternion`].
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct UnitQuaternion<K> {
    pub x: Operand<K>,
    pub y: Operand<K>,
    pub z: Operand<K>,
    pub w: Operand<K>,
}

impl<K: Number> UnitQuaternion<K> {
    /// Unchecked: the caller guarantees unit length.
    #[inline]
    pub fn new(x: Operand<K>, y: Operand<K>, z: Operand<K>, w: Operand<K>) -> Self {
        Self { x, y, z, w }
    }

    /// Unchecked: reinterprets `q` without normalizing it. See
    /// [`normalize_to_unit`](Self::normalize_to_unit).
    #[inline]
    pub fn from_quaternion_unchecked(q: Quaternion<K>) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }

    /// Fails with [`MathError::NotNormalized`] when `|1 - length_sqr|`
    /// exceeds `Epsilon::normal()`.
    pub fn try_new(x: Operand<K>, y: Operand<K>, z: Operand<K>, w: Operand<K>) -> Result<Self, MathError> {
        let q = Self::new(x, y, z, w);
        let length_sqr = q.length_sqr();
        if Math::abs(Operand::one() - length_sqr) > Epsilon::<K>::normal() {
            return Err(MathError::NotNormalized {
                length_sqr: length_sqr.to_debug_float(),
            });
        }
        Ok(q)
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_quaternion_unchecked(Quaternion::identity())
    }

    #[inline]
    pub fn as_quaternion(self) -> Quaternion<K> {
        Quaternion::from_unit(self)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> Operand<K> {
        self.as_quaternion().dot(rhs.as_quaternion())
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

    /// For a unit quaternion the inverse is the conjugate.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate()
    }

    /// Normalizes `q`, falling back to the identity for a near-zero input.
    #[inline]
    pub fn normalize_to_unit(q: Quaternion<K>) -> Self {
        Self::from_quaternion_unchecked(q.normalize_safe(Quaternion::identity()))
    }

    /// Rescales by `1 / sqrt(length_sqr)` when the squared length drifted
    /// more than `Epsilon::sqr()` away from one.
    pub fn ensure_normalization(self) -> Self {
        let length_sqr = self.length_sqr();
        if Math::abs(Operand::one() - length_sqr) > Epsilon::<K>::sqr() {
            trace_fallback!(length_sqr = length_sqr.to_debug_float(), "ensure_normalization: rescaling drifted quaternion");
            return Self::from_quaternion_unchecked(self / Math::sqrt(length_sqr));
        }
        self
    }

    /// Spherical interpolation along the short arc (or the long one with
    /// `long_path`). Falls back to [`nlerp`](Self::nlerp) for nearly equal
    /// rotations.
    pub fn slerp(self, other: Self, t: Operand<K>, long_path: bool) -> Self {
        let mut other = other;
        let mut cos_half_theta = self.dot(other);

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
            trace_fallback!(cos_half_theta = cos_half_theta.to_debug_float(), "slerp: nearly equal rotations, using nlerp");
            return self.nlerp(other, t, long_path);
        }

        let half_theta = Math::acos(cos_half_theta);
        let sin_half_theta = Math::sin(half_theta);
        let weight_a = Math::sin((Operand::one() - t) * half_theta) / sin_half_theta;
        let weight_b = Math::sin(t * half_theta) / sin_half_theta;
        Self::from_quaternion_unchecked(self * weight_a + other * weight_b).ensure_normalization()
    }

    /// Componentwise lerp projected back onto the unit sphere.
    #[inline]
    pub fn nlerp(self, other: Self, t: Operand<K>, long_path: bool) -> Self {
        Self::normalize_to_unit(self.as_quaternion().lerp(other.as_quaternion(), t, long_path))
    }

    /// Rotation whose local `forward` points along `forward`, with local `up`
    /// as close to `up` as possible.
    ///
    /// A zero `forward` falls back to [`Vector3::forward`]. When `up` is zero
    /// or parallel to `forward`, the side axis falls back to
    /// [`Vector3::orthonormal`] of the look direction.
    pub fn look_rotation(forward: Vector3<K>, up: Vector3<K>) -> Self {
        // columns of the rotation matrix
        let look = forward.normalize_safe(Vector3::forward());
        let side = up.cross(look).normalize_safe(look.orthonormal());
        let rup = look.cross(side);

        let one = Operand::one();
        let eps = Math::epsilon();
        let trace_x = one + side.x - rup.y - look.z;
        let trace_y = one - side.x + rup.y - look.z;
        let trace_z = one - side.x - rup.y + look.z;

        if trace_x + trace_y + trace_z < eps {
            trace_fallback!("look_rotation: near-identity basis, returning identity");
            return Self::identity();
        }

        // A candidate at or below epsilon is only taken when it is the
        // largest; otherwise sqrt(trace) may be zero or NaN.
        let largest = Math::max(trace_x, Math::max(trace_y, trace_z));
        let usable = |trace: Operand<K>| trace > eps || trace >= largest;

        let two = Operand::from_int(2);
        let quarter = Operand::from_division(1, 4);
        let q = if usable(trace_x) && trace_x + eps > trace_y && trace_x + eps > trace_z {
            let s = two * Math::sqrt(trace_x);
            Quaternion::new(quarter * s, (rup.x + side.y) / s, (look.x + side.z) / s, (rup.z - look.y) / s)
        } else if usable(trace_y) && trace_y + eps > trace_x && trace_y + eps > trace_z {
            let s = two * Math::sqrt(trace_y);
            Quaternion::new((rup.x + side.y) / s, quarter * s, (look.y + rup.z) / s, (look.x - side.z) / s)
        } else {
            let s = two * Math::sqrt(trace_z);
            Quaternion::new((look.x + side.z) / s, (look.y + rup.z) / s, quarter * s, (side.y - rup.x) / s)
        };
        // small traces lose precision in low-bit kinds
        Self::normalize_to_unit(q)
    }

    /// Rotation by `angle` radians around `axis`. A zero axis falls back to
    /// [`Vector3::forward`].
    pub fn axis_angle_radians(axis: Vector3<K>, angle: Operand<K>) -> Self {
        let axis = axis.normalize_safe(Vector3::forward());
        let half = angle / Operand::from_int(2);
        let v = axis * Math::sin(half);
        Self::new(v.x, v.y, v.z, Math::cos(half))
    }

    /// Rotation from Euler angles in radians: roll `x`, pitch `y`, yaw `z`.
    /// Equivalent to `yaw * pitch * roll`, so roll is applied first.
    pub fn euler_radians(angles: Vector3<K>) -> Self {
        let half = Operand::from_division(1, 2);
        let (roll, pitch, yaw) = (angles.x * half, angles.y * half, angles.z * half);
        let (cr, sr) = (Math::cos(roll), Math::sin(roll));
        let (cp, sp) = (Math::cos(pitch), Math::sin(pitch));
        let (cy, sy) = (Math::cos(yaw), Math::sin(yaw));

        Self::new(
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
            cr * cp * cy + sr * sp * sy,
        )
    }

    /// Componentwise `equal_to`. Same as `==`.
    #[inline]
    pub fn exactly_equals(self, other: Self) -> bool {
        self.as_quaternion().exactly_equals(other.as_quaternion())
    }

    /// `|dot(a, b)| > 1 - Epsilon::sqr()`. Treats `q` and `-q` (the same
    /// rotation) as equal.
    ///
    /// For `f32` and `f64`, `1 - Epsilon::sqr()` rounds to exactly one and
    /// this never holds; pass a threshold to
    /// [`approximately_equals_eps`](Self::approximately_equals_eps) instead.
    #[inline]
    pub fn approximately_equals(self, other: Self) -> bool {
        self.approximately_equals_eps(other, Epsilon::<K>::sqr())
    }

    #[inline]
    pub fn approximately_equals_eps(self, other: Self, epsilon: Operand<K>) -> bool {
        Math::abs(self.dot(other)) > Operand::one() - epsilon
    }
}

impl<K: Number> Default for UnitQuaternion<K> {
    /// The zero quaternion; not a valid rotation.
    fn default() -> Self {
        Self::from_quaternion_unchecked(Quaternion::default())
    }
}

impl<K: Number> PartialEq for UnitQuaternion<K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.exactly_equals(*other)
    }
}

impl<K: Number> TryFrom<Quaternion<K>> for UnitQuaternion<K> {
    type Error = MathError;

    #[inline]
    fn try_from(q: Quaternion<K>) -> Result<Self, MathError> {
        Self::try_new(q.x, q.y, q.z, q.w)
    }
}

impl<K: Number> Add for UnitQuaternion<K> {
    type Output = Quaternion<K>;
    #[inline]
    fn add(self, rhs: Self) -> Quaternion<K> {
        self.as_quaternion() + rhs.as_quaternion()
    }
}

impl<K: Number> Sub for UnitQuaternion<K> {
    type Output = Quaternion<K>;
    #[inline]
    fn sub(self, rhs: Self) -> Quaternion<K> {
        self.as_quaternion() - rhs.as_quaternion()
    }
}

impl<K: Number> Neg for UnitQuaternion<K> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

/// Composition: applies `rhs` first, then `self`.
impl<K: Number> Mul for UnitQuaternion<K> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_quaternion_unchecked(self.as_quaternion() * rhs.as_quaternion()).ensure_normalization()
    }
}

impl<K: Number> Div for UnitQuaternion<K> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<K: Number> Mul<Operand<K>> for UnitQuaternion<K> {
    type Output = Quaternion<K>;
    #[inline]
    fn mul(self, rhs: Operand<K>) -> Quaternion<K> {
        self.as_quaternion() * rhs
    }
}

impl<K: Number> Div<Operand<K>> for UnitQuaternion<K> {
    type Output = Quaternion<K>;
    #[inline]
    fn div(self, rhs: Operand<K>) -> Quaternion<K> {
        self.as_quaternion() / rhs
    }
}

/// Rotates `v`. Assumes unit length: no scaling term.
impl<K: Number> Mul<Vector3<K>> for UnitQuaternion<K> {
    type Output = Vector3<K>;
    fn mul(self, v: Vector3<K>) -> Vector3<K> {
        let one = Operand::one();
        let two = Operand::from_int(2);
        let (two_x, two_y, two_z) = (self.x * two, self.y * two, self.z * two);

        let xx2 = self.x * two_x;
        let yy2 = self.y * two_y;
        let zz2 = self.z * two_z;
        let xy2 = self.x * two_y;
        let xz2 = self.x * two_z;
        let yz2 = self.y * two_z;
        let wx2 = self.w * two_x;
        let wy2 = self.w * two_y;
        let wz2 = self.w * two_z;

        Vector3::new(
            (one - (yy2 + zz2)) * v.x + (xy2 - wz2) * v.y + (xz2 + wy2) * v.z,
            (xy2 + wz2) * v.x + (one - (xx2 + zz2)) * v.y + (yz2 - wx2) * v.z,
            (xz2 - wy2) * v.x + (yz2 + wx2) * v.y + (one - (xx2 + yy2)) * v.z,
        )
    }
}

impl<K: Number> fmt::Display for UnitQuaternion<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.as_quaternion(), f)
    }
}
