use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{Epsilon, Math, Number, Operand};

/// Three-component vector over a scalar kind `K`.
///
/// Axis conventions: `right` is +x, `up` is +y, `forward` is +z.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Vector3<K> {
    pub x: Operand<K>,
    pub y: Operand<K>,
    pub z: Operand<K>,
}

impl<K: Number> Vector3<K> {
    #[inline]
    pub fn new(x: Operand<K>, y: Operand<K>, z: Operand<K>) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn from_scalars(x: K, y: K, z: K) -> Self {
        Self::new(Operand::from_scalar(x), Operand::from_scalar(y), Operand::from_scalar(z))
    }

    #[inline]
    pub fn splat(v: Operand<K>) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    fn from_ints(x: i32, y: i32, z: i32) -> Self {
        Self::new(Operand::from_int(x), Operand::from_int(y), Operand::from_int(z))
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_ints(0, 0, 0)
    }

    #[inline]
    pub fn one() -> Self {
        Self::from_ints(1, 1, 1)
    }

    #[inline]
    pub fn right() -> Self {
        Self::from_ints(1, 0, 0)
    }

    #[inline]
    pub fn left() -> Self {
        Self::from_ints(-1, 0, 0)
    }

    #[inline]
    pub fn up() -> Self {
        Self::from_ints(0, 1, 0)
    }

    #[inline]
    pub fn down() -> Self {
        Self::from_ints(0, -1, 0)
    }

    #[inline]
    pub fn forward() -> Self {
        Self::from_ints(0, 0, 1)
    }

    #[inline]
    pub fn backward() -> Self {
        Self::from_ints(0, 0, -1)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> Operand<K> {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product: `right × up = forward`.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
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
    pub fn distance_sqr(self, other: Self) -> Operand<K> {
        (self - other).length_sqr()
    }

    #[inline]
    pub fn distance(self, other: Self) -> Operand<K> {
        Math::sqrt(self.distance_sqr(other))
    }

    /// Unguarded: a zero vector yields NaN (or inf) components.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Normalizes, or returns `fallback` when the squared length is below
    /// `Epsilon::sqr()`.
    pub fn normalize_safe(self, fallback: Self) -> Self {
        let length_sqr = self.length_sqr();
        if length_sqr < Epsilon::<K>::sqr() {
            trace_fallback!(length_sqr = length_sqr.to_debug_float(), "normalize_safe: degenerate vector, using fallback");
            return fallback;
        }
        self / Math::sqrt(length_sqr)
    }

    /// `None` when the squared length is below `Epsilon::sqr()`.
    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let length_sqr = self.length_sqr();
        if length_sqr < Epsilon::<K>::sqr() {
            None
        } else {
            Some(self / Math::sqrt(length_sqr))
        }
    }

    /// A vector perpendicular to `self`, not normalized.
    ///
    /// Built by copying signs between components, so it needs no branch and
    /// no division. The result is zero only when `self` is.
    pub fn orthogonal(self) -> Self {
        Self::new(
            Math::copy_sign(self.z, self.x),
            Math::copy_sign(self.z, self.y),
            -Math::copy_sign(self.x, self.z) - Math::copy_sign(self.y, self.z),
        )
    }

    /// A unit vector perpendicular to `self`.
    ///
    /// This is the first column of the Householder reflection that maps
    /// `self` onto the z axis. Degenerate (NaN) for a zero input.
    pub fn orthonormal(self) -> Self {
        let s = Math::copy_sign(self.length(), self.z);
        let h = self.z + s;
        let sh = s * h;
        Self::new(sh - self.x * self.x, -self.x * self.y, -self.x * h) / sh
    }

    #[inline]
    pub fn max_components(self, other: Self) -> Self {
        Self::new(Math::max(self.x, other.x), Math::max(self.y, other.y), Math::max(self.z, other.z))
    }

    #[inline]
    pub fn min_components(self, other: Self) -> Self {
        Self::new(Math::min(self.x, other.x), Math::min(self.y, other.y), Math::min(self.z, other.z))
    }

    #[inline]
    pub fn abs_components(self) -> Self {
        Self::new(Math::abs(self.x), Math::abs(self.y), Math::abs(self.z))
    }

    /// Componentwise `Math::sign` (±1, never zero).
    #[inline]
    pub fn sign_components(self) -> Self {
        Self::new(Math::sign(self.x), Math::sign(self.y), Math::sign(self.z))
    }

    /// Componentwise `equal_to`. Same as `==`.
    #[inline]
    pub fn exactly_equals(self, other: Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    /// `distance_sqr < Epsilon::sqr()`.
    #[inline]
    pub fn approximately_equals(self, other: Self) -> bool {
        self.approximately_equals_eps(other, Epsilon::<K>::sqr())
    }

    /// `distance_sqr < epsilon`; the threshold is compared to the squared distance.
    #[inline]
    pub fn approximately_equals_eps(self, other: Self, epsilon: Operand<K>) -> bool {
        self.distance_sqr(other) < epsilon
    }

    /// `self + (other - self) * t`, unclamped.
    #[inline]
    pub fn lerp(self, other: Self, t: Operand<K>) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn as_array(&self) -> [K; 3] {
        [self.x.value(), self.y.value(), self.z.value()]
    }
}

impl<K: Number> Default for Vector3<K> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<K: Number> PartialEq for Vector3<K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.exactly_equals(*other)
    }
}

impl<K: Number> From<[K; 3]> for Vector3<K> {
    fn from(a: [K; 3]) -> Self {
        Self::from_scalars(a[0], a[1], a[2])
    }
}

impl<K: Number> From<Vector3<K>> for [K; 3] {
    fn from(v: Vector3<K>) -> Self {
        v.as_array()
    }
}

// Componentwise vector ⊕ vector, vector ⊕ operand and operand ⊕ vector.
// The operand-first form keeps operand order: `a - v` is `(a - v.x, ...)`.
macro_rules! impl_componentwise {
    ($Trait:ident, $method:ident, $AssignTrait:ident, $assign:ident) => {
        impl<K: Number> $Trait for Vector3<K> {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::new(self.x.$method(rhs.x), self.y.$method(rhs.y), self.z.$method(rhs.z))
            }
        }

        impl<K: Number> $Trait<Operand<K>> for Vector3<K> {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Operand<K>) -> Self {
                Self::new(self.x.$method(rhs), self.y.$method(rhs), self.z.$method(rhs))
            }
        }

        impl<K: Number> $Trait<Vector3<K>> for Operand<K> {
            type Output = Vector3<K>;
            #[inline]
            fn $method(self, rhs: Vector3<K>) -> Vector3<K> {
                Vector3::new(self.$method(rhs.x), self.$method(rhs.y), self.$method(rhs.z))
            }
        }

        impl<K: Number> $AssignTrait for Vector3<K> {
            #[inline]
            fn $assign(&mut self, rhs: Self) {
                *self = $Trait::$method(*self, rhs);
            }
        }

        impl<K: Number> $AssignTrait<Operand<K>> for Vector3<K> {
            #[inline]
            fn $assign(&mut self, rhs: Operand<K>) {
                *self = $Trait::$method(*self, rhs);
            }
        }
    };
}

impl_componentwise!(Add, add, AddAssign, add_assign);
impl_componentwise!(Sub, sub, SubAssign, sub_assign);
impl_componentwise!(Mul, mul, MulAssign, mul_assign);
impl_componentwise!(Div, div, DivAssign, div_assign);

impl<K: Number> Neg for Vector3<K> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<K: Number> fmt::Display for Vector3<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
