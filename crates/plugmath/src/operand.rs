use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{Math, Number, Parse};

/// Infix-arithmetic wrapper around one value of kind `K`.
///
/// Kinds only promise named contract methods (`add`, `less`, ...). `Operand`
/// forwards the `core::ops` operators and comparisons to them one-to-one, so
/// generic geometry reads like ordinary math:
///
/// ```
/// use plugmath::Operand;
///
/// let a = Operand::<f32>::from_int(3);
/// let b = Operand::from_division(1, 2);
/// assert_eq!((a * b - Operand::one()).to_debug_float(), 0.5);
/// ```
///
/// Equality is exact (`equal_to`); approximate comparison is an explicit
/// call to [`Math::approximately_equal`].
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct Operand<K>(K);

impl<K: Number> Operand<K> {
    #[inline]
    pub fn from_scalar(value: K) -> Self {
        Self(value)
    }

    /// The wrapped scalar.
    #[inline]
    pub fn value(self) -> K {
        self.0
    }

    #[inline]
    pub fn from_int(value: i32) -> Self {
        Self(Parse::<K>::from_int(value))
    }

    #[inline]
    pub fn from_division(numerator: i32, denominator: i32) -> Self {
        Self(Parse::<K>::from_division(numerator, denominator))
    }

    /// Construction from a float, without exactness guarantees for non-float kinds.
    #[inline]
    pub fn from_debug_float(value: f32) -> Self {
        Self(Parse::<K>::unsafe_from_float(value))
    }

    /// Lossy conversion for debugging and interop.
    #[inline]
    pub fn to_debug_float(self) -> f32 {
        Parse::<K>::to_float(self.0)
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_int(0)
    }

    #[inline]
    pub fn one() -> Self {
        Self::from_int(1)
    }

    #[inline]
    pub fn minus_one() -> Self {
        Self::from_int(-1)
    }

    #[inline]
    pub fn min_value() -> Self {
        Math::<K>::numerical_min_value()
    }

    #[inline]
    pub fn max_value() -> Self {
        Math::<K>::numerical_max_value()
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }
}

impl<K: Number> Add for Operand<K> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add(rhs.0))
    }
}

impl<K: Number> Sub for Operand<K> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub(rhs.0))
    }
}

impl<K: Number> Mul for Operand<K> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul(rhs.0))
    }
}

impl<K: Number> Div for Operand<K> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(self.0.div(rhs.0))
    }
}

impl<K: Number> Neg for Operand<K> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(self.0.negate())
    }
}

impl<K: Number> AddAssign for Operand<K> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<K: Number> SubAssign for Operand<K> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<K: Number> MulAssign for Operand<K> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<K: Number> DivAssign for Operand<K> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<K: Number> PartialEq for Operand<K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.equal_to(other.0)
    }
}

impl<K: Number> PartialOrd for Operand<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.0.less(other.0) {
            Some(Ordering::Less)
        } else if self.0.greater(other.0) {
            Some(Ordering::Greater)
        } else if self.0.equal_to(other.0) {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    // Forwarded individually so a kind's own ordering methods are used as-is.
    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.0.less(other.0)
    }
    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.0.less_or_equal(other.0)
    }
    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.0.greater(other.0)
    }
    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.0.greater_or_equal(other.0)
    }
}

impl<K: fmt::Debug> fmt::Debug for Operand<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<K: fmt::Display> fmt::Display for Operand<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(all(test, any(feature = "std", feature = "libm")))]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Operand::<f32>::zero().value(), 0.0);
        assert_eq!(Operand::<f32>::one().value(), 1.0);
        assert_eq!(Operand::<f32>::minus_one().value(), -1.0);
        assert_eq!(Operand::<f32>::min_value().value(), f32::MIN);
        assert_eq!(Operand::<f64>::max_value().value(), f64::MAX);
    }

    #[test]
    fn operators_forward_to_the_contract() {
        let a = Operand::<f64>::from_scalar(6.0);
        let b = Operand::from_scalar(4.0);
        assert_eq!((a + b).value(), 10.0);
        assert_eq!((a - b).value(), 2.0);
        assert_eq!((a * b).value(), 24.0);
        assert_eq!((a / b).value(), 1.5);
        assert_eq!((-a).value(), -6.0);

        let mut c = a;
        c += b;
        c *= b;
        c -= a;
        c /= b;
        assert_eq!(c.value(), 8.5);
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Operand::<f32>::from_scalar(f32::NAN);
        let one = Operand::one();
        assert!(nan != nan);
        assert!(!(nan < one));
        assert!(!(nan >= one));
        assert_eq!(nan.partial_cmp(&one), None);
        assert_eq!(one.partial_cmp(&one), Some(Ordering::Equal));
        assert!(nan.is_nan());
    }

    #[test]
    fn equality_is_exact() {
        let a = Operand::<f32>::from_scalar(1.0);
        let b = Operand::from_scalar(1.0 + f32::EPSILON);
        assert!(a != b);
        assert!(Math::approximately_equal_eps(a, b, Operand::from_scalar(1e-6)));
    }

    #[test]
    fn debug_float_conversions() {
        let x = Operand::<f64>::from_debug_float(0.25);
        assert_eq!(x.value(), 0.25);
        assert_eq!(x.to_debug_float(), 0.25);
    }

    #[test]
    fn formats_like_the_scalar() {
        use alloc::format;
        let x = Operand::<f32>::from_scalar(1.5);
        assert_eq!(format!("{x}"), "1.5");
        assert_eq!(format!("{x:?}"), "1.5");
    }
}
