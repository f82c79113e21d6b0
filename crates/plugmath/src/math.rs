use core::marker::PhantomData;

use crate::{Epsilon, Number, Operand, SpecialMath};

/// Math facility: numeric helpers over [`Operand<K>`].
///
/// `min`, `max`, `clamp`, `lerp` and `approximately_equal` are composed from
/// the contract. Everything else forwards to `K::SpecialMath`.
pub struct Math<K>(PhantomData<K>);

impl<K: Number> Math<K> {
    /// Returns `a` if `a > b` or if `a` is NaN, otherwise `b`.
    ///
    /// Only the NaN-ness of `a` is checked: `max(NaN, 5)` is NaN while
    /// `max(5, NaN)` is NaN as well, because `5 > NaN` is false.
    #[inline]
    pub fn max(a: Operand<K>, b: Operand<K>) -> Operand<K> {
        if a > b || a.is_nan() {
            a
        } else {
            b
        }
    }

    /// Returns `a` if `a < b` or if `a` is NaN, otherwise `b`.
    #[inline]
    pub fn min(a: Operand<K>, b: Operand<K>) -> Operand<K> {
        if a < b || a.is_nan() {
            a
        } else {
            b
        }
    }

    /// An unordered `value` passes through unchanged.
    #[inline]
    pub fn clamp(value: Operand<K>, min: Operand<K>, max: Operand<K>) -> Operand<K> {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    /// `a + t * (b - a)`; `t` is not clamped.
    #[inline]
    pub fn lerp(a: Operand<K>, b: Operand<K>, t: Operand<K>) -> Operand<K> {
        a + t * (b - a)
    }

    /// [`approximately_equal_eps`](Self::approximately_equal_eps) with `Epsilon::sqr()`.
    #[inline]
    pub fn approximately_equal(a: Operand<K>, b: Operand<K>) -> bool {
        Self::approximately_equal_eps(a, b, Epsilon::<K>::sqr())
    }

    /// Combined absolute and relative tolerance test:
    /// `|a - b| <= eps` or `|a - b| <= max(|a|, |b|) * eps`.
    pub fn approximately_equal_eps(a: Operand<K>, b: Operand<K>, epsilon: Operand<K>) -> bool {
        let difference = Self::abs(a - b);
        difference <= epsilon || difference <= Self::max(Self::abs(a), Self::abs(b)) * epsilon
    }

    #[inline]
    pub fn abs(value: Operand<K>) -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::abs(value.value()))
    }

    #[inline]
    pub fn sign(value: Operand<K>) -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::sign(value.value()))
    }

    #[inline]
    pub fn sign_with_zero(value: Operand<K>) -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::sign_with_zero(value.value()))
    }

    /// The magnitude of `from` with the sign of `to`.
    #[inline]
    pub fn copy_sign(from: Operand<K>, to: Operand<K>) -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::copy_sign(from.value(), to.value()))
    }

    #[inline]
    pub fn sqrt(value: Operand<K>) -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::sqrt(value.value()))
    }

    #[inline]
    pub fn pow(value: Operand<K>, power: Operand<K>) -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::pow(value.value(), power.value()))
    }

    #[inline]
    pub fn sin(value: Operand<K>) -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::sin(value.value()))
    }

    #[inline]
    pub fn cos(value: Operand<K>) -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::cos(value.value()))
    }

    #[inline]
    pub fn tan(value: Operand<K>) -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::tan(value.value()))
    }

    #[inline]
    pub fn atan(value: Operand<K>) -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::atan(value.value()))
    }

    #[inline]
    pub fn atan2(y: Operand<K>, x: Operand<K>) -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::atan2(y.value(), x.value()))
    }

    #[inline]
    pub fn asin(value: Operand<K>) -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::asin(value.value()))
    }

    #[inline]
    pub fn acos(value: Operand<K>) -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::acos(value.value()))
    }

    #[inline]
    pub fn epsilon() -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::epsilon())
    }

    #[inline]
    pub fn epsilon_sqr() -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::epsilon_sqr())
    }

    #[inline]
    pub fn numerical_min_value() -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::numerical_min_value())
    }

    #[inline]
    pub fn numerical_max_value() -> Operand<K> {
        Operand::from_scalar(<K::SpecialMath as SpecialMath<K>>::numerical_max_value())
    }
}

#[cfg(all(test, any(feature = "std", feature = "libm")))]
mod tests {
    use super::*;

    fn op(v: f32) -> Operand<f32> {
        Operand::from_scalar(v)
    }

    #[test]
    fn max_keeps_a_nan_first_operand() {
        assert!(Math::max(op(f32::NAN), op(5.0)).is_nan());
        assert!(Math::min(op(f32::NAN), op(5.0)).is_nan());
    }

    #[test]
    fn max_with_nan_second_operand_returns_it_too() {
        // 5 > NaN is false and 5 is not NaN, so the second operand wins
        assert!(Math::max(op(5.0), op(f32::NAN)).is_nan());
        assert!(Math::min(op(5.0), op(f32::NAN)).is_nan());
    }

    #[test]
    fn min_max_ordered() {
        assert_eq!(Math::max(op(1.0), op(2.0)), op(2.0));
        assert_eq!(Math::max(op(3.0), op(2.0)), op(3.0));
        assert_eq!(Math::min(op(1.0), op(2.0)), op(1.0));
        assert_eq!(Math::min(op(3.0), op(2.0)), op(2.0));
    }

    #[test]
    fn clamp() {
        assert_eq!(Math::clamp(op(-1.0), op(0.0), op(1.0)), op(0.0));
        assert_eq!(Math::clamp(op(2.0), op(0.0), op(1.0)), op(1.0));
        assert_eq!(Math::clamp(op(0.5), op(0.0), op(1.0)), op(0.5));
        assert!(Math::clamp(op(f32::NAN), op(0.0), op(1.0)).is_nan());
    }

    #[test]
    fn lerp_is_unclamped() {
        assert_eq!(Math::lerp(op(0.0), op(10.0), op(0.25)), op(2.5));
        assert_eq!(Math::lerp(op(0.0), op(10.0), op(2.0)), op(20.0));
        assert_eq!(Math::lerp(op(0.0), op(10.0), op(-1.0)), op(-10.0));
    }

    #[test]
    fn approximately_equal_absolute_and_relative() {
        let eps = op(1e-3);
        // absolute branch
        assert!(Math::approximately_equal_eps(op(0.0), op(5e-4), eps));
        // relative branch: difference 50 against magnitude 1e5
        assert!(Math::approximately_equal_eps(op(100_000.0), op(100_050.0), eps));
        assert!(!Math::approximately_equal_eps(op(1.0), op(1.1), eps));
        // default threshold is the squared epsilon
        assert!(Math::approximately_equal(op(1.0), op(1.0)));
        assert!(!Math::approximately_equal(op(1.0), op(1.001)));
    }

    #[test]
    fn copy_sign_substitutes_the_sign_bit() {
        assert_eq!(Math::copy_sign(op(3.0), op(-0.0)), op(-3.0));
        assert_eq!(Math::copy_sign(op(-3.0), op(0.0)), op(3.0));
        assert_eq!(Math::copy_sign(op(-3.0), op(-7.0)), op(-3.0));
    }

    #[test]
    fn sign_variants() {
        assert_eq!(Math::sign(op(0.0)), op(1.0));
        assert_eq!(Math::sign(op(-0.0)), op(-1.0));
        assert_eq!(Math::sign(op(-4.0)), op(-1.0));
        assert_eq!(Math::sign_with_zero(op(0.0)), op(0.0));
        assert_eq!(Math::sign_with_zero(op(-4.0)), op(-1.0));
        assert_eq!(Math::sign_with_zero(op(4.0)), op(1.0));
    }

    #[test]
    fn trig_family() {
        let x = Operand::<f64>::from_scalar(0.3);
        assert!((Math::sin(x).value() - 0.3f64.sin()).abs() < 1e-15);
        assert!((Math::cos(x).value() - 0.3f64.cos()).abs() < 1e-15);
        assert!((Math::tan(x).value() - 0.3f64.tan()).abs() < 1e-15);
        assert!((Math::atan(x).value() - 0.3f64.atan()).abs() < 1e-15);
        assert!((Math::asin(x).value() - 0.3f64.asin()).abs() < 1e-15);
        assert!((Math::acos(x).value() - 0.3f64.acos()).abs() < 1e-15);
        let y = Operand::from_scalar(-1.0);
        assert!((Math::atan2(y, x).value() - (-1.0f64).atan2(0.3)).abs() < 1e-15);
        assert_eq!(Math::pow(Operand::<f64>::from_scalar(2.0), Operand::from_scalar(10.0)).value(), 1024.0);
        assert_eq!(Math::sqrt(Operand::<f64>::from_scalar(9.0)).value(), 3.0);
    }

    #[test]
    fn epsilon_matches_the_epsilon_facility() {
        assert_eq!(Math::<f32>::epsilon(), Epsilon::<f32>::normal());
        assert_eq!(Math::<f32>::epsilon_sqr(), Epsilon::<f32>::sqr());
    }
}
