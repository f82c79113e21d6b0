//! `f32` and `f64` as numeric kinds.
//!
//! Thin pass-throughs to the native float operations. With the `std`
//! feature the inherent float methods are used; in `no_std` builds the
//! `libm` feature supplies them.

use crate::{EpsilonSource, Number, Parser, SpecialMath};

/// Construction provider for `f32` and `f64`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatParser;

/// Epsilon provider for `f32` (`1e-6`) and `f64` (`1e-12`).
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatEpsilon;

/// Special math provider for `f32` and `f64`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatSpecialMath;

// In std mode, use inherent float methods. In no_std, use libm.
#[cfg(feature = "std")]
mod float_ops {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn sqrt_f64(x: f64) -> f64 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn abs_f32(x: f32) -> f32 {
        x.abs()
    }
    #[inline(always)]
    pub fn abs_f64(x: f64) -> f64 {
        x.abs()
    }
    #[inline(always)]
    pub fn sin_f32(x: f32) -> f32 {
        x.sin()
    }
    #[inline(always)]
    pub fn sin_f64(x: f64) -> f64 {
        x.sin()
    }
    #[inline(always)]
    pub fn cos_f32(x: f32) -> f32 {
        x.cos()
    }
    #[inline(always)]
    pub fn cos_f64(x: f64) -> f64 {
        x.cos()
    }
    #[inline(always)]
    pub fn tan_f32(x: f32) -> f32 {
        x.tan()
    }
    #[inline(always)]
    pub fn tan_f64(x: f64) -> f64 {
        x.tan()
    }
    #[inline(always)]
    pub fn asin_f32(x: f32) -> f32 {
        x.asin()
    }
    #[inline(always)]
    pub fn asin_f64(x: f64) -> f64 {
        x.asin()
    }
    #[inline(always)]
    pub fn acos_f32(x: f32) -> f32 {
        x.acos()
    }
    #[inline(always)]
    pub fn acos_f64(x: f64) -> f64 {
        x.acos()
    }
    #[inline(always)]
    pub fn atan_f32(x: f32) -> f32 {
        x.atan()
    }
    #[inline(always)]
    pub fn atan_f64(x: f64) -> f64 {
        x.atan()
    }
    #[inline(always)]
    pub fn atan2_f32(y: f32, x: f32) -> f32 {
        y.atan2(x)
    }
    #[inline(always)]
    pub fn atan2_f64(y: f64, x: f64) -> f64 {
        y.atan2(x)
    }
    #[inline(always)]
    pub fn powf_f32(x: f32, p: f32) -> f32 {
        x.powf(p)
    }
    #[inline(always)]
    pub fn powf_f64(x: f64, p: f64) -> f64 {
        x.powf(p)
    }
    #[inline(always)]
    pub fn copysign_f32(x: f32, s: f32) -> f32 {
        x.copysign(s)
    }
    #[inline(always)]
    pub fn copysign_f64(x: f64, s: f64) -> f64 {
        x.copysign(s)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod float_ops {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        libm::sqrtf(x)
    }
    #[inline(always)]
    pub fn sqrt_f64(x: f64) -> f64 {
        libm::sqrt(x)
    }
    #[inline(always)]
    pub fn abs_f32(x: f32) -> f32 {
        libm::fabsf(x)
    }
    #[inline(always)]
    pub fn abs_f64(x: f64) -> f64 {
        libm::fabs(x)
    }
    #[inline(always)]
    pub fn sin_f32(x: f32) -> f32 {
        libm::sinf(x)
    }
    #[inline(always)]
    pub fn sin_f64(x: f64) -> f64 {
        libm::sin(x)
    }
    #[inline(always)]
    pub fn cos_f32(x: f32) -> f32 {
        libm::cosf(x)
    }
    #[inline(always)]
    pub fn cos_f64(x: f64) -> f64 {
        libm::cos(x)
    }
    #[inline(always)]
    pub fn tan_f32(x: f32) -> f32 {
        libm::tanf(x)
    }
    #[inline(always)]
    pub fn tan_f64(x: f64) -> f64 {
        libm::tan(x)
    }
    #[inline(always)]
    pub fn asin_f32(x: f32) -> f32 {
        libm::asinf(x)
    }
    #[inline(always)]
    pub fn asin_f64(x: f64) -> f64 {
        libm::asin(x)
    }
    #[inline(always)]
    pub fn acos_f32(x: f32) -> f32 {
        libm::acosf(x)
    }
    #[inline(always)]
    pub fn acos_f64(x: f64) -> f64 {
        libm::acos(x)
    }
    #[inline(always)]
    pub fn atan_f32(x: f32) -> f32 {
        libm::atanf(x)
    }
    #[inline(always)]
    pub fn atan_f64(x: f64) -> f64 {
        libm::atan(x)
    }
    #[inline(always)]
    pub fn atan2_f32(y: f32, x: f32) -> f32 {
        libm::atan2f(y, x)
    }
    #[inline(always)]
    pub fn atan2_f64(y: f64, x: f64) -> f64 {
        libm::atan2(y, x)
    }
    #[inline(always)]
    pub fn powf_f32(x: f32, p: f32) -> f32 {
        libm::powf(x, p)
    }
    #[inline(always)]
    pub fn powf_f64(x: f64, p: f64) -> f64 {
        libm::pow(x, p)
    }
    #[inline(always)]
    pub fn copysign_f32(x: f32, s: f32) -> f32 {
        libm::copysignf(x, s)
    }
    #[inline(always)]
    pub fn copysign_f64(x: f64, s: f64) -> f64 {
        libm::copysign(x, s)
    }
}

macro_rules! impl_number_float {
    ($t:ident, $epsilon:expr) => {
        ::paste::paste! {
        impl Number for $t {
            type Parser = FloatParser;
            type Epsilon = FloatEpsilon;
            type SpecialMath = FloatSpecialMath;

            #[inline] fn add(self, other: Self) -> Self { self + other }
            #[inline] fn sub(self, other: Self) -> Self { self - other }
            #[inline] fn mul(self, other: Self) -> Self { self * other }
            #[inline] fn div(self, other: Self) -> Self { self / other }
            #[inline] fn negate(self) -> Self { -self }

            #[inline] fn less(self, other: Self) -> bool { self < other }
            #[inline] fn less_or_equal(self, other: Self) -> bool { self <= other }
            #[inline] fn greater(self, other: Self) -> bool { self > other }
            #[inline] fn greater_or_equal(self, other: Self) -> bool { self >= other }
            #[inline] fn equal_to(self, other: Self) -> bool { self == other }

            #[inline] fn is_nan(self) -> bool { $t::is_nan(self) }
        }

        impl Parser<$t> for FloatParser {
            #[inline] fn from_int(value: i32) -> $t { value as $t }
            #[inline] fn from_division(numerator: i32, denominator: i32) -> $t {
                numerator as $t / denominator as $t
            }
            #[inline] fn to_float(value: $t) -> f32 { value as f32 }
            #[inline] fn unsafe_from_float(value: f32) -> $t { value as $t }
        }

        impl EpsilonSource<$t> for FloatEpsilon {
            #[inline] fn normal() -> $t { $epsilon }
        }

        impl SpecialMath<$t> for FloatSpecialMath {
            #[inline] fn abs(value: $t) -> $t { float_ops::[<abs_ $t>](value) }
            #[inline] fn sign(value: $t) -> $t {
                if value.is_sign_negative() { -1.0 } else { 1.0 }
            }
            #[inline] fn sign_with_zero(value: $t) -> $t {
                if value > 0.0 { 1.0 } else if value < 0.0 { -1.0 } else if value == 0.0 { 0.0 } else { value }
            }
            #[inline] fn copy_sign(from: $t, to: $t) -> $t { float_ops::[<copysign_ $t>](from, to) }

            #[inline] fn sqrt(value: $t) -> $t { float_ops::[<sqrt_ $t>](value) }
            #[inline] fn pow(value: $t, power: $t) -> $t { float_ops::[<powf_ $t>](value, power) }

            #[inline] fn sin(value: $t) -> $t { float_ops::[<sin_ $t>](value) }
            #[inline] fn cos(value: $t) -> $t { float_ops::[<cos_ $t>](value) }
            #[inline] fn tan(value: $t) -> $t { float_ops::[<tan_ $t>](value) }
            #[inline] fn atan(value: $t) -> $t { float_ops::[<atan_ $t>](value) }
            #[inline] fn atan2(y: $t, x: $t) -> $t { float_ops::[<atan2_ $t>](y, x) }
            #[inline] fn asin(value: $t) -> $t { float_ops::[<asin_ $t>](value) }
            #[inline] fn acos(value: $t) -> $t { float_ops::[<acos_ $t>](value) }

            #[inline] fn epsilon() -> $t { $epsilon }
            #[inline] fn numerical_min_value() -> $t { $t::MIN }
            #[inline] fn numerical_max_value() -> $t { $t::MAX }
        }
        }
    };
}

impl_number_float!(f32, 1e-6);
impl_number_float!(f64, 1e-12);

#[cfg(test)]
mod tests {
    use crate::{Math, Operand, Parse};

    #[test]
    fn f32_basics() {
        assert_eq!(Parse::<f32>::from_int(0), 0.0);
        assert_eq!(Parse::<f32>::from_int(1), 1.0);
        assert_eq!(Math::sqrt(Operand::<f32>::from_scalar(4.0)).value(), 2.0);
        assert_eq!(Math::abs(Operand::<f32>::from_scalar(-3.0)).value(), 3.0);
    }

    #[test]
    fn f64_basics() {
        assert_eq!(Parse::<f64>::from_int(-7), -7.0);
        assert_eq!(Math::<f64>::epsilon().value(), 1e-12);
        assert_eq!(Math::<f64>::numerical_min_value().value(), f64::MIN);
    }

    #[test]
    fn copy_sign_is_bit_exact() {
        let m = Math::copy_sign(Operand::<f64>::from_scalar(0.0), Operand::from_scalar(-1.0)).value();
        assert_eq!(m.to_bits(), (-0.0f64).to_bits());
        let nan = Math::copy_sign(Operand::<f32>::from_scalar(f32::NAN), Operand::from_scalar(-1.0)).value();
        assert!(nan.is_nan());
        assert!(nan.is_sign_negative());
    }

    #[test]
    fn sign_with_zero_propagates_nan() {
        assert!(Math::sign_with_zero(Operand::<f32>::from_scalar(f32::NAN)).is_nan());
        assert_eq!(Math::sign_with_zero(Operand::<f32>::from_scalar(-0.0)).value(), 0.0);
    }

    #[test]
    fn is_nan_matches_native() {
        use crate::Number;
        assert!(Number::is_nan(f32::NAN));
        assert!(!Number::is_nan(f64::INFINITY));
    }
}
