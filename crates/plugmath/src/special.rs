use crate::{Number, Parser};

/// Specialized math provider for a numeric kind.
///
/// These are the operations a backend can implement far better than generic
/// code: sign-bit tricks, roots, and the trigonometric family. Angles are in
/// radians.
///
/// `asin` and `acos` have provided implementations built on `atan2` and
/// `sqrt`; kinds with native versions should override them.
pub trait SpecialMath<K: Number> {
    fn abs(value: K) -> K;
    /// `-1` or `+1`; there is no zero case. For floats, `-0.0` is negative.
    fn sign(value: K) -> K;
    /// `-1`, `0` or `+1`.
    fn sign_with_zero(value: K) -> K;
    /// The magnitude of `from` with the sign of `to`.
    ///
    /// Floating-point kinds must substitute the sign bit exactly, so
    /// `copy_sign(x, -0.0)` is negative.
    fn copy_sign(from: K, to: K) -> K;

    fn sqrt(value: K) -> K;
    fn pow(value: K, power: K) -> K;

    fn sin(value: K) -> K;
    fn cos(value: K) -> K;
    fn tan(value: K) -> K;
    fn atan(value: K) -> K;
    fn atan2(y: K, x: K) -> K;

    // asin(x) = atan2(x, sqrt(1 - x²))
    #[inline]
    fn asin(value: K) -> K {
        let one = <K::Parser as Parser<K>>::from_int(1);
        let cos = Self::sqrt(one.sub(value.mul(value)));
        Self::atan2(value, cos)
    }

    // acos(x) = atan2(sqrt(1 - x²), x)
    #[inline]
    fn acos(value: K) -> K {
        let one = <K::Parser as Parser<K>>::from_int(1);
        let sin = Self::sqrt(one.sub(value.mul(value)));
        Self::atan2(sin, value)
    }

    fn epsilon() -> K;

    #[inline]
    fn epsilon_sqr() -> K {
        let epsilon = Self::epsilon();
        epsilon.mul(epsilon)
    }

    /// The most negative finite value of the kind.
    fn numerical_min_value() -> K;
    /// The most positive finite value of the kind.
    fn numerical_max_value() -> K;
}
