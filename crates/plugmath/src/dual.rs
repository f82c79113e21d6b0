use core::fmt;
use core::marker::PhantomData;

use crate::{Epsilon, EpsilonSource, Math, Number, Operand, Parse, Parser, SpecialMath};

/// Forward-mode automatic differentiation via dual numbers.
///
/// `Dual<S>` represents a value `a + bε` where ε² = 0.
/// The `real` part carries the function value, the `dual` part carries the derivative.
///
/// `Dual<S>` is itself a numeric kind for any kind `S`, so every routine in
/// this crate (look rotations, slerp, drift correction) propagates gradients
/// when instantiated with it.
///
/// # Example
/// ```
/// use plugmath::{Dual, Operand, UnitQuaternion, Vector3};
///
/// // d/dθ of the x component of forward rotated by θ around up, at θ = 0
/// let theta = Operand::from_scalar(Dual::var(0.0_f64));
/// let q = UnitQuaternion::axis_angle_radians(Vector3::up(), theta);
/// let x = (q * Vector3::forward()).x.value();
/// assert!(x.real.abs() < 1e-12);   // sin(0)
/// assert!((x.dual - 1.0).abs() < 1e-12); // cos(0)
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Dual<S> {
    pub real: S,
    pub dual: S,
}

impl<S: Number> Dual<S> {
    /// Constant (derivative = 0)
    #[inline]
    pub fn constant(real: S) -> Self {
        Self {
            real,
            dual: Parse::<S>::from_int(0),
        }
    }

    /// Variable (derivative = 1)
    #[inline]
    pub fn var(real: S) -> Self {
        Self {
            real,
            dual: Parse::<S>::from_int(1),
        }
    }

    /// Construct with explicit derivative
    #[inline]
    pub fn new(real: S, dual: S) -> Self {
        Self { real, dual }
    }

    #[inline]
    fn parts(self) -> (Operand<S>, Operand<S>) {
        (Operand::from_scalar(self.real), Operand::from_scalar(self.dual))
    }

    #[inline]
    fn from_parts(real: Operand<S>, dual: Operand<S>) -> Self {
        Self {
            real: real.value(),
            dual: dual.value(),
        }
    }

    #[inline]
    fn lift(real: Operand<S>) -> Self {
        Self::constant(real.value())
    }
}

impl<S: Number> PartialEq for Dual<S> {
    fn eq(&self, other: &Self) -> bool {
        self.real.equal_to(other.real)
    }
}

impl<S: fmt::Display> fmt::Display for Dual<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}+{}ε", self.real, self.dual)
    }
}

// Arithmetic: dual number rules
// (a + bε) + (c + dε) = (a+c) + (b+d)ε
// (a + bε) * (c + dε) = ac + (ad + bc)ε
// (a + bε) / (c + dε) = a/c + (bc - ad)/c²ε
//
// Comparisons look at the real part only.
impl<S: Number> Number for Dual<S> {
    type Parser = DualParser<S>;
    type Epsilon = DualEpsilon<S>;
    type SpecialMath = DualSpecialMath<S>;

    #[inline]
    fn add(self, other: Self) -> Self {
        let ((a, b), (c, d)) = (self.parts(), other.parts());
        Self::from_parts(a + c, b + d)
    }

    #[inline]
    fn sub(self, other: Self) -> Self {
        let ((a, b), (c, d)) = (self.parts(), other.parts());
        Self::from_parts(a - c, b - d)
    }

    #[inline]
    fn mul(self, other: Self) -> Self {
        let ((a, b), (c, d)) = (self.parts(), other.parts());
        Self::from_parts(a * c, a * d + b * c)
    }

    #[inline]
    fn div(self, other: Self) -> Self {
        let ((a, b), (c, d)) = (self.parts(), other.parts());
        let inv = Operand::one() / c;
        Self::from_parts(a * inv, (b * c - a * d) * inv * inv)
    }

    #[inline]
    fn negate(self) -> Self {
        let (a, b) = self.parts();
        Self::from_parts(-a, -b)
    }

    #[inline]
    fn less(self, other: Self) -> bool {
        self.real.less(other.real)
    }
    #[inline]
    fn less_or_equal(self, other: Self) -> bool {
        self.real.less_or_equal(other.real)
    }
    #[inline]
    fn greater(self, other: Self) -> bool {
        self.real.greater(other.real)
    }
    #[inline]
    fn greater_or_equal(self, other: Self) -> bool {
        self.real.greater_or_equal(other.real)
    }
    #[inline]
    fn equal_to(self, other: Self) -> bool {
        self.real.equal_to(other.real)
    }

    #[inline]
    fn is_nan(self) -> bool {
        self.real.is_nan()
    }
}

/// Construction provider for [`Dual<S>`]: every constructed value is a constant.
pub struct DualParser<S>(PhantomData<S>);

impl<S: Number> Parser<Dual<S>> for DualParser<S> {
    #[inline]
    fn from_int(value: i32) -> Dual<S> {
        Dual::constant(Parse::<S>::from_int(value))
    }
    #[inline]
    fn from_division(numerator: i32, denominator: i32) -> Dual<S> {
        Dual::constant(Parse::<S>::from_division(numerator, denominator))
    }
    #[inline]
    fn to_float(value: Dual<S>) -> f32 {
        Parse::<S>::to_float(value.real)
    }
    #[inline]
    fn unsafe_from_float(value: f32) -> Dual<S> {
        Dual::constant(Parse::<S>::unsafe_from_float(value))
    }
}

/// Epsilon provider for [`Dual<S>`]: the threshold of `S`, as a constant.
pub struct DualEpsilon<S>(PhantomData<S>);

impl<S: Number> EpsilonSource<Dual<S>> for DualEpsilon<S> {
    #[inline]
    fn normal() -> Dual<S> {
        Dual::lift(Epsilon::<S>::normal())
    }
}

/// Special math provider for [`Dual<S>`], applying the chain rule to each operation.
pub struct DualSpecialMath<S>(PhantomData<S>);

impl<S: Number> SpecialMath<Dual<S>> for DualSpecialMath<S> {
    // d/dx |x| = sign(x), zero at the kink
    #[inline]
    fn abs(value: Dual<S>) -> Dual<S> {
        let (x, dx) = value.parts();
        Dual::from_parts(Math::abs(x), dx * Math::sign_with_zero(x))
    }

    #[inline]
    fn sign(value: Dual<S>) -> Dual<S> {
        Dual::lift(Math::sign(Operand::from_scalar(value.real)))
    }

    #[inline]
    fn sign_with_zero(value: Dual<S>) -> Dual<S> {
        Dual::lift(Math::sign_with_zero(Operand::from_scalar(value.real)))
    }

    // The derivative flips with the value when the sign changes
    #[inline]
    fn copy_sign(from: Dual<S>, to: Dual<S>) -> Dual<S> {
        let (x, dx) = from.parts();
        let sign = Operand::from_scalar(to.real);
        let flipped = Math::sign(x) != Math::sign(sign);
        Dual::from_parts(Math::copy_sign(x, sign), if flipped { -dx } else { dx })
    }

    // d/dx sqrt(x) = 1/(2*sqrt(x))
    #[inline]
    fn sqrt(value: Dual<S>) -> Dual<S> {
        let (x, dx) = value.parts();
        let r = Math::sqrt(x);
        Dual::from_parts(r, dx / (Operand::from_int(2) * r))
    }

    // d/dx x^p = p * x^(p-1) * dx; the exponent is treated as a constant
    #[inline]
    fn pow(value: Dual<S>, power: Dual<S>) -> Dual<S> {
        let (x, dx) = value.parts();
        let p = Operand::from_scalar(power.real);
        Dual::from_parts(Math::pow(x, p), p * Math::pow(x, p - Operand::one()) * dx)
    }

    // d/dx sin(x) = cos(x)
    #[inline]
    fn sin(value: Dual<S>) -> Dual<S> {
        let (x, dx) = value.parts();
        Dual::from_parts(Math::sin(x), dx * Math::cos(x))
    }

    // d/dx cos(x) = -sin(x)
    #[inline]
    fn cos(value: Dual<S>) -> Dual<S> {
        let (x, dx) = value.parts();
        Dual::from_parts(Math::cos(x), -dx * Math::sin(x))
    }

    // d/dx tan(x) = 1/cos²(x)
    #[inline]
    fn tan(value: Dual<S>) -> Dual<S> {
        let (x, dx) = value.parts();
        let c = Math::cos(x);
        Dual::from_parts(Math::tan(x), dx / (c * c))
    }

    // d/dx atan(x) = 1/(1+x²)
    #[inline]
    fn atan(value: Dual<S>) -> Dual<S> {
        let (x, dx) = value.parts();
        Dual::from_parts(Math::atan(x), dx / (Operand::one() + x * x))
    }

    // d atan2(y,x) = (x dy - y dx) / (x² + y²)
    #[inline]
    fn atan2(y: Dual<S>, x: Dual<S>) -> Dual<S> {
        let ((y, dy), (x, dx)) = (y.parts(), x.parts());
        let denom = y * y + x * x;
        Dual::from_parts(Math::atan2(y, x), (dy * x - y * dx) / denom)
    }

    // d/dx asin(x) = 1/sqrt(1-x²)
    #[inline]
    fn asin(value: Dual<S>) -> Dual<S> {
        let (x, dx) = value.parts();
        Dual::from_parts(Math::asin(x), dx / Math::sqrt(Operand::one() - x * x))
    }

    // d/dx acos(x) = -1/sqrt(1-x²)
    #[inline]
    fn acos(value: Dual<S>) -> Dual<S> {
        let (x, dx) = value.parts();
        Dual::from_parts(Math::acos(x), -dx / Math::sqrt(Operand::one() - x * x))
    }

    #[inline]
    fn epsilon() -> Dual<S> {
        Dual::lift(Math::epsilon())
    }

    #[inline]
    fn epsilon_sqr() -> Dual<S> {
        Dual::lift(Math::epsilon_sqr())
    }

    #[inline]
    fn numerical_min_value() -> Dual<S> {
        Dual::lift(Math::numerical_min_value())
    }

    #[inline]
    fn numerical_max_value() -> Dual<S> {
        Dual::lift(Math::numerical_max_value())
    }
}

#[cfg(all(test, any(feature = "std", feature = "libm")))]
mod tests {
    use super::*;
    use crate::{UnitQuaternion, Vector3};

    type D = Operand<Dual<f64>>;

    fn var(x: f64) -> D {
        Operand::from_scalar(Dual::var(x))
    }

    #[test]
    fn derivative_of_square() {
        let x = var(3.0);
        let y = (x * x).value();
        assert_eq!(y.real, 9.0);
        assert_eq!(y.dual, 6.0); // d/dx x² = 2x = 6
    }

    #[test]
    fn derivative_of_reciprocal() {
        let x = var(2.0);
        let y = (D::one() / x).value();
        assert!((y.real - 0.5).abs() < 1e-10);
        assert!((y.dual - (-0.25)).abs() < 1e-10); // d/dx 1/x = -1/x²
    }

    #[test]
    fn derivative_of_sqrt() {
        let y = Math::sqrt(var(4.0)).value();
        assert!((y.real - 2.0).abs() < 1e-10);
        assert!((y.dual - 0.25).abs() < 1e-10); // d/dx sqrt(x) = 1/(2*sqrt(x))
    }

    #[test]
    fn derivative_of_sin() {
        let y = Math::sin(var(0.0)).value();
        assert!(y.real.abs() < 1e-10); // sin(0) = 0
        assert!((y.dual - 1.0).abs() < 1e-10); // cos(0) = 1
    }

    #[test]
    fn chain_rule() {
        // d/dx sin(x²) = 2x * cos(x²)
        let x = var(1.0);
        let y = Math::sin(x * x).value();
        let expected = 2.0 * 1.0_f64.cos();
        assert!((y.dual - expected).abs() < 1e-10);
    }

    #[test]
    fn derivative_of_atan2() {
        // d/dy atan2(y, 1) at y = 1 is 1/2
        let y = Math::atan2(var(1.0), D::one()).value();
        assert!((y.real - core::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert!((y.dual - 0.5).abs() < 1e-12);
    }

    #[test]
    fn derivative_of_acos_matches_the_closed_form() {
        let y = Math::acos(var(0.5)).value();
        assert!((y.real - 0.5_f64.acos()).abs() < 1e-12);
        assert!((y.dual + 1.0 / 0.75_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn vector3_length_with_dual() {
        // Derivative of |(x, 0, 0)| = |x| → d/dx = sign(x) = 1
        let v = Vector3::new(var(3.0), D::zero(), D::zero());
        let n = v.length().value();
        assert!((n.real - 3.0).abs() < 1e-10);
        assert!((n.dual - 1.0).abs() < 1e-10);
    }

    #[test]
    fn copy_sign_flips_dual() {
        let y = Math::copy_sign(var(3.0), Operand::from_scalar(Dual::constant(-1.0))).value();
        assert_eq!(y.real, -3.0);
        assert_eq!(y.dual, -1.0);
    }

    #[test]
    fn copy_sign_no_flip() {
        let y = Math::copy_sign(var(3.0), Operand::from_scalar(Dual::constant(1.0))).value();
        assert_eq!(y.real, 3.0);
        assert_eq!(y.dual, 1.0);
    }

    #[test]
    fn derivative_of_pow() {
        // d/dx x^3 = 3x^2 at x=2 -> 12
        let y = Math::pow(var(2.0), Operand::from_scalar(Dual::constant(3.0))).value();
        assert!((y.real - 8.0).abs() < 1e-10);
        assert!((y.dual - 12.0).abs() < 1e-8);
    }

    #[test]
    fn rotation_angle_derivative() {
        // Rotating right around forward by θ: y component is sin(θ)
        let theta = var(0.3);
        let q = UnitQuaternion::axis_angle_radians(Vector3::forward(), theta);
        let y = (q * Vector3::right()).y.value();
        assert!((y.real - 0.3_f64.sin()).abs() < 1e-12);
        assert!((y.dual - 0.3_f64.cos()).abs() < 1e-12);
    }
}
