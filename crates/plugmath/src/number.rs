use core::fmt;

use crate::{EpsilonSource, Parser, SpecialMath};

/// The capability contract a numeric kind satisfies to be usable by plugmath.
///
/// Implemented for `f32`, `f64` and [`Dual<S>`](crate::Dual). A deterministic
/// fixed-point kind implements the same contract and picks its own policy for
/// overflow and division by zero; the geometric code never inspects it.
///
/// Arithmetic is closed over the kind. Ordering follows the backend's native
/// comparison, with NaN (or the backend's NaN surrogate) unordered against
/// everything including itself.
///
/// The three capability providers are bound at compile time as associated
/// types. They are expected to be internally consistent (for example
/// `SpecialMath::epsilon_sqr() == epsilon() * epsilon()`); the library does
/// not check this.
pub trait Number: Copy + Clone + fmt::Debug + fmt::Display + Default + Send + Sync + 'static {
    /// Construction from integers, ratios and debug floats.
    type Parser: Parser<Self>;
    /// Comparison threshold used for approximate equality and degeneracy checks.
    type Epsilon: EpsilonSource<Self>;
    /// Sign manipulation, roots and trigonometry.
    type SpecialMath: SpecialMath<Self>;

    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn mul(self, other: Self) -> Self;
    fn div(self, other: Self) -> Self;
    fn negate(self) -> Self;

    fn less(self, other: Self) -> bool;
    fn less_or_equal(self, other: Self) -> bool;
    fn greater(self, other: Self) -> bool;
    fn greater_or_equal(self, other: Self) -> bool;
    fn equal_to(self, other: Self) -> bool;

    fn is_nan(self) -> bool;
}
