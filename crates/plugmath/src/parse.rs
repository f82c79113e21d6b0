use core::marker::PhantomData;

use crate::Number;

/// Construction provider for a numeric kind.
///
/// `from_int` and `from_division` are exact whenever the kind can represent
/// the value, and round to the nearest representable value otherwise.
/// The float conversions are the interop boundary: `to_float` is lossy and
/// meant for debugging, and `unsafe_from_float` gives no exactness guarantee
/// (for a fixed-point kind, a float literal may not round-trip bit-for-bit
/// across platforms).
pub trait Parser<K> {
    fn from_int(value: i32) -> K;
    fn from_division(numerator: i32, denominator: i32) -> K;
    fn to_float(value: K) -> f32;
    fn unsafe_from_float(value: f32) -> K;
}

/// Parse facility: construction helpers for kind `K`, forwarded to `K::Parser`.
///
/// ```
/// use plugmath::Parse;
///
/// let three = Parse::<f64>::from_int(3);
/// assert_eq!(Parse::<f64>::to_float(three), 3.0);
/// ```
pub struct Parse<K>(PhantomData<K>);

impl<K: Number> Parse<K> {
    #[inline]
    pub fn from_int(value: i32) -> K {
        <K::Parser as Parser<K>>::from_int(value)
    }

    #[inline]
    pub fn from_division(numerator: i32, denominator: i32) -> K {
        <K::Parser as Parser<K>>::from_division(numerator, denominator)
    }

    #[inline]
    pub fn to_float(value: K) -> f32 {
        <K::Parser as Parser<K>>::to_float(value)
    }

    #[inline]
    pub fn unsafe_from_float(value: f32) -> K {
        <K::Parser as Parser<K>>::unsafe_from_float(value)
    }
}
