use core::marker::PhantomData;

use crate::{Number, Operand};

/// Comparison threshold provider for a numeric kind.
///
/// A kind supplies one `normal` threshold. `sqr` is derived as
/// `normal * normal`; kinds whose threshold is a constant should override it
/// with the precomputed square so it folds away at compile time.
pub trait EpsilonSource<K: Number> {
    fn normal() -> K;

    #[inline]
    fn sqr() -> K {
        let normal = Self::normal();
        normal.mul(normal)
    }
}

/// Epsilon facility: the thresholds of kind `K`, as [`Operand`]s.
///
/// `sqr` gates every degeneracy check on squared lengths
/// (safe normalization, unit-length drift), `normal` gates checks on
/// unsquared quantities (slerp's cosine, look-rotation traces).
pub struct Epsilon<K>(PhantomData<K>);

impl<K: Number> Epsilon<K> {
    #[inline]
    pub fn normal() -> Operand<K> {
        Operand::from_scalar(<K::Epsilon as EpsilonSource<K>>::normal())
    }

    #[inline]
    pub fn sqr() -> Operand<K> {
        Operand::from_scalar(<K::Epsilon as EpsilonSource<K>>::sqr())
    }
}
