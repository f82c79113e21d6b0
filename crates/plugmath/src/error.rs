//! Error types for the checked constructors.

use core::fmt;

/// Errors reported by the checked (`try_*`) constructors.
///
/// The core algorithms never fail; they degrade to NaN/inf or take an
/// epsilon-gated fallback. These errors only exist for callers who prefer to
/// reject degenerate input up front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MathError {
    /// The squared length is below the kind's squared epsilon, so there is
    /// no direction to normalize or invert.
    ZeroLength,
    /// A quaternion offered as a unit quaternion is too far from unit length.
    /// The squared length is reported as a debug float.
    NotNormalized { length_sqr: f32 },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "length is too close to zero"),
            Self::NotNormalized { length_sqr } => {
                write!(f, "quaternion is not normalized: squared length {length_sqr}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MathError {}
