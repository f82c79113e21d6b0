//! plugmath: geometry over pluggable numeric kinds
//!
//! Vectors, quaternions and unit quaternions written once, generically, over
//! an interchangeable scalar representation. The same rotation, interpolation
//! and look-rotation code runs on `f32`, `f64`, forward-mode dual numbers, or
//! a deterministic fixed-point kind supplied by the application.
//!
//! # Design principles
//! - A scalar kind implements [`Number`] and names three capability providers
//!   ([`Parser`], [`EpsilonSource`], [`SpecialMath`]) as associated types.
//!   Everything is resolved at compile time; there is no runtime registry.
//! - Generic arithmetic goes through [`Operand`], which gives any kind infix
//!   operators without requiring the kind itself to implement `core::ops`.
//! - Degenerate inputs are handled by value: `*_safe` variants take a
//!   fallback, slerp falls back to linear interpolation near the poles.
//! - Exact equality (`==`, [`Vector3::exactly_equals`]) and approximate
//!   equality ([`Vector3::approximately_equals`]) are distinct, named
//!   operations.
//! - `#[repr(C)]` entities for interop with GPU buffers and FFI.
//!
//! # Example
//! ```
//! use plugmath::{Operand, UnitQuaternion, Vector3};
//!
//! let half_turn = UnitQuaternion::<f32>::axis_angle_radians(
//!     Vector3::up(),
//!     Operand::from_scalar(core::f32::consts::PI),
//! );
//! let turned = half_turn * Vector3::forward();
//! assert!(turned.approximately_equals(Vector3::backward()));
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[macro_use]
mod trace;

mod number;
mod parse;
mod epsilon;
mod special;
mod math;
mod operand;
mod error;
mod vec3;
mod quat;
mod unit_quat;
mod dual;

#[cfg(any(feature = "std", feature = "libm"))]
mod float;

pub use number::Number;
pub use parse::{Parse, Parser};
pub use epsilon::{Epsilon, EpsilonSource};
pub use special::SpecialMath;
pub use math::Math;
pub use operand::Operand;
pub use error::MathError;
pub use vec3::Vector3;
pub use quat::Quaternion;
pub use unit_quat::UnitQuaternion;
pub use dual::{Dual, DualEpsilon, DualParser, DualSpecialMath};

#[cfg(any(feature = "std", feature = "libm"))]
pub use float::{FloatEpsilon, FloatParser, FloatSpecialMath};

// Bytemuck impls for concrete f32/f64 instantiations (generic structs can't derive Pod)
#[cfg(all(feature = "bytemuck", any(feature = "std", feature = "libm")))]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: every field is the same float type behind #[repr(C)] or
            // #[repr(transparent)], so there is no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Operand<f32>);
    impl_pod!(Operand<f64>);
    impl_pod!(Vector3<f32>);
    impl_pod!(Vector3<f64>);
    impl_pod!(Quaternion<f32>);
    impl_pod!(Quaternion<f64>);
    impl_pod!(UnitQuaternion<f32>);
    impl_pod!(UnitQuaternion<f64>);
}
