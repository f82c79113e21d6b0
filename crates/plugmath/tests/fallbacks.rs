//! The numerical safety nets emit trace events under the `plugmath` target.

#![cfg(feature = "tracing")]

mod common;

use plugmath::{Operand, Quaternion, UnitQuaternion, Vector3};

#[test]
fn normalize_safe_fallback_is_traced() {
    let messages = common::capture(|| {
        let v = Vector3::<f32>::zero().normalize_safe(Vector3::up());
        assert_eq!(v, Vector3::up());
    });
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("normalize_safe"));
}

#[test]
fn regular_normalization_is_silent() {
    let messages = common::capture(|| {
        let v = Vector3::<f64>::from_scalars(3.0, 0.0, 4.0).normalize_safe(Vector3::up());
        assert!((v.length().value() - 1.0).abs() < 1e-12);
        let q = UnitQuaternion::<f64>::identity();
        assert_eq!(q.ensure_normalization(), q);
    });
    assert!(messages.is_empty(), "{messages:?}");
}

#[test]
fn degenerate_slerp_is_traced() {
    let messages = common::capture(|| {
        let q = UnitQuaternion::<f64>::identity();
        let r = q.slerp(q, Operand::from_scalar(0.5), false);
        assert_eq!(r, q);

        let p = Quaternion::<f64>::identity();
        let r = p.slerp(p, Operand::from_scalar(0.5), false);
        assert_eq!(r, p);
    });
    assert_eq!(messages.iter().filter(|m| m.contains("slerp")).count(), 2, "{messages:?}");
}

#[test]
fn look_rotation_fallbacks_are_traced() {
    let messages = common::capture(|| {
        // identity basis short-circuits
        let q = UnitQuaternion::<f32>::look_rotation(Vector3::forward(), Vector3::up());
        assert_eq!(q, UnitQuaternion::identity());
    });
    assert!(messages.iter().any(|m| m.contains("look_rotation")), "{messages:?}");

    let messages = common::capture(|| {
        // up parallel to forward: the side axis falls back to the orthonormal
        let _ = UnitQuaternion::<f32>::look_rotation(Vector3::up(), Vector3::up());
    });
    assert!(messages.iter().any(|m| m.contains("normalize_safe")), "{messages:?}");
}

#[test]
fn drift_correction_is_traced() {
    let messages = common::capture(|| {
        let drifted = UnitQuaternion::<f64>::new(
            Operand::zero(),
            Operand::zero(),
            Operand::zero(),
            Operand::from_scalar(2.0),
        );
        let fixed = drifted.ensure_normalization();
        assert_eq!(fixed, UnitQuaternion::identity());
    });
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("ensure_normalization"));
}

#[test]
fn fmt_subscriber_accepts_fallback_events() {
    common::init_test_logging();
    let q = Quaternion::<f32>::default().normalize_safe(Quaternion::identity());
    assert_eq!(q, Quaternion::identity());
}
