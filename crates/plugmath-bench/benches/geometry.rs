use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion};
use plugmath::{Dual, Number, UnitQuaternion, Vector3};
use plugmath_bench::*;

// Registers one benchmark per reference kind in `group`.
macro_rules! per_kind {
    ($group:expr, $body:ident) => {
        $group.bench_function("f32", |b| $body::<f32>(b));
        $group.bench_function("f64", |b| $body::<f64>(b));
        $group.bench_function("dual_f64", |b| $body::<Dual<f64>>(b));
    };
}


// ============================================================
// Vector3
// ============================================================

fn dot<K: Number>(b: &mut Bencher) {
    let v = random_vectors::<K>(2);
    let (a, c) = (v[0], v[1]);
    b.iter(|| black_box(black_box(a).dot(black_box(c))))
}

fn cross<K: Number>(b: &mut Bencher) {
    let v = random_vectors::<K>(2);
    let (a, c) = (v[0], v[1]);
    b.iter(|| black_box(black_box(a).cross(black_box(c))))
}

fn normalize_safe<K: Number>(b: &mut Bencher) {
    let a = random_vectors::<K>(1)[0];
    b.iter(|| black_box(black_box(a).normalize_safe(Vector3::forward())))
}

fn orthonormal<K: Number>(b: &mut Bencher) {
    let a = random_vectors::<K>(1)[0];
    b.iter(|| black_box(black_box(a).orthonormal()))
}

fn vec3_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/dot");
    per_kind!(group, dot);
    group.finish();
}

fn vec3_cross(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/cross");
    per_kind!(group, cross);
    group.finish();
}

fn vec3_normalize_safe(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/normalize_safe");
    per_kind!(group, normalize_safe);
    group.finish();
}

fn vec3_orthonormal(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/orthonormal");
    per_kind!(group, orthonormal);
    group.finish();
}

// ============================================================
// Rotations
// ============================================================

fn rotate<K: Number>(b: &mut Bencher) {
    let q = random_rotations::<K>(1)[0];
    let v = random_vectors::<K>(1)[0];
    b.iter(|| black_box(black_box(q) * black_box(v)))
}

fn compose<K: Number>(b: &mut Bencher) {
    let qs = random_rotations::<K>(2);
    let (q1, q2) = (qs[0], qs[1]);
    b.iter(|| black_box(black_box(q1) * black_box(q2)))
}

fn look_rotation<K: Number>(b: &mut Bencher) {
    let targets = random_vectors::<K>(64);
    b.iter(|| {
        for &t in &targets {
            black_box(UnitQuaternion::look_rotation(black_box(t), Vector3::up()));
        }
    })
}

fn euler<K: Number>(b: &mut Bencher) {
    let angles = random_vectors::<K>(1)[0];
    b.iter(|| black_box(UnitQuaternion::euler_radians(black_box(angles))))
}

fn quat_rotate_vec(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_quat/rotate_vec");
    per_kind!(group, rotate);
    group.finish();
}

fn quat_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_quat/mul");
    per_kind!(group, compose);
    group.finish();
}

fn quat_look_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_quat/look_rotation_x64");
    per_kind!(group, look_rotation);
    group.finish();
}

fn quat_euler(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_quat/euler_radians");
    per_kind!(group, euler);
    group.finish();
}

criterion_group!(
    benches,
    vec3_dot,
    vec3_cross,
    vec3_normalize_safe,
    vec3_orthonormal,
    quat_rotate_vec,
    quat_mul,
    quat_look_rotation,
    quat_euler,
);
criterion_main!(benches);
