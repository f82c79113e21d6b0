//! Seeded input generators for the plugmath benchmarks.
//!
//! Every generator is generic over the scalar kind and draws from the same
//! seed, so `f32`, `f64` and dual-number runs see the same inputs.

use plugmath::{Number, Operand, Quaternion, UnitQuaternion, Vector3};

/// xoshiro256** PRNG, seeded through SplitMix64.
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        let mut z = seed;
        let mut s = [0u64; 4];
        for slot in &mut s {
            z = z.wrapping_add(0x9e3779b97f4a7c15);
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            *slot = z ^ (z >> 31);
        }
        Self { s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = self.s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }

    /// Uniform in [-1, 1]
    pub fn unit_f32(&mut self) -> f32 {
        ((self.next_u64() as f64) / (u64::MAX as f64) * 2.0 - 1.0) as f32
    }

    /// Uniform in [-1, 1], converted into the kind `K`
    pub fn operand<K: Number>(&mut self) -> Operand<K> {
        Operand::from_debug_float(self.unit_f32())
    }
}

pub fn make_rng() -> Rng {
    Rng::new(0x5EED_0F_F1A7_B0A7)
}

pub fn random_vectors<K: Number>(n: usize) -> Vec<Vector3<K>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Vector3::new(rng.operand(), rng.operand(), rng.operand()))
        .collect()
}

/// Unnormalized quaternions with components in [-1, 1].
pub fn random_quaternions<K: Number>(n: usize) -> Vec<Quaternion<K>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Quaternion::new(rng.operand(), rng.operand(), rng.operand(), rng.operand()))
        .collect()
}

pub fn random_rotations<K: Number>(n: usize) -> Vec<UnitQuaternion<K>> {
    random_quaternions(n)
        .into_iter()
        .map(UnitQuaternion::normalize_to_unit)
        .collect()
}
