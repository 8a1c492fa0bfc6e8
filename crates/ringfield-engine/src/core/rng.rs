//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, fast, no-std compatible.

use glam::Vec3;

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Float in `[low, high + 1)`.
    ///
    /// The `+ 1` widens the range so integer bounds are reachable after
    /// flooring; for float use this means `high` itself is inside the range.
    pub fn math_range(&mut self, low: f32, high: f32) -> f32 {
        self.next_f32() * (high - low + 1.0) + low
    }

    /// Random point in the field: x and y over `[-scene_size, scene_size + 1)`,
    /// z in a thin slab around the origin.
    pub fn random_position(&mut self, scene_size: f32) -> Vec3 {
        let x = self.math_range(-scene_size, scene_size);
        let y = self.math_range(-scene_size, scene_size);
        Vec3::new(x, y, self.math_range(-10.0, 10.0))
    }
}
