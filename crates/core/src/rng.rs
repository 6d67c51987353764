//! RNG module - deterministic random source for piece generation
//!
//! Piece generation is generic over [`rand::Rng`], so hosts can pass any
//! generator (`rand::rng()` for live play). [`SimpleRng`] is a seeded LCG that
//! plugs into the same interface and makes whole games reproducible from a
//! single `u32`.

use rand::RngCore;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RngCore for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        SimpleRng::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let hi = SimpleRng::next_u32(self) as u64;
        let lo = SimpleRng::next_u32(self) as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = SimpleRng::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
