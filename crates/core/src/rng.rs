//! RNG module - deterministic emitter selection
//!
//! A small LCG so a given seed replays the same sequence of spawn
//! emitters, which keeps games reproducible in tests.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// very short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        assert!(max > 0, "next_range needs a non-empty range");
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Pick one element uniformly
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let i = self.next_range(items.len() as u32) as usize;
        &items[i]
    }
}
