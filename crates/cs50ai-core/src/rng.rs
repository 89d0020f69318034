//! Small deterministic pseudo-random generator.
//!
//! Minesweeper needs random mine placement and random fallback moves, and
//! tests need those to be reproducible from a seed.

use uuid::Uuid;

/// xorshift64 generator.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Seeded generator. A zero seed is remapped since xorshift never leaves 0.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    /// Non-reproducible generator seeded from a random UUID.
    pub fn from_entropy() -> Self {
        let bits = Uuid::new_v4().as_u128();
        Self::new((bits as u64) ^ ((bits >> 64) as u64))
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    pub fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        // Rejection sampling keeps the distribution uniform.
        let bound = bound as u64;
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let value = self.next_u64();
            if value < zone {
                return (value % bound) as usize;
            }
        }
    }

    /// Pick one element uniformly, `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.below(items.len()))
        }
    }

    /// Derive an independent generator, e.g. one per game in a batch.
    pub fn fork(&mut self) -> SimpleRng {
        // splitmix64 finaliser on the next output decorrelates the streams
        let mut z = self.next_u64().wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        SimpleRng::new(z ^ (z >> 31))
    }
}
