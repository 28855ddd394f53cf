//! RNG module - uniform symbol draws
//!
//! Reels draw replacement symbols uniformly by index from the master symbol
//! table, and the spin controller draws the random extra distance per reel.
//! Both come from one deterministic LCG so a seed reproduces a whole session.

use crate::types::SymbolType;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits (multiply-shift); the low bits of an LCG cycle with
    /// short periods. Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Generate random value in range [0, max]
    pub fn next_inclusive(&mut self, max: u32) -> u32 {
        self.next_range(max.saturating_add(1))
    }

    /// Draw one symbol uniformly by index from `table`.
    ///
    /// Returns `None` for an empty table; configuration validation rejects
    /// empty tables before any reel exists.
    pub fn draw_symbol(&mut self, table: &[SymbolType]) -> Option<SymbolType> {
        if table.is_empty() {
            return None;
        }
        let idx = self.next_range(table.len() as u32) as usize;
        table.get(idx).copied()
    }

    /// Current internal state (for reproducing a session)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::REEL_SYMBOLS;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn test_next_inclusive_covers_bounds() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 3];
        for _ in 0..500 {
            let v = rng.next_inclusive(2);
            assert!(v <= 2);
            seen[v as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_draw_symbol_comes_from_table() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            let s = rng.draw_symbol(&REEL_SYMBOLS).unwrap();
            assert!(REEL_SYMBOLS.contains(&s));
        }
    }

    #[test]
    fn test_draw_symbol_reaches_every_kind() {
        let mut rng = SimpleRng::new(3);
        let mut seen = [false; 6];
        for _ in 0..5000 {
            seen[rng.draw_symbol(&REEL_SYMBOLS).unwrap().index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_draw_symbol_empty_table() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(rng.draw_symbol(&[]), None);
    }

    #[test]
    fn test_single_entry_table() {
        let mut rng = SimpleRng::new(1);
        for _ in 0..10 {
            assert_eq!(rng.draw_symbol(&[SymbolType::Sym4]), Some(SymbolType::Sym4));
        }
    }
}
