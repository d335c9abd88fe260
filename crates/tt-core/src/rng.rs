//! Injected randomness capability.
//!
//! Every generator in the workspace (UUID, password, placeholder text) draws
//! randomness through [`RandomSource`] rather than reaching for an ambient
//! RNG. This keeps call sites unchanged when a cryptographically secure
//! source is substituted, and makes generator output reproducible in tests
//! via [`SeededRandom`].

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

// ---------------------------------------------------------------------------
// RandomSource
// ---------------------------------------------------------------------------

/// Capability object providing raw randomness to generators.
pub trait RandomSource {
    /// Fill `buf` with random bytes.
    fn next_bytes(&mut self, buf: &mut [u8]);

    /// Uniform float in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn next_below(&mut self, bound: usize) -> usize;
}

// ---------------------------------------------------------------------------
// ThreadRandom
// ---------------------------------------------------------------------------

/// Default source backed by the thread-local RNG.
///
/// Suitable for identifiers and placeholder text. The thread RNG is seeded
/// from the operating system but callers with hard security requirements
/// should supply their own [`RandomSource`] implementation.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn next_bytes(&mut self, buf: &mut [u8]) {
        rand::rng().fill_bytes(buf);
    }

    fn next_f64(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }

    fn next_below(&mut self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }
}

// ---------------------------------------------------------------------------
// SeededRandom
// ---------------------------------------------------------------------------

/// Deterministic source for tests and reproducible output.
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_bytes(&mut self, buf: &mut [u8]) {
        self.rng.fill_bytes(buf);
    }

    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn next_below(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_source_is_deterministic() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let mut buf_a = [0u8; 16];
        let mut buf_b = [0u8; 16];
        a.next_bytes(&mut buf_a);
        b.next_bytes(&mut buf_b);
        assert_eq!(buf_a, buf_b);
        assert_eq!(a.next_below(1000), b.next_below(1000));
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRandom::new(1);
        let mut b = SeededRandom::new(2);
        let mut buf_a = [0u8; 16];
        let mut buf_b = [0u8; 16];
        a.next_bytes(&mut buf_a);
        b.next_bytes(&mut buf_b);
        assert_ne!(buf_a, buf_b);
    }

    #[test]
    fn next_below_respects_bound() {
        let mut rng = SeededRandom::new(7);
        for bound in [1usize, 2, 10, 255] {
            for _ in 0..100 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn next_f64_in_unit_interval() {
        let mut rng = ThreadRandom::new();
        for _ in 0..100 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn thread_source_fills_bytes() {
        let mut rng = ThreadRandom::new();
        let mut buf = [0u8; 32];
        rng.next_bytes(&mut buf);
        // 32 zero bytes from a healthy RNG is effectively impossible.
        assert!(buf.iter().any(|&b| b != 0));
    }
}
