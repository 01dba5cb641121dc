//! Injectable randomness for the coin flip and the automated opponent.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random choices the engine needs.
///
/// Tests substitute a scripted implementation to pin down exact moves.
pub trait RandomSource {
    /// Unbiased coin flip.
    fn coin_flip(&mut self) -> bool;

    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Thread-local entropy for real play.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn coin_flip(&mut self) -> bool {
        rand::thread_rng().gen_bool(0.5)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic generator; the same seed replays the same game.
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: StdRng,
}

impl SeededRng {
    /// Creates a generator from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRng {
    fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRng::from_seed(7);
        let mut b = SeededRng::from_seed(7);
        let xs: Vec<_> = (0..20).map(|_| (a.coin_flip(), a.pick_index(13))).collect();
        let ys: Vec<_> = (0..20).map(|_| (b.coin_flip(), b.pick_index(13))).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_pick_index_in_range() {
        let mut rng = SystemRng;
        for len in 1..50 {
            assert!(rng.pick_index(len) < len);
        }
        assert_eq!(rng.pick_index(1), 0);
    }

    #[test]
    fn test_coin_flip_is_roughly_fair() {
        let mut rng = SeededRng::from_seed(2024);
        let heads = (0..10_000).filter(|_| rng.coin_flip()).count();
        assert!((4_500..=5_500).contains(&heads), "heads = {heads}");
    }
}
