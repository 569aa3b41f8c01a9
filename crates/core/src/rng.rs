//! Injected pseudo-random source used by every generation phase.

use rand_chacha::{ChaCha8Rng, rand_core::Rng};

/// Sequential source of random draws consumed by the graph builder.
///
/// Only [`RandomSource::next_u64`] is required; bounded draws are derived from it so
/// a scripted source in tests controls every decision the builder makes.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform value in `min_value..=max_value`.
    fn range_inclusive(&mut self, min_value: usize, max_value: usize) -> usize {
        debug_assert!(min_value <= max_value);
        let draw = self.next_u64();
        match ((max_value - min_value) as u64).checked_add(1) {
            Some(range_size) => min_value + (draw % range_size) as usize,
            // The range covers every u64, so the raw draw is already uniform.
            None => min_value + draw as usize,
        }
    }

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.range_inclusive(0, len - 1)
    }
}

impl RandomSource for ChaCha8Rng {
    fn next_u64(&mut self) -> u64 {
        Rng::next_u64(self)
    }
}


#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::test_support::ScriptedSource;
    use super::*;

    #[test]
    fn range_inclusive_stays_inside_requested_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(12_345);
        for _ in 0..200 {
            let value = rng.range_inclusive(7, 13);
            assert!((7..=13).contains(&value));
        }
    }

    #[test]
    fn range_inclusive_with_equal_bounds_returns_the_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(rng.range_inclusive(4, 4), 4);
    }

    #[test]
    fn range_inclusive_over_the_full_usize_range_does_not_overflow() {
        let mut source = ScriptedSource::new(&[5, u64::MAX]);
        assert_eq!(source.range_inclusive(0, usize::MAX), 5);
        assert_eq!(source.range_inclusive(0, usize::MAX), u64::MAX as usize);
        assert_eq!(source.taken(), 2);
    }

    #[test]
    fn pick_index_reduces_raw_draw_modulo_length() {
        let mut source = ScriptedSource::new(&[10, 3]);
        assert_eq!(source.pick_index(4), 2);
        assert_eq!(source.pick_index(4), 3);
        assert_eq!(source.pick_index(4), 3, "scripted source repeats its last draw");
    }

    #[test]
    fn same_seed_replays_the_same_draws() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let left: Vec<usize> = (0..16).map(|_| a.pick_index(1_000)).collect();
        let right: Vec<usize> = (0..16).map(|_| b.pick_index(1_000)).collect();
        assert_eq!(left, right);
    }
}
