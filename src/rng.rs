//! # Deterministic RNG Stream
//!
//! The whole simulation — inter-arrival sampling, non-rigid stop
//! fractions, Welzl's shuffle, fault-trigger Bernoulli trials, and
//! Byzantine position perturbation — draws from exactly one seeded
//! stream. Per spec §5 and §9, two runs with the same seed and
//! configuration must produce bitwise-identical snapshot sequences, which
//! requires every random draw in the process to go through this type
//! rather than a thread-local or wall-clock-seeded source.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};

/// A single deterministic draw point shared by the scheduler and the
/// geometry engine.
pub struct SimRng {
    inner: StdRng,
}

impl SimRng {
    pub fn from_seed(seed: u64) -> Self {
        SimRng {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// One sample from `Exponential(lambda)`.
    pub fn exponential(&mut self, lambda: f64) -> f64 {
        let dist = Exp::new(lambda).expect("lambda_rate must be positive");
        dist.sample(&mut self.inner)
    }

    /// One sample from `Uniform(0, 1]`, used for non-rigid MOVE stop
    /// fractions. `rand`'s `random_range` draws from `[0, 1)`; the upper
    /// endpoint is folded in by mapping `0.0` to `1.0` so the result is
    /// `(0, 1]` as spec §4.4 requires.
    pub fn uniform_unit(&mut self) -> f64 {
        let u = self.inner.random_range(0.0..1.0);
        if u == 0.0 { 1.0 } else { u }
    }

    /// One sample from `Uniform(lo, hi)`.
    pub fn uniform_range(&mut self, lo: f64, hi: f64) -> f64 {
        self.inner.random_range(lo..hi)
    }

    /// An independent Bernoulli(`p`) trial.
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.inner.random_range(0.0..1.0) < p
    }

    /// A uniformly chosen index in `0..n`. Panics if `n == 0`.
    pub fn gen_index(&mut self, n: usize) -> usize {
        self.inner.random_range(0..n)
    }

    /// Fisher-Yates shuffle in place, used by Welzl's algorithm so that
    /// its expected linear running time (and its result, under a fixed
    /// seed) is reproducible.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::from_seed(7);
        let mut b = SimRng::from_seed(7);
        for _ in 0..16 {
            assert_eq!(a.exponential(3.0), b.exponential(3.0));
        }
    }

    #[test]
    fn different_seed_diverges() {
        let mut a = SimRng::from_seed(1);
        let mut b = SimRng::from_seed(2);
        let seq_a: Vec<f64> = (0..8).map(|_| a.exponential(3.0)).collect();
        let seq_b: Vec<f64> = (0..8).map(|_| b.exponential(3.0)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn uniform_unit_is_half_open_on_zero_end() {
        let mut r = SimRng::from_seed(42);
        for _ in 0..1000 {
            let u = r.uniform_unit();
            assert!(u > 0.0 && u <= 1.0);
        }
    }
}
