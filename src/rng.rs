//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the random source every mutation
//! operator draws from. It is passed into each operator call explicitly, so a
//! run is reproducible whenever the caller seeds it.
//!
//! ## Example
//!
//! ```rust
//! use moealg::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let draw = rng.uniform();
//!
//! assert!(draw > 0.0 && draw < 1.0);
//! ```

use rand::{distributions::Open01, rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` used by the mutation operators.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a number from the open interval `(0, 1)`.
    ///
    /// Neither end point is ever returned, so a comparison `draw <= p` is never
    /// true for `p == 0.0` and always true for `p == 1.0`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.sample(Open01)
    }

    /// Draws a number in `[from, to)`.
    ///
    /// Returns `from` when the range is empty.
    pub fn uniform_range(&mut self, from: f64, to: f64) -> f64 {
        if from < to {
            self.rng.gen_range(from..to)
        } else {
            from
        }
    }

    /// Derives an independent generator seeded from this one.
    ///
    /// The child stream is fully determined by the state of `self`, so forking
    /// a seeded generator yields reproducible children.
    pub fn fork(&mut self) -> Self {
        Self::from_seed(self.rng.gen())
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
