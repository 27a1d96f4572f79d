//! # Mutation
//!
//! The `Mutation` trait defines the interface for variation operators that
//! stochastically perturb one solution at a time. Every operator in this module
//! makes an independent decision per variable (per bit for binary solutions):
//! it draws a uniform number from the supplied generator and mutates the
//! variable when the draw is at most the configured probability.
//!
//! The operators leave the objectives untouched; after mutation they are stale
//! and the caller is responsible for re-evaluating the solution.
//!
//! | Operator | Solutions | Transformation |
//! |---|---|---|
//! | [`NullMutation`] | any | none |
//! | [`BitFlipMutation`] | bit strings | complement the bit |
//! | [`PolynomialMutation`] | bounded real | polynomial perturbation, clamped |
//! | [`IntegerPolynomialMutation`] | bounded integer | polynomial perturbation, rounded and clamped |
//! | [`SimpleRandomMutation`] | bounded real | uniform redraw within the bounds |
//! | [`UniformMutation`] | bounded real | uniform perturbation of a fixed magnitude, clamped |
//!
//! ## Example
//!
//! ```rust
//! use moealg::mutation::{Mutation, PolynomialMutation};
//! use moealg::rng::RandomNumberGenerator;
//! use moealg::solution::{Bounds, FloatSolution, Solution};
//!
//! let bounds = Bounds::uniform(3, -1.0, 1.0).unwrap();
//! let solution = FloatSolution::new(vec![0.0, 0.5, -0.5], bounds, 2).unwrap();
//!
//! let operator = PolynomialMutation::new(1.0).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let mutated = operator.execute(solution, &mut rng);
//!
//! assert!(mutated.variables().iter().all(|v| (-1.0..=1.0).contains(v)));
//! ```
pub mod bit_flip;
pub mod null;
pub mod polynomial;
pub mod real;
pub mod simple_random;
pub mod uniform;

use std::fmt::{self, Debug};

use rayon::prelude::*;

use crate::{
    error::{MoeaError, Result},
    rng::RandomNumberGenerator,
    solution::Solution,
};

/// A per-variable mutation probability in `[0, 1]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    /// Creates a new probability.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if `value` is not a finite number in `[0, 1]`.
    pub fn new(value: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(MoeaError::Configuration(format!(
                "probability must be between 0.0 and 1.0, got: {}",
                value
            )));
        }

        Ok(Self(value))
    }

    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Draws once from `rng` and reports whether the draw falls within this probability.
    pub fn hit(&self, rng: &mut RandomNumberGenerator) -> bool {
        rng.uniform() <= self.0
    }
}

impl TryFrom<f64> for Probability {
    type Error = MoeaError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(probability: Probability) -> Self {
        probability.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates an operator parameter that must lie in `[0, ∞)`.
pub(crate) fn non_negative(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(MoeaError::Configuration(format!(
            "{} must be at least 0.0, got: {}",
            name, value
        )));
    }

    Ok(value)
}

/// Clamps `value` into `[lower, upper]`. NaN maps to `lower`.
///
/// Unlike `f64::clamp` this never panics; callers guarantee `lower <= upper`.
pub(crate) fn repair(value: f64, lower: f64, upper: f64) -> f64 {
    if value.is_nan() || value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// Trait for mutation operators.
///
/// Operators hold only their configuration; they keep no reference to any
/// solution between calls, so one operator can be shared across threads and
/// applied to disjoint solutions concurrently.
pub trait Mutation<S: Solution>: Debug + Send + Sync {
    /// Mutates `solution` in place.
    ///
    /// This never fails for a solution of the supported kind. A solution with
    /// zero variables is left unchanged.
    fn mutate(&self, solution: &mut S, rng: &mut RandomNumberGenerator);

    /// Mutates `solution` and hands it back.
    fn execute(&self, mut solution: S, rng: &mut RandomNumberGenerator) -> S {
        self.mutate(&mut solution, rng);
        solution
    }

    /// A descriptive name for reporting.
    fn name(&self) -> &'static str;

    /// The per-variable mutation probability.
    fn probability(&self) -> f64;
}

/// Mutates every solution in `population` sequentially.
pub fn mutate_population<S, M>(operator: &M, population: &mut [S], rng: &mut RandomNumberGenerator)
where
    S: Solution,
    M: Mutation<S> + ?Sized,
{
    population
        .iter_mut()
        .for_each(|solution| operator.mutate(solution, rng));
}

/// Mutates every solution in `population` in parallel.
///
/// One generator is forked from `rng` per solution before any work starts, so
/// the outcome depends only on the state of `rng` and not on scheduling.
pub fn par_mutate_population<S, M>(
    operator: &M,
    population: &mut [S],
    rng: &mut RandomNumberGenerator,
) where
    S: Solution,
    M: Mutation<S> + ?Sized,
{
    let mut generators: Vec<RandomNumberGenerator> =
        (0..population.len()).map(|_| rng.fork()).collect();

    population
        .par_iter_mut()
        .zip(generators.par_iter_mut())
        .for_each(|(solution, generator)| operator.mutate(solution, generator));
}

pub use bit_flip::BitFlipMutation;
pub use null::NullMutation;
pub use polynomial::{
    IntegerPolynomialMutation, PolynomialMutation, PolynomialMutationBuilder,
    DEFAULT_DISTRIBUTION_INDEX,
};
pub use real::RealMutation;
pub use simple_random::SimpleRandomMutation;
pub use uniform::{UniformMutation, DEFAULT_PERTURBATION};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::{Bounds, FloatSolution};

    #[test]
    fn test_probability_accepts_closed_unit_interval() {
        assert_eq!(Probability::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Probability::new(1.0).unwrap().value(), 1.0);
        assert_eq!(Probability::new(0.25).unwrap().value(), 0.25);
    }

    #[test]
    fn test_probability_rejects_out_of_range() {
        for value in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
            let error = Probability::new(value).unwrap_err();
            assert!(error.is_configuration(), "{} should be rejected", value);
        }
    }

    #[test]
    fn test_probability_hit_extremes() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let never = Probability::zero();
        let always = Probability::new(1.0).unwrap();
        for _ in 0..10_000 {
            assert!(!never.hit(&mut rng));
            assert!(always.hit(&mut rng));
        }
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative("x", 0.0).unwrap(), 0.0);
        assert_eq!(
            non_negative("x", -1.0).unwrap_err().to_string(),
            "Configuration error: x must be at least 0.0, got: -1"
        );
        assert!(non_negative("x", -1.0).is_err());
        assert!(non_negative("x", f64::NAN).is_err());
    }

    #[test]
    fn test_repair() {
        assert_eq!(repair(-2.0, -1.0, 1.0), -1.0);
        assert_eq!(repair(2.0, -1.0, 1.0), 1.0);
        assert_eq!(repair(0.5, -1.0, 1.0), 0.5);
        assert_eq!(repair(f64::NAN, -1.0, 1.0), -1.0);
        assert_eq!(repair(f64::INFINITY, -1.0, 1.0), 1.0);
    }

    fn population(size: usize) -> Vec<FloatSolution> {
        let bounds = Bounds::uniform(5, 0.0, 10.0).unwrap();
        (0..size)
            .map(|_| FloatSolution::new(vec![5.0; 5], bounds.clone(), 2).unwrap())
            .collect()
    }

    #[test]
    fn test_mutate_population_touches_every_solution() {
        let operator = SimpleRandomMutation::new(1.0).unwrap();
        let mut solutions = population(20);
        let mut rng = RandomNumberGenerator::from_seed(5);

        mutate_population(&operator, &mut solutions, &mut rng);

        for solution in &solutions {
            assert!(solution.variables().iter().all(|v| *v != 5.0));
        }
    }

    #[test]
    fn test_par_mutate_population_is_reproducible() {
        let operator = PolynomialMutation::with_distribution_index(1.0, 20.0).unwrap();

        let mut first = population(64);
        let mut second = population(64);

        par_mutate_population(&operator, &mut first, &mut RandomNumberGenerator::from_seed(9));
        par_mutate_population(&operator, &mut second, &mut RandomNumberGenerator::from_seed(9));

        assert_eq!(first, second);
        for solution in &first {
            assert!(solution.variables().iter().all(|v| (0.0..=10.0).contains(v)));
        }
    }
}
