use super::{non_negative, repair, Mutation, Probability};
use crate::{error::Result, rng::RandomNumberGenerator, solution::BoundedSolution};
#[cfg(feature = "serde")]
use crate::error::MoeaError;

/// Perturbation magnitude used when none is configured.
pub const DEFAULT_PERTURBATION: f64 = 0.5;

/// # UniformMutation
///
/// Adds `(u - 0.5) * perturbation` to each selected variable, with `u` uniform
/// in `(0, 1)`, and clamps the result to the variable's bounds. A variable
/// moves by at most `perturbation / 2`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UniformParameters"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformMutation {
    probability: Probability,
    perturbation: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UniformParameters {
    probability: Probability,
    perturbation: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<UniformParameters> for UniformMutation {
    type Error = MoeaError;

    fn try_from(parameters: UniformParameters) -> Result<Self> {
        Self::with_perturbation(parameters.probability.value(), parameters.perturbation)
    }
}

impl UniformMutation {
    /// Creates a new operator with the default perturbation.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if `probability` is outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        Self::with_perturbation(probability, DEFAULT_PERTURBATION)
    }

    /// Creates a new operator with an explicit perturbation magnitude.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if `probability` is outside `[0, 1]`
    /// or `perturbation` is negative or not finite.
    pub fn with_perturbation(probability: f64, perturbation: f64) -> Result<Self> {
        Ok(Self {
            probability: Probability::new(probability)?,
            perturbation: non_negative("perturbation", perturbation)?,
        })
    }

    pub fn perturbation(&self) -> f64 {
        self.perturbation
    }
}

impl<S> Mutation<S> for UniformMutation
where
    S: BoundedSolution<Variable = f64>,
{
    fn mutate(&self, solution: &mut S, rng: &mut RandomNumberGenerator) {
        for i in 0..solution.number_of_variables() {
            if !self.probability.hit(rng) {
                continue;
            }

            let shifted = solution.variables()[i] + (rng.uniform() - 0.5) * self.perturbation;
            solution.variables_mut()[i] =
                repair(shifted, solution.lower_bound(i), solution.upper_bound(i));
        }
    }

    fn name(&self) -> &'static str {
        "Uniform mutation"
    }

    fn probability(&self) -> f64 {
        self.probability.value()
    }
}
