use super::{repair, Mutation, Probability};
use crate::{error::Result, rng::RandomNumberGenerator, solution::BoundedSolution};

/// # SimpleRandomMutation
///
/// Replaces each selected variable with a fresh uniform draw spanning its
/// bounds, discarding the previous value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleRandomMutation {
    probability: Probability,
}

impl SimpleRandomMutation {
    /// Creates a new simple random operator.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if `probability` is outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        Ok(Self {
            probability: Probability::new(probability)?,
        })
    }
}

impl<S> Mutation<S> for SimpleRandomMutation
where
    S: BoundedSolution<Variable = f64>,
{
    fn mutate(&self, solution: &mut S, rng: &mut RandomNumberGenerator) {
        for i in 0..solution.number_of_variables() {
            if self.probability.hit(rng) {
                let lower = solution.lower_bound(i);
                let upper = solution.upper_bound(i);
                let drawn = lower + (upper - lower) * rng.uniform();
                solution.variables_mut()[i] = repair(drawn, lower, upper);
            }
        }
    }

    fn name(&self) -> &'static str {
        "Simple random mutation"
    }

    fn probability(&self) -> f64 {
        self.probability.value()
    }
}
