use super::{Mutation, Probability};
use crate::{error::Result, rng::RandomNumberGenerator, solution::Solution};

/// # BitFlipMutation
///
/// Complements each bit of each bit-string variable independently with the
/// configured probability.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitFlipMutation {
    probability: Probability,
}

impl BitFlipMutation {
    /// Creates a new bit-flip operator.
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

impl<S> Mutation<S> for BitFlipMutation
where
    S: Solution<Variable = Vec<bool>>,
{
    fn mutate(&self, solution: &mut S, rng: &mut RandomNumberGenerator) {
        for variable in solution.variables_mut() {
            for bit in variable.iter_mut() {
                if self.probability.hit(rng) {
                    *bit = !*bit;
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "BitFlip mutation"
    }

    fn probability(&self) -> f64 {
        self.probability.value()
    }
}
