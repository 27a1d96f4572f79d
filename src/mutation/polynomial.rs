//! # Polynomial Mutation
//!
//! Polynomial mutation perturbs a bounded variable `y` in `[yl, yu]` by an
//! amount drawn from a polynomial distribution centred on `y`. The distribution
//! index `η` controls locality: the larger `η`, the closer the mutated value
//! stays to the original.
//!
//! For a variable selected for mutation:
//!
//! 1. If `yl == yu` the variable is set to `yl`.
//! 2. Otherwise `delta1 = (y - yl) / (yu - yl)` and `delta2 = (yu - y) / (yu - yl)`.
//! 3. A second number `rnd` is drawn. For `rnd <= 0.5`:
//!    `val = 2 rnd + (1 - 2 rnd) (1 - delta1)^(η + 1)` and
//!    `deltaq = val^(1 / (η + 1)) - 1`; otherwise
//!    `val = 2 (1 - rnd) + 2 (rnd - 0.5) (1 - delta2)^(η + 1)` and
//!    `deltaq = 1 - val^(1 / (η + 1))`.
//! 4. `y + deltaq (yu - yl)` is clamped to `[yl, yu]`.
//!
//! The integer variant rounds the perturbed value to the nearest integer and
//! then clamps, so the result always lies within the bounds.

use super::{non_negative, repair, Mutation, Probability};
use crate::{
    error::{MoeaError, Result},
    rng::RandomNumberGenerator,
    solution::BoundedSolution,
};

/// Distribution index used when none is configured.
pub const DEFAULT_DISTRIBUTION_INDEX: f64 = 0.20;

/// Returns the perturbed, unclamped value of `y` within `[yl, yu]`.
fn perturb(y: f64, yl: f64, yu: f64, distribution_index: f64, rng: &mut RandomNumberGenerator) -> f64 {
    if yl == yu {
        return yl;
    }

    let delta1 = (y - yl) / (yu - yl);
    let delta2 = (yu - y) / (yu - yl);
    let rnd = rng.uniform();
    let mut_pow = 1.0 / (distribution_index + 1.0);

    let deltaq = if rnd <= 0.5 {
        let xy = 1.0 - delta1;
        let val = 2.0 * rnd + (1.0 - 2.0 * rnd) * xy.powf(distribution_index + 1.0);
        val.powf(mut_pow) - 1.0
    } else {
        let xy = 1.0 - delta2;
        let val = 2.0 * (1.0 - rnd) + 2.0 * (rnd - 0.5) * xy.powf(distribution_index + 1.0);
        1.0 - val.powf(mut_pow)
    };

    y + deltaq * (yu - yl)
}

/// Converts a rounded real back to an integer clamped into `[lower, upper]`.
fn repair_integer(value: f64, lower: i64, upper: i64) -> i64 {
    if value.is_nan() {
        return lower;
    }

    // Saturating conversion.
    let value = value as i64;
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// # PolynomialMutation
///
/// Polynomial mutation for bounded real variables.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PolynomialParameters"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolynomialMutation {
    probability: Probability,
    distribution_index: f64,
}

impl PolynomialMutation {
    /// Creates a new operator with the default distribution index.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if `probability` is outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        Self::with_distribution_index(probability, DEFAULT_DISTRIBUTION_INDEX)
    }

    /// Creates a new operator with an explicit distribution index.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if `probability` is outside `[0, 1]`
    /// or `distribution_index` is negative or not finite.
    pub fn with_distribution_index(probability: f64, distribution_index: f64) -> Result<Self> {
        Ok(Self {
            probability: Probability::new(probability)?,
            distribution_index: non_negative("distribution index", distribution_index)?,
        })
    }

    /// Returns a builder for creating a polynomial operator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use moealg::mutation::PolynomialMutation;
    ///
    /// let operator = PolynomialMutation::builder()
    ///     .probability(0.1)
    ///     .distribution_index(20.0)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(operator.distribution_index(), 20.0);
    /// ```
    pub fn builder() -> PolynomialMutationBuilder {
        PolynomialMutationBuilder::default()
    }

    pub fn distribution_index(&self) -> f64 {
        self.distribution_index
    }
}

impl<S> Mutation<S> for PolynomialMutation
where
    S: BoundedSolution<Variable = f64>,
{
    fn mutate(&self, solution: &mut S, rng: &mut RandomNumberGenerator) {
        for i in 0..solution.number_of_variables() {
            if !self.probability.hit(rng) {
                continue;
            }

            let yl = solution.lower_bound(i);
            let yu = solution.upper_bound(i);
            let y = solution.variables()[i];

            let mutated = perturb(y, yl, yu, self.distribution_index, rng);
            solution.variables_mut()[i] = repair(mutated, yl, yu);
        }
    }

    fn name(&self) -> &'static str {
        "Polynomial mutation"
    }

    fn probability(&self) -> f64 {
        self.probability.value()
    }
}

/// # IntegerPolynomialMutation
///
/// Polynomial mutation for bounded integer variables.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PolynomialParameters"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegerPolynomialMutation {
    probability: Probability,
    distribution_index: f64,
}

impl IntegerPolynomialMutation {
    /// Creates a new operator with the default distribution index.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if `probability` is outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        Self::with_distribution_index(probability, DEFAULT_DISTRIBUTION_INDEX)
    }

    /// Creates a new operator with an explicit distribution index.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if `probability` is outside `[0, 1]`
    /// or `distribution_index` is negative or not finite.
    pub fn with_distribution_index(probability: f64, distribution_index: f64) -> Result<Self> {
        Ok(Self {
            probability: Probability::new(probability)?,
            distribution_index: non_negative("distribution index", distribution_index)?,
        })
    }

    pub fn distribution_index(&self) -> f64 {
        self.distribution_index
    }
}

impl<S> Mutation<S> for IntegerPolynomialMutation
where
    S: BoundedSolution<Variable = i64>,
{
    fn mutate(&self, solution: &mut S, rng: &mut RandomNumberGenerator) {
        for i in 0..solution.number_of_variables() {
            if !self.probability.hit(rng) {
                continue;
            }

            let yl = solution.lower_bound(i);
            let yu = solution.upper_bound(i);
            if yl == yu {
                solution.variables_mut()[i] = yl;
                continue;
            }

            let y = solution.variables()[i];
            let mutated = perturb(
                y as f64,
                yl as f64,
                yu as f64,
                self.distribution_index,
                rng,
            )
            .round();
            // Large bounds are not exact in f64, so the clamp happens on integers.
            solution.variables_mut()[i] = repair_integer(mutated, yl, yu);
        }
    }

    fn name(&self) -> &'static str {
        "Polynomial mutation (Integer)"
    }

    fn probability(&self) -> f64 {
        self.probability.value()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PolynomialParameters {
    probability: Probability,
    distribution_index: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<PolynomialParameters> for PolynomialMutation {
    type Error = MoeaError;

    fn try_from(parameters: PolynomialParameters) -> Result<Self> {
        Self::with_distribution_index(
            parameters.probability.value(),
            parameters.distribution_index,
        )
    }
}

#[cfg(feature = "serde")]
impl TryFrom<PolynomialParameters> for IntegerPolynomialMutation {
    type Error = MoeaError;

    fn try_from(parameters: PolynomialParameters) -> Result<Self> {
        Self::with_distribution_index(
            parameters.probability.value(),
            parameters.distribution_index,
        )
    }
}

/// Builder for the polynomial operators.
#[derive(Debug, Clone, Default)]
pub struct PolynomialMutationBuilder {
    probability: Option<f64>,
    distribution_index: Option<f64>,
}

impl PolynomialMutationBuilder {
    /// Sets the per-variable mutation probability.
    pub fn probability(mut self, value: f64) -> Self {
        self.probability = Some(value);
        self
    }

    /// Sets the distribution index.
    pub fn distribution_index(mut self, value: f64) -> Self {
        self.distribution_index = Some(value);
        self
    }

    /// Builds a real-valued operator.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if the probability was not set or
    /// any parameter is out of range.
    pub fn build(self) -> Result<PolynomialMutation> {
        let (probability, distribution_index) = self.parameters()?;
        PolynomialMutation::with_distribution_index(probability, distribution_index)
    }

    /// Builds an integer-valued operator.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if the probability was not set or
    /// any parameter is out of range.
    pub fn build_integer(self) -> Result<IntegerPolynomialMutation> {
        let (probability, distribution_index) = self.parameters()?;
        IntegerPolynomialMutation::with_distribution_index(probability, distribution_index)
    }

    fn parameters(&self) -> Result<(f64, f64)> {
        let probability = self.probability.ok_or_else(|| {
            MoeaError::Configuration("Mutation probability not specified".to_string())
        })?;
        Ok((
            probability,
            self.distribution_index.unwrap_or(DEFAULT_DISTRIBUTION_INDEX),
        ))
    }
}
