//! # Solutions
//!
//! A solution is one candidate point in the search space: a fixed-length list of
//! decision variables plus the objective values written by evaluation. The
//! mutation operators in this crate only read and rewrite the variables; the
//! objectives are stale after mutation and must be re-evaluated by the caller.
//!
//! Three concrete solution kinds are provided:
//!
//! - [`BinarySolution`]: each variable is a bit string.
//! - [`FloatSolution`]: real variables with per-variable [`Bounds`].
//! - [`IntegerSolution`]: integer variables with per-variable [`Bounds`].
//!
//! Host code with its own representation can implement [`Solution`] (and
//! [`BoundedSolution`] for the bounded operators) directly.
//!
//! ## Example
//!
//! ```rust
//! use moealg::solution::{Bounds, FloatSolution, Solution};
//!
//! let bounds = Bounds::new(vec![0.0, -5.0], vec![1.0, 5.0]).unwrap();
//! let solution = FloatSolution::new(vec![0.5, 0.0], bounds, 2).unwrap();
//!
//! assert_eq!(solution.number_of_variables(), 2);
//! assert_eq!(solution.objectives(), &[0.0, 0.0]);
//! ```

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use crate::error::{MoeaError, Result};

/// Trait for candidate solutions handled by the operators and observers.
pub trait Solution: Clone + Debug + Send + Sync {
    /// The type of one decision variable.
    type Variable;

    fn variables(&self) -> &[Self::Variable];

    fn variables_mut(&mut self) -> &mut [Self::Variable];

    fn objectives(&self) -> &[f64];

    fn objectives_mut(&mut self) -> &mut [f64];

    fn number_of_variables(&self) -> usize {
        self.variables().len()
    }

    fn number_of_objectives(&self) -> usize {
        self.objectives().len()
    }
}

/// A solution whose variables carry per-variable bounds of the variable type.
pub trait BoundedSolution: Solution {
    fn lower_bound(&self, index: usize) -> Self::Variable;

    fn upper_bound(&self, index: usize) -> Self::Variable;
}

/// A numeric type usable as a variable bound.
pub trait BoundValue: PartialOrd + Display + Copy {
    /// Whether `[lower, upper]` can be worked with in real arithmetic: both
    /// ends and the width of the range are finite.
    fn has_finite_span(lower: Self, upper: Self) -> bool;
}

impl BoundValue for f64 {
    fn has_finite_span(lower: Self, upper: Self) -> bool {
        lower.is_finite() && upper.is_finite() && (upper - lower).is_finite()
    }
}

impl BoundValue for i64 {
    fn has_finite_span(_lower: Self, _upper: Self) -> bool {
        true
    }
}

/// Per-variable lower and upper bounds.
///
/// Construction guarantees `lower[i] <= upper[i]` for every variable, that
/// both vectors have the same length and that every range has a finite width.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "BoundsData<T>",
        bound(deserialize = "T: BoundValue + serde::Deserialize<'de>")
    )
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds<T> {
    lower: Vec<T>,
    upper: Vec<T>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BoundsData<T> {
    lower: Vec<T>,
    upper: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: BoundValue> TryFrom<BoundsData<T>> for Bounds<T> {
    type Error = MoeaError;

    fn try_from(data: BoundsData<T>) -> Result<Self> {
        Self::new(data.lower, data.upper)
    }
}

impl<T: BoundValue> Bounds<T> {
    /// Creates a new set of bounds.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if the vectors differ in length or a
    /// range is infinite, and `MoeaError::InvalidBounds` if any lower bound is
    /// greater than its upper bound (or the two cannot be compared, as with NaN).
    pub fn new(lower: Vec<T>, upper: Vec<T>) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(MoeaError::Configuration(format!(
                "Lower bounds ({}) and upper bounds ({}) differ in length",
                lower.len(),
                upper.len()
            )));
        }

        for (index, (l, u)) in lower.iter().zip(upper.iter()).enumerate() {
            if matches!(l.partial_cmp(u), None | Some(Ordering::Greater)) {
                return Err(MoeaError::InvalidBounds {
                    index,
                    lower: l.to_string(),
                    upper: u.to_string(),
                });
            }
            if !T::has_finite_span(*l, *u) {
                return Err(MoeaError::Configuration(format!(
                    "Bounds of variable {} must span a finite range, got: [{}, {}]",
                    index, l, u
                )));
            }
        }

        Ok(Self { lower, upper })
    }

    /// Creates bounds where every variable shares the same range.
    pub fn uniform(number_of_variables: usize, lower: T, upper: T) -> Result<Self> {
        Self::new(
            vec![lower; number_of_variables],
            vec![upper; number_of_variables],
        )
    }

    pub fn len(&self) -> usize {
        self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    pub fn lower(&self, index: usize) -> T {
        self.lower[index]
    }

    pub fn upper(&self, index: usize) -> T {
        self.upper[index]
    }
}

fn check_variable_count(variables: usize, bounds: usize) -> Result<()> {
    if variables != bounds {
        return Err(MoeaError::Configuration(format!(
            "Solution has {} variables but {} bounds",
            variables, bounds
        )));
    }
    Ok(())
}

/// A solution made of bit-string variables.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BinarySolution {
    variables: Vec<Vec<bool>>,
    objectives: Vec<f64>,
}

impl BinarySolution {
    pub fn new(variables: Vec<Vec<bool>>, number_of_objectives: usize) -> Self {
        Self {
            variables,
            objectives: vec![0.0; number_of_objectives],
        }
    }

    /// Number of bits across all variables.
    pub fn total_number_of_bits(&self) -> usize {
        self.variables.iter().map(Vec::len).sum()
    }
}

impl Solution for BinarySolution {
    type Variable = Vec<bool>;

    fn variables(&self) -> &[Vec<bool>] {
        &self.variables
    }

    fn variables_mut(&mut self) -> &mut [Vec<bool>] {
        &mut self.variables
    }

    fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    fn objectives_mut(&mut self) -> &mut [f64] {
        &mut self.objectives
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: BoundValue + serde::Deserialize<'de>"))]
struct BoundedSolutionData<T> {
    variables: Vec<T>,
    bounds: Bounds<T>,
    objectives: Vec<f64>,
}

/// A solution made of bounded real variables.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BoundedSolutionData<f64>"))]
#[derive(Debug, Clone, PartialEq)]
pub struct FloatSolution {
    variables: Vec<f64>,
    bounds: Bounds<f64>,
    objectives: Vec<f64>,
}

impl FloatSolution {
    /// Creates a new real-valued solution.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if the number of variables does not
    /// match the number of bounds.
    pub fn new(
        variables: Vec<f64>,
        bounds: Bounds<f64>,
        number_of_objectives: usize,
    ) -> Result<Self> {
        check_variable_count(variables.len(), bounds.len())?;
        Ok(Self {
            variables,
            bounds,
            objectives: vec![0.0; number_of_objectives],
        })
    }

    pub fn bounds(&self) -> &Bounds<f64> {
        &self.bounds
    }
}

#[cfg(feature = "serde")]
impl TryFrom<BoundedSolutionData<f64>> for FloatSolution {
    type Error = MoeaError;

    fn try_from(data: BoundedSolutionData<f64>) -> Result<Self> {
        check_variable_count(data.variables.len(), data.bounds.len())?;
        Ok(Self {
            variables: data.variables,
            bounds: data.bounds,
            objectives: data.objectives,
        })
    }
}

impl Solution for FloatSolution {
    type Variable = f64;

    fn variables(&self) -> &[f64] {
        &self.variables
    }

    fn variables_mut(&mut self) -> &mut [f64] {
        &mut self.variables
    }

    fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    fn objectives_mut(&mut self) -> &mut [f64] {
        &mut self.objectives
    }
}

impl BoundedSolution for FloatSolution {
    fn lower_bound(&self, index: usize) -> f64 {
        self.bounds.lower(index)
    }

    fn upper_bound(&self, index: usize) -> f64 {
        self.bounds.upper(index)
    }
}

/// A solution made of bounded integer variables.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BoundedSolutionData<i64>"))]
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerSolution {
    variables: Vec<i64>,
    bounds: Bounds<i64>,
    objectives: Vec<f64>,
}

impl IntegerSolution {
    /// Creates a new integer-valued solution.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if the number of variables does not
    /// match the number of bounds.
    pub fn new(
        variables: Vec<i64>,
        bounds: Bounds<i64>,
        number_of_objectives: usize,
    ) -> Result<Self> {
        check_variable_count(variables.len(), bounds.len())?;
        Ok(Self {
            variables,
            bounds,
            objectives: vec![0.0; number_of_objectives],
        })
    }

    pub fn bounds(&self) -> &Bounds<i64> {
        &self.bounds
    }
}

#[cfg(feature = "serde")]
impl TryFrom<BoundedSolutionData<i64>> for IntegerSolution {
    type Error = MoeaError;

    fn try_from(data: BoundedSolutionData<i64>) -> Result<Self> {
        check_variable_count(data.variables.len(), data.bounds.len())?;
        Ok(Self {
            variables: data.variables,
            bounds: data.bounds,
            objectives: data.objectives,
        })
    }
}

impl Solution for IntegerSolution {
    type Variable = i64;

    fn variables(&self) -> &[i64] {
        &self.variables
    }

    fn variables_mut(&mut self) -> &mut [i64] {
        &mut self.variables
    }

    fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    fn objectives_mut(&mut self) -> &mut [f64] {
        &mut self.objectives
    }
}

impl BoundedSolution for IntegerSolution {
    fn lower_bound(&self, index: usize) -> i64 {
        self.bounds.lower(index)
    }

    fn upper_bound(&self, index: usize) -> i64 {
        self.bounds.upper(index)
    }
}
