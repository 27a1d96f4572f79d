use super::Mutation;
use crate::{rng::RandomNumberGenerator, solution::Solution};

/// # NullMutation
///
/// An operator that leaves every solution unchanged. Useful as a placeholder
/// when a run should proceed without variation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NullMutation;

impl NullMutation {
    pub fn new() -> Self {
        Self
    }
}

impl<S: Solution> Mutation<S> for NullMutation {
    fn mutate(&self, _solution: &mut S, _rng: &mut RandomNumberGenerator) {}

    fn name(&self) -> &'static str {
        "Null mutation"
    }

    fn probability(&self) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::{BinarySolution, Bounds, IntegerSolution};

    #[test]
    fn test_null_mutation_is_identity() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let operator = NullMutation::new();

        let binary = BinarySolution::new(vec![vec![true, false, true]], 2);
        assert_eq!(operator.execute(binary.clone(), &mut rng), binary);

        let bounds = Bounds::uniform(2, -10, 10).unwrap();
        let integer = IntegerSolution::new(vec![3, -4], bounds, 1).unwrap();
        assert_eq!(operator.execute(integer.clone(), &mut rng), integer);
    }

    #[test]
    fn test_null_mutation_name() {
        let operator = NullMutation::new();
        assert_eq!(
            Mutation::<BinarySolution>::name(&operator),
            "Null mutation"
        );
        assert_eq!(Mutation::<BinarySolution>::probability(&operator), 0.0);
    }
}
