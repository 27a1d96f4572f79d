use super::{
    Mutation, NullMutation, PolynomialMutation, SimpleRandomMutation, UniformMutation,
};
use crate::{rng::RandomNumberGenerator, solution::BoundedSolution};

/// # RealMutation
///
/// The closed set of operators applicable to bounded real solutions. The
/// operator for a run is chosen once and dispatched statically by `match`.
///
/// ## Example
///
/// ```rust
/// use moealg::mutation::{Mutation, RealMutation, UniformMutation};
/// use moealg::rng::RandomNumberGenerator;
/// use moealg::solution::{Bounds, FloatSolution};
///
/// let operator = RealMutation::from(UniformMutation::new(0.5).unwrap());
/// let bounds = Bounds::uniform(2, 0.0, 1.0).unwrap();
/// let solution = FloatSolution::new(vec![0.5, 0.5], bounds, 1).unwrap();
///
/// let mut rng = RandomNumberGenerator::from_seed(3);
/// let _mutated = operator.execute(solution, &mut rng);
/// assert_eq!(Mutation::<FloatSolution>::name(&operator), "Uniform mutation");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RealMutation {
    Null(NullMutation),
    Polynomial(PolynomialMutation),
    SimpleRandom(SimpleRandomMutation),
    Uniform(UniformMutation),
}

impl<S> Mutation<S> for RealMutation
where
    S: BoundedSolution<Variable = f64>,
{
    fn mutate(&self, solution: &mut S, rng: &mut RandomNumberGenerator) {
        match self {
            RealMutation::Null(operator) => Mutation::<S>::mutate(operator, solution, rng),
            RealMutation::Polynomial(operator) => operator.mutate(solution, rng),
            RealMutation::SimpleRandom(operator) => operator.mutate(solution, rng),
            RealMutation::Uniform(operator) => operator.mutate(solution, rng),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            RealMutation::Null(operator) => Mutation::<S>::name(operator),
            RealMutation::Polynomial(operator) => Mutation::<S>::name(operator),
            RealMutation::SimpleRandom(operator) => Mutation::<S>::name(operator),
            RealMutation::Uniform(operator) => Mutation::<S>::name(operator),
        }
    }

    fn probability(&self) -> f64 {
        match self {
            RealMutation::Null(operator) => Mutation::<S>::probability(operator),
            RealMutation::Polynomial(operator) => Mutation::<S>::probability(operator),
            RealMutation::SimpleRandom(operator) => Mutation::<S>::probability(operator),
            RealMutation::Uniform(operator) => Mutation::<S>::probability(operator),
        }
    }
}

impl From<NullMutation> for RealMutation {
    fn from(operator: NullMutation) -> Self {
        RealMutation::Null(operator)
    }
}

impl From<PolynomialMutation> for RealMutation {
    fn from(operator: PolynomialMutation) -> Self {
        RealMutation::Polynomial(operator)
    }
}

impl From<SimpleRandomMutation> for RealMutation {
    fn from(operator: SimpleRandomMutation) -> Self {
        RealMutation::SimpleRandom(operator)
    }
}

impl From<UniformMutation> for RealMutation {
    fn from(operator: UniformMutation) -> Self {
        RealMutation::Uniform(operator)
    }
}
