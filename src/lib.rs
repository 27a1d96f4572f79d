pub mod error;
pub mod mutation;
pub mod observer;
pub mod output;
pub mod rng;
pub mod solution;

// Re-export commonly used types for convenience
pub use error::{MoeaError, Result, ResultExt};
pub use mutation::{Mutation, Probability};
pub use observer::{DefaultObservable, Observable, Observer, ProgressEvent};
pub use solution::{BinarySolution, BoundedSolution, Bounds, FloatSolution, IntegerSolution, Solution};
