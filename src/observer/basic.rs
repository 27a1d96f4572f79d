//! # BasicObserver
//!
//! A throttled debug reporter. Every `display_frequency` evaluations it writes
//! one line with the iteration count, the objectives of the first-ranked
//! solution and the elapsed computing time.

use tracing::debug;

use super::{FieldSet, Observer, ProgressEvent};
use crate::{
    error::{MoeaError, Result},
    solution::Solution,
};

/// Destination for the reporter's lines.
pub trait LogSink {
    /// Accepts one formatted line at debug severity.
    fn debug(&mut self, message: &str);
}

/// Forwards lines to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn debug(&mut self, message: &str) {
        debug!("{}", message);
    }
}

/// Logs progress every `display_frequency` evaluations.
#[derive(Debug, Clone)]
pub struct BasicObserver<L: LogSink = TracingSink> {
    display_frequency: usize,
    sink: L,
}

impl BasicObserver<TracingSink> {
    /// Creates a reporter that logs through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if `display_frequency` is zero.
    pub fn new(display_frequency: usize) -> Result<Self> {
        Self::with_sink(display_frequency, TracingSink)
    }
}

impl Default for BasicObserver<TracingSink> {
    fn default() -> Self {
        Self {
            display_frequency: 1,
            sink: TracingSink,
        }
    }
}

impl<L: LogSink> BasicObserver<L> {
    /// Creates a reporter that writes to `sink`.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if `display_frequency` is zero.
    pub fn with_sink(display_frequency: usize, sink: L) -> Result<Self> {
        if display_frequency == 0 {
            return Err(MoeaError::Configuration(
                "Display frequency must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            display_frequency,
            sink,
        })
    }

    pub fn display_frequency(&self) -> usize {
        self.display_frequency
    }
}

impl<S: Solution, L: LogSink> Observer<S> for BasicObserver<L> {
    fn required_fields(&self) -> FieldSet {
        FieldSet::all()
    }

    fn update(&mut self, event: &ProgressEvent<'_, S>) -> Result<()> {
        let evaluations = event.evaluations()?;
        let population = event.population()?;
        let computing_time = event.computing_time()?;

        if evaluations % self.display_frequency != 0 {
            return Ok(());
        }

        let best = population
            .first()
            .map(|best| best.objectives())
            .unwrap_or(&[]);
        self.sink.debug(&format!(
            "Evaluations: {}. Best fitness: {:?}. Computing time: {}s",
            evaluations,
            best,
            computing_time.as_secs_f64()
        ));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::BinarySolution;
    use std::time::Duration;

    #[derive(Default)]
    struct VecSink(Vec<String>);

    impl LogSink for VecSink {
        fn debug(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    fn population() -> Vec<BinarySolution> {
        let mut best = BinarySolution::new(vec![vec![true]], 2);
        best.objectives_mut().copy_from_slice(&[1.5, 2.0]);
        vec![best, BinarySolution::new(vec![vec![false]], 2)]
    }

    #[test]
    fn test_basic_observer_throttles() {
        let population = population();
        let mut observer = BasicObserver::with_sink(5, VecSink::default()).unwrap();

        for evaluations in 1..=10 {
            let event = ProgressEvent::complete(
                evaluations,
                &population,
                Duration::from_millis(1200),
            );
            observer.update(&event).unwrap();
        }

        assert_eq!(
            observer.sink.0,
            vec![
                "Evaluations: 5. Best fitness: [1.5, 2.0]. Computing time: 1.2s",
                "Evaluations: 10. Best fitness: [1.5, 2.0]. Computing time: 1.2s",
            ]
        );
    }

    #[test]
    fn test_basic_observer_empty_population() {
        let population: Vec<BinarySolution> = Vec::new();
        let mut observer = BasicObserver::with_sink(1, VecSink::default()).unwrap();
        let event = ProgressEvent::complete(1, &population, Duration::from_secs(2));

        observer.update(&event).unwrap();

        assert_eq!(
            observer.sink.0,
            vec!["Evaluations: 1. Best fitness: []. Computing time: 2s"]
        );
    }

    #[test]
    fn test_basic_observer_missing_field_even_when_throttled() {
        let population = population();
        let mut observer = BasicObserver::with_sink(5, VecSink::default()).unwrap();
        let event = ProgressEvent::new()
            .with_evaluations(3)
            .with_population(&population);

        let error = observer.update(&event).unwrap_err();
        assert!(error.is_contract_violation());
        assert!(observer.sink.0.is_empty());
    }

    #[test]
    fn test_basic_observer_rejects_zero_frequency() {
        assert!(BasicObserver::new(0).unwrap_err().is_configuration());
        let observer: BasicObserver = BasicObserver::default();
        assert_eq!(observer.display_frequency(), 1);
    }
}
