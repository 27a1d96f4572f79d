//! # VisualizerObserver
//!
//! Hands the objective space of each published population to a [`Plotter`].
//! The plotting backend itself lives outside this crate; implement [`Plotter`]
//! to connect one.
//!
//! ## Example
//!
//! ```rust
//! use moealg::error::Result;
//! use moealg::observer::{Plotter, VisualizerObserver};
//!
//! #[derive(Default)]
//! struct Console {
//!     frames: usize,
//! }
//!
//! impl Plotter for Console {
//!     fn initialize(&mut self, title: &str, _reference: Option<&[Vec<f64>]>) -> Result<()> {
//!         println!("{}", title);
//!         Ok(())
//!     }
//!
//!     fn render(&mut self, front: &[Vec<f64>], title: &str, _replace: bool) -> Result<()> {
//!         self.frames += 1;
//!         println!("{}: {} points", title, front.len());
//!         Ok(())
//!     }
//! }
//!
//! let observer = VisualizerObserver::builder(Console::default())
//!     .display_frequency(10)
//!     .reference_front(vec![vec![0.0, 1.0], vec![1.0, 0.0]])
//!     .build()
//!     .unwrap();
//! assert_eq!(observer.display_frequency(), 10);
//! ```

use super::{FieldSet, Observer, ProgressEvent};
use crate::{
    error::{MoeaError, Result},
    solution::Solution,
};

/// Title passed to the plotter when none is configured.
pub const DEFAULT_TITLE: &str = "MOEALG";

/// An external plotting backend.
pub trait Plotter {
    /// Prepares the plot, optionally with a reference front drawn for comparison.
    fn initialize(&mut self, title: &str, reference_front: Option<&[Vec<f64>]>) -> Result<()>;

    /// Draws one frame of objective vectors, either replacing the previous
    /// frame or layering on top of it.
    fn render(&mut self, front: &[Vec<f64>], title: &str, replace: bool) -> Result<()>;
}

/// Redraws the objective space every `display_frequency` evaluations.
#[derive(Debug)]
pub struct VisualizerObserver<P: Plotter> {
    plotter: P,
    display_frequency: usize,
    replace: bool,
}

impl<P: Plotter> VisualizerObserver<P> {
    /// Creates a visualizer with default settings: every evaluation is drawn,
    /// each frame replaces the previous one and there is no reference front.
    ///
    /// # Errors
    ///
    /// Returns the plotter's error if initialization fails.
    pub fn new(plotter: P) -> Result<Self> {
        Self::builder(plotter).build()
    }

    /// Returns a builder for configuring a visualizer around `plotter`.
    pub fn builder(plotter: P) -> VisualizerObserverBuilder<P> {
        VisualizerObserverBuilder {
            plotter,
            title: DEFAULT_TITLE.to_string(),
            reference_front: None,
            replace: true,
            display_frequency: 1,
        }
    }

    pub fn display_frequency(&self) -> usize {
        self.display_frequency
    }

    pub fn replace(&self) -> bool {
        self.replace
    }

    pub fn plotter(&self) -> &P {
        &self.plotter
    }
}

impl<S: Solution, P: Plotter> Observer<S> for VisualizerObserver<P> {
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

        let title = format!(
            "VisualizerObserver, Eval: {}, Time: {}s",
            evaluations,
            computing_time.as_secs_f64()
        );
        let front: Vec<Vec<f64>> = population
            .iter()
            .map(|solution| solution.objectives().to_vec())
            .collect();

        self.plotter.render(&front, &title, self.replace)
    }
}

/// Builder for [`VisualizerObserver`].
#[derive(Debug)]
pub struct VisualizerObserverBuilder<P: Plotter> {
    plotter: P,
    title: String,
    reference_front: Option<Vec<Vec<f64>>>,
    replace: bool,
    display_frequency: usize,
}

impl<P: Plotter> VisualizerObserverBuilder<P> {
    /// Sets the title the plot is initialized with.
    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = value.into();
        self
    }

    /// Sets a reference front drawn alongside the population.
    pub fn reference_front(mut self, value: Vec<Vec<f64>>) -> Self {
        self.reference_front = Some(value);
        self
    }

    /// Sets whether each frame replaces the previous one.
    pub fn replace(mut self, value: bool) -> Self {
        self.replace = value;
        self
    }

    /// Sets how many evaluations pass between frames.
    pub fn display_frequency(mut self, value: usize) -> Self {
        self.display_frequency = value;
        self
    }

    /// Initializes the plotter and builds the observer.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::Configuration` if the display frequency is zero, or
    /// the plotter's error if initialization fails.
    pub fn build(self) -> Result<VisualizerObserver<P>> {
        if self.display_frequency == 0 {
            return Err(MoeaError::Configuration(
                "Display frequency must be at least 1".to_string(),
            ));
        }

        let mut plotter = self.plotter;
        plotter.initialize(&self.title, self.reference_front.as_deref())?;

        Ok(VisualizerObserver {
            plotter,
            display_frequency: self.display_frequency,
            replace: self.replace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::BinarySolution;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct RecordingPlotter {
        initialized: Vec<(String, Option<Vec<Vec<f64>>>)>,
        frames: Vec<(Vec<Vec<f64>>, String, bool)>,
    }

    impl Plotter for RecordingPlotter {
        fn initialize(&mut self, title: &str, reference_front: Option<&[Vec<f64>]>) -> Result<()> {
            self.initialized
                .push((title.to_string(), reference_front.map(|front| front.to_vec())));
            Ok(())
        }

        fn render(&mut self, front: &[Vec<f64>], title: &str, replace: bool) -> Result<()> {
            self.frames.push((front.to_vec(), title.to_string(), replace));
            Ok(())
        }
    }

    fn population() -> Vec<BinarySolution> {
        let mut solutions = vec![
            BinarySolution::new(vec![vec![true]], 2),
            BinarySolution::new(vec![vec![false]], 2),
        ];
        solutions[0].objectives_mut().copy_from_slice(&[0.0, 1.0]);
        solutions[1].objectives_mut().copy_from_slice(&[1.0, 0.0]);
        solutions
    }

    #[test]
    fn test_initializes_with_reference_front() {
        let reference = vec![vec![0.0, 1.0], vec![0.5, 0.5]];
        let observer = VisualizerObserver::builder(RecordingPlotter::default())
            .title("ZDT1")
            .reference_front(reference.clone())
            .build()
            .unwrap();

        assert_eq!(
            observer.plotter().initialized,
            vec![("ZDT1".to_string(), Some(reference))]
        );
        assert!(observer.plotter().frames.is_empty());
    }

    #[test]
    fn test_defaults() {
        let observer = VisualizerObserver::new(RecordingPlotter::default()).unwrap();
        assert_eq!(observer.display_frequency(), 1);
        assert!(observer.replace());
        assert_eq!(
            observer.plotter().initialized,
            vec![(DEFAULT_TITLE.to_string(), None)]
        );
    }

    #[test]
    fn test_renders_on_frequency() {
        let population = population();
        let mut observer = VisualizerObserver::builder(RecordingPlotter::default())
            .display_frequency(2)
            .replace(false)
            .build()
            .unwrap();

        for evaluations in 1..=4 {
            let event =
                ProgressEvent::complete(evaluations, &population, Duration::from_millis(500));
            observer.update(&event).unwrap();
        }

        let frames = &observer.plotter().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].0, vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        assert_eq!(frames[0].1, "VisualizerObserver, Eval: 2, Time: 0.5s");
        assert_eq!(frames[1].1, "VisualizerObserver, Eval: 4, Time: 0.5s");
        assert!(!frames[0].2);
    }

    #[test]
    fn test_rejects_zero_frequency() {
        let result = VisualizerObserver::builder(RecordingPlotter::default())
            .display_frequency(0)
            .build();
        assert!(result.unwrap_err().is_configuration());
    }

    #[test]
    fn test_missing_computing_time() {
        let population = population();
        let mut observer = VisualizerObserver::new(RecordingPlotter::default()).unwrap();
        let event = ProgressEvent::new()
            .with_evaluations(1)
            .with_population(&population);

        assert!(observer.update(&event).unwrap_err().is_contract_violation());
    }
}
