//! # Observers
//!
//! A publish/subscribe protocol that lets an optimization loop report progress
//! without knowing who consumes it. The loop owns an [`Observable`] and calls
//! [`Observable::notify_all`] once per iteration with a [`ProgressEvent`];
//! every registered [`Observer`] receives the event through
//! [`Observer::update`].
//!
//! Events are explicit structs rather than open key/value bags. Each field is
//! optional so a loop may publish a subset, and each observer declares the
//! fields it needs through [`Observer::required_fields`]. [`DefaultObservable`]
//! compares those against the fields the loop promises to publish and refuses
//! the registration when they do not match, so wiring mistakes surface before
//! the run starts. Reading an absent field during `update` returns
//! [`MoeaError::ContractViolation`], which is propagated out of `notify_all`.
//!
//! Notification is synchronous and sequential: `notify_all` does not return
//! until every observer has run, and a slow observer stalls the loop.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use moealg::observer::{BasicObserver, DefaultObservable, Observable, ProgressEvent};
//! use moealg::solution::{Bounds, FloatSolution};
//!
//! let bounds = Bounds::uniform(1, 0.0, 1.0).unwrap();
//! let population = vec![FloatSolution::new(vec![0.5], bounds, 2).unwrap()];
//!
//! let mut observable: DefaultObservable<FloatSolution> = DefaultObservable::new();
//! observable.register(Box::new(BasicObserver::new(10).unwrap())).unwrap();
//!
//! let event = ProgressEvent::complete(100, &population, Duration::from_millis(1200));
//! observable.notify_all(&event).unwrap();
//! ```
pub mod basic;
pub mod front_writer;
pub mod visualizer;

use std::fmt;
use std::time::Duration;

use crate::{
    error::{MoeaError, Result},
    solution::Solution,
};

/// A named field of a [`ProgressEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    /// The iteration counter.
    Evaluations,
    /// The current population.
    Population,
    /// Elapsed computing time.
    ComputingTime,
}

impl EventField {
    const ALL: [EventField; 3] = [
        EventField::Evaluations,
        EventField::Population,
        EventField::ComputingTime,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EventField::Evaluations => "evaluations",
            EventField::Population => "population",
            EventField::ComputingTime => "computing time",
        }
    }

    fn bit(&self) -> u8 {
        match self {
            EventField::Evaluations => 1,
            EventField::Population => 1 << 1,
            EventField::ComputingTime => 1 << 2,
        }
    }
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`EventField`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldSet(u8);

impl FieldSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        EventField::ALL.into_iter().collect()
    }

    pub fn with(self, field: EventField) -> Self {
        Self(self.0 | field.bit())
    }

    pub fn contains(&self, field: EventField) -> bool {
        self.0 & field.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Fields in `self` that `other` lacks.
    pub fn missing_from(&self, other: &FieldSet) -> Vec<EventField> {
        self.iter().filter(|field| !other.contains(*field)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = EventField> + '_ {
        EventField::ALL
            .into_iter()
            .filter(move |field| self.contains(*field))
    }
}

impl FromIterator<EventField> for FieldSet {
    fn from_iter<I: IntoIterator<Item = EventField>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FieldSet::empty(), |set, field| set.with(field))
    }
}

fn missing(field: EventField) -> MoeaError {
    MoeaError::ContractViolation(format!(
        "progress event does not carry the '{}' field",
        field
    ))
}

/// Progress published by the optimization loop once per iteration.
///
/// The event borrows the population; observers that need it beyond their
/// `update` call must copy it.
#[derive(Debug)]
pub struct ProgressEvent<'a, S> {
    evaluations: Option<usize>,
    population: Option<&'a [S]>,
    computing_time: Option<Duration>,
}

impl<'a, S> ProgressEvent<'a, S> {
    /// Layout version of the event structure.
    pub const VERSION: u32 = 1;

    /// Creates an event with no fields set.
    pub fn new() -> Self {
        Self {
            evaluations: None,
            population: None,
            computing_time: None,
        }
    }

    /// Creates an event carrying every field.
    pub fn complete(evaluations: usize, population: &'a [S], computing_time: Duration) -> Self {
        Self::new()
            .with_evaluations(evaluations)
            .with_population(population)
            .with_computing_time(computing_time)
    }

    pub fn with_evaluations(mut self, evaluations: usize) -> Self {
        self.evaluations = Some(evaluations);
        self
    }

    pub fn with_population(mut self, population: &'a [S]) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_computing_time(mut self, computing_time: Duration) -> Self {
        self.computing_time = Some(computing_time);
        self
    }

    /// The iteration counter.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::ContractViolation` if the field was not published.
    pub fn evaluations(&self) -> Result<usize> {
        self.evaluations
            .ok_or_else(|| missing(EventField::Evaluations))
    }

    /// The current population.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::ContractViolation` if the field was not published.
    pub fn population(&self) -> Result<&'a [S]> {
        self.population
            .ok_or_else(|| missing(EventField::Population))
    }

    /// Elapsed computing time.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::ContractViolation` if the field was not published.
    pub fn computing_time(&self) -> Result<Duration> {
        self.computing_time
            .ok_or_else(|| missing(EventField::ComputingTime))
    }

    /// The fields this event carries.
    pub fn fields(&self) -> FieldSet {
        let mut fields = FieldSet::empty();
        if self.evaluations.is_some() {
            fields = fields.with(EventField::Evaluations);
        }
        if self.population.is_some() {
            fields = fields.with(EventField::Population);
        }
        if self.computing_time.is_some() {
            fields = fields.with(EventField::ComputingTime);
        }
        fields
    }
}

impl<S> Default for ProgressEvent<'_, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for ProgressEvent<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for ProgressEvent<'_, S> {}

/// A consumer of progress events.
pub trait Observer<S: Solution> {
    /// The event fields `update` reads.
    fn required_fields(&self) -> FieldSet;

    /// Handles one progress event.
    ///
    /// Fields beyond [`Observer::required_fields`] are ignored. An absent
    /// required field is a contract violation and must be returned, not masked.
    fn update(&mut self, event: &ProgressEvent<'_, S>) -> Result<()>;
}

/// Handle returned by [`Observable::register`], used to deregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// The publishing side of the protocol.
pub trait Observable<S: Solution> {
    /// Adds an observer.
    ///
    /// # Errors
    ///
    /// Returns `MoeaError::ContractViolation` if the observer requires event
    /// fields this observable does not publish.
    fn register(&mut self, observer: Box<dyn Observer<S>>) -> Result<ObserverId>;

    /// Removes an observer, handing it back if it was registered.
    fn deregister(&mut self, id: ObserverId) -> Option<Box<dyn Observer<S>>>;

    /// Delivers `event` to every registered observer in turn.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an observer; observers after it do
    /// not see the event.
    fn notify_all(&mut self, event: &ProgressEvent<'_, S>) -> Result<()>;
}

/// A list of observers notified in registration order.
///
/// The observer list cannot change while `notify_all` runs: both operations
/// need `&mut self`. Observers that need to alter the registration set must
/// hand the request back to the loop and let it apply the change between
/// notifications.
pub struct DefaultObservable<S: Solution> {
    published: FieldSet,
    observers: Vec<(ObserverId, Box<dyn Observer<S>>)>,
    next_id: u64,
}

impl<S: Solution> DefaultObservable<S> {
    /// Creates an observable that publishes every event field.
    pub fn new() -> Self {
        Self::with_published_fields(FieldSet::all())
    }

    /// Creates an observable that publishes only `published`.
    pub fn with_published_fields(published: FieldSet) -> Self {
        Self {
            published,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn published_fields(&self) -> FieldSet {
        self.published
    }

    pub fn number_of_observers(&self) -> usize {
        self.observers.len()
    }
}

impl<S: Solution> Default for DefaultObservable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Solution> Observable<S> for DefaultObservable<S> {
    fn register(&mut self, observer: Box<dyn Observer<S>>) -> Result<ObserverId> {
        let missing = observer.required_fields().missing_from(&self.published);
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(EventField::name).collect();
            return Err(MoeaError::ContractViolation(format!(
                "observer requires unpublished event fields: {}",
                names.join(", ")
            )));
        }

        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        Ok(id)
    }

    fn deregister(&mut self, id: ObserverId) -> Option<Box<dyn Observer<S>>> {
        let position = self
            .observers
            .iter()
            .position(|(registered, _)| *registered == id)?;
        Some(self.observers.remove(position).1)
    }

    fn notify_all(&mut self, event: &ProgressEvent<'_, S>) -> Result<()> {
        for (_, observer) in self.observers.iter_mut() {
            observer.update(event)?;
        }
        Ok(())
    }
}

pub use basic::{BasicObserver, LogSink, TracingSink};
pub use front_writer::WriteFrontToFileObserver;
pub use visualizer::{Plotter, VisualizerObserver, VisualizerObserverBuilder};
