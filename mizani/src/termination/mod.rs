//! The termination module contains logic which defines termination criteria for the search,
//! e.g. when to stop refining a population of candidate solutions.

use crate::utils::{compare_floats, Float, Timer};

/// Keeps track of the search progress used to decide upon termination.
#[derive(Clone)]
pub struct SearchStatistics {
    /// A number which specifies refinement generation.
    pub generation: usize,
    /// Elapsed time since search start.
    pub time: Timer,
    /// Best known fitness value, higher is better.
    pub best_fitness: Float,
    /// Amount of generations since the best known fitness improved.
    pub generations_since_improvement: usize,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self {
            generation: 0,
            time: Timer::start(),
            best_fitness: Float::NEG_INFINITY,
            generations_since_improvement: 0,
        }
    }
}

/// A trait which specifies criteria when the search should stop looking for improved solutions.
pub trait Termination: Send + Sync {
    /// Returns true if termination condition is met.
    fn is_termination(&self, statistics: &SearchStatistics) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, statistics: &SearchStatistics) -> Float;
}

mod max_generation;
pub use self::max_generation::MaxGeneration;

mod max_stagnation;
pub use self::max_stagnation::MaxStagnation;

mod max_time;
pub use self::max_time::MaxTime;

/// A termination criteria which encapsulates multiple termination criteria.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination>>) -> Self {
        Self { terminations }
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&self, statistics: &SearchStatistics) -> bool {
        self.terminations.iter().any(|t| t.is_termination(statistics))
    }

    fn estimate(&self, statistics: &SearchStatistics) -> Float {
        self.terminations.iter().map(|t| t.estimate(statistics)).max_by(|a, b| compare_floats(*a, *b)).unwrap_or(0.)
    }
}
