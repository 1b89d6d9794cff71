#[cfg(test)]
#[path = "../../tests/unit/termination/max_stagnation_test.rs"]
mod max_stagnation_test;

use super::*;

/// A termination criteria which is in terminated state when the best known fitness
/// has not improved for a given amount of generations.
pub struct MaxStagnation {
    limit: usize,
}

impl MaxStagnation {
    /// Creates a new instance of `MaxStagnation`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxStagnation {
    fn is_termination(&self, statistics: &SearchStatistics) -> bool {
        statistics.generations_since_improvement >= self.limit
    }

    fn estimate(&self, statistics: &SearchStatistics) -> Float {
        (statistics.generations_since_improvement as Float / self.limit as Float).min(1.)
    }
}
