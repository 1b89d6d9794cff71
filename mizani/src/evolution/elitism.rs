#[cfg(test)]
#[path = "../../tests/unit/evolution/elitism_test.rs"]
mod elitism_test;

use super::Individual;
use crate::utils::compare_floats;

/// A simple evolution aware population which keeps a predefined amount of best known
/// individuals, ordered from best to worst. Ties keep insertion order, so earlier
/// candidates win over equally fit later ones.
pub struct Elitism<G> {
    max_size: usize,
    individuals: Vec<Individual<G>>,
}

impl<G> Elitism<G> {
    /// Creates a new instance of `Elitism`.
    pub fn new(max_size: usize) -> Self {
        assert!(max_size > 0);
        Self { max_size, individuals: vec![] }
    }

    /// Adds all individuals into the population, keeping it sorted and truncated to max size.
    /// Returns true if the best known fitness has improved.
    pub fn add_all(&mut self, individuals: Vec<Individual<G>>) -> bool {
        let best_known_fitness = self.individuals.first().map(|individual| individual.fitness);

        self.individuals.extend(individuals);
        self.sort();
        self.individuals.truncate(self.max_size);

        match (best_known_fitness, self.individuals.first()) {
            (Some(best_known), Some(new_best)) => new_best.fitness > best_known,
            (None, Some(_)) => true,
            _ => false,
        }
    }

    /// Adds a single individual into the population.
    pub fn add(&mut self, individual: Individual<G>) -> bool {
        self.add_all(vec![individual])
    }

    /// Returns the best individual.
    pub fn best(&self) -> Option<&Individual<G>> {
        self.individuals.first()
    }

    /// Returns individuals ordered from the best to the worst.
    pub fn ranked(&self) -> impl Iterator<Item = &Individual<G>> + '_ {
        self.individuals.iter()
    }

    /// Shrinks the population to the given amount of best individuals.
    pub fn retain_best(&mut self, count: usize) {
        self.individuals.truncate(count);
    }

    /// Returns population size.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    fn sort(&mut self) {
        self.individuals.sort_by(|a, b| compare_floats(b.fitness, a.fitness));
    }
}
