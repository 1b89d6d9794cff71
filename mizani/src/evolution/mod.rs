//! The evolution module contains a bounded stochastic local search with elitism: a population
//! of candidate solutions is refined over generations by recombining and mutating survivors.

#[cfg(test)]
#[path = "../../tests/unit/evolution/evolution_test.rs"]
mod evolution_test;

use crate::termination::{SearchStatistics, Termination};
use crate::utils::{parallel_into_collect, Environment, Float, GenericResult, Random};
use std::sync::Arc;

mod elitism;
pub use self::elitism::Elitism;

/// An evaluated member of the population.
#[derive(Clone, Debug)]
pub struct Individual<G> {
    /// A domain-specific solution encoding.
    pub genome: G,
    /// A fitness value, higher is better.
    pub fitness: Float,
}

/// Provides domain-specific variation logic for the search: how to create, recombine,
/// mutate, and evaluate candidate solutions.
pub trait VariationOperator: Send + Sync {
    /// A domain-specific solution encoding type.
    type Genome: Clone + Send + Sync;

    /// Creates a random genome used to seed the initial population.
    fn create(&self, random: &dyn Random) -> Self::Genome;

    /// Combines two parent genomes into a new one.
    fn combine(&self, a: &Self::Genome, b: &Self::Genome, random: &dyn Random) -> Self::Genome;

    /// Applies a random perturbation to the genome.
    fn mutate(&self, genome: Self::Genome, random: &dyn Random) -> Self::Genome;

    /// Evaluates genome's fitness. Must be pure: evaluation runs in parallel and
    /// must not consume the random source.
    fn evaluate(&self, genome: &Self::Genome) -> Float;
}

/// Specifies evolution configuration.
#[derive(Clone, Debug)]
pub struct EvolutionConfig {
    /// Amount of individuals kept in the population.
    pub population_size: usize,
    /// Amount of generations between progress log statements, zero disables logging.
    pub log_interval: usize,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self { population_size: 50, log_interval: 0 }
    }
}

/// Provides a way to build evolution configuration.
#[derive(Default)]
pub struct EvolutionConfigBuilder {
    config: EvolutionConfig,
}

impl EvolutionConfigBuilder {
    /// Sets population size. Default is 50.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.config.population_size = population_size;
        self
    }

    /// Sets logging cadence in generations. Default is 0 (disabled).
    pub fn with_log_interval(mut self, log_interval: usize) -> Self {
        self.config.log_interval = log_interval;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> GenericResult<EvolutionConfig> {
        if self.config.population_size < 2 {
            return Err(format!("population size must be at least 2, got {}", self.config.population_size).into());
        }

        Ok(self.config)
    }
}

/// A result of the search: the best individual observed and final search statistics.
pub struct SearchOutcome<G> {
    /// The best individual observed across all generations.
    pub best: Individual<G>,
    /// Final search statistics.
    pub statistics: SearchStatistics,
}

/// A simple evolution algorithm which maintains a single population and improves it iteratively:
/// the fitter half survives each generation and is refilled by recombination and mutation.
pub struct Evolution<O>
where
    O: VariationOperator,
{
    operator: O,
    environment: Arc<Environment>,
    config: EvolutionConfig,
}

impl<O> Evolution<O>
where
    O: VariationOperator,
{
    /// Creates a new instance of `Evolution`.
    pub fn new(operator: O, environment: Arc<Environment>, config: EvolutionConfig) -> Self {
        Self { operator, environment, config }
    }

    /// Runs the search until the termination criteria or the environment quota is met.
    /// The best individual always survives a generation, so the result is the best
    /// candidate observed over the whole run.
    pub fn run(&self, termination: &dyn Termination) -> GenericResult<SearchOutcome<O::Genome>> {
        let random = self.environment.random.as_ref();
        let population_size = self.config.population_size;

        let genomes = (0..population_size).map(|_| self.operator.create(random)).collect::<Vec<_>>();
        let mut population = Elitism::new(population_size);
        population.add_all(self.evaluate(genomes));

        let mut statistics = SearchStatistics {
            best_fitness: population.best().map(|individual| individual.fitness).unwrap_or(Float::NEG_INFINITY),
            ..SearchStatistics::default()
        };

        loop {
            let is_terminated = termination.is_termination(&statistics);
            let is_quota_reached = self.environment.quota.as_ref().map_or(false, |quota| quota.is_reached());

            if is_terminated || is_quota_reached {
                break;
            }

            let survivors = (population_size / 2).max(1);
            population.retain_best(survivors);

            let offspring = (0..population_size - survivors)
                .map(|_| {
                    let parent_a = Self::select(&population, random);
                    let parent_b = Self::select(&population, random);
                    let child = self.operator.combine(parent_a, parent_b, random);
                    self.operator.mutate(child, random)
                })
                .collect::<Vec<_>>();

            let is_improved = population.add_all(self.evaluate(offspring));

            statistics.generation += 1;
            if is_improved {
                statistics.generations_since_improvement = 0;
                statistics.best_fitness =
                    population.best().map(|individual| individual.fitness).unwrap_or(statistics.best_fitness);
            } else {
                statistics.generations_since_improvement += 1;
            }

            if self.config.log_interval > 0 && statistics.generation % self.config.log_interval == 0 {
                (self.environment.logger)(&format!(
                    "[{}s] generation {}: best fitness {:.4}, termination estimate {:.2}",
                    statistics.time.elapsed_secs(),
                    statistics.generation,
                    statistics.best_fitness,
                    termination.estimate(&statistics)
                ));
            }
        }

        let best = population.best().cloned().ok_or("cannot get best individual: empty population")?;

        Ok(SearchOutcome { best, statistics })
    }

    fn select<'a>(population: &'a Elitism<O::Genome>, random: &dyn Random) -> &'a O::Genome {
        let index = random.uniform_int(0, population.size() as i32 - 1) as usize;
        population.ranked().nth(index).map(|individual| &individual.genome).expect("index within population size")
    }

    fn evaluate(&self, genomes: Vec<O::Genome>) -> Vec<Individual<O::Genome>> {
        parallel_into_collect(genomes, |genome| {
            let fitness = self.operator.evaluate(&genome);
            Individual { genome, fitness }
        })
    }
}
