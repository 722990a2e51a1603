//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::operators::MutationStrategy;
use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, tournament pressure, mutation, termination
/// conditions, and parallelism. Exactly one elite (the best individual so
/// far) is carried into every new generation.
///
/// # Defaults
///
/// ```
/// use u_loadplan::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// assert_eq!(config.tournament_size, 5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_loadplan::ga::{GaConfig, MutationStrategy};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(4)
///     .with_mutation_rate(0.2)
///     .with_mutation(MutationStrategy::PerIndividual)
///     .with_patience(25);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Larger populations increase diversity but slow down each generation.
    /// Typical range: 50–500.
    pub population_size: usize,

    /// Maximum number of generations. Zero returns the seeded best
    /// without running the loop.
    pub max_generations: usize,

    /// Number of distinct contestants per tournament.
    ///
    /// Must not exceed `population_size`.
    pub tournament_size: usize,

    /// Probability driving mutation (0.0–1.0). How it gates swaps depends on
    /// [`mutation`](Self::mutation).
    pub mutation_rate: f64,

    /// Mutation gating and sizing strategy.
    pub mutation: MutationStrategy,

    /// Number of consecutive generations without improvement before
    /// stopping.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub patience: usize,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Results are
    /// identical either way since evaluation draws no random numbers.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation, so the actual runtime may
    /// exceed this limit by one generation's worth of work.
    ///
    /// `None` disables time-based termination (the default).
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            tournament_size: 5,
            mutation_rate: 0.1,
            mutation: MutationStrategy::default(),
            patience: 10,
            parallel: cfg!(feature = "parallel"),
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation strategy.
    pub fn with_mutation(mut self, strategy: MutationStrategy) -> Self {
        self.mutation = strategy;
        self
    }

    /// Sets the patience (0 to disable early stopping).
    pub fn with_patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Preset matching the reference daily planning run.
    ///
    /// - Population: 200, Generations: 200
    /// - Mutation rate: 0.2, Patience: 25
    pub fn reference() -> Self {
        Self {
            population_size: 200,
            max_generations: 200,
            mutation_rate: 0.2,
            patience: 25,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::ZeroTournament);
        }
        if self.tournament_size > self.population_size {
            return Err(ConfigError::TournamentTooLarge {
                tournament_size: self.tournament_size,
                population_size: self.population_size,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }
}
