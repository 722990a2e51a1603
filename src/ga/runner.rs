//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::operators::{is_permutation, mutate, order_crossover};
use super::selection::tournament;
use super::types::{Chromosome, GaProblem};
use crate::error::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Result of a GA optimization run.
///
/// Contains the best solution found, along with statistics about the
/// evolutionary process.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best individual found during the entire run.
    pub best: Chromosome,

    /// Best fitness value (same as `best.fitness`).
    pub best_fitness: f64,

    /// Number of generations actually run.
    pub generations: usize,

    /// Whether the run stopped because patience ran out.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run hit the wall-clock time limit.
    pub timed_out: bool,

    /// Highest fitness in the population, one entry per generation run.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// The random source is seeded from `config.seed`, or from entropy when
    /// no seed is set.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult, ConfigError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops
    /// before the next generation and returns the best solution found so far.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, ConfigError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::evolve(problem, config, &mut rng, cancel)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, ConfigError> {
        Self::evolve(problem, config, rng, None)
    }

    #[instrument(
        level = "info",
        name = "ga_run",
        skip_all,
        fields(
            genes = problem.gene_count(),
            population_size = config.population_size,
            max_generations = config.max_generations,
            patience = config.patience,
            mutation_rate = config.mutation_rate,
        )
    )]
    fn evolve<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, ConfigError> {
        config.validate()?;
        let n = problem.gene_count();
        if n == 0 {
            return Err(ConfigError::NoItems);
        }

        let started = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);

        // 1. Initialize population
        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::random(n, rng))
            .collect();

        // 2. Seed best with the first individual
        let mut best = population[0].clone();
        best.fitness = problem.evaluate(&best.genes);

        let mut fitness_history = Vec::with_capacity(config.max_generations);
        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;
        let mut timed_out = false;

        info!(seed_fitness = best.fitness, "starting evolution");

        // 3. Evolutionary loop
        for gen in 0..config.max_generations {
            if cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                info!(generation = gen, "cancelled");
                break;
            }
            if time_limit.is_some_and(|limit| started.elapsed() >= limit) {
                timed_out = true;
                info!(generation = gen, "time limit reached");
                break;
            }

            // The elite in slot 0 keeps its fitness from the previous generation.
            let fresh_from = if gen == 0 { 0 } else { 1 };
            evaluate_population(problem, &mut population[fresh_from..], config.parallel);

            let (gen_best_idx, gen_best) = find_best(&population);
            fitness_history.push(gen_best);

            if gen_best > best.fitness {
                best = population[gen_best_idx].clone();
                stagnation_counter = 0;
                info!(generation = gen, fitness = gen_best, "new best fitness");
            } else {
                stagnation_counter += 1;
            }

            problem.on_generation(gen, best.fitness);
            debug!(
                generation = gen,
                generation_best = gen_best,
                best = best.fitness,
                stagnation = stagnation_counter,
                "generation complete"
            );

            if config.patience > 0 && stagnation_counter >= config.patience {
                stagnated = true;
                info!(
                    generation = gen,
                    patience = config.patience,
                    "no improvement, stopping early"
                );
                break;
            }

            if gen + 1 < config.max_generations {
                population = breed(&population, &best, config, rng);
            }
        }

        info!(
            best_fitness = best.fitness,
            generations = fitness_history.len(),
            "evolution finished"
        );

        Ok(GaResult {
            best_fitness: best.fitness,
            best,
            generations: fitness_history.len(),
            stagnated,
            cancelled,
            timed_out,
            fitness_history,
        })
    }
}

/// Build the next generation: the elite first, then tournament-selected,
/// crossed and mutated children until the population is full.
fn breed<R: Rng>(
    population: &[Chromosome],
    elite: &Chromosome,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Chromosome> {
    let n = elite.genes.len();
    let fitness: Vec<f64> = population.iter().map(|c| c.fitness).collect();

    let mut next_gen = Vec::with_capacity(config.population_size);
    next_gen.push(elite.clone());

    while next_gen.len() < config.population_size {
        let p1 = tournament(&fitness, config.tournament_size, rng);
        let p2 = tournament(&fitness, config.tournament_size, rng);

        let mut genes = order_crossover(&population[p1].genes, &population[p2].genes, rng);
        mutate(&mut genes, config.mutation_rate, config.mutation, rng);
        debug_assert!(is_permutation(&genes, n), "offspring is not a permutation");

        next_gen.push(Chromosome::unevaluated(genes));
    }
    next_gen
}

/// Evaluate all individuals in the slice.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [Chromosome], parallel: bool) {
    if parallel {
        population.par_iter_mut().for_each(|c| {
            c.fitness = problem.evaluate(&c.genes);
        });
    } else {
        for c in population.iter_mut() {
            c.fitness = problem.evaluate(&c.genes);
        }
    }
}

/// Evaluate all individuals in the slice.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [Chromosome], _parallel: bool) {
    for c in population.iter_mut() {
        c.fitness = problem.evaluate(&c.genes);
    }
}

/// Index and fitness of the first individual with the highest fitness.
fn find_best(population: &[Chromosome]) -> (usize, f64) {
    population
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(best_idx, best), (i, c)| {
            if c.fitness > best {
                (i, c.fitness)
            } else {
                (best_idx, best)
            }
        })
}

// ============================================================================
// Tests
// ============================================================================
