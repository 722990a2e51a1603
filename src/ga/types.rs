//! Core types for the permutation GA.
//!
//! [`GaProblem`] is the contract between the generic evolutionary engine and
//! a concrete scoring problem; [`Chromosome`] is one individual.

use rand::seq::SliceRandom;
use rand::Rng;

/// Defines a permutation optimization problem.
///
/// Individuals are permutations of `0..gene_count()`; the problem decides
/// what a permutation means and how good it is. Higher fitness is better.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel using rayon.
pub trait GaProblem: Send + Sync {
    /// Length of every permutation.
    fn gene_count(&self) -> usize;

    /// Scores a permutation. Must be a pure function of `genes`.
    fn evaluate(&self, genes: &[usize]) -> f64;

    /// Called at the end of each generation with the best fitness so far.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}

/// A candidate solution: a permutation plus its last computed fitness.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    /// Permutation of `0..n`.
    pub genes: Vec<usize>,

    /// Fitness, `f64::NEG_INFINITY` until evaluated.
    pub fitness: f64,
}

impl Chromosome {
    /// Wraps a permutation that has not been scored yet.
    pub fn unevaluated(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Independently shuffled permutation of `0..n`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut genes: Vec<usize> = (0..n).collect();
        genes.shuffle(rng);
        Self::unevaluated(genes)
    }
}
