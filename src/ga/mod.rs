//! Permutation Genetic Algorithm.
//!
//! A generic GA over permutations of `0..n`. Problems plug in by
//! implementing [`GaProblem`], which scores a permutation; the engine owns
//! population management, selection, crossover, mutation and termination.
//! Higher fitness is better.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, tournament size, patience)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best individual, its fitness and the per-generation history
//!
//! # Loop
//!
//! 1. Shuffle `population_size` independent permutations
//! 2. Seed the best-so-far with the first individual
//! 3. Per generation: evaluate, record the population maximum, update the
//!    best-so-far or count a stagnant generation, stop once patience runs
//!    out, then breed the next generation from one elite plus
//!    tournament → crossover → mutation children
//!
//! # Submodules
//!
//! - [`operators`]: Order crossover and swap mutation strategies
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use operators::MutationStrategy;
pub use runner::{GaResult, GaRunner};
pub use selection::tournament;
pub use types::{Chromosome, GaProblem};
