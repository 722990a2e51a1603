//! Load planning: genetic search over packing orders.
//!
//! [`LoadPlanner`] binds an item set, a fleet and a scoring policy into a
//! [`GaProblem`]. A permutation of item indices is a packing order; its
//! fitness is the policy's score of the first-fit packing in that order.

use crate::error::{ConfigError, Error};
use crate::fitness::ScoringPolicy;
use crate::ga::{GaConfig, GaProblem, GaResult, GaRunner};
use crate::ingest::{validate_records, ItemRecord};
use crate::model::{FleetSpec, Item};
use crate::packing::Packing;
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, instrument};

/// A load planning problem instance.
///
/// # Examples
///
/// ```
/// use u_loadplan::ga::GaConfig;
/// use u_loadplan::model::{FleetSpec, Item};
/// use u_loadplan::planner::LoadPlanner;
///
/// let items = vec![
///     Item::new(1, 300.0, 200.0, 120.0, 2),
///     Item::new(2, 500.0, 400.0, 90.0, -2),
///     Item::new(3, 400.0, 300.0, 150.0, 0),
/// ];
/// let planner = LoadPlanner::new(items, FleetSpec::default().with_carrier_count(1)).unwrap();
/// let plan = planner
///     .solve(&GaConfig::default().with_population_size(10).with_max_generations(20).with_seed(7))
///     .unwrap();
/// assert_eq!(plan.order.len(), 3);
/// assert_eq!(plan.fitness, planner.score_order(&plan.order));
/// ```
#[derive(Debug, Clone)]
pub struct LoadPlanner {
    items: Vec<Item>,
    fleet: FleetSpec,
    policy: ScoringPolicy,
}

impl LoadPlanner {
    /// Creates a planner using the default [`ScoringPolicy::Triage`].
    pub fn new(items: Vec<Item>, fleet: FleetSpec) -> Result<Self, ConfigError> {
        if items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        fleet.validate()?;
        Ok(Self {
            items,
            fleet,
            policy: ScoringPolicy::default(),
        })
    }

    /// Validates raw records and creates a planner from them.
    pub fn from_records<I>(records: I, fleet: FleetSpec) -> Result<Self, Error>
    where
        I: IntoIterator<Item = ItemRecord>,
    {
        let items = validate_records(records)?;
        Ok(Self::new(items, fleet)?)
    }

    /// Sets the scoring policy.
    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The base item sequence. Genes index into this slice.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn fleet(&self) -> &FleetSpec {
        &self.fleet
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Packs the items in the order given by `genes`.
    pub fn pack(&self, genes: &[usize]) -> Packing {
        self.policy
            .pack(genes.iter().map(|&g| &self.items[g]), &self.fleet)
    }

    /// Packs and scores an explicit item order.
    pub fn score_order(&self, order: &[Item]) -> f64 {
        self.policy.score(&self.policy.pack(order, &self.fleet))
    }

    /// Runs the genetic search.
    pub fn solve(&self, config: &GaConfig) -> Result<PlanResult, ConfigError> {
        let result = GaRunner::run(self, config)?;
        Ok(self.finish(result))
    }

    /// Runs the genetic search with a cancellation flag.
    pub fn solve_with_cancel(
        &self,
        config: &GaConfig,
        cancel: Arc<AtomicBool>,
    ) -> Result<PlanResult, ConfigError> {
        let result = GaRunner::run_with_cancel(self, config, Some(cancel))?;
        Ok(self.finish(result))
    }

    /// Runs the genetic search drawing randomness from `rng`.
    pub fn solve_with_rng<R: Rng>(
        &self,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<PlanResult, ConfigError> {
        let result = GaRunner::run_with_rng(self, config, rng)?;
        Ok(self.finish(result))
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(items = self.items.len(), policy = ?self.policy)
    )]
    fn finish(&self, result: GaResult) -> PlanResult {
        let order = result.best.genes.iter().map(|&g| self.items[g]).collect();
        let packing = self.pack(&result.best.genes);
        info!(
            fitness = result.best_fitness,
            loaded = packing.loaded().len(),
            leftovers = packing.leftovers().len(),
            "plan ready"
        );
        PlanResult {
            order,
            fitness: result.best_fitness,
            packing,
            fitness_history: result.fitness_history,
            generations: result.generations,
            stagnated: result.stagnated,
            cancelled: result.cancelled,
            timed_out: result.timed_out,
        }
    }
}

impl GaProblem for LoadPlanner {
    fn gene_count(&self) -> usize {
        self.items.len()
    }

    fn evaluate(&self, genes: &[usize]) -> f64 {
        self.policy.score(&self.pack(genes))
    }
}

/// Outcome of a planning run.
///
/// The packing of the best order is computed once and kept, so every
/// report reads the same structure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanResult {
    /// Best packing order found.
    pub order: Vec<Item>,

    /// Fitness of `order`.
    pub fitness: f64,

    /// Final packing of `order`.
    pub packing: Packing,

    /// Highest fitness in the population, one entry per generation run.
    pub fitness_history: Vec<f64>,

    /// Number of generations run.
    pub generations: usize,

    /// Whether the run stopped because patience ran out.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run hit the wall-clock time limit.
    pub timed_out: bool,
}

impl PlanResult {
    /// Items loaded in the final packing.
    pub fn loaded(&self) -> &[Item] {
        self.packing.loaded()
    }

    /// Items left behind by the final packing.
    pub fn leftovers(&self) -> &[Item] {
        self.packing.leftovers()
    }
}
