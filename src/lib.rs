//! Genetic load planning.
//!
//! Assigns deliverable items (weight, volume, profit, deadline offset) to a
//! fixed fleet of capacity-bounded carriers so as to maximize net value
//! under quadratic lateness penalties. The assignment is searched
//! approximately: a genetic algorithm evolves permutations of the items, and
//! each permutation is turned into a load by a deterministic first-fit
//! packing pass.
//!
//! - **Model** ([`model`]): items, carriers and fleet configuration.
//! - **Packing** ([`packing`]): first-fit assignment of an item order onto a
//!   fresh fleet.
//! - **Fitness** ([`fitness`]): profit-sum and triage scoring policies.
//! - **Genetic Algorithm** ([`ga`]): tournament selection, order crossover,
//!   swap mutation, single-elite replacement and patience-based stopping.
//! - **Planner** ([`planner`]): binds items, fleet and policy into a
//!   searchable problem and returns the best plan.
//! - **Reporting** ([`report`]): manifests, carrier utilization, backlog and
//!   convergence summaries of a finished plan.
//! - **Ingestion** ([`ingest`]): typed item records and their validation.
//!
//! # Example
//!
//! ```
//! use u_loadplan::ga::GaConfig;
//! use u_loadplan::model::{FleetSpec, Item};
//! use u_loadplan::planner::LoadPlanner;
//! use u_loadplan::report::PlanReport;
//!
//! let items: Vec<Item> = (0..30)
//!     .map(|i| Item::new(i, 150.0, 120.0, 100.0 + i as f64, (i as i64 % 9) - 4))
//!     .collect();
//! let planner = LoadPlanner::new(items, FleetSpec::default().with_carrier_count(2))?;
//! let plan = planner.solve(&GaConfig::default().with_max_generations(30).with_seed(42))?;
//! let report = PlanReport::new(&plan);
//! assert_eq!(report.manifest.len(), plan.loaded().len());
//! # Ok::<(), u_loadplan::Error>(())
//! ```

pub mod error;
pub mod fitness;
pub mod ga;
pub mod ingest;
pub mod model;
pub mod packing;
pub mod planner;
pub mod report;

pub use error::{ConfigError, DataError, Error};
