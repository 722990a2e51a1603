//! Error types.
//!
//! Configuration problems are caught before a run starts and are reported
//! through [`ConfigError`]. Malformed item records are rejected at ingestion
//! with a [`DataError`]. Nothing inside the generational loop returns an
//! error: a run that fails to improve simply stops on stagnation.

use crate::model::ItemId;

/// Invalid fleet, item set, or search configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("item set is empty")]
    NoItems,
    #[error("fleet has no carriers")]
    NoCarriers,
    #[error("weight capacity must be positive, got {0}")]
    NonPositiveWeightCapacity(f64),
    #[error("volume capacity must be positive, got {0}")]
    NonPositiveVolumeCapacity(f64),
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("tournament_size must be at least 1")]
    ZeroTournament,
    #[error("tournament_size {tournament_size} exceeds population_size {population_size}")]
    TournamentTooLarge {
        tournament_size: usize,
        population_size: usize,
    },
    #[error("mutation_rate must lie in [0, 1], got {0}")]
    MutationRateOutOfRange(f64),
    #[error("time_limit_ms must be positive or None")]
    ZeroTimeLimit,
}

/// A malformed item record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("duplicate item id {0}")]
    DuplicateId(ItemId),
    #[error("item {id}: negative weight {weight}")]
    NegativeWeight { id: ItemId, weight: f64 },
    #[error("item {id}: negative volume {volume}")]
    NegativeVolume { id: ItemId, volume: f64 },
    #[error("item {id}: {field} is not finite")]
    NonFinite { id: ItemId, field: &'static str },
}

/// Any error surfaced by this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("DataError: {0}")]
    Data(#[from] DataError),
}
