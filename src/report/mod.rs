//! Read-only views of a finished plan for manifests and backlog reporting.
//!
//! Everything here is derived from the [`Packing`] stored in a
//! [`PlanResult`]; nothing repacks or rescores.

mod stats;

pub use stats::{HistoryCheckpoints, ItemStats, Moments, CHECKPOINT_GENERATIONS};

use crate::model::{Carrier, Item, ItemId};
use crate::packing::Packing;
use crate::planner::PlanResult;

/// Load summary of one carrier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarrierSummary {
    pub label: String,
    pub item_count: usize,
    pub weight: f64,
    pub weight_capacity: f64,
    pub volume: f64,
    pub volume_capacity: f64,
    /// Percent of weight capacity in use.
    pub weight_utilization: f64,
    /// Percent of volume capacity in use.
    pub volume_utilization: f64,
    /// Sum of effective profit on board.
    pub profit: f64,
}

impl From<&Carrier> for CarrierSummary {
    fn from(c: &Carrier) -> Self {
        Self {
            label: c.label(),
            item_count: c.items().len(),
            weight: c.current_weight(),
            weight_capacity: c.weight_capacity(),
            volume: c.current_volume(),
            volume_capacity: c.volume_capacity(),
            weight_utilization: c.weight_utilization(),
            volume_utilization: c.volume_utilization(),
            profit: c.effective_profit(),
        }
    }
}

/// One row of a loading manifest: which item goes on which carrier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManifestLine {
    pub carrier: String,
    pub item_id: ItemId,
    pub weight: f64,
    pub volume: f64,
    pub effective_profit: f64,
}

/// Builds manifest rows in fleet order, then pack order within a carrier.
pub fn manifest(packing: &Packing) -> Vec<ManifestLine> {
    packing
        .carriers()
        .iter()
        .flat_map(|c| {
            let label = c.label();
            c.items().iter().map(move |item| ManifestLine {
                carrier: label.clone(),
                item_id: item.id(),
                weight: item.weight(),
                volume: item.volume(),
                effective_profit: item.effective_profit(),
            })
        })
        .collect()
}

/// What stays in the warehouse.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeftoverSummary {
    pub count: usize,
    /// Base profit of every leftover, before lateness penalties.
    pub missed_profit: f64,
    /// Sum of lateness penalties of late leftovers.
    pub backlog_penalty: f64,
}

impl LeftoverSummary {
    pub fn of(leftovers: &[Item]) -> Self {
        Self {
            count: leftovers.len(),
            missed_profit: leftovers.iter().map(Item::profit).sum(),
            backlog_penalty: leftovers.iter().map(Item::late_penalty).sum(),
        }
    }
}

/// End-of-day result: delivered profit against the backlog penalty.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySummary {
    pub delivered_profit: f64,
    pub backlog_penalty: f64,
    pub net: f64,
}

/// Full report over a finished plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanReport {
    pub carriers: Vec<CarrierSummary>,
    pub manifest: Vec<ManifestLine>,
    pub leftovers: LeftoverSummary,
    pub delivered_stats: Option<ItemStats>,
    pub leftover_stats: Option<ItemStats>,
    pub history: HistoryCheckpoints,
    pub day: DaySummary,
}

impl PlanReport {
    pub fn new(plan: &PlanResult) -> Self {
        let packing = &plan.packing;
        let carriers: Vec<CarrierSummary> =
            packing.carriers().iter().map(CarrierSummary::from).collect();
        let leftovers = LeftoverSummary::of(packing.leftovers());
        let delivered_profit: f64 = carriers.iter().map(|c| c.profit).sum();

        Self {
            manifest: manifest(packing),
            delivered_stats: ItemStats::of(packing.loaded()),
            leftover_stats: ItemStats::of(packing.leftovers()),
            history: HistoryCheckpoints::of(&plan.fitness_history),
            day: DaySummary {
                delivered_profit,
                backlog_penalty: leftovers.backlog_penalty,
                net: delivered_profit - leftovers.backlog_penalty,
            },
            carriers,
            leftovers,
        }
    }
}
