//! Carriers and fleet configuration.

use super::item::Item;
use crate::error::ConfigError;

/// Fleet configuration: how many carriers and how much each can hold.
///
/// All carriers in a fleet share the same capacities. A fresh set of
/// carriers is built from the `FleetSpec` for every packing pass, so no load state
/// ever leaks between evaluations.
///
/// # Defaults
///
/// ```
/// use u_loadplan::model::FleetSpec;
///
/// let fleet = FleetSpec::default();
/// assert_eq!(fleet.carrier_count, 10);
/// assert_eq!(fleet.weight_capacity, 800.0);
/// assert_eq!(fleet.volume_capacity, 1000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetSpec {
    /// Number of carriers in the fleet.
    pub carrier_count: usize,

    /// Maximum total weight per carrier.
    pub weight_capacity: f64,

    /// Maximum total volume per carrier.
    pub volume_capacity: f64,
}

impl Default for FleetSpec {
    fn default() -> Self {
        Self {
            carrier_count: 10,
            weight_capacity: 800.0,
            volume_capacity: 1000.0,
        }
    }
}

impl FleetSpec {
    /// Sets the number of carriers.
    pub fn with_carrier_count(mut self, n: usize) -> Self {
        self.carrier_count = n;
        self
    }

    /// Sets the per-carrier weight capacity.
    pub fn with_weight_capacity(mut self, capacity: f64) -> Self {
        self.weight_capacity = capacity;
        self
    }

    /// Sets the per-carrier volume capacity.
    pub fn with_volume_capacity(mut self, capacity: f64) -> Self {
        self.volume_capacity = capacity;
        self
    }

    /// Validates the fleet configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carrier_count == 0 {
            return Err(ConfigError::NoCarriers);
        }
        // `!(x > 0.0)` also rejects NaN.
        if !(self.weight_capacity > 0.0) {
            return Err(ConfigError::NonPositiveWeightCapacity(self.weight_capacity));
        }
        if !(self.volume_capacity > 0.0) {
            return Err(ConfigError::NonPositiveVolumeCapacity(self.volume_capacity));
        }
        Ok(())
    }

    /// Builds a fresh, empty fleet. Carrier ids are 1-based in fleet order.
    pub fn build(&self) -> Vec<Carrier> {
        (1..=self.carrier_count)
            .map(|id| Carrier::new(id, self.weight_capacity, self.volume_capacity))
            .collect()
    }
}

/// A capacity-bounded carrier.
///
/// Running totals only grow during a packing pass; an item is accepted only
/// when both totals stay within capacity afterwards, so
/// `current_weight <= weight_capacity` and `current_volume <= volume_capacity`
/// hold at all times.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Carrier {
    id: usize,
    weight_capacity: f64,
    volume_capacity: f64,
    current_weight: f64,
    current_volume: f64,
    items: Vec<Item>,
}

impl Carrier {
    /// Creates an empty carrier.
    pub fn new(id: usize, weight_capacity: f64, volume_capacity: f64) -> Self {
        Self {
            id,
            weight_capacity,
            volume_capacity,
            current_weight: 0.0,
            current_volume: 0.0,
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Human-readable label used by manifests.
    pub fn label(&self) -> String {
        format!("Carrier_{}", self.id)
    }

    pub fn weight_capacity(&self) -> f64 {
        self.weight_capacity
    }

    pub fn volume_capacity(&self) -> f64 {
        self.volume_capacity
    }

    pub fn current_weight(&self) -> f64 {
        self.current_weight
    }

    pub fn current_volume(&self) -> f64 {
        self.current_volume
    }

    /// Accepted items in pack order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Whether `item` fits into the remaining capacity. Exact fills are accepted.
    pub fn fits(&self, item: &Item) -> bool {
        self.current_weight + item.weight() <= self.weight_capacity
            && self.current_volume + item.volume() <= self.volume_capacity
    }

    /// Loads `item` if it fits. Returns whether it was accepted.
    pub fn try_load(&mut self, item: &Item) -> bool {
        if !self.fits(item) {
            return false;
        }
        self.current_weight += item.weight();
        self.current_volume += item.volume();
        self.items.push(*item);
        true
    }

    /// Loaded weight as a percentage of capacity.
    pub fn weight_utilization(&self) -> f64 {
        self.current_weight / self.weight_capacity * 100.0
    }

    /// Loaded volume as a percentage of capacity.
    pub fn volume_utilization(&self) -> f64 {
        self.current_volume / self.volume_capacity * 100.0
    }

    /// Sum of effective profit over the loaded items.
    pub fn effective_profit(&self) -> f64 {
        self.items.iter().map(Item::effective_profit).sum()
    }
}
