//! Typed item records and validation.
//!
//! Readers of delimited files or other sources produce [`ItemRecord`]s;
//! [`validate_records`] turns them into [`Item`]s, rejecting records the
//! planner must never see.

use crate::error::DataError;
use crate::model::{Item, ItemId};
use std::collections::HashSet;

/// One raw item record as supplied by an item source.
///
/// Field order follows the source layout: id, weight, profit, deadline
/// offset, volume.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRecord {
    pub id: ItemId,
    pub weight: f64,
    pub profit: f64,
    pub deadline_offset: i64,
    pub volume: f64,
}

impl ItemRecord {
    pub fn new(id: ItemId, weight: f64, profit: f64, deadline_offset: i64, volume: f64) -> Self {
        Self {
            id,
            weight,
            profit,
            deadline_offset,
            volume,
        }
    }
}

impl TryFrom<ItemRecord> for Item {
    type Error = DataError;

    fn try_from(r: ItemRecord) -> Result<Self, Self::Error> {
        for (field, value) in [("weight", r.weight), ("volume", r.volume), ("profit", r.profit)] {
            if !value.is_finite() {
                return Err(DataError::NonFinite { id: r.id, field });
            }
        }
        if r.weight < 0.0 {
            return Err(DataError::NegativeWeight {
                id: r.id,
                weight: r.weight,
            });
        }
        if r.volume < 0.0 {
            return Err(DataError::NegativeVolume {
                id: r.id,
                volume: r.volume,
            });
        }
        Ok(Item::new(
            r.id,
            r.weight,
            r.volume,
            r.profit,
            r.deadline_offset,
        ))
    }
}

/// Converts records into items, keeping source order.
///
/// Fails on the first record that is malformed or repeats an earlier id.
pub fn validate_records<I>(records: I) -> Result<Vec<Item>, DataError>
where
    I: IntoIterator<Item = ItemRecord>,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .map(|record| {
            if !seen.insert(record.id) {
                return Err(DataError::DuplicateId(record.id));
            }
            Item::try_from(record)
        })
        .collect()
}
