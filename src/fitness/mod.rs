//! Fitness scoring of a packing order.
//!
//! Fitness is a pure function of the item order, the fleet configuration and the
//! scoring policy: each evaluation packs onto its own fresh fleet, so
//! individuals can be scored independently and in any order.
//!
//! Two policies are available:
//!
//! - [`ScoringPolicy::ProfitSum`]: drops items with non-positive effective
//!   profit before packing and sums effective profit over what got loaded.
//! - [`ScoringPolicy::Triage`] (default): offers every item, rewards loading
//!   items that are late or about to become late, and charges the realized
//!   penalty of late items left behind.
//!
//! Higher fitness is better.

use crate::model::{FleetSpec, Item};
use crate::packing::{pack_admitted, Packing};

/// How a packing outcome is turned into a scalar score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoringPolicy {
    /// Sum of effective profit over loaded items. Items whose effective
    /// profit is zero or negative are never offered to a carrier.
    ProfitSum,

    /// Effective profit plus a one-day lookahead reward for every loaded
    /// item, minus the lateness penalty of every late leftover.
    ///
    /// Per loaded item with offset `d`:
    /// - `d >= 0`: `(d - 1)²` is added when `d - 1 < 0`, i.e. only `d = 0`
    ///   earns a bonus of 1
    /// - `d < 0`: the marginal growth of the penalty, `(|d| + 1)² - |d|²`
    ///
    /// Per leftover with `d < 0`: `d²` is subtracted.
    #[default]
    Triage,
}

impl ScoringPolicy {
    /// Whether `item` is offered to the fleet under this policy.
    pub fn admits(&self, item: &Item) -> bool {
        match self {
            ScoringPolicy::ProfitSum => item.effective_profit() > 0.0,
            ScoringPolicy::Triage => true,
        }
    }

    /// Packs `items` in order onto a fresh fleet, honoring [`admits`](Self::admits).
    pub fn pack<'a, I>(&self, items: I, fleet: &FleetSpec) -> Packing
    where
        I: IntoIterator<Item = &'a Item>,
    {
        pack_admitted(items, fleet, |item| self.admits(item))
    }

    /// Scores a packing outcome.
    pub fn score(&self, packing: &Packing) -> f64 {
        match self {
            ScoringPolicy::ProfitSum => packing.loaded().iter().map(Item::effective_profit).sum(),
            ScoringPolicy::Triage => {
                let reward: f64 = packing
                    .loaded()
                    .iter()
                    .map(|item| item.effective_profit() + lookahead_reward(item))
                    .sum();
                let backlog: f64 = packing.leftovers().iter().map(Item::late_penalty).sum();
                reward - backlog
            }
        }
    }
}

/// Triage bonus for loading `item` today rather than tomorrow.
pub fn lookahead_reward(item: &Item) -> f64 {
    let offset = item.deadline_offset();
    if offset >= 0 {
        let tomorrow = offset - 1;
        if tomorrow < 0 {
            let days = tomorrow.unsigned_abs() as f64;
            days * days
        } else {
            0.0
        }
    } else {
        let days = item.days_late() as f64;
        (days + 1.0) * (days + 1.0) - days * days
    }
}

/// Packs `items` in order under `policy` and returns the score.
///
/// # Examples
///
/// ```
/// use u_loadplan::fitness::{evaluate, ScoringPolicy};
/// use u_loadplan::model::{FleetSpec, Item};
///
/// let items = [Item::new(1, 10.0, 10.0, 100.0, 5)];
/// let fleet = FleetSpec::default().with_carrier_count(1);
/// assert_eq!(evaluate(&items, &fleet, ScoringPolicy::Triage), 100.0);
/// ```
pub fn evaluate<'a, I>(items: I, fleet: &FleetSpec, policy: ScoringPolicy) -> f64
where
    I: IntoIterator<Item = &'a Item>,
{
    policy.score(&policy.pack(items, fleet))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_carrier() -> FleetSpec {
        FleetSpec::default().with_carrier_count(1)
    }

    #[test]
    fn test_single_on_time_item() {
        let items = [Item::new(1, 10.0, 10.0, 100.0, 5)];
        assert_eq!(evaluate(&items, &one_carrier(), ScoringPolicy::Triage), 100.0);
        assert_eq!(evaluate(&items, &one_carrier(), ScoringPolicy::ProfitSum), 100.0);
    }

    #[test]
    fn test_late_item_loaded_and_left_behind() {
        let late = Item::new(1, 10.0, 10.0, 50.0, -3);
        assert_eq!(late.effective_profit(), 41.0);

        // Loaded: 41 + (4² - 3²) = 48
        let loaded = evaluate(&[late], &one_carrier(), ScoringPolicy::Triage);
        assert_eq!(loaded, 48.0);

        // Left behind: only the realized penalty counts.
        let tiny = one_carrier().with_weight_capacity(5.0);
        let unloaded = evaluate(&[late], &tiny, ScoringPolicy::Triage);
        assert_eq!(unloaded, -9.0);
        assert_eq!(evaluate(&[late], &tiny, ScoringPolicy::ProfitSum), 0.0);
    }

    #[test]
    fn test_lookahead_reward_values() {
        assert_eq!(lookahead_reward(&Item::new(1, 1.0, 1.0, 1.0, 5)), 0.0);
        assert_eq!(lookahead_reward(&Item::new(1, 1.0, 1.0, 1.0, 1)), 0.0);
        assert_eq!(lookahead_reward(&Item::new(1, 1.0, 1.0, 1.0, 0)), 1.0);
        assert_eq!(lookahead_reward(&Item::new(1, 1.0, 1.0, 1.0, -1)), 3.0);
        assert_eq!(lookahead_reward(&Item::new(1, 1.0, 1.0, 1.0, -3)), 7.0);
    }

    #[test]
    fn test_on_time_leftover_costs_nothing() {
        let items = [Item::new(1, 900.0, 10.0, 100.0, 2)];
        assert_eq!(evaluate(&items, &one_carrier(), ScoringPolicy::Triage), 0.0);
    }

    #[test]
    fn test_profit_sum_skips_unprofitable_items() {
        // Effective profit 10 - 25 = -15: never offered, so the second
        // item gets the only slot.
        let items = [
            Item::new(1, 100.0, 10.0, 10.0, -5),
            Item::new(2, 100.0, 10.0, 30.0, 0),
        ];
        let fleet = one_carrier().with_weight_capacity(100.0);

        let packing = ScoringPolicy::ProfitSum.pack(&items, &fleet);
        assert_eq!(packing.loaded().len(), 1);
        assert_eq!(packing.loaded()[0].id(), 2);
        assert_eq!(ScoringPolicy::ProfitSum.score(&packing), 30.0);

        // Triage offers the late item first and it takes the slot.
        let packing = ScoringPolicy::Triage.pack(&items, &fleet);
        assert_eq!(packing.loaded()[0].id(), 1);
        // -15 + (6² - 5²) = -4
        assert_eq!(ScoringPolicy::Triage.score(&packing), -4.0);
    }

    #[test]
    fn test_triage_prefers_clearing_backlog() {
        // Only one fits. Triage flips to the late item once it is late enough.
        let late = Item::new(1, 100.0, 10.0, 60.0, -4);
        let fresh = Item::new(2, 100.0, 10.0, 70.0, 3);
        let fleet = one_carrier().with_weight_capacity(100.0);

        let late_first = evaluate(&[late, fresh], &fleet, ScoringPolicy::Triage);
        let fresh_first = evaluate(&[fresh, late], &fleet, ScoringPolicy::Triage);
        // 4 days late: 44 + 9 = 53 loaded vs 70 - 16 = 54 left behind
        assert_eq!(late_first, 53.0);
        assert_eq!(fresh_first, 54.0);

        let later = Item::new(1, 100.0, 10.0, 60.0, -6);
        let late_first = evaluate(&[later, fresh], &fleet, ScoringPolicy::Triage);
        let fresh_first = evaluate(&[fresh, later], &fleet, ScoringPolicy::Triage);
        // 6 days late: 24 + 13 = 37 vs 70 - 36 = 34
        assert!(late_first > fresh_first);

        let raw_late_first = evaluate(&[later, fresh], &fleet, ScoringPolicy::ProfitSum);
        let raw_fresh_first = evaluate(&[fresh, later], &fleet, ScoringPolicy::ProfitSum);
        assert!(raw_fresh_first > raw_late_first);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let items: Vec<Item> = (0..30)
            .map(|i| Item::new(i, 50.0 + i as f64, 40.0, 100.0 - i as f64, 3 - (i as i64 % 7)))
            .collect();
        let fleet = FleetSpec::default().with_carrier_count(2);
        for policy in [ScoringPolicy::Triage, ScoringPolicy::ProfitSum] {
            let a = evaluate(&items, &fleet, policy);
            let b = evaluate(&items, &fleet, policy);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_default_policy_is_triage() {
        assert_eq!(ScoringPolicy::default(), ScoringPolicy::Triage);
    }
}
