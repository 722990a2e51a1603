//! First-fit packing of an ordered item sequence onto a fleet.
//!
//! The item order is the only input the search varies; this module turns an
//! order into a load outcome. Items are scanned in the given order and each
//! is offered to the carriers in fleet order, landing in the first carrier
//! where both weight and volume still fit. There is no backtracking: an item
//! refused by every carrier becomes a leftover for this pass.
//!
//! # Complexity
//! O(n · m) for n items and m carriers

use crate::model::{Carrier, FleetSpec, Item};

/// Outcome of one packing pass.
///
/// Built once per pass and read-only afterwards, so reports inspect the same
/// structure the score was computed from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Packing {
    carriers: Vec<Carrier>,
    loaded: Vec<Item>,
    leftovers: Vec<Item>,
}

impl Packing {
    /// Carriers in fleet order with their final loads.
    pub fn carriers(&self) -> &[Carrier] {
        &self.carriers
    }

    /// Items accepted by some carrier, in scan order.
    pub fn loaded(&self) -> &[Item] {
        &self.loaded
    }

    /// Items not loaded in this pass, in scan order.
    pub fn leftovers(&self) -> &[Item] {
        &self.leftovers
    }
}

/// Packs every item in order onto a fresh fleet built from `fleet`.
///
/// # Examples
///
/// ```
/// use u_loadplan::model::{FleetSpec, Item};
/// use u_loadplan::packing::pack;
///
/// let items = vec![
///     Item::new(1, 10.0, 10.0, 100.0, 5),
///     Item::new(2, 900.0, 10.0, 100.0, 5),
/// ];
/// let packing = pack(&items, &FleetSpec::default());
/// assert_eq!(packing.loaded().len(), 1);
/// assert_eq!(packing.leftovers()[0].id(), 2);
/// ```
pub fn pack<'a, I>(items: I, fleet: &FleetSpec) -> Packing
where
    I: IntoIterator<Item = &'a Item>,
{
    pack_admitted(items, fleet, |_| true)
}

/// Packs items in order, offering only those for which `admit` holds.
///
/// Items that are not admitted are never offered to a carrier and are
/// recorded as leftovers.
pub fn pack_admitted<'a, I, F>(items: I, fleet: &FleetSpec, mut admit: F) -> Packing
where
    I: IntoIterator<Item = &'a Item>,
    F: FnMut(&Item) -> bool,
{
    let mut carriers = fleet.build();
    let mut loaded = Vec::new();
    let mut leftovers = Vec::new();

    for item in items {
        let accepted = admit(item) && carriers.iter_mut().any(|c| c.try_load(item));
        if accepted {
            loaded.push(*item);
        } else {
            leftovers.push(*item);
        }
    }

    Packing {
        carriers,
        loaded,
        leftovers,
    }
}
