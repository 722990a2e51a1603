//! Item and carrier model.
//!
//! - [`Item`]: an immutable deliverable with weight, volume, profit and a
//!   deadline offset
//! - [`Carrier`]: a capacity-bounded unit that accumulates items during one
//!   packing pass
//! - [`FleetSpec`]: the fleet configuration a fresh set of carriers is built from

mod carrier;
mod item;

pub use carrier::{Carrier, FleetSpec};
pub use item::{Item, ItemId};
