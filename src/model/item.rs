//! Deliverable items.

/// Unique identity of an item within one run.
pub type ItemId = u64;

/// A deliverable item.
///
/// Immutable after construction. The deadline offset counts days of slack:
/// zero or positive means the item is still on time, negative means it is
/// already that many days late.
///
/// # Examples
///
/// ```
/// use u_loadplan::model::Item;
///
/// let on_time = Item::new(1, 10.0, 10.0, 100.0, 5);
/// assert_eq!(on_time.effective_profit(), 100.0);
///
/// let late = Item::new(2, 10.0, 10.0, 50.0, -3);
/// assert_eq!(late.late_penalty(), 9.0);
/// assert_eq!(late.effective_profit(), 41.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    id: ItemId,
    weight: f64,
    volume: f64,
    profit: f64,
    deadline_offset: i64,
}

impl Item {
    /// Creates a new item.
    pub fn new(id: ItemId, weight: f64, volume: f64, profit: f64, deadline_offset: i64) -> Self {
        Self {
            id,
            weight,
            volume,
            profit,
            deadline_offset,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Base profit before any lateness penalty.
    pub fn profit(&self) -> f64 {
        self.profit
    }

    pub fn deadline_offset(&self) -> i64 {
        self.deadline_offset
    }

    /// Whether the deadline has already passed.
    pub fn is_late(&self) -> bool {
        self.deadline_offset < 0
    }

    /// Days past the deadline, zero when on time.
    pub fn days_late(&self) -> u64 {
        if self.is_late() {
            self.deadline_offset.unsigned_abs()
        } else {
            0
        }
    }

    /// Realized lateness penalty: the square of the days late.
    pub fn late_penalty(&self) -> f64 {
        let days = self.days_late() as f64;
        days * days
    }

    /// Profit after subtracting the lateness penalty.
    pub fn effective_profit(&self) -> f64 {
        self.profit - self.late_penalty()
    }
}
