//! Descriptive statistics for item sets and fitness histories.

use crate::model::Item;

/// Mean, population variance and standard deviation of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Moments {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
}

impl Moments {
    /// Returns `None` for an empty sample.
    pub fn of<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values: Vec<f64> = values.into_iter().collect();
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        Some(Self {
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

/// Weight and effective-profit distribution of an item set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStats {
    pub count: usize,
    pub weight: Moments,
    pub effective_profit: Moments,
}

impl ItemStats {
    /// Returns `None` for an empty item set.
    pub fn of(items: &[Item]) -> Option<Self> {
        Some(Self {
            count: items.len(),
            weight: Moments::of(items.iter().map(Item::weight))?,
            effective_profit: Moments::of(items.iter().map(Item::effective_profit))?,
        })
    }
}

/// Generation numbers (1-based) sampled by [`HistoryCheckpoints`].
pub const CHECKPOINT_GENERATIONS: [usize; 4] = [50, 100, 150, 200];

/// Best fitness at fixed points of a run, for run-over-run statistics.
///
/// `start` and `end` are 0 for an empty history; a checkpoint the run
/// never reached is `None`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryCheckpoints {
    pub start: f64,
    pub checkpoints: Vec<(usize, Option<f64>)>,
    pub end: f64,
}

impl HistoryCheckpoints {
    pub fn of(history: &[f64]) -> Self {
        Self {
            start: history.first().copied().unwrap_or(0.0),
            checkpoints: CHECKPOINT_GENERATIONS
                .iter()
                .map(|&gen| (gen, history.get(gen - 1).copied()))
                .collect(),
            end: history.last().copied().unwrap_or(0.0),
        }
    }

    /// Value at generation `gen` (1-based), if it is a checkpoint that was reached.
    pub fn at(&self, gen: usize) -> Option<f64> {
        self.checkpoints
            .iter()
            .find(|(g, _)| *g == gen)
            .and_then(|(_, v)| *v)
    }
}
