//! Parent selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::seq::index;
use rand::Rng;

/// Tournament selection without replacement.
///
/// Draws `size` distinct indices uniformly from the population and returns
/// the one with the highest fitness. Ties go to the earliest draw.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `fitness` is empty or `size` exceeds its length; the runner
/// validates both before a run starts.
pub fn tournament<R: Rng>(fitness: &[f64], size: usize, rng: &mut R) -> usize {
    assert!(!fitness.is_empty(), "cannot select from empty population");
    assert!(
        size <= fitness.len(),
        "tournament size {size} exceeds population {}",
        fitness.len()
    );

    let mut contestants = index::sample(rng, fitness.len(), size.max(1)).into_iter();
    let mut best_idx = contestants
        .next()
        .expect("tournament draws at least one contestant");
    for idx in contestants {
        if fitness[idx] > fitness[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_tournament_always_picks_best() {
        let fitness = [10.0, 5.0, 42.0, 8.0];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert_eq!(tournament(&fitness, 4, &mut rng), 2);
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let fitness = [10.0, 5.0, 42.0, 8.0, 1.0, 3.0, 7.0, 2.0];
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 8];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&fitness, 5, &mut rng)] += 1;
        }
        // Index 2 wins whenever drawn: P = 5/8
        assert!(
            counts[2] > 5500,
            "expected best to win ~62% of the time, got {}/{n}",
            counts[2]
        );
        // The three worst can never win a 5-of-8 tournament.
        assert_eq!(counts[4] + counts[7] + counts[5], 0);
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let fitness = [10.0, 5.0, 1.0, 8.0];
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&fitness, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_single_individual() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(tournament(&[5.0], 1, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        tournament(&[], 3, &mut rng);
    }

    #[test]
    #[should_panic(expected = "exceeds population")]
    fn test_oversized_tournament_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        tournament(&[1.0, 2.0], 3, &mut rng);
    }
}
