//! Permutation crossover and mutation operators.
//!
//! These operate on `&[usize]` permutations of `0..n`.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX variant): keeps a contiguous slice of parent 1
//!   in place and fills the free slots left to right in parent 2's order
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two random positions
//! - [`mutate`]: applies swaps under a [`MutationStrategy`]
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

/// Fraction of the permutation length used as the swap count by
/// [`MutationStrategy::PerSwap`].
pub const PER_SWAP_FRACTION: f64 = 0.01;

/// Fraction of the permutation length used as the swap count by
/// [`MutationStrategy::PerIndividual`].
pub const PER_INDIVIDUAL_FRACTION: f64 = 0.1;

// ============================================================================
// Crossover
// ============================================================================

/// Order crossover producing a single child.
///
/// 1. Pick two random cut points and order them so `start <= end`
/// 2. Copy `parent1[start..=end]` into the child at the same positions
/// 3. Scan `parent2` in order; each gene not yet placed goes into the next
///    empty slot, scanning slots from the left
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents differ in length or are not permutations of the
/// same set.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    if n == 0 {
        return Vec::new();
    }

    let (start, end) = random_segment(n, rng);
    order_crossover_with_cut(parent1, parent2, start, end)
}

/// Order crossover with explicit cut points `[start, end]` (inclusive).
///
/// Cut points given out of order are swapped.
///
/// # Examples
///
/// ```
/// use u_loadplan::ga::operators::order_crossover_with_cut;
///
/// let p1 = [0, 1, 2, 3, 4];
/// let p2 = [4, 3, 2, 1, 0];
/// let child = order_crossover_with_cut(&p1, &p2, 1, 3);
/// assert_eq!(child, vec![4, 1, 2, 3, 0]);
/// ```
pub fn order_crossover_with_cut(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    assert!(end < n, "cut point {end} out of bounds for length {n}");

    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut placed = vec![false; n];

    for i in start..=end {
        let gene = parent1[i];
        child[i] = Some(gene);
        placed[gene] = true;
    }

    let mut pos = 0;
    for &gene in parent2 {
        if placed[gene] {
            continue;
        }
        while pos < n && child[pos].is_some() {
            pos += 1;
        }
        assert!(pos < n, "order crossover overflow: parent2 is not a permutation");
        child[pos] = Some(gene);
        placed[gene] = true;
    }

    child
        .into_iter()
        .map(|slot| slot.expect("order crossover left a slot empty: parents differ in gene set"))
        .collect()
}

// ============================================================================
// Mutation
// ============================================================================

/// How swap mutation is gated and sized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutationStrategy {
    /// `max(1, round(n × 0.01))` swap attempts, each firing independently
    /// with probability `mutation_rate`.
    #[default]
    PerSwap,

    /// One gate with probability `mutation_rate`; when it passes,
    /// `floor(n × 0.1)` swaps are applied.
    PerIndividual,
}

impl MutationStrategy {
    /// Number of swaps (or swap attempts) for a permutation of length `n`.
    pub fn swap_count(&self, n: usize) -> usize {
        match self {
            MutationStrategy::PerSwap => ((n as f64 * PER_SWAP_FRACTION).round() as usize).max(1),
            MutationStrategy::PerIndividual => (n as f64 * PER_INDIVIDUAL_FRACTION) as usize,
        }
    }
}

/// Swap mutation: exchange two positions drawn with replacement.
///
/// Drawing the same position twice is a no-op.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    perm.swap(i, j);
}

/// Mutates `perm` in place according to `strategy`.
pub fn mutate<R: Rng>(
    perm: &mut [usize],
    rate: f64,
    strategy: MutationStrategy,
    rng: &mut R,
) {
    let swaps = strategy.swap_count(perm.len());
    match strategy {
        MutationStrategy::PerSwap => {
            for _ in 0..swaps {
                if rng.random::<f64>() < rate {
                    swap_mutation(perm, rng);
                }
            }
        }
        MutationStrategy::PerIndividual => {
            if rng.random::<f64>() < rate {
                for _ in 0..swaps {
                    swap_mutation(perm, rng);
                }
            }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Whether `perm` contains every value of `0..n` exactly once.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    // ---- Crossover ----

    #[test]
    fn test_ox_fixed_cut_keeps_slice_and_fills_by_parent2() {
        let p1 = vec![0, 1, 2, 3, 4];
        let p2 = vec![4, 3, 2, 1, 0];
        let child = order_crossover_with_cut(&p1, &p2, 1, 3);
        assert_eq!(&child[1..=3], &p1[1..=3]);
        assert_eq!(child, vec![4, 1, 2, 3, 0]);
        assert!(is_permutation(&child, 5));
    }

    #[test]
    fn test_ox_cut_order_is_irrelevant() {
        let p1 = vec![3, 0, 4, 1, 2];
        let p2 = vec![1, 2, 3, 4, 0];
        assert_eq!(
            order_crossover_with_cut(&p1, &p2, 3, 1),
            order_crossover_with_cut(&p1, &p2, 1, 3)
        );
        // Slice [0, 4, 1] stays; 2, 3 fill slots 0 and 4 in parent2 order.
        assert_eq!(order_crossover_with_cut(&p1, &p2, 1, 3), vec![2, 0, 4, 1, 3]);
    }

    #[test]
    fn test_ox_full_cut_clones_parent1() {
        let p1 = vec![2, 0, 1, 3];
        let p2 = vec![0, 1, 2, 3];
        assert_eq!(order_crossover_with_cut(&p1, &p2, 0, 3), p1);
    }

    #[test]
    fn test_ox_identical_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = vec![4, 2, 0, 3, 1];
        for _ in 0..20 {
            assert_eq!(order_crossover(&p, &p, &mut rng), p);
        }
    }

    #[test]
    fn test_ox_produces_valid_permutations() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1: Vec<usize> = (0..8).collect();
        let p2: Vec<usize> = (0..8).rev().collect();

        for _ in 0..100 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_permutation(&child, 8), "OX child not valid: {child:?}");
        }
    }

    #[test]
    fn test_ox_single_and_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(order_crossover(&[0], &[0], &mut rng), vec![0]);
        assert!(order_crossover(&[], &[], &mut rng).is_empty());
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_ox_length_mismatch_panics() {
        order_crossover_with_cut(&[0, 1], &[0, 1, 2], 0, 0);
    }

    // ---- Mutation ----

    #[test]
    fn test_swap_counts() {
        assert_eq!(MutationStrategy::PerSwap.swap_count(0), 1);
        assert_eq!(MutationStrategy::PerSwap.swap_count(10), 1);
        assert_eq!(MutationStrategy::PerSwap.swap_count(149), 1);
        assert_eq!(MutationStrategy::PerSwap.swap_count(150), 2);
        assert_eq!(MutationStrategy::PerSwap.swap_count(1000), 10);
        assert_eq!(MutationStrategy::PerIndividual.swap_count(9), 0);
        assert_eq!(MutationStrategy::PerIndividual.swap_count(100), 10);
    }

    #[test]
    fn test_zero_rate_never_mutates() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Vec<usize> = (0..500).collect();
        for strategy in [MutationStrategy::PerSwap, MutationStrategy::PerIndividual] {
            let mut perm = original.clone();
            for _ in 0..100 {
                mutate(&mut perm, 0.0, strategy, &mut rng);
            }
            assert_eq!(perm, original);
        }
    }

    #[test]
    fn test_full_rate_mutates_eventually() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Vec<usize> = (0..50).collect();
        for strategy in [MutationStrategy::PerSwap, MutationStrategy::PerIndividual] {
            let mut perm = original.clone();
            for _ in 0..10 {
                mutate(&mut perm, 1.0, strategy, &mut rng);
            }
            assert_ne!(perm, original, "{strategy:?} never changed the permutation");
            assert!(is_permutation(&perm, 50));
        }
    }

    #[test]
    fn test_swap_single_element() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut perm = vec![0];
        swap_mutation(&mut perm, &mut rng);
        assert_eq!(perm, vec![0]);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[], 0));
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(!is_permutation(&[0, 1], 3));
    }

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (start, end) = random_segment(10, &mut rng);
            assert!(start <= end);
            assert!(end < 10);
        }
    }

    // ---- Properties ----

    proptest! {
        #[test]
        fn prop_crossover_then_mutation_keeps_permutation(
            n in 1usize..200,
            seed in any::<u64>(),
            rate in 0.0f64..=1.0,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut p1: Vec<usize> = (0..n).collect();
            let mut p2 = p1.clone();
            p1.shuffle(&mut rng);
            p2.shuffle(&mut rng);

            let mut child = order_crossover(&p1, &p2, &mut rng);
            prop_assert!(is_permutation(&child, n));

            mutate(&mut child, rate, MutationStrategy::PerSwap, &mut rng);
            prop_assert!(is_permutation(&child, n));
            mutate(&mut child, rate, MutationStrategy::PerIndividual, &mut rng);
            prop_assert!(is_permutation(&child, n));
        }

        #[test]
        fn prop_crossover_keeps_parent1_slice(
            n in 1usize..60,
            seed in any::<u64>(),
            a in 0usize..60,
            b in 0usize..60,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut p1: Vec<usize> = (0..n).collect();
            let mut p2 = p1.clone();
            p1.shuffle(&mut rng);
            p2.shuffle(&mut rng);
            let (start, end) = (a % n, b % n);
            let (lo, hi) = (start.min(end), start.max(end));

            let child = order_crossover_with_cut(&p1, &p2, start, end);
            prop_assert_eq!(&child[lo..=hi], &p1[lo..=hi]);

            // Remaining genes appear in parent2's relative order.
            let rest: Vec<usize> = child
                .iter()
                .enumerate()
                .filter(|(i, _)| *i < lo || *i > hi)
                .map(|(_, &g)| g)
                .collect();
            let expected: Vec<usize> = p2.iter().copied().filter(|g| rest.contains(g)).collect();
            prop_assert_eq!(rest, expected);
        }
    }
}
