//! Random permutations for question order and answer display order.
//!
//! Permutations come from `SliceRandom::shuffle` (Fisher–Yates), which is
//! uniform over all orderings; a comparator-based random sort is not.

use rand::Rng;
use rand::seq::SliceRandom;

/// A uniformly random permutation of `[0, n)`.
pub fn permutation<R: Rng>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn is_permutation(order: &[usize], n: usize) -> bool {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_permutation_is_bijection() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [0, 1, 2, 3, 4, 7, 16, 100] {
            for _ in 0..10 {
                let order = permutation(&mut rng, n);
                assert_eq!(order.len(), n);
                assert!(is_permutation(&order, n), "not a permutation: {order:?}");
            }
        }
    }

    #[test]
    fn test_permutation_varies() {
        // With 8 elements, 40320 orderings; 20 identical draws in a row
        // would mean the shuffle is broken, not unlucky.
        let mut rng = StdRng::seed_from_u64(11);
        let first = permutation(&mut rng, 8);
        let all_same = (0..20).all(|_| permutation(&mut rng, 8) == first);
        assert!(!all_same);
    }
}
