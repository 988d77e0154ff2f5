//! Tour permutation with cached energy and the swap move.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::geo::DistanceMatrix;

/// Total cyclic length of `order` under the distance matrix, including
/// the wrap-around edge from the last position back to the first.
pub fn tour_length(order: &[usize], matrix: &DistanceMatrix) -> f64 {
    let n = order.len();
    let mut total = 0.0;
    for i in 0..n {
        total += matrix.get(order[i], order[(i + 1) % n]);
    }
    total
}

/// Current candidate tour: a permutation of the dense location indices
/// plus its cached total length (energy).
///
/// The permutation invariant (every index exactly once) holds at
/// construction and is preserved by the swap move, the only mutation.
#[derive(Debug, Clone)]
pub struct TourState {
    order: Vec<usize>,
    energy: f64,
}

impl TourState {
    /// Uniformly shuffled initial tour over all locations in `matrix`.
    pub fn shuffled<R: Rng>(matrix: &DistanceMatrix, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..matrix.len()).collect();
        order.shuffle(rng);
        Self::from_order(order, matrix)
    }

    /// Wraps an existing permutation, computing its energy from scratch.
    pub fn from_order(order: Vec<usize>, matrix: &DistanceMatrix) -> Self {
        let energy = tour_length(&order, matrix);
        Self { order, energy }
    }

    /// Visit order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Cached total length.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the tour has no positions.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consumes the state, returning the permutation and its energy.
    pub fn into_parts(self) -> (Vec<usize>, f64) {
        (self.order, self.energy)
    }

    /// Energy change a swap of positions `a` and `b` would cause.
    ///
    /// Only the edges touching the two positions change, so the delta
    /// is computed from those alone. The touched edges are deduplicated
    /// first: cyclically adjacent swaps share an edge, and counting it
    /// twice would skew the delta. Matches the full-recompute
    /// difference to floating-point tolerance.
    ///
    /// `a == b` is a legal no-op with delta 0.
    pub fn swap_delta(&self, a: usize, b: usize, matrix: &DistanceMatrix) -> f64 {
        if a == b {
            return 0.0;
        }
        let n = self.order.len();
        let next = |i: usize| (i + 1) % n;
        let prev = |i: usize| (i + n - 1) % n;

        // Each touched edge is (h, next(h)) for a head position h.
        let mut heads = [prev(a), a, prev(b), b];
        heads.sort_unstable();

        let swapped = |i: usize| {
            if i == a {
                self.order[b]
            } else if i == b {
                self.order[a]
            } else {
                self.order[i]
            }
        };

        let mut delta = 0.0;
        for (k, &h) in heads.iter().enumerate() {
            if k > 0 && heads[k - 1] == h {
                continue;
            }
            let t = next(h);
            delta += matrix.get(swapped(h), swapped(t)) - matrix.get(self.order[h], self.order[t]);
        }
        delta
    }

    /// Commits the swap proposed by [`swap_delta`](Self::swap_delta),
    /// updating the cached energy by `delta`.
    pub fn apply_swap(&mut self, a: usize, b: usize, delta: f64) {
        self.order.swap(a, b);
        self.energy += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Location, LocationSet};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn matrix_for(coords: &[(f64, f64)]) -> DistanceMatrix {
        let locations = coords
            .iter()
            .enumerate()
            .map(|(k, &(lat, lon))| Location::new(k as u64, lat, lon))
            .collect();
        DistanceMatrix::build(&LocationSet::new(locations).unwrap())
    }

    fn sample_matrix() -> DistanceMatrix {
        matrix_for(&[
            (40.72, -74.00),
            (34.05, -118.25),
            (41.88, -87.63),
            (29.77, -95.38),
            (33.45, -112.07),
        ])
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let matrix = sample_matrix();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let state = TourState::shuffled(&matrix, &mut rng);

        let mut seen = state.order().to_vec();
        seen.sort_unstable();
        assert_eq!(seen, (0..matrix.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_energy_matches_cyclic_sum() {
        let matrix = sample_matrix();
        let state = TourState::from_order(vec![2, 0, 4, 1, 3], &matrix);

        let mut expected = 0.0;
        let order = state.order();
        for i in 0..order.len() {
            expected += matrix.get(order[i], order[(i + 1) % order.len()]);
        }
        assert!((state.energy() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_swap_same_position_is_noop() {
        let matrix = sample_matrix();
        let state = TourState::from_order(vec![0, 1, 2, 3, 4], &matrix);
        assert_eq!(state.swap_delta(3, 3, &matrix), 0.0);
    }

    #[test]
    fn test_swap_preserves_permutation() {
        let matrix = sample_matrix();
        let mut state = TourState::from_order(vec![0, 1, 2, 3, 4], &matrix);
        let delta = state.swap_delta(1, 4, &matrix);
        state.apply_swap(1, 4, delta);

        let mut seen = state.order().to_vec();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    fn assert_delta_matches_recompute(order: Vec<usize>, a: usize, b: usize) {
        let matrix = sample_matrix();
        let state = TourState::from_order(order.clone(), &matrix);
        let delta = state.swap_delta(a, b, &matrix);

        let mut swapped = order;
        swapped.swap(a, b);
        let expected = tour_length(&swapped, &matrix) - state.energy();
        assert!(
            (delta - expected).abs() < 1e-9,
            "delta {delta} vs recompute {expected} for swap ({a}, {b})"
        );
    }

    #[test]
    fn test_delta_distant_positions() {
        assert_delta_matches_recompute(vec![0, 1, 2, 3, 4], 0, 2);
    }

    #[test]
    fn test_delta_adjacent_positions() {
        assert_delta_matches_recompute(vec![3, 1, 4, 0, 2], 1, 2);
    }

    #[test]
    fn test_delta_wrap_adjacent_positions() {
        assert_delta_matches_recompute(vec![3, 1, 4, 0, 2], 0, 4);
    }

    #[test]
    fn test_two_location_swap_changes_nothing() {
        let matrix = matrix_for(&[(40.72, -74.00), (34.05, -118.25)]);
        let mut state = TourState::from_order(vec![0, 1], &matrix);
        let before = state.energy();

        let delta = state.swap_delta(0, 1, &matrix);
        assert_eq!(delta, 0.0);
        state.apply_swap(0, 1, delta);
        assert_eq!(state.energy(), before);
    }

    proptest! {
        #[test]
        fn prop_swap_delta_matches_full_recompute(
            coords in proptest::collection::vec((-60.0..60.0f64, -150.0..150.0f64), 3..12),
            raw_a in 0usize..64,
            raw_b in 0usize..64,
            seed in 0u64..1000,
        ) {
            let matrix = matrix_for(&coords);
            let n = matrix.len();
            let a = raw_a % n;
            let b = raw_b % n;

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let state = TourState::shuffled(&matrix, &mut rng);
            let delta = state.swap_delta(a, b, &matrix);

            let mut swapped = state.order().to_vec();
            swapped.swap(a, b);
            let expected = tour_length(&swapped, &matrix) - state.energy();
            prop_assert!((delta - expected).abs() < 1e-6);
        }

        #[test]
        fn prop_applied_swaps_keep_energy_consistent(
            coords in proptest::collection::vec((-60.0..60.0f64, -150.0..150.0f64), 3..10),
            swaps in proptest::collection::vec((0usize..64, 0usize..64), 1..40),
        ) {
            let matrix = matrix_for(&coords);
            let n = matrix.len();
            let mut state = TourState::from_order((0..n).collect(), &matrix);

            for (raw_a, raw_b) in swaps {
                let (a, b) = (raw_a % n, raw_b % n);
                let delta = state.swap_delta(a, b, &matrix);
                state.apply_swap(a, b, delta);
            }

            let expected = tour_length(state.order(), &matrix);
            prop_assert!((state.energy() - expected).abs() < 1e-6);
        }
    }
}
