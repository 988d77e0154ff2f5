//! Dense pairwise distance cache.

use super::{great_circle, LocationSet};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Dense, symmetric matrix of pairwise great-circle distances.
///
/// Built once per location set and read-only for the rest of the run.
/// O(n²) time and space is the crate's practical scaling bound:
/// thousands of locations, not millions.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix, evaluating each unordered pair once and
    /// mirroring it. The diagonal is zero.
    pub fn build(set: &LocationSet) -> Self {
        let n = set.len();
        let mut cells = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = great_circle(set.location(i), set.location(j));
                cells[i * n + j] = d;
                cells[j * n + i] = d;
            }
        }
        Self { n, cells }
    }

    /// Builds the matrix with one rayon task per row.
    ///
    /// Rows are independent, so no cell is written twice. Produces the
    /// same cells as [`build`](Self::build).
    #[cfg(feature = "parallel")]
    pub fn build_parallel(set: &LocationSet) -> Self {
        let n = set.len();
        let mut cells = vec![0.0; n * n];
        cells.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
            for (j, cell) in row.iter_mut().enumerate() {
                if i != j {
                    *cell = great_circle(set.location(i), set.location(j));
                }
            }
        });
        Self { n, cells }
    }

    /// Number of locations covered.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Never true for a matrix built from a valid set.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between dense indices `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.n + j]
    }
}
