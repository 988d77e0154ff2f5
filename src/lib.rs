//! Closed-tour optimization over geographic locations.
//!
//! Computes a short Hamiltonian cycle over a set of latitude/longitude
//! points: a precomputed great-circle distance matrix feeds a simulated
//! annealing search that swaps pairs of tour positions under the
//! Metropolis acceptance rule with geometric cooling.
//!
//! # Architecture
//!
//! - **[`geo`]**: validated location sets, the spherical
//!   law-of-cosines distance model, and the dense pairwise distance
//!   matrix (built once, read-only afterwards).
//! - **[`tour`]**: the permutation state with cached energy, the
//!   two-position swap move with an O(1) energy delta, and the
//!   anchor-rotation finalizer.
//! - **[`anneal`]**: the annealing engine, with batched steps per
//!   temperature level, a step cap, an optional wall-clock budget, and
//!   a seedable random stream for reproducible runs.
//! - **[`solve`]**: glue tying the three together.
//!
//! The produced tour is heuristic: always a valid cycle visiting every
//! location exactly once, short but not provably optimal.
//!
//! # Example
//!
//! ```
//! use geotour::anneal::AnnealConfig;
//! use geotour::geo::{Location, LocationSet};
//!
//! let set = LocationSet::new(vec![
//!     Location::new(1, 40.72, -74.00),
//!     Location::new(2, 34.05, -118.25),
//!     Location::new(3, 41.88, -87.63),
//! ])?;
//! let config = AnnealConfig::default().with_seed(42);
//!
//! let solution = geotour::solve(&set, &config, None)?;
//! assert_eq!(solution.route.len(), 3);
//! assert!(solution.length > 0.0);
//! # Ok::<(), geotour::Error>(())
//! ```

pub mod anneal;
pub mod error;
pub mod geo;
pub mod solve;
pub mod tour;

pub use error::{Error, Result};
pub use solve::{solve, TourSolution};
