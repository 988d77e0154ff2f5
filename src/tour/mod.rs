//! Tour representation and finalization.
//!
//! A tour is a permutation of the dense location indices, read as a
//! Hamiltonian cycle (the last element wraps back to the first).
//! [`TourState`] carries the permutation together with its cached total
//! length and exposes the two-position swap move the annealing engine
//! drives. [`rotate_to_anchor`] fixes the starting index of the
//! otherwise rotation-invariant result.

mod finalize;
mod state;

pub use finalize::rotate_to_anchor;
pub use state::{tour_length, TourState};
