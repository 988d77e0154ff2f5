//! Simulated annealing over the distance matrix.
//!
//! Single-solution trajectory search: propose a two-position swap,
//! accept by the Metropolis criterion, cool geometrically after each
//! batch of steps, stop on the temperature floor, the step cap, or the
//! wall-clock budget. The tour state is owned exclusively by the runner
//! for the duration of a run; the matrix is only read.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner, Outcome};
