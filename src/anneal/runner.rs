//! Annealing execution loop.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::AnnealConfig;
use crate::error::Result;
use crate::geo::DistanceMatrix;
use crate::tour::TourState;

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The schedule ran to completion: temperature floor or step cap.
    Converged,
    /// The wall-clock budget expired first.
    TimedOut,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// Final annealed permutation (dense indices). This is the reported
    /// tour.
    pub order: Vec<usize>,

    /// Length of the final tour.
    pub energy: f64,

    /// Lowest-energy permutation observed across the run. Tracked as a
    /// shadow only; acceptance never consults it.
    pub best_order: Vec<usize>,

    /// Length of the best-seen tour.
    pub best_energy: f64,

    /// Terminal state.
    pub outcome: Outcome,

    /// Total proposal steps executed.
    pub steps: usize,

    /// Accepted moves, including non-improving ones.
    pub accepted_moves: usize,

    /// Moves that strictly lowered the energy.
    pub improving_moves: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Current energy sampled at regular step intervals.
    pub energy_history: Vec<f64>,
}

/// Executes simulated annealing over a distance matrix.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the annealing loop to a terminal state.
    ///
    /// Validates `config`, seeds the tour as a uniform shuffle of the
    /// enumeration order, then repeats propose/accept until a stopping
    /// condition holds: temperature below the floor or step cap reached
    /// ([`Outcome::Converged`]), or time budget exceeded
    /// ([`Outcome::TimedOut`]). The temperature decays geometrically
    /// after each batch of `steps_per_temperature` proposals.
    ///
    /// With exactly two locations every permutation is the same cycle,
    /// so the seed state is returned immediately as converged.
    pub fn run(matrix: &DistanceMatrix, config: &AnnealConfig) -> Result<AnnealResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };

        let mut state = TourState::shuffled(matrix, &mut rng);
        let n = state.len();

        tracing::debug!(
            event = "anneal_start",
            n,
            initial_temperature = config.initial_temperature,
            min_temperature = config.min_temperature,
            initial_energy = state.energy(),
        );

        let mut best_order = state.order().to_vec();
        let mut best_energy = state.energy();

        let history_interval = 100.max(config.steps_per_temperature);
        let mut energy_history = vec![state.energy()];

        let mut temperature = config.initial_temperature;
        let mut steps = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut outcome = Outcome::Converged;

        let deadline = config.time_budget.map(|budget| Instant::now() + budget);

        if n > 2 {
            'cooling: while temperature > config.min_temperature {
                for _ in 0..config.steps_per_temperature {
                    if let Some(deadline) = deadline {
                        if Instant::now() >= deadline {
                            outcome = Outcome::TimedOut;
                            break 'cooling;
                        }
                    }
                    if config.max_steps > 0 && steps >= config.max_steps {
                        break 'cooling;
                    }

                    let a = rng.random_range(0..n);
                    let b = rng.random_range(0..n);
                    let delta = state.swap_delta(a, b, matrix);

                    if accept_move(delta, temperature, &mut rng) {
                        state.apply_swap(a, b, delta);
                        accepted_moves += 1;
                        if delta < 0.0 {
                            improving_moves += 1;
                        }
                        if state.energy() < best_energy {
                            best_order.clear();
                            best_order.extend_from_slice(state.order());
                            best_energy = state.energy();
                        }
                    }

                    steps += 1;
                    if steps.is_multiple_of(history_interval) {
                        energy_history.push(state.energy());
                    }
                }

                temperature *= config.cooling_rate;
            }
        }

        if energy_history
            .last()
            .is_none_or(|&last| (last - state.energy()).abs() > 1e-15)
        {
            energy_history.push(state.energy());
        }

        tracing::debug!(
            event = "anneal_end",
            ?outcome,
            steps,
            accepted_moves,
            energy = state.energy(),
            best_energy,
            final_temperature = temperature,
        );

        let (order, energy) = state.into_parts();
        Ok(AnnealResult {
            order,
            energy,
            best_order,
            best_energy,
            outcome,
            steps,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            energy_history,
        })
    }
}

/// Metropolis criterion: downhill and sideways moves are always taken,
/// uphill moves with probability `exp(-delta / temperature)`.
fn accept_move<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta <= 0.0 {
        return true;
    }
    rng.random_range(0.0..1.0) < (-delta / temperature).exp()
}
