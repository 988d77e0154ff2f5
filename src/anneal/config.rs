//! Annealing configuration.

use std::time::Duration;

use crate::error::{Error, Result};

/// Configuration for an annealing run.
///
/// # Examples
///
/// ```
/// use geotour::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(10.0)
///     .with_cooling_rate(0.95)
///     .with_min_temperature(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature. Higher values accept more uphill moves
    /// early in the run.
    pub initial_temperature: f64,

    /// Geometric decay factor in (0, 1), applied after each batch of
    /// steps. Higher = slower cooling.
    pub cooling_rate: f64,

    /// The run converges once the temperature drops below this.
    pub min_temperature: f64,

    /// Number of proposal steps per temperature level.
    pub steps_per_temperature: usize,

    /// Hard cap on total steps. 0 = no cap.
    pub max_steps: usize,

    /// Wall-clock budget. Exceeding it ends the run as
    /// [`Outcome::TimedOut`](super::Outcome::TimedOut).
    pub time_budget: Option<Duration>,

    /// Seed for the move/acceptance random stream. `None` draws a fresh
    /// seed; set it for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.95,
            min_temperature: 1e-3,
            steps_per_temperature: 100,
            max_steps: 0,
            time_budget: None,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_steps_per_temperature(mut self, n: usize) -> Self {
        self.steps_per_temperature = n;
        self
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.initial_temperature.is_nan() || self.initial_temperature <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if self.min_temperature.is_nan() || self.min_temperature <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            )));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(Error::InvalidConfig(
                "min_temperature must be less than initial_temperature".into(),
            ));
        }
        if self.cooling_rate.is_nan() || self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(Error::InvalidConfig(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.steps_per_temperature == 0 {
            return Err(Error::InvalidConfig(
                "steps_per_temperature must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnnealConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.initial_temperature - 100.0).abs() < 1e-10);
        assert!((config.cooling_rate - 0.95).abs() < 1e-10);
        assert_eq!(config.steps_per_temperature, 100);
        assert_eq!(config.max_steps, 0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_rejects_non_positive_initial_temperature() {
        let config = AnnealConfig::default().with_initial_temperature(-1.0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_nan_initial_temperature() {
        let config = AnnealConfig::default().with_initial_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_min_above_initial() {
        let config = AnnealConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_cooling_rate_outside_unit_interval() {
        for rate in [0.0, 1.0, 1.5, -0.5] {
            let config = AnnealConfig::default().with_cooling_rate(rate);
            assert!(config.validate().is_err(), "rate {rate} should be rejected");
        }
    }

    #[test]
    fn test_rejects_zero_steps_per_temperature() {
        let config = AnnealConfig::default().with_steps_per_temperature(0);
        assert!(config.validate().is_err());
    }
}
