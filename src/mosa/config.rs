//! Annealing configuration.

use crate::error::{MosaError, Result};
use crate::knapsack::NeighborPolicy;

/// Configuration for a multi-objective annealing run.
///
/// Cooling is geometric: `T_{k+1} = cooling_factor * T_k`, starting at
/// `initial_temperature` and stopping once `T <= min_temperature`.
///
/// # Examples
///
/// ```
/// use u_mosa::mosa::MosaConfig;
///
/// let config = MosaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.01)
///     .with_cooling_factor(0.95)
///     .with_iterations_per_temperature(50)
///     .with_objective_limit(2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MosaConfig {
    /// Starting temperature (`T_max`).
    pub initial_temperature: f64,

    /// The run stops when the temperature is at or below this value.
    pub min_temperature: f64,

    /// Multiplicative cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_factor: f64,

    /// Number of neighbor evaluations at each temperature level.
    pub iterations_per_temperature: usize,

    /// Evaluate only the first `n` objectives. `None` keeps them all.
    ///
    /// Two objectives is the usual choice when the front is plotted.
    pub objective_limit: Option<usize>,

    /// Index selection rule of the add move.
    pub neighbor_policy: NeighborPolicy,

    /// Maximum total inner iterations (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Wall-clock limit in milliseconds. `None` = no limit.
    pub time_limit_ms: Option<u64>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for MosaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 300.0,
            min_temperature: 1e-4,
            cooling_factor: 0.99,
            iterations_per_temperature: 20,
            objective_limit: None,
            neighbor_policy: NeighborPolicy::default(),
            max_iterations: 0,
            time_limit_ms: None,
            seed: None,
        }
    }
}

impl MosaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, alpha: f64) -> Self {
        self.cooling_factor = alpha;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_objective_limit(mut self, n: usize) -> Self {
        self.objective_limit = Some(n);
        self
    }

    pub fn with_neighbor_policy(mut self, policy: NeighborPolicy) -> Self {
        self.neighbor_policy = policy;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(invalid("initial_temperature must be positive and finite"));
        }
        if self.min_temperature.is_nan() || self.min_temperature <= 0.0 {
            return Err(invalid("min_temperature must be positive"));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(invalid(
                "min_temperature must be less than initial_temperature",
            ));
        }
        let alpha = self.cooling_factor;
        if alpha.is_nan() || alpha <= 0.0 || alpha >= 1.0 {
            return Err(invalid(format!(
                "cooling_factor must be in (0, 1), got {alpha}"
            )));
        }
        if self.iterations_per_temperature == 0 {
            return Err(invalid("iterations_per_temperature must be positive"));
        }
        if self.objective_limit == Some(0) {
            return Err(invalid("objective_limit must be positive or None"));
        }
        if self.time_limit_ms == Some(0) {
            return Err(invalid("time_limit_ms must be positive or None"));
        }
        Ok(())
    }

    /// Number of temperature levels the schedule visits before cooling
    /// below `min_temperature`.
    ///
    /// Equals `ceil(ln(T_min / T_max) / ln(alpha))` up to floating-point
    /// rounding; the count is produced by replaying the schedule so it
    /// matches the runner exactly. An invalid configuration yields 0.
    pub fn temperature_steps(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let mut t = self.initial_temperature;
        let mut steps = 0usize;
        while t > self.min_temperature {
            t *= self.cooling_factor;
            steps += 1;
        }
        steps
    }
}

fn invalid(msg: impl Into<String>) -> MosaError {
    MosaError::InvalidConfig(msg.into())
}
