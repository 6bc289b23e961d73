//! Multi-objective annealing loop.
//!
//! # Algorithm
//!
//! 1. Start from the singleton `{0}`; the front and archive hold it too
//! 2. At each temperature level, repeat `iterations_per_temperature` times:
//!    a. Draw a neighbor of the current solution
//!    b. `delta = f(neighbor) - f(current)` with `f` the log-sum scalarization
//!    c. Accept if `delta < 0`, else with probability `exp(-delta / T)`
//!    d. Offer the neighbor to the Pareto front, accepted or not
//! 3. Cool `T ← alpha · T` and stop once `T ≤ T_min`
//!
//! The cancel flag, the iteration budget and the deadline are checked
//! before every inner iteration.

use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use u_numflow::random::create_rng;

use super::config::MosaConfig;
use super::observer::{FrontObserver, FrontUpdate, NoopObserver};
use crate::error::Result;
use crate::knapsack::{approximate_objective, neighbor, ProblemInstance, Solution};
use crate::pareto::{Admission, ParetoFront};

/// Log a progress line every this many temperature levels.
const PROGRESS_INTERVAL: usize = 100;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The temperature reached `min_temperature`.
    Cooled,
    /// `max_iterations` was reached.
    IterationLimit,
    /// `time_limit_ms` elapsed.
    TimeLimit,
    /// The cancel flag was raised.
    Cancelled,
}

/// Result of a multi-objective annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MosaResult {
    /// Final non-dominated set, in admission order.
    pub front: Vec<Solution>,

    /// Objective vector of each `front` member (same order).
    pub front_scores: Vec<Vec<f64>>,

    /// Every solution ever admitted to the front, oldest first.
    pub archive: Vec<Solution>,

    /// Total number of inner iterations (neighbor evaluations).
    pub iterations: usize,

    /// Number of completed temperature levels.
    pub temperature_steps: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of moves with `delta < 0`.
    pub improving_moves: usize,

    /// Number of times the front changed.
    pub front_updates: usize,

    pub stop_reason: StopReason,
}

impl MosaResult {
    /// Whether the run was cancelled externally.
    pub fn cancelled(&self) -> bool {
        self.stop_reason == StopReason::Cancelled
    }
}

/// Executes multi-objective simulated annealing on a knapsack instance.
pub struct MosaRunner;

impl MosaRunner {
    /// Runs to temperature exhaustion (or the configured budgets).
    ///
    /// # Errors
    ///
    /// - [`MosaError::InvalidConfig`](crate::MosaError::InvalidConfig) for a
    ///   rejected configuration, before any iteration
    /// - [`MosaError::NonPositiveValue`](crate::MosaError::NonPositiveValue)
    ///   as soon as the scalarization meets a value `≤ 0`; the run is aborted
    ///
    /// # Examples
    ///
    /// ```
    /// use u_mosa::knapsack::ProblemInstance;
    /// use u_mosa::mosa::{MosaConfig, MosaRunner};
    ///
    /// let instance = ProblemInstance::new(
    ///     5.0,
    ///     vec![2.0, 2.0, 2.0],
    ///     vec![vec![3.0, 5.0, 4.0], vec![5.0, 3.0, 4.0]],
    /// )
    /// .unwrap();
    /// let config = MosaConfig::default()
    ///     .with_initial_temperature(10.0)
    ///     .with_min_temperature(0.1)
    ///     .with_seed(42);
    ///
    /// let result = MosaRunner::run(&instance, &config).unwrap();
    /// assert!(!result.front.is_empty());
    /// assert!(result.archive.len() >= result.front.len());
    /// ```
    pub fn run(instance: &ProblemInstance, config: &MosaConfig) -> Result<MosaResult> {
        Self::run_observed(instance, config, None, &mut NoopObserver)
    }

    /// Runs with an optional cancellation token.
    pub fn run_with_cancel(
        instance: &ProblemInstance,
        config: &MosaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<MosaResult> {
        Self::run_observed(instance, config, cancel, &mut NoopObserver)
    }

    /// Runs with a cancellation token and a front observer.
    ///
    /// `observer` is notified after every change of the front.
    pub fn run_observed<O: FrontObserver>(
        instance: &ProblemInstance,
        config: &MosaConfig,
        cancel: Option<Arc<AtomicBool>>,
        observer: &mut O,
    ) -> Result<MosaResult> {
        config.validate()?;

        let instance = match config.objective_limit {
            Some(limit) => Cow::Owned(instance.reduced_to(limit)?),
            None => Cow::Borrowed(instance),
        };
        let instance: &ProblemInstance = &instance;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let span = tracing::debug_span!(
            "mosa",
            objectives = instance.objective_count(),
            objects = instance.object_count()
        );
        let _guard = span.enter();
        tracing::debug!(
            capacity = instance.capacity(),
            t_max = config.initial_temperature,
            t_min = config.min_temperature,
            alpha = config.cooling_factor,
            "starting annealing"
        );

        let deadline = config
            .time_limit_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        let mut current = Solution::singleton(0);
        let mut current_cost = approximate_objective(instance, &current)?;
        let mut front = ParetoFront::new(instance, current.clone())?;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut temperature_steps = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut front_updates = 0usize;
        let mut stop_reason = StopReason::Cooled;

        'cooling: while temperature > config.min_temperature {
            for _ in 0..config.iterations_per_temperature {
                if let Some(reason) =
                    check_stop(config, cancel.as_deref(), deadline, total_iterations)
                {
                    stop_reason = reason;
                    break 'cooling;
                }

                let candidate = neighbor(instance, &current, config.neighbor_policy, &mut rng);
                let candidate_cost = approximate_objective(instance, &candidate)?;
                let delta = candidate_cost - current_cost;
                total_iterations += 1;

                if delta < 0.0 {
                    improving_moves += 1;
                }
                let accept = metropolis_accept(delta, temperature, &mut rng);

                if let Admission::Admitted { evicted } = front.consider(instance, &candidate)? {
                    front_updates += 1;
                    tracing::trace!(
                        iteration = total_iterations,
                        front = front.len(),
                        archive = front.archive().len(),
                        evicted,
                        "front updated"
                    );
                    observer.on_front_update(&FrontUpdate::new(
                        total_iterations,
                        temperature,
                        evicted,
                        &front,
                    ));
                }

                if accept {
                    current = candidate;
                    current_cost = candidate_cost;
                    accepted_moves += 1;
                }
            }

            temperature *= config.cooling_factor;
            temperature_steps += 1;

            if temperature_steps.is_multiple_of(PROGRESS_INTERVAL) {
                tracing::debug!(
                    step = temperature_steps,
                    temperature,
                    front = front.len(),
                    current = current.len(),
                    "cooling"
                );
            }
        }

        if stop_reason != StopReason::Cooled {
            tracing::debug!(?stop_reason, iteration = total_iterations, "stopped early");
        }
        tracing::debug!(
            iterations = total_iterations,
            accepted_moves,
            improving_moves,
            front = front.len(),
            archive = front.archive().len(),
            "annealing finished"
        );

        let (entries, archive) = front.into_parts();
        let (front, front_scores): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .map(|e| (e.solution, e.scores))
            .unzip();

        Ok(MosaResult {
            front,
            front_scores,
            archive,
            iterations: total_iterations,
            temperature_steps,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            front_updates,
            stop_reason,
        })
    }
}

/// Metropolis criterion: always accept `delta < 0`, otherwise accept with
/// probability `exp(-delta / T)`.
///
/// No random number is drawn for `delta < 0`.
pub fn metropolis_accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        true
    } else if temperature > 0.0 {
        let probability = (-delta / temperature).exp();
        rng.random_range(0.0..1.0) < probability
    } else {
        false
    }
}

fn check_stop(
    config: &MosaConfig,
    cancel: Option<&AtomicBool>,
    deadline: Option<Instant>,
    iterations: usize,
) -> Option<StopReason> {
    if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
        return Some(StopReason::Cancelled);
    }
    if config.max_iterations > 0 && iterations >= config.max_iterations {
        return Some(StopReason::IterationLimit);
    }
    if deadline.is_some_and(|d| Instant::now() >= d) {
        return Some(StopReason::TimeLimit);
    }
    None
}
