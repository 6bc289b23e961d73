//! Objective evaluation.
//!
//! Two views of a solution are computed here:
//!
//! - [`approximate_objective`]: a single scalar, `Σ_i Σ_o ln(values[o][i])`,
//!   that drives the Metropolis acceptance rule.
//! - [`per_objective_scores`]: the true objective vector
//!   `(Σ_i values[0][i], …, Σ_i values[m-1][i])`, used for dominance.

use super::instance::ProblemInstance;
use super::solution::Solution;
use crate::error::{MosaError, Result};

/// Log-sum scalarization of a solution across all objectives.
///
/// The empty solution scores `0.0`.
///
/// # Errors
///
/// - [`MosaError::IndexOutOfRange`] if the solution names an unknown object.
/// - [`MosaError::NonPositiveValue`] at the first value `≤ 0` reached,
///   scanning chosen objects in ascending order and objectives in order.
pub fn approximate_objective(instance: &ProblemInstance, solution: &Solution) -> Result<f64> {
    let mut sum = 0.0;
    for object in solution.iter() {
        if object >= instance.object_count() {
            return Err(MosaError::IndexOutOfRange {
                index: object,
                object_count: instance.object_count(),
            });
        }
        for (objective, row) in instance.values().iter().enumerate() {
            let value = row[object];
            if value <= 0.0 {
                return Err(MosaError::NonPositiveValue {
                    objective,
                    object,
                    value,
                });
            }
            sum += value.ln();
        }
    }
    Ok(sum)
}

/// Aggregate value of the chosen objects, one entry per objective.
///
/// # Errors
///
/// [`MosaError::IndexOutOfRange`] if the solution names an unknown object.
pub fn per_objective_scores(
    instance: &ProblemInstance,
    solution: &Solution,
) -> Result<Vec<f64>> {
    instance.check_solution(solution)?;
    Ok(instance
        .values()
        .iter()
        .map(|row| solution.iter().map(|i| row[i]).sum())
        .collect())
}

/// A solution together with both of its evaluations.
///
/// Computed on demand; it is a snapshot and is never updated in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredSolution {
    pub solution: Solution,
    /// Scalar used by the acceptance rule.
    pub approximate: f64,
    /// Per-objective aggregate values.
    pub scores: Vec<f64>,
}

impl ScoredSolution {
    /// Evaluates `solution` against `instance`.
    pub fn evaluate(instance: &ProblemInstance, solution: Solution) -> Result<Self> {
        let approximate = approximate_objective(instance, &solution)?;
        let scores = per_objective_scores(instance, &solution)?;
        Ok(Self {
            solution,
            approximate,
            scores,
        })
    }
}
