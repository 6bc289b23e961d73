//! Immutable multi-objective knapsack instance.

use super::solution::Solution;
use crate::error::{MosaError, Result};

/// A multi-objective knapsack instance.
///
/// Holds one weight per object and, for every objective, one value per
/// object. `values[o][i]` is the contribution of object `i` to objective
/// `o`. Construction validates every shape and sign constraint, so an
/// existing instance is always well formed.
///
/// # Examples
///
/// ```
/// use u_mosa::knapsack::ProblemInstance;
///
/// let instance = ProblemInstance::new(
///     5.0,
///     vec![2.0, 2.0, 2.0],
///     vec![vec![3.0, 5.0, 4.0], vec![5.0, 3.0, 4.0]],
/// )
/// .unwrap();
/// assert_eq!(instance.objective_count(), 2);
/// assert_eq!(instance.object_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProblemInstance {
    capacity: f64,
    weights: Vec<f64>,
    values: Vec<Vec<f64>>,
}

impl ProblemInstance {
    /// Builds an instance, inferring the counts from the sequences.
    pub fn new(capacity: f64, weights: Vec<f64>, values: Vec<Vec<f64>>) -> Result<Self> {
        Self::with_counts(values.len(), weights.len(), capacity, weights, values)
    }

    /// Builds an instance from the declared counts of a problem source.
    ///
    /// The declared `objective_count` and `object_count` must agree with
    /// the lengths of `values` and `weights`.
    pub fn with_counts(
        objective_count: usize,
        object_count: usize,
        capacity: f64,
        weights: Vec<f64>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if objective_count == 0 {
            return Err(malformed("objective_count must be positive"));
        }
        if object_count == 0 {
            return Err(malformed("object_count must be positive"));
        }
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(malformed(format!(
                "capacity must be finite and non-negative, got {capacity}"
            )));
        }
        if weights.len() != object_count {
            return Err(malformed(format!(
                "weights has {} entries, expected {object_count}",
                weights.len()
            )));
        }
        if let Some((i, w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(malformed(format!(
                "weight of object {i} must be finite and non-negative, got {w}"
            )));
        }
        if values.len() != objective_count {
            return Err(malformed(format!(
                "values has {} objective rows, expected {objective_count}",
                values.len()
            )));
        }
        for (o, row) in values.iter().enumerate() {
            if row.len() != object_count {
                return Err(malformed(format!(
                    "objective {o} has {} values, expected {object_count}",
                    row.len()
                )));
            }
            if let Some((i, v)) = row.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(malformed(format!(
                    "value of object {i} in objective {o} is not finite: {v}"
                )));
            }
        }

        Ok(Self {
            capacity,
            weights,
            values,
        })
    }

    /// Returns a copy that evaluates only the first `limit` objectives.
    ///
    /// A limit at or above the current objective count returns an
    /// identical instance.
    pub fn reduced_to(&self, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(MosaError::InvalidConfig(
                "objective limit must be positive".into(),
            ));
        }
        let keep = limit.min(self.values.len());
        Ok(Self {
            capacity: self.capacity,
            weights: self.weights.clone(),
            values: self.values[..keep].to_vec(),
        })
    }

    /// Number of objectives evaluated.
    pub fn objective_count(&self) -> usize {
        self.values.len()
    }

    /// Number of selectable objects.
    pub fn object_count(&self) -> usize {
        self.weights.len()
    }

    /// Knapsack capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Per-object weights, indexed by object.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Value rows, one per objective, each indexed by object.
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Value of `object` in `objective`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn value(&self, objective: usize, object: usize) -> f64 {
        self.values[objective][object]
    }

    /// Sum of the weights of the chosen objects.
    pub fn total_weight(&self, solution: &Solution) -> f64 {
        solution.iter().map(|i| self.weights[i]).sum()
    }

    /// Whether the chosen objects fit in the knapsack.
    pub fn is_feasible(&self, solution: &Solution) -> bool {
        self.total_weight(solution) <= self.capacity
    }

    /// Checks that every index of `solution` names an object of this instance.
    pub fn check_solution(&self, solution: &Solution) -> Result<()> {
        match solution.iter().find(|&i| i >= self.object_count()) {
            Some(index) => Err(MosaError::IndexOutOfRange {
                index,
                object_count: self.object_count(),
            }),
            None => Ok(()),
        }
    }
}

fn malformed(msg: impl Into<String>) -> MosaError {
    MosaError::MalformedInstance(msg.into())
}
