//! Pareto dominance for maximized objective vectors.

use crate::error::Result;
use crate::knapsack::{per_objective_scores, ProblemInstance, Solution};

/// Dominance comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other (trade-off or identical vectors).
    Neither,
}

/// Compares two objective vectors under Pareto dominance (maximization).
///
/// Vectors of different lengths are incomparable and yield
/// [`Dominance::Neither`].
///
/// # Examples
///
/// ```
/// use u_mosa::pareto::{dominance_cmp, Dominance};
///
/// assert_eq!(dominance_cmp(&[4.0, 4.0], &[3.0, 4.0]), Dominance::Left);
/// assert_eq!(dominance_cmp(&[3.0, 5.0], &[5.0, 3.0]), Dominance::Neither);
/// assert_eq!(dominance_cmp(&[2.0, 2.0], &[2.0, 2.0]), Dominance::Neither);
/// ```
pub fn dominance_cmp(a: &[f64], b: &[f64]) -> Dominance {
    if a.len() != b.len() {
        return Dominance::Neither;
    }

    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va > vb {
            a_better_in_some = true;
        } else if vb > va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// `true` iff `a` is at least as good as `b` everywhere and strictly
/// better somewhere.
pub fn dominates_scores(a: &[f64], b: &[f64]) -> bool {
    dominance_cmp(a, b) == Dominance::Left
}

/// Dominance between two knapsack solutions, on their per-objective
/// aggregate values.
///
/// # Errors
///
/// [`MosaError::IndexOutOfRange`](crate::MosaError::IndexOutOfRange) if
/// either solution names an object outside the instance.
pub fn dominates(instance: &ProblemInstance, a: &Solution, b: &Solution) -> Result<bool> {
    Ok(dominates_scores(
        &per_objective_scores(instance, a)?,
        &per_objective_scores(instance, b)?,
    ))
}
