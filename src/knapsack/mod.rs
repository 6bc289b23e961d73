//! Multi-objective 0/1 knapsack model.
//!
//! - [`ProblemInstance`]: objects, weights, per-objective values, capacity
//! - [`Solution`]: a set of chosen object indices
//! - [`neighbor`]: single-element add/remove perturbation
//! - [`approximate_objective`] / [`per_objective_scores`]: scalar and
//!   vector evaluations of a solution

mod evaluator;
mod instance;
mod solution;

pub use evaluator::{approximate_objective, per_objective_scores, ScoredSolution};
pub use instance::ProblemInstance;
pub use solution::{neighbor, NeighborPolicy, Solution};
