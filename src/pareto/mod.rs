//! Pareto dominance and front maintenance.
//!
//! All objectives are **maximized**: a higher aggregate value is better.
//!
//! - [`dominance_cmp`] / [`dominates`]: pairwise Pareto dominance
//! - [`ParetoFront`]: non-dominated set with an append-only archive
//!
//! # References
//!
//! - Ehrgott (2005), *Multicriteria Optimization*
//! - Czyzak & Jaszkiewicz (1998), "Pareto simulated annealing"

mod dominance;
mod front;

pub use dominance::{dominance_cmp, dominates, dominates_scores, Dominance};
pub use front::{Admission, FrontEntry, ParetoFront};
