//! Multi-objective simulated annealing for 0/1 knapsack problems.
//!
//! Searches for an approximation of the Pareto front of a multi-objective
//! knapsack instance with a single annealing chain:
//!
//! - **Knapsack model** ([`knapsack`]): immutable instances, set-based
//!   solutions, the add/remove neighbor move, and objective evaluation
//!   (log-sum scalarization and per-objective aggregates).
//! - **Pareto front** ([`pareto`]): dominance tests and an incrementally
//!   maintained non-dominated set with an append-only archive.
//! - **Annealing** ([`mosa`]): geometric cooling, Metropolis acceptance,
//!   cancellation and budgets, and front-update observers.
//!
//! # Architecture
//!
//! Randomness comes from `u-numflow` (one seedable stream per run).
//! Problem-file parsing and any rendering of the front live with the
//! caller; an observer receives each front change as it happens.
//!
//! # Example
//!
//! ```
//! use u_mosa::knapsack::ProblemInstance;
//! use u_mosa::mosa::{MosaConfig, MosaRunner};
//!
//! let instance = ProblemInstance::new(
//!     5.0,
//!     vec![2.0, 2.0, 2.0],
//!     vec![vec![3.0, 5.0, 4.0], vec![5.0, 3.0, 4.0]],
//! )?;
//! let result = MosaRunner::run(&instance, &MosaConfig::default().with_seed(1))?;
//! for (solution, scores) in result.front.iter().zip(&result.front_scores) {
//!     println!("{:?} -> {:?}", solution, scores);
//! }
//! # Ok::<(), u_mosa::MosaError>(())
//! ```

pub mod error;
pub mod knapsack;
pub mod mosa;
pub mod pareto;

pub use error::{MosaError, Result};
