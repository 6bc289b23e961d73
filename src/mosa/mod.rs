//! Multi-objective Simulated Annealing (MOSA).
//!
//! A single annealing chain explores the knapsack solution space under a
//! log-sum scalarization, while every proposed neighbor is offered to a
//! Pareto front. The chain supplies diversity; the front keeps the
//! non-dominated solutions it has seen.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Serafini (1994), "Simulated annealing for multi objective optimization problems"
//! - Ulungu et al. (1999), "MOSA method: a tool for solving multiobjective
//!   combinatorial optimization problems"

#[cfg(feature = "parallel")]
mod batch;
mod config;
mod observer;
mod runner;

#[cfg(feature = "parallel")]
pub use batch::run_batch;
pub use config::MosaConfig;
pub use observer::{FrontObserver, FrontUpdate, NoopObserver};
pub use runner::{metropolis_accept, MosaResult, MosaRunner, StopReason};
