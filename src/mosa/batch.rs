//! Parallel execution over independent instances.
//!
//! Every run owns its instance, chain, front and random stream; nothing is
//! shared between runs, so a failing instance does not affect the others.

use rayon::prelude::*;

use super::config::MosaConfig;
use super::runner::{MosaResult, MosaRunner};
use crate::error::Result;
use crate::knapsack::ProblemInstance;

/// Runs every instance with `config` on the rayon thread pool.
///
/// With a seed set, instance `i` uses seed `seed + i`, so the batch is
/// reproducible regardless of scheduling. Results come back in input order.
pub fn run_batch(instances: &[ProblemInstance], config: &MosaConfig) -> Vec<Result<MosaResult>> {
    instances
        .par_iter()
        .enumerate()
        .map(|(i, instance)| {
            let config = match config.seed {
                Some(seed) => config.clone().with_seed(seed.wrapping_add(i as u64)),
                None => config.clone(),
            };
            MosaRunner::run(instance, &config)
        })
        .collect()
}
