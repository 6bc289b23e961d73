//! Property-based tests for dominance, front maintenance and the annealing loop.

use proptest::prelude::*;
use u_mosa::knapsack::{per_objective_scores, ProblemInstance, Solution};
use u_mosa::mosa::{metropolis_accept, MosaConfig, MosaRunner};
use u_mosa::pareto::{dominates, dominates_scores, ParetoFront};
use u_numflow::random::create_rng;

/// Instance with 1..=8 objects, 1..=3 objectives, strictly positive values.
fn instance_strategy() -> impl Strategy<Value = ProblemInstance> {
    (1usize..=8, 1usize..=3).prop_flat_map(|(objects, objectives)| {
        (
            0.0f64..40.0,
            prop::collection::vec(0.0f64..10.0, objects),
            prop::collection::vec(prop::collection::vec(1u32..20, objects), objectives),
        )
            .prop_map(|(capacity, weights, values)| {
                let values = values
                    .into_iter()
                    .map(|row| row.into_iter().map(f64::from).collect())
                    .collect();
                ProblemInstance::new(capacity, weights, values).unwrap()
            })
    })
}

/// An instance plus a list of subsets of its objects.
fn instance_with_solutions(
    max_solutions: usize,
) -> impl Strategy<Value = (ProblemInstance, Vec<Solution>)> {
    instance_strategy().prop_flat_map(move |inst| {
        let n = inst.object_count();
        let subsets = prop::collection::vec(prop::collection::vec(any::<bool>(), n), 1..max_solutions)
            .prop_map(|masks| {
                masks
                    .into_iter()
                    .map(|mask| {
                        mask.into_iter()
                            .enumerate()
                            .filter_map(|(i, keep)| keep.then_some(i))
                            .collect::<Solution>()
                    })
                    .collect::<Vec<_>>()
            });
        (Just(inst), subsets)
    })
}

proptest! {
    #[test]
    fn dominance_is_irreflexive((inst, sols) in instance_with_solutions(6)) {
        for s in &sols {
            prop_assert!(!dominates(&inst, s, s).unwrap());
        }
    }

    #[test]
    fn dominance_is_asymmetric((inst, sols) in instance_with_solutions(6)) {
        for a in &sols {
            for b in &sols {
                let ab = dominates(&inst, a, b).unwrap();
                let ba = dominates(&inst, b, a).unwrap();
                prop_assert!(!(ab && ba));
            }
        }
    }

    #[test]
    fn front_stays_non_dominated((inst, sols) in instance_with_solutions(30)) {
        let mut front = ParetoFront::new(&inst, Solution::singleton(0)).unwrap();
        let mut admitted = vec![Solution::singleton(0)];
        let mut archive_len = front.archive().len();

        for s in &sols {
            let outcome = front.consider(&inst, s).unwrap();
            if outcome.changed() {
                admitted.push(s.clone());
            }

            // Archive grows by exactly one on admission, otherwise stays put.
            let expected = archive_len + usize::from(outcome.changed());
            prop_assert_eq!(front.archive().len(), expected);
            archive_len = expected;

            for a in front.entries() {
                for b in front.entries() {
                    if a.solution != b.solution {
                        prop_assert!(!dominates_scores(&a.scores, &b.scores));
                    }
                }
            }
        }

        for s in &admitted {
            prop_assert!(front.archive().contains(s));
        }
        for e in front.entries() {
            prop_assert!(front.archive().contains(&e.solution));
        }
    }

    #[test]
    fn front_members_are_not_dominated_by_any_offered(
        (inst, sols) in instance_with_solutions(30)
    ) {
        let mut front = ParetoFront::new(&inst, Solution::singleton(0)).unwrap();
        for s in &sols {
            front.consider(&inst, s).unwrap();
        }
        let mut offered = sols.clone();
        offered.push(Solution::singleton(0));
        for e in front.entries() {
            for s in &offered {
                let scores = per_objective_scores(&inst, s).unwrap();
                prop_assert!(!dominates_scores(&scores, &e.scores));
            }
        }
    }

    #[test]
    fn improvement_always_accepted(
        delta in -1e6f64..-1e-12,
        temperature in 1e-12f64..1e6,
        seed in any::<u64>(),
    ) {
        let mut rng = create_rng(seed);
        prop_assert!(metropolis_accept(delta, temperature, &mut rng));
    }

    #[test]
    fn run_output_is_consistent(inst in instance_strategy(), seed in any::<u64>()) {
        let config = MosaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(0.5)
            .with_cooling_factor(0.8)
            .with_iterations_per_temperature(15)
            .with_seed(seed);
        let result = MosaRunner::run(&inst, &config).unwrap();

        prop_assert_eq!(result.temperature_steps, config.temperature_steps());
        prop_assert_eq!(result.archive.len(), result.front_updates + 1);
        prop_assert_eq!(result.front.len(), result.front_scores.len());
        for s in &result.front {
            prop_assert!(result.archive.contains(s));
            prop_assert!(!s.is_empty());
        }
        for (i, a) in result.front_scores.iter().enumerate() {
            for (j, b) in result.front_scores.iter().enumerate() {
                if i != j {
                    prop_assert!(!dominates_scores(a, b));
                }
            }
        }
    }
}
