//! Incrementally maintained Pareto front with an append-only archive.
//!
//! # Algorithm
//!
//! For every candidate offered through [`ParetoFront::consider`]:
//!
//! 1. If an identical index set is already a member, nothing happens
//! 2. Otherwise one scan of the front finds the members the candidate
//!    dominates and whether any member dominates the candidate
//! 3. A dominated candidate is discarded
//! 4. Otherwise the dominated members are dropped, and the candidate is
//!    appended to both the front and the archive
//!
//! Member score vectors are computed once on admission and kept alongside
//! the solution, so a scan costs `O(n · m)` comparisons and no
//! re-evaluation.

use super::dominance::{dominance_cmp, Dominance};
use crate::error::{MosaError, Result};
use crate::knapsack::{per_objective_scores, ProblemInstance, Solution};

/// A front member and its per-objective aggregate values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrontEntry {
    pub solution: Solution,
    pub scores: Vec<f64>,
}

/// Outcome of offering a candidate to the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The same index set is already a member. Nothing changed.
    AlreadyPresent,
    /// Some member dominates the candidate. Nothing changed.
    Dominated,
    /// The candidate joined the front and the archive after evicting
    /// `evicted` dominated members.
    Admitted {
        /// Number of members removed.
        evicted: usize,
    },
}

impl Admission {
    /// Whether the front was mutated.
    pub fn changed(self) -> bool {
        matches!(self, Admission::Admitted { .. })
    }
}

/// A set of mutually non-dominated solutions plus the history of every
/// solution ever admitted.
///
/// # Examples
///
/// ```
/// use u_mosa::knapsack::{ProblemInstance, Solution};
/// use u_mosa::pareto::{Admission, ParetoFront};
///
/// let instance = ProblemInstance::new(
///     5.0,
///     vec![2.0, 2.0, 2.0],
///     vec![vec![3.0, 5.0, 4.0], vec![5.0, 3.0, 4.0]],
/// )
/// .unwrap();
///
/// let mut front = ParetoFront::new(&instance, Solution::singleton(0))?;
/// let outcome = front.consider(&instance, &Solution::singleton(1))?;
///
/// assert_eq!(outcome, Admission::Admitted { evicted: 0 });
/// assert_eq!(front.len(), 2);
/// assert_eq!(front.archive().len(), 2);
/// # Ok::<(), u_mosa::MosaError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParetoFront {
    objective_count: usize,
    members: Vec<FrontEntry>,
    archive: Vec<Solution>,
}

impl ParetoFront {
    /// Starts a front (and archive) holding only `initial`.
    ///
    /// # Errors
    ///
    /// [`MosaError::IndexOutOfRange`] if `initial` names an object outside
    /// the instance.
    pub fn new(instance: &ProblemInstance, initial: Solution) -> Result<Self> {
        let scores = per_objective_scores(instance, &initial)?;
        Ok(Self {
            objective_count: instance.objective_count(),
            archive: vec![initial.clone()],
            members: vec![FrontEntry {
                solution: initial,
                scores,
            }],
        })
    }

    /// Offers `candidate` to the front.
    ///
    /// # Errors
    ///
    /// [`MosaError::IndexOutOfRange`] if `candidate` names an object outside
    /// the instance. The front is left unchanged.
    pub fn consider(
        &mut self,
        instance: &ProblemInstance,
        candidate: &Solution,
    ) -> Result<Admission> {
        if self.contains(candidate) {
            return Ok(Admission::AlreadyPresent);
        }
        let scores = per_objective_scores(instance, candidate)?;
        self.consider_scored(candidate, scores)
    }

    /// Same as [`consider`](Self::consider) with the candidate's objective
    /// vector already computed.
    ///
    /// # Errors
    ///
    /// [`MosaError::ObjectiveCountMismatch`] if `scores` does not hold one
    /// value per objective. The front is left unchanged.
    pub fn consider_scored(&mut self, candidate: &Solution, scores: Vec<f64>) -> Result<Admission> {
        if scores.len() != self.objective_count {
            return Err(MosaError::ObjectiveCountMismatch {
                expected: self.objective_count,
                found: scores.len(),
            });
        }
        if self.contains(candidate) {
            return Ok(Admission::AlreadyPresent);
        }

        let mut dominated_by_candidate = vec![false; self.members.len()];
        for (flag, member) in dominated_by_candidate.iter_mut().zip(&self.members) {
            match dominance_cmp(&scores, &member.scores) {
                Dominance::Left => *flag = true,
                Dominance::Right => return Ok(Admission::Dominated),
                Dominance::Neither => {}
            }
        }

        let before = self.members.len();
        let mut flags = dominated_by_candidate.into_iter();
        self.members.retain(|_| !flags.next().unwrap_or(false));
        let evicted = before - self.members.len();

        self.members.push(FrontEntry {
            solution: candidate.clone(),
            scores,
        });
        self.archive.push(candidate.clone());

        Ok(Admission::Admitted { evicted })
    }

    /// Whether an identical index set is a member.
    pub fn contains(&self, solution: &Solution) -> bool {
        self.members.iter().any(|m| &m.solution == solution)
    }

    /// Number of objectives each member is scored on.
    pub fn objective_count(&self) -> usize {
        self.objective_count
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Current members, in admission order.
    pub fn entries(&self) -> &[FrontEntry] {
        &self.members
    }

    /// Current member solutions, in admission order.
    pub fn solutions(&self) -> Vec<Solution> {
        self.members.iter().map(|m| m.solution.clone()).collect()
    }

    /// Objective vector of a member, if `solution` is one.
    pub fn scores_of(&self, solution: &Solution) -> Option<&[f64]> {
        self.members
            .iter()
            .find(|m| &m.solution == solution)
            .map(|m| m.scores.as_slice())
    }

    /// Every solution ever admitted, oldest first.
    pub fn archive(&self) -> &[Solution] {
        &self.archive
    }

    /// Members ordered ascending by `objective`, ties in admission order.
    ///
    /// In two dimensions this traces the front as a polyline. Returns
    /// `None` if `objective` is not below the objective count.
    pub fn sorted_by_objective(&self, objective: usize) -> Option<Vec<&FrontEntry>> {
        if objective >= self.objective_count {
            return None;
        }
        let mut sorted: Vec<&FrontEntry> = self.members.iter().collect();
        sorted.sort_by(|a, b| a.scores[objective].total_cmp(&b.scores[objective]));
        Some(sorted)
    }

    /// Splits into `(front entries, archive)`.
    pub fn into_parts(self) -> (Vec<FrontEntry>, Vec<Solution>) {
        (self.members, self.archive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pareto::dominates_scores;

    fn sample() -> ProblemInstance {
        ProblemInstance::new(
            5.0,
            vec![2.0, 2.0, 2.0],
            vec![vec![3.0, 5.0, 4.0], vec![5.0, 3.0, 4.0]],
        )
        .unwrap()
    }

    fn assert_mutually_non_dominated(front: &ParetoFront) {
        for (i, a) in front.entries().iter().enumerate() {
            for (j, b) in front.entries().iter().enumerate() {
                if i != j {
                    assert!(
                        !dominates_scores(&a.scores, &b.scores),
                        "{:?} dominates {:?}",
                        a.solution,
                        b.solution
                    );
                }
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let inst = sample();
        let front = ParetoFront::new(&inst, Solution::singleton(0)).unwrap();
        assert_eq!(front.len(), 1);
        assert_eq!(front.archive(), &[Solution::singleton(0)]);
        assert_eq!(front.scores_of(&Solution::singleton(0)), Some(&[3.0, 5.0][..]));
    }

    #[test]
    fn test_trade_off_points_coexist() {
        let inst = sample();
        let mut front = ParetoFront::new(&inst, Solution::singleton(0)).unwrap();
        assert!(front.consider(&inst, &Solution::singleton(1)).unwrap().changed());
        assert_eq!(front.len(), 2);
        assert!(front.contains(&Solution::singleton(0)));
        assert!(front.contains(&Solution::singleton(1)));
        assert_mutually_non_dominated(&front);
    }

    #[test]
    fn test_duplicate_is_noop() {
        let inst = sample();
        let mut front = ParetoFront::new(&inst, Solution::singleton(0)).unwrap();
        front.consider(&inst, &Solution::singleton(1)).unwrap();
        let before = front.clone();

        assert_eq!(
            front.consider(&inst, &Solution::singleton(1)).unwrap(),
            Admission::AlreadyPresent
        );
        assert_eq!(front, before);
    }

    #[test]
    fn test_dominated_candidate_discarded() {
        let inst = sample();
        let mut front = ParetoFront::new(&inst, Solution::from_indices([0, 1])).unwrap();
        let before = front.clone();

        assert_eq!(
            front.consider(&inst, &Solution::singleton(2)).unwrap(),
            Admission::Dominated
        );
        assert_eq!(front, before);
        assert_eq!(front.archive().len(), 1);
    }

    #[test]
    fn test_dominating_candidate_evicts() {
        let inst = sample();
        let mut front = ParetoFront::new(&inst, Solution::singleton(0)).unwrap();
        front.consider(&inst, &Solution::singleton(1)).unwrap();

        // (12, 12) dominates both singletons.
        let all = Solution::from_indices([0, 1, 2]);
        assert_eq!(
            front.consider(&inst, &all).unwrap(),
            Admission::Admitted { evicted: 2 }
        );
        assert_eq!(front.solutions(), vec![all.clone()]);
        // Archive keeps history.
        assert_eq!(front.archive().len(), 3);
        assert_eq!(front.archive().last(), Some(&all));
    }

    #[test]
    fn test_identical_scores_both_kept() {
        let inst = ProblemInstance::new(
            10.0,
            vec![1.0; 3],
            vec![vec![3.0, 5.0, 8.0], vec![5.0, 3.0, 8.0]],
        )
        .unwrap();
        let mut front = ParetoFront::new(&inst, Solution::from_indices([0, 1])).unwrap();
        assert!(front.consider(&inst, &Solution::singleton(2)).unwrap().changed());
        assert_eq!(front.len(), 2);
    }

    #[test]
    fn test_partial_eviction() {
        let inst = ProblemInstance::new(
            10.0,
            vec![1.0; 4],
            vec![vec![1.0, 6.0, 3.0, 2.0], vec![6.0, 1.0, 3.0, 2.0]],
        )
        .unwrap();
        let mut front = ParetoFront::new(&inst, Solution::singleton(0)).unwrap(); // (1, 6)
        front.consider(&inst, &Solution::singleton(1)).unwrap(); // (6, 1)
        front.consider(&inst, &Solution::singleton(3)).unwrap(); // (2, 2)
        assert_eq!(front.len(), 3);

        // (3, 3) dominates (2, 2) only.
        assert_eq!(
            front.consider(&inst, &Solution::singleton(2)).unwrap(),
            Admission::Admitted { evicted: 1 }
        );
        assert_eq!(front.len(), 3);
        assert!(!front.contains(&Solution::singleton(3)));
        assert_mutually_non_dominated(&front);
    }

    #[test]
    fn test_sorted_by_objective() {
        let inst = sample();
        let mut front = ParetoFront::new(&inst, Solution::singleton(1)).unwrap(); // (5, 3)
        front.consider(&inst, &Solution::singleton(0)).unwrap(); // (3, 5)
        front.consider(&inst, &Solution::singleton(2)).unwrap(); // (4, 4)
        let xs: Vec<f64> = front
            .sorted_by_objective(0)
            .unwrap()
            .iter()
            .map(|e| e.scores[0])
            .collect();
        assert_eq!(xs, vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_out_of_range_candidate_is_error() {
        let inst = sample();
        let mut front = ParetoFront::new(&inst, Solution::singleton(0)).unwrap();
        let before = front.clone();

        assert_eq!(
            front.consider(&inst, &Solution::singleton(9)),
            Err(MosaError::IndexOutOfRange {
                index: 9,
                object_count: 3
            })
        );
        assert_eq!(front, before);
        assert!(ParetoFront::new(&inst, Solution::from_indices([1, 4])).is_err());
    }

    #[test]
    fn test_short_score_vector_rejected() {
        let inst = sample();
        let mut front = ParetoFront::new(&inst, Solution::singleton(0)).unwrap();
        let before = front.clone();

        assert_eq!(
            front.consider_scored(&Solution::singleton(1), vec![100.0]),
            Err(MosaError::ObjectiveCountMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(front, before);
        assert_eq!(front.scores_of(&Solution::singleton(0)), Some(&[3.0, 5.0][..]));
    }

    #[test]
    fn test_sorted_by_unknown_objective() {
        let inst = sample();
        let front = ParetoFront::new(&inst, Solution::singleton(0)).unwrap();
        assert!(front.sorted_by_objective(2).is_none());
        assert_eq!(front.objective_count(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_front_serializes_but_entries_round_trip() {
        fn serializable<T: serde::Serialize>(_: &T) {}
        fn deserializable<T: serde::de::DeserializeOwned>() {}

        let front = ParetoFront::new(&sample(), Solution::singleton(0)).unwrap();
        serializable(&front);
        deserializable::<FrontEntry>();
    }
}
