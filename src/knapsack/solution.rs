//! Knapsack solution representation and its neighbor operator.

use std::collections::BTreeSet;

use rand::Rng;

use super::instance::ProblemInstance;

/// A set of chosen object indices.
///
/// Backed by an ordered set so that iteration order, and therefore the
/// position drawn by the remove move, is reproducible for a given seed.
/// Adding an index that is already present leaves the set unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    items: BTreeSet<usize>,
}

impl Solution {
    /// The empty knapsack.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A knapsack holding only `index`.
    pub fn singleton(index: usize) -> Self {
        Self::from_indices([index])
    }

    /// Builds a solution from indices; duplicates collapse.
    pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        Self {
            items: indices.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.items.contains(&index)
    }

    /// Chosen indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().copied()
    }

    /// Returns a copy with `index` added.
    pub fn with(&self, index: usize) -> Self {
        let mut items = self.items.clone();
        items.insert(index);
        Self { items }
    }

    /// Returns a copy with `index` removed.
    pub fn without(&self, index: usize) -> Self {
        let mut items = self.items.clone();
        items.remove(&index);
        Self { items }
    }
}

impl FromIterator<usize> for Solution {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_indices(iter)
    }
}

/// How the add move picks the index it inserts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborPolicy {
    /// Draws any index in `[0, object_count)` once the current weight is
    /// strictly below capacity.
    ///
    /// The drawn index may already be chosen (no move), and the added
    /// object may push the knapsack over capacity.
    #[default]
    Permissive,

    /// Draws uniformly among absent objects whose addition keeps the
    /// total weight within capacity. No move when none qualifies.
    Distinct,
}

/// Produces a single-element perturbation of `solution`.
///
/// An empty solution always takes the add branch; otherwise a fair coin
/// chooses between add and remove. Removal never empties a singleton, so
/// the empty set is only ever an initial state.
pub fn neighbor<R: Rng>(
    instance: &ProblemInstance,
    solution: &Solution,
    policy: NeighborPolicy,
    rng: &mut R,
) -> Solution {
    let add = solution.is_empty() || rng.random_bool(0.5);

    if add {
        let weight = instance.total_weight(solution);
        match policy {
            NeighborPolicy::Permissive => {
                if weight < instance.capacity() {
                    let index = rng.random_range(0..instance.object_count());
                    return solution.with(index);
                }
            }
            NeighborPolicy::Distinct => {
                let room = instance.capacity() - weight;
                let candidates: Vec<usize> = (0..instance.object_count())
                    .filter(|&i| !solution.contains(i) && instance.weights()[i] <= room)
                    .collect();
                if !candidates.is_empty() {
                    let index = candidates[rng.random_range(0..candidates.len())];
                    return solution.with(index);
                }
            }
        }
    } else if solution.len() > 1 {
        let position = rng.random_range(0..solution.len());
        if let Some(index) = solution.iter().nth(position) {
            return solution.without(index);
        }
    }

    solution.clone()
}
