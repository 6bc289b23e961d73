//! Front-update notifications.
//!
//! The runner calls [`FrontObserver::on_front_update`] every time the front
//! changes, so a caller can stream the front (e.g. to a plot) at its own
//! cadence without touching the annealing loop.

use crate::knapsack::Solution;
use crate::pareto::{FrontEntry, ParetoFront};

/// State of the search right after the front changed.
#[derive(Debug, Clone, Copy)]
pub struct FrontUpdate<'a> {
    /// Inner iteration (1-based) that produced the change.
    pub iteration: usize,
    /// Temperature at that iteration.
    pub temperature: f64,
    /// Number of members evicted by the admitted solution.
    pub evicted: usize,
    front: &'a ParetoFront,
}

impl<'a> FrontUpdate<'a> {
    pub(crate) fn new(
        iteration: usize,
        temperature: f64,
        evicted: usize,
        front: &'a ParetoFront,
    ) -> Self {
        Self {
            iteration,
            temperature,
            evicted,
            front,
        }
    }

    /// Current front members.
    pub fn front(&self) -> &'a [FrontEntry] {
        self.front.entries()
    }

    /// Every solution admitted so far.
    pub fn archive(&self) -> &'a [Solution] {
        self.front.archive()
    }

    /// The solution that was just admitted.
    pub fn admitted(&self) -> Option<&'a Solution> {
        self.front.archive().last()
    }
}

/// Receives front-update notifications.
///
/// Any `FnMut(&FrontUpdate)` closure is an observer.
pub trait FrontObserver {
    fn on_front_update(&mut self, update: &FrontUpdate<'_>);
}

impl<F> FrontObserver for F
where
    F: FnMut(&FrontUpdate<'_>),
{
    fn on_front_update(&mut self, update: &FrontUpdate<'_>) {
        self(update)
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl FrontObserver for NoopObserver {
    fn on_front_update(&mut self, _update: &FrontUpdate<'_>) {}
}
