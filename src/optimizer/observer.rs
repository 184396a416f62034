//! Solve Observer

use tracing::{debug, trace};

/// Observer trait for watching the backward induction as it fills the tables.
///
/// The optimizer remains the only implementation of the recurrence; observers
/// passively record what happens for logging or analysis purposes. When no
/// observer is supplied the optimizer uses [`NoopObserver`].
pub trait SolveObserver {
    /// Called once the terminal row (`week == weeks`) has been set to zero.
    ///
    /// # Parameters
    ///
    /// - `weeks`: Index of the terminal week boundary
    /// - `max_workers`: Largest workforce level in the state space
    fn on_boundary(&mut self, _weeks: usize, _max_workers: u32) {}

    /// Called whenever a candidate strictly improves the best cost at a state.
    ///
    /// # Parameters
    ///
    /// - `week`: Week index of the state
    /// - `workforce`: Workforce level at the start of the week
    /// - `hires`: Candidate number of new hires
    /// - `cost`: Cost from this week onward when hiring `hires`
    fn on_improvement(&mut self, _week: usize, _workforce: u32, _hires: u32, _cost: u64) {}

    /// Called after every workforce level of a week has been evaluated.
    ///
    /// # Parameters
    ///
    /// - `week`: Week index of the completed row
    /// - `row`: Minimal costs for each workforce level (`None` if unreached)
    fn on_week_complete(&mut self, _week: usize, _row: &[Option<u64>]) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SolveObserver for NoopObserver {}

/// Observer that forwards fill-phase events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SolveObserver for TracingObserver {
    fn on_boundary(&mut self, weeks: usize, max_workers: u32) {
        debug!(weeks, max_workers, "terminal row set to zero");
    }

    fn on_improvement(&mut self, week: usize, workforce: u32, hires: u32, cost: u64) {
        trace!(week, workforce, hires, cost, "improved state");
    }

    fn on_week_complete(&mut self, week: usize, row: &[Option<u64>]) {
        let reached = row.iter().filter(|cost| cost.is_some()).count();
        let best = row.iter().flatten().min().copied();

        debug!(week, reached, ?best, "week row complete");
    }
}
