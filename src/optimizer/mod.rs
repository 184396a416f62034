//! Workforce Optimizer
//!
//! Backward induction over `(week, workforce)` states. Row `weeks` of the cost
//! table is the terminal boundary and costs nothing; every earlier row is derived
//! from the row after it, so weeks are filled in decreasing order.

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    instance::{CostCoefficients, HiringInstance},
    plan::{HiringPlan, PlannedWeek},
};

pub mod observer;
pub mod table;

use observer::{SolveObserver, TracingObserver};
use table::Table;

/// Optimizer Errors
#[derive(Debug, Error)]
pub enum OptimizerError {
    /// The tables were queried before [`WorkforceOptimizer::solve`] ran.
    #[error("optimizer has not been solved yet")]
    NotSolved,

    /// A state on the optimal path has no recorded decision.
    #[error("no decision recorded for week {week} at workforce level {workforce}")]
    UnreachableState {
        /// Zero-based week index
        week: usize,

        /// Workforce level at the start of the week
        workforce: u32,
    },

    /// The minimal cost of the horizon does not fit in a `u64`.
    #[error("cost overflow while evaluating week {week}")]
    CostOverflow {
        /// Zero-based week index
        week: usize,
    },

    /// Internal optimizer invariant was violated (this is a bug).
    #[error("optimizer invariant violated: {message}")]
    InvariantViolation {
        /// What invariant was violated
        message: &'static str,
    },
}

/// Minimum-cost hiring planner for a single [`HiringInstance`].
///
/// Building the optimizer allocates a cost table and a decision table of
/// `(weeks + 1) × (max_workers + 1)` unreached entries. [`solve`](Self::solve)
/// fills both in one pass; afterwards the tables are read-only and
/// [`reconstruct_path`](Self::reconstruct_path) and
/// [`minimal_cost`](Self::minimal_cost) can be queried.
#[derive(Debug, Clone)]
pub struct WorkforceOptimizer {
    instance: HiringInstance,
    costs: Table<u64>,
    decisions: Table<u32>,
    solved: bool,
}

impl WorkforceOptimizer {
    /// Create an unsolved optimizer for `instance`.
    pub fn new(instance: HiringInstance) -> Self {
        let rows = instance.weeks() + 1;
        let columns = instance.max_workers() as usize + 1;

        Self {
            instance,
            costs: Table::new(rows, columns),
            decisions: Table::new(rows, columns),
            solved: false,
        }
    }

    /// The instance being optimized.
    pub fn instance(&self) -> &HiringInstance {
        &self.instance
    }

    /// Whether [`solve`](Self::solve) has filled the tables.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Minimal cost table, keyed by `(week, workforce)`.
    pub fn cost_table(&self) -> &Table<u64> {
        &self.costs
    }

    /// Decision table, keyed by `(week, workforce)`.
    pub fn decision_table(&self) -> &Table<u32> {
        &self.decisions
    }

    /// Fill the cost and decision tables, logging progress through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns an [`OptimizerError`] if the minimal cost overflows.
    pub fn solve(&mut self) -> Result<(), OptimizerError> {
        self.solve_with_observer(&mut TracingObserver)
    }

    /// Fill the cost and decision tables, reporting each step to `observer`.
    ///
    /// Solving an already solved optimizer does nothing. Candidates whose cost
    /// overflows are skipped; a state with no other candidate stays unreached.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizerError::CostOverflow`] if every way of covering the
    /// horizon from an empty workforce overflows.
    pub fn solve_with_observer<O: SolveObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<(), OptimizerError> {
        if self.solved {
            return Ok(());
        }

        let weeks = self.instance.weeks();
        let max_workers = self.instance.max_workers();
        let coefficients = self.instance.costs();

        info!(weeks, max_workers, "solving hiring plan");

        for workforce in 0..=max_workers {
            set_entry(&mut self.costs, weeks, workforce, 0)?;
        }

        observer.on_boundary(weeks, max_workers);

        let mut overflow_week = None;

        for (week, &requirement) in self.instance.requirements().iter().enumerate().rev() {
            for workforce in 0..=max_workers {
                let mut best: Option<(u64, u32)> = None;
                let mut overflowed = false;

                for hires in 0..=max_workers {
                    // Larger candidates only push the workforce further past the peak.
                    let Some(total) = workforce
                        .checked_add(hires)
                        .filter(|&total| total <= max_workers)
                    else {
                        break;
                    };

                    if total < requirement {
                        continue;
                    }

                    let Some(remaining) = self.costs.get(week + 1, total as usize) else {
                        continue;
                    };

                    // A candidate past `u64::MAX` loses to any candidate that fits.
                    let Some(cost) =
                        candidate_cost(coefficients, total - requirement, hires, remaining)
                    else {
                        overflowed = true;
                        continue;
                    };

                    if best.is_none_or(|(best_cost, _)| cost < best_cost) {
                        best = Some((cost, hires));
                        observer.on_improvement(week, workforce, hires, cost);
                    }
                }

                match best {
                    Some((cost, hires)) => {
                        set_entry(&mut self.costs, week, workforce, cost)?;
                        set_entry(&mut self.decisions, week, workforce, hires)?;
                    }
                    None if overflowed => overflow_week = Some(week),
                    None => {}
                }
            }

            let row = self
                .costs
                .row(week)
                .ok_or(OptimizerError::InvariantViolation {
                    message: "cost table row out of bounds",
                })?;

            observer.on_week_complete(week, row);
        }

        // States whose every candidate overflows stay unreached; that only matters
        // once it cuts the initial state off.
        if let (None, Some(week)) = (self.costs.get(0, 0), overflow_week) {
            return Err(OptimizerError::CostOverflow { week });
        }

        self.solved = true;

        info!(minimal_cost = ?self.costs.get(0, 0), "hiring plan solved");

        Ok(())
    }

    /// Minimal total cost of the horizon, starting from an empty workforce.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizerError::NotSolved`] before solving, or
    /// [`OptimizerError::UnreachableState`] if the initial state was never reached.
    pub fn minimal_cost(&self) -> Result<u64, OptimizerError> {
        if !self.solved {
            return Err(OptimizerError::NotSolved);
        }

        self.costs
            .get(0, 0)
            .ok_or(OptimizerError::UnreachableState {
                week: 0,
                workforce: 0,
            })
    }

    /// Walk the decision table forward from an empty workforce at week 0.
    ///
    /// The plan is rebuilt on every call.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizerError::NotSolved`] before solving, or
    /// [`OptimizerError::UnreachableState`] if a visited state has no decision.
    pub fn reconstruct_path(&self) -> Result<HiringPlan, OptimizerError> {
        if !self.solved {
            return Err(OptimizerError::NotSolved);
        }

        let coefficients = self.instance.costs();
        let mut weeks = Vec::with_capacity(self.instance.weeks());
        let mut workforce = 0_u32;

        for (week, &requirement) in self.instance.requirements().iter().enumerate() {
            let Some(hired) = self.decisions.get(week, workforce as usize) else {
                warn!(week, workforce, "optimal path reached a state without a decision");

                return Err(OptimizerError::UnreachableState { week, workforce });
            };

            workforce = workforce
                .checked_add(hired)
                .ok_or(OptimizerError::InvariantViolation {
                    message: "planned workforce overflowed",
                })?;

            let excess =
                workforce
                    .checked_sub(requirement)
                    .ok_or(OptimizerError::InvariantViolation {
                        message: "planned workforce below requirement",
                    })?;

            weeks.push(PlannedWeek {
                week,
                hired,
                workforce,
                requirement,
                excess,
                excess_cost: coefficients
                    .excess_cost(excess)
                    .ok_or(OptimizerError::CostOverflow { week })?,
                hiring_cost: coefficients
                    .hiring_cost(hired)
                    .ok_or(OptimizerError::CostOverflow { week })?,
            });
        }

        Ok(HiringPlan::new(weeks))
    }
}

/// Cost of hiring `hires` workers, carrying `excess` surplus workers this week, then
/// continuing optimally at `remaining`.
fn candidate_cost(
    coefficients: CostCoefficients,
    excess: u32,
    hires: u32,
    remaining: u64,
) -> Option<u64> {
    coefficients
        .excess_cost(excess)?
        .checked_add(coefficients.hiring_cost(hires)?)?
        .checked_add(remaining)
}

fn set_entry<T: Copy>(
    table: &mut Table<T>,
    week: usize,
    workforce: u32,
    value: T,
) -> Result<(), OptimizerError> {
    if table.set(week, workforce as usize, value) {
        Ok(())
    } else {
        Err(OptimizerError::InvariantViolation {
            message: "table entry out of bounds",
        })
    }
}
