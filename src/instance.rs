//! Hiring Instances

use thiserror::Error;

/// Errors raised while building a hiring instance.
#[derive(Debug, Error)]
pub enum InstanceError {
    /// The planning horizon has no weeks, so there is no peak requirement to bound the state space.
    #[error("requirements must contain at least one week")]
    EmptyRequirements,
}

/// Cost coefficients of the hiring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostCoefficients {
    /// Holding cost per excess worker per week
    pub excess: u64,

    /// One-time cost charged in any week where at least one worker is hired
    pub fixed: u64,

    /// Variable cost per newly hired worker
    pub per_hire: u64,
}

impl CostCoefficients {
    /// Create a new set of cost coefficients.
    pub fn new(excess: u64, fixed: u64, per_hire: u64) -> Self {
        Self {
            excess,
            fixed,
            per_hire,
        }
    }

    /// Cost of hiring `hires` workers in a single week.
    ///
    /// The fixed charge is waived when nobody is hired. Returns `None` on overflow.
    pub fn hiring_cost(&self, hires: u32) -> Option<u64> {
        if hires == 0 {
            return Some(0);
        }

        self.per_hire
            .checked_mul(u64::from(hires))?
            .checked_add(self.fixed)
    }

    /// Holding cost of `excess` workers for one week. Returns `None` on overflow.
    pub fn excess_cost(&self, excess: u32) -> Option<u64> {
        self.excess.checked_mul(u64::from(excess))
    }
}

/// A fixed-horizon hiring problem: weekly requirements plus cost coefficients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiringInstance {
    requirements: Vec<u32>,
    costs: CostCoefficients,
    max_workers: u32,
}

impl HiringInstance {
    /// Create a new hiring instance.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::EmptyRequirements`] if `requirements` is empty.
    pub fn new(requirements: Vec<u32>, costs: CostCoefficients) -> Result<Self, InstanceError> {
        let max_workers = requirements
            .iter()
            .copied()
            .max()
            .ok_or(InstanceError::EmptyRequirements)?;

        Ok(Self {
            requirements,
            costs,
            max_workers,
        })
    }

    /// Weekly workforce requirements, in order.
    pub fn requirements(&self) -> &[u32] {
        &self.requirements
    }

    /// Requirement for the given week, if it is inside the horizon.
    pub fn requirement(&self, week: usize) -> Option<u32> {
        self.requirements.get(week).copied()
    }

    /// Cost coefficients.
    pub fn costs(&self) -> CostCoefficients {
        self.costs
    }

    /// Number of weeks in the planning horizon.
    pub fn weeks(&self) -> usize {
        self.requirements.len()
    }

    /// Largest single-week requirement. Workforce levels never exceed it.
    pub fn max_workers(&self) -> u32 {
        self.max_workers
    }
}
