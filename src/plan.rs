//! Hiring Plans

/// One week of a reconstructed hiring plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedWeek {
    /// Zero-based week index
    pub week: usize,

    /// Workers hired at the start of this week
    pub hired: u32,

    /// Workforce level after hiring
    pub workforce: u32,

    /// Workforce required this week
    pub requirement: u32,

    /// Workers employed beyond the requirement
    pub excess: u32,

    /// Holding cost of the excess workers
    pub excess_cost: u64,

    /// Fixed plus per-head cost of this week's hires (zero when nobody is hired)
    pub hiring_cost: u64,
}

impl PlannedWeek {
    /// Total cost incurred this week, or `None` on overflow.
    pub fn cost(&self) -> Option<u64> {
        self.excess_cost.checked_add(self.hiring_cost)
    }
}

/// Optimal hiring plan, one entry per week of the horizon.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HiringPlan {
    weeks: Vec<PlannedWeek>,
}

impl HiringPlan {
    /// Create a plan from its weeks, in order.
    pub fn new(weeks: Vec<PlannedWeek>) -> Self {
        Self { weeks }
    }

    /// Number of workers hired each week.
    pub fn hires(&self) -> Vec<u32> {
        self.weeks.iter().map(|week| week.hired).collect()
    }

    /// Per-week breakdown of the plan.
    pub fn weeks(&self) -> &[PlannedWeek] {
        &self.weeks
    }

    /// Iterate over the planned weeks.
    pub fn iter(&self) -> impl Iterator<Item = &PlannedWeek> {
        self.weeks.iter()
    }

    /// Number of weeks in the plan.
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Check if the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Workforce level at the end of the horizon.
    pub fn final_workforce(&self) -> u32 {
        self.weeks.last().map_or(0, |week| week.workforce)
    }

    /// Number of weeks in which at least one worker is hired.
    pub fn hiring_events(&self) -> usize {
        self.weeks.iter().filter(|week| week.hired > 0).count()
    }

    /// Sum of every week's excess and hiring costs, or `None` on overflow.
    pub fn total_cost(&self) -> Option<u64> {
        self.weeks
            .iter()
            .try_fold(0_u64, |total, week| total.checked_add(week.cost()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(week: usize, hired: u32, workforce: u32, requirement: u32) -> PlannedWeek {
        let excess = workforce - requirement;

        PlannedWeek {
            week,
            hired,
            workforce,
            requirement,
            excess,
            excess_cost: u64::from(excess) * 10,
            hiring_cost: if hired > 0 { 100 + u64::from(hired) } else { 0 },
        }
    }

    #[test]
    fn hires_lists_each_week_in_order() {
        let plan = HiringPlan::new(vec![week(0, 3, 3, 2), week(1, 0, 3, 3), week(2, 1, 4, 4)]);

        assert_eq!(plan.hires(), vec![3, 0, 1]);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.final_workforce(), 4);
        assert_eq!(plan.hiring_events(), 2);
    }

    #[test]
    fn total_cost_sums_excess_and_hiring() {
        let plan = HiringPlan::new(vec![week(0, 3, 3, 2), week(1, 0, 3, 3)]);

        // (10 + 103) + 0
        assert_eq!(plan.total_cost(), Some(113));
    }

    #[test]
    fn total_cost_reports_overflow() {
        let mut first = week(0, 1, 1, 1);
        first.hiring_cost = u64::MAX;

        let plan = HiringPlan::new(vec![first, week(1, 1, 2, 2)]);

        assert_eq!(plan.total_cost(), None);
    }

    #[test]
    fn empty_plan_has_no_cost() {
        let plan = HiringPlan::default();

        assert!(plan.is_empty());
        assert_eq!(plan.total_cost(), Some(0));
        assert_eq!(plan.final_workforce(), 0);
    }
}
