//! Console Report

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    optimizer::{OptimizerError, WorkforceOptimizer, table::Table},
    plan::HiringPlan,
};

/// Errors that can occur when building or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The optimizer could not produce a plan or minimal cost.
    #[error(transparent)]
    Optimizer(#[from] OptimizerError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Printable summary of a solved optimizer: the cost table, the optimal plan and its cost.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    costs: &'a Table<u64>,
    plan: HiringPlan,
    minimal_cost: u64,
}

impl<'a> Report<'a> {
    /// Build a report from a solved optimizer.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] if the optimizer is unsolved or its plan cannot be rebuilt.
    pub fn from_optimizer(optimizer: &'a WorkforceOptimizer) -> Result<Self, ReportError> {
        Ok(Self {
            costs: optimizer.cost_table(),
            plan: optimizer.reconstruct_path()?,
            minimal_cost: optimizer.minimal_cost()?,
        })
    }

    /// Optimal hiring plan.
    pub fn plan(&self) -> &HiringPlan {
        &self.plan
    }

    /// Minimal total cost of the horizon.
    pub fn minimal_cost(&self) -> u64 {
        self.minimal_cost
    }

    /// Writes the report to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::IO`] if the report cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        writeln!(out, "\nMinimal cost table").map_err(|_err| ReportError::IO)?;
        write_table(&mut out, cost_table_builder(self.costs))?;

        writeln!(out, "\nOptimal hiring plan").map_err(|_err| ReportError::IO)?;
        write_table(&mut out, plan_builder(&self.plan))?;

        writeln!(
            out,
            "\nHiring events: {}\nFinal workforce: {}",
            self.plan.hiring_events(),
            self.plan.final_workforce()
        )
        .map_err(|_err| ReportError::IO)?;

        writeln!(out, "\x1b[1mMinimal total cost:\x1b[0m {}", self.minimal_cost)
            .map_err(|_err| ReportError::IO)
    }
}

fn cost_table_builder(costs: &Table<u64>) -> Builder {
    let mut builder = Builder::default();

    let header = std::iter::once("Week".to_string())
        .chain((0..costs.columns()).map(|workforce| workforce.to_string()));

    builder.push_record(header);

    for (week, row) in costs.iter_rows().enumerate() {
        let record = std::iter::once(week.to_string()).chain(row.iter().map(|cost| {
            cost.map_or_else(|| "∞".to_string(), |cost| cost.to_string())
        }));

        builder.push_record(record);
    }

    builder
}

fn plan_builder(plan: &HiringPlan) -> Builder {
    let mut builder = Builder::default();

    builder.push_record([
        "Week",
        "Hire",
        "Workforce",
        "Required",
        "Excess",
        "Excess Cost",
        "Hiring Cost",
    ]);

    for week in plan.iter() {
        builder.push_record([
            format!("{}", week.week + 1),
            week.hired.to_string(),
            week.workforce.to_string(),
            week.requirement.to_string(),
            week.excess.to_string(),
            week.excess_cost.to_string(),
            week.hiring_cost.to_string(),
        ]);
    }

    builder
}

fn write_table(out: &mut impl io::Write, builder: Builder) -> Result<(), ReportError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(1..), Alignment::right());

    writeln!(out, "{table}").map_err(|_err| ReportError::IO)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::instance::{CostCoefficients, HiringInstance};

    use super::*;

    fn solved_optimizer() -> TestResult<WorkforceOptimizer> {
        let instance =
            HiringInstance::new(vec![5, 7, 8, 4, 6], CostCoefficients::new(300, 400, 200))?;
        let mut optimizer = WorkforceOptimizer::new(instance);

        optimizer.solve()?;

        Ok(optimizer)
    }

    #[test]
    fn from_optimizer_requires_a_solved_optimizer() -> TestResult {
        let instance = HiringInstance::new(vec![3], CostCoefficients::new(1, 1, 1))?;
        let optimizer = WorkforceOptimizer::new(instance);

        let result = Report::from_optimizer(&optimizer);

        assert!(matches!(
            result,
            Err(ReportError::Optimizer(OptimizerError::NotSolved))
        ));

        Ok(())
    }

    #[test]
    fn from_optimizer_captures_plan_and_cost() -> TestResult {
        let optimizer = solved_optimizer()?;

        let report = Report::from_optimizer(&optimizer)?;

        assert_eq!(report.minimal_cost(), 4500);
        assert_eq!(report.plan().hires(), vec![5, 3, 0, 0, 0]);

        Ok(())
    }

    #[test]
    fn write_to_renders_every_section() -> TestResult {
        let optimizer = solved_optimizer()?;
        let report = Report::from_optimizer(&optimizer)?;

        let mut out = Vec::new();
        report.write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Minimal cost table"));
        assert!(output.contains("Optimal hiring plan"));
        assert!(output.contains("Minimal total cost:"));
        assert!(output.contains("4500"));
        assert!(output.contains("Hiring Cost"));
        assert!(output.contains("Hiring events: 2"));
        assert!(output.contains("Final workforce: 8"));

        Ok(())
    }

    #[test]
    fn cost_table_has_one_row_per_week_boundary() {
        let mut costs = Table::new(3, 2);

        costs.set(2, 0, 0_u64);
        costs.set(2, 1, 0_u64);
        costs.set(1, 1, 5_u64);

        let table = cost_table_builder(&costs).build();

        // Header plus weeks 0..=2.
        assert_eq!(table.count_rows(), 4);
        assert_eq!(table.count_columns(), 3);
        assert!(table.to_string().contains('∞'));
    }
}
