//! Workforce planner
//!
//! Solves a hiring instance and prints the minimal cost table, the optimal
//! hiring plan and its total cost.
//!
//! Use `-r` to give weekly requirements (comma separated)
//! Use `-f` to load the instance from a YAML fixture instead

use std::{io, time::Instant};

use anyhow::Result;
use humanize_duration::{Truncate, prelude::DurationExt};
use tracing::info;

use workforce::{
    config::PlannerConfig, observability::init_subscriber, optimizer::WorkforceOptimizer,
    report::Report,
};

fn main() -> Result<()> {
    let config = PlannerConfig::load().unwrap_or_else(|err| err.exit());

    init_subscriber(&config.logging)?;

    let instance = config.instance()?;
    let mut optimizer = WorkforceOptimizer::new(instance);

    let start = Instant::now();

    optimizer.solve()?;

    let elapsed = start.elapsed();

    info!(elapsed = %elapsed.human(Truncate::Nano), "solve finished");

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    Report::from_optimizer(&optimizer)?.write_to(&mut handle)?;

    Ok(())
}
