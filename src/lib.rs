//! Workforce
//!
//! Minimum-cost weekly hiring plans over a fixed horizon, computed by backward
//! induction over `(week, workforce)` states.

pub mod config;
pub mod fixtures;
pub mod instance;
pub mod observability;
pub mod optimizer;
pub mod plan;
pub mod report;
