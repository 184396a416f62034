//! Planner configuration

use std::path::PathBuf;

use clap::{Args, Parser};
use thiserror::Error;

use crate::{
    fixtures::{Fixture, FixtureError},
    instance::{CostCoefficients, HiringInstance, InstanceError},
};

/// Errors raised while turning configuration into a hiring instance.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The fixture file could not be loaded or validated.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// The requirement and cost flags describe an invalid instance.
    #[error(transparent)]
    Instance(#[from] InstanceError),
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Workforce planner configuration
#[derive(Debug, Parser)]
#[command(name = "workforce", about = "Minimum-cost weekly hiring planner", long_about = None)]
pub struct PlannerConfig {
    /// Workers required each week, comma separated
    #[arg(
        short,
        long,
        env = "WORKFORCE_REQUIREMENTS",
        value_delimiter = ',',
        default_value = "5,7,8,4,6"
    )]
    pub requirements: Vec<u32>,

    /// Holding cost per excess worker per week
    #[arg(long, env = "WORKFORCE_EXCESS_COST", default_value_t = 300)]
    pub excess_cost: u64,

    /// Fixed cost of any week in which workers are hired
    #[arg(long, env = "WORKFORCE_FIXED_COST", default_value_t = 400)]
    pub fixed_cost: u64,

    /// Cost per newly hired worker
    #[arg(long, env = "WORKFORCE_PER_HIRE_COST", default_value_t = 200)]
    pub per_hire_cost: u64,

    /// YAML fixture file; overrides the requirement and cost flags
    #[arg(short, long, env = "WORKFORCE_FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl PlannerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Cost coefficients given on the command line.
    pub fn costs(&self) -> CostCoefficients {
        CostCoefficients::new(self.excess_cost, self.fixed_cost, self.per_hire_cost)
    }

    /// Build the hiring instance, from the fixture file if one was given.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the fixture cannot be loaded or the instance is invalid.
    pub fn instance(&self) -> Result<HiringInstance, ConfigError> {
        if let Some(path) = &self.fixture {
            return Ok(Fixture::from_path(path)?.into_instance()?);
        }

        Ok(HiringInstance::new(self.requirements.clone(), self.costs())?)
    }
}
