//! Fixtures
//!
//! Hiring instances stored as YAML:
//!
//! ```yaml
//! requirements: [5, 7, 8, 4, 6]
//! costs:
//!   excess: 300
//!   fixed: 400
//!   per_hire: 200
//! ```

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::instance::{CostCoefficients, HiringInstance, InstanceError};

/// Default directory searched by [`Fixture::from_set`].
pub const FIXTURES_DIR: &str = "./fixtures";

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A weekly requirement is negative or too large
    #[error("Invalid requirement for week {week}: {value}")]
    InvalidRequirement {
        /// One-based week number
        week: usize,

        /// Value found in the fixture
        value: i64,
    },

    /// A cost coefficient is negative
    #[error("Negative cost for {name}: {value}")]
    NegativeCost {
        /// Coefficient name
        name: &'static str,

        /// Value found in the fixture
        value: i64,
    },

    /// The fixture describes an invalid instance
    #[error(transparent)]
    Instance(#[from] InstanceError),
}

/// Hiring instance as written in YAML.
///
/// Values are read as signed integers so that negative inputs are reported
/// instead of failing with a generic parse error.
#[derive(Debug, Deserialize)]
pub struct Fixture {
    /// Workers required each week
    pub requirements: Vec<i64>,

    /// Cost coefficients
    pub costs: CostsFixture,
}

/// Cost coefficients as written in YAML.
#[derive(Debug, Deserialize)]
pub struct CostsFixture {
    /// Holding cost per excess worker per week
    pub excess: i64,

    /// Fixed cost per hiring event
    pub fixed: i64,

    /// Cost per newly hired worker
    pub per_hire: i64,
}

impl Fixture {
    /// Parse a fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn parse(contents: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::parse(&contents)
    }

    /// Load the named fixture from [`FIXTURES_DIR`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_path(Path::new(FIXTURES_DIR).join(format!("{name}.yml")))
    }

    /// Validate the fixture and convert it into a [`HiringInstance`].
    ///
    /// # Errors
    ///
    /// Returns an error if any requirement or cost is negative, or if there are no weeks.
    pub fn into_instance(self) -> Result<HiringInstance, FixtureError> {
        let requirements = self
            .requirements
            .into_iter()
            .enumerate()
            .map(|(idx, value)| {
                u32::try_from(value).map_err(|_err| FixtureError::InvalidRequirement {
                    week: idx + 1,
                    value,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let costs = CostCoefficients::new(
            non_negative("excess", self.costs.excess)?,
            non_negative("fixed", self.costs.fixed)?,
            non_negative("per_hire", self.costs.per_hire)?,
        );

        Ok(HiringInstance::new(requirements, costs)?)
    }
}

fn non_negative(name: &'static str, value: i64) -> Result<u64, FixtureError> {
    u64::try_from(value).map_err(|_err| FixtureError::NegativeCost { name, value })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use testresult::TestResult;

    use super::*;

    const REFERENCE: &str = "
requirements: [5, 7, 8, 4, 6]
costs:
  excess: 300
  fixed: 400
  per_hire: 200
";

    #[test]
    fn parse_builds_instance() -> TestResult {
        let instance = Fixture::parse(REFERENCE)?.into_instance()?;

        assert_eq!(instance.requirements(), [5, 7, 8, 4, 6].as_slice());
        assert_eq!(instance.costs(), CostCoefficients::new(300, 400, 200));

        Ok(())
    }

    #[test]
    fn from_path_reads_yaml_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(REFERENCE.as_bytes())?;

        let instance = Fixture::from_path(file.path())?.into_instance()?;

        assert_eq!(instance.weeks(), 5);
        assert_eq!(instance.max_workers(), 8);

        Ok(())
    }

    #[test]
    fn from_set_bundled_reference_fixture() -> TestResult {
        let instance = Fixture::from_set("reference")?.into_instance()?;

        assert_eq!(instance.requirements(), [5, 7, 8, 4, 6].as_slice());

        Ok(())
    }

    #[test]
    fn negative_requirement_is_rejected() -> TestResult {
        let fixture = Fixture::parse(
            "requirements: [2, -1]\ncosts: { excess: 1, fixed: 1, per_hire: 1 }",
        )?;

        let err = fixture.into_instance().err();

        assert!(matches!(
            err,
            Some(FixtureError::InvalidRequirement { week: 2, value: -1 })
        ));

        Ok(())
    }

    #[test]
    fn negative_cost_is_rejected() -> TestResult {
        let fixture =
            Fixture::parse("requirements: [2]\ncosts: { excess: 1, fixed: -5, per_hire: 1 }")?;

        let err = fixture.into_instance().err();

        assert!(matches!(
            err,
            Some(FixtureError::NegativeCost {
                name: "fixed",
                value: -5
            })
        ));

        Ok(())
    }

    #[test]
    fn empty_requirements_are_rejected() -> TestResult {
        let fixture =
            Fixture::parse("requirements: []\ncosts: { excess: 1, fixed: 1, per_hire: 1 }")?;

        let err = fixture.into_instance().err();

        assert!(matches!(
            err,
            Some(FixtureError::Instance(InstanceError::EmptyRequirements))
        ));

        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Fixture::from_set("does-not-exist").err();

        assert!(matches!(err, Some(FixtureError::Io(_))));
    }
}
