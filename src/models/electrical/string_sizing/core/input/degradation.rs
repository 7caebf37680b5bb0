use uom::si::f64::Ratio;

use crate::support::constraint::{ConstraintResult, UnitIntervalUpperOpen};

/// Requests an end-of-life check on top of the beginning-of-life sizing.
///
/// The annual rate defaults to the module's own degradation rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegradationOptions {
    project_lifetime_years: u32,
    annual_rate: Option<Ratio>,
}

impl DegradationOptions {
    /// Degrades the module at its own rate over `project_lifetime_years`.
    #[must_use]
    pub fn new(project_lifetime_years: u32) -> Self {
        Self {
            project_lifetime_years,
            annual_rate: None,
        }
    }

    /// Overrides the module's annual degradation rate.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the rate lies outside `[0, 1)`.
    pub fn with_annual_rate(self, annual_rate: Ratio) -> ConstraintResult<Self> {
        let annual_rate = UnitIntervalUpperOpen::new(annual_rate)?.into_inner();
        Ok(Self {
            annual_rate: Some(annual_rate),
            ..self
        })
    }

    /// Returns the project lifetime in years.
    #[must_use]
    pub fn project_lifetime_years(&self) -> u32 {
        self.project_lifetime_years
    }

    /// Returns the overriding annual rate, if any.
    #[must_use]
    pub fn annual_rate(&self) -> Option<Ratio> {
        self.annual_rate
    }
}
