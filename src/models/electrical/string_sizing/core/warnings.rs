use std::fmt;

use serde::Serialize;
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Ratio},
    ratio::percent,
};

/// How urgently a warning needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    /// The design works but deserves a second look.
    Advisory,
    /// The design cannot operate as specified.
    Critical,
}

/// A finding reported alongside a string sizing result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SizingWarning {
    /// The minimum string length exceeds the maximum.
    Incompatible { min_modules: u32, max_modules: u32 },

    /// The maximum string length is below the practical threshold.
    SmallStringSize { max_modules: u32, threshold: u32 },

    /// A minimum-length string falls below the MPPT minimum when hot at beginning of life.
    BolUndervoltage {
        string_voltage: ElectricPotential,
        mppt_min: ElectricPotential,
    },

    /// Degradation raises the minimum string length.
    EolAdditionalModules {
        additional_modules: u32,
        project_lifetime_years: u32,
        eol_power_retention: Ratio,
    },

    /// The recommended string falls below the MPPT minimum when hot at end of life.
    EolUndervoltage {
        recommended_modules: u32,
        project_lifetime_years: u32,
        string_voltage: ElectricPotential,
        mppt_min: ElectricPotential,
    },

    /// The recommended string keeps less than the required margin above the
    /// MPPT minimum at end of life.
    EolLowRecommendedMargin {
        string_voltage: ElectricPotential,
        mppt_min: ElectricPotential,
        required_margin: Ratio,
    },

    /// The minimum string keeps less than the required margin above the
    /// MPPT minimum at end of life.
    EolLowMinimumMargin {
        margin: Ratio,
        required_margin: Ratio,
    },
}

impl SizingWarning {
    /// Returns the severity of this warning.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            SizingWarning::Incompatible { .. } | SizingWarning::EolUndervoltage { .. } => {
                Severity::Critical
            }
            SizingWarning::SmallStringSize { .. }
            | SizingWarning::BolUndervoltage { .. }
            | SizingWarning::EolAdditionalModules { .. }
            | SizingWarning::EolLowRecommendedMargin { .. }
            | SizingWarning::EolLowMinimumMargin { .. } => Severity::Advisory,
        }
    }

    /// Returns `true` for [`Severity::Critical`] warnings.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.severity() == Severity::Critical
    }
}

impl fmt::Display for SizingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizingWarning::Incompatible {
                min_modules,
                max_modules,
            } => write!(
                f,
                "CRITICAL: no valid string configuration: min modules ({min_modules}) > \
                 max modules ({max_modules}); module and inverter are incompatible"
            ),
            SizingWarning::SmallStringSize {
                max_modules,
                threshold,
            } => write!(
                f,
                "WARNING: maximum string size ({max_modules}) is below {threshold} modules; \
                 consider a different inverter or module"
            ),
            SizingWarning::BolUndervoltage {
                string_voltage,
                mppt_min,
            } => write!(
                f,
                "WARNING: BOL string voltage ({:.1} V) may be below MPPT minimum ({:.1} V) \
                 at high temperatures",
                string_voltage.get::<volt>(),
                mppt_min.get::<volt>()
            ),
            SizingWarning::EolAdditionalModules {
                additional_modules,
                project_lifetime_years,
                eol_power_retention,
            } => write!(
                f,
                "DEGRADATION IMPACT: {additional_modules} additional module(s) required to \
                 maintain MPPT operation at EOL (year {project_lifetime_years}); EOL Vmp drops \
                 to {:.1}% of BOL",
                eol_power_retention.get::<percent>()
            ),
            SizingWarning::EolUndervoltage {
                recommended_modules,
                project_lifetime_years,
                string_voltage,
                mppt_min,
            } => write!(
                f,
                "CRITICAL: recommended configuration ({recommended_modules} modules) falls \
                 below MPPT minimum at EOL: {:.1} V at year {project_lifetime_years} < {:.1} V; \
                 increase modules per string",
                string_voltage.get::<volt>(),
                mppt_min.get::<volt>()
            ),
            SizingWarning::EolLowRecommendedMargin {
                string_voltage,
                mppt_min,
                required_margin,
            } => write!(
                f,
                "WARNING: recommended configuration has <{:.0}% margin above MPPT minimum at \
                 EOL ({:.1} V vs {:.1} V); consider adding 1-2 modules",
                required_margin.get::<percent>(),
                string_voltage.get::<volt>(),
                mppt_min.get::<volt>()
            ),
            SizingWarning::EolLowMinimumMargin {
                margin,
                required_margin,
            } => write!(
                f,
                "WARNING: minimum string size has low EOL margin ({:.1}%); \
                 target >{:.0}% above MPPT minimum at EOL",
                margin.get::<percent>(),
                required_margin.get::<percent>()
            ),
        }
    }
}
