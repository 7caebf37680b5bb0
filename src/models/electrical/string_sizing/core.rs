//! String sizing computations.
//!
//! Sizing works on validated parameters: module ratings, inverter limits and
//! site conditions are checked once when their `*Parameters` types are built,
//! so the computations here never fail on bad input. The only failure mode
//! left is a module/inverter pair that cannot form a string at all, which
//! surfaces as [`IncompatibleConfiguration`] when laying out a system.

mod config;
mod error;
mod input;
mod layout;
mod results;
mod sizing;
mod table;
mod temperature;
mod warnings;

#[cfg(test)]
mod test_support;

pub use config::SizingConfig;
pub use error::{IncompatibleConfiguration, InputError};
pub use input::{
    DEFAULT_DEGRADATION_RATE_PERCENT, DegradationOptions, InverterParameters, InverterSpec,
    ModuleParameters, ModuleSpec, SafetyFactor, SiteParameters, SiteSpec,
};
pub use results::{
    ConfigurationRow, DegradationAnalysis, DesignVoltages, LifecyclePoint, MaxLimit, MinLimit,
    StringSizingResult, StringVoltageRange, SystemConfiguration,
};
pub use temperature::{Mounting, estimate_cell_temperature, voltage_at_temperature};
pub use warnings::{Severity, SizingWarning};

use uom::si::f64::Power;

use crate::support::constraint::{Constrained, StrictlyPositive};

use layout::system_configuration;
use sizing::size_strings;
use table::configuration_table;

/// Entry point for sizing strings and laying out systems.
///
/// Holds the [`SizingConfig`] thresholds shared by every computation.
/// The engine itself is stateless between calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringSizingEngine {
    config: SizingConfig,
}

impl StringSizingEngine {
    /// Creates an engine with custom thresholds.
    #[must_use]
    pub fn new(config: SizingConfig) -> Self {
        Self { config }
    }

    /// Returns the engine's thresholds.
    #[must_use]
    pub fn config(&self) -> &SizingConfig {
        &self.config
    }

    /// Computes the valid range of modules per string.
    ///
    /// An incompatible module/inverter pair is not an error here: the result
    /// reports `min > max` and carries a critical warning.
    #[must_use]
    pub fn compute_string_size(
        &self,
        module: &ModuleParameters,
        inverter: &InverterParameters,
        site: &SiteParameters,
        safety_factor: SafetyFactor,
        degradation: Option<&DegradationOptions>,
    ) -> StringSizingResult {
        size_strings(
            &self.config,
            module,
            inverter,
            site,
            safety_factor,
            degradation,
        )
    }

    /// Splits `target_capacity` into strings and inverters.
    ///
    /// A requested `modules_per_string` is clamped into the valid range;
    /// without one, the recommended size is used.
    ///
    /// # Errors
    ///
    /// Returns [`IncompatibleConfiguration`] if no string length satisfies
    /// the inverter's limits, if a single string exceeds the inverter's
    /// power or current rating, or if the target needs more modules than
    /// fit in a `u32`.
    pub fn compute_system_configuration(
        &self,
        target_capacity: Constrained<Power, StrictlyPositive>,
        module: &ModuleParameters,
        inverter: &InverterParameters,
        site: &SiteParameters,
        modules_per_string: Option<u32>,
    ) -> Result<SystemConfiguration, IncompatibleConfiguration> {
        system_configuration(
            &self.config,
            target_capacity.into_inner(),
            module,
            inverter,
            site,
            modules_per_string,
        )
    }

    /// Lists every valid string length with its design voltages.
    ///
    /// The table is empty when the module/inverter pair is incompatible.
    #[must_use]
    pub fn enumerate_valid_configurations(
        &self,
        module: &ModuleParameters,
        inverter: &InverterParameters,
        site: &SiteParameters,
    ) -> Vec<ConfigurationRow> {
        configuration_table(&self.config, module, inverter, site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::power::megawatt;

    use super::test_support::{generic_400w, site, string_100kw};

    #[test]
    fn engine_operations_agree() {
        let engine = StringSizingEngine::default();
        let module = generic_400w();
        let inverter = string_100kw();
        let site = site(-10.0, 40.0, 0.0);

        let sizing =
            engine.compute_string_size(&module, &inverter, &site, SafetyFactor::default(), None);
        let rows = engine.enumerate_valid_configurations(&module, &inverter, &site);
        assert_eq!(
            rows.first().map(|row| row.modules_per_string),
            Some(sizing.min_modules_per_string)
        );
        assert_eq!(
            rows.last().map(|row| row.modules_per_string),
            Some(sizing.max_modules_per_string)
        );

        let target = StrictlyPositive::new(Power::new::<megawatt>(1.0)).unwrap();
        let system = engine
            .compute_system_configuration(target, &module, &inverter, &site, None)
            .unwrap();
        assert_eq!(
            system.modules_per_string,
            sizing.recommended_modules_per_string
        );
    }

    #[test]
    fn custom_thresholds_are_used() {
        let engine = StringSizingEngine::new(SizingConfig {
            min_practical_string_size: 20,
            ..SizingConfig::default()
        });
        let sizing = engine.compute_string_size(
            &generic_400w(),
            &string_100kw(),
            &site(-10.0, 40.0, 0.0),
            SafetyFactor::default(),
            None,
        );

        assert_eq!(engine.config().min_practical_string_size, 20);
        assert!(sizing.warnings.iter().any(|warning| matches!(
            warning,
            SizingWarning::SmallStringSize { threshold: 20, .. }
        )));
    }
}
