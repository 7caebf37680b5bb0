//! PV string sizing models.
//!
//! This module provides [`twine_core::Model`] implementations for sizing
//! series strings of PV modules against an inverter and laying out a system
//! for a target DC capacity.
//! The computational core is in the internal `core` module; its public types
//! are re-exported here.
//!
//! # Example
//!
//! ```
//! use solar_string_sizing::models::electrical::string_sizing::{
//!     SafetyFactor, SiteParameters, SiteSpec, StringSizing, StringSizingInput, catalog,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Length, ThermodynamicTemperature},
//!     length::meter,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let module = catalog::find_module("Generic 400W Mono").unwrap().parameters().unwrap();
//! let inverter = catalog::find_inverter("Generic String 100kW").unwrap().parameters().unwrap();
//! let site = SiteParameters::new(SiteSpec {
//!     min_temp: ThermodynamicTemperature::new::<degree_celsius>(-10.0),
//!     max_temp: ThermodynamicTemperature::new::<degree_celsius>(40.0),
//!     elevation: Length::new::<meter>(0.0),
//! })
//! .unwrap();
//!
//! let result = StringSizing::default()
//!     .call(&StringSizingInput {
//!         module,
//!         inverter,
//!         site,
//!         safety_factor: SafetyFactor::default(),
//!         degradation: None,
//!     })
//!     .unwrap();
//!
//! assert_eq!(result.min_modules_per_string, 12);
//! assert_eq!(result.max_modules_per_string, 16);
//! assert_eq!(result.recommended_modules_per_string, 14);
//! ```

pub mod catalog;
mod core;

pub use self::core::{
    ConfigurationRow, DEFAULT_DEGRADATION_RATE_PERCENT, DegradationAnalysis, DegradationOptions,
    DesignVoltages, IncompatibleConfiguration, InputError, InverterParameters, InverterSpec,
    LifecyclePoint, MaxLimit, MinLimit, ModuleParameters, ModuleSpec, Mounting, SafetyFactor,
    Severity, SiteParameters, SiteSpec, SizingConfig, SizingWarning, StringSizingEngine,
    StringSizingResult, StringVoltageRange, SystemConfiguration, estimate_cell_temperature,
    voltage_at_temperature,
};

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::Power;

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Input to the [`StringSizing`] model.
#[derive(Debug, Clone, PartialEq)]
pub struct StringSizingInput {
    pub module: ModuleParameters,
    pub inverter: InverterParameters,
    pub site: SiteParameters,
    pub safety_factor: SafetyFactor,
    /// Adds an end-of-life check when present.
    pub degradation: Option<DegradationOptions>,
}

/// Model computing the valid range of modules per string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringSizing {
    engine: StringSizingEngine,
}

impl StringSizing {
    #[must_use]
    pub fn new(engine: StringSizingEngine) -> Self {
        Self { engine }
    }
}

impl Model for StringSizing {
    type Input = StringSizingInput;
    type Output = StringSizingResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.engine.compute_string_size(
            &input.module,
            &input.inverter,
            &input.site,
            input.safety_factor,
            input.degradation.as_ref(),
        ))
    }
}

/// Input to the [`SystemLayout`] model.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemLayoutInput {
    pub target_capacity: Constrained<Power, StrictlyPositive>,
    pub module: ModuleParameters,
    pub inverter: InverterParameters,
    pub site: SiteParameters,
    /// Overrides the recommended string length, clamped to the valid range.
    pub modules_per_string: Option<u32>,
}

/// Model splitting a target DC capacity into strings and inverters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemLayout {
    engine: StringSizingEngine,
}

impl SystemLayout {
    #[must_use]
    pub fn new(engine: StringSizingEngine) -> Self {
        Self { engine }
    }
}

impl Model for SystemLayout {
    type Input = SystemLayoutInput;
    type Output = SystemConfiguration;
    type Error = IncompatibleConfiguration;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.engine.compute_system_configuration(
            input.target_capacity,
            &input.module,
            &input.inverter,
            &input.site,
            input.modules_per_string,
        )
    }
}
