use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::StringSizingResult;

/// Errors raised while validating module, inverter, or site inputs.
///
/// Validation happens before any computation, so a sizing request either
/// fails here or produces a complete result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A field violated its numeric constraint.
    #[error("invalid `{field}`: {source}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// The site's maximum temperature is below its minimum temperature.
    #[error("site max_temp ({max_c} °C) is below min_temp ({min_c} °C)")]
    InvertedTemperatureRange {
        /// Minimum temperature in degrees Celsius.
        min_c: f64,

        /// Maximum temperature in degrees Celsius.
        max_c: f64,
    },
}

impl InputError {
    /// Returns a mapper that tags a [`ConstraintError`] with a field name.
    pub(crate) fn field(field: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidField { field, source }
    }
}

/// A system layout could not be produced for the requested equipment.
///
/// This is an expected outcome of a design query, not a fault: callers match
/// on it to report why the module and inverter pairing doesn't work.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IncompatibleConfiguration {
    /// No string length satisfies both the minimum and maximum voltage bounds.
    #[error(
        "module and inverter are incompatible: min modules ({}) > max modules ({})",
        .0.min_modules_per_string,
        .0.max_modules_per_string
    )]
    NoValidStringSize(Box<StringSizingResult>),

    /// A single string exceeds the inverter's DC power or current limit.
    #[error(
        "a single string exceeds the inverter's DC input limits \
         (strings by power: {max_strings_by_power:?}, strings by current: {max_strings_by_current:?})"
    )]
    StringExceedsInverter {
        /// Whole strings that fit within the inverter's DC power limit.
        max_strings_by_power: Option<u32>,

        /// Whole strings that fit within the inverter's DC current limit.
        max_strings_by_current: Option<u32>,
    },

    /// The target capacity needs more modules than a layout can count.
    #[error("target capacity ({target_kw} kW) needs more modules than a layout can count")]
    CapacityOutOfRange {
        /// Requested DC capacity in kilowatts.
        target_kw: f64,
    },
}
