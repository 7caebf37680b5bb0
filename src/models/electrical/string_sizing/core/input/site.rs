use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{ConstraintError, NonNegative};

use super::super::InputError;

/// Site environmental extremes, as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteSpec {
    /// Minimum expected temperature.
    pub min_temp: ThermodynamicTemperature,

    /// Maximum expected temperature.
    pub max_temp: ThermodynamicTemperature,

    /// Elevation above sea level.
    pub elevation: Length,
}

/// Validated site extremes with `min_temp <= max_temp` and a non-negative elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteParameters {
    min_temp: ThermodynamicTemperature,
    max_temp: ThermodynamicTemperature,
    elevation: Length,
}

impl SiteParameters {
    /// Validates a site spec.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidField`] if a temperature is `NaN` or the
    /// elevation is negative, and [`InputError::InvertedTemperatureRange`]
    /// if `max_temp` is below `min_temp`.
    pub fn new(spec: SiteSpec) -> Result<Self, InputError> {
        if spec.min_temp.value.is_nan() {
            return Err(InputError::field("min_temp")(ConstraintError::NotANumber));
        }
        if spec.max_temp.value.is_nan() {
            return Err(InputError::field("max_temp")(ConstraintError::NotANumber));
        }
        if spec.max_temp < spec.min_temp {
            return Err(InputError::InvertedTemperatureRange {
                min_c: spec.min_temp.get::<degree_celsius>(),
                max_c: spec.max_temp.get::<degree_celsius>(),
            });
        }
        let elevation = NonNegative::new(spec.elevation).map_err(InputError::field("elevation"))?;

        Ok(Self {
            min_temp: spec.min_temp,
            max_temp: spec.max_temp,
            elevation: elevation.into_inner(),
        })
    }

    /// Returns the minimum expected temperature.
    #[must_use]
    pub fn min_temp(&self) -> ThermodynamicTemperature {
        self.min_temp
    }

    /// Returns the maximum expected temperature.
    #[must_use]
    pub fn max_temp(&self) -> ThermodynamicTemperature {
        self.max_temp
    }

    /// Returns the site elevation above sea level.
    #[must_use]
    pub fn elevation(&self) -> Length {
        self.elevation
    }
}
