//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (voltage, current, power,
//! temperature, elevation).
//! This module adds what string sizing needs but [`uom`] doesn't provide:
//!
//! - [`TemperatureDifference`]: subtracting two absolute temperatures to get
//!   a [`TemperatureInterval`](uom::si::f64::TemperatureInterval).
//! - [`TemperatureCoefficient`]: a fractional change per kelvin, the way
//!   module datasheets publish `%/°C` voltage coefficients.
//!
//! ```
//! use uom::si::{f64::ThermodynamicTemperature, ratio::percent, thermodynamic_temperature::degree_celsius};
//! use solar_string_sizing::support::units::{percent_per_degree_celsius, TemperatureDifference};
//!
//! let cold = ThermodynamicTemperature::new::<degree_celsius>(-10.0);
//! let stc = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//!
//! // -0.28 %/°C over a 35 °C drop raises voltage by 9.8 %.
//! let change = percent_per_degree_celsius(-0.28) * cold.minus(stc);
//! assert!((change.get::<percent>() - 9.8).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{TemperatureCoefficient, percent_per_degree_celsius};
pub use temperature_difference::TemperatureDifference;
