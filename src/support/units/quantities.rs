use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Ratio, TemperatureInterval},
        ratio::percent,
        temperature_interval::degree_celsius as delta_celsius,
    },
    typenum::{N1, Z0},
};

/// Temperature coefficient, 1/K in SI.
///
/// Multiplying by a [`TemperatureInterval`] yields a dimensionless
/// [`Ratio`].
pub type TemperatureCoefficient = Quantity<ISQ<Z0, Z0, Z0, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Builds a [`TemperatureCoefficient`] from a datasheet value in `%/°C`.
#[must_use]
pub fn percent_per_degree_celsius(value: f64) -> TemperatureCoefficient {
    Ratio::new::<percent>(value) / TemperatureInterval::new::<delta_celsius>(1.0)
}
