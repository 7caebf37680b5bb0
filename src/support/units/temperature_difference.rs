use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// [`uom`] does not allow subtracting two [`ThermodynamicTemperature`]
/// values directly; see
/// [#380](https://github.com/iliekturtles/uom/issues/380) and
/// [#403](https://github.com/iliekturtles/uom/issues/403).
/// Voltage corrections are linear in the offset from the reference cell
/// temperature, so that offset must be a [`TemperatureInterval`].
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn offsets_from_reference_temperature() {
        let stc = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let cold = ThermodynamicTemperature::new::<degree_celsius>(-10.0);
        let hot = ThermodynamicTemperature::new::<degree_celsius>(40.0);

        assert_relative_eq!(
            cold.minus(stc).get::<delta_celsius>(),
            -35.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(hot.minus(stc).get::<delta_celsius>(), 15.0, epsilon = 1e-9);
        assert_relative_eq!(stc.minus(stc).get::<delta_celsius>(), 0.0);
    }
}
