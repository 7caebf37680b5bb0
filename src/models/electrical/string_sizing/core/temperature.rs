//! Temperature corrections for module voltages and cell temperature estimates.

use uom::si::{
    f64::{ElectricPotential, HeatFluxDensity, Ratio, ThermodynamicTemperature, Velocity},
    heat_flux_density::watt_per_square_meter,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::support::units::{TemperatureCoefficient, TemperatureDifference};

/// Irradiance at which the conduction temperature offset of the SAPM model applies.
const SAPM_REFERENCE_IRRADIANCE: f64 = 1000.0;

/// Corrects a datasheet voltage linearly for temperature.
///
/// `V(T) = V_ref * (1 + coeff * (T - T_ref))`
#[must_use]
pub fn voltage_at_temperature(
    v_ref: ElectricPotential,
    coeff: TemperatureCoefficient,
    temperature: ThermodynamicTemperature,
    reference_temperature: ThermodynamicTemperature,
) -> ElectricPotential {
    let change: Ratio = coeff * temperature.minus(reference_temperature);
    v_ref * (1.0 + change.get::<ratio>())
}

/// Module mounting used by the SAPM cell temperature model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mounting {
    /// Glass/cell/polymer-sheet module on an open rack.
    #[default]
    OpenRack,
    /// Module mounted close to a roof surface.
    CloseRoof,
    /// Module with an insulated back.
    InsulatedBack,
}

impl Mounting {
    /// Returns the SAPM coefficients `(a, b [s/m], ΔT [°C])`.
    fn sapm_coefficients(self) -> (f64, f64, f64) {
        match self {
            Mounting::OpenRack => (-3.47, -0.0594, 3.0),
            Mounting::CloseRoof => (-2.98, -0.0471, 1.0),
            Mounting::InsulatedBack => (-2.81, -0.0455, 0.0),
        }
    }
}

/// Estimates the cell temperature with the Sandia Array Performance Model.
///
/// `T_cell = T_amb + E * exp(a + b * ws) + (E / 1000 W/m²) * ΔT`
///
/// The exponential term is not scaled by 1000, so results run hotter than
/// tools that divide the whole irradiance term by the reference irradiance.
///
/// Useful for turning ambient design temperatures from a weather source into
/// cell temperatures before building a site spec.
#[must_use]
pub fn estimate_cell_temperature(
    ambient: ThermodynamicTemperature,
    irradiance: HeatFluxDensity,
    wind_speed: Velocity,
    mounting: Mounting,
) -> ThermodynamicTemperature {
    let (a, b, delta_t) = mounting.sapm_coefficients();
    let e = irradiance.get::<watt_per_square_meter>();
    let ws = wind_speed.get::<meter_per_second>();

    let module_rise = e * (a + b * ws).exp();
    let conduction_rise = e / SAPM_REFERENCE_IRRADIANCE * delta_t;

    ThermodynamicTemperature::new::<degree_celsius>(
        ambient.get::<degree_celsius>() + module_rise + conduction_rise,
    )
}
