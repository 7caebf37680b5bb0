//! Shared fixtures for string sizing tests.

use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, Length, Power, ThermodynamicTemperature},
    length::meter,
    power::watt,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::percent_per_degree_celsius;

use super::{
    InverterParameters, InverterSpec, ModuleParameters, ModuleSpec, SiteParameters, SiteSpec,
};

/// A generic 400 W mono module.
pub(crate) fn generic_400w_spec() -> ModuleSpec {
    ModuleSpec {
        v_oc: ElectricPotential::new::<volt>(49.5),
        v_mp: ElectricPotential::new::<volt>(41.7),
        i_sc: ElectricCurrent::new::<ampere>(10.8),
        i_mp: ElectricCurrent::new::<ampere>(9.6),
        temp_coeff_v_oc: percent_per_degree_celsius(-0.28),
        temp_coeff_v_mp: percent_per_degree_celsius(-0.37),
        degradation_rate: None,
        cells_in_series: Some(144),
    }
}

pub(crate) fn generic_400w() -> ModuleParameters {
    ModuleParameters::new(generic_400w_spec()).expect("fixture module is valid")
}

/// A generic 100 kW string inverter.
pub(crate) fn string_100kw_spec() -> InverterSpec {
    InverterSpec {
        mppt_min_voltage: ElectricPotential::new::<volt>(450.0),
        mppt_max_voltage: ElectricPotential::new::<volt>(800.0),
        vdc_max: ElectricPotential::new::<volt>(1000.0),
        idc_max: Some(ElectricCurrent::new::<ampere>(280.0)),
        max_power: Some(Power::new::<watt>(137_000.0)),
        ac_power: Some(Power::new::<watt>(100_000.0)),
    }
}

pub(crate) fn string_100kw() -> InverterParameters {
    InverterParameters::new(string_100kw_spec()).expect("fixture inverter is valid")
}

pub(crate) fn site(min_c: f64, max_c: f64, elevation_m: f64) -> SiteParameters {
    SiteParameters::new(SiteSpec {
        min_temp: ThermodynamicTemperature::new::<degree_celsius>(min_c),
        max_temp: ThermodynamicTemperature::new::<degree_celsius>(max_c),
        elevation: Length::new::<meter>(elevation_m),
    })
    .expect("fixture site is valid")
}
