//! Generic module and inverter presets.
//!
//! Presets are datasheet-style ratings in conventional units (volts, amps,
//! watts, percent per °C). Each preset builds the corresponding spec, which
//! is validated like any user-provided spec.

use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, Power},
    power::watt,
};

use crate::support::units::percent_per_degree_celsius;

use super::{InputError, InverterParameters, InverterSpec, ModuleParameters, ModuleSpec};

/// Datasheet ratings for a PV module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModulePreset {
    pub name: &'static str,
    pub v_oc: f64,
    pub v_mp: f64,
    pub i_sc: f64,
    pub i_mp: f64,
    /// Percent per °C.
    pub temp_coeff_v_oc: f64,
    /// Percent per °C.
    pub temp_coeff_v_mp: f64,
    pub cells_in_series: u32,
}

impl ModulePreset {
    /// Returns the preset as a module spec using the default degradation rate.
    #[must_use]
    pub fn spec(&self) -> ModuleSpec {
        ModuleSpec {
            v_oc: ElectricPotential::new::<volt>(self.v_oc),
            v_mp: ElectricPotential::new::<volt>(self.v_mp),
            i_sc: ElectricCurrent::new::<ampere>(self.i_sc),
            i_mp: ElectricCurrent::new::<ampere>(self.i_mp),
            temp_coeff_v_oc: percent_per_degree_celsius(self.temp_coeff_v_oc),
            temp_coeff_v_mp: percent_per_degree_celsius(self.temp_coeff_v_mp),
            degradation_rate: None,
            cells_in_series: Some(self.cells_in_series),
        }
    }

    /// Validates the preset into module parameters.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if a rating is out of range.
    pub fn parameters(&self) -> Result<ModuleParameters, InputError> {
        ModuleParameters::new(self.spec())
    }
}

/// Datasheet ratings for an inverter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverterPreset {
    pub name: &'static str,
    pub mppt_min_voltage: f64,
    pub mppt_max_voltage: f64,
    pub vdc_max: f64,
    pub idc_max: f64,
    /// Maximum DC input power in watts.
    pub max_power: f64,
    /// Rated AC output power in watts.
    pub ac_power: f64,
}

impl InverterPreset {
    /// Returns the preset as an inverter spec.
    #[must_use]
    pub fn spec(&self) -> InverterSpec {
        InverterSpec {
            mppt_min_voltage: ElectricPotential::new::<volt>(self.mppt_min_voltage),
            mppt_max_voltage: ElectricPotential::new::<volt>(self.mppt_max_voltage),
            vdc_max: ElectricPotential::new::<volt>(self.vdc_max),
            idc_max: Some(ElectricCurrent::new::<ampere>(self.idc_max)),
            max_power: Some(Power::new::<watt>(self.max_power)),
            ac_power: Some(Power::new::<watt>(self.ac_power)),
        }
    }

    /// Validates the preset into inverter parameters.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if a rating is out of range.
    pub fn parameters(&self) -> Result<InverterParameters, InputError> {
        InverterParameters::new(self.spec())
    }
}

pub const MODULES: &[ModulePreset] = &[
    ModulePreset {
        name: "Generic 400W Mono",
        v_oc: 49.5,
        v_mp: 41.7,
        i_sc: 10.8,
        i_mp: 9.6,
        temp_coeff_v_oc: -0.28,
        temp_coeff_v_mp: -0.37,
        cells_in_series: 144,
    },
    ModulePreset {
        name: "Generic 500W Mono",
        v_oc: 49.8,
        v_mp: 41.9,
        i_sc: 13.5,
        i_mp: 11.9,
        temp_coeff_v_oc: -0.26,
        temp_coeff_v_mp: -0.35,
        cells_in_series: 144,
    },
    ModulePreset {
        name: "Generic 600W Bifacial",
        v_oc: 50.2,
        v_mp: 42.1,
        i_sc: 16.1,
        i_mp: 14.3,
        temp_coeff_v_oc: -0.25,
        temp_coeff_v_mp: -0.34,
        cells_in_series: 144,
    },
];

pub const INVERTERS: &[InverterPreset] = &[
    InverterPreset {
        name: "Generic String 100kW",
        mppt_min_voltage: 450.0,
        mppt_max_voltage: 800.0,
        vdc_max: 1000.0,
        idc_max: 280.0,
        max_power: 137_000.0,
        ac_power: 100_000.0,
    },
    InverterPreset {
        name: "Generic String 150kW",
        mppt_min_voltage: 500.0,
        mppt_max_voltage: 850.0,
        vdc_max: 1100.0,
        idc_max: 400.0,
        max_power: 205_000.0,
        ac_power: 150_000.0,
    },
    InverterPreset {
        name: "Generic Central 1MW",
        mppt_min_voltage: 600.0,
        mppt_max_voltage: 900.0,
        vdc_max: 1100.0,
        idc_max: 2500.0,
        max_power: 1_200_000.0,
        ac_power: 1_000_000.0,
    },
    InverterPreset {
        name: "Generic String 1500V",
        mppt_min_voltage: 875.0,
        mppt_max_voltage: 1300.0,
        vdc_max: 1500.0,
        idc_max: 280.0,
        max_power: 250_000.0,
        ac_power: 185_000.0,
    },
];

/// Looks up a module preset by exact name.
#[must_use]
pub fn find_module(name: &str) -> Option<&'static ModulePreset> {
    MODULES.iter().find(|preset| preset.name == name)
}

/// Looks up an inverter preset by exact name.
#[must_use]
pub fn find_inverter(name: &str) -> Option<&'static InverterPreset> {
    INVERTERS.iter().find(|preset| preset.name == name)
}
