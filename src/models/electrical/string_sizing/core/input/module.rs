use uom::si::{
    f64::{ElectricCurrent, ElectricPotential, Power, Ratio},
    ratio::percent,
};

use crate::support::{
    constraint::{NonPositive, StrictlyPositive, UnitIntervalUpperOpen},
    units::TemperatureCoefficient,
};

use super::super::InputError;

/// Annual degradation assumed when a module spec doesn't provide one, in `%/year`.
pub const DEFAULT_DEGRADATION_RATE_PERCENT: f64 = 0.5;

/// Datasheet ratings of a PV module at standard test conditions.
///
/// This is the unvalidated record callers fill in.
/// Use [`ModuleParameters::new`] to check it before sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleSpec {
    /// Open-circuit voltage.
    pub v_oc: ElectricPotential,

    /// Voltage at maximum power.
    pub v_mp: ElectricPotential,

    /// Short-circuit current.
    pub i_sc: ElectricCurrent,

    /// Current at maximum power.
    pub i_mp: ElectricCurrent,

    /// Temperature coefficient of `v_oc`.
    pub temp_coeff_v_oc: TemperatureCoefficient,

    /// Temperature coefficient of `v_mp`.
    pub temp_coeff_v_mp: TemperatureCoefficient,

    /// Annual power degradation rate.
    ///
    /// Defaults to [`DEFAULT_DEGRADATION_RATE_PERCENT`] when `None`.
    pub degradation_rate: Option<Ratio>,

    /// Number of cells in series. Informational only.
    pub cells_in_series: Option<u32>,
}

/// Validated PV module ratings.
///
/// Voltages and currents are strictly positive, temperature coefficients are
/// non-positive, and the degradation rate lies in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleParameters {
    v_oc: ElectricPotential,
    v_mp: ElectricPotential,
    i_sc: ElectricCurrent,
    i_mp: ElectricCurrent,
    temp_coeff_v_oc: TemperatureCoefficient,
    temp_coeff_v_mp: TemperatureCoefficient,
    degradation_rate: Ratio,
    cells_in_series: Option<u32>,
}

impl ModuleParameters {
    /// Validates a module spec.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidField`] naming the first field that
    /// violates its constraint.
    pub fn new(spec: ModuleSpec) -> Result<Self, InputError> {
        let v_oc = StrictlyPositive::new(spec.v_oc).map_err(InputError::field("v_oc"))?;
        let v_mp = StrictlyPositive::new(spec.v_mp).map_err(InputError::field("v_mp"))?;
        let i_sc = StrictlyPositive::new(spec.i_sc).map_err(InputError::field("i_sc"))?;
        let i_mp = StrictlyPositive::new(spec.i_mp).map_err(InputError::field("i_mp"))?;
        let temp_coeff_v_oc = NonPositive::new(spec.temp_coeff_v_oc)
            .map_err(InputError::field("temp_coeff_v_oc"))?;
        let temp_coeff_v_mp = NonPositive::new(spec.temp_coeff_v_mp)
            .map_err(InputError::field("temp_coeff_v_mp"))?;
        let degradation_rate = UnitIntervalUpperOpen::new(
            spec.degradation_rate
                .unwrap_or_else(|| Ratio::new::<percent>(DEFAULT_DEGRADATION_RATE_PERCENT)),
        )
        .map_err(InputError::field("degradation_rate"))?;

        Ok(Self {
            v_oc: v_oc.into_inner(),
            v_mp: v_mp.into_inner(),
            i_sc: i_sc.into_inner(),
            i_mp: i_mp.into_inner(),
            temp_coeff_v_oc: temp_coeff_v_oc.into_inner(),
            temp_coeff_v_mp: temp_coeff_v_mp.into_inner(),
            degradation_rate: degradation_rate.into_inner(),
            cells_in_series: spec.cells_in_series,
        })
    }

    /// Returns the open-circuit voltage at STC.
    #[must_use]
    pub fn v_oc(&self) -> ElectricPotential {
        self.v_oc
    }

    /// Returns the maximum-power voltage at STC.
    #[must_use]
    pub fn v_mp(&self) -> ElectricPotential {
        self.v_mp
    }

    /// Returns the short-circuit current at STC.
    #[must_use]
    pub fn i_sc(&self) -> ElectricCurrent {
        self.i_sc
    }

    /// Returns the maximum-power current at STC.
    #[must_use]
    pub fn i_mp(&self) -> ElectricCurrent {
        self.i_mp
    }

    /// Returns the temperature coefficient of `v_oc`.
    #[must_use]
    pub fn temp_coeff_v_oc(&self) -> TemperatureCoefficient {
        self.temp_coeff_v_oc
    }

    /// Returns the temperature coefficient of `v_mp`.
    #[must_use]
    pub fn temp_coeff_v_mp(&self) -> TemperatureCoefficient {
        self.temp_coeff_v_mp
    }

    /// Returns the annual power degradation rate.
    #[must_use]
    pub fn degradation_rate(&self) -> Ratio {
        self.degradation_rate
    }

    /// Returns the number of cells in series, if known.
    #[must_use]
    pub fn cells_in_series(&self) -> Option<u32> {
        self.cells_in_series
    }

    /// Returns the module power at STC (`v_mp * i_mp`).
    #[must_use]
    pub fn power(&self) -> Power {
        self.v_mp * self.i_mp
    }
}
