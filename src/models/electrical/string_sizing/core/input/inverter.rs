use uom::si::f64::{ElectricCurrent, ElectricPotential, Power};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::super::InputError;

/// Inverter DC input limits and AC rating, as supplied by the caller.
///
/// The window ordering `mppt_min_voltage < mppt_max_voltage <= vdc_max` is
/// expected but not enforced: an inverted window shows up as an
/// incompatible string size rather than an input error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverterSpec {
    /// Lower edge of the MPPT voltage window.
    pub mppt_min_voltage: ElectricPotential,

    /// Upper edge of the MPPT voltage window.
    pub mppt_max_voltage: ElectricPotential,

    /// Absolute maximum DC input voltage.
    pub vdc_max: ElectricPotential,

    /// Maximum DC input current.
    pub idc_max: Option<ElectricCurrent>,

    /// Maximum DC input power.
    pub max_power: Option<Power>,

    /// Rated AC output power.
    pub ac_power: Option<Power>,
}

/// Validated inverter limits.
///
/// Every voltage is strictly positive, as is every optional limit that is present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverterParameters {
    mppt_min_voltage: ElectricPotential,
    mppt_max_voltage: ElectricPotential,
    vdc_max: ElectricPotential,
    idc_max: Option<ElectricCurrent>,
    max_power: Option<Power>,
    ac_power: Option<Power>,
}

impl InverterParameters {
    /// Validates an inverter spec.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidField`] naming the first field that is
    /// not strictly positive.
    pub fn new(spec: InverterSpec) -> Result<Self, InputError> {
        let mppt_min_voltage = StrictlyPositive::new(spec.mppt_min_voltage)
            .map_err(InputError::field("mppt_min_voltage"))?;
        let mppt_max_voltage = StrictlyPositive::new(spec.mppt_max_voltage)
            .map_err(InputError::field("mppt_max_voltage"))?;
        let vdc_max = StrictlyPositive::new(spec.vdc_max).map_err(InputError::field("vdc_max"))?;

        Ok(Self {
            mppt_min_voltage: mppt_min_voltage.into_inner(),
            mppt_max_voltage: mppt_max_voltage.into_inner(),
            vdc_max: vdc_max.into_inner(),
            idc_max: optional(spec.idc_max, "idc_max")?,
            max_power: optional(spec.max_power, "max_power")?,
            ac_power: optional(spec.ac_power, "ac_power")?,
        })
    }

    /// Returns the lower edge of the MPPT window.
    #[must_use]
    pub fn mppt_min_voltage(&self) -> ElectricPotential {
        self.mppt_min_voltage
    }

    /// Returns the upper edge of the MPPT window.
    #[must_use]
    pub fn mppt_max_voltage(&self) -> ElectricPotential {
        self.mppt_max_voltage
    }

    /// Returns the absolute maximum DC input voltage.
    #[must_use]
    pub fn vdc_max(&self) -> ElectricPotential {
        self.vdc_max
    }

    /// Returns the maximum DC input current, if rated.
    #[must_use]
    pub fn idc_max(&self) -> Option<ElectricCurrent> {
        self.idc_max
    }

    /// Returns the maximum DC input power, if rated.
    #[must_use]
    pub fn max_power(&self) -> Option<Power> {
        self.max_power
    }

    /// Returns the rated AC output power, if known.
    #[must_use]
    pub fn ac_power(&self) -> Option<Power> {
        self.ac_power
    }
}

fn optional<T>(value: Option<T>, field: &'static str) -> Result<Option<T>, InputError>
where
    T: PartialOrd + num_traits::Zero,
{
    value
        .map(|value| Constrained::<T, StrictlyPositive>::new(value).map(Constrained::into_inner))
        .transpose()
        .map_err(InputError::field(field))
}
