//! Result types for string sizing and system layout.

use serde::Serialize;
use uom::si::f64::{ElectricPotential, Power, Ratio};

use super::SizingWarning;

/// Bound that set the maximum modules per string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaxLimit {
    /// The cold open-circuit string voltage reaches the inverter's `vdc_max`.
    VocMax,
    /// The cold maximum-power string voltage reaches the top of the MPPT window.
    MpptMax,
}

/// Bound that set the minimum modules per string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MinLimit {
    /// The hot beginning-of-life string voltage must reach the MPPT minimum.
    BolMpptMin,
    /// The hot end-of-life string voltage must reach the MPPT minimum.
    EolMpptMin,
}

/// Per-module voltages at each design condition.
///
/// End-of-life values equal their beginning-of-life counterparts when no
/// degradation was requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignVoltages {
    /// Open-circuit voltage at STC.
    pub v_oc_stc: ElectricPotential,

    /// Open-circuit voltage at the minimum temperature, including the
    /// elevation correction and safety factor.
    pub v_oc_cold: ElectricPotential,

    /// Maximum-power voltage at the minimum temperature.
    pub v_mp_cold: ElectricPotential,

    /// Maximum-power voltage at STC.
    pub v_mp_stc: ElectricPotential,

    /// Maximum-power voltage at the maximum temperature, beginning of life.
    pub v_mp_hot: ElectricPotential,

    /// Maximum-power voltage at the maximum temperature, end of life.
    pub v_mp_hot_eol: ElectricPotential,

    /// Maximum-power voltage at STC, end of life.
    pub v_mp_stc_eol: ElectricPotential,
}

/// String voltages at the bounds of the computed range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StringVoltageRange {
    /// Minimum string at the hot condition, beginning of life.
    pub min_bol: ElectricPotential,

    /// Minimum string at the hot condition, end of life.
    pub min_eol: Option<ElectricPotential>,

    /// Maximum string at the cold maximum-power condition.
    pub max: ElectricPotential,

    /// Recommended string at STC, beginning of life.
    pub recommended_bol: ElectricPotential,

    /// Recommended string at STC, end of life.
    pub recommended_eol: Option<ElectricPotential>,
}

/// Module voltages at one checkpoint year of the project.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifecyclePoint {
    /// Years since commissioning.
    pub year: u32,

    /// Retained fraction of beginning-of-life power, `(1 - r)^year`.
    pub degradation_factor: Ratio,

    /// Maximum-power voltage at the maximum temperature.
    pub v_mp_hot: ElectricPotential,

    /// Maximum-power voltage at STC.
    pub v_mp_stc: ElectricPotential,

    /// Whether a minimum-length string still exceeds the MPPT minimum when hot.
    pub above_mppt_min: bool,
}

/// End-of-life degradation summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegradationAnalysis {
    /// Annual degradation rate applied.
    pub annual_rate: Ratio,

    /// Project lifetime in years.
    pub project_lifetime_years: u32,

    /// Fraction of beginning-of-life power retained at end of life.
    pub eol_power_retention: Ratio,

    /// Voltages at each configured checkpoint year within the lifetime.
    pub lifecycle: Vec<LifecyclePoint>,
}

/// Outcome of a string sizing calculation.
///
/// Both bounds are always reported, even when the minimum exceeds the
/// maximum; check [`is_compatible`](Self::is_compatible) or the warnings
/// before using the range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringSizingResult {
    /// Fewest modules per string that stay above the MPPT minimum.
    pub min_modules_per_string: u32,

    /// Most modules per string that stay below `vdc_max` and the MPPT maximum.
    pub max_modules_per_string: u32,

    /// Middle of the range, rounded half to even.
    pub recommended_modules_per_string: u32,

    /// Beginning-of-life minimum before the end-of-life adjustment.
    pub min_modules_bol: u32,

    /// End-of-life minimum, when degradation was requested.
    pub min_modules_eol: Option<u32>,

    /// Bound that set the maximum.
    pub limiting_factor_max: MaxLimit,

    /// Bound that set the minimum.
    pub limiting_factor_min: MinLimit,

    /// Module voltages at each design condition.
    pub voltages: DesignVoltages,

    /// String voltages at the bounds of the range.
    pub string_voltage_range: StringVoltageRange,

    /// Parallel strings allowed by the inverter's DC current limit.
    pub max_strings_by_current: Option<u32>,

    /// Modules allowed by the inverter's DC power limit.
    pub max_modules_by_power: Option<u32>,

    /// Degradation summary, when requested.
    pub degradation: Option<DegradationAnalysis>,

    /// Warnings in evaluation order.
    pub warnings: Vec<SizingWarning>,
}

impl StringSizingResult {
    /// Returns `true` if at least one string length satisfies every voltage bound.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.min_modules_per_string <= self.max_modules_per_string
    }

    /// Returns `true` if any warning is critical.
    #[must_use]
    pub fn has_critical_warning(&self) -> bool {
        self.warnings.iter().any(SizingWarning::is_critical)
    }
}

/// A complete DC layout for a target system capacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemConfiguration {
    /// Requested DC capacity.
    pub target_capacity: Power,

    /// DC capacity actually installed.
    pub actual_capacity: Power,

    /// Installed module count, always `total_strings * modules_per_string`.
    pub total_modules: u32,

    /// Modules in each string.
    pub modules_per_string: u32,

    /// Installed string count.
    pub total_strings: u32,

    /// Inverter count.
    pub inverter_count: u32,

    /// Strings on every inverter.
    pub strings_per_inverter: u32,

    /// Number of inverters carrying one string beyond `strings_per_inverter`.
    pub inverters_with_extra_string: u32,

    /// Most strings any one inverter may carry.
    pub max_strings_per_inverter: u32,

    /// DC-to-AC ratio, when the inverter's AC rating is known.
    pub dc_ac_ratio: Option<Ratio>,

    /// STC power of one module.
    pub module_power: Power,

    /// STC power of one string.
    pub string_power: Power,

    /// Combined AC rating of all inverters, when known.
    pub total_ac_power: Option<Power>,

    /// String sizing the layout was derived from.
    pub string_sizing: StringSizingResult,
}

impl SystemConfiguration {
    /// Returns the string count of each inverter.
    ///
    /// Inverters carrying the extra string come first.
    #[must_use]
    pub fn strings_by_inverter(&self) -> Vec<u32> {
        (0..self.inverter_count)
            .map(|index| {
                if index < self.inverters_with_extra_string {
                    self.strings_per_inverter + 1
                } else {
                    self.strings_per_inverter
                }
            })
            .collect()
    }
}

/// String voltages and MPPT fit for one candidate string length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfigurationRow {
    /// Modules in the string.
    pub modules_per_string: u32,

    /// Open-circuit string voltage at the cold condition.
    pub v_oc_cold: ElectricPotential,

    /// Maximum-power string voltage at the cold condition.
    pub v_mp_cold: ElectricPotential,

    /// Maximum-power string voltage at STC.
    pub v_mp_stc: ElectricPotential,

    /// Maximum-power string voltage at the hot condition.
    pub v_mp_hot: ElectricPotential,

    /// STC power of the string.
    pub string_power: Power,

    /// Whether the string stays inside the MPPT window at both temperature extremes.
    pub within_mppt_range: bool,
}
