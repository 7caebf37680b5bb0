//! Candidate string lengths and their voltages.

use super::{
    ConfigurationRow, InverterParameters, ModuleParameters, SafetyFactor, SiteParameters,
    SizingConfig, sizing::size_strings,
};

/// Lists every string length in the valid range with its voltages.
///
/// Returns an empty table when the range is empty.
pub(super) fn configuration_table(
    config: &SizingConfig,
    module: &ModuleParameters,
    inverter: &InverterParameters,
    site: &SiteParameters,
) -> Vec<ConfigurationRow> {
    let sizing = size_strings(config, module, inverter, site, SafetyFactor::default(), None);
    let voltages = sizing.voltages;
    let module_power = module.power();

    (sizing.min_modules_per_string..=sizing.max_modules_per_string)
        .map(|count| {
            let n = f64::from(count);
            let v_mp_cold = voltages.v_mp_cold * n;
            let v_mp_hot = voltages.v_mp_hot * n;
            ConfigurationRow {
                modules_per_string: count,
                v_oc_cold: voltages.v_oc_cold * n,
                v_mp_cold,
                v_mp_stc: voltages.v_mp_stc * n,
                v_mp_hot,
                string_power: module_power * n,
                within_mppt_range: v_mp_hot >= inverter.mppt_min_voltage()
                    && v_mp_cold <= inverter.mppt_max_voltage(),
            }
        })
        .collect()
}
