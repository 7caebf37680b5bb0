//! Strings and inverters for a target DC capacity.

use tracing::{debug, info};
use uom::si::{
    f64::{Power, Ratio},
    power::kilowatt,
    ratio::ratio,
};

use super::{
    IncompatibleConfiguration, InverterParameters, ModuleParameters, SafetyFactor,
    SiteParameters, SizingConfig, SystemConfiguration,
    sizing::{floor_count, size_strings},
};

/// Lays out strings and inverters to meet `target_capacity`.
pub(super) fn system_configuration(
    config: &SizingConfig,
    target_capacity: Power,
    module: &ModuleParameters,
    inverter: &InverterParameters,
    site: &SiteParameters,
    modules_per_string: Option<u32>,
) -> Result<SystemConfiguration, IncompatibleConfiguration> {
    debug!(
        target_kw = target_capacity.get::<kilowatt>(),
        modules_per_string, "laying out system"
    );

    let sizing = size_strings(config, module, inverter, site, SafetyFactor::default(), None);
    if !sizing.is_compatible() {
        return Err(IncompatibleConfiguration::NoValidStringSize(Box::new(sizing)));
    }

    let modules_per_string = modules_per_string.map_or(
        sizing.recommended_modules_per_string,
        |requested| {
            requested.clamp(sizing.min_modules_per_string, sizing.max_modules_per_string)
        },
    );

    let module_power = module.power();
    let out_of_range = || IncompatibleConfiguration::CapacityOutOfRange {
        target_kw: target_capacity.get::<kilowatt>(),
    };
    let total_modules = round_count(target_capacity / module_power)
        .ok_or_else(out_of_range)?
        .max(1);
    let total_strings = total_modules.div_ceil(modules_per_string);
    let actual_modules = total_strings
        .checked_mul(modules_per_string)
        .ok_or_else(out_of_range)?;
    let string_power = module_power * f64::from(modules_per_string);

    let max_strings_by_power = inverter
        .max_power()
        .map(|power| floor_count(power / string_power));
    let max_strings_by_current = sizing.max_strings_by_current;
    let max_strings_per_inverter = match (max_strings_by_power, max_strings_by_current) {
        (Some(by_power), Some(by_current)) => by_power.min(by_current),
        (Some(limit), None) | (None, Some(limit)) => limit,
        (None, None) => total_strings,
    };
    if max_strings_per_inverter == 0 {
        return Err(IncompatibleConfiguration::StringExceedsInverter {
            max_strings_by_power,
            max_strings_by_current,
        });
    }

    let inverter_count = total_strings.div_ceil(max_strings_per_inverter);
    let strings_per_inverter = total_strings / inverter_count;
    let inverters_with_extra_string = total_strings % inverter_count;

    let actual_capacity = module_power * f64::from(actual_modules);
    let total_ac_power = inverter
        .ac_power()
        .map(|ac_power| ac_power * f64::from(inverter_count));
    let dc_ac_ratio = total_ac_power.map(|ac_power| -> Ratio { actual_capacity / ac_power });

    info!(
        total_modules = actual_modules,
        total_strings,
        inverter_count,
        actual_kw = actual_capacity.get::<kilowatt>(),
        dc_ac_ratio = dc_ac_ratio.map(|r| r.get::<ratio>()),
        "system layout complete"
    );

    Ok(SystemConfiguration {
        target_capacity,
        actual_capacity,
        total_modules: actual_modules,
        modules_per_string,
        total_strings,
        inverter_count,
        strings_per_inverter,
        inverters_with_extra_string,
        max_strings_per_inverter,
        dc_ac_ratio,
        module_power,
        string_power,
        total_ac_power,
        string_sizing: sizing,
    })
}

/// Rounds half to even, or `None` if the count doesn't fit in a `u32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_count(ratio_value: Ratio) -> Option<u32> {
    let count = ratio_value.get::<ratio>().round_ties_even();
    (count <= f64::from(u32::MAX)).then(|| count.max(0.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{electric_potential::volt, f64::ElectricPotential, power::watt};

    use crate::models::electrical::string_sizing::core::{
        InverterParameters, InverterSpec,
        test_support::{generic_400w, site, string_100kw, string_100kw_spec},
    };

    fn layout(
        target_kw: f64,
        inverter: &InverterParameters,
        modules_per_string: Option<u32>,
    ) -> Result<SystemConfiguration, IncompatibleConfiguration> {
        system_configuration(
            &SizingConfig::default(),
            Power::new::<kilowatt>(target_kw),
            &generic_400w(),
            inverter,
            &site(-10.0, 40.0, 0.0),
            modules_per_string,
        )
    }

    #[test]
    fn one_megawatt_on_100kw_string_inverters() {
        let system = layout(1000.0, &string_100kw(), None).expect("compatible");

        // round(1_000_000 / 400.32) = 2498 modules -> 179 strings of 14.
        assert_eq!(system.modules_per_string, 14);
        assert_eq!(system.total_strings, 179);
        assert_eq!(system.total_modules, 2506);

        // floor(137 kW / 5604.48 W) = 24 strings per inverter beats 29 by current.
        assert_eq!(system.max_strings_per_inverter, 24);
        assert_eq!(system.inverter_count, 8);
        assert_eq!(system.strings_per_inverter, 22);
        assert_eq!(system.inverters_with_extra_string, 3);
        assert_eq!(system.strings_by_inverter().iter().sum::<u32>(), 179);

        assert_relative_eq!(system.string_power.get::<watt>(), 5604.48, epsilon = 1e-6);
        assert_relative_eq!(
            system.actual_capacity.get::<kilowatt>(),
            1003.20192,
            epsilon = 1e-6
        );
        let ratio_value = system.dc_ac_ratio.expect("ac power known").get::<ratio>();
        assert_relative_eq!(ratio_value, 1003.20192 / 800.0, epsilon = 1e-9);
    }

    #[test]
    fn requested_string_length_is_clamped() {
        let long = layout(500.0, &string_100kw(), Some(30)).expect("compatible");
        assert_eq!(long.modules_per_string, 16);

        let short = layout(500.0, &string_100kw(), Some(3)).expect("compatible");
        assert_eq!(short.modules_per_string, 12);

        let exact = layout(500.0, &string_100kw(), Some(13)).expect("compatible");
        assert_eq!(exact.modules_per_string, 13);
    }

    #[test]
    fn tiny_target_still_installs_one_string() {
        let system = layout(0.1, &string_100kw(), None).expect("compatible");
        assert_eq!(system.total_strings, 1);
        assert_eq!(system.total_modules, 14);
        assert_eq!(system.inverter_count, 1);
        assert!(system.actual_capacity > system.target_capacity);
    }

    #[test]
    fn unlimited_inverter_takes_every_string() {
        let inverter = InverterParameters::new(InverterSpec {
            idc_max: None,
            max_power: None,
            ac_power: None,
            ..string_100kw_spec()
        })
        .unwrap();
        let system = layout(1000.0, &inverter, None).expect("compatible");

        assert_eq!(system.inverter_count, 1);
        assert_eq!(system.strings_per_inverter, system.total_strings);
        assert_eq!(system.inverters_with_extra_string, 0);
        assert!(system.dc_ac_ratio.is_none());
        assert!(system.total_ac_power.is_none());
    }

    #[test]
    fn string_larger_than_inverter_is_incompatible() {
        let inverter = InverterParameters::new(InverterSpec {
            max_power: Some(Power::new::<watt>(3000.0)),
            ..string_100kw_spec()
        })
        .unwrap();
        let err = layout(1000.0, &inverter, None).unwrap_err();
        assert_eq!(
            err,
            IncompatibleConfiguration::StringExceedsInverter {
                max_strings_by_power: Some(0),
                max_strings_by_current: Some(29),
            }
        );
    }

    #[test]
    fn incompatible_sizing_is_reported_with_detail() {
        let inverter = InverterParameters::new(InverterSpec {
            mppt_min_voltage: ElectricPotential::new::<volt>(950.0),
            ..string_100kw_spec()
        })
        .unwrap();
        let err = layout(1000.0, &inverter, None).unwrap_err();

        let IncompatibleConfiguration::NoValidStringSize(sizing) = &err else {
            panic!("expected NoValidStringSize, got {err:?}");
        };
        assert!(sizing.min_modules_per_string > sizing.max_modules_per_string);
        assert!(sizing.has_critical_warning());
        assert!(err.to_string().starts_with("module and inverter are incompatible"));
    }

    #[test]
    fn capacity_beyond_countable_modules_is_rejected() {
        // 2 TW needs about 5.0e9 modules of 400.32 W.
        let err = layout(2_000_000_000.0, &string_100kw(), None).unwrap_err();
        assert!(matches!(
            err,
            IncompatibleConfiguration::CapacityOutOfRange { target_kw }
                if target_kw == 2_000_000_000.0
        ));
    }

    #[test]
    fn capacity_whose_strings_overflow_the_module_count_is_rejected() {
        // 4_294_967_294 modules fit in a u32, but 306_783_379 strings of 14 don't.
        let target_kw = 0.400_32 * 4_294_967_294.0;
        let err = layout(target_kw, &string_100kw(), None).unwrap_err();
        assert!(matches!(
            err,
            IncompatibleConfiguration::CapacityOutOfRange { .. }
        ));
    }

    #[test]
    fn round_count_rejects_counts_beyond_u32() {
        assert_eq!(round_count(Ratio::new::<ratio>(2.5)), Some(2));
        assert_eq!(round_count(Ratio::new::<ratio>(f64::from(u32::MAX))), Some(u32::MAX));
        assert_eq!(round_count(Ratio::new::<ratio>(5.0e9)), None);
        assert_eq!(round_count(Ratio::new::<ratio>(-0.4)), Some(0));
    }
}
