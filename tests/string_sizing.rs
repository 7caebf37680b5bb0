use approx::assert_relative_eq;
use solar_string_sizing::{
    models::electrical::string_sizing::{
        DegradationOptions, IncompatibleConfiguration, InverterParameters, InverterSpec, MaxLimit,
        MinLimit, ModuleParameters, SafetyFactor, SiteParameters, SiteSpec, SizingWarning,
        StringSizingEngine, StringSizingResult, catalog,
    },
    support::constraint::StrictlyPositive,
};
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Length, Power, Ratio, ThermodynamicTemperature},
    length::meter,
    power::{kilowatt, watt},
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

fn module() -> ModuleParameters {
    catalog::find_module("Generic 400W Mono")
        .unwrap()
        .parameters()
        .unwrap()
}

fn inverter_spec() -> InverterSpec {
    catalog::find_inverter("Generic String 100kW").unwrap().spec()
}

fn inverter() -> InverterParameters {
    InverterParameters::new(inverter_spec()).unwrap()
}

fn site(min_c: f64, max_c: f64, elevation_m: f64) -> SiteParameters {
    SiteParameters::new(SiteSpec {
        min_temp: ThermodynamicTemperature::new::<degree_celsius>(min_c),
        max_temp: ThermodynamicTemperature::new::<degree_celsius>(max_c),
        elevation: Length::new::<meter>(elevation_m),
    })
    .unwrap()
}

fn size(
    inverter: &InverterParameters,
    site: &SiteParameters,
    safety_factor: f64,
    degradation: Option<&DegradationOptions>,
) -> StringSizingResult {
    StringSizingEngine::default().compute_string_size(
        &module(),
        inverter,
        site,
        SafetyFactor::new(safety_factor).unwrap(),
        degradation,
    )
}

#[test]
fn literal_scenario() {
    let result = size(&inverter(), &site(-10.0, 40.0, 0.0), 1.0, None);

    assert_relative_eq!(result.voltages.v_oc_cold.get::<volt>(), 54.351, epsilon = 1e-9);
    assert_relative_eq!(result.voltages.v_mp_cold.get::<volt>(), 47.100_15, epsilon = 1e-9);
    assert_relative_eq!(result.voltages.v_mp_hot.get::<volt>(), 39.385_65, epsilon = 1e-9);

    assert_eq!(result.max_modules_per_string, 16);
    assert_eq!(result.limiting_factor_max, MaxLimit::MpptMax);
    assert_eq!(result.min_modules_per_string, 12);
    assert_eq!(result.limiting_factor_min, MinLimit::BolMpptMin);
    assert_eq!(result.recommended_modules_per_string, 14);
    assert_eq!(result.max_strings_by_current, Some(29));
    assert_eq!(result.max_modules_by_power, Some(342));
    assert!(result.is_compatible());
    assert!(result.warnings.is_empty());
}

#[test]
fn raising_vdc_max_never_shrinks_the_range() {
    let site = site(-10.0, 40.0, 0.0);
    let mut previous = 0;
    for vdc_max in [600.0, 700.0, 800.0, 900.0, 1000.0, 1200.0, 1500.0] {
        let inverter = InverterParameters::new(InverterSpec {
            vdc_max: ElectricPotential::new::<volt>(vdc_max),
            ..inverter_spec()
        })
        .unwrap();
        let max = size(&inverter, &site, 1.0, None).max_modules_per_string;
        assert!(max >= previous, "vdc_max {vdc_max}: {max} < {previous}");
        previous = max;
    }
}

#[test]
fn raising_mppt_max_never_lowers_the_maximum() {
    let site = site(-10.0, 40.0, 0.0);
    let mut previous = 0;
    for mppt_max in [500.0, 600.0, 700.0, 800.0, 900.0, 1000.0] {
        let inverter = InverterParameters::new(InverterSpec {
            mppt_max_voltage: ElectricPotential::new::<volt>(mppt_max),
            ..inverter_spec()
        })
        .unwrap();
        let max = size(&inverter, &site, 1.0, None).max_modules_per_string;
        assert!(max >= previous, "mppt_max {mppt_max}: {max} < {previous}");
        previous = max;
    }
}

#[test]
fn raising_mppt_min_never_lowers_the_minimum() {
    let site = site(-10.0, 40.0, 0.0);
    let options = DegradationOptions::new(25);
    let mut previous_bol = 0;
    let mut previous_eol = 0;
    for mppt_min in [200.0, 300.0, 400.0, 450.0, 500.0, 600.0, 700.0] {
        let inverter = InverterParameters::new(InverterSpec {
            mppt_min_voltage: ElectricPotential::new::<volt>(mppt_min),
            ..inverter_spec()
        })
        .unwrap();

        let bol = size(&inverter, &site, 1.0, None).min_modules_per_string;
        assert!(bol >= previous_bol, "mppt_min {mppt_min}: {bol} < {previous_bol}");
        previous_bol = bol;

        let eol = size(&inverter, &site, 1.0, Some(&options)).min_modules_per_string;
        assert!(eol >= previous_eol, "mppt_min {mppt_min}: {eol} < {previous_eol}");
        assert!(eol >= bol);
        previous_eol = eol;
    }
}

#[test]
fn larger_safety_factor_never_grows_the_range() {
    let site = site(-10.0, 40.0, 0.0);
    let inverter = inverter();
    let mut previous = u32::MAX;
    for safety_factor in [1.0, 1.05, 1.1, 1.2, 1.3, 1.5] {
        let max = size(&inverter, &site, safety_factor, None).max_modules_per_string;
        assert!(max <= previous);
        previous = max;
    }
}

#[test]
fn colder_sites_never_allow_longer_strings() {
    let inverter = inverter();
    let mut previous = u32::MAX;
    for min_c in [10.0, 0.0, -10.0, -20.0, -30.0, -40.0] {
        let max = size(&inverter, &site(min_c, 40.0, 0.0), 1.0, None).max_modules_per_string;
        assert!(max <= previous, "min_temp {min_c}");
        previous = max;
    }
}

#[test]
fn hotter_sites_never_allow_shorter_strings() {
    let inverter = inverter();
    let mut previous = 0;
    for max_c in [20.0, 30.0, 40.0, 50.0, 60.0, 70.0] {
        let min = size(&inverter, &site(-10.0, max_c, 0.0), 1.0, None).min_modules_per_string;
        assert!(min >= previous, "max_temp {max_c}");
        previous = min;
    }
}

#[test]
fn longer_lifetimes_never_lower_the_minimum() {
    let site = site(-10.0, 40.0, 0.0);
    let inverter = inverter();
    let bol = size(&inverter, &site, 1.0, None);

    let mut previous = bol.min_modules_per_string;
    for years in (0..=40).step_by(5) {
        let options = DegradationOptions::new(years);
        let result = size(&inverter, &site, 1.0, Some(&options));
        assert!(result.min_modules_per_string >= previous, "{years} years");
        assert_eq!(result.max_modules_per_string, bol.max_modules_per_string);
        previous = result.min_modules_per_string;
    }
}

#[test]
fn end_of_life_check_at_module_rate() {
    let options = DegradationOptions::new(25);
    let result = size(&inverter(), &site(-10.0, 40.0, 0.0), 1.0, Some(&options));

    assert_eq!(result.min_modules_bol, 12);
    assert_eq!(result.min_modules_eol, Some(13));
    assert_eq!(result.min_modules_per_string, 13);
    assert_eq!(result.limiting_factor_min, MinLimit::EolMpptMin);
    assert_eq!(result.recommended_modules_per_string, 14);

    let degradation = result.degradation.as_ref().unwrap();
    assert_relative_eq!(
        degradation.eol_power_retention.get::<percent>(),
        0.995_f64.powi(25) * 100.0,
        epsilon = 1e-9
    );
    let years: Vec<u32> = degradation.lifecycle.iter().map(|point| point.year).collect();
    assert_eq!(years, vec![0, 5, 10, 15, 20, 25]);

    assert!(matches!(
        result.warnings.as_slice(),
        [
            SizingWarning::EolAdditionalModules {
                additional_modules: 1,
                ..
            },
            SizingWarning::EolLowMinimumMargin { .. },
        ]
    ));
    assert!(!result.has_critical_warning());
}

#[test]
fn aggressive_degradation_is_critical() {
    let options = DegradationOptions::new(30)
        .with_annual_rate(Ratio::new::<percent>(3.0))
        .unwrap();
    let result = size(&inverter(), &site(-10.0, 40.0, 0.0), 1.0, Some(&options));

    assert!(result.has_critical_warning());
    assert!(
        result
            .warnings
            .iter()
            .any(|warning| matches!(warning, SizingWarning::EolUndervoltage { .. }))
    );
}

#[test]
fn table_matches_bounds() {
    let engine = StringSizingEngine::default();
    let module = module();
    for name in ["Generic String 100kW", "Generic String 150kW", "Generic Central 1MW"] {
        let inverter = catalog::find_inverter(name).unwrap().parameters().unwrap();
        let site = site(-20.0, 45.0, 500.0);

        let sizing =
            engine.compute_string_size(&module, &inverter, &site, SafetyFactor::default(), None);
        let rows = engine.enumerate_valid_configurations(&module, &inverter, &site);

        let expected: Vec<u32> = if sizing.is_compatible() {
            (sizing.min_modules_per_string..=sizing.max_modules_per_string).collect()
        } else {
            Vec::new()
        };
        let counts: Vec<u32> = rows.iter().map(|row| row.modules_per_string).collect();
        assert_eq!(counts, expected, "{name}");

        for row in &rows {
            assert!(row.v_mp_cold <= inverter.mppt_max_voltage());
            assert!(row.v_oc_cold <= inverter.vdc_max());
            assert_eq!(
                row.within_mppt_range,
                row.v_mp_hot >= inverter.mppt_min_voltage()
            );
        }
    }
}

#[test]
fn system_layout_conserves_strings_and_modules() {
    let engine = StringSizingEngine::default();
    let module = module();
    let site = site(-10.0, 40.0, 0.0);

    for name in ["Generic String 100kW", "Generic String 150kW", "Generic Central 1MW"] {
        let inverter = catalog::find_inverter(name).unwrap().parameters().unwrap();
        for target_kw in [50.0, 999.0, 1000.0, 2500.0, 10_000.0] {
            let target = StrictlyPositive::new(Power::new::<kilowatt>(target_kw)).unwrap();
            let system = engine
                .compute_system_configuration(target, &module, &inverter, &site, None)
                .unwrap();

            assert_eq!(
                system.total_modules,
                system.total_strings * system.modules_per_string
            );
            assert_eq!(
                system.total_strings,
                system.inverter_count * system.strings_per_inverter
                    + system.inverters_with_extra_string
            );
            assert!(system.inverters_with_extra_string < system.inverter_count);

            let per_inverter = system.strings_by_inverter();
            assert_eq!(per_inverter.len() as u32, system.inverter_count);
            assert_eq!(per_inverter.iter().sum::<u32>(), system.total_strings);
            assert!(
                per_inverter
                    .iter()
                    .all(|&strings| strings <= system.max_strings_per_inverter)
            );

            assert_relative_eq!(
                system.actual_capacity.get::<watt>(),
                module.power().get::<watt>() * f64::from(system.total_modules),
                max_relative = 1e-12
            );
        }
    }
}

#[test]
fn incompatible_pairing() {
    let inverter = InverterParameters::new(InverterSpec {
        mppt_min_voltage: ElectricPotential::new::<volt>(950.0),
        ..inverter_spec()
    })
    .unwrap();
    let site = site(-10.0, 40.0, 0.0);
    let engine = StringSizingEngine::default();

    let result = size(&inverter, &site, 1.0, None);
    assert!(!result.is_compatible());
    assert!(result.has_critical_warning());
    assert!(matches!(
        result.warnings.first(),
        Some(SizingWarning::Incompatible { .. })
    ));

    assert!(
        engine
            .enumerate_valid_configurations(&module(), &inverter, &site)
            .is_empty()
    );

    let target = StrictlyPositive::new(Power::new::<kilowatt>(1000.0)).unwrap();
    let error = engine
        .compute_system_configuration(target, &module(), &inverter, &site, None)
        .unwrap_err();
    assert!(matches!(
        error,
        IncompatibleConfiguration::NoValidStringSize(ref sizing)
            if sizing.min_modules_per_string > sizing.max_modules_per_string
    ));
    assert!(error.to_string().contains("incompatible"));
}

#[test]
fn results_serialize_to_json() {
    let options = DegradationOptions::new(25);
    let result = size(&inverter(), &site(-10.0, 40.0, 0.0), 1.0, Some(&options));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["min_modules_per_string"], 13);
    assert_eq!(json["max_modules_per_string"], 16);
    assert_eq!(json["limiting_factor_min"], "EolMpptMin");
    assert_eq!(json["warnings"].as_array().map(Vec::len), Some(2));
    assert!(json["voltages"]["v_oc_cold"].is_number());
}
