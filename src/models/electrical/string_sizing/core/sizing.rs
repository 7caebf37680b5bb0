//! Minimum and maximum modules per string.

use tracing::{debug, info, warn};
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Ratio},
    ratio::{percent, ratio},
};

use super::{
    DegradationAnalysis, DegradationOptions, DesignVoltages, InverterParameters, LifecyclePoint,
    MaxLimit, MinLimit, ModuleParameters, SafetyFactor, SiteParameters, SizingConfig,
    SizingWarning, StringSizingResult, StringVoltageRange, temperature::voltage_at_temperature,
};

/// Computes the valid range of modules per string.
pub(super) fn size_strings(
    config: &SizingConfig,
    module: &ModuleParameters,
    inverter: &InverterParameters,
    site: &SiteParameters,
    safety_factor: SafetyFactor,
    degradation: Option<&DegradationOptions>,
) -> StringSizingResult {
    debug!(
        v_oc = module.v_oc().get::<volt>(),
        v_mp = module.v_mp().get::<volt>(),
        mppt_min = inverter.mppt_min_voltage().get::<volt>(),
        mppt_max = inverter.mppt_max_voltage().get::<volt>(),
        vdc_max = inverter.vdc_max().get::<volt>(),
        safety_factor = safety_factor.value(),
        degradation = degradation.is_some(),
        "sizing strings"
    );

    let t_ref = config.reference_temperature;
    let v_oc_stc = module.v_oc();
    let v_mp_stc = module.v_mp();
    let mppt_min = inverter.mppt_min_voltage();

    let v_oc_cold =
        voltage_at_temperature(v_oc_stc, module.temp_coeff_v_oc(), site.min_temp(), t_ref);
    let v_mp_cold =
        voltage_at_temperature(v_mp_stc, module.temp_coeff_v_mp(), site.min_temp(), t_ref);
    let v_mp_hot =
        voltage_at_temperature(v_mp_stc, module.temp_coeff_v_mp(), site.max_temp(), t_ref);

    let elevation_steps: Ratio = site.elevation() / config.elevation_step;
    let elevation_factor =
        1.0 + elevation_steps.get::<ratio>() * config.elevation_derate_per_step.get::<ratio>();
    let v_oc_cold = v_oc_cold * elevation_factor * safety_factor.value();

    let max_by_voc = modules_within(inverter.vdc_max(), v_oc_cold);
    let max_by_mppt = modules_within(inverter.mppt_max_voltage(), v_mp_cold);
    let (max_modules, limiting_factor_max) = if max_by_voc < max_by_mppt {
        (max_by_voc, MaxLimit::VocMax)
    } else {
        (max_by_mppt, MaxLimit::MpptMax)
    };

    let min_modules_bol = modules_to_reach(mppt_min, v_mp_hot);
    let eol = degradation.map(|options| EndOfLife::new(module, options, v_mp_stc, v_mp_hot));
    if let Some(eol) = &eol {
        info!(
            annual_rate_pct = eol.annual_rate.get::<percent>(),
            lifetime_years = eol.lifetime_years,
            eol_factor = eol.factor,
            "applying end-of-life degradation"
        );
    }

    let min_modules_eol = eol
        .as_ref()
        .map(|eol| modules_to_reach(mppt_min, eol.v_mp_hot));
    let (min_modules, limiting_factor_min) = match min_modules_eol {
        Some(min_eol) if min_eol > min_modules_bol => {
            warn!(
                bol = min_modules_bol,
                eol = min_eol,
                "end-of-life degradation requires additional modules"
            );
            (min_eol, MinLimit::EolMpptMin)
        }
        _ => (min_modules_bol, MinLimit::BolMpptMin),
    };

    let recommended = recommended_size(min_modules, max_modules);

    let max_strings_by_current = inverter.idc_max().map(|idc| floor_count(idc / module.i_mp()));
    let max_modules_by_power = inverter
        .max_power()
        .map(|power| floor_count(power / module.power()));

    let v_mp_hot_eol = eol.as_ref().map_or(v_mp_hot, |eol| eol.v_mp_hot);
    let v_mp_stc_eol = eol.as_ref().map_or(v_mp_stc, |eol| eol.v_mp_stc);

    let voltages = DesignVoltages {
        v_oc_stc,
        v_oc_cold,
        v_mp_cold,
        v_mp_stc,
        v_mp_hot,
        v_mp_hot_eol,
        v_mp_stc_eol,
    };

    let string_voltage_range = StringVoltageRange {
        min_bol: v_mp_hot * f64::from(min_modules),
        min_eol: eol.as_ref().map(|eol| eol.v_mp_hot * f64::from(min_modules)),
        max: v_mp_cold * f64::from(max_modules),
        recommended_bol: v_mp_stc * f64::from(recommended),
        recommended_eol: eol.as_ref().map(|eol| eol.v_mp_stc * f64::from(recommended)),
    };

    let warnings = collect_warnings(
        config,
        mppt_min,
        &Bounds {
            min_modules,
            max_modules,
            recommended,
            min_modules_bol,
            min_modules_eol,
            v_mp_hot,
        },
        eol.as_ref(),
    );

    let degradation = eol.map(|eol| DegradationAnalysis {
        annual_rate: eol.annual_rate,
        project_lifetime_years: eol.lifetime_years,
        eol_power_retention: Ratio::new::<ratio>(eol.factor),
        lifecycle: lifecycle(config, &eol, v_mp_stc, v_mp_hot, mppt_min, min_modules),
    });

    info!(
        min_modules,
        max_modules,
        recommended,
        warnings = warnings.len(),
        "string sizing complete"
    );

    StringSizingResult {
        min_modules_per_string: min_modules,
        max_modules_per_string: max_modules,
        recommended_modules_per_string: recommended,
        min_modules_bol,
        min_modules_eol,
        limiting_factor_max,
        limiting_factor_min,
        voltages,
        string_voltage_range,
        max_strings_by_current,
        max_modules_by_power,
        degradation,
        warnings,
    }
}

/// Rounds the midpoint of the range half to even.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn recommended_size(min_modules: u32, max_modules: u32) -> u32 {
    ((f64::from(min_modules) + f64::from(max_modules)) / 2.0).round_ties_even() as u32
}

/// Whole units that fit under a limit.
///
/// Negative and `NaN` ratios count as zero; the cast saturates above `u32::MAX`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn floor_count(ratio_value: Ratio) -> u32 {
    ratio_value.get::<ratio>().floor() as u32
}

/// Whole units needed to reach a limit.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_count(ratio_value: Ratio) -> u32 {
    ratio_value.get::<ratio>().ceil() as u32
}

/// Most modules whose combined voltage stays at or below `limit`.
///
/// The floored ratio is settled against the string voltage itself, so a
/// rounding error in the division can't move the bound by one module.
fn modules_within(limit: ElectricPotential, per_module: ElectricPotential) -> u32 {
    let mut count = floor_count(limit / per_module);
    while count > 0 && per_module * f64::from(count) > limit {
        count -= 1;
    }
    if per_module > ElectricPotential::new::<volt>(0.0) {
        while count < u32::MAX && per_module * f64::from(count + 1) <= limit {
            count += 1;
        }
    }
    count
}

/// Fewest modules, at least one, whose combined voltage reaches `limit`.
///
/// Settled against the string voltage like [`modules_within`]. A
/// non-positive module voltage never reaches the limit and yields one.
fn modules_to_reach(limit: ElectricPotential, per_module: ElectricPotential) -> u32 {
    let mut count = ceil_count(limit / per_module).max(1);
    if per_module > ElectricPotential::new::<volt>(0.0) {
        while count < u32::MAX && per_module * f64::from(count) < limit {
            count += 1;
        }
        while count > 1 && per_module * f64::from(count - 1) >= limit {
            count -= 1;
        }
    }
    count
}

/// Module voltages after the project lifetime has elapsed.
struct EndOfLife {
    annual_rate: Ratio,
    lifetime_years: u32,
    factor: f64,
    v_mp_stc: ElectricPotential,
    v_mp_hot: ElectricPotential,
}

impl EndOfLife {
    /// Assumes Vmp degrades at the same rate as power.
    fn new(
        module: &ModuleParameters,
        options: &DegradationOptions,
        v_mp_stc: ElectricPotential,
        v_mp_hot: ElectricPotential,
    ) -> Self {
        let annual_rate = options
            .annual_rate()
            .unwrap_or_else(|| module.degradation_rate());
        let lifetime_years = options.project_lifetime_years();
        let factor = retention(annual_rate, lifetime_years);

        Self {
            annual_rate,
            lifetime_years,
            factor,
            v_mp_stc: v_mp_stc * factor,
            v_mp_hot: v_mp_hot * factor,
        }
    }
}

/// Fraction of power retained after `years` at `annual_rate`.
fn retention(annual_rate: Ratio, years: u32) -> f64 {
    (1.0 - annual_rate.get::<ratio>()).powf(f64::from(years))
}

fn lifecycle(
    config: &SizingConfig,
    eol: &EndOfLife,
    v_mp_stc: ElectricPotential,
    v_mp_hot: ElectricPotential,
    mppt_min: ElectricPotential,
    min_modules: u32,
) -> Vec<LifecyclePoint> {
    let per_module_min = mppt_min / f64::from(min_modules);

    config
        .lifecycle_years
        .iter()
        .copied()
        .filter(|&year| year <= eol.lifetime_years)
        .map(|year| {
            let factor = retention(eol.annual_rate, year);
            let v_mp_hot_year = v_mp_hot * factor;
            LifecyclePoint {
                year,
                degradation_factor: Ratio::new::<ratio>(factor),
                v_mp_hot: v_mp_hot_year,
                v_mp_stc: v_mp_stc * factor,
                above_mppt_min: v_mp_hot_year > per_module_min,
            }
        })
        .collect()
}

/// Range values the warnings are evaluated against.
struct Bounds {
    min_modules: u32,
    max_modules: u32,
    recommended: u32,
    min_modules_bol: u32,
    min_modules_eol: Option<u32>,
    v_mp_hot: ElectricPotential,
}

/// Evaluates every warning condition in a fixed order.
fn collect_warnings(
    config: &SizingConfig,
    mppt_min: ElectricPotential,
    bounds: &Bounds,
    eol: Option<&EndOfLife>,
) -> Vec<SizingWarning> {
    let mut warnings = Vec::new();

    if bounds.min_modules > bounds.max_modules {
        warn!(
            min_modules = bounds.min_modules,
            max_modules = bounds.max_modules,
            "no valid string configuration"
        );
        warnings.push(SizingWarning::Incompatible {
            min_modules: bounds.min_modules,
            max_modules: bounds.max_modules,
        });
    }

    if bounds.max_modules < config.min_practical_string_size {
        warnings.push(SizingWarning::SmallStringSize {
            max_modules: bounds.max_modules,
            threshold: config.min_practical_string_size,
        });
    }

    let min_string_bol = bounds.v_mp_hot * f64::from(bounds.min_modules);
    if min_string_bol < mppt_min {
        warnings.push(SizingWarning::BolUndervoltage {
            string_voltage: min_string_bol,
            mppt_min,
        });
    }

    let Some(eol) = eol else {
        return warnings;
    };

    let min_modules_eol = bounds.min_modules_eol.unwrap_or(bounds.min_modules_bol);
    if min_modules_eol > bounds.min_modules_bol {
        warnings.push(SizingWarning::EolAdditionalModules {
            additional_modules: min_modules_eol - bounds.min_modules_bol,
            project_lifetime_years: eol.lifetime_years,
            eol_power_retention: Ratio::new::<ratio>(eol.factor),
        });
    }

    let recommended_eol = eol.v_mp_hot * f64::from(bounds.recommended);
    let recommended_floor = mppt_min * (1.0 + config.recommended_eol_margin.get::<ratio>());
    if recommended_eol < mppt_min {
        warnings.push(SizingWarning::EolUndervoltage {
            recommended_modules: bounds.recommended,
            project_lifetime_years: eol.lifetime_years,
            string_voltage: recommended_eol,
            mppt_min,
        });
    } else if recommended_eol < recommended_floor {
        warnings.push(SizingWarning::EolLowRecommendedMargin {
            string_voltage: recommended_eol,
            mppt_min,
            required_margin: config.recommended_eol_margin,
        });
    }

    let min_string_eol = eol.v_mp_hot * f64::from(bounds.min_modules);
    let margin: Ratio = (min_string_eol - mppt_min) / mppt_min;
    if margin < config.minimum_eol_margin {
        warnings.push(SizingWarning::EolLowMinimumMargin {
            margin,
            required_margin: config.minimum_eol_margin,
        });
    }

    warnings
}
