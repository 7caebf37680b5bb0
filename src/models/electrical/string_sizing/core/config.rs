use uom::si::{
    f64::{Length, Ratio, ThermodynamicTemperature},
    length::meter,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

/// Design constants used by string sizing.
///
/// The defaults follow common NEC 690.7 practice and industry rules of thumb.
/// Each field may be overridden when a project applies its own criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingConfig {
    /// Cell temperature at which datasheet ratings apply (STC).
    pub reference_temperature: ThermodynamicTemperature,

    /// Elevation step for the open-circuit voltage correction.
    pub elevation_step: Length,

    /// Voltage increase applied per [`elevation_step`](Self::elevation_step).
    pub elevation_derate_per_step: Ratio,

    /// Maximum string sizes below this value produce an advisory warning.
    pub min_practical_string_size: u32,

    /// Required end-of-life margin above the MPPT minimum for the
    /// recommended string size.
    pub recommended_eol_margin: Ratio,

    /// Required end-of-life margin above the MPPT minimum for the minimum
    /// string size.
    pub minimum_eol_margin: Ratio,

    /// Years reported in the lifecycle voltage table.
    ///
    /// Years beyond the project lifetime are skipped.
    pub lifecycle_years: Vec<u32>,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            reference_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
            elevation_step: Length::new::<meter>(300.0),
            elevation_derate_per_step: Ratio::new::<percent>(1.0),
            min_practical_string_size: 2,
            recommended_eol_margin: Ratio::new::<percent>(5.0),
            minimum_eol_margin: Ratio::new::<percent>(10.0),
            lifecycle_years: vec![0, 5, 10, 15, 20, 25, 30],
        }
    }
}
