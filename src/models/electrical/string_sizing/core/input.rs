mod degradation;
mod inverter;
mod module;
mod safety_factor;
mod site;

pub use degradation::DegradationOptions;
pub use inverter::{InverterParameters, InverterSpec};
pub use module::{DEFAULT_DEGRADATION_RATE_PERCENT, ModuleParameters, ModuleSpec};
pub use safety_factor::SafetyFactor;
pub use site::{SiteParameters, SiteSpec};
