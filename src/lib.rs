//! # Solar String Sizing
//!
//! String sizing and inverter layout models for utility-scale PV projects,
//! built as [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! Given module datasheet ratings, inverter voltage/current/power limits and
//! site temperature extremes, the models compute how many modules may be
//! wired in series per string, how a target DC capacity is split across
//! strings and inverters, and which discrete string lengths stay inside the
//! inverter's MPPT window.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations and
//!   the engine they delegate to.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable.

pub mod models;
pub mod support;
