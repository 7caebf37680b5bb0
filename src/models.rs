//! Public Twine models.
//!
//! Models are organized into domain-specific submodules. Each model lives in
//! its own module with an internal `core` submodule where the computation
//! lives; the [`twine_core::Model`] implementations are thin adapters over
//! that core.

pub mod electrical;
