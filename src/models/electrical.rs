//! Electrical design models for PV arrays.

pub mod string_sizing;
