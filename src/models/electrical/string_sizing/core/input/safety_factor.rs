use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Multiplier applied to the cold-corrected open-circuit voltage.
///
/// A value of 1.0 (the default) adds no margin beyond the temperature and
/// elevation corrections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyFactor(Constrained<f64, StrictlyPositive>);

impl SafetyFactor {
    /// Creates a [`SafetyFactor`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(value)?))
    }

    /// Returns the multiplier.
    #[must_use]
    pub fn value(&self) -> f64 {
        *self.0.as_ref()
    }
}

impl Default for SafetyFactor {
    fn default() -> Self {
        Self(StrictlyPositive::one())
    }
}
