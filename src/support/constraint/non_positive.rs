use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-positive (zero or less).
///
/// Crystalline silicon modules lose voltage as they heat up, so their
/// temperature coefficients of voltage carry this constraint.
///
/// # Examples
///
/// ```
/// use solar_string_sizing::support::constraint::{Constrained, NonPositive};
///
/// let x = Constrained::<_, NonPositive>::new(-0.28).unwrap();
/// assert_eq!(x.into_inner(), -0.28);
///
/// assert!(NonPositive::new(0).is_ok());
/// assert!(NonPositive::new(3).is_err());
/// assert!(NonPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonPositive;

impl NonPositive {
    /// Constructs a [`Constrained<T, NonPositive>`] if the value is non-positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is positive or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonPositive>, ConstraintError> {
        Constrained::<T, NonPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Less | Ordering::Equal) => Ok(()),
            Some(Ordering::Greater) => Err(ConstraintError::Positive),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
