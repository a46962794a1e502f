use num_traits::Zero;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is not equal to zero.
///
/// # Examples
///
/// ```
/// use quadratic_core::constraint::{Constrained, NonZero};
///
/// let a = Constrained::<_, NonZero>::new(3).unwrap();
/// assert_eq!(a.into_inner(), 3);
///
/// let b = NonZero::new(-2).unwrap();
/// assert_eq!(b.as_ref(), &-2);
///
/// assert!(NonZero::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonZero;

impl NonZero {
    /// Constructs `Constrained<T, NonZero>` if the value is not zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Zero`] if the value equals zero.
    pub fn new<T: Zero>(value: T) -> Result<Constrained<T, NonZero>, ConstraintError> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_zero() {
            Err(ConstraintError::Zero)
        } else {
            Ok(())
        }
    }
}
