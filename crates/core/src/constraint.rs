//! Checked numbers for equation coefficients and solver settings.
//!
//! Two invariants matter to a quadratic: the leading coefficient is never
//! zero ([`NonZero`]) and a rounding precision is never negative
//! ([`NonNegative`]). A [`Constrained<T, C>`] holds a value that passed the
//! check for marker `C`, so a `Constrained<i32, NonZero>` coefficient can be
//! divided by without another test.
//!
//! Both markers have a `new()` shorthand for `Constrained::new`.

mod non_negative;
mod non_zero;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use non_zero::NonZero;

/// The check a marker type applies before a [`Constrained`] value exists.
pub trait Constraint<T> {
    /// Accepts `value` or reports which rule it breaks.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] naming the broken rule.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value was refused by a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
}

/// A number that passed the check of marker `C`.
///
/// # Example
///
/// ```
/// use quadratic_core::constraint::{Constrained, NonZero};
///
/// let n = Constrained::<_, NonZero>::new(-7).unwrap();
/// assert_eq!(n.into_inner(), -7);
///
/// assert!(Constrained::<_, NonZero>::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the error from [`Constraint::check`].
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value).map(|()| Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Unwraps the checked number.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Borrows the checked number.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
