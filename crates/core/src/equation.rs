use std::fmt;

use thiserror::Error;

use crate::constraint::{Constrained, NonZero};

/// Errors that can occur when constructing an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EquationError {
    #[error("incorrect number of arguments; {given} given")]
    InvalidArgumentCount { given: usize },

    #[error("leading coefficient must not be zero")]
    Degenerate,
}

/// An equation defined by `N` integer coefficients.
///
/// The const generic `N` is the number of coefficients.
/// For example, `N = 3` represents `Ax² + Bx + C = 0`.
pub trait Equation<const N: usize> {
    /// Returns the coefficients in their fixed order.
    fn args_as_array(&self) -> [i32; N];

    /// Checks that `args` holds exactly `N` coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`EquationError::InvalidArgumentCount`] for any other length.
    fn has_valid_arguments(args: &[i32]) -> Result<bool, EquationError>
    where
        Self: Sized,
    {
        if args.len() == N {
            Ok(true)
        } else {
            Err(EquationError::InvalidArgumentCount { given: args.len() })
        }
    }
}

/// The equation `Ax² + Bx + C = 0`.
pub trait QuadraticEquation: Equation<3> {
    /// For the equation `Ax² + Bx + C = 0`, get A.
    fn a(&self) -> i32;

    /// For the equation `Ax² + Bx + C = 0`, get B.
    fn b(&self) -> i32;

    /// For the equation `Ax² + Bx + C = 0`, get C.
    fn c(&self) -> i32;

    /// Returns `B² - 4AC`.
    ///
    /// Computed in `i128`, which cannot overflow for `i32` coefficients.
    fn discriminant(&self) -> i128 {
        let (a, b, c) = (i128::from(self.a()), i128::from(self.b()), i128::from(self.c()));
        b * b - 4 * a * c
    }
}

/// An immutable quadratic equation with a non-zero leading coefficient.
///
/// # Examples
///
/// ```
/// use quadratic_core::{BasicQuadraticEquation, EquationError, QuadraticEquation};
///
/// // x² + 5x + 6 = 0
/// let eq = BasicQuadraticEquation::new(1, 5, 6).unwrap();
/// assert_eq!(eq.discriminant(), 1);
/// assert_eq!(eq.to_string(), "1x^2 + 5x + 6 = 0");
///
/// assert_eq!(BasicQuadraticEquation::new(0, 5, 6), Err(EquationError::Degenerate));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Coefficients", into = "Coefficients")
)]
pub struct BasicQuadraticEquation {
    a: Constrained<i32, NonZero>,
    b: i32,
    c: i32,
}

impl BasicQuadraticEquation {
    /// Creates the equation `ax² + bx + c = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`EquationError::Degenerate`] if `a` is zero.
    pub fn new(a: i32, b: i32, c: i32) -> Result<Self, EquationError> {
        let a = NonZero::new(a).map_err(|_| EquationError::Degenerate)?;
        Ok(Self { a, b, c })
    }
}

impl Equation<3> for BasicQuadraticEquation {
    fn args_as_array(&self) -> [i32; 3] {
        [self.a(), self.b, self.c]
    }
}

impl QuadraticEquation for BasicQuadraticEquation {
    fn a(&self) -> i32 {
        *self.a.as_ref()
    }

    fn b(&self) -> i32 {
        self.b
    }

    fn c(&self) -> i32 {
        self.c
    }
}

impl TryFrom<&[i32]> for BasicQuadraticEquation {
    type Error = EquationError;

    fn try_from(args: &[i32]) -> Result<Self, Self::Error> {
        Self::has_valid_arguments(args)?;
        Self::new(args[0], args[1], args[2])
    }
}

impl TryFrom<Vec<i32>> for BasicQuadraticEquation {
    type Error = EquationError;

    fn try_from(args: Vec<i32>) -> Result<Self, Self::Error> {
        Self::try_from(args.as_slice())
    }
}

/// Writes the equation as `ax^2 + bx + c = 0`, folding signs into the operators.
impl fmt::Display for BasicQuadraticEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = |n: i32| if n < 0 { '-' } else { '+' };
        write!(
            f,
            "{}x^2 {} {}x {} {} = 0",
            self.a(),
            op(self.b),
            self.b.unsigned_abs(),
            op(self.c),
            self.c.unsigned_abs(),
        )
    }
}

/// Unvalidated coefficients used as the serialized form.
#[cfg(feature = "serde-derive")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct Coefficients {
    a: i32,
    b: i32,
    c: i32,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<Coefficients> for BasicQuadraticEquation {
    type Error = EquationError;

    fn try_from(Coefficients { a, b, c }: Coefficients) -> Result<Self, Self::Error> {
        Self::new(a, b, c)
    }
}

#[cfg(feature = "serde-derive")]
impl From<BasicQuadraticEquation> for Coefficients {
    fn from(eq: BasicQuadraticEquation) -> Self {
        let [a, b, c] = eq.args_as_array();
        Self { a, b, c }
    }
}
