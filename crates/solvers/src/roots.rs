use std::cmp::Ordering;

use quadratic_core::QuadraticEquation;

use crate::format::{decimal, round};

/// Roots of a quadratic equation, rounded to the solver's precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    /// Two distinct real roots, ordered so that `one <= two`.
    ///
    /// Rounding may make the two values equal.
    Distinct { one: f64, two: f64 },

    /// A single repeated real root (zero discriminant).
    Repeated(f64),

    /// A complex-conjugate pair `re ± im·i`, with `im > 0` before rounding.
    Complex { re: f64, im: f64 },
}

impl Roots {
    /// Computes the roots of `equation` with the quadratic formula.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn find<E>(equation: &E, precision: i32) -> Self
    where
        E: QuadraticEquation + ?Sized,
    {
        let minus_b = -f64::from(equation.b());
        let two_a = 2.0 * f64::from(equation.a());
        let discriminant = equation.discriminant();

        match discriminant.cmp(&0) {
            Ordering::Less => {
                let magnitude = (-discriminant as f64).sqrt() / two_a;
                Self::Complex {
                    re: round(minus_b / two_a, precision),
                    im: round(magnitude.abs(), precision),
                }
            }
            Ordering::Equal => Self::Repeated(round(minus_b / two_a, precision)),
            Ordering::Greater => {
                let sqrt_d = (discriminant as f64).sqrt();
                let plus = round((minus_b + sqrt_d) / two_a, precision);
                let minus = round((minus_b - sqrt_d) / two_a, precision);
                Self::Distinct {
                    one: plus.min(minus),
                    two: plus.max(minus),
                }
            }
        }
    }

    /// Returns the display strings for the first and second root.
    ///
    /// Complex pairs put the `+` term first.
    #[must_use]
    pub fn to_strings(&self) -> [String; 2] {
        match *self {
            Self::Distinct { one, two } => [decimal(one), decimal(two)],
            Self::Repeated(x) => [decimal(x), decimal(x)],
            Self::Complex { re, im } => {
                let (re, im) = (decimal(re), decimal(im));
                [format!("{re} + {im}i"), format!("{re} - {im}i")]
            }
        }
    }

    /// Returns `true` if the roots are real.
    #[must_use]
    pub fn is_real(&self) -> bool {
        !matches!(self, Self::Complex { .. })
    }
}
