
use quadratic_core::QuadraticEquation;
use tracing::debug;

use crate::{Config, Error, Roots, Selection};

/// Finds and holds the roots of a borrowed quadratic equation.
///
/// The solver starts unsolved. [`Solver::solve`] computes the roots at the
/// current precision and stores them; calling it again recomputes them.
#[derive(Debug, Clone)]
pub struct Solver<'a, E: ?Sized> {
    equation: &'a E,
    config: Config,
    solution: Option<Solution>,
}

/// Roots from the most recent solve, with their display strings.
#[derive(Debug, Clone)]
struct Solution {
    roots: Roots,
    root_one: String,
    root_two: String,
}

impl<'a, E> Solver<'a, E>
where
    E: QuadraticEquation + ?Sized,
{
    /// Creates an unsolved solver with the default precision of 2.
    pub fn new(equation: &'a E) -> Self {
        Self::with_config(equation, Config::default())
    }

    /// Creates an unsolved solver with the given config.
    pub fn with_config(equation: &'a E, config: Config) -> Self {
        Self {
            equation,
            config,
            solution: None,
        }
    }

    /// Returns the equation being solved.
    #[must_use]
    pub fn equation(&self) -> &'a E {
        self.equation
    }

    /// Returns the current config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the number of decimal places roots are rounded to.
    #[must_use]
    pub fn precision(&self) -> i32 {
        self.config.precision()
    }

    /// Sets the number of decimal places used by later calls to [`Solver::solve`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecision`] if `precision` is negative.
    /// The current precision is kept in that case.
    pub fn set_precision(&mut self, precision: i32) -> Result<(), Error> {
        self.config = Config::new(precision)?;
        debug!(precision, "solver precision set");
        Ok(())
    }

    /// Solves the equation and stores the rounded roots.
    pub fn solve(&mut self) {
        let precision = self.precision();
        let roots = Roots::find(self.equation, precision);
        let [root_one, root_two] = roots.to_strings();

        debug!(
            a = self.equation.a(),
            b = self.equation.b(),
            c = self.equation.c(),
            discriminant = %self.equation.discriminant(),
            precision,
            real = roots.is_real(),
            %root_one,
            %root_two,
            "solved quadratic equation"
        );

        self.solution = Some(Solution {
            roots,
            root_one,
            root_two,
        });
    }

    /// Returns `true` once [`Solver::solve`] has been called.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Returns one or both roots as display strings.
    ///
    /// Accepts a [`Selection`] or one of the keys `"root1"` and `"root2"`;
    /// anything else returns `"<root1> and <root2>"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSolved`] if called before [`Solver::solve`].
    pub fn get(&self, which: impl Into<Selection>) -> Result<String, Error> {
        let solution = self.solution.as_ref().ok_or(Error::NotSolved)?;

        Ok(match which.into() {
            Selection::Root1 => solution.root_one.clone(),
            Selection::Root2 => solution.root_two.clone(),
            Selection::Both => format!("{} and {}", solution.root_one, solution.root_two),
        })
    }

    /// Returns the rounded numeric roots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSolved`] if called before [`Solver::solve`].
    pub fn roots(&self) -> Result<&Roots, Error> {
        self.solution
            .as_ref()
            .map(|solution| &solution.roots)
            .ok_or(Error::NotSolved)
    }
}
