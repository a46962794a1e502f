//! Shared fixtures for the workspace integration tests.

use quadratic_core::BasicQuadraticEquation;
use quadratic_solvers::{Config, Selection, Solver};
use serde::Deserialize;

/// A worked problem: an equation, a solver config and the expected roots.
#[derive(Debug, Deserialize)]
pub struct Problem {
    pub equation: BasicQuadraticEquation,
    #[serde(default)]
    pub solver: Config,
    pub root1: String,
    pub root2: String,
}

/// Solves `[a, b, c]` at `precision` and returns `(root1, root2, both)`.
///
/// # Panics
///
/// Panics if the coefficients or precision are invalid.
#[must_use]
pub fn solve(coefficients: [i32; 3], precision: i32) -> (String, String, String) {
    let equation = BasicQuadraticEquation::try_from(coefficients.as_slice())
        .unwrap_or_else(|err| panic!("invalid coefficients {coefficients:?}: {err}"));
    let mut solver = Solver::new(&equation);
    solver
        .set_precision(precision)
        .unwrap_or_else(|err| panic!("invalid precision {precision}: {err}"));
    solver.solve();

    let get = |which: Selection| solver.get(which).expect("solved");
    (get(Selection::Root1), get(Selection::Root2), get(Selection::Both))
}
