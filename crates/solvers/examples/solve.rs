//! Solve a quadratic equation from the command line.
//!
//! # Usage
//!
//! ```text
//! cargo run --example solve
//! cargo run --example solve -- 3 4 5
//! cargo run --example solve -- 8 5 -2 4
//! RUST_LOG=debug cargo run --example solve -- 1 -5 6
//! ```
//!
//! Arguments are the coefficients `a b c` of `ax² + bx + c = 0`, optionally
//! followed by the precision. With no arguments it solves `x² + 5x + 6 = 0`.

use std::error::Error;

use quadratic_core::BasicQuadraticEquation;
use quadratic_solvers::{Selection, Solver};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<i32>())
        .collect::<Result<Vec<_>, _>>()?;

    let (coefficients, precision) = match args.as_slice() {
        [] => (vec![1, 5, 6], None),
        [a, b, c, p] => (vec![*a, *b, *c], Some(*p)),
        other => (other.to_vec(), None),
    };

    let equation = BasicQuadraticEquation::try_from(coefficients)?;
    let mut solver = Solver::new(&equation);
    if let Some(precision) = precision {
        solver.set_precision(precision)?;
    }
    solver.solve();

    println!("{equation}");
    println!("x1 = {}", solver.get(Selection::Root1)?);
    println!("x2 = {}", solver.get(Selection::Root2)?);
    println!("{}", solver.get(Selection::Both)?);

    Ok(())
}
