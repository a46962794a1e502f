//! Solvers for quadratic equations.
//!
//! A [`Solver`] borrows a [`QuadraticEquation`], computes its roots with the
//! quadratic formula, and keeps them as rounded display strings:
//!
//! ```
//! use quadratic_core::BasicQuadraticEquation;
//! use quadratic_solvers::{Selection, Solver};
//!
//! let equation = BasicQuadraticEquation::new(1, -5, 6).unwrap();
//! let mut solver = Solver::new(&equation);
//! solver.solve();
//!
//! assert_eq!(solver.get(Selection::Both).unwrap(), "2 and 3");
//! assert_eq!(solver.get("root1").unwrap(), "2");
//! ```
//!
//! Complex roots are written as `"<re> + <im>i"` and `"<re> - <im>i"`.
//!
//! [`QuadraticEquation`]: quadratic_core::QuadraticEquation

mod config;
mod error;
mod format;
mod roots;
mod selection;
mod solver;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use roots::Roots;
pub use selection::Selection;
pub use solver::Solver;
