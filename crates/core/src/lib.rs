//! Core types for quadratic equations.
//!
//! This crate defines the value objects that solvers build on:
//!
//! - [`Equation`] and [`QuadraticEquation`] — read access to coefficients
//! - [`BasicQuadraticEquation`] — an immutable `Ax² + Bx + C = 0` with `A ≠ 0`
//! - [`constraint`] — numeric invariants enforced at construction time

pub mod constraint;
mod equation;

pub use equation::{BasicQuadraticEquation, Equation, EquationError, QuadraticEquation};
