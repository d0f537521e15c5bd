//! # A linear program solver with sensitivity analysis
//!
//! Linear programs are solved using the tableau form of the Simplex Method. Once solved, the
//! tableau can be updated in place after a change to the objective, the right-hand side, a
//! non-basic column, or after adding a variable or a constraint. The tableau is then re-optimized
//! with primal or dual Simplex iterations, without starting over from the initial basis.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
