//! # Strategies for the Simplex algorithm
//!
//! Decisions that the primal and dual iterations leave open, such as which of the improving
//! columns enters the basis.
pub mod pivot_rule;
