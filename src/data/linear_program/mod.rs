//! # Representing linear programs
//!
//! Linear programs are handed to the tableau in standard form: a cost vector, constraint rows with
//! their right-hand side appended, and a starting basis. This module contains that representation,
//! the building blocks used to derive it, and the representation of solutions.
pub mod elements;
pub mod error;
pub mod solution;
pub mod standard_form;
