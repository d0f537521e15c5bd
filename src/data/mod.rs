//! # Storing of linear programs in memory
//!
//! This module provides the data structures used to hand linear programs to the algorithms and to
//! report their results. Algorithms may introduce their specific data structures in
//! `algorithm::my_algorithm`.

pub mod linear_program;
pub mod number_types;
