//! # Number types
//!
//! The tableau computes with floating point numbers. Because of (accumulating) rounding errors,
//! every sign test the algorithms perform is made with respect to a `Tolerance`, which is chosen
//! explicitly by the caller.
use std::fmt::{Debug, Display};

use num_traits::Float;

pub mod tolerance;

pub use tolerance::Tolerance;

/// Floating point numbers the tableau can compute with.
///
/// Implemented for `f32` and `f64`.
pub trait Real: Float + Debug + Display {}
impl<T: Float + Debug + Display> Real for T {}
