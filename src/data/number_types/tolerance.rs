//! Comparing floating point numbers with zero.
use num_traits::{Float, NumCast};

/// How values are compared with zero.
///
/// The sign of a value decides which column enters the basis, which row leaves it and whether the
/// tableau is optimal or feasible. All of those decisions go through this type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Tolerance<F> {
    /// Compare literally: only `0` is zero.
    Exact,
    /// Values with an absolute value of at most the contained (positive) number are zero.
    Epsilon(F),
}

impl<F: Float> Tolerance<F> {
    /// Whether a value should be treated as zero.
    pub fn is_zero(&self, value: F) -> bool {
        match self {
            Tolerance::Exact => value == F::zero(),
            Tolerance::Epsilon(epsilon) => value.abs() <= *epsilon,
        }
    }

    /// Whether a value is positive and not treated as zero.
    pub fn is_positive(&self, value: F) -> bool {
        match self {
            Tolerance::Exact => value > F::zero(),
            Tolerance::Epsilon(epsilon) => value > *epsilon,
        }
    }

    /// Whether a value is negative and not treated as zero.
    pub fn is_negative(&self, value: F) -> bool {
        match self {
            Tolerance::Exact => value < F::zero(),
            Tolerance::Epsilon(epsilon) => value < -*epsilon,
        }
    }
}

impl<F: Float> Default for Tolerance<F> {
    /// An epsilon of `1e-9`, or the machine epsilon if that can't be represented.
    fn default() -> Self {
        let epsilon = <F as NumCast>::from(1e-9).unwrap_or_else(F::epsilon);
        Tolerance::Epsilon(epsilon)
    }
}
