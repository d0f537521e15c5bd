//! # Malformed input
//!
//! Problems handed to the tableau, and updates applied to it, are checked for consistent
//! dimensions before anything is modified.
use thiserror::Error;

/// The dimensions or indices of an input don't match the problem they are applied to.
///
/// When an operation returns this error, the tableau has not been modified.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum InputError {
    /// A problem needs at least one constraint and one variable.
    #[error("the problem has no constraints or no variables")]
    Empty,
    /// A vector doesn't have the length it should have.
    #[error("{what} has length {actual}, expected {expected}")]
    Length {
        /// Which input is wrong.
        what: &'static str,
        /// The length it should have.
        expected: usize,
        /// The length it has.
        actual: usize,
    },
    /// A vector is shorter than it needs to be.
    #[error("{what} has length {actual}, expected at least {minimum}")]
    TooShort {
        /// Which input is wrong.
        what: &'static str,
        /// The smallest acceptable length.
        minimum: usize,
        /// The length it has.
        actual: usize,
    },
    /// An index points past the end of the problem.
    #[error("{what} {index} is out of range, there are only {bound}")]
    Index {
        /// What the index refers to.
        what: &'static str,
        /// The index given.
        index: usize,
        /// The number of valid indices.
        bound: usize,
    },
    /// A new constraint has a zero coefficient on the column it introduces, so that column can't be
    /// basic for it.
    #[error("the new constraint has a zero coefficient on its own column")]
    ZeroOwnCoefficient,
    /// A cost vector that includes the right-hand side column gives that column a non-zero cost.
    #[error("the right-hand side column can't have a non-zero cost")]
    RightHandSideCost,
}

/// Check the length of an input vector.
pub(crate) fn check_length(what: &'static str, expected: usize, actual: usize) -> Result<(), InputError> {
    if expected == actual {
        Ok(())
    } else {
        Err(InputError::Length { what, expected, actual })
    }
}

/// Check that an index is smaller than a bound.
pub(crate) fn check_index(what: &'static str, index: usize, bound: usize) -> Result<(), InputError> {
    if index < bound {
        Ok(())
    } else {
        Err(InputError::Index { what, index, bound })
    }
}
