//! # Problems shared by the tests of several modules.
//!
//! Convention for function names:
//!
//! * `const PROBLEM_TEXT`
//! * `fn standard_form()`
//! * `fn cost()`, `fn rows()`, `fn basis()`: the input of a tableau
//! * `fn tableau()`
use approx::assert_abs_diff_eq;

use crate::algorithm::OptimizationResult;
use crate::algorithm::simplex::Options;

pub mod problem_2;

/// Options used by all tests, with a limit so that a cycling regression fails instead of hangs.
pub fn test_options() -> Options<f64> {
    Options {
        iteration_limit: Some(100),
        ..Options::default()
    }
}

/// Check that two results are equally optimal with the same solution values.
pub fn assert_same_optimum(left: &OptimizationResult<f64>, right: &OptimizationResult<f64>) {
    let (left, right) = match (left.solution(), right.solution()) {
        (Some(left), Some(right)) => (left, right),
        _ => panic!("not both optimal: {:?} and {:?}", left, right),
    };

    assert_abs_diff_eq!(left.objective_value(), right.objective_value(), epsilon = 1e-9);
    assert_eq!(left.values().len(), right.values().len());
    for (&left, &right) in left.values().iter().zip(right.values()) {
        assert_abs_diff_eq!(left, right, epsilon = 1e-9);
    }
}
