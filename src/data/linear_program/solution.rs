//! # Representation of optimal solutions
//!
//! The tableau reports a value for every column of the standard form problem. A problem that was
//! read from a file additionally knows which of those columns the user wrote, and what they were
//! called.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

/// Values of all columns of a standard form problem in an optimal basic solution.
///
/// Non-basic columns have value zero.
#[derive(Clone, PartialEq, Debug)]
pub struct Solution<F> {
    /// Value of the (maximized) objective function.
    objective_value: F,
    /// One value for each column, excluding the right-hand side.
    values: Vec<F>,
}

impl<F: Copy> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// # Arguments
    ///
    /// * `objective_value`: Value of the objective function that is maximized.
    /// * `values`: Value of each column.
    pub fn new(objective_value: F, values: Vec<F>) -> Self {
        Self { objective_value, values }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Value of all columns.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Value of a single column.
    pub fn value(&self, column: usize) -> F {
        self.values[column]
    }
}

/// A solution in the terms of the problem as the user described it.
///
/// Contains only the structural variables, and the objective value in the original direction of
/// optimization.
#[derive(Clone, PartialEq, Debug)]
pub struct NamedSolution<F> {
    /// Value of the objective function, including the original sign.
    objective_value: F,
    /// (variable name, solution value) tuples for all structural variables.
    solution_values: Vec<(String, F)>,
}

impl<F: Copy> NamedSolution<F> {
    /// Create a new `NamedSolution` instance.
    pub fn new(objective_value: F, solution_values: Vec<(String, F)>) -> Self {
        Self { objective_value, solution_values }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Named values of the structural variables, in column order.
    pub fn solution_values(&self) -> &[(String, F)] {
        &self.solution_values
    }

    /// Look up the value of a variable by name.
    pub fn get(&self, name: &str) -> Option<F> {
        self.solution_values.iter()
            .find(|(candidate, _)| candidate == name)
            .map(|&(_, value)| value)
    }
}

impl<F: Display> Display for NamedSolution<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "optimal solution: ({})", self.solution_values.iter()
            .map(|(name, value)| format!("{} = {}", name, value))
            .join(", "))?;
        write!(f, "best result: {}", self.objective_value)
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::solution::{NamedSolution, Solution};

    #[test]
    fn access() {
        let solution = Solution::new(2_f64, vec![4_f64, 1_f64, 9_f64, 0_f64]);
        assert_eq!(solution.objective_value(), 2_f64);
        assert_eq!(solution.value(2), 9_f64);
        assert_eq!(solution.values().len(), 4);
    }

    #[test]
    fn display() {
        let solution = NamedSolution::new(14_f64, vec![
            ("x1".to_string(), 4_f64),
            ("x2".to_string(), 2_f64),
        ]);
        assert_eq!(solution.get("x2"), Some(2_f64));
        assert_eq!(solution.get("x3"), None);
        assert_eq!(
            solution.to_string(),
            "optimal solution: (x1 = 4, x2 = 2)\nbest result: 14",
        );
    }
}
