//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The tableau is stored densely, including the right-hand side as its last column. That column
//! has zero cost and is transformed by every pivot like any other column.
//!
//! Next to the current tableau, the constraint matrix of the problem as it was given is kept. It is
//! used to recompute parts of the tableau after the problem is changed, see the
//! `inverse_maintenance` module.
use std::cmp::max;
use std::fmt::{Display, Formatter, Result as FormatResult};

use enum_map::EnumMap;
use log::{debug, trace};

use crate::algorithm::simplex::{Options, PivotKind, State};
use crate::data::linear_program::error::{check_index, check_length, InputError};
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::Real;

pub mod inverse_maintenance;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns both the current tableau and the problem it was derived from. Updates are applied in
/// place, so different variants of a problem should be analyzed with independent copies.
#[derive(Clone, PartialEq, Debug)]
pub struct Tableau<F> {
    /// Cost of every column, `0` for the right-hand side. Length `n`.
    pub(in crate::algorithm::simplex) cost: Vec<F>,
    /// The tableau, `m` rows of length `n`. The last column is the right-hand side.
    pub(in crate::algorithm::simplex) rows: Vec<Vec<F>>,
    /// For each row, the column that is basic for it.
    pub(in crate::algorithm::simplex) basis: Vec<usize>,
    /// Relative cost of every column. The last value is minus the objective value.
    ///
    /// Only valid after a call to `compute_relative_costs`.
    pub(in crate::algorithm::simplex) relative_costs: Vec<F>,

    /// The constraint rows of the problem as it was given, with all updates applied.
    pub(in crate::algorithm::simplex) original_rows: Vec<Vec<F>>,
    /// Basis of the problem as it was given, extended by the column of each added constraint.
    pub(in crate::algorithm::simplex) original_basis: Vec<usize>,

    /// What needs to happen next.
    pub(in crate::algorithm::simplex) state: State,
    pub(in crate::algorithm::simplex) options: Options<F>,
    /// Number of pivots performed since construction.
    pub(in crate::algorithm::simplex) pivots: EnumMap<PivotKind, u64>,
}

impl<F: Real> Tableau<F> {
    /// Create a tableau with the default options.
    ///
    /// See `with_options`.
    pub fn new(cost: Vec<F>, rows: Vec<Vec<F>>, basis: Vec<usize>) -> Result<Self, InputError> {
        Self::with_options(cost, rows, basis, Options::default())
    }

    /// Create a tableau.
    ///
    /// No pivots are performed. The columns at the basis indices are trusted to form an identity
    /// matrix.
    ///
    /// # Arguments
    ///
    /// * `cost`: Cost of each column, excluding the right-hand side. Length `n - 1`.
    /// * `rows`: Constraint rows, `m` of them, each with the right-hand side appended. Length `n`.
    /// * `basis`: Index of the column that is basic for each row. Length `m`.
    /// * `options`: How to make decisions.
    ///
    /// # Errors
    ///
    /// If the dimensions of the inputs don't match, or a basis index is out of range.
    pub fn with_options(
        mut cost: Vec<F>,
        rows: Vec<Vec<F>>,
        basis: Vec<usize>,
        options: Options<F>,
    ) -> Result<Self, InputError> {
        if rows.is_empty() || cost.is_empty() {
            return Err(InputError::Empty);
        }
        let nr_columns = cost.len() + 1;
        for row in &rows {
            check_length("constraint row", nr_columns, row.len())?;
        }
        check_length("basis", rows.len(), basis.len())?;
        for &column in &basis {
            check_index("basis column", column, cost.len())?;
        }

        cost.push(F::zero());
        let tableau = Self {
            cost,
            original_rows: rows.clone(),
            rows,
            original_basis: basis.clone(),
            basis,
            relative_costs: vec![F::zero(); nr_columns],
            state: State::MoreIteration,
            options,
            pivots: EnumMap::default(),
        };
        tableau.debug_assert_canonical();
        debug!("created tableau with {} rows and {} columns", tableau.nr_rows(), tableau.nr_columns());

        Ok(tableau)
    }

    /// Create a tableau from a problem in standard form.
    pub fn from_standard_form(form: &StandardForm<F>, options: Options<F>) -> Result<Self, InputError> {
        Self::with_options(
            form.cost().to_vec(),
            form.constraints().to_vec(),
            form.basis().to_vec(),
            options,
        )
    }

    /// Recompute the relative cost of every column, and determine whether the basis is optimal.
    ///
    /// # Return value
    ///
    /// `MoreIteration` if any relative cost (excluding that of the right-hand side) is positive.
    /// Otherwise, `InfiniteOptimalSolution` if more relative costs are zero than there are rows,
    /// and `OneOptimalSolution` if not. The former is a heuristic.
    pub(in crate::algorithm::simplex) fn compute_relative_costs(&mut self) -> State {
        for j in 0..self.nr_columns() {
            let basic_cost = self.rows.iter()
                .zip(&self.basis)
                .fold(F::zero(), |total, (row, &basic)| total + self.cost[basic] * row[j]);
            self.relative_costs[j] = self.cost[j] - basic_cost;
        }

        let tolerance = self.options.tolerance;
        let costs = &self.relative_costs[..self.nr_variables()];
        if costs.iter().any(|&cost| tolerance.is_positive(cost)) {
            State::MoreIteration
        } else {
            let nr_zero = costs.iter().filter(|&&cost| tolerance.is_zero(cost)).count();
            if nr_zero > self.nr_rows() {
                State::InfiniteOptimalSolution
            } else {
                State::OneOptimalSolution
            }
        }
    }

    /// Bring a column into the basis.
    ///
    /// Divides the pivot row by the pivot element and eliminates the column from all other rows.
    ///
    /// # Arguments
    ///
    /// * `row`: Row of the basic variable that leaves the basis.
    /// * `column`: Column that enters the basis, the pivot element should not be zero.
    /// * `kind`: Whether this pivot is made by the primal or by the dual method.
    pub(in crate::algorithm::simplex) fn pivot(&mut self, row: usize, column: usize, kind: PivotKind) {
        debug_assert!(row < self.nr_rows());
        debug_assert!(column < self.nr_variables());

        let mut pivot_row = std::mem::take(&mut self.rows[row]);
        let pivot = pivot_row[column];
        debug_assert!(pivot != F::zero());
        for value in &mut pivot_row {
            *value = *value / pivot;
        }

        for other_row in &mut self.rows {
            // The pivot row is temporarily empty
            if other_row.is_empty() {
                continue;
            }
            let multiplier = other_row[column];
            if multiplier == F::zero() {
                continue;
            }
            for (value, &pivot_value) in other_row.iter_mut().zip(&pivot_row) {
                *value = *value - multiplier * pivot_value;
            }
        }
        self.rows[row] = pivot_row;

        let leaving = self.basis[row];
        self.basis[row] = column;
        self.pivots[kind] += 1;

        debug!("{:?} pivot on ({}, {}): column {} leaves, column {} enters", kind, row, column, leaving, column);
        trace!("\n{}", self);
        self.debug_assert_canonical();
    }

    /// The current basic solution.
    ///
    /// Uses the relative costs as they were last computed for the objective value.
    pub fn solution(&self) -> Solution<F> {
        let mut values = vec![F::zero(); self.nr_variables()];
        for (row, &column) in self.rows.iter().zip(&self.basis) {
            values[column] = row[self.rhs_index()];
        }

        Solution::new(self.objective_value(), values)
    }

    /// Value of the objective function, as of the last relative cost computation.
    pub fn objective_value(&self) -> F {
        -self.relative_costs[self.rhs_index()]
    }

    /// What the next call to `solve` will do, or what the last call concluded.
    pub fn state(&self) -> State {
        self.state
    }

    /// Options this tableau was created with.
    pub fn options(&self) -> &Options<F> {
        &self.options
    }

    /// Number of pivots of a kind performed since construction.
    pub fn nr_pivots(&self, kind: PivotKind) -> u64 {
        self.pivots[kind]
    }

    /// Number of rows `m`.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns `n`, including the right-hand side.
    pub fn nr_columns(&self) -> usize {
        self.cost.len()
    }

    /// Number of variables `n - 1`, all columns except the right-hand side.
    pub fn nr_variables(&self) -> usize {
        self.nr_columns() - 1
    }

    /// Index of the right-hand side column.
    pub fn rhs_index(&self) -> usize {
        self.nr_columns() - 1
    }

    /// The current tableau rows, right-hand side last.
    pub fn rows(&self) -> &[Vec<F>] {
        &self.rows
    }

    /// Value of the right-hand side in a row.
    pub fn rhs(&self, row: usize) -> F {
        self.rows[row][self.rhs_index()]
    }

    /// Column that is basic for each row.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        self.basis.contains(&column)
    }

    /// Cost of every column, `0` for the right-hand side.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Relative costs as of their last computation, the last one being minus the objective value.
    pub fn relative_costs(&self) -> &[F] {
        &self.relative_costs
    }

    /// Check that the basis columns form an identity matrix.
    ///
    /// Only used for debug purposes.
    pub(in crate::algorithm::simplex) fn debug_assert_canonical(&self) {
        if cfg!(debug_assertions) {
            for (i, &j) in self.basis.iter().enumerate() {
                for (k, row) in self.rows.iter().enumerate() {
                    let expected = if k == i { F::one() } else { F::zero() };
                    debug_assert!(
                        self.options.tolerance.is_zero(row[j] - expected),
                        "Column {} is not equal to e_{}: row {} has {}", j, i, k, row[j],
                    );
                }
            }
        }
    }
}

impl<F: Real> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Tableau ===")?;
        let objective = self.objective_value().to_string();
        let cost = self.relative_costs[..self.nr_variables()].iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        let b = (0..self.nr_rows())
            .map(|i| self.rhs(i).to_string())
            .collect::<Vec<_>>();
        let columns = (0..self.nr_variables()).map(|j| {
            self.rows.iter().map(|row| row[j].to_string()).collect::<Vec<_>>()
        }).collect::<Vec<_>>();

        let row_counter_width = max("cost".len(), (self.nr_rows() - 1).to_string().len());
        let column_width = columns.iter().enumerate().map(|(j, column)| {
            column.iter().map(String::len)
                .chain([j.to_string().len(), cost[j].len()])
                .max().unwrap_or(0)
        }).collect::<Vec<_>>();
        let b_inner_width = b.iter().map(String::len)
            .chain(["b".len(), objective.len()])
            .max().unwrap_or(0);

        // Column counters
        write!(f, "{0:>width$} |", "", width = row_counter_width)?;
        write!(f, " {0:^width$} |", "b", width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", j, width = width)?;
        }
        writeln!(f)?;

        let total_width = (row_counter_width + 1) + 1 + (1 + b_inner_width + 1) + 1 +
            column_width.iter().map(|l| 1 + l).sum::<usize>();
        // Separator
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Cost row
        write!(f, "{0:>width$} |", "cost", width = row_counter_width)?;
        write!(f, " {0:^width$} |", objective, width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", cost[j], width = width)?;
        }
        writeln!(f)?;

        // Separator
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Row counter and row data
        for i in 0..self.nr_rows() {
            write!(f, "{0:>width$} |", i, width = row_counter_width)?;
            write!(f, " {0:^width$} |", b[i], width = b_inner_width)?;
            for (j, width) in column_width.iter().enumerate() {
                write!(f, " {0:^width$}", columns[j][i], width = width)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Basis Columns ===")?;
        writeln!(f, "{:?}", self.basis)
    }
}
