//! # Dual Simplex iterations
//!
//! Used after an update made a right-hand side negative while leaving the relative costs optimal.
//! Each pivot removes a negative right-hand side value while keeping all relative costs
//! non-positive.
use log::debug;

use crate::algorithm::simplex::{PivotKind, State};
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::Real;

impl<F: Real> Tableau<F> {
    /// Perform a single dual Simplex iteration.
    ///
    /// Relative costs should be up to date when this method is called, and they are recomputed
    /// after a pivot.
    ///
    /// # Return value
    ///
    /// `MoreIterationDual` if negative right-hand side values remain after the pivot,
    /// `NoFeasibleSolution` if the leaving row has no column to pivot on, and otherwise the state
    /// following from the relative costs.
    pub(in crate::algorithm::simplex) fn dual_step(&mut self) -> State {
        let row = match self.options.pivot_rule.select_dual_pivot_row(self) {
            Some(row) => row,
            None => return self.compute_relative_costs(),
        };
        let column = match self.select_dual_pivot_column(row) {
            Some(column) => column,
            None => {
                debug!("row {} has a negative right-hand side but no negative entry to pivot on", row);
                return State::NoFeasibleSolution;
            },
        };

        self.pivot(row, column, PivotKind::Dual);
        let state = self.compute_relative_costs();
        if self.options.pivot_rule.select_dual_pivot_row(self).is_some() {
            State::MoreIterationDual
        } else {
            state
        }
    }

    /// Determine the column to pivot on, given the row.
    ///
    /// Among the columns with a negative value in the row and a non-positive relative cost, this is
    /// the one with the smallest ratio between the relative cost and that value. That ratio is
    /// non-negative, and pivoting on the smallest keeps all relative costs non-positive. Ties are
    /// broken by taking the lowest index.
    ///
    /// # Arguments
    ///
    /// * `row`: Index of a row with a negative right-hand side.
    ///
    /// # Return value
    ///
    /// Index of the column to pivot on. If not found, no basic solution can make the row's
    /// right-hand side non-negative: the problem is infeasible.
    pub fn select_dual_pivot_column(&self, row: usize) -> Option<usize> {
        debug_assert!(row < self.nr_rows());

        let tolerance = self.options.tolerance;
        let values = &self.rows[row];
        let mut min_values: Option<(usize, F)> = None;
        for (j, (&value, &cost)) in values.iter().zip(&self.relative_costs)
            .take(self.nr_variables())
            .enumerate() {
            if !tolerance.is_negative(value) || tolerance.is_positive(cost) {
                continue;
            }

            let ratio = cost / value;
            match min_values {
                Some((_, min_ratio)) if ratio >= min_ratio => {},
                _ => min_values = Some((j, ratio)),
            }
        }

        min_values.map(|(min_index, _)| min_index)
    }
}
