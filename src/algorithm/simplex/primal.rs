//! # Primal Simplex iterations
//!
//! Moves from basic feasible solution to basic feasible solution, increasing the objective value
//! with each non-degenerate pivot.
use log::debug;

use crate::algorithm::simplex::{PivotKind, State};
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::Real;

impl<F: Real> Tableau<F> {
    /// Perform a single primal Simplex iteration.
    ///
    /// The relative costs are recomputed before deciding whether to pivot; after a pivot they are
    /// outdated until the next iteration.
    ///
    /// # Return value
    ///
    /// `MoreIteration` after a pivot, `NoOptimalSolution` if the entering column shows the problem
    /// to be unbounded, or the optimality state when no column can enter.
    pub(in crate::algorithm::simplex) fn primal_step(&mut self) -> State {
        let state = self.compute_relative_costs();
        if state != State::MoreIteration {
            return state;
        }

        let column = match self.options.pivot_rule.select_primal_pivot_column(self) {
            Some(column) => column,
            None => return state,
        };
        match self.select_primal_pivot_row(column) {
            Some(row) => {
                self.pivot(row, column, PivotKind::Primal);
                State::MoreIteration
            },
            None => {
                debug!("no positive value in column {}, the objective is unbounded", column);
                State::NoOptimalSolution
            },
        }
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the positive but
    /// minimal ratio between the current constraint vector and the column. When there are multiple
    /// choices for the pivot row, the lowest index is taken.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the column that will enter the basis.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_variables());

        let tolerance = self.options.tolerance;
        let mut min_values: Option<(usize, F)> = None;
        for (i, row) in self.rows.iter().enumerate() {
            let xij = row[column];
            if !tolerance.is_positive(xij) {
                continue;
            }

            let ratio = row[self.rhs_index()] / xij;
            match min_values {
                Some((_, min_ratio)) if ratio >= min_ratio => {},
                _ => min_values = Some((i, ratio)),
            }
        }

        min_values.map(|(min_index, _)| min_index)
    }
}
