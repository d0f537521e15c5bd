//! # Sensitivity analysis
//!
//! Updates of a solved tableau. Each update recomputes only the parts of the tableau it affects,
//! by expressing the changed original data in the current basis (see the `inverse_maintenance`
//! module). Afterwards, the tableau is in canonical form again, but it might not be optimal
//! (primal iterations are needed) or not feasible (dual iterations are needed). The next call to
//! `solve` takes care of that.
//!
//! All input is validated before anything is modified.
use log::debug;

use crate::algorithm::simplex::State;
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::error::{check_index, check_length, InputError};
use crate::data::number_types::Real;

/// A change to the problem a tableau solves.
#[derive(Clone, Debug, PartialEq)]
pub enum Update<F> {
    /// Replace the cost of all variables.
    Cost(Vec<F>),
    /// Replace the right-hand side of all constraints.
    RightHandSide(Vec<F>),
    /// Replace the column of a non-basic variable.
    Column {
        /// Index of the variable.
        index: usize,
        /// New coefficients, at least one per constraint. Values beyond that are ignored.
        column: Vec<F>,
    },
    /// Add a variable.
    ///
    /// See `Update::packed_variable` to build this from a single vector with the cost last.
    Variable {
        /// One coefficient per constraint.
        column: Vec<F>,
        /// Cost of the new variable.
        cost: F,
    },
    /// Add a constraint that introduces one new column, basic for the new row.
    ///
    /// Contains a coefficient for each existing variable, the coefficient of the new column and
    /// the right-hand side.
    Constraint(Vec<F>),
}

impl<F> Update<F> {
    /// Add a variable described by its coefficient in each constraint, followed by its cost.
    ///
    /// Returns `None` for an empty vector.
    pub fn packed_variable(mut packed: Vec<F>) -> Option<Self> {
        let cost = packed.pop()?;
        Some(Update::Variable { column: packed, cost })
    }
}

impl<F: Real> Tableau<F> {
    /// Apply an update.
    ///
    /// # Return value
    ///
    /// The state of the tableau after the update.
    ///
    /// # Errors
    ///
    /// If the dimensions of the update don't match the problem. The tableau is not modified.
    pub fn update(&mut self, update: Update<F>) -> Result<State, InputError> {
        match update {
            Update::Cost(cost) => self.change_cost(cost),
            Update::RightHandSide(rhs) => self.change_rhs(rhs),
            Update::Column { index, column } => self.change_column(index, &column),
            Update::Variable { column, cost } => self.add_variable(column, cost),
            Update::Constraint(row) => self.add_constraint(row),
        }
    }

    /// Replace the cost vector.
    ///
    /// # Arguments
    ///
    /// * `cost`: New cost of each variable, length `n - 1`, or of each column, length `n`. In the
    /// latter case, the last value is the cost of the right-hand side and has to be zero.
    ///
    /// # Return value
    ///
    /// `MoreIterationDual` if a right-hand side is still negative, `MoreIteration` if the current
    /// basis is no longer optimal, an optimality state otherwise.
    pub fn change_cost(&mut self, mut cost: Vec<F>) -> Result<State, InputError> {
        if cost.len() == self.nr_columns() {
            if let Some(&rhs_cost) = cost.last() {
                if !self.options.tolerance.is_zero(rhs_cost) {
                    return Err(InputError::RightHandSideCost);
                }
            }
            cost.pop();
        }
        check_length("cost vector", self.nr_variables(), cost.len())?;

        cost.push(F::zero());
        self.cost = cost;
        self.state = self.state_after_update();

        debug!("changed cost vector, now {:?}", self.state);
        Ok(self.state)
    }

    /// Replace the right-hand side.
    ///
    /// # Arguments
    ///
    /// * `rhs`: New right-hand side of each constraint, length `m`.
    ///
    /// # Return value
    ///
    /// `MoreIterationDual` if the current basis is no longer feasible. Otherwise the state is
    /// unchanged, unless the tableau was waiting for or had given up on dual iterations.
    pub fn change_rhs(&mut self, rhs: Vec<F>) -> Result<State, InputError> {
        check_length("right-hand side", self.nr_rows(), rhs.len())?;

        let rhs_index = self.rhs_index();
        for (row, value) in self.original_rows.iter_mut().zip(rhs) {
            row[rhs_index] = value;
        }
        let column = self.generate_column(&self.original_column(rhs_index));
        let tolerance = self.options.tolerance;
        let infeasible = column.iter().any(|&value| tolerance.is_negative(value));
        for (row, value) in self.rows.iter_mut().zip(column) {
            row[rhs_index] = value;
        }

        let state = self.compute_relative_costs();
        if infeasible {
            self.state = State::MoreIterationDual;
        } else if matches!(self.state, State::MoreIterationDual | State::NoFeasibleSolution) {
            self.state = state;
        }

        debug!("changed right-hand side, now {:?}", self.state);
        self.debug_assert_canonical();
        Ok(self.state)
    }

    /// Replace the column of a variable.
    ///
    /// Refused with `AdviseRebuild` when the variable is basic, or when its column is one of the
    /// columns that represent the basis inverse. The tableau is then not modified.
    ///
    /// # Arguments
    ///
    /// * `index`: Index of the variable.
    /// * `column`: New coefficients, only the first `m` values are used.
    pub fn change_column(&mut self, index: usize, column: &[F]) -> Result<State, InputError> {
        check_index("column", index, self.nr_variables())?;
        if column.len() < self.nr_rows() {
            return Err(InputError::TooShort { what: "column", minimum: self.nr_rows(), actual: column.len() });
        }

        if self.is_in_basis(index) || self.original_basis.contains(&index) {
            debug!("column {} can't be changed incrementally", index);
            self.state = State::AdviseRebuild;
            return Ok(self.state);
        }

        let column = &column[..self.nr_rows()];
        for (row, &value) in self.original_rows.iter_mut().zip(column) {
            row[index] = value;
        }
        let generated = self.generate_column(column);
        for (row, value) in self.rows.iter_mut().zip(generated) {
            row[index] = value;
        }
        self.state = self.state_after_update();

        debug!("changed column {}, now {:?}", index, self.state);
        self.debug_assert_canonical();
        Ok(self.state)
    }

    /// Add a non-basic variable.
    ///
    /// It gets the highest variable index, directly before the right-hand side.
    ///
    /// # Arguments
    ///
    /// * `column`: Coefficient in each constraint, length `m`.
    /// * `cost`: Cost of the variable.
    pub fn add_variable(&mut self, column: Vec<F>, cost: F) -> Result<State, InputError> {
        check_length("column", self.nr_rows(), column.len())?;

        let index = self.rhs_index();
        let generated = self.generate_column(&column);
        for (row, value) in self.original_rows.iter_mut().zip(column) {
            row.insert(index, value);
        }
        for (row, value) in self.rows.iter_mut().zip(generated) {
            row.insert(index, value);
        }
        self.cost.insert(index, cost);
        self.relative_costs.insert(index, F::zero());
        self.state = self.state_after_update();

        debug!("added variable {}, now {:?}", index, self.state);
        self.debug_assert_canonical();
        Ok(self.state)
    }

    /// Add a constraint, together with a new column that is basic for it.
    ///
    /// The new row is brought in canonical form by eliminating the current basis columns from it,
    /// and then dividing it by the coefficient of its own column. A constraint of the form
    /// `a x - s = b` thus results in a row `-a x + s = -b`.
    ///
    /// # Arguments
    ///
    /// * `row`: Length `n + 1`. A coefficient for each of the `n - 1` existing variables, the
    /// coefficient of the new column, and the right-hand side.
    ///
    /// # Return value
    ///
    /// `MoreIterationDual` if the new row, or any other row, has a negative right-hand side,
    /// otherwise the state following from the relative costs.
    pub fn add_constraint(&mut self, row: Vec<F>) -> Result<State, InputError> {
        check_length("constraint row", self.nr_columns() + 1, row.len())?;
        let index = self.rhs_index();
        let own_coefficient = row[index];
        if self.options.tolerance.is_zero(own_coefficient) {
            return Err(InputError::ZeroOwnCoefficient);
        }

        for existing in self.original_rows.iter_mut().chain(self.rows.iter_mut()) {
            existing.insert(index, F::zero());
        }
        let mut new_row = row.clone();
        for (existing, &basic) in self.rows.iter().zip(&self.basis) {
            let multiplier = new_row[basic];
            if multiplier == F::zero() {
                continue;
            }
            for (value, &existing_value) in new_row.iter_mut().zip(existing) {
                *value = *value - multiplier * existing_value;
            }
        }
        for value in &mut new_row {
            *value = *value / own_coefficient;
        }

        self.original_rows.push(row);
        self.rows.push(new_row);
        self.original_basis.push(index);
        self.basis.push(index);
        self.cost.insert(index, F::zero());
        self.relative_costs.insert(index, F::zero());

        self.state = self.state_after_update();

        debug!("added constraint {} with column {}, now {:?}", self.nr_rows() - 1, index, self.state);
        self.debug_assert_canonical();
        Ok(self.state)
    }

    /// Recompute the relative costs after an update.
    ///
    /// Dual iterations stay pending as long as a right-hand side is negative.
    fn state_after_update(&mut self) -> State {
        let state = self.compute_relative_costs();
        let tolerance = self.options.tolerance;
        if (0..self.nr_rows()).any(|row| tolerance.is_negative(self.rhs(row))) {
            State::MoreIterationDual
        } else {
            state
        }
    }
}
