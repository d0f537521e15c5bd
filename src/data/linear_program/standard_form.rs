//! # Linear programs in standard form
//!
//! A problem in standard form maximizes `c^T x` subject to `A x = b` and `x >= 0`, where the
//! columns of `A` contain an identity matrix: a basis to start the Simplex method from. Slack,
//! surplus and artificial columns have already been added to get there.
use num_traits::Float;

use crate::data::linear_program::elements::{ColumnKind, Objective};
use crate::data::linear_program::solution::{NamedSolution, Solution};
use crate::data::number_types::Tolerance;

/// The input of the tableau, together with what is needed to report a solution to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm<F> {
    /// Cost of each column, excluding the right-hand side. Length `n - 1`.
    pub(crate) cost: Vec<F>,
    /// Constraint rows, each of length `n`: the coefficients followed by the right-hand side.
    pub(crate) constraints: Vec<Vec<F>>,
    /// For each row, the index of the column that is basic for it.
    pub(crate) basis: Vec<usize>,

    /// The direction of the problem the user described.
    pub(crate) objective: Objective,
    /// Name of each column.
    pub(crate) names: Vec<String>,
    /// Role of each column.
    pub(crate) kinds: Vec<ColumnKind>,
}

impl<F: Float> StandardForm<F> {
    /// Create a problem that is already in standard form.
    ///
    /// All columns are considered structural and named `x1`, `x2`, etc.
    ///
    /// # Arguments
    ///
    /// * `cost`: Cost of each column, length `n - 1`.
    /// * `constraints`: `m` rows of length `n`, right-hand side last.
    /// * `basis`: Length `m`, the columns at these indices should form an identity matrix.
    pub fn new(cost: Vec<F>, constraints: Vec<Vec<F>>, basis: Vec<usize>) -> Self {
        let names = (1..=cost.len()).map(|j| format!("x{}", j)).collect();
        let kinds = vec![ColumnKind::Structural; cost.len()];

        Self { cost, constraints, basis, objective: Objective::Maximize, names, kinds }
    }

    /// Cost of each column.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Constraint rows, right-hand side last.
    pub fn constraints(&self) -> &[Vec<F>] {
        &self.constraints
    }

    /// Initial basis.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Direction of the original problem.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Name of each column.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Role of each column.
    pub fn kinds(&self) -> &[ColumnKind] {
        &self.kinds
    }

    /// Express a solution of the tableau in terms of the original problem.
    ///
    /// Only applies to solutions of a tableau built from this form without variables or
    /// constraints added afterwards.
    ///
    /// # Return value
    ///
    /// `None` if the solution doesn't have a value for each column of this form. Also `None` if an
    /// artificial column has a positive value: the Big-M penalty was not large enough to drive it
    /// out, meaning the original problem has no feasible solution.
    pub fn reconstruct(
        &self,
        solution: &Solution<F>,
        tolerance: Tolerance<F>,
    ) -> Option<NamedSolution<F>> {
        if solution.values().len() != self.kinds.len() {
            return None;
        }

        let artificial_in_solution = self.kinds.iter().zip(solution.values())
            .any(|(&kind, &value)| kind == ColumnKind::Artificial && tolerance.is_positive(value));
        if artificial_in_solution {
            return None;
        }

        let objective_value = match self.objective {
            Objective::Maximize => solution.objective_value(),
            Objective::Minimize => -solution.objective_value(),
        };
        let values = self.kinds.iter()
            .zip(&self.names)
            .zip(solution.values())
            .filter(|&((&kind, _), _)| kind == ColumnKind::Structural)
            .map(|((_, name), &value)| (name.clone(), value))
            .collect();

        Some(NamedSolution::new(objective_value, values))
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{ColumnKind, Objective};
    use crate::data::linear_program::solution::Solution;
    use crate::data::linear_program::standard_form::StandardForm;
    use crate::data::number_types::Tolerance;

    fn minimization() -> StandardForm<f64> {
        StandardForm {
            cost: vec![-1_f64, -1_f64, 0_f64, -600_f64, 0_f64, -600_f64],
            constraints: vec![
                vec![1_f64, 2_f64, -1_f64, 1_f64, 0_f64, 0_f64, 4_f64],
                vec![3_f64, 1_f64, 0_f64, 0_f64, -1_f64, 1_f64, 6_f64],
            ],
            basis: vec![3, 5],
            objective: Objective::Minimize,
            names: ["x1", "x2", "e1", "a1", "e2", "a2"].iter().map(|name| name.to_string()).collect(),
            kinds: vec![
                ColumnKind::Structural, ColumnKind::Structural,
                ColumnKind::Surplus, ColumnKind::Artificial,
                ColumnKind::Surplus, ColumnKind::Artificial,
            ],
        }
    }

    #[test]
    fn new() {
        let form = StandardForm::new(vec![1_f64, 0_f64], vec![vec![1_f64, 1_f64, 5_f64]], vec![1]);
        assert_eq!(form.names(), &["x1".to_string(), "x2".to_string()]);
        assert_eq!(form.objective(), Objective::Maximize);
        assert!(form.kinds().iter().all(|&kind| kind == ColumnKind::Structural));
    }

    #[test]
    fn reconstruct() {
        let form = minimization();
        let solution = Solution::new(-2.8_f64, vec![1.6, 1.2, 0_f64, 0_f64, 0_f64, 0_f64]);
        let named = form.reconstruct(&solution, Tolerance::default()).unwrap();
        assert_eq!(named.objective_value(), 2.8_f64);
        assert_eq!(named.solution_values().len(), 2);
        assert_eq!(named.get("x1"), Some(1.6_f64));
    }

    #[test]
    fn reconstruct_artificial() {
        let form = minimization();
        let solution = Solution::new(-601_f64, vec![1_f64, 0_f64, 0_f64, 1_f64, 0_f64, 0_f64]);
        assert_eq!(form.reconstruct(&solution, Tolerance::default()), None);
    }

    #[test]
    fn reconstruct_other_dimensions() {
        let form = minimization();
        // A variable was added to the tableau
        let solution = Solution::new(-2.8_f64, vec![1.6, 1.2, 0_f64, 0_f64, 0_f64, 0_f64, 0_f64]);
        assert_eq!(form.reconstruct(&solution, Tolerance::default()), None);
        let solution = Solution::new(-2.8_f64, vec![1.6, 1.2]);
        assert_eq!(form.reconstruct(&solution, Tolerance::default()), None);
    }
}
