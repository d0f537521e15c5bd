//! Maximize `2 x1 + 3 x2` subject to `x1 + 2 x2 <= 8`, `4 x1 <= 16` and `4 x2 <= 12`.
//!
//! Unique optimum `(4, 2)` with value `14`, found after three primal pivots.
use crate::algorithm::OptimizationResult;
use crate::algorithm::simplex::{PivotKind, State};
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::solution::Solution;
use crate::tests::test_options;

pub fn cost() -> Vec<f64> {
    vec![2_f64, 3_f64, 0_f64, 0_f64, 0_f64]
}

pub fn rows() -> Vec<Vec<f64>> {
    rows_with_rhs(&[8_f64, 16_f64, 12_f64])
}

pub fn rows_with_rhs(b: &[f64]) -> Vec<Vec<f64>> {
    vec![
        vec![1_f64, 2_f64, 1_f64, 0_f64, 0_f64, b[0]],
        vec![4_f64, 0_f64, 0_f64, 1_f64, 0_f64, b[1]],
        vec![0_f64, 4_f64, 0_f64, 0_f64, 1_f64, b[2]],
    ]
}

pub fn basis() -> Vec<usize> {
    vec![2, 3, 4]
}

pub fn tableau() -> Tableau<f64> {
    Tableau::with_options(cost(), rows(), basis(), test_options()).unwrap()
}

#[test]
fn solve() {
    let mut tableau = tableau();
    let result = tableau.solve();

    assert_eq!(result, OptimizationResult::FiniteOptimum(Solution::new(
        14_f64,
        vec![4_f64, 2_f64, 0_f64, 0_f64, 4_f64],
    )));
    assert_eq!(tableau.state(), State::OneOptimalSolution);
    assert_eq!(tableau.basis(), &[0, 4, 1]);
    assert_eq!(tableau.nr_pivots(PivotKind::Primal), 3);
    assert_eq!(tableau.nr_pivots(PivotKind::Dual), 0);
}
