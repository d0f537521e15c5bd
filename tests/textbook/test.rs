use approx::assert_abs_diff_eq;

use relp_sensitivity::algorithm::OptimizationResult;
use relp_sensitivity::algorithm::simplex::State;
use relp_sensitivity::algorithm::simplex::sensitivity::Update;
use relp_sensitivity::data::linear_program::elements::Objective;
use relp_sensitivity::data::linear_program::solution::NamedSolution;
use relp_sensitivity::io::error::ImportError;
use relp_sensitivity::io::import;

use super::{get_test_file_path, load};

fn assert_named(solution: &NamedSolution<f64>, objective_value: f64, values: &[(&str, f64)]) {
    assert_abs_diff_eq!(solution.objective_value(), objective_value, epsilon = 1e-9);
    assert_eq!(solution.solution_values().len(), values.len());
    for &(name, value) in values {
        assert_abs_diff_eq!(solution.get(name).unwrap(), value, epsilon = 1e-9);
    }
}

#[test]
fn big_m() {
    let (form, mut tableau) = load("big_m");
    let result = tableau.solve();

    assert!(matches!(result, OptimizationResult::FiniteOptimum(_)));
    let solution = form.reconstruct(result.solution().unwrap(), tableau.options().tolerance).unwrap();
    assert_named(&solution, 2_f64, &[("x1", 4_f64), ("x2", 1_f64), ("x3", 9_f64)]);
}

#[test]
fn production() {
    let (form, mut tableau) = load("production");
    let result = tableau.solve();

    let solution = form.reconstruct(result.solution().unwrap(), tableau.options().tolerance).unwrap();
    assert_named(&solution, 14_f64, &[("x1", 4_f64), ("x2", 2_f64)]);
    assert_eq!(solution.to_string(), "optimal solution: (x1 = 4, x2 = 2)\nbest result: 14");
}

#[test]
fn diet() {
    let (form, mut tableau) = load("diet");
    assert_eq!(form.objective(), Objective::Minimize);
    let result = tableau.solve();

    let solution = form.reconstruct(result.solution().unwrap(), tableau.options().tolerance).unwrap();
    assert_named(&solution, 2.8, &[("x1", 1.6), ("x2", 1.2)]);
}

#[test]
fn transport() {
    let (form, mut tableau) = load("transport");
    let result = tableau.solve();

    assert_eq!(tableau.state(), State::OneOptimalSolution);
    let solution = form.reconstruct(result.solution().unwrap(), tableau.options().tolerance).unwrap();
    assert_named(&solution, 190_f64, &[("x1", 25_f64), ("x2", 5_f64), ("x3", 0_f64), ("x4", 20_f64)]);
}

#[test]
fn unbounded() {
    let (_, mut tableau) = load("unbounded");
    assert_eq!(tableau.solve(), OptimizationResult::Unbounded);
}

#[test]
fn infeasible() {
    let (form, mut tableau) = load("infeasible");
    let result = tableau.solve();

    // An artificial column stays positive
    let solution = result.solution().unwrap();
    assert!(form.reconstruct(solution, tableau.options().tolerance).is_none());
}

#[test]
fn what_if() {
    let (form, mut tableau) = load("production");
    tableau.solve();

    // A third machine that limits x1 + x2 to 5
    let state = tableau.update(Update::Constraint(vec![1_f64, 1_f64, 0_f64, 0_f64, 0_f64, 1_f64, 5_f64]));
    assert_eq!(state, Ok(State::MoreIterationDual));
    let result = tableau.solve();
    let solution = result.solution().unwrap();
    assert_abs_diff_eq!(solution.objective_value(), 13_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.value(0), 2_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.value(1), 3_f64, epsilon = 1e-9);

    // Restoring the capacity brings back the original optimum
    let state = tableau.update(Update::RightHandSide(vec![8_f64, 16_f64, 12_f64, 6_f64]));
    assert!(state.is_ok());
    let result = tableau.solve();
    assert_abs_diff_eq!(result.solution().unwrap().objective_value(), 14_f64, epsilon = 1e-9);

    // A column change of a variable that was never part of the problem is refused
    let state = tableau.update(Update::Column { index: 10, column: vec![1_f64; 4] });
    assert!(state.is_err());
    assert_eq!(form.names().len(), 5);
}

#[test]
fn missing() {
    let result = import(&get_test_file_path("does_not_exist"));
    assert!(matches!(result, Err(ImportError::Io(_))));
}
