//! # Algorithms
use crate::data::linear_program::solution::Solution;

pub mod simplex;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm. Two outcomes are specific to solving an
/// existing tableau after it was updated: the update may have been refused, or the algorithm may
/// have been stopped before reaching a conclusion.
#[derive(PartialEq, Debug)]
pub enum OptimizationResult<F> {
    /// A unique optimum was found.
    FiniteOptimum(Solution<F>),
    /// An optimum was found, but more reduced costs are zero than there are basic variables.
    ///
    /// This is a heuristic: other optimal solutions probably exist, but this is not verified.
    MultipleOptima(Solution<F>),
    /// The objective can be increased without limit.
    Unbounded,
    /// The constraints can't be satisfied.
    ///
    /// Only detected by the dual Simplex method, after an update.
    Infeasible,
    /// An update could not be applied incrementally, the problem should be built again.
    RebuildRequired,
    /// The configured number of iterations was performed without reaching a conclusion.
    IterationLimit,
}

impl<F> OptimizationResult<F> {
    /// The solution, if an optimum was found.
    pub fn solution(&self) -> Option<&Solution<F>> {
        match self {
            OptimizationResult::FiniteOptimum(solution)
            | OptimizationResult::MultipleOptima(solution) => Some(solution),
            _ => None,
        }
    }
}
