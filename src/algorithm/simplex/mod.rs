//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the tableau form of the simplex
//! algorithm. A tableau is built once, solved, and can then be updated and solved again. Depending
//! on the update, solving again continues with primal or with dual Simplex iterations.
use enum_map::Enum;
use log::{info, warn};

use crate::algorithm::OptimizationResult;
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::{Real, Tolerance};

pub mod dual;
pub mod primal;
pub mod sensitivity;
pub mod strategy;
pub mod tableau;


/// What a tableau needs next, or what was concluded about it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum State {
    /// Primal Simplex iterations are needed.
    MoreIteration,
    /// Dual Simplex iterations are needed, some right-hand side values are negative.
    MoreIterationDual,
    /// Optimal.
    OneOptimalSolution,
    /// Optimal, and more relative costs are zero than there are rows.
    ///
    /// This suggests, but does not prove, that other optimal solutions exist.
    InfiniteOptimalSolution,
    /// The objective is unbounded.
    NoOptimalSolution,
    /// The dual Simplex method found a row that can't be made feasible.
    NoFeasibleSolution,
    /// An update could not be applied incrementally. The tableau was not modified.
    AdviseRebuild,
}

impl State {
    /// Whether solving can't continue from this state.
    pub fn is_terminal(self) -> bool {
        !matches!(self, State::MoreIteration | State::MoreIterationDual)
    }
}

/// Primal and dual pivots are counted separately.
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum PivotKind {
    Primal,
    Dual,
}

/// Configuration of a tableau.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Options<F> {
    /// How values are compared with zero.
    pub tolerance: Tolerance<F>,
    /// How to choose entering columns (primal) and leaving rows (dual).
    pub pivot_rule: PivotRule,
    /// Maximum number of iterations a single call to `solve` may perform.
    ///
    /// Without a limit, `solve` doesn't return if the algorithm cycles.
    pub iteration_limit: Option<u64>,
}

impl<F: Real> Default for Options<F> {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            pivot_rule: PivotRule::default(),
            iteration_limit: None,
        }
    }
}

impl<F: Real> Tableau<F> {
    /// Iterate until a terminal state is reached.
    ///
    /// Continues with primal iterations or with dual iterations, depending on the current state.
    /// Calling this method on a tableau in a terminal state performs no iterations.
    ///
    /// # Return value
    ///
    /// The solution if an optimum was found, otherwise the reason it wasn't.
    pub fn solve(&mut self) -> OptimizationResult<F> {
        let mut nr_iterations = 0;
        while !self.state.is_terminal() {
            if let Some(limit) = self.options.iteration_limit {
                if nr_iterations >= limit {
                    warn!("stopped after {} iterations in state {:?}", nr_iterations, self.state);
                    return OptimizationResult::IterationLimit;
                }
            }

            self.step();
            nr_iterations += 1;
        }
        info!("{:?} after {} iterations, objective value {}", self.state, nr_iterations, self.objective_value());

        match self.state {
            State::OneOptimalSolution => OptimizationResult::FiniteOptimum(self.solution()),
            State::InfiniteOptimalSolution => OptimizationResult::MultipleOptima(self.solution()),
            State::NoOptimalSolution => OptimizationResult::Unbounded,
            State::NoFeasibleSolution => OptimizationResult::Infeasible,
            State::AdviseRebuild => OptimizationResult::RebuildRequired,
            State::MoreIteration | State::MoreIterationDual => unreachable!(),
        }
    }

    /// Perform a single iteration, primal or dual depending on the current state.
    ///
    /// # Return value
    ///
    /// The new state. If the tableau was in a terminal state, nothing happens.
    pub fn step(&mut self) -> State {
        self.state = match self.state {
            State::MoreIteration => self.primal_step(),
            State::MoreIterationDual => self.dual_step(),
            terminal => terminal,
        };

        self.state
    }
}
