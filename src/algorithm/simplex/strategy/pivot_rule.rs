//! # Pivot rules
//!
//! Strategies for moving from basis to basis, whether primal or dual.
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::Real;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot (or the row for a dual pivot), a row
/// (column) needs to be found. This decision is made independent of the strategy, see the ratio
/// tests in the `primal` and `dual` modules.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum PivotRule {
    /// Pivot on the column with the largest relative cost (Dantzig's rule), or on the row with
    /// the most negative right-hand side.
    ///
    /// Ties are broken by taking the lowest index.
    #[default]
    LargestCoefficient,
    /// Simply pivot on the first column which has a positive relative cost, or the first row which
    /// has a negative right-hand side.
    FirstProfitable,
}

impl PivotRule {
    /// Column selection rule for the primal Simplex method.
    ///
    /// Relative costs should be up to date.
    ///
    /// # Return value
    ///
    /// Index of a column with a positive relative cost, if there is one.
    pub fn select_primal_pivot_column<F: Real>(self, tableau: &Tableau<F>) -> Option<usize> {
        let tolerance = tableau.options().tolerance;
        let candidates = tableau.relative_costs()[..tableau.nr_variables()].iter()
            .enumerate()
            .filter(|&(_, &cost)| tolerance.is_positive(cost));

        match self {
            PivotRule::LargestCoefficient => {
                let mut largest: Option<(usize, F)> = None;
                for (j, &cost) in candidates {
                    match largest {
                        Some((_, largest_cost)) if cost <= largest_cost => {},
                        _ => largest = Some((j, cost)),
                    }
                }
                largest.map(|(j, _)| j)
            },
            PivotRule::FirstProfitable => candidates.map(|(j, _)| j).next(),
        }
    }

    /// Row selection rule for the dual Simplex method.
    ///
    /// # Return value
    ///
    /// Index of a row with a negative right-hand side, if there is one.
    pub fn select_dual_pivot_row<F: Real>(self, tableau: &Tableau<F>) -> Option<usize> {
        let tolerance = tableau.options().tolerance;
        let candidates = (0..tableau.nr_rows())
            .map(|i| (i, tableau.rhs(i)))
            .filter(|&(_, value)| tolerance.is_negative(value));

        match self {
            PivotRule::LargestCoefficient => {
                let mut smallest: Option<(usize, F)> = None;
                for (i, value) in candidates {
                    match smallest {
                        Some((_, smallest_value)) if value >= smallest_value => {},
                        _ => smallest = Some((i, value)),
                    }
                }
                smallest.map(|(i, _)| i)
            },
            PivotRule::FirstProfitable => candidates.map(|(i, _)| i).next(),
        }
    }
}
