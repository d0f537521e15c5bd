//! # Building blocks to describe linear programs.
use std::ops::Not;

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

/// Multiplying both sides of a constraint by `-1` flips the direction of the inequality.
impl Not for ConstraintType {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            ConstraintType::Equal => ConstraintType::Equal,
            ConstraintType::Greater => ConstraintType::Less,
            ConstraintType::Less => ConstraintType::Greater,
        }
    }
}

/// Direction of optimization.
///
/// The tableau always maximizes; minimization problems have their cost vector negated when they
/// are brought into standard form.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    #[default]
    Maximize,
    Minimize,
}

/// The role a column plays in a problem brought into standard form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// A variable of the problem as the user wrote it.
    Structural,
    /// Added to a `<=` constraint, with coefficient `1` and cost `0`.
    Slack,
    /// Added to a `>=` constraint, with coefficient `-1` and cost `0`.
    Surplus,
    /// Added to a `=` or `>=` constraint to have an initial basis, with coefficient `1` and a large
    /// negative cost (the Big-M method).
    Artificial,
}
