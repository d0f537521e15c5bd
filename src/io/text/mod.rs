//! # Reading linear programs written as text
//!
//! A problem is written the way it would be on paper:
//!
//! ```text
//! # comment lines start with '#'
//! max z = 3x1 - x2 - x3
//! x1 - 2x2 + x3 <= 11
//! -4x1 + x2 + 2x3 >= 3
//! -2x1 + x3 = 1
//! ```
//!
//! The first line states the direction, optionally a name with `=`, and the objective function.
//! Every following line is a constraint, until the first blank line. Variables are names ending in
//! an index, starting at 1; the index determines the column.
//!
//! Reading happens in two stages. The lines are first parsed into an objective and a list of
//! constraints, which are then brought into standard form. All variables must be non-negative.
use itertools::Itertools;
use log::{debug, warn};

use crate::data::linear_program::elements::{ColumnKind, ConstraintType, Objective};
use crate::data::linear_program::standard_form::StandardForm;
use crate::io::error::{FileLocation, ParseError};
use crate::io::text::token::{COMMENT_INDICATOR, MAXIMIZE, MINIMIZE, Token, tokenize};

mod token;

/// The penalty of artificial columns is this factor times the largest absolute value in the
/// problem.
pub const PENALTY_FACTOR: f64 = 100_f64;

/// Objective function as it was read.
#[derive(Debug, PartialEq)]
struct UnstructuredObjective<'a> {
    objective: Objective,
    terms: Vec<Term<'a>>,
}

/// Constraint as it was read.
#[derive(Debug, PartialEq)]
struct UnstructuredConstraint<'a> {
    terms: Vec<Term<'a>>,
    constraint_type: ConstraintType,
    rhs: f64,
}

/// Name, 1-based index and coefficient of a variable.
type Term<'a> = (&'a str, usize, f64);

/// Read a problem and bring it in standard form.
///
/// Slack, surplus and artificial columns are added after the columns of the variables, in the order
/// of the constraints. Artificial columns get the Big-M penalty as their cost.
///
/// # Arguments
///
/// * `program`: The problem text.
///
/// # Errors
///
/// When the text doesn't follow the format, see the module documentation.
pub fn parse(program: &str) -> Result<StandardForm<f64>, ParseError> {
    let lines = program.lines()
        .enumerate()
        .map(|(number, line)| (number as u64 + 1, line))
        .filter(|(_, line)| !line.trim_start().starts_with(COMMENT_INDICATOR))
        .collect::<Vec<_>>();

    let mut lines = lines.into_iter().skip_while(|(_, line)| line.trim().is_empty());
    let objective = match lines.next() {
        Some(file_location) => parse_objective(file_location)?,
        None => return Err(ParseError::new("no objective function")),
    };
    let mut lines = lines.skip_while(|(_, line)| line.trim().is_empty());

    let mut constraints = Vec::new();
    for file_location in lines.by_ref() {
        if file_location.1.trim().is_empty() {
            break;
        }
        constraints.push(parse_constraint(file_location)?);
    }
    if constraints.is_empty() {
        return Err(ParseError::new("no constraints"));
    }
    if let Some((line_number, _)) = lines.find(|(_, line)| !line.trim().is_empty()) {
        warn!("ignoring everything from line {} on, after the blank line", line_number);
    }

    Ok(standardize(objective, constraints))
}

/// Read the objective line: `max` or `min`, optionally a name with `=`, followed by terms.
fn parse_objective(file_location: FileLocation) -> Result<UnstructuredObjective, ParseError> {
    let tokens = tokenize(file_location)?;
    let objective = match tokens.first() {
        Some(Token::Word(word)) if word.eq_ignore_ascii_case(MAXIMIZE) => Objective::Maximize,
        Some(Token::Word(word)) if word.eq_ignore_ascii_case(MINIMIZE) => Objective::Minimize,
        _ => return Err(ParseError::with_file_location(
            format!("the objective should start with \"{}\" or \"{}\"", MAXIMIZE, MINIMIZE),
            file_location,
        )),
    };
    let expression = match &tokens[1..] {
        [Token::Word(_), Token::Relation(ConstraintType::Equal), rest @ ..] => rest,
        rest => rest,
    };

    let terms = parse_terms(expression, file_location)?;
    Ok(UnstructuredObjective { objective, terms })
}

/// Read a constraint line: terms, a relation and a constant.
fn parse_constraint(file_location: FileLocation) -> Result<UnstructuredConstraint, ParseError> {
    let tokens = tokenize(file_location)?;
    let (position, constraint_type) = match tokens.iter()
        .enumerate()
        .filter_map(|(i, token)| match token {
            Token::Relation(constraint_type) => Some((i, *constraint_type)),
            _ => None,
        })
        .exactly_one() {
        Ok(relation) => relation,
        Err(_) => return Err(ParseError::with_file_location(
            "a constraint should contain exactly one relation",
            file_location,
        )),
    };

    let terms = parse_terms(&tokens[..position], file_location)?;
    let rhs = parse_constant(&tokens[position + 1..], file_location)?;
    Ok(UnstructuredConstraint { terms, constraint_type, rhs })
}

/// Read a sum of terms of the form `[sign]... [coefficient] variable`.
fn parse_terms<'a>(
    tokens: &[Token<'a>],
    file_location: FileLocation,
) -> Result<Vec<Term<'a>>, ParseError> {
    let mut terms = Vec::new();
    let mut rest = tokens;
    while !rest.is_empty() {
        let (sign, after_sign) = parse_signs(rest);
        let (coefficient, after_coefficient) = match after_sign {
            [Token::Number(value), tail @ ..] => (*value, tail),
            tail => (1_f64, tail),
        };
        match after_coefficient {
            [Token::Variable { name, index }, tail @ ..] => {
                terms.push((*name, *index, sign * coefficient));
                rest = tail;
            },
            [Token::Number(_), ..] => return Err(ParseError::with_file_location(
                "two consecutive numbers",
                file_location,
            )),
            [Token::Word(word), ..] => return Err(ParseError::with_file_location(
                format!("\"{}\" is not a variable, variables end with an index", word),
                file_location,
            )),
            _ => return Err(ParseError::with_file_location(
                "expected a variable",
                file_location,
            )),
        }
    }

    if terms.is_empty() {
        return Err(ParseError::with_file_location("expected at least one variable", file_location));
    }

    Ok(terms)
}

/// Read a right-hand side: signs followed by a single number.
fn parse_constant(tokens: &[Token], file_location: FileLocation) -> Result<f64, ParseError> {
    match parse_signs(tokens) {
        (sign, [Token::Number(value)]) => Ok(sign * value),
        _ => Err(ParseError::with_file_location(
            "the right-hand side should be a single number",
            file_location,
        )),
    }
}

/// Combine any leading signs.
fn parse_signs<'b, 'a>(tokens: &'b [Token<'a>]) -> (f64, &'b [Token<'a>]) {
    let mut sign = 1_f64;
    let mut rest = tokens;
    while let [Token::Sign(value), tail @ ..] = rest {
        sign *= value;
        rest = tail;
    }

    (sign, rest)
}

/// Bring the problem in standard form, with an initial basis from slack and artificial columns.
///
/// Rows with a negative right-hand side are negated first, flipping the relation.
fn standardize(
    objective: UnstructuredObjective,
    constraints: Vec<UnstructuredConstraint>,
) -> StandardForm<f64> {
    let all_terms = || objective.terms.iter().chain(constraints.iter().flat_map(|c| &c.terms));
    let nr_variables = all_terms().map(|&(_, index, _)| index).max().unwrap_or(0);
    let mut names = (1..=nr_variables).map(|j| format!("x{}", j)).collect::<Vec<_>>();
    for &(name, index, _) in all_terms() {
        names[index - 1] = name.to_string();
    }

    let largest = all_terms().map(|&(_, _, value)| value.abs())
        .chain(constraints.iter().map(|constraint| constraint.rhs.abs()))
        .fold(1_f64, f64::max);
    let penalty = PENALTY_FACTOR * largest;

    let mut cost = vec![0_f64; nr_variables];
    for &(_, index, value) in &objective.terms {
        cost[index - 1] += value;
    }
    if objective.objective == Objective::Minimize {
        for value in &mut cost {
            *value = -*value;
        }
    }
    let mut kinds = vec![ColumnKind::Structural; nr_variables];

    // Coefficients of the variables, right-hand side and relation per row
    let rows = constraints.into_iter()
        .map(|constraint| {
            let mut coefficients = vec![0_f64; nr_variables];
            for (_, index, value) in constraint.terms {
                coefficients[index - 1] += value;
            }
            if constraint.rhs < 0_f64 {
                for value in &mut coefficients {
                    *value = -*value;
                }
                (coefficients, -constraint.rhs, !constraint.constraint_type)
            } else {
                (coefficients, constraint.rhs, constraint.constraint_type)
            }
        })
        .collect::<Vec<_>>();

    // Added columns: (row, coefficient) per column
    let mut added = Vec::new();
    let mut basis = Vec::with_capacity(rows.len());
    for (i, (_, _, constraint_type)) in rows.iter().enumerate() {
        let (kind, coefficient) = match constraint_type {
            ConstraintType::Less => (ColumnKind::Slack, 1_f64),
            ConstraintType::Greater => (ColumnKind::Surplus, -1_f64),
            ConstraintType::Equal => (ColumnKind::Artificial, 1_f64),
        };
        added.push((i, coefficient));
        kinds.push(kind);
        if kind == ColumnKind::Surplus {
            added.push((i, 1_f64));
            kinds.push(ColumnKind::Artificial);
        }
        basis.push(nr_variables + added.len() - 1);
    }
    for (j, &kind) in kinds.iter().enumerate().skip(nr_variables) {
        let (i, _) = added[j - nr_variables];
        let prefix = if kind == ColumnKind::Artificial { "a" } else { "s" };
        names.push(format!("{}{}", prefix, i + 1));
        cost.push(if kind == ColumnKind::Artificial { -penalty } else { 0_f64 });
    }

    let constraints = rows.into_iter()
        .enumerate()
        .map(|(i, (mut coefficients, rhs, _))| {
            coefficients.extend(added.iter().map(|&(row, value)| if row == i { value } else { 0_f64 }));
            coefficients.push(rhs);
            coefficients
        })
        .collect::<Vec<_>>();

    debug!(
        "read {} constraints on {} variables, added {} columns, penalty {}",
        constraints.len(), nr_variables, added.len(), penalty,
    );
    StandardForm {
        cost,
        constraints,
        basis,
        objective: objective.objective,
        names,
        kinds,
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{ColumnKind, ConstraintType, Objective};
    use crate::io::text::{parse, parse_constraint, parse_objective, UnstructuredConstraint};

    #[test]
    fn objective() {
        let objective = parse_objective((1, "max z = 3x1 - x2 - x3")).unwrap();
        assert_eq!(objective.objective, Objective::Maximize);
        assert_eq!(objective.terms, vec![("x1", 1, 3_f64), ("x2", 2, -1_f64), ("x3", 3, -1_f64)]);

        let objective = parse_objective((1, "MIN 2y2 + - y1")).unwrap();
        assert_eq!(objective.objective, Objective::Minimize);
        assert_eq!(objective.terms, vec![("y2", 2, 2_f64), ("y1", 1, -1_f64)]);

        assert!(parse_objective((1, "maximize z = x1")).is_err());
        assert!(parse_objective((1, "max z =")).is_err());
    }

    #[test]
    fn constraint() {
        let constraint = parse_constraint((2, "-4x1 + x2 + 2x3 >= 3")).unwrap();
        assert_eq!(constraint, UnstructuredConstraint {
            terms: vec![("x1", 1, -4_f64), ("x2", 2, 1_f64), ("x3", 3, 2_f64)],
            constraint_type: ConstraintType::Greater,
            rhs: 3_f64,
        });

        let constraint = parse_constraint((2, "x1 < - 2")).unwrap();
        assert_eq!(constraint.rhs, -2_f64);
        assert_eq!(constraint.constraint_type, ConstraintType::Less);
    }

    #[test]
    fn invalid_constraint() {
        for line in ["x1 + x2 5", "x1 <= 2 <= 3", "x1 <= x2", "x1 3 <= 3", "x1 + <= 3", "z <= 3", "<= 3"] {
            let error = parse_constraint((7, line)).unwrap_err();
            assert_eq!(error.line_number(), Some(7), "{}", line);
        }
    }

    #[test]
    fn standard_form() {
        let form = parse("\
            max z = 3x1 - x2 - x3\n\
            x1 - 2x2 + x3 <= 11\n\
            -4x1 + x2 + 2x3 >= 3\n\
            -2x1 + x3 = 1\n\
        ").unwrap();

        assert_eq!(form.cost(), &[3_f64, -1_f64, -1_f64, 0_f64, 0_f64, -1100_f64, -1100_f64]);
        assert_eq!(form.constraints(), &[
            vec![1_f64, -2_f64, 1_f64, 1_f64, 0_f64, 0_f64, 0_f64, 11_f64],
            vec![-4_f64, 1_f64, 2_f64, 0_f64, -1_f64, 1_f64, 0_f64, 3_f64],
            vec![-2_f64, 0_f64, 1_f64, 0_f64, 0_f64, 0_f64, 1_f64, 1_f64],
        ]);
        assert_eq!(form.basis(), &[3, 5, 6]);
        assert_eq!(form.names(), &["x1", "x2", "x3", "s1", "s2", "a2", "a3"]);
        assert_eq!(form.kinds(), &[
            ColumnKind::Structural,
            ColumnKind::Structural,
            ColumnKind::Structural,
            ColumnKind::Slack,
            ColumnKind::Surplus,
            ColumnKind::Artificial,
            ColumnKind::Artificial,
        ]);
    }

    #[test]
    fn negative_rhs_and_minimize() {
        let form = parse("\
            # Comment before the objective\n\
            \n\
            min cost = x1 + x2\n\
            \n\
            x1 + 2x2 >= 4\n\
            -3x1 - x2 <= -6\n\
            \n\
            this line is ignored\n\
        ").unwrap();

        assert_eq!(form.objective(), Objective::Minimize);
        assert_eq!(form.cost(), &[-1_f64, -1_f64, 0_f64, -600_f64, 0_f64, -600_f64]);
        assert_eq!(form.constraints(), &[
            vec![1_f64, 2_f64, -1_f64, 1_f64, 0_f64, 0_f64, 4_f64],
            vec![3_f64, 1_f64, 0_f64, 0_f64, -1_f64, 1_f64, 6_f64],
        ]);
        assert_eq!(form.basis(), &[3, 5]);
    }

    #[test]
    fn unused_variable() {
        let form = parse("max z = x3\nx1 + x3 <= 2\n").unwrap();
        assert_eq!(form.cost(), &[0_f64, 0_f64, 1_f64, 0_f64]);
        assert_eq!(form.names(), &["x1", "x2", "x3", "s1"]);
        assert_eq!(form.constraints(), &[vec![1_f64, 0_f64, 1_f64, 1_f64, 2_f64]]);
    }

    #[test]
    fn empty() {
        assert!(parse("").is_err());
        assert!(parse("# only a comment\n").is_err());
        assert!(parse("max z = x1\n").is_err());
    }

    #[test]
    fn huge_index() {
        let error = parse("max z = x1\nx99999999999 <= 1\n").unwrap_err();
        assert_eq!(error.line_number(), Some(2));
    }
}
