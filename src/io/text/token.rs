//! # Tokens of the text format
//!
//! Each line is split into tokens independently. Whitespace, `,` and `;` only separate tokens, a
//! `*` between a coefficient and a variable is optional.
use crate::data::linear_program::elements::ConstraintType;
use crate::io::error::{FileLocation, ParseError};

/// Indicates the start of a comment, up to the end of the line.
pub const COMMENT_INDICATOR: char = '#';

/// Keyword of an objective that is maximized.
pub const MAXIMIZE: &str = "max";
/// Keyword of an objective that is minimized.
pub const MINIMIZE: &str = "min";

/// Largest index a variable can have, every index up to it gets a column.
pub const MAX_VARIABLE_INDEX: usize = 100_000;

/// Most fundamental element of a line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(super) enum Token<'a> {
    /// A non-negative number, signs are separate tokens.
    Number(f64),
    /// A name ending in a (1-based) index, such as `x3`.
    Variable {
        name: &'a str,
        index: usize,
    },
    /// Any other name, such as a keyword or the name of the objective.
    Word(&'a str),
    /// `+` or `-`, as `1` or `-1`.
    Sign(f64),
    /// `=`, `<=`, `>=`. The strict versions `<` and `>` are read as the non-strict ones.
    Relation(ConstraintType),
}

/// Split a line into tokens.
///
/// # Arguments
///
/// * `file_location`: Line number and the line itself, a comment at its end is ignored.
///
/// # Errors
///
/// When a character can't start a token, a number can't be read or a variable index is out of
/// range.
pub(super) fn tokenize(file_location: FileLocation) -> Result<Vec<Token>, ParseError> {
    let (_, line) = file_location;
    let line = match line.find(COMMENT_INDICATOR) {
        Some(start) => &line[..start],
        None => line,
    };

    let mut tokens = Vec::new();
    let mut characters = line.char_indices().peekable();
    while let Some((start, character)) = characters.next() {
        match character {
            c if c.is_whitespace() || c == ',' || c == ';' || c == '*' => {},
            '+' => tokens.push(Token::Sign(1_f64)),
            '-' => tokens.push(Token::Sign(-1_f64)),
            '=' => {
                // Also accept `==`, `=<` and `=>`
                let relation = match characters.peek() {
                    Some(&(_, '<')) => ConstraintType::Less,
                    Some(&(_, '>')) => ConstraintType::Greater,
                    _ => ConstraintType::Equal,
                };
                if matches!(characters.peek(), Some(&(_, '=' | '<' | '>'))) {
                    characters.next();
                }
                tokens.push(Token::Relation(relation));
            },
            '<' | '>' => {
                if matches!(characters.peek(), Some(&(_, '='))) {
                    characters.next();
                }
                let relation = if character == '<' { ConstraintType::Less } else { ConstraintType::Greater };
                tokens.push(Token::Relation(relation));
            },
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = start + c.len_utf8();
                while let Some(&(index, next)) = characters.peek() {
                    if !(next.is_ascii_digit() || next == '.') {
                        break;
                    }
                    end = index + next.len_utf8();
                    characters.next();
                }
                let text = &line[start..end];
                let value = text.parse::<f64>().map_err(|_| ParseError::with_file_location(
                    format!("could not read number \"{}\"", text),
                    file_location,
                ))?;
                tokens.push(Token::Number(value));
            },
            c if c.is_alphabetic() || c == '_' => {
                let mut end = start + c.len_utf8();
                while let Some(&(index, next)) = characters.peek() {
                    if !(next.is_alphanumeric() || next == '_') {
                        break;
                    }
                    end = index + next.len_utf8();
                    characters.next();
                }
                tokens.push(into_name(&line[start..end], file_location)?);
            },
            other => return Err(ParseError::with_file_location(
                format!("unexpected character '{}'", other),
                file_location,
            )),
        }
    }

    Ok(tokens)
}

/// A name is a variable when it ends in digits.
fn into_name<'a>(name: &'a str, file_location: FileLocation) -> Result<Token<'a>, ParseError> {
    let digits_start = name.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits_start == name.len() {
        return Ok(Token::Word(name));
    }

    match name[digits_start..].parse::<usize>() {
        Ok(index) if (1..=MAX_VARIABLE_INDEX).contains(&index) => Ok(Token::Variable { name, index }),
        _ => Err(ParseError::with_file_location(
            format!("variable \"{}\" should have an index from 1 up to {}", name, MAX_VARIABLE_INDEX),
            file_location,
        )),
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::ConstraintType;
    use crate::io::text::token::{MAX_VARIABLE_INDEX, Token, tokenize};

    #[test]
    fn objective() {
        let tokens = tokenize((1, "max z = 3x1 - x2 -x3")).unwrap();
        assert_eq!(tokens, vec![
            Token::Word("max"),
            Token::Word("z"),
            Token::Relation(ConstraintType::Equal),
            Token::Number(3_f64),
            Token::Variable { name: "x1", index: 1 },
            Token::Sign(-1_f64),
            Token::Variable { name: "x2", index: 2 },
            Token::Sign(-1_f64),
            Token::Variable { name: "x3", index: 3 },
        ]);
    }

    #[test]
    fn constraint() {
        let tokens = tokenize((2, "2.5 * x1, +y12 >= 4 # comment")).unwrap();
        assert_eq!(tokens, vec![
            Token::Number(2.5),
            Token::Variable { name: "x1", index: 1 },
            Token::Sign(1_f64),
            Token::Variable { name: "y12", index: 12 },
            Token::Relation(ConstraintType::Greater),
            Token::Number(4_f64),
        ]);
    }

    #[test]
    fn relations() {
        let relations = |line| tokenize((1, line)).unwrap();
        assert_eq!(relations("< <= =<"), vec![Token::Relation(ConstraintType::Less); 3]);
        assert_eq!(relations("> >= =>"), vec![Token::Relation(ConstraintType::Greater); 3]);
        assert_eq!(relations("= =="), vec![Token::Relation(ConstraintType::Equal); 2]);
    }

    #[test]
    fn invalid() {
        assert!(tokenize((1, "x1 + x2 <= 4!")).is_err());
        assert!(tokenize((1, "1.2.3 x1 <= 4")).is_err());
        let error = tokenize((5, "x0 <= 1")).unwrap_err();
        assert_eq!(error.line_number(), Some(5));
    }

    #[test]
    fn large_index() {
        let line = format!("x{} <= 1", MAX_VARIABLE_INDEX);
        assert_eq!(
            tokenize((1, line.as_str())).unwrap()[0],
            Token::Variable { name: &line[..line.len() - 5], index: MAX_VARIABLE_INDEX },
        );
        assert!(tokenize((1, "x100001 <= 1")).is_err());
        assert!(tokenize((1, "x99999999999 <= 1")).is_err());
        assert!(tokenize((1, "x999999999999999999999999 <= 1")).is_err());
    }
}
