//! # Error reporting for reading of linear program files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::io;

use thiserror::Error;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read the problem file: {0}")]
    Io(#[from] io::Error),
    /// Contents of the file could not be parsed into a linear program.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// Most of them are caused by a specific line, which is then included.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{description}{}", display_location(.location))]
pub struct ParseError {
    description: String,
    location: Option<(u64, String)>,
}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub(crate) type FileLocation<'a> = (u64, &'a str);

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: None }
    }

    /// Create a new `ParseError` instance caused by a line.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    pub fn with_file_location(description: impl Into<String>, file_location: FileLocation) -> Self {
        let (line_number, line) = file_location;
        Self {
            description: description.into(),
            location: Some((line_number, line.to_string())),
        }
    }

    /// What went wrong.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of the line that caused this error, counting from 1.
    pub fn line_number(&self) -> Option<u64> {
        self.location.as_ref().map(|&(line_number, _)| line_number)
    }
}

fn display_location(location: &Option<(u64, String)>) -> String {
    match location {
        Some((line_number, line)) => format!("\n\tCaused at line\t{}:\t{}", line_number, line),
        None => String::new(),
    }
}

#[cfg(test)]
mod test {
    use crate::io::error::{ImportError, ParseError};

    #[test]
    fn display() {
        let error = ParseError::new("no constraints");
        assert_eq!(error.to_string(), "no constraints");
        assert_eq!(error.line_number(), None);

        let error = ParseError::with_file_location("expected a relation", (3, "x1 + x2 5"));
        assert_eq!(error.to_string(), "expected a relation\n\tCaused at line\t3:\tx1 + x2 5");
        assert_eq!(error.line_number(), Some(3));
        assert_eq!(error.description(), "expected a relation");

        let error = ImportError::from(error);
        assert!(error.to_string().starts_with("expected a relation"));
    }
}
