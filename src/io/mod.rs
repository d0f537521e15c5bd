//! # Reading of linear programs
//!
//! This module provides read functionality for linear programs written down by hand.
use std::fs;
use std::path::Path;

use log::debug;

use crate::data::linear_program::standard_form::StandardForm;
use crate::io::error::ImportError;

pub mod error;
pub mod text;

/// Import a problem from a file.
///
/// Currently only supports the text format of the `text` module, with file extension `lp` or `txt`.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, or there is a syntax error in
/// the problem file.
pub fn import(file_path: &Path) -> Result<StandardForm<f64>, ImportError> {
    // Choose the right parser before reading
    let extension = match file_path.extension() {
        Some(extension) => extension.to_str().ok_or_else(|| ImportError::FileExtension(format!(
            "Could not convert OsStr to &str, probably invalid unicode: {:?}",
            extension,
        )))?,
        None => return Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path,
        ))),
    };
    if !matches!(extension, "lp" | "txt") {
        return Err(ImportError::FileExtension(format!(
            "Could not recognise file extension \"{}\" of file: {:?}",
            extension, file_path,
        )));
    }

    let program = fs::read_to_string(file_path)?;
    debug!("read {} bytes from {:?}", program.len(), file_path);

    Ok(text::parse(&program)?)
}
