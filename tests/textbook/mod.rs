//! # Small problems from the textbook
//!
//! Written in the text format, each one has an optimum (or lack of it) that can be verified by
//! hand.
use std::path::{Path, PathBuf};

use relp_sensitivity::algorithm::simplex::Options;
use relp_sensitivity::algorithm::simplex::tableau::Tableau;
use relp_sensitivity::data::linear_program::standard_form::StandardForm;
use relp_sensitivity::io::import;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("lp")
}

/// Read a problem and build the tableau, with an iteration limit.
fn load(name: &str) -> (StandardForm<f64>, Tableau<f64>) {
    let form = import(&get_test_file_path(name)).unwrap();
    let options = Options { iteration_limit: Some(1000), ..Options::default() };
    let tableau = Tableau::from_standard_form(&form, options).unwrap();

    (form, tableau)
}
