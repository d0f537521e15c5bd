//! # Implicit basis inverse
//!
//! No basis inverse is stored explicitly. Let `E` be the matrix formed by the original columns at
//! the original basis indices. Because the current tableau equals `B^-1 A` for the current basis
//! `B`, its columns at those indices equal `B^-1 E`. For a problem as it was given, `E` is the
//! identity, and these tableau columns are `B^-1` itself.
//!
//! Every added constraint appends a row to `A` and its own column to the original basis. That row
//! may have nonzero coefficients in earlier original basis columns, making `E` lower triangular
//! instead of the identity. Applying `E^-1` first, by forward substitution, accounts for that.
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::Real;

impl<F: Real> Tableau<F> {
    /// Column of the original problem with respect to the current basis.
    ///
    /// # Arguments
    ///
    /// * `original`: Column of length `m` in terms of the original constraint rows.
    ///
    /// # Return value
    ///
    /// `B^-1` times the column, of length `m`.
    pub(in crate::algorithm::simplex) fn generate_column(&self, original: &[F]) -> Vec<F> {
        debug_assert_eq!(original.len(), self.nr_rows());
        debug_assert_eq!(self.original_basis.len(), self.nr_rows());

        // Solve E y = original
        let mut substituted = Vec::with_capacity(original.len());
        for (k, (&value, row)) in original.iter().zip(&self.original_rows).enumerate() {
            let remainder = self.original_basis[..k].iter()
                .zip(&substituted)
                .fold(value, |total, (&column, &earlier)| total - row[column] * earlier);
            substituted.push(remainder / row[self.original_basis[k]]);
        }

        self.rows.iter()
            .map(|row| {
                self.original_basis.iter()
                    .zip(&substituted)
                    .fold(F::zero(), |total, (&column, &y)| total + row[column] * y)
            })
            .collect()
    }

    /// A column of the original problem, with all updates applied.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index, may be that of the right-hand side.
    pub(in crate::algorithm::simplex) fn original_column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns());

        self.original_rows.iter().map(|row| row[j]).collect()
    }
}
