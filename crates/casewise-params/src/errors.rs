//! Error types surfaced while parsing a parameter-set declaration.

use thiserror::Error;

/// Errors raised when one `(names, rows)` declaration fails validation.
///
/// Every variant is fatal and surfaces at declaration time, before any case
/// can be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DeclarationError {
    /// An argument name repeats within a single declaration.
    #[error("argument names must not repeat: '{name}' is declared more than once")]
    DuplicateArgumentNames {
        /// The name that appeared twice.
        name: String,
    },
    /// An argument name entry was blank after trimming.
    #[error("argument name at position {index} is empty")]
    EmptyArgumentName {
        /// Zero-based position of the blank entry in the specifier.
        index: usize,
    },
    /// A value row's length differs from the declared argument count.
    #[error("wrong number of values at index {index}, expected {expected}, got {actual}: {row}")]
    ArityMismatch {
        /// Zero-based index of the offending row.
        index: usize,
        /// Number of values required by the declaration.
        expected: usize,
        /// Number of values present in the row.
        actual: usize,
        /// Display rendering of the offending row.
        row: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_duplicate_names() {
        let error = DeclarationError::DuplicateArgumentNames {
            name: "b".to_owned(),
        };
        assert_eq!(
            error.to_string(),
            "argument names must not repeat: 'b' is declared more than once"
        );
    }

    #[test]
    fn formats_arity_mismatch_with_row() {
        let error = DeclarationError::ArityMismatch {
            index: 3,
            expected: 2,
            actual: 3,
            row: "(1, 2, 3)".to_owned(),
        };
        assert_eq!(
            error.to_string(),
            "wrong number of values at index 3, expected 2, got 3: (1, 2, 3)"
        );
    }
}
