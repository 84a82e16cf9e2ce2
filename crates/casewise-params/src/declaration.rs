//! Parsing and validation of one parameter-set declaration.
//!
//! A declaration pairs an argument-name specifier with a sequence of value
//! rows. Parsing normalizes the names, enforces per-declaration uniqueness,
//! and checks every row's arity against the declared name count before the
//! declaration is handed to the accumulation machinery.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::errors::DeclarationError;
use crate::value::ParamValue;

/// Argument-name specifier accepted by [`ParamDeclaration::parse`].
///
/// Either a single comma-separated string (`"a,b"`) or an explicit ordered
/// list of names. Entries are trimmed during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgNames {
    /// One string holding comma-separated names.
    Joined(String),
    /// An explicit ordered list of names.
    List(Vec<String>),
}

impl From<&str> for ArgNames {
    fn from(names: &str) -> Self {
        Self::Joined(names.to_owned())
    }
}

impl From<String> for ArgNames {
    fn from(names: String) -> Self {
        Self::Joined(names)
    }
}

impl From<Vec<String>> for ArgNames {
    fn from(names: Vec<String>) -> Self {
        Self::List(names)
    }
}

impl From<Vec<&str>> for ArgNames {
    fn from(names: Vec<&str>) -> Self {
        Self::List(names.into_iter().map(str::to_owned).collect())
    }
}

impl ArgNames {
    fn into_trimmed(self) -> Vec<String> {
        match self {
            Self::Joined(joined) => joined.split(',').map(|name| name.trim().to_owned()).collect(),
            Self::List(names) => names.into_iter().map(|name| name.trim().to_owned()).collect(),
        }
    }
}

/// One row of declared values.
///
/// A scalar row binds a single-argument declaration; a tuple row must match
/// the declaration's argument count exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueRow {
    /// A bare value, treated as a one-element row.
    Scalar(ParamValue),
    /// A fixed-arity row of values.
    Tuple(Vec<ParamValue>),
}

impl ValueRow {
    fn into_values(self) -> Vec<ParamValue> {
        match self {
            Self::Scalar(value) => vec![value],
            Self::Tuple(values) => values,
        }
    }
}

impl From<i64> for ValueRow {
    fn from(v: i64) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<i32> for ValueRow {
    fn from(v: i32) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<f64> for ValueRow {
    fn from(v: f64) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<bool> for ValueRow {
    fn from(v: bool) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<&str> for ValueRow {
    fn from(v: &str) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<String> for ValueRow {
    fn from(v: String) -> Self {
        Self::Scalar(v.into())
    }
}

impl<A, B> From<(A, B)> for ValueRow
where
    A: Into<ParamValue>,
    B: Into<ParamValue>,
{
    fn from((a, b): (A, B)) -> Self {
        Self::Tuple(vec![a.into(), b.into()])
    }
}

impl<A, B, C> From<(A, B, C)> for ValueRow
where
    A: Into<ParamValue>,
    B: Into<ParamValue>,
    C: Into<ParamValue>,
{
    fn from((a, b, c): (A, B, C)) -> Self {
        Self::Tuple(vec![a.into(), b.into(), c.into()])
    }
}

impl<A, B, C, D> From<(A, B, C, D)> for ValueRow
where
    A: Into<ParamValue>,
    B: Into<ParamValue>,
    C: Into<ParamValue>,
    D: Into<ParamValue>,
{
    fn from((a, b, c, d): (A, B, C, D)) -> Self {
        Self::Tuple(vec![a.into(), b.into(), c.into(), d.into()])
    }
}

/// Build a `Vec<ValueRow>` from literal scalars or tuples.
///
/// # Examples
///
/// ```
/// use casewise_params::{ParamDeclaration, values};
///
/// let rows = values![(1, 2), (3, 4)];
/// let declaration = ParamDeclaration::parse("a,b", rows)?;
/// assert_eq!(declaration.row_count(), 2);
/// # Ok::<(), casewise_params::DeclarationError>(())
/// ```
#[macro_export]
macro_rules! values {
    ($($row:expr),+ $(,)?) => {
        vec![$($crate::ValueRow::from($row)),+]
    };
}

/// One parsed `(names, rows)` declaration, ready for accumulation.
///
/// Invariants established by [`ParamDeclaration::parse`]: names are trimmed,
/// non-empty, and unique within the declaration, and every row has exactly
/// one value per declared name.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDeclaration {
    names: Vec<String>,
    rows: Vec<Vec<ParamValue>>,
}

impl ParamDeclaration {
    /// Parse and validate one declaration.
    ///
    /// Scalar rows are wrapped as one-element rows; tuple rows must match the
    /// declared argument count.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationError::EmptyArgumentName`] for a blank name
    /// entry, [`DeclarationError::DuplicateArgumentNames`] when a name
    /// repeats within the declaration, and
    /// [`DeclarationError::ArityMismatch`] when a row's length differs from
    /// the declared name count.
    ///
    /// # Examples
    ///
    /// ```
    /// use casewise_params::{DeclarationError, ParamDeclaration, values};
    ///
    /// let declaration = ParamDeclaration::parse("a, b", values![(1, 2), (3, 4)])?;
    /// assert_eq!(declaration.names(), ["a", "b"]);
    ///
    /// let error = ParamDeclaration::parse("a,b", values![1]).unwrap_err();
    /// assert!(matches!(error, DeclarationError::ArityMismatch { expected: 2, .. }));
    /// # Ok::<(), DeclarationError>(())
    /// ```
    pub fn parse(
        names: impl Into<ArgNames>,
        rows: Vec<ValueRow>,
    ) -> Result<Self, DeclarationError> {
        let names = names.into().into_trimmed();

        let mut seen = HashSet::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(DeclarationError::EmptyArgumentName { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(DeclarationError::DuplicateArgumentNames { name: name.clone() });
            }
        }

        let mut parsed = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            let values = row.into_values();
            if values.len() != names.len() {
                return Err(DeclarationError::ArityMismatch {
                    index,
                    expected: names.len(),
                    actual: values.len(),
                    row: render_row(&values),
                });
            }
            parsed.push(values);
        }

        Ok(Self {
            names,
            rows: parsed,
        })
    }

    /// The declared argument names, in declaration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The validated value rows, one vector per row.
    #[must_use]
    pub fn rows(&self) -> &[Vec<ParamValue>] {
        &self.rows
    }

    /// Number of value rows in the declaration.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn render_row(values: &[ParamValue]) -> String {
    let mut out = String::from("(");
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{value}");
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_joined_names() {
        let declaration =
            ParamDeclaration::parse("a , b", values![(1, 2)]).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(declaration.names(), ["a", "b"]);
    }

    #[test]
    fn accepts_explicit_name_list() {
        let declaration = ParamDeclaration::parse(vec!["a", "b"], values![(1, 2)])
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(declaration.names(), ["a", "b"]);
    }

    #[test]
    fn wraps_scalars_for_single_name() {
        let declaration =
            ParamDeclaration::parse("a", values![1, 2, 3]).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(declaration.row_count(), 3);
        assert_eq!(
            declaration.rows().first().map(Vec::as_slice),
            Some([ParamValue::Int(1)].as_slice())
        );
    }

    #[test]
    fn rejects_repeated_names() {
        let error = ParamDeclaration::parse("a,a", values![(1, 2)])
            .err()
            .unwrap_or_else(|| panic!("expected duplicate-name error"));
        assert!(matches!(
            error,
            DeclarationError::DuplicateArgumentNames { ref name } if name == "a"
        ));
    }

    #[test]
    fn rejects_blank_name_entries() {
        let error = ParamDeclaration::parse("a,,b", values![(1, 2, 3)])
            .err()
            .unwrap_or_else(|| panic!("expected empty-name error"));
        assert!(matches!(
            error,
            DeclarationError::EmptyArgumentName { index: 1 }
        ));
    }

    #[test]
    fn echoes_offending_row_in_arity_error() {
        let error = ParamDeclaration::parse("a,b", values![1])
            .err()
            .unwrap_or_else(|| panic!("expected arity error"));
        assert_eq!(
            error.to_string(),
            "wrong number of values at index 0, expected 2, got 1: (1)"
        );
    }
}
