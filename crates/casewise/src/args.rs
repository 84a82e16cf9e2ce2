//! Resolved argument bindings handed to a running case.

use std::fmt;

use casewise_params::ParamValue;
use thiserror::Error;

/// Errors raised by the typed accessors on [`CaseArgs`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ArgAccessError {
    /// No binding exists under the requested name.
    #[error("no argument named '{name}' is bound for this case")]
    Missing {
        /// The requested argument name.
        name: String,
    },
    /// The binding exists but holds a different kind of value.
    #[error("argument '{name}' holds {actual}, not {expected}")]
    WrongKind {
        /// The requested argument name.
        name: String,
        /// The kind the accessor expected.
        expected: &'static str,
        /// Display rendering of the value actually bound.
        actual: String,
    },
}

/// The argument bindings of one materialized case.
///
/// Bindings are ordered by the template's formal signature and contain only
/// this case's values merged over the template defaults, so tooling that
/// inspects a case sees exactly what that case will run with.
///
/// # Examples
///
/// ```
/// use casewise::{CaseArgs, ParamValue};
///
/// let args = CaseArgs::from_bindings(vec![("a".to_owned(), ParamValue::Int(3))]);
/// assert_eq!(args.int("a"), Ok(3));
/// assert!(args.get("b").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaseArgs {
    bindings: Vec<(String, ParamValue)>,
}

impl CaseArgs {
    /// Build args from already-ordered name/value bindings.
    #[must_use]
    pub fn from_bindings(bindings: Vec<(String, ParamValue)>) -> Self {
        Self { bindings }
    }

    /// Look up a binding by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value)
    }

    /// Fetch an integer binding.
    ///
    /// # Errors
    ///
    /// Returns [`ArgAccessError`] when the name is unbound or holds a
    /// non-integer value.
    pub fn int(&self, name: &str) -> Result<i64, ArgAccessError> {
        match self.require(name)? {
            ParamValue::Int(v) => Ok(*v),
            other => Err(wrong_kind(name, "an integer", other)),
        }
    }

    /// Fetch a float binding.
    ///
    /// # Errors
    ///
    /// Returns [`ArgAccessError`] when the name is unbound or holds a
    /// non-float value.
    pub fn float(&self, name: &str) -> Result<f64, ArgAccessError> {
        match self.require(name)? {
            ParamValue::Float(v) => Ok(*v),
            other => Err(wrong_kind(name, "a float", other)),
        }
    }

    /// Fetch a boolean binding.
    ///
    /// # Errors
    ///
    /// Returns [`ArgAccessError`] when the name is unbound or holds a
    /// non-boolean value.
    pub fn flag(&self, name: &str) -> Result<bool, ArgAccessError> {
        match self.require(name)? {
            ParamValue::Bool(v) => Ok(*v),
            other => Err(wrong_kind(name, "a boolean", other)),
        }
    }

    /// Fetch a text binding.
    ///
    /// # Errors
    ///
    /// Returns [`ArgAccessError`] when the name is unbound or holds a
    /// non-text value.
    pub fn text(&self, name: &str) -> Result<&str, ArgAccessError> {
        match self.require(name)? {
            ParamValue::Str(v) => Ok(v),
            other => Err(wrong_kind(name, "text", other)),
        }
    }

    /// Iterate the bindings in signature order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Number of bound arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no arguments are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn require(&self, name: &str) -> Result<&ParamValue, ArgAccessError> {
        self.get(name).ok_or_else(|| ArgAccessError::Missing {
            name: name.to_owned(),
        })
    }
}

impl fmt::Display for CaseArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, (name, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name} = {value}")?;
        }
        f.write_str(")")
    }
}

fn wrong_kind(name: &str, expected: &'static str, actual: &ParamValue) -> ArgAccessError {
    ArgAccessError::WrongKind {
        name: name.to_owned(),
        expected,
        actual: actual.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CaseArgs {
        CaseArgs::from_bindings(vec![
            ("a".to_owned(), ParamValue::Int(1)),
            ("label".to_owned(), ParamValue::Str("fast".to_owned())),
        ])
    }

    #[test]
    fn typed_access_matches_bound_kind() {
        let args = sample();
        assert_eq!(args.int("a"), Ok(1));
        assert_eq!(args.text("label"), Ok("fast"));
    }

    #[test]
    fn missing_name_is_reported() {
        let error = match sample().int("b") {
            Err(e) => e,
            Ok(v) => panic!("unexpected binding {v}"),
        };
        assert_eq!(error.to_string(), "no argument named 'b' is bound for this case");
    }

    #[test]
    fn kind_mismatch_names_the_actual_value() {
        let error = match sample().flag("a") {
            Err(e) => e,
            Ok(v) => panic!("unexpected binding {v}"),
        };
        assert_eq!(error.to_string(), "argument 'a' holds 1, not a boolean");
    }

    #[test]
    fn displays_bindings_in_order() {
        assert_eq!(sample().to_string(), "(a = 1, label = fast)");
    }
}
