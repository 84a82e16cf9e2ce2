//! Formal-parameter signatures for templates.
//!
//! A signature is explicit data supplied when the template is declared; it is
//! the authority for which argument names a parametrization may claim and for
//! the default values merged into each materialized case.

use std::fmt;

use casewise_params::ParamValue;

/// One formal parameter of a template: a name and an optional default.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    name: String,
    default: Option<ParamValue>,
}

impl ParamSpec {
    /// A parameter with no default; every case must bind it for the template
    /// to see a value.
    #[must_use]
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// A parameter with a default that applies when no declaration claims it.
    #[must_use]
    pub fn defaulted(name: impl Into<String>, default: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default value, if any.
    #[must_use]
    pub fn default(&self) -> Option<&ParamValue> {
        self.default.as_ref()
    }
}

/// The ordered formal-parameter list of a template.
///
/// # Examples
///
/// ```
/// use casewise::{ParamSpec, Signature};
///
/// let signature = Signature::new(vec![
///     ParamSpec::required("a"),
///     ParamSpec::defaulted("b", 5),
/// ]);
/// assert!(signature.contains("a"));
/// assert_eq!(signature.to_string(), "(a, b = 5)");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signature {
    params: Vec<ParamSpec>,
}

impl Signature {
    /// Build a signature from an ordered parameter list.
    #[must_use]
    pub fn new(params: Vec<ParamSpec>) -> Self {
        Self { params }
    }

    /// The ordered parameters.
    #[must_use]
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Whether a parameter with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|param| param.name() == name)
    }

    /// Number of formal parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the signature has no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, param) in self.params.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(param.name())?;
            if let Some(default) = param.default() {
                write!(f, " = {default}")?;
            }
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_parameter_list_with_defaults() {
        let signature = Signature::new(vec![
            ParamSpec::required("a"),
            ParamSpec::defaulted("b", "slow"),
        ]);
        assert_eq!(signature.to_string(), "(a, b = slow)");
    }

    #[test]
    fn empty_signature_renders_bare_parens() {
        assert_eq!(Signature::default().to_string(), "()");
    }
}
