//! Parameter value vocabulary shared by declarations and materialized cases.

use std::fmt;

/// A single parameter value carried from a declaration into a case binding.
///
/// Values render through [`fmt::Display`] when case identifiers are built, so
/// the variants cover the kinds of data that read well inside a bracketed
/// case name.
///
/// # Examples
///
/// ```
/// use casewise_params::ParamValue;
///
/// let value = ParamValue::from("fast");
/// assert_eq!(value.to_string(), "fast");
/// assert_eq!(ParamValue::from(2.5).to_string(), "2.5");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Signed integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Text value.
    Str(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_bare_values() {
        assert_eq!(ParamValue::from(42).to_string(), "42");
        assert_eq!(ParamValue::from(true).to_string(), "true");
        assert_eq!(ParamValue::from("abc").to_string(), "abc");
    }

    #[test]
    fn renders_floats_with_decimal_point() {
        assert_eq!(ParamValue::from(0.5).to_string(), "0.5");
    }
}
