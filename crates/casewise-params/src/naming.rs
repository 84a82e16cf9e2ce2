//! Case-identifier rendering and per-template collision handling.

use std::collections::HashSet;

use crate::value::ParamValue;

/// Resolves combination values into unique case identifiers.
///
/// One namer lives for the duration of one template's expansion. Values are
/// rendered through their display form, any literal `.` is replaced with `-`
/// so float-like values read unambiguously inside bracket notation, and the
/// rendered values are joined with `-`.
///
/// When two combinations render to the same joined string, the later one is
/// disambiguated with the first unused `:1`, `:2`, ... suffix. The suffixed
/// string is recorded as issued, so a third colliding combination probes past
/// the suffixes already handed out rather than restarting the count.
///
/// # Examples
///
/// ```
/// use casewise_params::{CaseNamer, ParamValue};
///
/// let mut namer = CaseNamer::new();
/// let values = [ParamValue::Int(1), ParamValue::Float(2.5)];
/// assert_eq!(namer.resolve(&values), "1-2-5");
/// assert_eq!(namer.resolve(&values), "1-2-5:1");
/// assert_eq!(namer.resolve(&values), "1-2-5:2");
/// ```
#[derive(Debug, Default)]
pub struct CaseNamer {
    issued: HashSet<String>,
}

impl CaseNamer {
    /// Create a namer with no identifiers issued yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the given values into the next unique case identifier.
    pub fn resolve<'a, I>(&mut self, values: I) -> String
    where
        I: IntoIterator<Item = &'a ParamValue>,
    {
        let joined = values
            .into_iter()
            .map(|value| value.to_string().replace('.', "-"))
            .collect::<Vec<_>>()
            .join("-");

        let mut candidate = joined.clone();
        let mut suffix = 1usize;
        while self.issued.contains(&candidate) {
            candidate = format!("{joined}:{suffix}");
            suffix += 1;
        }

        self.issued.insert(candidate.clone());
        candidate
    }
}

/// Format a full case name from a template base name and a case identifier.
///
/// # Examples
///
/// ```
/// use casewise_params::case_name;
///
/// assert_eq!(case_name("test_sum", "1-2"), "test_sum[1-2]");
/// ```
#[must_use]
pub fn case_name(base: &str, case_id: &str) -> String {
    format!("{base}[{case_id}]")
}
