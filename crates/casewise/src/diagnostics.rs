//! Diagnostics-only expansion reporting.
//!
//! Behind the `diagnostics` feature. Serializes the contents of a
//! [`CaseNamespace`] for consumption by external tooling, so a harness can
//! inspect which cases an expansion produced without running any of them.

use serde::Serialize;

use crate::namespace::{CaseNamespace, NamespaceEntry};

#[derive(Serialize)]
struct DumpedCase {
    name: String,
    args: Vec<(String, String)>,
    attributes: Vec<(String, String)>,
}

#[derive(Serialize)]
struct DumpedMarker {
    name: String,
    case_count: usize,
}

#[derive(Serialize)]
struct NamespaceDump {
    cases: Vec<DumpedCase>,
    expanded: Vec<DumpedMarker>,
}

/// Serialize the namespace to a JSON document.
///
/// Cases appear in binding order; argument values use their display form.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if serialization fails.
pub fn dump_namespace(namespace: &CaseNamespace) -> Result<String, serde_json::Error> {
    let mut cases = Vec::new();
    let mut expanded = Vec::new();

    for (name, entry) in namespace {
        match entry {
            NamespaceEntry::Case(case) => cases.push(DumpedCase {
                name: name.clone(),
                args: case
                    .args()
                    .iter()
                    .map(|(arg, value)| (arg.to_owned(), value.to_string()))
                    .collect(),
                attributes: case
                    .attributes()
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
            }),
            NamespaceEntry::Expanded(marker) => expanded.push(DumpedMarker {
                name: name.clone(),
                case_count: marker.case_count(),
            }),
        }
    }

    serde_json::to_string_pretty(&NamespaceDump { cases, expanded })
}
