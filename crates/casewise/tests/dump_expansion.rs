//! Diagnostics feature: dumping an expanded namespace as JSON.
#![expect(
    clippy::expect_used,
    reason = "test assertions surface failures directly"
)]

use casewise::diagnostics::dump_namespace;
use casewise::{CaseArgs, CaseNamespace, ParamSpec, Signature, Template, values};

fn noop(_args: &CaseArgs) {}

#[test]
fn dump_lists_cases_and_markers_in_binding_order() {
    let mut namespace = CaseNamespace::new();
    let template = Template::new(
        "test_flags",
        Signature::new(vec![ParamSpec::required("x")]),
        noop,
    )
    .with_attribute("suite", "smoke");
    template
        .parametrize()
        .params("x", values![true, false])
        .and_then(|builder| builder.build(&mut namespace))
        .expect("expansion succeeds");

    let dump = dump_namespace(&namespace).expect("serialization succeeds");
    let parsed: serde_json::Value = serde_json::from_str(&dump).expect("dump is valid JSON");

    let cases = parsed
        .get("cases")
        .and_then(serde_json::Value::as_array)
        .expect("dump has a cases array");
    assert_eq!(cases.len(), 2);
    assert_eq!(
        cases
            .first()
            .and_then(|case| case.get("name"))
            .and_then(serde_json::Value::as_str),
        Some("test_flags[true]")
    );

    let expanded = parsed
        .get("expanded")
        .and_then(serde_json::Value::as_array)
        .expect("dump has an expanded array");
    assert_eq!(
        expanded
            .first()
            .and_then(|marker| marker.get("case_count"))
            .and_then(serde_json::Value::as_u64),
        Some(2)
    );
}
