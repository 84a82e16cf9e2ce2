//! Integration coverage for the public declaration-parsing and naming surface.
#![expect(
    clippy::expect_used,
    reason = "test assertions surface failures directly"
)]

use casewise_params::{CaseNamer, DeclarationError, ParamDeclaration, ParamValue, values};
use rstest::rstest;

#[test]
fn parses_a_two_name_declaration() {
    let declaration =
        ParamDeclaration::parse("a,b", values![(1, 2), (3, 4)]).expect("declaration parses");
    assert_eq!(declaration.names(), ["a", "b"]);
    assert_eq!(declaration.row_count(), 2);
}

#[rstest]
#[case(values![(1, 2, 3)], 0, 3)]
#[case(values![(1, 2), (1, 2, 3, 4)], 1, 4)]
fn arity_errors_carry_the_offending_index(
    #[case] rows: Vec<casewise_params::ValueRow>,
    #[case] index: usize,
    #[case] actual: usize,
) {
    let error = ParamDeclaration::parse("a,b", rows).expect_err("row arity differs");
    match error {
        DeclarationError::ArityMismatch {
            index: at,
            expected,
            actual: got,
            ..
        } => {
            assert_eq!(at, index);
            assert_eq!(expected, 2);
            assert_eq!(got, actual);
        }
        other => panic!("expected arity mismatch, got {other}"),
    }
}

#[test]
fn scalar_rows_only_suit_single_name_declarations() {
    ParamDeclaration::parse("a", values!["x", "y"]).expect("scalars wrap to one-element rows");
    let error = ParamDeclaration::parse("a,b", values!["xy"]).expect_err("two names need a tuple");
    assert!(matches!(error, DeclarationError::ArityMismatch { .. }));
}

#[test]
fn namer_issues_stable_ids_for_distinct_values() {
    let mut namer = CaseNamer::new();
    assert_eq!(namer.resolve(&[ParamValue::Int(1), ParamValue::Int(2)]), "1-2");
    assert_eq!(namer.resolve(&[ParamValue::Int(3), ParamValue::Int(4)]), "3-4");
}

#[test]
fn namer_disambiguates_repeated_renderings_in_first_seen_order() {
    let mut namer = CaseNamer::new();
    let row = [ParamValue::Str("1".to_owned()), ParamValue::Int(1)];
    assert_eq!(namer.resolve(&row), "1-1");
    assert_eq!(namer.resolve(&row), "1-1:1");
    assert_eq!(namer.resolve(&row), "1-1:2");
}
