//! Drives the combiner, the namer, and the case factory to populate a
//! namespace with one case per combination.

use casewise_params::{CaseNamer, case_name};

use crate::combine::Combinations;
use crate::context::AccumulationContext;
use crate::errors::ExpansionError;
use crate::factory::CaseFactory;
use crate::namespace::CaseNamespace;
use crate::state::ExpandedTemplate;

/// Materialize every combination of the sealed stack into `namespace`.
///
/// Cases are produced in product order: the first accumulated declaration
/// varies slowest. After the last case is bound, the template's base name is
/// rebound to the returned [`ExpandedTemplate`] marker.
///
/// There is no rollback: when a case fails to bind, earlier cases stay in
/// the namespace and the error surfaces immediately.
///
/// # Errors
///
/// Returns [`ExpansionError::DuplicateCaseName`] when a generated name is
/// already bound in `namespace`.
pub fn materialize(
    context: AccumulationContext,
    factory: &dyn CaseFactory,
    namespace: &mut CaseNamespace,
) -> Result<ExpandedTemplate, ExpansionError> {
    let (template, declarations) = context.into_parts();
    let mut namer = CaseNamer::new();
    let mut case_count = 0usize;

    for combination in Combinations::new(&declarations) {
        let case_id = namer.resolve(combination.values());
        let full_name = case_name(template.name(), &case_id);
        let case = factory.bind(&template, &full_name, &combination);
        namespace.bind_case(case)?;
        case_count += 1;
    }

    log::debug!(
        "expanded template '{}' into {case_count} case(s)",
        template.name()
    );

    let marker = ExpandedTemplate::new(template.name(), case_count);
    namespace.bind_expanded(marker.clone());
    Ok(marker)
}

#[cfg(test)]
mod tests {
    use casewise_params::values;

    use super::*;
    use crate::args::CaseArgs;
    use crate::factory::BindingCaseFactory;
    use crate::signature::{ParamSpec, Signature};
    use crate::template::Template;

    fn noop(_args: &CaseArgs) {}

    fn accumulated(names: &str, rows: Vec<casewise_params::ValueRow>) -> AccumulationContext {
        let template = Template::new(
            "test_method",
            Signature::new(vec![ParamSpec::required("a"), ParamSpec::required("b")]),
            noop,
        );
        let mut context = AccumulationContext::new(template);
        let declaration = casewise_params::ParamDeclaration::parse(names, rows)
            .unwrap_or_else(|e| panic!("{e}"));
        context
            .accumulate(declaration)
            .unwrap_or_else(|e| panic!("{e}"));
        context
    }

    #[test]
    fn binds_one_case_per_combination_and_retires_the_base_name() {
        let mut namespace = CaseNamespace::new();
        let marker = materialize(
            accumulated("a,b", values![(1, 2), (3, 4)]),
            &BindingCaseFactory,
            &mut namespace,
        )
        .unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(marker.case_count(), 2);
        let names: Vec<&str> = namespace.names().collect();
        assert_eq!(names, ["test_method[1-2]", "test_method[3-4]", "test_method"]);
        assert_eq!(marker.to_string(), "test_method[...]");
    }

    #[test]
    fn duplicate_case_name_leaves_earlier_cases_bound() {
        let mut namespace = CaseNamespace::new();
        materialize(
            accumulated("a,b", values![(1, 2)]),
            &BindingCaseFactory,
            &mut namespace,
        )
        .unwrap_or_else(|e| panic!("{e}"));

        let error = match materialize(
            accumulated("a,b", values![(5, 6), (1, 2)]),
            &BindingCaseFactory,
            &mut namespace,
        ) {
            Err(e) => e,
            Ok(marker) => panic!("unexpected expansion {marker}"),
        };
        assert_eq!(
            error.to_string(),
            "case 'test_method[1-2]' is already defined in the target namespace"
        );
        // the case bound before the collision is still there
        assert!(namespace.contains("test_method[5-6]"));
    }
}
