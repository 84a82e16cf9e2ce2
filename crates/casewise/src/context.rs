//! Per-template accumulation of stacked parameter sets.

use std::collections::BTreeSet;

use casewise_params::ParamDeclaration;

use crate::errors::ExpansionError;
use crate::template::Template;

/// The running state of one template while its parameter sets accumulate.
///
/// Created when the first parametrize modifier reaches the template and
/// mutated by each subsequent one. The context holds the template, the
/// ordered declarations seen so far, and the set of argument names already
/// claimed; the explicit build call ends accumulation and consumes it.
#[derive(Debug, Clone)]
pub struct AccumulationContext {
    template: Template,
    declarations: Vec<ParamDeclaration>,
    claimed: BTreeSet<String>,
}

impl AccumulationContext {
    pub(crate) fn new(template: Template) -> Self {
        Self {
            template,
            declarations: Vec::new(),
            claimed: BTreeSet::new(),
        }
    }

    /// Fold one declaration into the stack.
    ///
    /// Names must be disjoint from every previously accumulated declaration
    /// and must all exist in the template's formal signature; both checks
    /// report the template's name and signature, since the mismatch is in the
    /// user's declaration.
    pub(crate) fn accumulate(
        &mut self,
        declaration: ParamDeclaration,
    ) -> Result<(), ExpansionError> {
        let reused: Vec<String> = declaration
            .names()
            .iter()
            .filter(|name| self.claimed.contains(*name))
            .cloned()
            .collect();
        if !reused.is_empty() {
            return Err(ExpansionError::ArgumentNamesReused {
                names: reused,
                template: self.template.name().to_owned(),
                signature: self.template.signature().to_string(),
            });
        }

        let unexpected: Vec<String> = declaration
            .names()
            .iter()
            .filter(|name| !self.template.signature().contains(name))
            .cloned()
            .collect();
        if !unexpected.is_empty() {
            return Err(ExpansionError::UnexpectedArguments {
                names: unexpected,
                template: self.template.name().to_owned(),
                signature: self.template.signature().to_string(),
            });
        }

        self.claimed
            .extend(declaration.names().iter().cloned());
        self.declarations.push(declaration);
        Ok(())
    }

    /// The template being parametrized.
    #[must_use]
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// The declarations accumulated so far, in application order.
    #[must_use]
    pub fn declarations(&self) -> &[ParamDeclaration] {
        &self.declarations
    }

    pub(crate) fn into_parts(self) -> (Template, Vec<ParamDeclaration>) {
        (self.template, self.declarations)
    }
}

#[cfg(test)]
mod tests {
    use casewise_params::values;

    use super::*;
    use crate::args::CaseArgs;
    use crate::signature::{ParamSpec, Signature};

    fn noop(_args: &CaseArgs) {}

    fn template_ab() -> Template {
        Template::new(
            "test_sum",
            Signature::new(vec![ParamSpec::required("a"), ParamSpec::required("b")]),
            noop,
        )
    }

    fn declaration(names: &str, rows: Vec<casewise_params::ValueRow>) -> ParamDeclaration {
        ParamDeclaration::parse(names, rows).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn accumulates_disjoint_declarations() {
        let mut context = AccumulationContext::new(template_ab());
        context
            .accumulate(declaration("a", values![1, 2]))
            .unwrap_or_else(|e| panic!("{e}"));
        context
            .accumulate(declaration("b", values![3]))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(context.declarations().len(), 2);
    }

    #[test]
    fn rejects_reclaimed_names() {
        let mut context = AccumulationContext::new(template_ab());
        context
            .accumulate(declaration("a,b", values![(1, 2)]))
            .unwrap_or_else(|e| panic!("{e}"));
        let error = match context.accumulate(declaration("b", values![3])) {
            Err(e) => e,
            Ok(()) => panic!("expected reuse error"),
        };
        assert!(matches!(
            error,
            ExpansionError::ArgumentNamesReused { ref names, .. } if names == &["b".to_owned()]
        ));
    }

    #[test]
    fn rejects_names_outside_the_signature() {
        let template = Template::new(
            "f1",
            Signature::new(vec![ParamSpec::required("a")]),
            noop,
        );
        let mut context = AccumulationContext::new(template);
        let error = match context.accumulate(declaration("b", values![1, 2])) {
            Err(e) => e,
            Ok(()) => panic!("expected unexpected-argument error"),
        };
        assert_eq!(
            error.to_string(),
            "unexpected argument(s) [\"b\"] for template f1(a)"
        );
    }
}
