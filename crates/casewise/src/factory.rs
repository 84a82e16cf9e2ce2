//! The case-factory seam and the default binding factory.
//!
//! The factory is the collaborator that turns a template plus one
//! combination into a runnable case. The default implementation binds the
//! combination's values over the template's remaining defaults; alternative
//! implementations can decorate cases for a particular harness.

use std::collections::BTreeMap;
use std::fmt;

use crate::args::CaseArgs;
use crate::combine::Combination;
use crate::template::{Template, TemplateFn};

/// One materialized, independently named and independently runnable case.
pub struct Case {
    name: String,
    args: CaseArgs,
    attributes: BTreeMap<String, String>,
    run: TemplateFn,
}

impl Case {
    /// Assemble a case from its parts; factories call this.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        args: CaseArgs,
        attributes: BTreeMap<String, String>,
        run: TemplateFn,
    ) -> Self {
        Self {
            name: name.into(),
            args,
            attributes,
            run,
        }
    }

    /// The full case name, `base[case-id]`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The argument bindings this case runs with. Only this case's values
    /// are visible here, merged over the template defaults.
    #[must_use]
    pub fn args(&self) -> &CaseArgs {
        &self.args
    }

    /// The custom attributes copied from the template.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Run the case: calls the template body directly with the bound
    /// arguments, adding no wrapper frame.
    pub fn run(&self) {
        (self.run)(&self.args);
    }
}

impl fmt::Debug for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

/// Contract for binding one combination into a runnable case.
///
/// Implementations must merge the combination's values over the template's
/// remaining signature defaults (the combination wins), preserve every
/// custom attribute of the template, report `name` as the case's display
/// name, and hand the template body through unchanged so failures point at
/// the original code.
pub trait CaseFactory {
    /// Produce the case for one combination.
    fn bind(&self, template: &Template, name: &str, combination: &Combination) -> Case;
}

/// The default factory: pure value binding, no harness decoration.
#[derive(Debug, Default, Clone, Copy)]
pub struct BindingCaseFactory;

impl CaseFactory for BindingCaseFactory {
    fn bind(&self, template: &Template, name: &str, combination: &Combination) -> Case {
        let mut bindings = Vec::with_capacity(template.signature().len());
        for spec in template.signature().params() {
            let value = combination.get(spec.name()).or(spec.default()).cloned();
            if let Some(value) = value {
                bindings.push((spec.name().to_owned(), value));
            }
        }
        Case::new(
            name,
            CaseArgs::from_bindings(bindings),
            template.attributes().clone(),
            template.handler(),
        )
    }
}
