//! The template lifecycle: bare, accumulating, materialized.

use std::fmt;

use crate::args::CaseArgs;
use crate::context::AccumulationContext;
use crate::errors::ExpansionError;
use crate::factory::CaseFactory;
use crate::materialize::materialize;
use crate::namespace::CaseNamespace;
use crate::template::Template;

/// Terminal marker left bound to a template's base name after expansion.
///
/// Formats as `name[...]` to signal that the identifier has been replaced by
/// concrete cases and must not be used directly.
///
/// # Examples
///
/// ```
/// use casewise::ExpandedTemplate;
///
/// let marker = ExpandedTemplate::new("test_sum", 4);
/// assert_eq!(marker.to_string(), "test_sum[...]");
/// assert_eq!(marker.case_count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedTemplate {
    name: String,
    case_count: usize,
}

impl ExpandedTemplate {
    /// Create a marker for a template expanded into `case_count` cases.
    #[must_use]
    pub fn new(name: impl Into<String>, case_count: usize) -> Self {
        Self {
            name: name.into(),
            case_count,
        }
    }

    /// The original template's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many cases the template expanded into.
    #[must_use]
    pub fn case_count(&self) -> usize {
        self.case_count
    }
}

impl fmt::Display for ExpandedTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[...]", self.name)
    }
}

/// The lifecycle state of one template under parametrization.
///
/// Transitions only move forward: `Unparametrized` when the template has not
/// met a modifier yet, `Accumulating` while parameter sets stack up, and
/// `Materialized` once `build` has sealed the stack and bound the cases.
/// Every transition consumes the state, so a stale handle cannot be replayed
/// into a second expansion.
#[derive(Debug)]
pub enum TemplateState {
    /// Bare template, not yet seen by any modifier.
    Unparametrized(Template),
    /// Parameter sets are accumulating; the template is guarded.
    Accumulating(AccumulationContext),
    /// Expansion complete; only the marker remains.
    Materialized(ExpandedTemplate),
}

impl TemplateState {
    /// Seal the stack: combine every accumulated parameter set, materialize
    /// one case per combination into `namespace`, and retire the base name.
    ///
    /// # Errors
    ///
    /// [`ExpansionError::NoParameterSets`] when nothing was accumulated,
    /// [`ExpansionError::AlreadyExpanded`] when the stack was sealed before,
    /// and any materialization failure such as
    /// [`ExpansionError::DuplicateCaseName`].
    pub fn build(
        self,
        factory: &dyn CaseFactory,
        namespace: &mut CaseNamespace,
    ) -> Result<ExpandedTemplate, ExpansionError> {
        match self {
            Self::Unparametrized(template) => Err(ExpansionError::NoParameterSets {
                template: template.name().to_owned(),
                signature: template.signature().to_string(),
            }),
            Self::Accumulating(context) => materialize(context, factory, namespace),
            Self::Materialized(marker) => Err(ExpansionError::AlreadyExpanded {
                template: marker.name().to_owned(),
            }),
        }
    }

    /// Invoke the template as a callable.
    ///
    /// Only a bare template may run. A guarded template trips
    /// [`ExpansionError::PrematureExecution`]; a materialized one trips
    /// [`ExpansionError::TemplateExpanded`], since its cases carry the
    /// runnable bindings now.
    ///
    /// # Errors
    ///
    /// See above; both failures are deliberate trip-wires, not recoverable
    /// states.
    pub fn invoke(&self, args: &CaseArgs) -> Result<(), ExpansionError> {
        match self {
            Self::Unparametrized(template) => {
                (template.handler())(args);
                Ok(())
            }
            Self::Accumulating(context) => Err(ExpansionError::PrematureExecution {
                template: context.template().name().to_owned(),
            }),
            Self::Materialized(marker) => Err(ExpansionError::TemplateExpanded {
                template: marker.name().to_owned(),
                case_count: marker.case_count(),
            }),
        }
    }

    /// The display name of the underlying template.
    #[must_use]
    pub fn template_name(&self) -> &str {
        match self {
            Self::Unparametrized(template) => template.name(),
            Self::Accumulating(context) => context.template().name(),
            Self::Materialized(marker) => marker.name(),
        }
    }
}

impl From<Template> for TemplateState {
    fn from(template: Template) -> Self {
        Self::Unparametrized(template)
    }
}
