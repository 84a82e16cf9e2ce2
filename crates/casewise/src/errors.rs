//! Error types surfaced by the expansion runtime.
//!
//! Every failure is synchronous and fatal: it is raised while the stack is
//! being declared or sealed, never deferred to when a case eventually runs.
//! Messages name the template and its formal signature so a failure is
//! diagnosable without re-reading the expansion logic.

use thiserror::Error;

pub use casewise_params::DeclarationError;

/// Errors raised while accumulating parameter sets or materializing cases.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ExpansionError {
    /// A declaration failed its own validation before accumulation started.
    #[error(transparent)]
    Declaration(#[from] DeclarationError),
    /// Two declarations in the same stack claimed the same argument name.
    #[error("argument name(s) reused for template {template}{signature}: {names:?}")]
    ArgumentNamesReused {
        /// The overlapping names.
        names: Vec<String>,
        /// The template's display name.
        template: String,
        /// The template's rendered formal signature.
        signature: String,
    },
    /// A declaration claimed a name absent from the template's signature.
    #[error("unexpected argument(s) {names:?} for template {template}{signature}")]
    UnexpectedArguments {
        /// The names with no matching formal parameter.
        names: Vec<String>,
        /// The template's display name.
        template: String,
        /// The template's rendered formal signature.
        signature: String,
    },
    /// The stack was sealed without a single accumulated parameter set.
    #[error("no parameter sets declared for template {template}{signature}")]
    NoParameterSets {
        /// The template's display name.
        template: String,
        /// The template's rendered formal signature.
        signature: String,
    },
    /// A generated case name collided with an existing namespace binding.
    #[error("case '{name}' is already defined in the target namespace")]
    DuplicateCaseName {
        /// The colliding full case name.
        name: String,
    },
    /// The template was invoked while its parametrization was still open.
    #[error("attempt to execute template '{template}' before it was parametrized")]
    PrematureExecution {
        /// The template's display name.
        template: String,
    },
    /// A parametrize modifier was applied to an already-expanded template.
    #[error(
        "parametrization of template '{template}' cannot be resumed: \
         its cases have already been materialized"
    )]
    IncompleteParametrization {
        /// The template's display name.
        template: String,
    },
    /// The stack was sealed a second time.
    #[error("template '{template}' has already been expanded; build may only run once")]
    AlreadyExpanded {
        /// The template's display name.
        template: String,
    },
    /// The terminal marker was invoked as if it were still a template.
    #[error(
        "template '{template}' was replaced by {case_count} generated case(s); \
         invoke one of the cases instead"
    )]
    TemplateExpanded {
        /// The template's display name.
        template: String,
        /// How many cases replaced it.
        case_count: usize,
    },
}
