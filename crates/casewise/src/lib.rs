//! Value-parametrized test-case expansion.
//!
//! A test template is declared once, parameter sets are stacked onto it, and
//! sealing the stack expands the template into one independently named case
//! per element of the cross-product of all declared sets. The produced cases
//! land in a caller-owned [`CaseNamespace`], ready to be handed to whatever
//! runner discovers and executes them; this crate never runs tests itself.
//!
//! Every structural error — repeated argument names, rows of the wrong
//! arity, names missing from the template's signature, case-name collisions
//! — surfaces synchronously while the stack is declared or sealed, before
//! any generated case could run.
//!
//! # Examples
//!
//! ```
//! use casewise::{CaseArgs, CaseNamespace, ParamSpec, Signature, Template, values};
//!
//! fn body(args: &CaseArgs) {
//!     let a = args.int("a").unwrap_or_default();
//!     let b = args.int("b").unwrap_or_default();
//!     assert!(a < b);
//! }
//!
//! let template = Template::new(
//!     "test_ordering",
//!     Signature::new(vec![ParamSpec::required("a"), ParamSpec::required("b")]),
//!     body,
//! );
//!
//! let mut namespace = CaseNamespace::new();
//! template
//!     .parametrize()
//!     .params("a,b", values![(1, 2), (3, 4)])?
//!     .build(&mut namespace)?;
//!
//! let names: Vec<&str> = namespace.cases().map(|case| case.name()).collect();
//! assert_eq!(names, ["test_ordering[1-2]", "test_ordering[3-4]"]);
//! # Ok::<(), casewise::ExpansionError>(())
//! ```

mod args;
mod combine;
mod context;
mod errors;
mod factory;
mod materialize;
mod namespace;
mod parametrize;
mod signature;
mod state;
mod template;

#[cfg(feature = "diagnostics")]
pub mod diagnostics;

pub use casewise_params::{
    ArgNames, CaseNamer, DeclarationError, ParamDeclaration, ParamValue, ValueRow, case_name,
    values,
};

pub use args::{ArgAccessError, CaseArgs};
pub use combine::{Combination, Combinations};
pub use context::AccumulationContext;
pub use errors::ExpansionError;
pub use factory::{BindingCaseFactory, Case, CaseFactory};
pub use materialize::materialize;
pub use namespace::{CaseNamespace, NamespaceEntry};
pub use parametrize::{CaseBuilder, Parametrize, parametrize};
pub use signature::{ParamSpec, Signature};
pub use state::{ExpandedTemplate, TemplateState};
pub use template::{Template, TemplateFn};
