//! The template record: the single declared test body that expansion clones
//! into many cases.

use std::collections::BTreeMap;
use std::fmt;

use crate::args::CaseArgs;
use crate::signature::Signature;
use crate::state::TemplateState;

/// Function pointer executed by the bare template and by every case cloned
/// from it. Cases call this pointer directly, so a failing assertion points
/// at the template body with no wrapper frame in between.
pub type TemplateFn = fn(&CaseArgs);

/// A declared test template: name, formal signature, custom attributes, and
/// the body to run.
///
/// # Examples
///
/// ```
/// use casewise::{CaseArgs, ParamSpec, Signature, Template};
///
/// fn body(_args: &CaseArgs) {}
///
/// let template = Template::new(
///     "test_sum",
///     Signature::new(vec![ParamSpec::required("a")]),
///     body,
/// );
/// assert_eq!(template.name(), "test_sum");
/// ```
#[derive(Clone)]
pub struct Template {
    name: String,
    signature: Signature,
    attributes: BTreeMap<String, String>,
    run: TemplateFn,
}

impl Template {
    /// Declare a template.
    #[must_use]
    pub fn new(name: impl Into<String>, signature: Signature, run: TemplateFn) -> Self {
        Self {
            name: name.into(),
            signature,
            attributes: BTreeMap::new(),
            run,
        }
    }

    /// Attach a custom attribute; attributes are copied onto every case.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The template's display name, used as the base of every case name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The formal signature captured at declaration.
    #[must_use]
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The custom attributes attached to the template.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// The template body.
    #[must_use]
    pub fn handler(&self) -> TemplateFn {
        self.run
    }

    /// Start a parametrization stack for this template.
    #[must_use]
    pub fn parametrize(self) -> crate::parametrize::CaseBuilder {
        crate::parametrize::CaseBuilder::new(TemplateState::Unparametrized(self))
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}
