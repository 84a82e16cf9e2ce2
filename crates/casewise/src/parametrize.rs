//! The parametrization entry point and the fluent stack builder.

use casewise_params::{ArgNames, DeclarationError, ParamDeclaration, ValueRow};

use crate::context::AccumulationContext;
use crate::errors::ExpansionError;
use crate::factory::{BindingCaseFactory, CaseFactory};
use crate::namespace::CaseNamespace;
use crate::state::{ExpandedTemplate, TemplateState};

/// Declare one parameter set: a modifier that can be applied to a template
/// or to an in-progress accumulation.
///
/// Parsing and per-declaration validation happen here, at declaration time;
/// cross-declaration checks run when the modifier is applied.
///
/// # Errors
///
/// Returns [`DeclarationError`] when the names or rows fail validation.
///
/// # Examples
///
/// ```
/// use casewise::{parametrize, values};
///
/// let modifier = parametrize("a,b", values![(1, 2), (3, 4)])?;
/// # let _ = modifier;
/// # Ok::<(), casewise::DeclarationError>(())
/// ```
pub fn parametrize(
    names: impl Into<ArgNames>,
    rows: Vec<ValueRow>,
) -> Result<Parametrize, DeclarationError> {
    Ok(Parametrize {
        declaration: ParamDeclaration::parse(names, rows)?,
    })
}

/// One parametrization modifier, holding a validated declaration.
#[derive(Debug, Clone)]
pub struct Parametrize {
    declaration: ParamDeclaration,
}

impl Parametrize {
    /// Apply the modifier to a template or an in-progress accumulation.
    ///
    /// The first application starts the accumulation; later applications
    /// continue it. The stack stays open until sealed with
    /// [`TemplateState::build`].
    ///
    /// # Errors
    ///
    /// Returns [`ExpansionError::ArgumentNamesReused`] or
    /// [`ExpansionError::UnexpectedArguments`] when the declaration clashes
    /// with the stack, and [`ExpansionError::IncompleteParametrization`]
    /// when applied to an already-materialized expansion.
    pub fn apply(
        self,
        target: impl Into<TemplateState>,
    ) -> Result<TemplateState, ExpansionError> {
        match target.into() {
            TemplateState::Unparametrized(template) => {
                let mut context = AccumulationContext::new(template);
                context.accumulate(self.declaration)?;
                Ok(TemplateState::Accumulating(context))
            }
            TemplateState::Accumulating(mut context) => {
                context.accumulate(self.declaration)?;
                Ok(TemplateState::Accumulating(context))
            }
            TemplateState::Materialized(marker) => {
                Err(ExpansionError::IncompleteParametrization {
                    template: marker.name().to_owned(),
                })
            }
        }
    }
}

/// Fluent sugar over the modifier protocol: declare all parameter sets, then
/// build.
///
/// # Examples
///
/// ```
/// use casewise::{CaseNamespace, ParamSpec, Signature, Template, values};
///
/// fn body(args: &casewise::CaseArgs) {
///     assert!(args.int("a").is_ok());
/// }
///
/// let template = Template::new(
///     "test_sum",
///     Signature::new(vec![ParamSpec::required("a"), ParamSpec::required("b")]),
///     body,
/// );
///
/// let mut namespace = CaseNamespace::new();
/// let marker = template
///     .parametrize()
///     .params("a", values![1, 2])?
///     .params("b", values![3, 4])?
///     .build(&mut namespace)?;
///
/// assert_eq!(marker.case_count(), 4);
/// for case in namespace.cases() {
///     case.run();
/// }
/// # Ok::<(), casewise::ExpansionError>(())
/// ```
#[derive(Debug)]
pub struct CaseBuilder {
    state: TemplateState,
}

impl CaseBuilder {
    pub(crate) fn new(state: TemplateState) -> Self {
        Self { state }
    }

    /// Declare one more parameter set on the stack.
    ///
    /// # Errors
    ///
    /// Returns [`ExpansionError`] for declaration or accumulation failures;
    /// see [`Parametrize::apply`].
    pub fn params(
        self,
        names: impl Into<ArgNames>,
        rows: Vec<ValueRow>,
    ) -> Result<Self, ExpansionError> {
        let modifier = parametrize(names, rows).map_err(ExpansionError::from)?;
        Ok(Self {
            state: modifier.apply(self.state)?,
        })
    }

    /// Seal the stack with the default binding factory.
    ///
    /// # Errors
    ///
    /// See [`TemplateState::build`].
    pub fn build(
        self,
        namespace: &mut CaseNamespace,
    ) -> Result<ExpandedTemplate, ExpansionError> {
        self.build_with(&BindingCaseFactory, namespace)
    }

    /// Seal the stack, binding cases through a caller-supplied factory.
    ///
    /// # Errors
    ///
    /// See [`TemplateState::build`].
    pub fn build_with(
        self,
        factory: &dyn CaseFactory,
        namespace: &mut CaseNamespace,
    ) -> Result<ExpandedTemplate, ExpansionError> {
        self.state.build(factory, namespace)
    }
}

impl From<CaseBuilder> for TemplateState {
    fn from(builder: CaseBuilder) -> Self {
        builder.state
    }
}
