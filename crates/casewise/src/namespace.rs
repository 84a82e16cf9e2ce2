//! The caller-owned namespace that expansion populates.

use crate::errors::ExpansionError;
use crate::factory::Case;
use crate::state::ExpandedTemplate;

/// One binding held by a [`CaseNamespace`].
#[derive(Debug)]
pub enum NamespaceEntry {
    /// A materialized case, bound under its full `base[case-id]` name.
    Case(Case),
    /// The terminal marker left under a template's base name after its
    /// expansion completed.
    Expanded(ExpandedTemplate),
}

/// An insertion-ordered map of names to cases and expansion markers.
///
/// The namespace is the explicit product of materialization: the caller owns
/// it, hands it to `build`, and afterwards registers the bound cases with
/// whatever runner it uses. Case names must be unique; binding a case under
/// a taken name is fatal. Rebinding a base name to its expansion marker
/// overwrites, which is how the template's own name is retired.
///
/// # Examples
///
/// ```
/// use casewise::CaseNamespace;
///
/// let namespace = CaseNamespace::new();
/// assert!(namespace.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CaseNamespace {
    entries: Vec<(String, NamespaceEntry)>,
}

impl CaseNamespace {
    /// Create an empty namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any entry is bound under the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(bound, _)| bound == name)
    }

    /// Look up an entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NamespaceEntry> {
        self.entries
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, entry)| entry)
    }

    /// Bind a case under its full name.
    ///
    /// # Errors
    ///
    /// Returns [`ExpansionError::DuplicateCaseName`] when the name is already
    /// bound, protecting generated cases from being shadowed by an unrelated
    /// definition.
    pub fn bind_case(&mut self, case: Case) -> Result<(), ExpansionError> {
        if self.contains(case.name()) {
            return Err(ExpansionError::DuplicateCaseName {
                name: case.name().to_owned(),
            });
        }
        self.entries
            .push((case.name().to_owned(), NamespaceEntry::Case(case)));
        Ok(())
    }

    /// Bind the expansion marker under the template's base name, overwriting
    /// any existing binding in place.
    pub fn bind_expanded(&mut self, marker: ExpandedTemplate) {
        let name = marker.name().to_owned();
        let replaced = self
            .entries
            .iter_mut()
            .find(|(bound, _)| *bound == name)
            .map(|(_, entry)| *entry = NamespaceEntry::Expanded(marker.clone()));
        if replaced.is_none() {
            self.entries.push((name, NamespaceEntry::Expanded(marker)));
        }
    }

    /// Iterate the materialized cases in binding order.
    pub fn cases(&self) -> impl Iterator<Item = &Case> {
        self.entries.iter().filter_map(|(_, entry)| match entry {
            NamespaceEntry::Case(case) => Some(case),
            NamespaceEntry::Expanded(_) => None,
        })
    }

    /// Iterate every bound name in binding order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of bindings, cases and markers included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the namespace holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CaseNamespace {
    type Item = &'a (String, NamespaceEntry);
    type IntoIter = std::slice::Iter<'a, (String, NamespaceEntry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
