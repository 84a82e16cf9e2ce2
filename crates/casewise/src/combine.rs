//! Cross-product combination of accumulated parameter sets.

use casewise_params::{ParamDeclaration, ParamValue};

/// One fully-resolved set of argument bindings: the unit that becomes one
/// concrete case.
///
/// Bindings appear in declaration-union order: every name of the first
/// accumulated declaration, then every name of the second, and so on. That
/// order drives case-identifier rendering.
#[derive(Debug, Clone, PartialEq, derive_more::Deref, derive_more::From)]
pub struct Combination {
    bindings: Vec<(String, ParamValue)>,
}

impl Combination {
    /// Look up a bound value by argument name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value)
    }

    /// Iterate the bound values in declaration-union order.
    pub fn values(&self) -> impl Iterator<Item = &ParamValue> {
        self.bindings.iter().map(|(_, value)| value)
    }
}

/// Lazy iterator over the Cartesian product of the accumulated declarations.
///
/// The first-accumulated declaration varies slowest and the last varies
/// fastest, so two expansions of the same stack always yield the same case
/// order. Cloning the iterator restarts nothing; a fresh one is cheap to
/// build from the same declarations.
///
/// # Examples
///
/// ```
/// use casewise::{Combinations, ParamDeclaration, values};
///
/// let first = ParamDeclaration::parse("a", values![1, 2])?;
/// let second = ParamDeclaration::parse("b", values![3, 4])?;
/// let declarations = [first, second];
///
/// let ids: Vec<String> = Combinations::new(&declarations)
///     .map(|combination| {
///         combination
///             .values()
///             .map(ToString::to_string)
///             .collect::<Vec<_>>()
///             .join("-")
///     })
///     .collect();
/// assert_eq!(ids, ["1-3", "1-4", "2-3", "2-4"]);
/// # Ok::<(), casewise::DeclarationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    declarations: &'a [ParamDeclaration],
    indices: Vec<usize>,
    remaining: usize,
}

impl<'a> Combinations<'a> {
    /// Build the product iterator over a slice of declarations.
    ///
    /// An empty declaration list, or any declaration with zero rows, yields
    /// an empty product.
    #[must_use]
    pub fn new(declarations: &'a [ParamDeclaration]) -> Self {
        let remaining = if declarations.is_empty() {
            0
        } else {
            declarations
                .iter()
                .map(ParamDeclaration::row_count)
                .product()
        };
        Self {
            declarations,
            indices: vec![0; declarations.len()],
            remaining,
        }
    }

    fn current(&self) -> Option<Combination> {
        let mut bindings = Vec::new();
        for (declaration, &index) in self.declarations.iter().zip(&self.indices) {
            let row = declaration.rows().get(index)?;
            for (name, value) in declaration.names().iter().zip(row) {
                bindings.push((name.clone(), value.clone()));
            }
        }
        Some(Combination::from(bindings))
    }

    fn advance(&mut self) {
        for position in (0..self.declarations.len()).rev() {
            let Some(declaration) = self.declarations.get(position) else {
                return;
            };
            let Some(index) = self.indices.get_mut(position) else {
                return;
            };
            *index += 1;
            if *index < declaration.row_count() {
                return;
            }
            *index = 0;
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let combination = self.current()?;
        self.remaining -= 1;
        self.advance();
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations<'_> {}

#[cfg(test)]
mod tests {
    use casewise_params::values;

    use super::*;

    fn declaration(names: &str, rows: Vec<casewise_params::ValueRow>) -> ParamDeclaration {
        ParamDeclaration::parse(names, rows).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn product_count_is_multiplicative() {
        let declarations = [
            declaration("a", values![1, 2, 3]),
            declaration("b,c", values![(4, 5), (6, 7)]),
        ];
        let combinations = Combinations::new(&declarations);
        assert_eq!(combinations.len(), 6);
        assert_eq!(combinations.count(), 6);
    }

    #[test]
    fn first_declaration_varies_slowest() {
        let declarations = [
            declaration("a", values![1, 2]),
            declaration("b", values![10, 20]),
        ];
        let pairs: Vec<(i64, i64)> = Combinations::new(&declarations)
            .map(|combination| {
                let a = match combination.get("a") {
                    Some(ParamValue::Int(v)) => *v,
                    other => panic!("unexpected binding {other:?}"),
                };
                let b = match combination.get("b") {
                    Some(ParamValue::Int(v)) => *v,
                    other => panic!("unexpected binding {other:?}"),
                };
                (a, b)
            })
            .collect();
        assert_eq!(pairs, [(1, 10), (1, 20), (2, 10), (2, 20)]);
    }

    #[test]
    fn empty_row_list_produces_no_combinations() {
        let declarations = [declaration("a", values![1]), declaration("b", vec![])];
        assert_eq!(Combinations::new(&declarations).count(), 0);
    }

    #[test]
    fn no_declarations_produce_no_combinations() {
        assert_eq!(Combinations::new(&[]).count(), 0);
    }

    #[test]
    fn bindings_keep_declaration_union_order() {
        let declarations = [
            declaration("b", values![1]),
            declaration("a", values![2]),
        ];
        let combination = Combinations::new(&declarations)
            .next()
            .unwrap_or_else(|| panic!("expected one combination"));
        let names: Vec<&str> = combination.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }
}
