//! Normalization of heterogeneous entity references into plain names.
//!
//! Factory methods accept category, option, and item references as a bare
//! name, as an entity handle, or as a (possibly nested) list mixing both.
//! [`Reference::resolve`] flattens any of these into an ordered name list:
//! first-seen order of a depth-first traversal, duplicates preserved.

use crate::entity::{Category, Item, Named, ToggleOption};

/// A reference to one or more entities of type `E`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reference<E> {
    Name(String),
    Entity(E),
    List(Vec<Reference<E>>),
}

pub type CategoryRef = Reference<Category>;
pub type OptionRef = Reference<ToggleOption>;
pub type ItemRef = Reference<Item>;

impl<E: Named> Reference<E> {
    /// Flattens this reference into the names it denotes.
    pub fn resolve(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names(&self, names: &mut Vec<String>) {
        match self {
            Reference::Name(name) => names.push(name.clone()),
            Reference::Entity(entity) => names.push(entity.name().to_owned()),
            Reference::List(references) => {
                for reference in references {
                    reference.collect_names(names);
                }
            }
        }
    }
}

/// Resolves any reference-like input into an ordered list of names.
pub fn resolve<E: Named>(input: impl Into<Reference<E>>) -> Vec<String> {
    input.into().resolve()
}

impl<E> Default for Reference<E> {
    fn default() -> Self {
        Reference::List(Vec::new())
    }
}

impl<E> From<&str> for Reference<E> {
    fn from(name: &str) -> Self {
        Reference::Name(name.to_owned())
    }
}

impl<E> From<String> for Reference<E> {
    fn from(name: String) -> Self {
        Reference::Name(name)
    }
}

impl<E, T: Into<Reference<E>>> From<Vec<T>> for Reference<E> {
    fn from(references: Vec<T>) -> Self {
        Reference::List(references.into_iter().map(Into::into).collect())
    }
}

impl<E, T: Into<Reference<E>>, const N: usize> From<[T; N]> for Reference<E> {
    fn from(references: [T; N]) -> Self {
        Reference::List(references.into_iter().map(Into::into).collect())
    }
}

macro_rules! entity_reference {
    ($($entity:ty),*) => {
        $(
            impl From<$entity> for Reference<$entity> {
                fn from(entity: $entity) -> Self {
                    Reference::Entity(entity)
                }
            }

            impl From<&$entity> for Reference<$entity> {
                fn from(entity: &$entity) -> Self {
                    Reference::Entity(entity.clone())
                }
            }
        )*
    };
}

entity_reference!(Item, Category, ToggleOption);
