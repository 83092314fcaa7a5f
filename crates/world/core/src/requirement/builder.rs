//! Shorthand constructors for requirement trees.
//!
//! Instead of spelling out `Requirement::Combination { .. }` by hand, content
//! compilers write `all_of(vec![item("A"), category("B")])`.

use super::{Amount, GateKind, Operator, Requirement, Subject};

/// Requires owning the named item.
#[inline]
pub fn item(name: impl Into<String>) -> Requirement {
    Requirement::Subject(Subject::Item(name.into()))
}

/// Requires owning any item of the named category.
#[inline]
pub fn category(name: impl Into<String>) -> Requirement {
    Requirement::Subject(Subject::Category(name.into()))
}

/// Requires a count or percentage of a subject, e.g. `|@Oranges:70%|`.
#[inline]
pub fn some_of(subject: impl Into<Subject>, amount: impl Into<Amount>) -> Requirement {
    Requirement::Threshold {
        subject: subject.into(),
        amount: amount.into(),
    }
}

/// Joins operands with a single infix operator.
#[inline]
pub fn combination(operands: Vec<Requirement>, operator: Operator) -> Requirement {
    Requirement::Combination { operator, operands }
}

/// Shorthand for `combination(operands, Operator::And)`.
#[inline]
pub fn all_of(operands: Vec<Requirement>) -> Requirement {
    combination(operands, Operator::And)
}

/// Shorthand for `combination(operands, Operator::Or)`.
#[inline]
pub fn any_of(operands: Vec<Requirement>) -> Requirement {
    combination(operands, Operator::Or)
}

/// Wraps a requirement in `{OptOne(..)}`.
#[inline]
pub fn opt_one(inner: impl Into<Requirement>) -> Requirement {
    Requirement::OptionGate {
        kind: GateKind::OptOne,
        inner: Box::new(inner.into()),
    }
}

/// Wraps a requirement in `{OptAll(..)}`.
#[inline]
pub fn opt_all(inner: impl Into<Requirement>) -> Requirement {
    Requirement::OptionGate {
        kind: GateKind::OptAll,
        inner: Box::new(inner.into()),
    }
}

/// Author-supplied grammar text, passed through as-is.
#[inline]
pub fn raw(text: impl Into<String>) -> Requirement {
    Requirement::Raw(text.into())
}
