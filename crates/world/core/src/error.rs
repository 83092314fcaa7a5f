//! Error types raised while registering entities and compiling requirements.
//!
//! Every error is a deterministic input error: the build pass that raised it
//! is expected to abort, and the message names the offending table and entry
//! so the content description can be corrected.

use thiserror::Error;

/// The four independent name spaces owned by a [`crate::Registry`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Table {
    Items,
    Locations,
    Categories,
    Options,
}

/// Errors surfaced by the requirement compiler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequirementError {
    #[error("requirement subject has an empty name")]
    EmptyName,

    #[error("subject name {name:?} contains reserved character {character:?}")]
    ReservedCharacter { name: String, character: char },

    #[error("{operator} combination needs at least two operands, got {count}")]
    TooFewOperands {
        operator: crate::requirement::Operator,
        count: usize,
    },

    #[error("subject name {name:?} would be read back as a different subject")]
    AmbiguousName { name: String },

    #[error("invalid amount {0:?}: expected a positive count or a `<digits>%` percentage")]
    InvalidAmount(String),

    #[error("an amount can only qualify an item or category subject, not {node}")]
    AmountOnNonSubject { node: &'static str },
}

/// Errors surfaced by the entity registry and the finalized tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{table} entry {name:?} already exists")]
    DuplicateName { table: Table, name: String },

    #[error("{table} entry name must not be empty")]
    EmptyName { table: Table },

    #[error("item {name:?} must have a positive count")]
    InvalidCount { name: String },

    #[error("invalid requirement on location {location:?}: {source}")]
    InvalidRequirement {
        location: String,
        #[source]
        source: RequirementError,
    },

    #[error("category {name:?} is not registered")]
    UnknownCategory { name: String },

    #[error("{referrer:?} references {name:?}, which is missing from {table}")]
    UnresolvedReference {
        table: Table,
        referrer: String,
        name: String,
    },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
