//! Entity records stored in the registry tables.
//!
//! Every entity is immutable once constructed: fields are private and only
//! exposed through accessors. Serialization produces exactly the attribute
//! objects emitted into the world artifacts, so absent attributes are skipped
//! rather than written as `null` or `false`.

mod category;
mod item;
mod location;
mod option;

pub use category::{Category, CategoryArgs};
pub use item::{Item, ItemArgs};
pub use location::{Location, LocationArgs};
pub use option::{Description, OptionKind, ToggleOption, ToggleOptionArgs};

use crate::error::{RegistryError, Result, Table};

/// Anything that is keyed by name in one of the registry tables.
pub trait Named {
    fn name(&self) -> &str;
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

pub(crate) fn require_name(table: Table, name: String) -> Result<String> {
    if name.trim().is_empty() {
        return Err(RegistryError::EmptyName { table });
    }
    Ok(name)
}
