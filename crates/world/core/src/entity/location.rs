use serde::Serialize;

use super::{Named, is_false, require_name};
use crate::error::{RegistryError, Result, Table};
use crate::reference::{CategoryRef, ItemRef};
use crate::requirement::Requirement;

/// Attributes accepted when registering a location.
#[derive(Clone, Debug, Default)]
pub struct LocationArgs {
    pub region: Option<String>,
    pub category: Option<CategoryRef>,
    /// Structured unlock condition, compiled to its canonical string on registration.
    pub requires: Option<Requirement>,
    /// Items pre-placed at this location instead of a randomized one.
    pub place_item: Option<ItemRef>,
    /// Categories whose items may be pre-placed at this location.
    pub place_item_category: Option<CategoryRef>,
    /// Marks a terminal goal location.
    pub victory: bool,
}

/// A check that yields an item once its requirement is met.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    category: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    requires: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    place_item: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    place_item_category: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    victory: bool,
}

impl Location {
    /// Builds a location, resolving references and compiling `requires`.
    ///
    /// An empty compiled requirement is treated as no requirement at all.
    ///
    /// # Errors
    ///
    /// Fails when the name is blank or the requirement is malformed.
    pub fn new(name: impl Into<String>, args: LocationArgs) -> Result<Self> {
        let name = require_name(Table::Locations, name.into())?;

        let requires = match args.requires {
            Some(requirement) => {
                let compiled =
                    requirement
                        .compile()
                        .map_err(|source| RegistryError::InvalidRequirement {
                            location: name.clone(),
                            source,
                        })?;
                Some(compiled).filter(|s| !s.is_empty())
            }
            None => None,
        };

        Ok(Self {
            region: args.region,
            category: args.category.map(|c| c.resolve()).unwrap_or_default(),
            requires,
            place_item: args.place_item.map(|i| i.resolve()).unwrap_or_default(),
            place_item_category: args
                .place_item_category
                .map(|c| c.resolve())
                .unwrap_or_default(),
            victory: args.victory,
            name,
        })
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn categories(&self) -> &[String] {
        &self.category
    }

    /// The compiled requirement string, if any.
    pub fn requires(&self) -> Option<&str> {
        self.requires.as_deref()
    }

    pub fn placed_items(&self) -> &[String] {
        &self.place_item
    }

    pub fn placed_item_categories(&self) -> &[String] {
        &self.place_item_category
    }

    pub fn is_victory(&self) -> bool {
        self.victory
    }
}

impl Named for Location {
    fn name(&self) -> &str {
        &self.name
    }
}
