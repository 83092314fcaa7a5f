//! Finalized world tables and the artifacts rendered from them.
//!
//! [`WorldTables`] is what [`crate::Registry::finalize`] returns. It renders
//! the four documents handed to the publishing step:
//!
//! | file              | shape                                              |
//! |-------------------|----------------------------------------------------|
//! | `items.json`      | ordered list of item objects, name included        |
//! | `locations.json`  | ordered list of location objects, name included    |
//! | `categories.json` | map of category name to attributes                 |
//! | `options.json`    | `{"core": {}, "user": {name: attributes}}`         |
//!
//! It also carries the opt-in reference validation pass.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::entity::{Category, Item, Location, ToggleOption};
use crate::error::{RegistryError, Result, Table};
use crate::requirement::{Subject, scan_references};

/// The four registry tables, keyed by name in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldTables {
    pub items: IndexMap<String, Item>,
    pub locations: IndexMap<String, Location>,
    pub categories: IndexMap<String, Category>,
    pub options: IndexMap<String, ToggleOption>,
}

#[derive(Serialize)]
struct OptionsDocument<'a> {
    core: IndexMap<String, Value>,
    user: &'a IndexMap<String, ToggleOption>,
}

/// One rendered output file.
#[derive(Clone, Debug, PartialEq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub value: Value,
}

impl Artifact {
    /// Renders the document as JSON indented by four spaces.
    pub fn render(&self) -> serde_json::Result<String> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.value.serialize(&mut serializer)?;
        String::from_utf8(buffer).map_err(serde_json::Error::custom)
    }
}

impl WorldTables {
    /// Total number of item copies in the pool (sum of every item's `count`).
    pub fn item_count(&self) -> u64 {
        self.items.values().map(|item| u64::from(item.count())).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.locations.is_empty()
            && self.categories.is_empty()
            && self.options.is_empty()
    }

    /// Builds the four documents in `items`, `locations`, `categories`,
    /// `options` order.
    pub fn artifacts(&self) -> serde_json::Result<[Artifact; 4]> {
        let items: Vec<&Item> = self.items.values().collect();
        let locations: Vec<&Location> = self.locations.values().collect();
        let options = OptionsDocument {
            core: IndexMap::new(),
            user: &self.options,
        };

        Ok([
            Artifact {
                file_name: "items.json",
                value: serde_json::to_value(items)?,
            },
            Artifact {
                file_name: "locations.json",
                value: serde_json::to_value(locations)?,
            },
            Artifact {
                file_name: "categories.json",
                value: serde_json::to_value(&self.categories)?,
            },
            Artifact {
                file_name: "options.json",
                value: serde_json::to_value(options)?,
            },
        ])
    }

    /// Every reference that does not resolve against these tables.
    ///
    /// Checked references:
    /// - item subjects in `requires` and names in `place_item` against items
    /// - category subjects in `requires` and `place_item_category` against
    ///   categories that are registered or assigned to at least one item
    /// - `yaml_option` names against options
    ///
    /// Category lists on items and locations are not checked: categories
    /// may exist implicitly through membership alone.
    pub fn unresolved_references(&self) -> Vec<RegistryError> {
        let known_categories: HashSet<&str> = self
            .categories
            .keys()
            .map(String::as_str)
            .chain(
                self.items
                    .values()
                    .flat_map(|item| item.categories().iter().map(String::as_str)),
            )
            .collect();

        let mut missing = Vec::new();
        let mut report = |table: Table, referrer: &str, name: &str| {
            missing.push(RegistryError::UnresolvedReference {
                table,
                referrer: referrer.to_owned(),
                name: name.to_owned(),
            });
        };

        for (location_name, location) in &self.locations {
            let subjects = location
                .requires()
                .map(scan_references)
                .unwrap_or_default();
            for found in subjects {
                match &found.subject {
                    Subject::Item(name) if !self.items.contains_key(name) => {
                        report(Table::Items, location_name, name)
                    }
                    Subject::Category(name) if !known_categories.contains(name.as_str()) => {
                        report(Table::Categories, location_name, name)
                    }
                    _ => {}
                }
            }

            for name in location.placed_items() {
                if !self.items.contains_key(name) {
                    report(Table::Items, location_name, name);
                }
            }
            for name in location.placed_item_categories() {
                if !known_categories.contains(name.as_str()) {
                    report(Table::Categories, location_name, name);
                }
            }
        }

        for (category_name, category) in &self.categories {
            for name in category.yaml_options() {
                if !self.options.contains_key(name) {
                    report(Table::Options, category_name, name);
                }
            }
        }

        missing
    }

    /// Fails with the first unresolved reference, if any.
    pub fn validate(&self) -> Result<()> {
        match self.unresolved_references().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
