//! The entity registry: four name-keyed tables owned by one build pass.
//!
//! A [`Registry`] is created empty, filled through its typed factory methods,
//! and consumed by [`Registry::finalize`]. Each table is an independent name
//! space; registering a name twice in the same table is always an error.
//! Tables keep insertion order so the emitted artifacts are stable.

use indexmap::IndexMap;

use crate::entity::{
    Category, CategoryArgs, Item, ItemArgs, Location, LocationArgs, Named, ToggleOption,
    ToggleOptionArgs,
};
use crate::error::{RegistryError, Result, Table};
use crate::reference::OptionRef;
use crate::tables::WorldTables;

/// Builder for the item, location, category, and option tables.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    items: IndexMap<String, Item>,
    locations: IndexMap<String, Location>,
    categories: IndexMap<String, Category>,
    options: IndexMap<String, ToggleOption>,
}

impl Registry {
    /// Creates a registry with four empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an item.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateName`] if an item with this name exists.
    pub fn register_item(&mut self, name: impl Into<String>, args: ItemArgs) -> Result<Item> {
        let name = name.into();
        ensure_vacant(Table::Items, &self.items, &name)?;
        let item = Item::new(name, args)?;
        Ok(insert(Table::Items, &mut self.items, item))
    }

    /// Registers a location, compiling its requirement into canonical form.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateName`] if a location with this name exists,
    /// [`RegistryError::InvalidRequirement`] if `requires` does not compile.
    pub fn register_location(
        &mut self,
        name: impl Into<String>,
        args: LocationArgs,
    ) -> Result<Location> {
        let name = name.into();
        ensure_vacant(Table::Locations, &self.locations, &name)?;
        let location = Location::new(name, args)?;
        Ok(insert(Table::Locations, &mut self.locations, location))
    }

    /// Registers a category and resolves its gating option references.
    pub fn register_category(
        &mut self,
        name: impl Into<String>,
        args: CategoryArgs,
    ) -> Result<Category> {
        let name = name.into();
        ensure_vacant(Table::Categories, &self.categories, &name)?;
        let category = Category::new(name, args)?;
        Ok(insert(Table::Categories, &mut self.categories, category))
    }

    /// Registers a toggle option.
    pub fn register_option(
        &mut self,
        name: impl Into<String>,
        args: ToggleOptionArgs,
    ) -> Result<ToggleOption> {
        let name = name.into();
        ensure_vacant(Table::Options, &self.options, &name)?;
        let option = ToggleOption::new(name, args)?;
        Ok(insert(Table::Options, &mut self.options, option))
    }

    /// Appends gating options to an already registered category.
    ///
    /// Repeated calls accumulate; existing entries are never replaced.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownCategory`] if no category has this name.
    pub fn append_category_options(
        &mut self,
        name: &str,
        options: impl Into<OptionRef>,
    ) -> Result<Category> {
        let category = self
            .categories
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnknownCategory {
                name: name.to_owned(),
            })?;
        category.append_options(options.into());
        tracing::debug!(
            "category {:?} now gated by {:?}",
            name,
            category.yaml_options()
        );
        Ok(category.clone())
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn option(&self, name: &str) -> Option<&ToggleOption> {
        self.options.get(name)
    }

    /// Number of entries in one table.
    pub fn len(&self, table: Table) -> usize {
        match table {
            Table::Items => self.items.len(),
            Table::Locations => self.locations.len(),
            Table::Categories => self.categories.len(),
            Table::Options => self.options.len(),
        }
    }

    /// True when all four tables are empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.locations.is_empty()
            && self.categories.is_empty()
            && self.options.is_empty()
    }

    /// Consumes the registry and hands out its tables.
    pub fn finalize(self) -> WorldTables {
        let tables = WorldTables {
            items: self.items,
            locations: self.locations,
            categories: self.categories,
            options: self.options,
        };
        tracing::info!(
            "finalized world: {} items ({} entries), {} locations, {} categories, {} options",
            tables.item_count(),
            tables.items.len(),
            tables.locations.len(),
            tables.categories.len(),
            tables.options.len(),
        );
        tables
    }
}

fn ensure_vacant<V>(table: Table, map: &IndexMap<String, V>, name: &str) -> Result<()> {
    if map.contains_key(name) {
        return Err(RegistryError::DuplicateName {
            table,
            name: name.to_owned(),
        });
    }
    Ok(())
}

fn insert<V: Named + Clone>(table: Table, map: &mut IndexMap<String, V>, value: V) -> V {
    tracing::debug!("registered {} entry {:?}", table, value.name());
    map.insert(value.name().to_owned(), value.clone());
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RequirementError;
    use crate::requirement::item;

    #[test]
    fn duplicate_names_fail_per_table() {
        let mut registry = Registry::new();
        registry
            .register_item("Orange", ItemArgs::default())
            .unwrap();

        let err = registry
            .register_item("Orange", ItemArgs::default())
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateName {
                table: Table::Items,
                name: "Orange".into()
            }
        );

        // Same name in a different table is fine.
        registry
            .register_location("Orange", LocationArgs::default())
            .unwrap();
        registry
            .register_category("Orange", CategoryArgs::default())
            .unwrap();
        registry
            .register_option("Orange", ToggleOptionArgs::default())
            .unwrap();

        for table in [Table::Locations, Table::Categories, Table::Options] {
            assert_eq!(registry.len(table), 1);
        }
    }

    #[test]
    fn duplicate_does_not_overwrite() {
        let mut registry = Registry::new();
        registry
            .register_item(
                "Orange",
                ItemArgs {
                    count: Some(50),
                    ..Default::default()
                },
            )
            .unwrap();
        let _ = registry.register_item("Orange", ItemArgs::default());

        assert_eq!(registry.item("Orange").unwrap().count(), 50);
    }

    #[test]
    fn registered_entries_are_retrievable() {
        let mut registry = Registry::new();
        let option = registry
            .register_option("randomize_cards", ToggleOptionArgs::default())
            .unwrap();
        let category = registry
            .register_category(
                "Cards",
                CategoryArgs {
                    yaml_option: Some((&option).into()),
                    ..Default::default()
                },
            )
            .unwrap();
        registry
            .register_location(
                "Shop",
                LocationArgs {
                    requires: Some(item("Coin")),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(registry.category("Cards"), Some(&category));
        assert_eq!(category.yaml_options(), ["randomize_cards"]);
        assert_eq!(registry.location("Shop").unwrap().requires(), Some("|Coin|"));
        assert!(registry.option("randomize_cards").is_some());
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.register_category("  ", CategoryArgs::default()),
            Err(RegistryError::EmptyName {
                table: Table::Categories
            })
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn ambiguous_subject_names_fail_at_registration() {
        let mut registry = Registry::new();
        registry.register_item("Level:2", ItemArgs::default()).unwrap();

        let err = registry
            .register_location(
                "Goal",
                LocationArgs {
                    requires: Some(item("Level:2")),
                    ..Default::default()
                },
            )
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::InvalidRequirement {
                location: "Goal".into(),
                source: RequirementError::AmbiguousName {
                    name: "Level:2".into()
                }
            }
        );
        assert!(registry.location("Goal").is_none());
    }

    #[test]
    fn appending_options_accumulates() {
        let mut registry = Registry::new();
        registry
            .register_category(
                "Characters",
                CategoryArgs {
                    yaml_option: Some("randomize_characters".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        let updated = registry
            .append_category_options("Characters", "enable_bonus_dlc")
            .unwrap();
        assert_eq!(
            updated.yaml_options(),
            ["randomize_characters", "enable_bonus_dlc"]
        );

        assert_eq!(
            registry.append_category_options("Missing", "x"),
            Err(RegistryError::UnknownCategory {
                name: "Missing".into()
            })
        );
    }
}
