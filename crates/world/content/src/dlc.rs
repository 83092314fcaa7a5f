//! Memoized gating categories for content packs.
//!
//! The first time a pack is referenced, a toggle option `enable_<pack>_dlc`
//! and a hidden `"<Pack> DLC"` category gated by it are registered. Later
//! references get the same category back, so each pack produces exactly one
//! option and one category no matter how much content points at it.

use std::collections::HashMap;

use heck::ToSnakeCase;
use world_core::{Category, CategoryArgs, Registry, ToggleOptionArgs};

use crate::error::Result;

/// Caller-side memo of pack name to gating category.
#[derive(Clone, Debug, Default)]
pub struct DlcCategories {
    categories: HashMap<String, Category>,
}

impl DlcCategories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the gating category for `pack`, registering it on first use.
    pub fn resolve(&mut self, registry: &mut Registry, pack: &str) -> Result<Category> {
        if let Some(category) = self.categories.get(pack) {
            return Ok(category.clone());
        }

        let option = registry.register_option(
            dlc_option_name(pack),
            ToggleOptionArgs {
                description: format!("Enables the {pack} DLC.").into(),
                default: true,
            },
        )?;
        let category = registry.register_category(
            format!("{pack} DLC"),
            CategoryArgs {
                hidden: true,
                yaml_option: Some(option.into()),
            },
        )?;
        tracing::debug!(
            "pack {:?} gated by option {:?}",
            pack,
            category.yaml_options()
        );

        self.categories.insert(pack.to_owned(), category.clone());
        Ok(category)
    }

    /// Resolves an optional pack into zero or one gating categories.
    pub fn resolve_optional(
        &mut self,
        registry: &mut Registry,
        pack: Option<&str>,
    ) -> Result<Vec<Category>> {
        pack.map(|pack| self.resolve(registry, pack))
            .into_iter()
            .collect()
    }

    /// Number of distinct packs seen so far.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Name of the toggle option enabling `pack`, e.g. `enable_big_pack_dlc`.
pub fn dlc_option_name(pack: &str) -> String {
    format!("enable_{}_dlc", pack.to_snake_case())
}
