use indexmap::IndexMap;
use serde::Serialize;

use super::{Named, is_false, require_name};
use crate::error::{RegistryError, Result, Table};
use crate::reference::CategoryRef;

/// Attributes accepted when registering an item.
///
/// Classification flags are not mutually exclusive; the consuming engine
/// decides how combinations are interpreted.
#[derive(Clone, Debug, Default)]
pub struct ItemArgs {
    /// Number of copies placed in the pool. Defaults to 1 when absent.
    pub count: Option<u32>,
    pub progression: bool,
    pub progression_skip_balancing: bool,
    pub useful: bool,
    pub trap: bool,
    pub filler: bool,
    pub early: bool,
    pub local: bool,
    pub local_early: bool,
    /// Named numeric values (e.g. `{"coins": 5}`).
    pub value: IndexMap<String, i64>,
    pub category: Option<CategoryRef>,
}

/// A pool item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    progression: bool,
    #[serde(skip_serializing_if = "is_false")]
    progression_skip_balancing: bool,
    #[serde(skip_serializing_if = "is_false")]
    useful: bool,
    #[serde(skip_serializing_if = "is_false")]
    trap: bool,
    #[serde(skip_serializing_if = "is_false")]
    filler: bool,
    #[serde(skip_serializing_if = "is_false")]
    early: bool,
    #[serde(skip_serializing_if = "is_false")]
    local: bool,
    #[serde(skip_serializing_if = "is_false")]
    local_early: bool,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    value: IndexMap<String, i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    category: Vec<String>,
}

impl Item {
    /// Builds an item, resolving its category references into plain names.
    ///
    /// # Errors
    ///
    /// Fails when the name is blank or `count` is zero.
    pub fn new(name: impl Into<String>, args: ItemArgs) -> Result<Self> {
        let name = require_name(Table::Items, name.into())?;
        if args.count == Some(0) {
            return Err(RegistryError::InvalidCount { name });
        }

        Ok(Self {
            category: args.category.map(|c| c.resolve()).unwrap_or_default(),
            count: args.count,
            progression: args.progression,
            progression_skip_balancing: args.progression_skip_balancing,
            useful: args.useful,
            trap: args.trap,
            filler: args.filler,
            early: args.early,
            local: args.local,
            local_early: args.local_early,
            value: args.value,
            name,
        })
    }

    /// Number of copies of this item, 1 unless set explicitly.
    pub fn count(&self) -> u32 {
        self.count.unwrap_or(1)
    }

    pub fn is_progression(&self) -> bool {
        self.progression
    }

    pub fn is_useful(&self) -> bool {
        self.useful
    }

    pub fn categories(&self) -> &[String] {
        &self.category
    }

    pub fn value(&self) -> &IndexMap<String, i64> {
        &self.value
    }
}

impl Named for Item {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_defaults_to_one() {
        let item = Item::new("Orange", ItemArgs::default()).unwrap();
        assert_eq!(item.count(), 1);
        assert!(item.categories().is_empty());
    }

    #[test]
    fn zero_count_is_rejected() {
        let args = ItemArgs {
            count: Some(0),
            ..Default::default()
        };
        assert_eq!(
            Item::new("Orange", args),
            Err(RegistryError::InvalidCount {
                name: "Orange".into()
            })
        );
    }

    #[test]
    fn serializes_only_present_attributes() {
        let args = ItemArgs {
            count: Some(50),
            progression: true,
            category: Some(["Oranges"].into()),
            ..Default::default()
        };
        let item = Item::new("Orange", args).unwrap();

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Orange",
                "count": 50,
                "progression": true,
                "category": ["Oranges"],
            })
        );
    }
}
