use serde::Serialize;

use super::{Named, is_false, require_name};
use crate::error::{Result, Table};
use crate::reference::OptionRef;

/// Attributes accepted when registering a category.
#[derive(Clone, Debug, Default)]
pub struct CategoryArgs {
    /// Hidden categories are left out of generic listings.
    pub hidden: bool,
    /// Options gating this category's inclusion.
    pub yaml_option: Option<OptionRef>,
}

/// A named grouping of items or locations.
///
/// The category never owns its members; items and locations point at it by
/// name. Serialization omits the name because `categories.json` is keyed by it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    #[serde(skip)]
    name: String,
    #[serde(skip_serializing_if = "is_false")]
    hidden: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    yaml_option: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, args: CategoryArgs) -> Result<Self> {
        Ok(Self {
            name: require_name(Table::Categories, name.into())?,
            hidden: args.hidden,
            yaml_option: args.yaml_option.map(|o| o.resolve()).unwrap_or_default(),
        })
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Names of the options gating this category, in registration order.
    pub fn yaml_options(&self) -> &[String] {
        &self.yaml_option
    }

    pub(crate) fn append_options(&mut self, options: OptionRef) {
        self.yaml_option.extend(options.resolve());
    }
}

impl Named for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_name() {
        let category = Category::new(
            "Foo DLC",
            CategoryArgs {
                hidden: true,
                yaml_option: Some("enable_foo_dlc".into()),
            },
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&category).unwrap(),
            serde_json::json!({ "hidden": true, "yaml_option": ["enable_foo_dlc"] })
        );
    }

    #[test]
    fn appended_options_keep_order() {
        let mut category = Category::new(
            "Characters",
            CategoryArgs {
                yaml_option: Some("a".into()),
                ..Default::default()
            },
        )
        .unwrap();
        category.append_options(["b", "a"].into());

        assert_eq!(category.yaml_options(), ["a", "b", "a"]);
    }
}
