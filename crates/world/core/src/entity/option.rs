use serde::{Deserialize, Serialize};

use super::{Named, require_name};
use crate::error::{Result, Table};

/// Help text attached to an option: one string or one string per line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Lines(Vec<String>),
}

impl Description {
    /// The description as multi-line help text.
    pub fn to_help_text(&self) -> String {
        match self {
            Description::Text(text) => text.clone(),
            Description::Lines(lines) => lines.join("\n"),
        }
    }
}

impl Default for Description {
    fn default() -> Self {
        Description::Text(String::new())
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Description::Text(text.to_owned())
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Description::Text(text)
    }
}

impl From<Vec<String>> for Description {
    fn from(lines: Vec<String>) -> Self {
        Description::Lines(lines)
    }
}

/// Option type tag written into `options.json`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum OptionKind {
    #[default]
    Toggle,
}

/// Attributes accepted when registering a toggle option.
#[derive(Clone, Debug, Default)]
pub struct ToggleOptionArgs {
    pub description: Description,
    pub default: bool,
}

/// A boolean player option, usually gating one or more categories.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToggleOption {
    #[serde(skip)]
    name: String,
    #[serde(rename = "type")]
    kind: OptionKind,
    description: Description,
    default: bool,
}

impl ToggleOption {
    pub fn new(name: impl Into<String>, args: ToggleOptionArgs) -> Result<Self> {
        Ok(Self {
            name: require_name(Table::Options, name.into())?,
            kind: OptionKind::Toggle,
            description: args.description,
            default: args.default,
        })
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn default_value(&self) -> bool {
        self.default
    }
}

impl Named for ToggleOption {
    fn name(&self) -> &str {
        &self.name
    }
}
