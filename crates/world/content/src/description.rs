//! The declarative content description a world is compiled from.
//!
//! Every map keeps the order entries appear in the source file, so the
//! generated tables list content in authoring order.
//!
//! ```json
//! {
//!     "campaigns": { "Kai": { "episodes": 3 }, "Syura": { "dlc": "Starter Pack" } },
//!     "extra_episodes": { "Beach Episode": { "dlc": "Summer" } },
//!     "characters": { "Kai": { "goal": "Win 3 games" } },
//!     "cards": { "Accel Hyper": { "count": 2 } },
//!     "victory": { "oranges": { "location": "Kai (Victory)", "count": 50, "percent": "70%" } },
//!     "track_completion": false
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root of a content description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDescription {
    pub campaigns: IndexMap<String, CampaignEntry>,
    pub extra_episodes: IndexMap<String, ExtraEpisodeEntry>,
    pub characters: IndexMap<String, CharacterEntry>,
    pub cards: IndexMap<String, CardEntry>,
    pub victory: Option<VictoryGoal>,
    /// Adds per-campaign completion items pre-placed at completion locations.
    pub track_completion: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignEntry {
    /// Number of regular episodes. Absent or zero yields a single location.
    pub episodes: Option<u32>,
    /// Content pack the campaign belongs to.
    pub dlc: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraEpisodeEntry {
    pub dlc: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterEntry {
    /// Per-character goal, turned into a `"<Character>: <Goal>"` location.
    pub goal: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    pub count: u32,
}

/// How the world is won.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VictoryGoal {
    /// Collect a share of the `Orange` progression items.
    Oranges {
        location: String,
        #[serde(default = "default_orange_count")]
        count: u32,
        #[serde(default = "default_orange_percent")]
        percent: String,
    },
    /// Complete a share of the campaigns. Needs `track_completion`.
    CompletedCampaigns {
        location: String,
        #[serde(default = "default_completion_percent")]
        percent: String,
    },
}

fn default_orange_count() -> u32 {
    50
}

fn default_orange_percent() -> String {
    "70%".to_owned()
}

fn default_completion_percent() -> String {
    "80%".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_default_to_empty() {
        let content: ContentDescription =
            serde_json::from_str(r#"{ "campaigns": { "Kai": { "episodes": 3 } } }"#).unwrap();

        assert_eq!(content.campaigns["Kai"].episodes, Some(3));
        assert!(content.characters.is_empty());
        assert_eq!(content.victory, None);
        assert!(!content.track_completion);
    }

    #[test]
    fn victory_defaults_fill_in() {
        let content: ContentDescription = serde_json::from_str(
            r#"{ "victory": { "oranges": { "location": "Kai (Victory)" } } }"#,
        )
        .unwrap();

        assert_eq!(
            content.victory,
            Some(VictoryGoal::Oranges {
                location: "Kai (Victory)".into(),
                count: 50,
                percent: "70%".into(),
            })
        );
    }

    #[test]
    fn maps_keep_file_order() {
        let content: ContentDescription = serde_json::from_str(
            r#"{ "cards": { "Zeta": { "count": 1 }, "Alpha": { "count": 2 } } }"#,
        )
        .unwrap();

        let names: Vec<_> = content.cards.keys().map(String::as_str).collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
    }
}
