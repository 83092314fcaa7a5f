//! Compiles a [`ContentDescription`] into registry entries.
//!
//! Sections are compiled in a fixed order (completion category, campaigns,
//! extra episodes, characters, cards, victory) so the emitted tables are
//! stable for a given description.

use world_core::requirement::{opt_one, some_of};
use world_core::{
    Category, CategoryArgs, CategoryRef, Item, ItemArgs, LocationArgs, Named, Registry,
    ToggleOptionArgs, WorldTables,
};

use crate::description::{CampaignEntry, ContentDescription, ExtraEpisodeEntry, VictoryGoal};
use crate::dlc::DlcCategories;
use crate::error::{ContentError, Result};

pub const CAMPAIGNS_CATEGORY: &str = "Campaigns";
pub const COMPLETED_CAMPAIGNS_CATEGORY: &str = "Completed Campaigns";
pub const CHARACTERS_CATEGORY: &str = "Characters";
pub const CARDS_CATEGORY: &str = "Cards";
pub const ORANGE_ITEM: &str = "Orange";

const GOALS_CATEGORY: &str = "(Goals)";
const VICTORY_CATEGORY: &str = "((Victory))";
const EXTRAS_CATEGORY: &str = "(Extras)";
const EXTRAS_COMPLETION_CATEGORY: &str = "(Extras Completion)";
const ORANGES_CATEGORY: &str = "Oranges";

/// Drives a [`Registry`] from one content description.
pub struct ContentCompiler<'a> {
    content: &'a ContentDescription,
    dlc: DlcCategories,
    completed: Option<Category>,
}

impl<'a> ContentCompiler<'a> {
    pub fn new(content: &'a ContentDescription) -> Self {
        Self {
            content,
            dlc: DlcCategories::new(),
            completed: None,
        }
    }

    /// Compiles into a fresh registry and finalizes it.
    pub fn compile(mut self) -> Result<WorldTables> {
        let mut registry = Registry::new();
        self.compile_into(&mut registry)?;
        Ok(registry.finalize())
    }

    /// Compiles into an existing registry, leaving it open for more entries.
    pub fn compile_into(&mut self, registry: &mut Registry) -> Result<()> {
        let content = self.content;

        if content.track_completion {
            let category = registry.register_category(
                COMPLETED_CAMPAIGNS_CATEGORY,
                CategoryArgs {
                    hidden: true,
                    ..Default::default()
                },
            )?;
            self.completed = Some(category);
        }

        for (name, campaign) in &content.campaigns {
            self.compile_campaign(registry, name, campaign)?;
        }
        for (name, extra) in &content.extra_episodes {
            self.compile_extra_episode(registry, name, extra)?;
        }
        self.compile_characters(registry)?;
        self.compile_cards(registry)?;
        if let Some(victory) = &content.victory {
            self.compile_victory(registry, victory)?;
        }

        tracing::info!(
            "compiled {} campaigns, {} extra episodes, {} characters, {} cards ({} packs)",
            content.campaigns.len(),
            content.extra_episodes.len(),
            content.characters.len(),
            content.cards.len(),
            self.dlc.len(),
        );
        Ok(())
    }

    fn compile_campaign(
        &mut self,
        registry: &mut Registry,
        name: &str,
        campaign: &CampaignEntry,
    ) -> Result<()> {
        let packs = self
            .dlc
            .resolve_optional(registry, campaign.dlc.as_deref())?;

        // Characters own the bare name when both exist.
        let unlock_name = if self.content.characters.contains_key(name) {
            format!("{name} (Campaign)")
        } else {
            name.to_owned()
        };
        let unlock = registry.register_item(
            unlock_name,
            ItemArgs {
                progression: true,
                category: Some(with_packs(CAMPAIGNS_CATEGORY, &packs)),
                ..Default::default()
            },
        )?;

        let episode_category = format!("(Campaign) {name}");
        let location_names = match campaign.episodes {
            None | Some(0) => vec![name.to_owned()],
            Some(episodes) => (1..=episodes)
                .map(|episode| format!("{name} (Episode {episode})"))
                .chain(std::iter::once(format!("{name} (Final Episode)")))
                .collect(),
        };
        for location in location_names {
            registry.register_location(
                location,
                LocationArgs {
                    category: Some(with_packs(episode_category.as_str(), &packs)),
                    requires: Some((&unlock).into()),
                    ..Default::default()
                },
            )?;
        }

        if let Some(completed) = self.completed.clone() {
            let completion = registry.register_item(
                format!("{name} (All Episodes)"),
                ItemArgs {
                    progression: true,
                    category: Some(with_packs(completed, &packs)),
                    ..Default::default()
                },
            )?;
            registry.register_location(
                completion.name(),
                LocationArgs {
                    category: Some(with_packs(format!("(Campaign Completion) {name}"), &packs)),
                    requires: Some((&unlock).into()),
                    place_item: Some((&completion).into()),
                    ..Default::default()
                },
            )?;
        }

        tracing::debug!(
            "campaign {:?}: unlocked by {:?}, {} packs",
            name,
            unlock.name(),
            packs.len()
        );
        Ok(())
    }

    fn compile_extra_episode(
        &mut self,
        registry: &mut Registry,
        name: &str,
        extra: &ExtraEpisodeEntry,
    ) -> Result<()> {
        let packs = self.dlc.resolve_optional(registry, extra.dlc.as_deref())?;

        let unlock = registry.register_item(
            format!("{name} (Extra)"),
            ItemArgs {
                progression: true,
                category: Some(with_packs(CAMPAIGNS_CATEGORY, &packs)),
                ..Default::default()
            },
        )?;
        registry.register_location(
            name,
            LocationArgs {
                category: Some(with_packs(EXTRAS_CATEGORY, &packs)),
                requires: Some((&unlock).into()),
                ..Default::default()
            },
        )?;

        if let Some(completed) = self.completed.clone() {
            let completion = registry.register_item(
                format!("{name} (Complete)"),
                ItemArgs {
                    progression: true,
                    category: Some(with_packs(completed, &packs)),
                    ..Default::default()
                },
            )?;
            registry.register_location(
                format!("{name} (Completion)"),
                LocationArgs {
                    category: Some(with_packs(EXTRAS_COMPLETION_CATEGORY, &packs)),
                    requires: Some((&unlock).into()),
                    place_item: Some(completion.into()),
                    ..Default::default()
                },
            )?;
        }
        Ok(())
    }

    fn compile_characters(&self, registry: &mut Registry) -> Result<()> {
        let characters = &self.content.characters;
        if characters.is_empty() {
            return Ok(());
        }

        let option = registry.register_option(
            "randomize_characters",
            ToggleOptionArgs {
                description: "Add characters to the pool, requiring unlocking them to use them. \
                              Disable this to allow using all characters throughout the game."
                    .into(),
                default: true,
            },
        )?;
        let category = registry.register_category(
            CHARACTERS_CATEGORY,
            CategoryArgs {
                yaml_option: Some(option.into()),
                ..Default::default()
            },
        )?;

        let mut items: Vec<Item> = Vec::with_capacity(characters.len());
        for name in characters.keys() {
            items.push(registry.register_item(
                name.as_str(),
                ItemArgs {
                    useful: true,
                    category: Some((&category).into()),
                    ..Default::default()
                },
            )?);
        }

        for (character, entry) in items.iter().zip(characters.values()) {
            let Some(goal) = &entry.goal else {
                continue;
            };
            registry.register_location(
                format!("{}: {goal}", character.name()),
                LocationArgs {
                    category: Some(GOALS_CATEGORY.into()),
                    requires: Some(opt_one(character)),
                    ..Default::default()
                },
            )?;
        }
        Ok(())
    }

    fn compile_cards(&self, registry: &mut Registry) -> Result<()> {
        let cards = &self.content.cards;
        if cards.is_empty() {
            return Ok(());
        }

        let option = registry.register_option(
            "randomize_cards",
            ToggleOptionArgs {
                description: "Add cards to the pool, requiring unlocking them to use them. \
                              Disable this to allow using all cards throughout the game."
                    .into(),
                default: true,
            },
        )?;
        let category = registry.register_category(
            CARDS_CATEGORY,
            CategoryArgs {
                yaml_option: Some(option.into()),
                ..Default::default()
            },
        )?;

        for (name, card) in cards {
            registry.register_item(
                name.as_str(),
                ItemArgs {
                    count: Some(card.count),
                    useful: true,
                    category: Some((&category).into()),
                    ..Default::default()
                },
            )?;
        }
        Ok(())
    }

    fn compile_victory(&self, registry: &mut Registry, victory: &VictoryGoal) -> Result<()> {
        let (location, requires) = match victory {
            VictoryGoal::Oranges {
                location,
                count,
                percent,
            } => {
                let orange = registry.register_item(
                    ORANGE_ITEM,
                    ItemArgs {
                        count: Some(*count),
                        progression: true,
                        category: Some(ORANGES_CATEGORY.into()),
                        ..Default::default()
                    },
                )?;
                (location, some_of(&orange, percent.as_str()))
            }
            VictoryGoal::CompletedCampaigns { location, percent } => {
                let Some(completed) = &self.completed else {
                    return Err(ContentError::CompletionTrackingDisabled {
                        location: location.clone(),
                    });
                };
                (location, some_of(completed, percent.as_str()))
            }
        };

        let victory = registry.register_location(
            location.as_str(),
            LocationArgs {
                category: Some(VICTORY_CATEGORY.into()),
                requires: Some(requires),
                victory: true,
                ..Default::default()
            },
        )?;
        tracing::info!(
            "victory at {:?} requires {}",
            victory.name(),
            victory.requires().unwrap_or_default()
        );
        Ok(())
    }
}

/// Convenience wrapper around [`ContentCompiler::compile`].
pub fn compile(content: &ContentDescription) -> Result<WorldTables> {
    ContentCompiler::new(content).compile()
}

fn with_packs(first: impl Into<CategoryRef>, packs: &[Category]) -> CategoryRef {
    let mut categories = vec![first.into()];
    categories.extend(packs.iter().map(CategoryRef::from));
    CategoryRef::from(categories)
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::description::{CardEntry, CharacterEntry};

    fn campaigns(entries: &[(&str, Option<u32>, Option<&str>)]) -> ContentDescription {
        ContentDescription {
            campaigns: entries
                .iter()
                .map(|(name, episodes, dlc)| {
                    (
                        name.to_string(),
                        CampaignEntry {
                            episodes: *episodes,
                            dlc: dlc.map(str::to_owned),
                        },
                    )
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn campaign_without_episodes_gets_one_location() {
        let tables = compile(&campaigns(&[("Kai", None, None)])).unwrap();

        let names: Vec<_> = tables.locations.keys().map(String::as_str).collect();
        assert_eq!(names, ["Kai"]);
        assert_eq!(tables.locations["Kai"].requires(), Some("|Kai|"));
    }

    #[test]
    fn campaign_name_shared_with_character_is_renamed() {
        let mut content = campaigns(&[("Kai", Some(1), None)]);
        content
            .characters
            .insert("Kai".into(), CharacterEntry::default());

        let tables = compile(&content).unwrap();

        assert!(tables.items["Kai (Campaign)"].is_progression());
        assert!(tables.items["Kai"].is_useful());
        assert_eq!(
            tables.locations["Kai (Final Episode)"].requires(),
            Some("|Kai (Campaign)|")
        );
    }

    #[test]
    fn completion_items_are_placed_at_their_location() {
        let mut content = campaigns(&[("Kai", Some(2), Some("Foo"))]);
        content.track_completion = true;

        let tables = compile(&content).unwrap();
        let location = &tables.locations["Kai (All Episodes)"];

        assert_eq!(location.placed_items(), ["Kai (All Episodes)"]);
        assert_eq!(
            location.categories(),
            ["(Campaign Completion) Kai", "Foo DLC"]
        );
        assert_eq!(
            tables.items["Kai (All Episodes)"].categories(),
            ["Completed Campaigns", "Foo DLC"]
        );
        assert!(tables.categories["Completed Campaigns"].is_hidden());
        assert_eq!(tables.validate(), Ok(()));
    }

    #[test]
    fn extra_episodes_pair_unlock_and_completion() {
        let mut content = ContentDescription {
            track_completion: true,
            ..Default::default()
        };
        content
            .extra_episodes
            .insert("Beach".into(), ExtraEpisodeEntry::default());

        let tables = compile(&content).unwrap();

        assert_eq!(tables.locations["Beach"].requires(), Some("|Beach (Extra)|"));
        assert_eq!(
            tables.locations["Beach (Completion)"].placed_items(),
            ["Beach (Complete)"]
        );
        assert_eq!(tables.items["Beach (Extra)"].categories(), ["Campaigns"]);
    }

    #[test]
    fn character_goals_are_option_gated() {
        let mut characters = IndexMap::new();
        characters.insert(
            "Suguri".to_owned(),
            CharacterEntry {
                goal: Some("Win a match".into()),
            },
        );
        characters.insert("Sora".to_owned(), CharacterEntry::default());
        let content = ContentDescription {
            characters,
            ..Default::default()
        };

        let tables = compile(&content).unwrap();

        assert_eq!(
            tables.locations["Suguri: Win a match"].requires(),
            Some("{OptOne(|Suguri|)}")
        );
        assert_eq!(tables.locations.len(), 1);
        assert_eq!(
            tables.categories["Characters"].yaml_options(),
            ["randomize_characters"]
        );
        assert!(tables.options["randomize_characters"].default_value());
    }

    #[test]
    fn cards_keep_their_counts() {
        let mut content = ContentDescription::default();
        content
            .cards
            .insert("Accel Hyper".into(), CardEntry { count: 3 });

        let tables = compile(&content).unwrap();

        assert_eq!(tables.items["Accel Hyper"].count(), 3);
        assert_eq!(tables.item_count(), 3);
        assert!(tables.options.contains_key("randomize_cards"));
    }

    #[test]
    fn orange_victory_requires_a_share_of_oranges() {
        let content = ContentDescription {
            victory: Some(VictoryGoal::Oranges {
                location: "Kai (Victory)".into(),
                count: 50,
                percent: "70%".into(),
            }),
            ..Default::default()
        };

        let tables = compile(&content).unwrap();
        let victory = &tables.locations["Kai (Victory)"];

        assert!(victory.is_victory());
        assert_eq!(victory.requires(), Some("|Orange:70%|"));
        assert_eq!(tables.items["Orange"].count(), 50);
    }

    #[test]
    fn completed_campaigns_victory_needs_tracking() {
        let mut content = ContentDescription {
            victory: Some(VictoryGoal::CompletedCampaigns {
                location: "All Done".into(),
                percent: "80%".into(),
            }),
            ..Default::default()
        };

        assert!(matches!(
            compile(&content),
            Err(ContentError::CompletionTrackingDisabled { .. })
        ));

        content.track_completion = true;
        let tables = compile(&content).unwrap();
        assert_eq!(
            tables.locations["All Done"].requires(),
            Some("|@Completed Campaigns:80%|")
        );
    }

    #[test]
    fn clashing_names_surface_as_registry_errors() {
        let mut content = campaigns(&[("Kai", None, None)]);
        content
            .cards
            .insert("Kai".into(), CardEntry { count: 1 });

        assert!(matches!(compile(&content), Err(ContentError::Registry(_))));
    }
}
