//! Content descriptions and the compiler that turns them into world tables.
//!
//! A world is described declaratively (campaigns, extra episodes,
//! characters, cards, a victory goal) in `content.json` or `content.ron`.
//! [`ContentCompiler`] drives a [`world_core::Registry`] from that
//! description, and [`write_artifacts`] puts the finalized tables on disk.

pub mod compiler;
pub mod description;
pub mod dlc;
pub mod error;
pub mod output;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use compiler::{ContentCompiler, compile};
pub use description::{
    CampaignEntry, CardEntry, CharacterEntry, ContentDescription, ExtraEpisodeEntry, VictoryGoal,
};
pub use dlc::{DlcCategories, dlc_option_name};
pub use error::{ContentError, Result};
pub use output::write_artifacts;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFormat, ContentLoader};
