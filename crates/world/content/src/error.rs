//! Errors raised while loading and compiling content descriptions.

use std::path::PathBuf;

use thiserror::Error;
use world_core::RegistryError;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON content at {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "loaders")]
    #[error("failed to parse RON content at {}", path.display())]
    Ron {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("unsupported content format {} (expected .json or .ron)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to render {file_name}")]
    Render {
        file_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("victory goal {location:?} counts completed campaigns, but completion tracking is off")]
    CompletionTrackingDisabled { location: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type Result<T> = std::result::Result<T, ContentError>;
