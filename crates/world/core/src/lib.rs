//! Entity registry and requirement expression compiler for Manual worlds.
//!
//! `world-core` turns typed factory calls into the four normalized tables a
//! Manual world ships with (items, locations, categories, options) and
//! compiles structured unlock conditions into the engine's compact
//! requirement grammar. It performs no I/O; content compilers drive a
//! [`Registry`] and hand the finalized [`WorldTables`] to whatever writes
//! them out.
//!
//! - [`entity`]: the immutable records stored in each table
//! - [`reference`]: name / handle / list normalization
//! - [`requirement`]: the requirement tree, compiler, and reference scanner
//! - [`registry`]: uniqueness-enforcing tables and factory methods
//! - [`tables`]: finalized tables, artifact rendering, reference validation

pub mod entity;
pub mod error;
pub mod reference;
pub mod registry;
pub mod requirement;
pub mod tables;

pub use entity::{
    Category, CategoryArgs, Description, Item, ItemArgs, Location, LocationArgs, Named,
    OptionKind, ToggleOption, ToggleOptionArgs,
};
pub use error::{RegistryError, RequirementError, Result, Table};
pub use reference::{CategoryRef, ItemRef, OptionRef, Reference, resolve};
pub use registry::Registry;
pub use requirement::{Amount, GateKind, Operator, Requirement, Subject, SubjectRef};
pub use tables::{Artifact, WorldTables};
