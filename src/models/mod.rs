//! Domain models for the crew manifest.
//!
//! # Core Concepts
//!
//! ## Roster data
//!
//! - [`CrewManifestEntry`]: One crew member's display record (name, job title, job id, icon id).
//! - [`CrewManifestEntries`]: The roster as delivered by the host, replaced wholesale on update.
//! - [`DepartmentPrototype`]: A named group of job prototype ids, read from the prototype registry.
//!
//! ## Layout
//!
//! The manifest is never drawn directly. Populating it produces a [`ManifestLayout`],
//! a declarative tree of sections, rows and labels that a rendering adapter materializes:
//!
//! - [`Section`]: One department block with a header and a two-column grid.
//! - [`EntryRow`]: A grid row holding the name label and the [`TitleRow`].
//! - [`IconSlot`]: The job icon drawn next to the title, when the icon sheet is available.

mod department;
mod entry;
mod layout;

pub use department::*;
pub use entry::*;
pub use layout::*;
