//! Crew manifest: a filterable, department-grouped roster of station crew.
//!
//! Entries are filtered by a text query, bucketed into departments from the
//! prototype registry, ordered by the configured department list and laid out
//! as a [`models::ManifestLayout`]. Adapters in [`render`] and [`api`] turn
//! that layout into text or JSON.

pub mod api;
pub mod config;
pub mod error;
pub mod localization;
pub mod manifest;
pub mod models;
pub mod prototypes;
pub mod render;
pub mod resources;
