//! The manifest pipeline: filter, group by department, order, lay out.
//!
//! Each step is a plain function over borrowed data. [`CrewManifestView`]
//! chains them and keeps the little state the manifest window needs between
//! populates (source entries, filter text, station name).

mod filter;
mod section;
mod sort;
mod sources;
mod view;

pub use filter::*;
pub use section::*;
pub use sort::*;
pub use sources::*;
pub use view::*;

use crate::config::DepartmentOrdering;
use crate::localization::Localizer;
use crate::prototypes::PrototypeRegistry;
use crate::resources::{ResPath, ResourceCache};

/// Read-only collaborators for one populate call.
#[derive(Clone, Copy)]
pub struct ManifestContext<'a> {
    pub prototypes: &'a dyn PrototypeRegistry,
    pub resources: &'a dyn ResourceCache,
    pub localizer: &'a dyn Localizer,
    pub ordering: &'a DepartmentOrdering,
    pub icon_sheet: &'a ResPath,
}
