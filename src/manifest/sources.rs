use std::sync::Arc;

use crate::config::{DepartmentOrdering, ManifestConfig};
use crate::error::Result;
use crate::localization::{LocaleCatalog, Localizer};
use crate::prototypes::{DepartmentCatalog, PrototypeRegistry};
use crate::resources::{ResPath, ResourceCache, RsiResourceCache, StaticResourceCache};

use super::ManifestContext;

/// Owned, shareable collaborators, set up once at startup.
///
/// [`ManifestSources::context`] borrows them as a [`ManifestContext`] for a
/// single populate.
#[derive(Clone)]
pub struct ManifestSources {
    pub prototypes: Arc<dyn PrototypeRegistry + Send + Sync>,
    pub resources: Arc<dyn ResourceCache + Send + Sync>,
    pub localizer: Arc<dyn Localizer + Send + Sync>,
    pub ordering: DepartmentOrdering,
    pub icon_sheet: ResPath,
}

impl ManifestSources {
    /// Load departments, locale and the resource root named by `config`.
    ///
    /// Unset inputs fall back to the built-in departments, an empty locale
    /// and no icon sheet.
    pub fn from_config(config: &ManifestConfig) -> Result<Self> {
        let prototypes = match &config.departments {
            Some(path) => DepartmentCatalog::load(path)?,
            None => DepartmentCatalog::builtin(),
        };

        let localizer = match &config.locale {
            Some(path) => LocaleCatalog::load(path)?,
            None => LocaleCatalog::new(),
        };

        let resources: Arc<dyn ResourceCache + Send + Sync> = match &config.resource_root {
            Some(root) => Arc::new(RsiResourceCache::new(root)),
            None => {
                tracing::info!("No resource root configured, job icons disabled");
                Arc::new(StaticResourceCache::new())
            }
        };

        Ok(Self {
            prototypes: Arc::new(prototypes),
            resources,
            localizer: Arc::new(localizer),
            ordering: config.ordering(),
            icon_sheet: config.icon_sheet.clone(),
        })
    }

    pub fn context(&self) -> ManifestContext<'_> {
        ManifestContext {
            prototypes: &*self.prototypes,
            resources: &*self.resources,
            localizer: &*self.localizer,
            ordering: &self.ordering,
            icon_sheet: &self.icon_sheet,
        }
    }
}
