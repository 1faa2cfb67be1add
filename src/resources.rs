//! Sprite sheet resources used for job icons.
//!
//! Sheets use the RSI layout: a directory whose `meta.json` lists the states
//! it contains. Only state names are read; frames and sizes are left to
//! whatever adapter draws the texture.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Sheet holding one state per job icon plus the `Unknown` fallback.
pub const JOB_ICONS_RSI: &str = "/Textures/Interface/Misc/job_icons.rsi";

/// Metadata file inside every RSI directory.
const RSI_META_FILE: &str = "meta.json";

/// A rooted resource path such as `/Textures/Interface/Misc/job_icons.rsi`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResPath(String);

impl ResPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve against a directory on disk, treating the leading `/` as that root.
    pub fn to_fs_path(&self, root: &Path) -> PathBuf {
        root.join(self.0.trim_start_matches('/'))
    }
}

impl fmt::Display for ResPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Default for ResPath {
    fn default() -> Self {
        Self::new(JOB_ICONS_RSI)
    }
}

/// The set of states available in a sprite sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteSheet {
    states: HashSet<String>,
}

impl SpriteSheet {
    pub fn new<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            states: states.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Parse an RSI directory's `meta.json`.
    pub fn load_rsi(dir: &Path) -> Result<Self> {
        let meta: RsiMeta = crate::error::read_json(&dir.join(RSI_META_FILE))?;
        Ok(Self::new(meta.states.into_iter().map(|s| s.name)))
    }
}

#[derive(Debug, Deserialize)]
struct RsiMeta {
    #[serde(default)]
    states: Vec<RsiState>,
}

#[derive(Debug, Deserialize)]
struct RsiState {
    name: String,
}

/// Read access to loaded resources. Ownership of a sheet stays with the cache.
pub trait ResourceCache {
    /// Returns `None` if the sheet does not exist or failed to load.
    fn try_get_sprite_sheet(&self, path: &ResPath) -> Option<Arc<SpriteSheet>>;
}

/// Loads RSI sheets from a resource directory on first use and memoizes them.
///
/// Failed loads are remembered too, so a broken sheet is only reported once.
pub struct RsiResourceCache {
    root: PathBuf,
    sheets: Mutex<HashMap<ResPath, Option<Arc<SpriteSheet>>>>,
}

impl RsiResourceCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sheets: Mutex::new(HashMap::new()),
        }
    }
}

impl ResourceCache for RsiResourceCache {
    fn try_get_sprite_sheet(&self, path: &ResPath) -> Option<Arc<SpriteSheet>> {
        let mut sheets = self.sheets.lock().expect("sheet cache lock poisoned");
        sheets
            .entry(path.clone())
            .or_insert_with(|| match SpriteSheet::load_rsi(&path.to_fs_path(&self.root)) {
                Ok(sheet) => {
                    tracing::debug!("Loaded {} with {} states", path, sheet.state_count());
                    Some(Arc::new(sheet))
                }
                Err(e) => {
                    tracing::warn!("Sprite sheet {} unavailable: {}", path, e);
                    None
                }
            })
            .clone()
    }
}

/// In-memory cache, for hosts that load sheets themselves and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticResourceCache {
    sheets: HashMap<ResPath, Arc<SpriteSheet>>,
}

impl StaticResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, path: ResPath, sheet: SpriteSheet) -> Self {
        self.sheets.insert(path, Arc::new(sheet));
        self
    }
}

impl ResourceCache for StaticResourceCache {
    fn try_get_sprite_sheet(&self, path: &ResPath) -> Option<Arc<SpriteSheet>> {
        self.sheets.get(path).cloned()
    }
}
