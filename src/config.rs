//! Manifest configuration: department ordering and where inputs live.
//!
//! Loaded from `<config dir>/crew-manifest/config.json`, then overridden by
//! environment variables:
//! - `CREW_MANIFEST_ORDERING` - comma-separated department ids
//! - `CREW_MANIFEST_RESOURCES` - resource root containing the icon sheet
//! - `CREW_MANIFEST_DEPARTMENTS` - department prototype file (JSON)
//! - `CREW_MANIFEST_LOCALE` - locale file (`.ftl`)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::resources::ResPath;

const APP_NAME: &str = "crew-manifest";
const CONFIG_FILE: &str = "config.json";

/// Default section order.
pub const DEFAULT_ORDERING: &str =
    "Command,Security,Science,Medical,Engineering,Cargo,Civilian,Silicon";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Comma-separated department ids, in display order.
    pub ordering: String,
    /// Directory that resource paths such as the icon sheet are resolved against.
    pub resource_root: Option<PathBuf>,
    /// Sprite sheet holding the job icons.
    pub icon_sheet: ResPath,
    /// Department prototype file. The built-in departments are used when unset.
    pub departments: Option<PathBuf>,
    /// Locale file for department names.
    pub locale: Option<PathBuf>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            ordering: DEFAULT_ORDERING.to_string(),
            resource_root: None,
            icon_sheet: ResPath::default(),
            departments: None,
            locale: None,
        }
    }
}

impl ManifestConfig {
    /// Load configuration from `path`, or the user's config directory.
    /// Falls back to defaults if the file is missing or fails to parse.
    pub fn load(path: Option<&Path>) -> Self {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    fn load_with_env(path: Option<&Path>, var: impl Fn(&str) -> Option<String>) -> Self {
        let config = match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        };
        config.with_env_overrides(var)
    }

    fn try_load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => get_config_path()?,
        };
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config = serde_json::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Apply `CREW_MANIFEST_*` overrides, reading variables through `var`.
    fn with_env_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(ordering) = var("CREW_MANIFEST_ORDERING") {
            self.ordering = ordering;
        }
        if let Some(root) = var("CREW_MANIFEST_RESOURCES") {
            self.resource_root = Some(PathBuf::from(root));
        }
        if let Some(departments) = var("CREW_MANIFEST_DEPARTMENTS") {
            self.departments = Some(PathBuf::from(departments));
        }
        if let Some(locale) = var("CREW_MANIFEST_LOCALE") {
            self.locale = Some(PathBuf::from(locale));
        }
        self
    }

    pub fn ordering(&self) -> DepartmentOrdering {
        DepartmentOrdering::parse(&self.ordering)
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}

/// Display order of departments, parsed from the `ordering` setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentOrdering {
    ids: Vec<String>,
}

impl DepartmentOrdering {
    /// Split on commas. Tokens are trimmed and empty tokens dropped.
    pub fn parse(value: &str) -> Self {
        Self {
            ids: value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Position of `department` in the list, or `None` if it is unranked.
    /// Duplicate ids rank at their first occurrence.
    pub fn rank(&self, department: &str) -> Option<usize> {
        self.ids.iter().position(|id| id == department)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_trims_and_drops_empty() {
        let ordering = DepartmentOrdering::parse(" Command, Security,,Cargo ,");
        assert_eq!(ordering.ids(), ["Command", "Security", "Cargo"]);
    }

    #[test]
    fn test_rank_uses_first_occurrence() {
        let ordering = DepartmentOrdering::parse("A,B,A");
        assert_eq!(ordering.rank("A"), Some(0));
        assert_eq!(ordering.rank("B"), Some(1));
        assert_eq!(ordering.rank("C"), None);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ManifestConfig::try_load(Some(&dir.path().join("nope.json"))).unwrap();
        assert_eq!(config.ordering, DEFAULT_ORDERING);
        assert_eq!(config.icon_sheet, ResPath::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        fs::write(&path, r#"{"ordering": "Cargo, Command"}"#).unwrap();
        let loaded = ManifestConfig::try_load(Some(&path)).unwrap();
        assert_eq!(loaded.ordering().ids(), ["Cargo", "Command"]);
        assert!(loaded.locale.is_none());

        fs::write(&path, r#"{"locale": "/tmp/en-US.ftl"}"#).unwrap();
        let partial = ManifestConfig::try_load(Some(&path)).unwrap();
        assert_eq!(partial.ordering, DEFAULT_ORDERING);
        assert_eq!(partial.locale, Some(PathBuf::from("/tmp/en-US.ftl")));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{").unwrap();
        assert!(ManifestConfig::try_load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"ordering": 42"#).unwrap();

        let config = ManifestConfig::load_with_env(Some(&path), |_| None);
        assert_eq!(config.ordering, DEFAULT_ORDERING);
        assert_eq!(config.icon_sheet, ResPath::default());
        assert!(config.resource_root.is_none());
        assert!(config.departments.is_none());
        assert!(config.locale.is_none());

        // The public entry point takes the same fallback.
        assert_eq!(ManifestConfig::load(Some(&path)).icon_sheet, ResPath::default());
    }

    #[test]
    fn test_env_overrides_replace_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"{"ordering": "Command", "resource_root": "/srv/file", "locale": "/srv/file.ftl"}"#,
        )
        .unwrap();

        let env: HashMap<&str, &str> = [
            ("CREW_MANIFEST_ORDERING", "Cargo,Security"),
            ("CREW_MANIFEST_RESOURCES", "/srv/resources"),
            ("CREW_MANIFEST_DEPARTMENTS", "/srv/departments.json"),
            ("CREW_MANIFEST_LOCALE", "/srv/en-US.ftl"),
        ]
        .into_iter()
        .collect();
        let config =
            ManifestConfig::load_with_env(Some(&path), |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.ordering().ids(), ["Cargo", "Security"]);
        assert_eq!(config.resource_root, Some(PathBuf::from("/srv/resources")));
        assert_eq!(config.departments, Some(PathBuf::from("/srv/departments.json")));
        assert_eq!(config.locale, Some(PathBuf::from("/srv/en-US.ftl")));
    }

    #[test]
    fn test_each_env_override_applies_alone() {
        let x = Some(PathBuf::from("X"));
        for name in [
            "CREW_MANIFEST_ORDERING",
            "CREW_MANIFEST_RESOURCES",
            "CREW_MANIFEST_DEPARTMENTS",
            "CREW_MANIFEST_LOCALE",
        ] {
            let config = ManifestConfig::default()
                .with_env_overrides(|key| (key == name).then(|| "X".to_string()));
            let applied = match name {
                "CREW_MANIFEST_ORDERING" => config.ordering == "X",
                "CREW_MANIFEST_RESOURCES" => config.resource_root == x,
                "CREW_MANIFEST_DEPARTMENTS" => config.departments == x,
                _ => config.locale == x,
            };
            assert!(applied, "{name} was not applied");
        }

        let untouched = ManifestConfig::default().with_env_overrides(|_| None);
        assert_eq!(untouched.ordering, DEFAULT_ORDERING);
        assert!(untouched.resource_root.is_none());
        assert!(untouched.departments.is_none());
        assert!(untouched.locale.is_none());
    }
}
