use serde::{Deserialize, Serialize};

/// A single crew member as shown on the manifest.
///
/// Entries carry no identity beyond their fields. `job_prototype` is a key into
/// the job registry and is what department membership is matched against, while
/// `job_icon` names a state in the job icon sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewManifestEntry {
    pub name: String,
    pub job_title: String,
    pub job_prototype: String,
    pub job_icon: String,
}

impl CrewManifestEntry {
    pub fn new(
        name: impl Into<String>,
        job_title: impl Into<String>,
        job_prototype: impl Into<String>,
        job_icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            job_title: job_title.into(),
            job_prototype: job_prototype.into(),
            job_icon: job_icon.into(),
        }
    }

    /// Whether `needle` (already passed through [`fold_case`]) occurs in the
    /// name, job id or job title.
    pub(crate) fn matches_folded(&self, needle: &str) -> bool {
        [&self.name, &self.job_prototype, &self.job_title]
            .iter()
            .any(|field| fold_case(field).contains(needle))
    }
}

/// Lowercase one character at a time, so every character folds the same
/// way regardless of its neighbours (no final-sigma rule).
pub(crate) fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// The full roster for one station.
///
/// Insertion order is kept but carries no display meaning; departments are
/// re-sorted every time the manifest is populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewManifestEntries {
    #[serde(default)]
    pub entries: Vec<CrewManifestEntry>,
}

impl CrewManifestEntries {
    pub fn new(entries: Vec<CrewManifestEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CrewManifestEntry> {
        self.entries.iter()
    }
}

impl From<Vec<CrewManifestEntry>> for CrewManifestEntries {
    fn from(entries: Vec<CrewManifestEntry>) -> Self {
        Self::new(entries)
    }
}

impl<'a> IntoIterator for &'a CrewManifestEntries {
    type Item = &'a CrewManifestEntry;
    type IntoIter = std::slice::Iter<'a, CrewManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A roster file: the station name plus its entries.
///
/// `entries: null` means no data has arrived yet, which hides the listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRoster {
    pub station_name: String,
    #[serde(default)]
    pub entries: Option<Vec<CrewManifestEntry>>,
}

impl StationRoster {
    pub fn into_parts(self) -> (String, Option<CrewManifestEntries>) {
        (self.station_name, self.entries.map(CrewManifestEntries::new))
    }
}
