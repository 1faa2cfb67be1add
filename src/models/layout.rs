use serde::{Deserialize, Serialize};

use crate::resources::ResPath;

/// Style class used for the station name and department headers.
pub const LABEL_BIG: &str = "LabelBig";

/// Number of grid columns in a section: name, then title.
pub const SECTION_COLUMNS: usize = 2;

/// Scale applied to job icons.
pub const ICON_SCALE: f32 = 2.0;

/// The complete manifest as it should be displayed.
///
/// Rebuilt from scratch on every populate; nothing is patched incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestLayout {
    pub station_name: Label,
    /// False until roster data has been supplied.
    pub listing_visible: bool,
    pub sections: Vec<Section>,
}

impl ManifestLayout {
    /// A layout with no data yet: listing hidden, no sections.
    pub fn empty(station_name: impl Into<String>) -> Self {
        Self {
            station_name: Label::big(station_name),
            listing_visible: false,
            sections: Vec::new(),
        }
    }
}

impl Default for ManifestLayout {
    fn default() -> Self {
        Self::empty("")
    }
}

/// One department block: a header label over a grid of entry rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Department prototype id the section was built from.
    pub department: String,
    pub header: Label,
    pub columns: usize,
    pub rows: Vec<EntryRow>,
}

/// A grid row: the name cell and the title cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRow {
    pub name: Label,
    pub title: TitleRow,
}

/// Horizontal box holding an optional icon followed by the job title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRow {
    /// `None` when the icon sheet could not be loaded at all.
    pub icon: Option<IconSlot>,
    pub title: Label,
}

/// A texture cell pointing at one state of a sprite sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconSlot {
    pub sheet: ResPath,
    /// `None` when the sheet has neither the job's state nor the fallback state.
    /// The slot is still laid out, it just draws nothing.
    pub state: Option<String>,
    pub scale: f32,
    pub stretch: StretchMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StretchMode {
    KeepCentered,
}

/// A text label with an optional style class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_class: Option<String>,
}

impl Label {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style_class: None,
        }
    }

    pub fn big(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style_class: Some(LABEL_BIG.to_string()),
        }
    }
}
