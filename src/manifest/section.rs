use crate::localization::Localizer;
use crate::models::{
    CrewManifestEntry, EntryRow, IconSlot, Label, Section, StretchMode, TitleRow, ICON_SCALE,
    SECTION_COLUMNS,
};
use crate::resources::{ResPath, SpriteSheet};

/// Icon state used when a job has no icon of its own.
pub const UNKNOWN_ICON_STATE: &str = "Unknown";

/// Job icon source for one populate: the sheet path and, if it loaded, the sheet.
#[derive(Debug, Clone, Copy)]
pub struct IconSource<'a> {
    pub path: &'a ResPath,
    pub sheet: Option<&'a SpriteSheet>,
}

/// Header text for a department: `department-<id>` if translated, else the id,
/// passed through the localizer once more.
pub fn department_title(localizer: &dyn Localizer, department: &str) -> String {
    let title = localizer
        .try_get_string(&format!("department-{department}"))
        .unwrap_or_else(|| department.to_string());
    localizer.get_string(&title)
}

/// Pick the icon for a job, or `None` when there is no sheet to draw from.
pub fn resolve_icon(icons: IconSource<'_>, job_icon: &str) -> Option<IconSlot> {
    let sheet = icons.sheet?;

    let state = if sheet.has_state(job_icon) {
        Some(job_icon.to_string())
    } else if sheet.has_state(UNKNOWN_ICON_STATE) {
        Some(UNKNOWN_ICON_STATE.to_string())
    } else {
        None
    };

    Some(IconSlot {
        sheet: icons.path.clone(),
        state,
        scale: ICON_SCALE,
        stretch: StretchMode::KeepCentered,
    })
}

/// Lay out one department: big header, then a name/title row per entry.
pub fn build_section(
    department: &str,
    entries: &[&CrewManifestEntry],
    localizer: &dyn Localizer,
    icons: IconSource<'_>,
) -> Section {
    let rows = entries
        .iter()
        .map(|entry| EntryRow {
            name: Label::plain(&entry.name),
            title: TitleRow {
                icon: resolve_icon(icons, &entry.job_icon),
                title: Label::plain(&entry.job_title),
            },
        })
        .collect();

    Section {
        department: department.to_string(),
        header: Label::big(department_title(localizer, department)),
        columns: SECTION_COLUMNS,
        rows,
    }
}
