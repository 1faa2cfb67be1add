//! Text and JSON adapters for a [`ManifestLayout`].

use crate::models::{EntryRow, IconSlot, ManifestLayout, Section};

/// Render a layout as plain text.
///
/// Example output:
/// ```text
/// Box Station
/// ===========
///
/// Civilian
///   Bob   [Unknown] Clown
///
/// Command
///   Jane  [Captain] Captain
/// ```
///
/// Icons are shown as their state name in brackets; an icon slot with no
/// state renders as `[ ]`. Rows have no icon column when the sheet was missing.
pub fn render_text(layout: &ManifestLayout) -> String {
    let mut output = String::new();
    let title = &layout.station_name.text;
    output.push_str(title);
    output.push('\n');
    output.push_str(&"=".repeat(title.chars().count()));
    output.push('\n');

    if !layout.listing_visible {
        return output;
    }

    for section in &layout.sections {
        output.push('\n');
        render_section(&mut output, section);
    }
    output
}

fn render_section(output: &mut String, section: &Section) {
    output.push_str(&section.header.text);
    output.push('\n');

    // Pad the name column so titles line up within the grid.
    let name_width = section
        .rows
        .iter()
        .map(|row| row.name.text.chars().count())
        .max()
        .unwrap_or(0);

    for row in &section.rows {
        render_row(output, row, name_width);
    }
}

fn render_row(output: &mut String, row: &EntryRow, name_width: usize) {
    output.push_str("  ");
    output.push_str(&row.name.text);
    let padding = name_width - row.name.text.chars().count() + 2;
    output.push_str(&" ".repeat(padding));
    if let Some(icon) = &row.title.icon {
        output.push_str(&icon_text(icon));
        output.push(' ');
    }
    output.push_str(&row.title.title.text);
    output.push('\n');
}

fn icon_text(icon: &IconSlot) -> String {
    match &icon.state {
        Some(state) => format!("[{}]", state),
        None => "[ ]".to_string(),
    }
}

/// Render a layout as pretty-printed JSON.
pub fn render_json(layout: &ManifestLayout) -> serde_json::Result<String> {
    serde_json::to_string_pretty(layout)
}
