use crate::models::{CrewManifestEntries, Label, ManifestLayout};

use super::{build_section, filter_entries, group_and_sort, IconSource, ManifestContext};

/// State behind the crew manifest window.
///
/// Mirrors the window's inputs: the roster last handed to
/// [`set_source_entries`](Self::set_source_entries), the text in the filter box
/// and the station name label. Every populate throws away the previous layout
/// and builds a new one.
#[derive(Debug, Clone, Default)]
pub struct CrewManifestView {
    source_entries: CrewManifestEntries,
    filter_text: String,
    layout: ManifestLayout,
}

impl CrewManifestView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the roster used when the filter text changes. Does not re-render.
    pub fn set_source_entries(&mut self, entries: CrewManifestEntries) {
        self.source_entries = entries;
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn station_name(&self) -> &str {
        &self.layout.station_name.text
    }

    pub fn layout(&self) -> &ManifestLayout {
        &self.layout
    }

    /// Rebuild the listing for `name` from `entries`.
    ///
    /// `None` means no roster has arrived yet: the station name is still
    /// updated but the listing is hidden and empty.
    pub fn populate(
        &mut self,
        ctx: &ManifestContext<'_>,
        name: &str,
        entries: Option<&CrewManifestEntries>,
    ) -> &ManifestLayout {
        self.layout = build_layout(ctx, name, entries, &self.filter_text);
        &self.layout
    }

    /// Filter text changed: re-populate from the source entries.
    pub fn set_filter_text(
        &mut self,
        ctx: &ManifestContext<'_>,
        text: impl Into<String>,
    ) -> &ManifestLayout {
        self.filter_text = text.into();
        self.repopulate(ctx)
    }

    /// Filter text submitted: re-populate from the source entries.
    pub fn submit_filter(&mut self, ctx: &ManifestContext<'_>) -> &ManifestLayout {
        self.repopulate(ctx)
    }

    fn repopulate(&mut self, ctx: &ManifestContext<'_>) -> &ManifestLayout {
        let name = self.layout.station_name.text.clone();
        self.layout = build_layout(ctx, &name, Some(&self.source_entries), &self.filter_text);
        &self.layout
    }
}

/// Run the whole pipeline for one populate.
pub fn build_layout(
    ctx: &ManifestContext<'_>,
    name: &str,
    entries: Option<&CrewManifestEntries>,
    filter: &str,
) -> ManifestLayout {
    let Some(entries) = entries else {
        tracing::debug!("No manifest entries for {name:?}, hiding listing");
        return ManifestLayout::empty(name);
    };

    let filtered = filter_entries(entries, filter);
    let groups = group_and_sort(filtered.iter().copied(), ctx.prototypes, ctx.ordering);

    let sheet = ctx.resources.try_get_sprite_sheet(ctx.icon_sheet);
    let icons = IconSource {
        path: ctx.icon_sheet,
        sheet: sheet.as_deref(),
    };

    let sections: Vec<_> = groups
        .iter()
        .map(|group| build_section(group.department, &group.entries, ctx.localizer, icons))
        .collect();

    tracing::debug!(
        "Populated manifest for {:?}: {} of {} entries in {} sections",
        name,
        filtered.len(),
        entries.len(),
        sections.len()
    );

    ManifestLayout {
        station_name: Label::big(name),
        listing_visible: true,
        sections,
    }
}
