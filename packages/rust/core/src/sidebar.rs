//! Sidebar builder.
//!
//! Partitions entries into alphabetical groups keyed by the first letter of
//! their display name and renders them into the labeled, linked structure the
//! site's navigation consumes.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use wordbook_shared::{
    Entry, GroupKey, SLUG_PLACEHOLDER, Sidebar, SidebarGroup, SidebarItem, SidebarOptions,
};

/// Group and render entries.
///
/// Entries keep their input order inside each group; groups come out in
/// [`GroupKey`] order, so the non-letter group leads.
#[instrument(skip_all, fields(entry_count = entries.len()))]
pub fn build_groups(entries: Vec<Entry>, options: &SidebarOptions) -> Sidebar {
    let grouped = group_entries(entries);
    let sidebar = render_groups(grouped, options);

    if options.verbose {
        debug!(groups = sidebar.groups.len(), "sidebar groups built");
    }

    sidebar
}

/// Key for a display name: its first character uppercased, if that is a
/// single ASCII letter, else [`GroupKey::Symbols`].
pub fn group_key(display_name: &str) -> GroupKey {
    let Some(first) = display_name.chars().next() else {
        return GroupKey::Symbols;
    };

    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => GroupKey::Letter(c),
        _ => GroupKey::Symbols,
    }
}

/// Partition entries by [`group_key`] of their display name.
pub fn group_entries(entries: impl IntoIterator<Item = Entry>) -> BTreeMap<GroupKey, Vec<Entry>> {
    let mut grouped: BTreeMap<GroupKey, Vec<Entry>> = BTreeMap::new();
    for entry in entries {
        grouped
            .entry(group_key(&entry.display_name))
            .or_default()
            .push(entry);
    }
    grouped
}

/// Turn grouped entries into labeled sidebar groups.
pub fn render_groups(grouped: BTreeMap<GroupKey, Vec<Entry>>, options: &SidebarOptions) -> Sidebar {
    let groups = grouped
        .into_iter()
        .map(|(key, entries)| SidebarGroup {
            key,
            label: group_label(key, entries.len(), &options.symbols_label),
            collapsed: options.collapsed,
            items: entries
                .into_iter()
                .map(|entry| SidebarItem {
                    link: render_link(&options.link_template, &entry.slug),
                    label: entry.display_name,
                    slug: entry.slug,
                })
                .collect(),
        })
        .collect();

    Sidebar { groups }
}

/// `"{key} ({count})"`, with the symbols word standing in for `#`.
pub fn group_label(key: GroupKey, count: usize, symbols_label: &str) -> String {
    if key.is_symbols() {
        format!("{symbols_label} ({count})")
    } else {
        format!("{key} ({count})")
    }
}

/// Substitute the slug into the link template, verbatim.
pub fn render_link(template: &str, slug: &str) -> String {
    template.replace(SLUG_PLACEHOLDER, slug)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
