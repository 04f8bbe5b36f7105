//! Core domain types for the generated sidebar.

use std::path::PathBuf;

use serde::Serialize;

/// Sentinel character for the non-letter bucket.
pub const SYMBOLS_SENTINEL: char = '#';

// ---------------------------------------------------------------------------
// DocumentFile / Entry
// ---------------------------------------------------------------------------

/// A content document found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    /// Filename with the content extension stripped (e.g., `a-m-`).
    pub slug: String,
    /// Full path to the document.
    pub path: PathBuf,
}

/// A document as seen by the sidebar: its slug plus the name shown to readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Stable identifier used to build the link. Never altered.
    pub slug: String,
    /// Declared title, or the slug when the document has none.
    pub display_name: String,
}

// ---------------------------------------------------------------------------
// GroupKey
// ---------------------------------------------------------------------------

/// Key of an alphabetical group.
///
/// The derived ordering puts [`GroupKey::Symbols`] before every letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum GroupKey {
    /// Catch-all bucket for names that don't start with `A`–`Z`.
    Symbols,
    /// An uppercase ASCII letter.
    Letter(char),
}

impl GroupKey {
    /// The character this key sorts and displays by.
    pub fn as_char(&self) -> char {
        match self {
            GroupKey::Symbols => SYMBOLS_SENTINEL,
            GroupKey::Letter(c) => *c,
        }
    }

    /// Whether this is the non-letter bucket.
    pub fn is_symbols(&self) -> bool {
        matches!(self, GroupKey::Symbols)
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ---------------------------------------------------------------------------
// Sidebar
// ---------------------------------------------------------------------------

/// A single link in a sidebar group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    /// Display name of the word.
    pub label: String,
    /// Navigation path built from the slug.
    pub link: String,
    /// Slug the link was built from (in-memory only).
    #[serde(skip)]
    pub slug: String,
}

/// A labeled, collapsible group of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    /// Grouping key (in-memory only; the label carries it for readers).
    #[serde(skip)]
    pub key: GroupKey,
    /// Label such as `A (120)`.
    pub label: String,
    /// Whether the group starts collapsed.
    pub collapsed: bool,
    /// Links in this group, in scan order.
    pub items: Vec<SidebarItem>,
}

/// The full generated sidebar, serialized as a bare array of groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sidebar {
    pub groups: Vec<SidebarGroup>,
}

impl Sidebar {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of links across every group.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    /// Look up the group for a key.
    pub fn group(&self, key: GroupKey) -> Option<&SidebarGroup> {
        self.groups.iter().find(|g| g.key == key)
    }

    /// Summary counts for diagnostics and the `stats` command.
    pub fn stats(&self) -> SidebarStats {
        SidebarStats {
            document_count: self.entry_count(),
            groups: self
                .groups
                .iter()
                .map(|g| (g.label.clone(), g.items.len()))
                .collect(),
        }
    }
}

/// Per-group counts of a built sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarStats {
    /// Number of documents that made it into the sidebar.
    pub document_count: usize,
    /// `(label, count)` per group, in emission order.
    pub groups: Vec<(String, usize)>,
}
