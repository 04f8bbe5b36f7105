//! Content directory scan and entry derivation.
//!
//! Lists the documents in a content directory in collated filename order and
//! turns each one into an [`Entry`] (slug + display name).

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use wordbook_shared::{DocumentFile, Entry, Result, WordbookError};

/// Documents found in a content directory.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    /// Matching documents, sorted by file name with [`collate`].
    pub documents: Vec<DocumentFile>,
    /// Matching files whose names aren't valid UTF-8 and can't form a slug.
    pub skipped: Vec<PathBuf>,
}

/// List every `*.{extension}` file directly inside `dir`.
///
/// Directories and files with other extensions are ignored. Fails with
/// [`WordbookError::MissingSourceDirectory`] when `dir` does not exist or is
/// not a directory.
pub fn list_documents(dir: &Path, extension: &str) -> Result<Listing> {
    if !dir.is_dir() {
        return Err(WordbookError::missing_dir(dir));
    }

    let suffix = format!(".{extension}");
    let mut listing = Listing::default();
    let mut named: Vec<(String, DocumentFile)> = Vec::new();

    let read_dir = std::fs::read_dir(dir).map_err(|e| WordbookError::io(dir, e))?;
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| WordbookError::io(dir, e))?;
        let path = dir_entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = dir_entry.file_name();
        let Some(name) = file_name.to_str() else {
            if file_name.to_string_lossy().ends_with(&suffix) {
                listing.skipped.push(path);
            }
            continue;
        };

        let Some(slug) = name.strip_suffix(&suffix) else {
            continue;
        };

        let document = DocumentFile {
            slug: slug.to_string(),
            path,
        };
        named.push((name.to_string(), document));
    }

    // Whole file names, extension included, so `a-m-.mdx` precedes `a.mdx`.
    named.sort_by(|(a, _), (b, _)| collate(a, b));
    listing.documents = named.into_iter().map(|(_, doc)| doc).collect();

    Ok(listing)
}

/// Compare two file names the way a reader scanning an English index would.
///
/// Case and accents are ignored. Punctuation sorts before digits and digits
/// before letters, with `_` `-` `,` `;` `:` `!` `?` `.` leading the
/// punctuation in that order. Names that still tie are compared raw so the
/// order is total.
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Punctuation and symbols in primary-weight order.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

fn collation_key(name: &str) -> Vec<(u8, u32)> {
    deunicode::deunicode(name)
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_whitespace() {
                (0, 0)
            } else if let Some(rank) = PUNCTUATION_ORDER.find(c) {
                (1, rank as u32)
            } else if c.is_ascii_digit() {
                (3, c as u32)
            } else if c.is_alphabetic() {
                (4, c as u32)
            } else {
                (2, c as u32)
            }
        })
        .collect()
}

/// Build the sidebar entry for a document.
///
/// The declared title wins when it is non-empty; otherwise the slug doubles
/// as the display name.
pub fn derive_entry(slug: &str, title: Option<String>) -> Entry {
    let display_name = title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| slug.to_string());

    Entry {
        slug: slug.to_string(),
        display_name,
    }
}

/// Read a document and return its declared title.
///
/// Unreadable files (including non UTF-8 content) and malformed
/// front-matter are errors; the caller decides how to degrade.
pub fn read_title(path: &Path) -> Result<Option<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| WordbookError::io(path, e))?;
    wordbook_frontmatter::extract_title(&content)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
