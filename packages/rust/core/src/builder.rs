//! End-to-end sidebar build: content directory → documents → entries → groups.
//!
//! The build is fail-soft. A missing directory yields an empty sidebar and a
//! broken document falls back to its file name; neither is surfaced to the
//! caller, so a site build never fails on navigation metadata alone.

use tracing::{info, instrument, warn};

use wordbook_shared::{Entry, Sidebar, SidebarOptions};

use crate::{scan, sidebar};

/// Progress callback for reporting build status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called after each document's front-matter has been read.
    fn document_scanned(&self, slug: &str, current: usize, total: usize);
    /// Called when the build completes.
    fn done(&self, sidebar: &Sidebar);
}

/// No-op progress reporter for library/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn document_scanned(&self, _slug: &str, _current: usize, _total: usize) {}
    fn done(&self, _sidebar: &Sidebar) {}
}

/// Build the sidebar for `options.content_dir`.
///
/// Never fails. Diagnostics are emitted only when `options.verbose` is set.
pub fn build_sidebar(options: &SidebarOptions) -> Sidebar {
    build_sidebar_with_progress(options, &SilentProgress)
}

/// [`build_sidebar`] with progress callbacks.
///
/// 1. List documents in collated filename order
/// 2. Read each document's front-matter title
/// 3. Derive entries (title, or slug as fallback)
/// 4. Group by first letter and render labels/links
#[instrument(skip_all, fields(dir = %options.content_dir.display()))]
pub fn build_sidebar_with_progress(
    options: &SidebarOptions,
    progress: &dyn ProgressReporter,
) -> Sidebar {
    // --- Phase 1: Listing ---
    progress.phase("Listing documents");
    let listing = match scan::list_documents(&options.content_dir, &options.extension) {
        Ok(listing) => listing,
        Err(e) => {
            if options.verbose {
                warn!(error = %e, "content directory unavailable, emitting an empty sidebar");
            }
            let sidebar = Sidebar::default();
            progress.done(&sidebar);
            return sidebar;
        }
    };

    if options.verbose {
        info!(
            count = listing.documents.len(),
            extension = %options.extension,
            "found word documents"
        );
        for path in &listing.skipped {
            warn!(path = %path.display(), "skipping file with a non UTF-8 name");
        }
    }

    // --- Phase 2: Front-matter ---
    progress.phase("Reading front-matter");
    let total = listing.documents.len();
    let mut entries: Vec<Entry> = Vec::with_capacity(total);
    let mut fallbacks = 0usize;

    for (i, doc) in listing.documents.iter().enumerate() {
        let title = match scan::read_title(&doc.path) {
            Ok(title) => title,
            Err(e) => {
                fallbacks += 1;
                if options.verbose {
                    warn!(
                        file = %doc.path.display(),
                        error = %e,
                        "could not read front-matter, using the file name as display name"
                    );
                }
                None
            }
        };

        entries.push(scan::derive_entry(&doc.slug, title));
        progress.document_scanned(&doc.slug, i + 1, total);
    }

    // --- Phase 3: Grouping ---
    progress.phase("Grouping entries");
    let sidebar = sidebar::build_groups(entries, options);

    if options.verbose {
        info!(
            groups = sidebar.groups.len(),
            entries = sidebar.entry_count(),
            fallbacks,
            "generated letter groups"
        );
        for group in &sidebar.groups {
            info!(group = %group.label, words = group.items.len(), "group");
        }
    }

    progress.done(&sidebar);
    sidebar
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
