//! Sidebar index builder for the wordbook site.
//!
//! Scans a directory of per-word content documents and produces the
//! alphabetically grouped navigation structure the site renders.

pub mod builder;
pub mod scan;
pub mod sidebar;

pub use builder::{ProgressReporter, SilentProgress, build_sidebar, build_sidebar_with_progress};
