//! Shared types, error model, and configuration for the wordbook tools.
//!
//! This crate is the foundation depended on by all other wordbook crates.
//! It provides:
//! - [`WordbookError`] — the unified error type
//! - Domain types ([`Entry`], [`GroupKey`], [`Sidebar`], [`SidebarGroup`])
//! - Configuration ([`AppConfig`], [`SidebarOptions`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, CONFIG_FILE_NAME, SLUG_PLACEHOLDER, SidebarOptions, SidebarSection,
    config_file_path, init_config, load_config, load_config_from,
};
pub use error::{Result, WordbookError};
pub use types::{
    DocumentFile, Entry, GroupKey, SYMBOLS_SENTINEL, Sidebar, SidebarGroup, SidebarItem,
    SidebarStats,
};
