//! Application configuration for the wordbook sidebar builder.
//!
//! Project config lives at `./wordbook.toml` (or the path passed via `--config`).
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordbookError};

/// Default configuration file name, resolved against the working directory.
pub const CONFIG_FILE_NAME: &str = "wordbook.toml";

/// Placeholder substituted with each document's slug.
pub const SLUG_PLACEHOLDER: &str = "{slug}";

// ---------------------------------------------------------------------------
// Config structs (matching wordbook.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Sidebar generation settings.
    #[serde(default)]
    pub sidebar: SidebarSection,
}

/// `[sidebar]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Directory holding one content document per word.
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// Content file extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Link template; `{slug}` is replaced by the document slug.
    #[serde(default = "default_link_template")]
    pub link_template: String,

    /// Label used in place of `#` for the non-letter group.
    #[serde(default = "default_symbols_label")]
    pub symbols_label: String,

    /// Whether groups start collapsed.
    #[serde(default = "default_true")]
    pub collapsed: bool,
}

impl Default for SidebarSection {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            extension: default_extension(),
            link_template: default_link_template(),
            symbols_label: default_symbols_label(),
            collapsed: true,
        }
    }
}

fn default_content_dir() -> String {
    "src/content/docs/words".into()
}
fn default_extension() -> String {
    "mdx".into()
}
fn default_link_template() -> String {
    "/words/{slug}/".into()
}
fn default_symbols_label() -> String {
    "符号/数字".into()
}
fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Reject settings the builder cannot work with.
    pub fn validate(&self) -> Result<()> {
        let sidebar = &self.sidebar;
        if sidebar.content_dir.trim().is_empty() {
            return Err(WordbookError::config("sidebar.content_dir must not be empty"));
        }
        if sidebar.extension.trim_start_matches('.').is_empty() {
            return Err(WordbookError::config("sidebar.extension must not be empty"));
        }
        if !sidebar.link_template.contains(SLUG_PLACEHOLDER) {
            return Err(WordbookError::config(format!(
                "sidebar.link_template must contain {SLUG_PLACEHOLDER}, got '{}'",
                sidebar.link_template
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sidebar options (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime builder configuration — merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct SidebarOptions {
    /// Directory to scan.
    pub content_dir: PathBuf,
    /// Content extension, without the leading dot.
    pub extension: String,
    /// Link template containing `{slug}`.
    pub link_template: String,
    /// Label word for the non-letter group.
    pub symbols_label: String,
    /// Whether groups start collapsed.
    pub collapsed: bool,
    /// Emit diagnostics while building. Never changes the result.
    pub verbose: bool,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for SidebarOptions {
    fn from(config: &AppConfig) -> Self {
        let sidebar = &config.sidebar;
        Self {
            content_dir: PathBuf::from(&sidebar.content_dir),
            extension: sidebar.extension.trim_start_matches('.').to_string(),
            link_template: sidebar.link_template.clone(),
            symbols_label: sidebar.symbols_label.clone(),
            collapsed: sidebar.collapsed,
            verbose: false,
        }
    }
}

impl SidebarOptions {
    /// Options for scanning `content_dir` with every other setting at its default.
    pub fn for_dir(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            ..Self::default()
        }
    }

    /// Enable or disable diagnostics.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Path of the default config file in the working directory.
pub fn config_file_path() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| WordbookError::io(".", e))?;
    Ok(cwd.join(CONFIG_FILE_NAME))
}

/// Load the project config. Returns defaults if `wordbook.toml` does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load and validate the config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| WordbookError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        WordbookError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    config.validate()?;
    Ok(config)
}

/// Write a default config file to `path`.
/// Refuses to overwrite an existing file.
pub fn init_config(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Err(WordbookError::config(format!(
            "{} already exists",
            path.display()
        )));
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| WordbookError::io(dir, e))?;
    }

    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| WordbookError::Serialization(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| WordbookError::io(path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("content_dir"));
        assert!(toml_str.contains("/words/{slug}/"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.sidebar.extension, "mdx");
        assert_eq!(parsed.sidebar.symbols_label, "符号/数字");
        assert!(parsed.sidebar.collapsed);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let toml_str = r#"
[sidebar]
content_dir = "content/glossary"
symbols_label = "Symbols"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.sidebar.content_dir, "content/glossary");
        assert_eq!(config.sidebar.symbols_label, "Symbols");
        assert_eq!(config.sidebar.link_template, "/words/{slug}/");
        config.validate().expect("valid");
    }

    #[test]
    fn options_from_app_config() {
        let mut app = AppConfig::default();
        app.sidebar.extension = ".md".into();
        let options = SidebarOptions::from(&app);
        assert_eq!(options.extension, "md");
        assert_eq!(options.content_dir, PathBuf::from("src/content/docs/words"));
        assert!(!options.verbose);
        assert!(options.with_verbose(true).verbose);
    }

    #[test]
    fn validation_rejects_template_without_slug() {
        let mut config = AppConfig::default();
        config.sidebar.link_template = "/words/".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("{slug}"));

        let mut config = AppConfig::default();
        config.sidebar.extension = ".".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn init_then_load_from_file() {
        let dir = std::env::temp_dir().join(format!("wb-config-test-{}", uuid::Uuid::now_v7()));
        let path = dir.join(CONFIG_FILE_NAME);

        init_config(&path).expect("init");
        let loaded = load_config_from(&path).expect("load");
        assert_eq!(loaded.sidebar.content_dir, "src/content/docs/words");

        // Second init must not clobber the file
        assert!(init_config(&path).is_err());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let dir = std::env::temp_dir().join(format!("wb-config-bad-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[sidebar\ncontent_dir = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
