//! Error types for the wordbook sidebar tools.
//!
//! Library crates use [`WordbookError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all wordbook operations.
#[derive(Debug, thiserror::Error)]
pub enum WordbookError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// The content directory to scan does not exist.
    #[error("content directory not found: {path:?}")]
    MissingSourceDirectory { path: PathBuf },

    /// A document's front-matter block could not be parsed.
    #[error("front-matter error: {message}")]
    FrontMatter { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON/TOML output error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, WordbookError>;

impl WordbookError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a front-matter error from any displayable message.
    pub fn front_matter(msg: impl Into<String>) -> Self {
        Self::FrontMatter {
            message: msg.into(),
        }
    }

    /// Report a missing content directory.
    pub fn missing_dir(path: impl Into<PathBuf>) -> Self {
        Self::MissingSourceDirectory { path: path.into() }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = WordbookError::config("link_template must contain {slug}");
        assert_eq!(
            err.to_string(),
            "config error: link_template must contain {slug}"
        );

        let err = WordbookError::front_matter("unterminated YAML block");
        assert!(err.to_string().contains("unterminated YAML block"));

        let err = WordbookError::missing_dir("src/content/docs/words");
        assert!(err.to_string().contains("src/content/docs/words"));
    }

    #[test]
    fn io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = WordbookError::io("/tmp/words/a.mdx", source);
        let msg = err.to_string();
        assert!(msg.contains("a.mdx"));
        assert!(msg.contains("gone"));
    }
}
