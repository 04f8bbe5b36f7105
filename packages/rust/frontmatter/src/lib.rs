//! Front-matter extraction for content documents.
//!
//! Documents may start with a YAML (`---`) or TOML (`+++`) metadata block.
//! The block has no fixed schema, so it is exposed as a JSON-style mapping
//! with typed accessors for the fields callers care about.

mod split;

use serde_json::{Map, Value};

use wordbook_shared::{Result, WordbookError};

pub use split::{Format, RawFrontMatter, split};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Parsed front-matter of one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    /// Format the block was written in.
    pub format: Option<Format>,
    fields: Map<String, Value>,
}

impl FrontMatter {
    /// Wrap an already-parsed mapping.
    pub fn from_fields(format: Format, fields: Map<String, Value>) -> Self {
        Self {
            format: Some(format),
            fields,
        }
    }

    /// Raw access to any field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The declared `title`, if it is usable as a display name.
    ///
    /// Strings are returned exactly as written, surrounding whitespace
    /// included. Nonzero numbers are rendered as written. The empty string,
    /// zero, booleans, null, sequences and mappings count as no title.
    pub fn title(&self) -> Option<String> {
        match self.fields.get("title")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Parse the leading metadata block of `input`.
///
/// Returns `Ok(None)` when there is no block. An unclosed block is parsed up
/// to the end of the document. A block that fails to parse or isn't a
/// key/value mapping is an error.
pub fn extract(input: &str) -> Result<Option<FrontMatter>> {
    let Some(raw) = split(input) else {
        return Ok(None);
    };

    let fields = parse_block(raw.format, raw.block)?;
    Ok(Some(FrontMatter::from_fields(raw.format, fields)))
}

/// Shorthand for `extract(input)` followed by [`FrontMatter::title`].
pub fn extract_title(input: &str) -> Result<Option<String>> {
    Ok(extract(input)?.and_then(|fm| fm.title()))
}

fn parse_block(format: Format, block: &str) -> Result<Map<String, Value>> {
    if is_blank(block) {
        return Ok(Map::new());
    }

    let value: Value = match format {
        Format::Yaml => serde_yaml::from_str(block)
            .map_err(|e| WordbookError::front_matter(format!("invalid YAML: {e}")))?,
        Format::Toml => toml::from_str(block)
            .map_err(|e| WordbookError::front_matter(format!("invalid TOML: {e}")))?,
    };

    match value {
        Value::Object(fields) => Ok(fields),
        // `~` or an explicit `null`
        Value::Null => Ok(Map::new()),
        other => Err(WordbookError::front_matter(format!(
            "{format} front-matter must be a mapping, found {}",
            kind_of(&other)
        ))),
    }
}

/// True when the block holds nothing but whitespace and `#` comment lines.
fn is_blank(block: &str) -> bool {
    block
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
