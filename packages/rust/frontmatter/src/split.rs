//! Locating the front-matter block at the head of a document.
//!
//! A block opens on the very first line (after an optional BOM) with `---`
//! (YAML) or `+++` (TOML) and closes at the next line holding the same
//! delimiter. A block that is never closed runs to the end of the document.
//! Trailing spaces/tabs on delimiter lines and CRLF endings are accepted.

use std::sync::LazyLock;

use regex::Regex;

/// Serialization format of a front-matter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `---` delimited YAML.
    Yaml,
    /// `+++` delimited TOML.
    Toml,
}

impl Format {
    fn closing(self) -> &'static Regex {
        match self {
            Format::Yaml => &YAML_CLOSE_RE,
            Format::Toml => &TOML_CLOSE_RE,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Yaml => f.write_str("YAML"),
            Format::Toml => f.write_str("TOML"),
        }
    }
}

/// An unparsed front-matter block and the body that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrontMatter<'a> {
    pub format: Format,
    /// Text between the delimiter lines, without the final line break.
    pub block: &'a str,
    /// Everything after the closing delimiter line (empty for an unclosed block).
    pub body: &'a str,
}

// ---------------------------------------------------------------------------
// Delimiter patterns (compiled once)
// ---------------------------------------------------------------------------

/// Opening delimiter on the first line.
static OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A\x{FEFF}?(---|\+\+\+)[ \t]*\r?\n").expect("open delimiter regex")
});

/// Closing `---` line.
static YAML_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^---[ \t]*\r?(?:\n|\z)").expect("YAML close regex")
});

/// Closing `+++` line.
static TOML_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\+\+\+[ \t]*\r?(?:\n|\z)").expect("TOML close regex")
});

/// Split a document into its front-matter block and body.
///
/// Returns `None` when the document doesn't start with a delimiter line.
pub fn split(input: &str) -> Option<RawFrontMatter<'_>> {
    let caps = OPEN_RE.captures(input)?;

    let format = if &caps[1] == "---" {
        Format::Yaml
    } else {
        Format::Toml
    };

    let rest = &input[caps.get(0).map_or(0, |m| m.end())..];
    let (content, body) = match format.closing().find(rest) {
        Some(close) => (&rest[..close.start()], &rest[close.end()..]),
        None => (rest, ""),
    };

    let block = content
        .strip_suffix('\n')
        .map(|b| b.strip_suffix('\r').unwrap_or(b))
        .unwrap_or(content);

    Some(RawFrontMatter {
        format,
        block,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_yaml_block() {
        let raw = split("---\ntitle: hello\n---\n# hello\n").unwrap();
        assert_eq!(raw.format, Format::Yaml);
        assert_eq!(raw.block, "title: hello");
        assert_eq!(raw.body, "# hello\n");
    }

    #[test]
    fn split_toml_block() {
        let raw = split("+++\ntitle = \"hello\"\n+++\nbody").unwrap();
        assert_eq!(raw.format, Format::Toml);
        assert_eq!(raw.block, "title = \"hello\"");
        assert_eq!(raw.body, "body");
    }

    #[test]
    fn split_handles_bom_and_crlf() {
        let input = "\u{feff}---\r\ntitle: hi\r\n---\r\nbody\r\n";
        let raw = split(input).unwrap();
        assert_eq!(raw.block, "title: hi");
        assert_eq!(raw.body, "body\r\n");
    }

    #[test]
    fn split_empty_block() {
        let raw = split("---\n---\nbody").unwrap();
        assert_eq!(raw.block, "");
        assert_eq!(raw.body, "body");
    }

    #[test]
    fn split_block_closed_at_end_of_file() {
        let raw = split("---\ntitle: x\n---").unwrap();
        assert_eq!(raw.block, "title: x");
        assert_eq!(raw.body, "");
    }

    #[test]
    fn no_block_when_first_line_is_not_a_delimiter() {
        assert!(split("# heading\n---\ntitle: x\n---\n").is_none());
        assert!(split("----\ntitle: x\n----\n").is_none());
        assert!(split("").is_none());
        assert!(split("---").is_none());
    }

    #[test]
    fn closing_delimiter_must_match_format() {
        let raw = split("---\ntitle: x\n+++\nbody").unwrap();
        assert_eq!(raw.block, "title: x\n+++\nbody");
        assert_eq!(raw.body, "");
    }

    #[test]
    fn unclosed_block_runs_to_end_of_document() {
        let raw = split("---\ntitle: apple\n").unwrap();
        assert_eq!(raw.format, Format::Yaml);
        assert_eq!(raw.block, "title: apple");
        assert_eq!(raw.body, "");

        let raw = split("+++\r\ntitle = \"x\"\r\n").unwrap();
        assert_eq!(raw.block, "title = \"x\"");
    }

    #[test]
    fn dashes_inside_a_line_do_not_close() {
        let raw = split("---\ntitle: a---b\n---\n").unwrap();
        assert_eq!(raw.block, "title: a---b");
    }
}
