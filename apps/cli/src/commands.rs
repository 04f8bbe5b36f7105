//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use wordbook_core::{ProgressReporter, SilentProgress, build_sidebar_with_progress};
use wordbook_shared::{
    AppConfig, CONFIG_FILE_NAME, Sidebar, SidebarOptions, init_config, load_config,
    load_config_from,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// wordbook — build the alphabetical word sidebar.
#[derive(Parser)]
#[command(
    name = "wordbook",
    version,
    about = "Build the alphabetically grouped sidebar for a directory of word documents.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./wordbook.toml when present).
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Build the sidebar and print it as JSON.
    Build {
        #[command(flatten)]
        source: SourceArgs,

        /// Write the JSON to this file instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Emit single-line JSON.
        #[arg(long)]
        compact: bool,

        /// Suppress build diagnostics and the progress spinner.
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print every group label with its word count.
    Stats {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Flags that override the `[sidebar]` config section.
#[derive(Args, Debug, Default)]
pub(crate) struct SourceArgs {
    /// Directory of word documents.
    #[arg(short = 'd', long)]
    pub content_dir: Option<PathBuf>,

    /// Content file extension (e.g. mdx).
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Link template; `{slug}` is replaced by the document slug.
    #[arg(short, long)]
    pub link_template: Option<String>,
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Write a config file with defaults.
    Init {
        /// Target path (defaults to ./wordbook.toml).
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
///
/// Logs go to stderr; stdout is reserved for the generated JSON.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "wordbook=info",
        1 => "wordbook=debug",
        _ => "wordbook=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config_file.as_deref();
    match cli.command {
        Command::Build {
            source,
            out,
            compact,
            quiet,
        } => cmd_build(config_path, &source, out.as_deref(), compact, quiet),
        Command::Stats { source } => cmd_stats(config_path, &source),
        Command::Config { action } => match action {
            ConfigAction::Init { path } => cmd_config_init(path.as_deref()),
            ConfigAction::Show => cmd_config_show(config_path),
        },
    }
}

/// Load the config file (explicit path or ./wordbook.toml) and apply flag overrides.
fn resolve_config(config_path: Option<&Path>, source: &SourceArgs) -> Result<AppConfig> {
    let mut config = match config_path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    apply_overrides(&mut config, source);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut AppConfig, source: &SourceArgs) {
    if let Some(dir) = &source.content_dir {
        config.sidebar.content_dir = dir.to_string_lossy().into_owned();
    }
    if let Some(extension) = &source.extension {
        config.sidebar.extension = extension.clone();
    }
    if let Some(template) = &source.link_template {
        config.sidebar.link_template = template.clone();
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_build(
    config_path: Option<&Path>,
    source: &SourceArgs,
    out: Option<&Path>,
    compact: bool,
    quiet: bool,
) -> Result<()> {
    let config = resolve_config(config_path, source)?;
    let options = SidebarOptions::from(&config).with_verbose(!quiet);

    let sidebar = if quiet {
        build_sidebar_with_progress(&options, &SilentProgress)
    } else {
        info!(dir = %options.content_dir.display(), "building sidebar");
        build_sidebar_with_progress(&options, &CliProgress::new())
    };

    let json = render_json(&sidebar, compact)?;

    match out {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            if !quiet {
                info!(
                    path = %path.display(),
                    groups = sidebar.groups.len(),
                    entries = sidebar.entry_count(),
                    "sidebar written"
                );
            }
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn render_json(sidebar: &Sidebar, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(sidebar)?
    } else {
        serde_json::to_string_pretty(sidebar)?
    };
    Ok(json)
}

fn cmd_stats(config_path: Option<&Path>, source: &SourceArgs) -> Result<()> {
    let config = resolve_config(config_path, source)?;
    let options = SidebarOptions::from(&config).with_verbose(true);

    let sidebar = build_sidebar_with_progress(&options, &CliProgress::new());
    let stats = sidebar.stats();

    println!();
    for (label, count) in &stats.groups {
        println!("  {label:<20} {count:>6}");
    }
    println!();
    println!(
        "  {} words in {} groups",
        stats.document_count,
        stats.groups.len()
    );
    println!();

    Ok(())
}

fn cmd_config_init(path: Option<&Path>) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let path = init_config(&path)?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config_path: Option<&Path>) -> Result<()> {
    let config = resolve_config(config_path, &SourceArgs::default())?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .expect("valid spinner template")
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn document_scanned(&self, slug: &str, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Reading [{current}/{total}] {slug}"));
    }

    fn done(&self, _sidebar: &Sidebar) {
        self.spinner.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_flags_parse() {
        let cli = Cli::parse_from([
            "wordbook",
            "-v",
            "build",
            "--content-dir",
            "content/words",
            "--link-template",
            "/w/{slug}/",
            "--compact",
        ]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Command::Build {
                source, compact, quiet, ..
            } => {
                assert_eq!(source.content_dir, Some(PathBuf::from("content/words")));
                assert_eq!(source.link_template.as_deref(), Some("/w/{slug}/"));
                assert!(compact);
                assert!(!quiet);
            }
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn overrides_replace_config_values() {
        let mut config = AppConfig::default();
        let source = SourceArgs {
            content_dir: Some(PathBuf::from("content/glossary")),
            extension: Some("md".into()),
            link_template: None,
        };
        apply_overrides(&mut config, &source);
        assert_eq!(config.sidebar.content_dir, "content/glossary");
        assert_eq!(config.sidebar.extension, "md");
        assert_eq!(config.sidebar.link_template, "/words/{slug}/");
    }

    #[test]
    fn explicit_config_file_must_exist() {
        let missing = std::env::temp_dir()
            .join(format!("wb-cli-{}", uuid::Uuid::now_v7()))
            .join(CONFIG_FILE_NAME);
        assert!(resolve_config(Some(&missing), &SourceArgs::default()).is_err());
    }

    #[test]
    fn invalid_template_override_is_rejected() {
        let dir = std::env::temp_dir().join(format!("wb-cli-{}", uuid::Uuid::now_v7()));
        let path = dir.join(CONFIG_FILE_NAME);
        init_config(&path).unwrap();

        let source = SourceArgs {
            link_template: Some("/words/".into()),
            ..SourceArgs::default()
        };
        let err = resolve_config(Some(&path), &source).unwrap_err();
        assert!(err.to_string().contains("{slug}"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn json_output_matches_sidebar_shape() {
        let dir = std::env::temp_dir().join(format!("wb-cli-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("a-m-.mdx"), "---\ntitle: \"a.m.\"\n---\n").unwrap();

        let sidebar = wordbook_core::build_sidebar(&SidebarOptions::for_dir(&dir));
        let json = render_json(&sidebar, true).unwrap();
        assert_eq!(
            json,
            r#"[{"label":"A (1)","collapsed":true,"items":[{"label":"a.m.","link":"/words/a-m-/"}]}]"#
        );

        std::fs::remove_dir_all(&dir).ok();
    }
}
