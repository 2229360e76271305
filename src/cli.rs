//! Command-line interface for adoptcheck.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::analyzer;
use crate::catalog::{self, Category};
use crate::config::{self, Config};
use crate::report;
use crate::scanner;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_BELOW_MIN: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// AI assistant adoption analyzer - find unused assistant capabilities.
///
/// Adoptcheck inspects your local coding environment (session logs, editor
/// settings, workspace files, installed extensions) to determine which
/// assistant features you already use, and recommends unused ones ranked by
/// expected value.
#[derive(Parser)]
#[command(name = "adoptcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze the local environment and report feature adoption
    #[command(visible_alias = "scan")]
    Analyze(AnalyzeArgs),
    /// List every feature in the catalog
    Features(FeaturesArgs),
    /// Create a starter configuration file
    Init(InitArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Workspace root to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover in the workspace)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty, markdown, or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Override the editor log directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Override the installed-extensions directory
    #[arg(long)]
    pub extensions_dir: Option<PathBuf>,

    /// Minimum acceptable overall score (exit non-zero below it)
    #[arg(short, long)]
    pub min_score: Option<u32>,
}

/// Arguments for the features command.
#[derive(Parser)]
pub struct FeaturesArgs {
    /// Only list features in this category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "adoptcheck.yaml")]
    pub output: PathBuf,
}

/// Starter configuration written by `adoptcheck init`.
static CONFIG_TEMPLATE: &str = include_str!("templates/adoptcheck.yaml");

/// Load the effective config: explicit path, discovered file, or defaults.
fn load_config(explicit: Option<&Path>, root: &Path) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Config::parse_file(path);
    }
    match config::discover(root) {
        Some(path) => Config::parse_file(&path),
        None => Ok(Config::default()),
    }
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "markdown" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty', 'markdown', or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let root = match args.path.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    let config = match load_config(args.config.as_deref(), &root) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error parsing config: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    // Collect signals. A collector that cannot locate its corner of the
    // environment degrades to an empty result with a warning; analysis
    // itself never fails.
    let log_dir = args.log_dir.clone().or_else(|| config.log_dir.clone());
    let log_entries = match &log_dir {
        Some(dir) => scanner::scan_logs(dir),
        None => scanner::scan_editor_logs().unwrap_or_else(|e| {
            eprintln!("Warning: skipping logs: {}", e);
            Vec::new()
        }),
    };

    let user_settings = scanner::default_settings_path().ok();
    let settings = scanner::scan_settings(user_settings.as_deref(), Some(root.as_path()));

    let workspace = scanner::scan_workspace(&root);

    let extensions_dir = args
        .extensions_dir
        .clone()
        .or_else(|| config.extensions_dir.clone());
    let extensions = match &extensions_dir {
        Some(dir) => scanner::scan_extensions(dir),
        None => scanner::scan_installed_extensions().unwrap_or_else(|e| {
            eprintln!("Warning: skipping extensions: {}", e);
            Default::default()
        }),
    };

    let visible = catalog::visible_catalog(&config.hidden_ids());
    let result = analyzer::run_analysis(log_entries, settings, workspace, extensions, visible);

    match args.format.as_str() {
        "markdown" => println!("{}", report::generate_markdown_report(&result)),
        "json" => report::write_json(&result)?,
        _ => report::write_pretty(&result),
    }

    if let Some(min) = args.min_score {
        if result.overall_score < min {
            eprintln!(
                "Overall score {} is below the required minimum {}",
                result.overall_score, min
            );
            return Ok(EXIT_BELOW_MIN);
        }
    }

    Ok(EXIT_SUCCESS)
}

/// Run the features command.
pub fn run_features(args: &FeaturesArgs) -> anyhow::Result<i32> {
    let filter = match &args.category {
        Some(raw) => match Category::parse(raw) {
            Some(c) => Some(c),
            None => {
                eprintln!("Error: unknown category {:?}", raw);
                eprintln!(
                    "Known categories: {}",
                    catalog::ALL_CATEGORIES
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                return Ok(EXIT_ERROR);
            }
        },
        None => None,
    };

    let by_cat = catalog::features_by_category(catalog::catalog());
    for cat in catalog::ALL_CATEGORIES {
        if filter.is_some() && filter != Some(*cat) {
            continue;
        }
        let features = match by_cat.get(cat) {
            Some(v) => v,
            None => continue,
        };
        println!("{}", cat);
        for f in features {
            println!(
                "  {:<28} impact: {:<7} difficulty: {:<7} {}",
                f.id,
                f.impact.as_str(),
                f.difficulty.as_str(),
                if f.is_detectable() { "" } else { "(not detectable)" }
            );
        }
        println!();
    }

    Ok(EXIT_SUCCESS)
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, CONFIG_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to hide features or override paths", args.output.display());
    println!("  2. Run: adoptcheck analyze");

    Ok(EXIT_SUCCESS)
}
