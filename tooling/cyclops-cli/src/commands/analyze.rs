use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use colored::*;
use cyclops_core::report::{render_json_report, render_text_report};
use cyclops_core::{Analyzer, CyclopsConfig, FileReport, RuleName, CONFIG_FILE_NAME};
use tracing::{info, warn};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to a Rust source file or a directory to walk
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format (text, table, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Override the configured maximum cyclomatic complexity
    #[arg(short, long)]
    pub max: Option<u32>,

    /// Configuration file (defaults to .cyclops.toml in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Raise the configured maximum to the highest complexity found and
    /// write it back to the configuration file
    #[arg(long)]
    pub update_config: bool,
}

/// Runs the analysis. Returns `true` when no offense is left standing.
pub fn exec(args: AnalyzeArgs) -> anyhow::Result<bool> {
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => std::env::current_dir()?.join(CONFIG_FILE_NAME),
    };
    let mut config = load_config(&config_path)?;
    if let Some(max) = args.max {
        config.cyclomatic_complexity.max = max;
    }

    let is_json = args.format == "json";
    if !args.path.exists() {
        anyhow::bail!("{} does not exist", args.path.display());
    }
    if !is_json {
        println!("{} Analyzing {}...", "🔍".blue(), args.path.display());
    }

    let mut analyzer = Analyzer::new(config)?;
    let files = collect_sources(&args.path, &analyzer.config().ignore_paths)?;
    info!(files = files.len(), "collected Rust sources");

    let mut reports = Vec::new();
    for file in &files {
        let source = fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        match analyzer.analyze_source(&file.display().to_string(), &source) {
            Ok(report) => reports.push(report),
            Err(e) => warn!("Skipping {}: {}", file.display(), e),
        }
    }

    let max = analyzer.max();
    match args.format.as_str() {
        "json" => println!("{}", render_json_report(&reports)),
        "table" => {
            for report in &reports {
                println!("{}", render_text_report(report, max));
            }
        }
        _ => print_offenses(&reports),
    }

    let offense_count: usize = reports.iter().map(|r| r.offenses.len()).sum();
    if !is_json {
        print_summary(files.len(), offense_count);
    }

    if args.update_config {
        let raised = apply_remediations(&mut analyzer, &reports);
        if raised {
            let text = analyzer.effective_config().to_toml_string()?;
            fs::write(&config_path, text)
                .with_context(|| format!("failed to write {}", config_path.display()))?;
            if !is_json {
                println!(
                    "{} Raised max cyclomatic complexity to {} in {}",
                    "✓".green(),
                    analyzer.max(),
                    config_path.display()
                );
            }
        }
        let remaining = reports
            .iter()
            .flat_map(|r| &r.offenses)
            .filter(|o| o.remediation.is_none())
            .count();
        return Ok(remaining == 0);
    }

    Ok(offense_count == 0)
}

fn load_config(path: &Path) -> anyhow::Result<CyclopsConfig> {
    if !path.exists() {
        info!("No {} found, using defaults", path.display());
        return Ok(CyclopsConfig::default());
    }
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    CyclopsConfig::from_toml_str(&text).with_context(|| format!("invalid {}", path.display()))
}

/// `.rs` files under `path` in a stable order, skipping ignored directories.
fn collect_sources(path: &Path, ignore_paths: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if path.is_dir() {
        walk_dir(path, ignore_paths, &mut files)?;
    } else if is_rust_source(path) {
        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

fn walk_dir(dir: &Path, ignore_paths: &[String], files: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            let ignored = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| ignore_paths.iter().any(|p| p == name));
            if !ignored {
                walk_dir(&path, ignore_paths, files)?;
            }
        } else if is_rust_source(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn is_rust_source(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("rs")
}

/// Applies every remediation found in `reports`; returns whether the maximum
/// changed.
fn apply_remediations(analyzer: &mut Analyzer, reports: &[FileReport]) -> bool {
    let mut raised = false;
    for remediation in reports
        .iter()
        .flat_map(|r| &r.offenses)
        .filter_map(|o| o.remediation.as_ref())
    {
        raised |= analyzer.apply(remediation);
    }
    raised
}

fn print_offenses(reports: &[FileReport]) {
    for report in reports {
        for offense in &report.offenses {
            let rule = match offense.rule {
                RuleName::CyclomaticComplexity => offense.rule.to_string().yellow(),
                RuleName::AsciiIdentifiers => offense.rule.to_string().magenta(),
            };
            println!(
                "{}:{}: {}: {}: {}",
                report.path.bold(),
                offense.location,
                offense.severity.to_string().cyan(),
                rule,
                offense.message
            );
        }
    }
}

fn print_summary(file_count: usize, offense_count: usize) {
    if offense_count == 0 {
        println!(
            "\n{} {} file(s) inspected, no offenses detected.",
            "✅".green(),
            file_count
        );
    } else {
        println!(
            "\n{} {} file(s) inspected, {} offense(s) detected.",
            "⚠️".yellow(),
            file_count,
            offense_count
        );
    }
}
