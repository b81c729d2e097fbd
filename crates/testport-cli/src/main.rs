//! testport CLI - migrate legacy browser-automation tests to Playwright
//!
//! Modes:
//! - analyze: scan files and report idiom usage and migration complexity
//! - migrate: direct code-to-code rewrite into Playwright test files
//! - bdd: Gherkin features plus Cucumber-js step definitions

mod config;
mod output;
mod process;
mod scaffold;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

use config::Config;
use output::{OutputFormat, Reporter};
use testport_analyze::{ComplexityLevel, RunAnalysis};
use testport_core::StepVocabulary;
use testport_gherkin::{extract_cases, render_step_definitions};
use testport_rules::Catalog;

const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs"];

#[derive(Parser)]
#[command(name = "testport")]
#[command(version = "0.1.0")]
#[command(about = "Migrate legacy browser-automation tests to Playwright")]
struct Cli {
    #[command(subcommand)]
    command: Option<Mode>,

    /// Idioms to run (can be specified multiple times). Overrides config file.
    #[arg(long, short = 'r', global = true, value_name = "IDIOM")]
    rule: Vec<String>,

    /// Output format: text, json, diff
    #[arg(long, global = true, value_name = "FORMAT")]
    format: Option<String>,

    /// Shorthand for --format json
    #[arg(long, global = true, conflicts_with = "format")]
    json: bool,

    /// Path to config file (default: auto-detect .testport.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true)]
    no_config: bool,

    /// Show verbose output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// List recognized idioms and exit
    #[arg(long)]
    list_rules: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Scan files and report idiom usage and migration complexity
    Analyze {
        /// Files or directories to scan
        paths: Vec<PathBuf>,
    },
    /// Rewrite files into Playwright test code
    Migrate {
        /// Files or directories to migrate
        paths: Vec<PathBuf>,
        /// Output directory for generated files
        #[arg(long, value_name = "DIR", default_value = "migrated")]
        out: PathBuf,
        /// Write generated files (default: preview only)
        #[arg(long)]
        write: bool,
        /// Skip the pre-write confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Generate Gherkin features plus Cucumber step definitions
    Bdd {
        /// Files or directories to migrate
        paths: Vec<PathBuf>,
        /// Output directory for generated files
        #[arg(long, value_name = "DIR", default_value = "migrated")]
        out: PathBuf,
        /// Write generated files (default: preview only)
        #[arg(long)]
        write: bool,
        /// Skip the pre-write confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red(), e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let catalog = Catalog::global();

    if cli.list_rules {
        println!("{}", "Recognized idioms:".bold());
        for (idiom, about, category) in catalog.list() {
            println!("  {} [{}] - {}", idiom.green(), category.name(), about);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let Some(mode) = cli.command else {
        anyhow::bail!("no mode given; try `testport analyze <paths>` or --help");
    };

    // Load config file
    let config = if cli.no_config {
        Config::default()
    } else if let Some(config_path) = &cli.config {
        let cfg = Config::load_path(config_path)?;
        if cli.verbose {
            println!("{}: {}", "Using config".bold(), config_path.display());
        }
        cfg
    } else {
        match Config::load()? {
            Some((cfg, path)) => {
                if cli.verbose {
                    println!("{}: {}", "Using config".bold(), path.display());
                }
                cfg
            }
            None => Config::default(),
        }
    };

    // Determine output format: CLI flag > config > text
    let format_name = if cli.json {
        "json".to_string()
    } else {
        cli.format
            .clone()
            .or_else(|| config.output.format.clone())
            .unwrap_or_else(|| "text".to_string())
    };
    let format = OutputFormat::from_str(&format_name).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid output format '{}'. Valid options: text, json, diff",
            format_name
        )
    })?;

    // Determine which idioms to run
    let all_rules = catalog.all_idioms();
    for rule in &cli.rule {
        if !all_rules.contains(&rule.as_str()) {
            eprintln!(
                "{}: Unknown idiom '{}'. Use --list-rules to see available idioms.",
                "Error".red(),
                rule
            );
            return Ok(ExitCode::from(1));
        }
    }
    let enabled = config.effective_rules(&all_rules, &cli.rule);
    if enabled.is_empty() {
        eprintln!("{}: No idioms enabled", "Error".red());
        return Ok(ExitCode::from(1));
    }
    let filter = if enabled.len() == all_rules.len() {
        None
    } else {
        Some(&enabled)
    };

    match mode {
        Mode::Analyze { paths } => run_analyze(&paths, &config, filter, format, cli.verbose),
        Mode::Migrate {
            paths,
            out,
            write,
            yes,
        } => run_migrate(&paths, &config, filter, format, cli.verbose, &out, write, yes),
        Mode::Bdd {
            paths,
            out,
            write,
            yes,
        } => run_bdd(&paths, &config, filter, format, cli.verbose, &out, write, yes),
    }
}

/// Expand the CLI paths into a sorted list of candidate source files
fn collect_files(paths: &[PathBuf], config: &Config) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut files = Vec::new();
    let mut missing = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            for entry in walkdir::WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| {
                    e.path().extension().is_some_and(|ext| {
                        SOURCE_EXTENSIONS.contains(&ext.to_string_lossy().as_ref())
                    })
                })
            {
                let file_path = entry.path();
                if !config.should_exclude(file_path) {
                    files.push(file_path.to_path_buf());
                }
            }
        } else {
            missing.push(path.clone());
        }
    }

    files.sort();
    (files, missing)
}

fn warn_missing(missing: &[PathBuf]) {
    for path in missing {
        eprintln!(
            "{}: Path does not exist: {}",
            "Warning".yellow(),
            path.display()
        );
    }
}

fn run_analyze(
    paths: &[PathBuf],
    config: &Config,
    filter: Option<&HashSet<String>>,
    format: OutputFormat,
    verbose: bool,
) -> Result<ExitCode> {
    let (files, missing) = collect_files(paths, config);
    warn_missing(&missing);

    if files.is_empty() {
        println!("No source files found.");
        return Ok(ExitCode::SUCCESS);
    }

    let mut analysis = RunAnalysis::new();
    let mut errors = 0usize;
    for path in &files {
        match process::scan(path, filter) {
            Ok((source, detection)) => {
                let cases = extract_cases(&source).len();
                analysis.record(&path.display().to_string(), &detection, cases);
            }
            Err(e) => {
                errors += 1;
                eprintln!("{}: {} - {:#}", "Warning".yellow(), path.display(), e);
            }
        }
    }

    match format {
        OutputFormat::Json => println!("{}", analysis.to_json()?),
        _ => print_analysis(&analysis, verbose),
    }

    Ok(if errors > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

fn print_analysis(analysis: &RunAnalysis, verbose: bool) {
    println!("{}", "Migration analysis".bold().underline());
    for file in &analysis.files {
        let level = match file.level {
            ComplexityLevel::Low => "low".green(),
            ComplexityLevel::Medium => "medium".yellow(),
            ComplexityLevel::High => "high".red(),
        };
        println!(
            "  {} {} (score {}, {} test case(s))",
            file.path.bold(),
            level,
            file.complexity,
            file.test_cases
        );
        if verbose && !file.idioms.is_empty() {
            println!("    idioms: {}", file.idioms.join(", "));
        }
    }

    println!();
    println!("{}", "Idiom totals".bold());
    for (idiom, count) in &analysis.aggregate_idiom_counts {
        println!("  {idiom}: {count}");
    }
    println!();
    println!(
        "  Candidates: {}  Skipped: {}",
        analysis.candidates, analysis.skipped
    );
}

#[allow(clippy::too_many_arguments)]
fn run_migrate(
    paths: &[PathBuf],
    config: &Config,
    filter: Option<&HashSet<String>>,
    format: OutputFormat,
    verbose: bool,
    out: &PathBuf,
    write: bool,
    yes: bool,
) -> Result<ExitCode> {
    let (files, missing) = collect_files(paths, config);
    warn_missing(&missing);

    if files.is_empty() {
        println!("No source files found.");
        return Ok(ExitCode::SUCCESS);
    }

    let mut reporter = Reporter::new(format, verbose);
    let mut outcomes = Vec::new();

    for path in &files {
        match process::scan(path, filter) {
            Ok((source, detection)) => {
                if !detection.is_candidate() {
                    reporter.report_skipped(path);
                    continue;
                }
                let rewritten = process::rewrite_source(&source, filter);
                let idioms: Vec<String> = detection.idioms.iter().cloned().collect();
                if write {
                    outcomes.push((path.clone(), source, rewritten, idioms));
                } else {
                    reporter.report_check(path, idioms, &source, &rewritten);
                }
            }
            Err(e) => reporter.report_error(path, &format!("{e:#}")),
        }
    }

    if write && !outcomes.is_empty() {
        // +2 for playwright.config.js and package.json
        if !scaffold::confirm_write(outcomes.len() + 2, out, yes)? {
            println!("Aborted, nothing written.");
            return Ok(ExitCode::SUCCESS);
        }
        for (path, _source, rewritten, idioms) in outcomes {
            let target = out.join("tests").join(process::spec_name(&path));
            match process::write_file(&target, &rewritten) {
                Ok(()) => reporter.report_written(&path, idioms, &target),
                Err(e) => reporter.report_error(&path, &format!("{e:#}")),
            }
        }
        reporter.report_artifact(&scaffold::write_playwright_config(out)?);
        let (pkg, _) = scaffold::ensure_package_json(out)?;
        reporter.report_artifact(&pkg);
    }

    let summary = reporter.summary();
    let exit_code = if summary.errors > 0 {
        ExitCode::from(1)
    } else if !write && summary.candidates > 0 {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    };
    reporter.finish(!write);

    Ok(exit_code)
}

#[allow(clippy::too_many_arguments)]
fn run_bdd(
    paths: &[PathBuf],
    config: &Config,
    filter: Option<&HashSet<String>>,
    format: OutputFormat,
    verbose: bool,
    out: &PathBuf,
    write: bool,
    yes: bool,
) -> Result<ExitCode> {
    let (files, missing) = collect_files(paths, config);
    warn_missing(&missing);

    if files.is_empty() {
        println!("No source files found.");
        return Ok(ExitCode::SUCCESS);
    }

    let mut reporter = Reporter::new(format, verbose);
    let mut vocab = StepVocabulary::new();
    let mut outcomes = Vec::new();

    for path in &files {
        match process::scan(path, filter) {
            Ok((source, detection)) => {
                if !detection.is_candidate() {
                    reporter.report_skipped(path);
                    continue;
                }
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let mut file_vocab = StepVocabulary::new();
                let (doc, _scenarios) =
                    process::bdd_source(&file_name, &source, &detection, &mut file_vocab);
                vocab.merge(file_vocab);
                let idioms: Vec<String> = detection.idioms.iter().cloned().collect();
                outcomes.push((path.clone(), doc, idioms));
            }
            Err(e) => reporter.report_error(path, &format!("{e:#}")),
        }
    }

    if outcomes.is_empty() {
        reporter.finish(false);
        return Ok(ExitCode::SUCCESS);
    }

    if write {
        // features + steps.js + world/hooks/cucumber.js + package.json
        if !scaffold::confirm_write(outcomes.len() + 5, out, yes)? {
            println!("Aborted, nothing written.");
            return Ok(ExitCode::SUCCESS);
        }
        for (path, doc, idioms) in &outcomes {
            let target = out.join("features").join(process::feature_name(path));
            match process::write_file(&target, doc) {
                Ok(()) => reporter.report_written(path, idioms.clone(), &target),
                Err(e) => reporter.report_error(path, &format!("{e:#}")),
            }
        }

        let steps_path = out.join("features/step_definitions/steps.js");
        process::write_file(&steps_path, &render_step_definitions(&vocab))?;
        reporter.report_artifact(&steps_path);
        for artifact in scaffold::write_bdd_support(out)? {
            reporter.report_artifact(&artifact);
        }
        let (pkg, _) = scaffold::ensure_package_json(out)?;
        reporter.report_artifact(&pkg);
    } else {
        for (path, doc, idioms) in &outcomes {
            reporter.report_check(path, idioms.clone(), "", doc);
        }
    }

    let summary = reporter.summary();
    let exit_code = if summary.errors > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    };
    reporter.finish(!write);

    Ok(exit_code)
}
