//! Output formatting for testport
//!
//! Supports text (colored terminal), JSON and unified-diff output.

use colored::*;
use serde::Serialize;
use std::path::Path;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Diff,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<OutputFormat> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "diff" => Some(OutputFormat::Diff),
            _ => None,
        }
    }
}

/// Per-file record of what the run did
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub path: String,
    pub status: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub idioms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Summary statistics for the whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub files_processed: usize,
    pub candidates: usize,
    pub skipped: usize,
    pub written: usize,
    pub errors: usize,
}

/// Full JSON output structure
#[derive(Debug, Serialize)]
struct JsonOutput {
    version: String,
    summary: Summary,
    files: Vec<FileRecord>,
}

/// Reporter for accumulating and printing run results
pub struct Reporter {
    format: OutputFormat,
    verbose: bool,
    records: Vec<FileRecord>,
    summary: Summary,
}

impl Reporter {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self {
            format,
            verbose,
            records: Vec::new(),
            summary: Summary::default(),
        }
    }

    /// A candidate file in check mode: show what the rewrite would change
    pub fn report_check(&mut self, path: &Path, idioms: Vec<String>, old: &str, new: &str) {
        self.summary.files_processed += 1;
        self.summary.candidates += 1;

        match self.format {
            OutputFormat::Text => {
                println!("{}", path.display().to_string().bold());
                print_diff(old, new);
                println!();
            }
            OutputFormat::Diff => {
                print_unified_diff(path, old, new);
            }
            OutputFormat::Json => {}
        }

        self.records.push(FileRecord {
            path: path.display().to_string(),
            status: "would-rewrite".to_string(),
            idioms,
            written: None,
            error: None,
        });
    }

    /// A candidate file whose output artifact was written
    pub fn report_written(&mut self, path: &Path, idioms: Vec<String>, target: &Path) {
        self.summary.files_processed += 1;
        self.summary.candidates += 1;
        self.summary.written += 1;

        if self.format == OutputFormat::Text {
            println!(
                "{} {} {} {}",
                "OK".green(),
                path.display(),
                "->".dimmed(),
                target.display()
            );
        }

        self.records.push(FileRecord {
            path: path.display().to_string(),
            status: "written".to_string(),
            idioms,
            written: Some(target.display().to_string()),
            error: None,
        });
    }

    /// A file with no detected idioms: not a migration candidate
    pub fn report_skipped(&mut self, path: &Path) {
        self.summary.files_processed += 1;
        self.summary.skipped += 1;

        if self.verbose && self.format == OutputFormat::Text {
            println!("{}: no recognizable idioms, skipped", path.display());
        }

        self.records.push(FileRecord {
            path: path.display().to_string(),
            status: "skipped".to_string(),
            idioms: Vec::new(),
            written: None,
            error: None,
        });
    }

    /// A recoverable per-file failure: recorded, batch continues
    pub fn report_error(&mut self, path: &Path, error: &str) {
        self.summary.files_processed += 1;
        self.summary.errors += 1;

        if self.format == OutputFormat::Text {
            eprintln!("{}: {} - {}", "Warning".yellow(), path.display(), error);
        }

        self.records.push(FileRecord {
            path: path.display().to_string(),
            status: "error".to_string(),
            idioms: Vec::new(),
            written: None,
            error: Some(error.to_string()),
        });
    }

    /// An extra generated artifact not tied to one input file
    pub fn report_artifact(&mut self, target: &Path) {
        self.summary.written += 1;
        if self.format == OutputFormat::Text {
            println!("{} {}", "OK".green(), target.display());
        }
    }

    /// Print final summary/output
    pub fn finish(self, check_mode: bool) {
        match self.format {
            OutputFormat::Text => {
                println!();
                println!("{}", "Summary".bold().underline());
                println!("  Files processed: {}", self.summary.files_processed);
                println!("  Migration candidates: {}", self.summary.candidates);
                println!("  Skipped (no idioms): {}", self.summary.skipped);
                if self.summary.written > 0 {
                    println!("  Artifacts written: {}", self.summary.written);
                }
                if self.summary.errors > 0 {
                    println!("  Errors: {}", self.summary.errors);
                    for record in self.records.iter().filter(|r| r.error.is_some()) {
                        println!(
                            "    {} {}",
                            record.path,
                            record.error.as_deref().unwrap_or_default()
                        );
                    }
                }

                if check_mode && self.summary.candidates > 0 {
                    println!();
                    println!("{}", "Run with --write to apply the migration".yellow());
                }
            }
            OutputFormat::Json => {
                let output = JsonOutput {
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    summary: self.summary,
                    files: self.records,
                };
                match serde_json::to_string_pretty(&output) {
                    Ok(json) => println!("{json}"),
                    Err(err) => eprintln!("{}: {err}", "Error".red()),
                }
            }
            OutputFormat::Diff => {
                // Patch-compatible output only; no summary
            }
        }
    }

    /// Summary for exit code determination
    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}

/// Print a colored diff between old and new content
fn print_diff(old: &str, new: &str) {
    for diff_result in diff::lines(old, new) {
        match diff_result {
            diff::Result::Left(l) => {
                println!("  {}", format!("- {}", l).red());
            }
            diff::Result::Right(r) => {
                println!("  {}", format!("+ {}", r).green());
            }
            diff::Result::Both(_, _) => {
                // Skip unchanged lines for cleaner output
            }
        }
    }
}

/// Print unified diff format (standard diff -u compatible)
fn print_unified_diff(path: &Path, old: &str, new: &str) {
    use similar::{ChangeTag, TextDiff};

    let diff = TextDiff::from_lines(old, new);
    let path_str = path.display().to_string();

    println!("--- a/{}", path_str);
    println!("+++ b/{}", path_str);

    for hunk in diff.unified_diff().context_radius(3).iter_hunks() {
        println!("{}", hunk.header());
        for change in hunk.iter_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => "-",
                ChangeTag::Insert => "+",
                ChangeTag::Equal => " ",
            };
            print!("{}{}", sign, change);
            if change.missing_newline() {
                println!();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("diff"), Some(OutputFormat::Diff));
        assert_eq!(OutputFormat::from_str("xml"), None);
    }

    #[test]
    fn test_summary_counts() {
        let mut reporter = Reporter::new(OutputFormat::Json, false);
        reporter.report_skipped(Path::new("a.js"));
        reporter.report_error(Path::new("b.js"), "unreadable");
        reporter.report_written(
            Path::new("c.test.js"),
            vec!["dom_get_by_id".to_string()],
            Path::new("out/c.spec.js"),
        );

        let summary = reporter.summary();
        assert_eq!(summary.files_processed, 3);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.candidates, 1);
        assert_eq!(summary.written, 1);
    }

    #[test]
    fn test_json_record_serialization() {
        let record = FileRecord {
            path: "login.test.js".to_string(),
            status: "written".to_string(),
            idioms: vec!["jquery_selector".to_string()],
            written: Some("out/login.spec.js".to_string()),
            error: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"status\":\"written\""));
        assert!(json.contains("jquery_selector"));
        assert!(!json.contains("\"error\""));
    }
}
