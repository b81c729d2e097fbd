//! testport-analyze: aggregate idiom detection into a migration report
//!
//! Consumes per-file `Detection` results before any rewriting happens and
//! produces per-file idiom lists, a complexity score, and aggregate idiom
//! counts for the whole run. The record serializes as-is.

use serde::Serialize;
use std::collections::BTreeMap;

use testport_core::Detection;

/// How much manual attention a file is likely to need after migration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

/// Analysis record for a single scanned file
#[derive(Debug, Clone, Serialize)]
pub struct FileAnalysis {
    pub path: String,
    pub idioms: Vec<String>,
    pub actions: usize,
    pub test_cases: usize,
    pub complexity: u32,
    pub level: ComplexityLevel,
}

/// Whole-run analysis: per-file records plus aggregate totals
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunAnalysis {
    pub files: Vec<FileAnalysis>,
    pub aggregate_idiom_counts: BTreeMap<String, usize>,
    pub candidates: usize,
    pub skipped: usize,
}

/// distinct idioms + extracted actions + test cases, bucketed
fn complexity(idioms: usize, actions: usize, test_cases: usize) -> (u32, ComplexityLevel) {
    let score = (idioms + actions + test_cases) as u32;
    let level = match score {
        0..=4 => ComplexityLevel::Low,
        5..=11 => ComplexityLevel::Medium,
        _ => ComplexityLevel::High,
    };
    (score, level)
}

impl RunAnalysis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one scanned file. Files without idioms count as skipped but
    /// still appear in the per-file listing and totals.
    pub fn record(&mut self, path: &str, detection: &Detection, test_cases: usize) {
        if detection.is_candidate() {
            self.candidates += 1;
        } else {
            self.skipped += 1;
        }
        for idiom in &detection.idioms {
            *self
                .aggregate_idiom_counts
                .entry(idiom.clone())
                .or_insert(0) += 1;
        }
        let (score, level) =
            complexity(detection.idioms.len(), detection.actions.len(), test_cases);
        self.files.push(FileAnalysis {
            path: path.to_string(),
            idioms: detection.idioms.iter().cloned().collect(),
            actions: detection.actions.len(),
            test_cases,
            complexity: score,
            level,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
