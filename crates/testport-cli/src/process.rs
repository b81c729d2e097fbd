//! Per-file processing for testport

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

use testport_core::{Detection, StepVocabulary};
use testport_gherkin::{build_feature, case_blocks, render_feature, synthesize};
use testport_rules::{detect_filtered, rewrite_filtered};

/// Read one file and scan it against the catalog
pub fn scan(path: &Path, enabled: Option<&HashSet<String>>) -> Result<(String, Detection)> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let detection = detect_filtered(&source, enabled);
    Ok((source, detection))
}

/// Direct rewrite of one candidate file's source
pub fn rewrite_source(source: &str, enabled: Option<&HashSet<String>>) -> String {
    rewrite_filtered(source, enabled)
}

/// Synthesize the feature document for one candidate file.
///
/// Returns the rendered document and its scenario count; every phrase is
/// recorded in the run-wide vocabulary.
pub fn bdd_source(
    file_name: &str,
    source: &str,
    detection: &Detection,
    vocab: &mut StepVocabulary,
) -> (String, usize) {
    let blocks = case_blocks(source);
    let cases: Vec<_> = blocks.iter().map(|(case, _)| case.clone()).collect();
    let steps: Vec<_> = blocks
        .iter()
        .map(|(_, body)| synthesize(body, source, detection, vocab))
        .collect();
    let feature = build_feature(file_name, &cases, &steps);
    (render_feature(&feature), feature.scenarios.len())
}

/// The base name of a file with its test suffix stripped:
/// `login.test.js` -> `login`
pub fn file_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    for suffix in [
        ".test.js", ".spec.js", ".test.ts", ".spec.ts", ".test.jsx", ".test.tsx", ".js", ".ts",
        ".jsx", ".tsx", ".mjs", ".cjs",
    ] {
        if let Some(stem) = name.strip_suffix(suffix) {
            return stem.to_string();
        }
    }
    name
}

/// Target file name for the direct rewrite mode
pub fn spec_name(path: &Path) -> String {
    format!("{}.spec.js", file_stem(path))
}

/// Target file name for the BDD mode
pub fn feature_name(path: &Path) -> String {
    format!("{}.feature", file_stem(path))
}

/// Write one generated artifact, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_stem_strips_test_suffixes() {
        assert_eq!(file_stem(Path::new("login.test.js")), "login");
        assert_eq!(file_stem(Path::new("cart.spec.ts")), "cart");
        assert_eq!(file_stem(Path::new("smoke.js")), "smoke");
    }

    #[test]
    fn test_target_names() {
        assert_eq!(spec_name(Path::new("a/b/login.test.js")), "login.spec.js");
        assert_eq!(feature_name(Path::new("login.test.js")), "login.feature");
    }

    #[test]
    fn test_scan_missing_file_is_an_error() {
        let missing = PathBuf::from("definitely/not/here.test.js");
        assert!(scan(&missing, None).is_err());
    }

    #[test]
    fn test_bdd_source_produces_complete_feature() {
        let source = "it('logs in', () => { document.getElementById('go').click(); });";
        let detection = testport_rules::detect(source);
        let mut vocab = StepVocabulary::new();
        let (doc, scenarios) = bdd_source("login.test.js", source, &detection, &mut vocab);

        assert_eq!(scenarios, 1);
        assert!(doc.contains("Feature: Login"));
        assert!(doc.contains("Scenario: logs in"));
        assert!(doc.contains("Given "));
        assert!(doc.contains("When I click on \"#go\""));
        assert!(doc.contains("Then "));
        assert!(!vocab.is_empty());
    }
}
