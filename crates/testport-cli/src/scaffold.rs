//! Output-tree scaffolding: support files and the package descriptor
//!
//! The BDD support artifacts are static content from testport-gherkin.
//! A missing package.json means "create fresh"; an existing one is merged
//! without clobbering anything the project already declares.

use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};

use testport_gherkin::support;

use crate::process::write_file;

/// Pre-flight confirmation gate: the one interrupt point before any file
/// is written. `--yes` skips the prompt.
pub fn confirm_write(file_count: usize, out_dir: &Path, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    let prompt = format!(
        "Write {} file(s) under {}?",
        file_count,
        out_dir.display()
    );
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()
        .context("Confirmation prompt failed")
}

/// Write the static BDD support tree; returns the written paths
pub fn write_bdd_support(out_dir: &Path) -> Result<Vec<PathBuf>> {
    let artifacts = [
        ("features/support/world.js", support::WORLD_JS),
        ("features/support/hooks.js", support::HOOKS_JS),
        ("cucumber.js", support::CUCUMBER_CONFIG_JS),
    ];
    let mut written = Vec::with_capacity(artifacts.len());
    for (rel, content) in artifacts {
        let path = out_dir.join(rel);
        write_file(&path, content)?;
        written.push(path);
    }
    Ok(written)
}

/// Write the Playwright config for the direct rewrite mode
pub fn write_playwright_config(out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join("playwright.config.js");
    write_file(&path, support::PLAYWRIGHT_CONFIG_JS)?;
    Ok(path)
}

/// Outcome of the package descriptor step
#[derive(Debug, PartialEq, Eq)]
pub enum PackageOutcome {
    Created,
    Merged,
}

/// Create or merge `package.json` in the output directory.
///
/// Existing keys always win: only missing devDependencies and scripts are
/// added, so re-running the migration never downgrades a project.
pub fn ensure_package_json(out_dir: &Path) -> Result<(PathBuf, PackageOutcome)> {
    let path = out_dir.join("package.json");

    let (mut root, outcome) = if path.exists() {
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value: Value = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        let map = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        (map, PackageOutcome::Merged)
    } else {
        let mut map = Map::new();
        map.insert("name".to_string(), json!("migrated-tests"));
        map.insert("version".to_string(), json!("1.0.0"));
        map.insert("private".to_string(), json!(true));
        (map, PackageOutcome::Created)
    };

    merge_section(&mut root, "devDependencies", support::DEV_DEPENDENCIES);
    merge_section(&mut root, "scripts", support::SCRIPTS);

    let rendered = serde_json::to_string_pretty(&Value::Object(root))
        .context("Failed to serialize package.json")?;
    write_file(&path, &format!("{rendered}\n"))?;
    Ok((path, outcome))
}

fn merge_section(root: &mut Map<String, Value>, section: &str, entries: &[(&str, &str)]) {
    let target = root
        .entry(section.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if let Value::Object(map) = target {
        for (key, value) in entries {
            map.entry(key.to_string())
                .or_insert_with(|| json!(value));
        }
    }
}
