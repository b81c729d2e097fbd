//! Idiom detection: scan a file against the pattern catalog
//!
//! Detection is inclusive: one textual span may record several idioms
//! (a jQuery lookup chained with `.click()` is both a selector and an
//! action). For the selectors/actions/navigation categories every
//! non-overlapping match is enumerated into an `ExtractedAction`.

use std::collections::HashSet;

use testport_core::{Category, Detection, ExtractedAction};

use crate::catalog::Catalog;

/// Scan `text` against the full catalog. Pure function of its input.
pub fn detect(text: &str) -> Detection {
    detect_filtered(text, None)
}

/// Scan `text` against the catalog, restricted to `enabled` idioms when set
pub fn detect_filtered(text: &str, enabled: Option<&HashSet<String>>) -> Detection {
    let mut detection = Detection::default();

    for stage in Catalog::global().stages() {
        let enumerating = matches!(
            stage.category,
            Category::Selectors | Category::Actions | Category::Navigation
        );
        // (text position, rule declaration index) orders the matches
        let mut found: Vec<(usize, usize, ExtractedAction)> = Vec::new();

        for (rule_idx, rule) in stage.rules.iter().enumerate() {
            if let Some(set) = enabled {
                if !set.contains(rule.idiom) {
                    continue;
                }
            }
            if enumerating {
                for caps in rule.regex.captures_iter(text) {
                    detection.idioms.insert(rule.idiom.to_string());
                    if let Some(action) = rule.extract(&caps) {
                        let start = caps.get(0).map_or(0, |m| m.start());
                        found.push((start, rule_idx, action));
                    }
                }
            } else if rule.regex.is_match(text) {
                detection.idioms.insert(rule.idiom.to_string());
            }
        }

        found.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        detection
            .actions
            .extend(found.into_iter().map(|(_, _, action)| action));
    }

    detection
}
