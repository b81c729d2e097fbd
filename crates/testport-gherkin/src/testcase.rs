//! Test case extraction from structural markers
//!
//! Scans `describe`/`it`/`test` declaration headers. The most recent
//! `describe` label becomes the grouping label of the `it`/`test` cases
//! that follow it. Bodies are plain text slices from one case header to
//! the next; they feed step synthesis, not parsing.

use regex::Regex;
use std::sync::OnceLock;

use testport_core::TestCase;

fn header_regex() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| {
        Regex::new(r#"\b(describe|it|test)(?:\.(?:only|skip))?\s*\(\s*['"]([^'"]+)['"]"#).unwrap()
    })
}

/// Extract the file's test cases in source order, without any fallback
pub fn extract_cases(text: &str) -> Vec<TestCase> {
    let mut cases = Vec::new();
    let mut describe_label = String::new();

    for caps in header_regex().captures_iter(text) {
        let (kind, name) = (&caps[1], &caps[2]);
        if kind == "describe" {
            describe_label = name.to_string();
        } else {
            cases.push(TestCase {
                describe_label: describe_label.clone(),
                name: name.to_string(),
            });
        }
    }

    cases
}

/// Split the file into one (case, body text) block per test case.
///
/// A body runs from the case header to the next case header or the end
/// of the file. A file with zero extractable cases yields a single
/// synthetic "Main test" block covering the whole file, so every
/// migrated file still produces at least one scenario.
pub fn case_blocks(text: &str) -> Vec<(TestCase, String)> {
    let mut starts: Vec<(usize, TestCase)> = Vec::new();
    let mut describe_label = String::new();

    for caps in header_regex().captures_iter(text) {
        let (kind, name) = (&caps[1], &caps[2]);
        if kind == "describe" {
            describe_label = name.to_string();
        } else if let Some(m) = caps.get(0) {
            starts.push((
                m.start(),
                TestCase {
                    describe_label: describe_label.clone(),
                    name: name.to_string(),
                },
            ));
        }
    }

    if starts.is_empty() {
        return vec![(
            TestCase {
                describe_label: String::new(),
                name: "Main test".to_string(),
            },
            text.to_string(),
        )];
    }

    let mut blocks = Vec::with_capacity(starts.len());
    for (idx, (start, case)) in starts.iter().enumerate() {
        let end = starts
            .get(idx + 1)
            .map_or(text.len(), |(next_start, _)| *next_start);
        blocks.push((case.clone(), text[*start..end].to_string()));
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUITE: &str = r#"
describe('login page', () => {
  it('accepts valid credentials', () => {
    document.getElementById('email').value = 'a@b.com';
  });

  it('rejects bad credentials', () => {
    document.getElementById('email').value = 'nope';
  });
});
"#;

    #[test]
    fn test_cases_keep_source_order_and_label() {
        let cases = extract_cases(SUITE);
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].name, "accepts valid credentials");
        assert_eq!(cases[1].name, "rejects bad credentials");
        assert_eq!(cases[0].describe_label, "login page");
    }

    #[test]
    fn test_blocks_cover_their_own_bodies() {
        let blocks = case_blocks(SUITE);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].1.contains("a@b.com"));
        assert!(!blocks[0].1.contains("nope"));
        assert!(blocks[1].1.contains("nope"));
    }

    #[test]
    fn test_no_markers_yields_main_test_block() {
        let text = "document.getElementById('go').click();";
        let blocks = case_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].0.name, "Main test");
        assert_eq!(blocks[0].1, text);
    }

    #[test]
    fn test_bare_test_marker_is_recognized() {
        let cases = extract_cases("test('works', () => {});");
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].name, "works");
        assert!(cases[0].describe_label.is_empty());
    }

    #[test]
    fn test_it_only_and_skip_are_cases() {
        let cases = extract_cases("it.only('a', () => {});\nit.skip('b', () => {});");
        assert_eq!(cases.len(), 2);
    }
}
