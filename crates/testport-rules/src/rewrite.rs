//! The rewrite engine: ordered category-by-category substitution
//!
//! Categories run in `Category::ALL` order; within a category, rules run
//! in declaration order as global substitutions. A replacement may create
//! text matched by a later rule (a raw property read becomes an async
//! accessor only after its owning lookup became a locator). After all
//! stages, three normalization passes run: duplicate `await` markers are
//! collapsed, long blank-line runs are collapsed, and the canonical
//! Playwright import is prepended when absent.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::catalog::Catalog;

/// Canonical import prepended to files that lack one
pub const PLAYWRIGHT_IMPORT: &str = "import { test, expect } from '@playwright/test';";

/// Translate one file's text. A rule that matches nothing is a no-op.
pub fn rewrite(text: &str) -> String {
    rewrite_filtered(text, None)
}

/// Translate with the rule set restricted to `enabled` idioms when set
pub fn rewrite_filtered(text: &str, enabled: Option<&HashSet<String>>) -> String {
    let mut out = text.to_string();

    for stage in Catalog::global().stages() {
        for rule in &stage.rules {
            if let Some(set) = enabled {
                if !set.contains(rule.idiom) {
                    continue;
                }
            }
            out = rule.regex.replace_all(&out, rule.template).into_owned();
        }
    }

    let out = collapse_awaits(&out);
    let out = collapse_blank_lines(&out);
    ensure_import(&out)
}

/// Independent rules may each prepend `await`; a run collapses to one.
fn collapse_awaits(text: &str) -> String {
    static AWAITS: OnceLock<Regex> = OnceLock::new();
    let regex = AWAITS.get_or_init(|| Regex::new(r"\bawait(\s+await\b)+").unwrap());
    regex.replace_all(text, "await").into_owned()
}

/// Collapse runs of three or more blank lines to exactly one
fn collapse_blank_lines(text: &str) -> String {
    static BLANKS: OnceLock<Regex> = OnceLock::new();
    let regex = BLANKS.get_or_init(|| Regex::new(r"\n{4,}").unwrap());
    regex.replace_all(text, "\n\n").into_owned()
}

fn ensure_import(text: &str) -> String {
    if text.contains("@playwright/test") {
        text.to_string()
    } else {
        format!("{PLAYWRIGHT_IMPORT}\n\n{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_full_pipeline() {
        let out = rewrite(
            "document.getElementById('email').value = 'a@b.com';\ndocument.getElementById('login-btn').click();",
        );
        assert!(out.starts_with(PLAYWRIGHT_IMPORT));
        assert!(out.contains("await page.locator('#email').fill('a@b.com');"));
        assert!(out.contains("await page.locator('#login-btn').click();"));
    }

    #[test]
    fn test_rewrite_is_deterministic() {
        let text = "cy.visit('/login');\ncy.get('#user').type('admin');\ncy.get('.submit').click();";
        assert_eq!(rewrite(text), rewrite(text));
    }

    #[test]
    fn test_rewrite_fixpoint_on_migrated_text() {
        let migrated = format!(
            "{PLAYWRIGHT_IMPORT}\n\ntest('logs in', async ({{ page }}) => {{\n  await page.goto('/login');\n  await page.locator('#email').fill('a@b.com');\n  await page.locator('#login-btn').click();\n  await expect(page.locator('.welcome')).toBeVisible();\n}});\n"
        );
        assert_eq!(rewrite(&migrated), migrated);
    }

    #[test]
    fn test_double_rewrite_equals_single_rewrite() {
        let text = "describe('cart', () => {\n  it('adds', () => {\n    $('#add').click();\n    const t = document.querySelector('.total').textContent;\n  });\n});";
        let once = rewrite(text);
        assert_eq!(rewrite(&once), once);
    }

    #[test]
    fn test_import_prepended_once() {
        let out = rewrite("$('.btn').click();");
        let second = rewrite(&out);
        assert_eq!(out.matches(PLAYWRIGHT_IMPORT).count(), 1);
        assert_eq!(second.matches(PLAYWRIGHT_IMPORT).count(), 1);
    }

    #[test]
    fn test_await_runs_are_collapsed() {
        assert_eq!(collapse_awaits("await await page.reload()"), "await page.reload()");
        assert_eq!(
            collapse_awaits("await await await x"),
            "await x"
        );
    }

    #[test]
    fn test_blank_line_runs_are_collapsed() {
        let out = collapse_blank_lines("a\n\n\n\n\nb");
        assert_eq!(out, "a\n\nb");
    }

    #[test]
    fn test_two_blank_lines_are_preserved() {
        let text = "a\n\n\nb";
        assert_eq!(collapse_blank_lines(text), text);
    }

    #[test]
    fn test_no_match_is_noop_apart_from_import() {
        let out = rewrite("const x = 1 + 1;");
        assert_eq!(out, format!("{PLAYWRIGHT_IMPORT}\n\nconst x = 1 + 1;"));
    }

    #[test]
    fn test_layering_selector_then_action() {
        // By the time the action category runs, the receiver is already in
        // locator form; the final text goes through both categories.
        let out = rewrite("const msg = $('.alert').text();");
        assert!(out.contains("const msg = await page.locator('.alert').textContent();"));
    }
}
