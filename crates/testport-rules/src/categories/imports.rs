//! Legacy framework imports -> removed
//!
//! The canonical Playwright import is prepended by the rewrite engine's
//! normalization pass once these are gone.

use crate::catalog::{Capture, RuleDef};

pub(crate) static RULES: &[RuleDef] = &[
    RuleDef {
        idiom: "legacy_require",
        about: "remove require() of selenium-webdriver/puppeteer/jquery",
        pattern: r#"(?m)^.*=\s*require\(\s*['"](?:selenium-webdriver|puppeteer|jquery)['"]\s*\).*\n?"#,
        template: "",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "legacy_import",
        about: "remove import from selenium-webdriver/puppeteer/jquery",
        pattern: r#"(?m)^import\s+.*from\s+['"](?:selenium-webdriver|puppeteer|jquery)['"].*\n?"#,
        template: "",
        capture: Capture::None,
    },
];

#[cfg(test)]
mod tests {
    use crate::rewrite;

    #[test]
    fn test_selenium_require_is_removed() {
        let out = rewrite("const { Builder, By } = require('selenium-webdriver');\nit('x', () => {\n});");
        assert!(!out.contains("selenium-webdriver"));
    }

    #[test]
    fn test_jquery_import_is_removed() {
        let out = rewrite("import $ from 'jquery';\n$('.btn').click();");
        assert!(!out.contains("jquery"));
        assert!(out.contains("await page.locator('.btn').click();"));
    }

    #[test]
    fn test_unrelated_imports_survive() {
        let out = rewrite("import helpers from './helpers';\nit('x', () => {\n});");
        assert!(out.contains("import helpers from './helpers';"));
    }
}
