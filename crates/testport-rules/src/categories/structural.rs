//! Test declaration headers -> Playwright test declarations
//!
//! Only the headers are rewritten; bodies are untouched text. The `it`
//! rules must run before `bare_test`: their output carries the
//! `async ({ page })` signature, which `bare_test` cannot match, so
//! nothing is converted twice.

use crate::catalog::{Capture, RuleDef};

pub(crate) static RULES: &[RuleDef] = &[
    RuleDef {
        idiom: "it_only_block",
        about: "it.only(name, cb) -> test.only(name, async ({ page }) => ..)",
        pattern: r#"(?m)^(\s*)it\.only\(\s*(['"][^'"]+['"])\s*,\s*(?:async\s+)?(?:function\s*\(\s*\)|\(\s*\))\s*(?:=>)?\s*\{"#,
        template: "${1}test.only(${2}, async ({ page }) => {",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "it_skip_block",
        about: "it.skip(name, cb) -> test.skip(name, async ({ page }) => ..)",
        pattern: r#"(?m)^(\s*)it\.skip\(\s*(['"][^'"]+['"])\s*,\s*(?:async\s+)?(?:function\s*\(\s*\)|\(\s*\))\s*(?:=>)?\s*\{"#,
        template: "${1}test.skip(${2}, async ({ page }) => {",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "it_block",
        about: "it(name, cb) -> test(name, async ({ page }) => ..)",
        pattern: r#"(?m)^(\s*)it\(\s*(['"][^'"]+['"])\s*,\s*(?:async\s+)?(?:function\s*\(\s*\)|\(\s*\))\s*(?:=>)?\s*\{"#,
        template: "${1}test(${2}, async ({ page }) => {",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "bare_test_block",
        about: "test(name, cb) -> test(name, async ({ page }) => ..)",
        pattern: r#"(?m)^(\s*)test\(\s*(['"][^'"]+['"])\s*,\s*(?:async\s+)?(?:function\s*\(\s*\)|\(\s*\))\s*(?:=>)?\s*\{"#,
        template: "${1}test(${2}, async ({ page }) => {",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "describe_block",
        about: "describe( -> test.describe(",
        pattern: r#"(?m)^(\s*)describe\("#,
        template: "${1}test.describe(",
        capture: Capture::None,
    },
];
