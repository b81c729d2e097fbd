//! User interaction idioms -> awaited locator actions
//!
//! Receivers are matched generically (any chained call) so the same rules
//! recognize raw legacy text during detection and locator-form text during
//! rewrite. The optional `await` prefix keeps already-migrated calls
//! stable across repeated rewrites.

use crate::catalog::{Capture, RuleDef};

pub(crate) static RULES: &[RuleDef] = &[
    RuleDef {
        idiom: "chained_click",
        about: "lookup(..).click() -> await locator.click()",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.click\(\s*\)"#,
        template: "await ${1}.click()",
        capture: Capture::Action("click"),
    },
    RuleDef {
        idiom: "element_click",
        about: "element.click() statement -> await element.click()",
        pattern: r#"(?m)^(\s*)([A-Za-z_$][\w$]*)\.click\(\s*\);?\s*$"#,
        template: "${1}await ${2}.click();",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "jquery_val_set",
        about: ".val('v') -> await locator.fill('v')",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.val\(\s*(['"][^'"]*['"])\s*\)"#,
        template: "await ${1}.fill(${2})",
        capture: Capture::Action("val"),
    },
    RuleDef {
        idiom: "jquery_val_get",
        about: ".val() -> await locator.inputValue()",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.val\(\s*\)"#,
        template: "await ${1}.inputValue()",
        capture: Capture::Action("val"),
    },
    RuleDef {
        idiom: "jquery_trigger_click",
        about: ".trigger('click') -> await locator.click()",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.trigger\(\s*['"]click['"]\s*\)"#,
        template: "await ${1}.click()",
        capture: Capture::Action("click"),
    },
    RuleDef {
        idiom: "jquery_text_get",
        about: ".text() -> await locator.textContent()",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.text\(\s*\)"#,
        template: "await ${1}.textContent()",
        capture: Capture::Action("text"),
    },
    RuleDef {
        idiom: "jquery_html_get",
        about: ".html() -> await locator.innerHTML()",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.html\(\s*\)"#,
        template: "await ${1}.innerHTML()",
        capture: Capture::Action("html"),
    },
    RuleDef {
        idiom: "cy_type",
        about: ".type('v') -> await locator.fill('v')",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.type\(\s*(['"][^'"]*['"])\s*\)"#,
        template: "await ${1}.fill(${2})",
        capture: Capture::Action("type"),
    },
    RuleDef {
        idiom: "selenium_send_keys",
        about: ".sendKeys('v') -> await locator.fill('v')",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.sendKeys\(\s*(['"][^'"]*['"])\s*\)"#,
        template: "await ${1}.fill(${2})",
        capture: Capture::Action("sendKeys"),
    },
    RuleDef {
        idiom: "selenium_get_text",
        about: ".getText() -> await locator.textContent()",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.getText\(\s*\)"#,
        template: "await ${1}.textContent()",
        capture: Capture::Action("getText"),
    },
    RuleDef {
        idiom: "puppeteer_page_type",
        about: "page.type('sel', 'v') -> await page.fill('sel', 'v')",
        pattern: r#"(?:await\s+)?page\.type\(\s*(['"][^'"]+['"])\s*,\s*(['"][^'"]*['"])\s*\)"#,
        template: "await page.fill(${1}, ${2})",
        capture: Capture::Action("type"),
    },
];
