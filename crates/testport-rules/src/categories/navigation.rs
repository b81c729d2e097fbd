//! Page navigation idioms -> `await page.goto(...)`

use crate::catalog::{Capture, RuleDef};

pub(crate) static RULES: &[RuleDef] = &[
    RuleDef {
        idiom: "window_location_assign",
        about: "window.location(.href) = 'url' -> await page.goto('url')",
        pattern: r#"window\.location(?:\.href)?\s*=\s*(['"][^'"]*['"])"#,
        template: "await page.goto(${1})",
        capture: Capture::Url,
    },
    RuleDef {
        idiom: "window_reload",
        about: "window.location.reload() -> await page.reload()",
        pattern: r#"window\.location\.reload\(\s*\)"#,
        template: "await page.reload()",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "cy_visit",
        about: "cy.visit('url') -> await page.goto('url')",
        pattern: r#"cy\.visit\(\s*(['"][^'"]*['"])\s*\)"#,
        template: "await page.goto(${1})",
        capture: Capture::Url,
    },
    RuleDef {
        idiom: "selenium_get",
        about: "driver.get('url') -> await page.goto('url')",
        pattern: r#"(?:await\s+)?driver\.get\(\s*(['"][^'"]*['"])\s*\)"#,
        template: "await page.goto(${1})",
        capture: Capture::Url,
    },
    RuleDef {
        idiom: "selenium_navigate_to",
        about: "driver.navigate().to('url') -> await page.goto('url')",
        pattern: r#"(?:await\s+)?driver\.navigate\(\s*\)\.to\(\s*(['"][^'"]*['"])\s*\)"#,
        template: "await page.goto(${1})",
        capture: Capture::Url,
    },
];
