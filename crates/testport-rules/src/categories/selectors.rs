//! Element lookup idioms -> `page.locator(...)`
//!
//! This category runs first: every later category assumes lookups are
//! already in locator form. `puppeteer_query` must precede
//! `jquery_selector`, otherwise the `$('...')` matcher would fire inside
//! `page.$('...')` and duplicate the receiver.

use crate::catalog::{Capture, RuleDef};

pub(crate) static RULES: &[RuleDef] = &[
    RuleDef {
        idiom: "dom_get_by_id",
        about: "document.getElementById('x') -> page.locator('#x')",
        pattern: r#"document\.getElementById\(\s*['"]([^'"]+)['"]\s*\)"#,
        template: "page.locator('#${1}')",
        capture: Capture::Id,
    },
    RuleDef {
        idiom: "dom_query_selector",
        about: "document.querySelector('sel') -> page.locator('sel')",
        pattern: r#"document\.querySelector\(\s*['"]([^'"]+)['"]\s*\)"#,
        template: "page.locator('${1}')",
        capture: Capture::Selector,
    },
    RuleDef {
        idiom: "dom_query_selector_all",
        about: "document.querySelectorAll('sel') -> page.locator('sel')",
        pattern: r#"document\.querySelectorAll\(\s*['"]([^'"]+)['"]\s*\)"#,
        template: "page.locator('${1}')",
        capture: Capture::Selector,
    },
    RuleDef {
        idiom: "selenium_find_by_id",
        about: "driver.findElement(By.id('x')) -> page.locator('#x')",
        pattern: r#"driver\.findElement\(\s*By\.id\(\s*['"]([^'"]+)['"]\s*\)\s*\)"#,
        template: "page.locator('#${1}')",
        capture: Capture::Id,
    },
    RuleDef {
        idiom: "selenium_find_by_css",
        about: "driver.findElement(By.css('sel')) -> page.locator('sel')",
        pattern: r#"driver\.findElement\(\s*By\.css\(\s*['"]([^'"]+)['"]\s*\)\s*\)"#,
        template: "page.locator('${1}')",
        capture: Capture::Selector,
    },
    RuleDef {
        idiom: "selenium_find_by_name",
        about: "driver.findElement(By.name('n')) -> page.locator('[name=\"n\"]')",
        pattern: r#"driver\.findElement\(\s*By\.name\(\s*['"]([^'"]+)['"]\s*\)\s*\)"#,
        template: "page.locator('[name=\"${1}\"]')",
        capture: Capture::Selector,
    },
    RuleDef {
        idiom: "cy_get",
        about: "cy.get('sel') -> page.locator('sel')",
        pattern: r#"cy\.get\(\s*['"]([^'"]+)['"]\s*\)"#,
        template: "page.locator('${1}')",
        capture: Capture::Selector,
    },
    RuleDef {
        idiom: "cy_contains",
        about: "cy.contains('text') -> page.getByText('text')",
        pattern: r#"cy\.contains\(\s*['"]([^'"]+)['"]\s*\)"#,
        template: "page.getByText('${1}')",
        capture: Capture::Selector,
    },
    RuleDef {
        idiom: "puppeteer_query",
        about: "page.$('sel') -> page.locator('sel')",
        pattern: r#"(?:await\s+)?page\.\$\(\s*['"]([^'"]+)['"]\s*\)"#,
        template: "page.locator('${1}')",
        capture: Capture::Selector,
    },
    RuleDef {
        idiom: "jquery_selector",
        about: "$('sel') -> page.locator('sel')",
        pattern: r#"\$\(\s*['"]([^'"]+)['"]\s*\)"#,
        template: "page.locator('${1}')",
        capture: Capture::Selector,
    },
];
