//! Explicit wait idioms -> Playwright waiting primitives
//!
//! Selenium `By.*` lookups nested inside `driver.wait(...)` survive the
//! selector category (which only rewrites `driver.findElement` forms), so
//! they are handled whole here.

use crate::catalog::{Capture, RuleDef};

pub(crate) static RULES: &[RuleDef] = &[
    RuleDef {
        idiom: "cy_wait",
        about: "cy.wait(ms) -> await page.waitForTimeout(ms)",
        pattern: r#"cy\.wait\(\s*(\d+)\s*\)"#,
        template: "await page.waitForTimeout(${1})",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "driver_sleep",
        about: "driver.sleep(ms) -> await page.waitForTimeout(ms)",
        pattern: r#"(?:await\s+)?driver\.sleep\(\s*(\d+)\s*\)"#,
        template: "await page.waitForTimeout(${1})",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "browser_sleep",
        about: "browser.sleep(ms) -> await page.waitForTimeout(ms)",
        pattern: r#"(?:await\s+)?browser\.sleep\(\s*(\d+)\s*\)"#,
        template: "await page.waitForTimeout(${1})",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "selenium_wait_located_id",
        about: "driver.wait(until.elementLocated(By.id('x'))) -> await locator.waitFor()",
        pattern: r#"(?:await\s+)?driver\.wait\(\s*until\.elementLocated\(\s*By\.id\(\s*['"]([^'"]+)['"]\s*\)\s*\)\s*(?:,\s*\d+\s*)?\)"#,
        template: "await page.locator('#${1}').waitFor()",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "selenium_wait_located_css",
        about: "driver.wait(until.elementLocated(By.css('sel'))) -> await locator.waitFor()",
        pattern: r#"(?:await\s+)?driver\.wait\(\s*until\.elementLocated\(\s*By\.css\(\s*['"]([^'"]+)['"]\s*\)\s*\)\s*(?:,\s*\d+\s*)?\)"#,
        template: "await page.locator('${1}').waitFor()",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "puppeteer_wait_selector",
        about: "page.waitForSelector('sel') -> await locator.waitFor()",
        pattern: r#"(?:await\s+)?page\.waitForSelector\(\s*(['"][^'"]+['"])\s*\)"#,
        template: "await page.locator(${1}).waitFor()",
        capture: Capture::None,
    },
];

#[cfg(test)]
mod tests {
    use crate::rewrite;

    #[test]
    fn test_cy_wait_becomes_timeout() {
        let out = rewrite("cy.wait(500);");
        assert!(out.contains("await page.waitForTimeout(500);"));
    }

    #[test]
    fn test_driver_sleep() {
        let out = rewrite("await driver.sleep(1000);");
        assert!(out.contains("await page.waitForTimeout(1000);"));
        assert!(!out.contains("await await"));
    }

    #[test]
    fn test_selenium_wait_until_located_by_id() {
        let out = rewrite("await driver.wait(until.elementLocated(By.id('spinner')), 5000);");
        assert!(out.contains("await page.locator('#spinner').waitFor();"));
    }

    #[test]
    fn test_selenium_wait_until_located_by_css() {
        let out = rewrite("driver.wait(until.elementLocated(By.css('.toast')));");
        assert!(out.contains("await page.locator('.toast').waitFor();"));
    }

    #[test]
    fn test_puppeteer_wait_for_selector() {
        let out = rewrite("await page.waitForSelector('#app');");
        assert!(out.contains("await page.locator('#app').waitFor();"));
    }
}
