//! Assertion idioms -> Playwright `expect` calls
//!
//! Node `assert` and chai chains become synchronous jest-style matchers;
//! Cypress `.should(...)` chains become awaited locator expectations.

use crate::catalog::{Capture, RuleDef};

pub(crate) static RULES: &[RuleDef] = &[
    RuleDef {
        idiom: "assert_equal",
        about: "assert.equal(a, b) -> expect(a).toBe(b)",
        pattern: r#"assert\.(?:strictEqual|equal)\(\s*([^,]+?)\s*,\s*([^)]+?)\s*\)"#,
        template: "expect(${1}).toBe(${2})",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "assert_ok",
        about: "assert.ok(x) -> expect(x).toBeTruthy()",
        pattern: r#"assert\.ok\(\s*([^)]+?)\s*\)"#,
        template: "expect(${1}).toBeTruthy()",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "chai_to_equal",
        about: "expect(a).to.equal(b) -> expect(a).toBe(b)",
        pattern: r#"expect\(([^)]+)\)\.to\.equal\(([^)]+)\)"#,
        template: "expect(${1}).toBe(${2})",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "chai_to_include",
        about: "expect(a).to.include(b) -> expect(a).toContain(b)",
        pattern: r#"expect\(([^)]+)\)\.to\.include\(([^)]+)\)"#,
        template: "expect(${1}).toContain(${2})",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "should_be_visible",
        about: ".should('be.visible') -> await expect(locator).toBeVisible()",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.should\(\s*['"]be\.visible['"]\s*\)"#,
        template: "await expect(${1}).toBeVisible()",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "should_exist",
        about: ".should('exist') -> await expect(locator).toBeVisible()",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.should\(\s*['"]exist['"]\s*\)"#,
        template: "await expect(${1}).toBeVisible()",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "should_contain",
        about: ".should('contain', 't') -> await expect(locator).toContainText('t')",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.should\(\s*['"]contain['"]\s*,\s*(['"][^'"]*['"])\s*\)"#,
        template: "await expect(${1}).toContainText(${2})",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "should_have_value",
        about: ".should('have.value', 'v') -> await expect(locator).toHaveValue('v')",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.should\(\s*['"]have\.value['"]\s*,\s*(['"][^'"]*['"])\s*\)"#,
        template: "await expect(${1}).toHaveValue(${2})",
        capture: Capture::None,
    },
];

#[cfg(test)]
mod tests {
    use crate::rewrite;

    #[test]
    fn test_assert_equal_becomes_to_be() {
        let out = rewrite("assert.equal(total, 5);");
        assert!(out.contains("expect(total).toBe(5);"));
    }

    #[test]
    fn test_assert_strict_equal() {
        let out = rewrite("assert.strictEqual(name, 'ada');");
        assert!(out.contains("expect(name).toBe('ada');"));
    }

    #[test]
    fn test_chai_equal_becomes_to_be() {
        let out = rewrite("expect(status).to.equal(200);");
        assert!(out.contains("expect(status).toBe(200);"));
    }

    #[test]
    fn test_chai_include_becomes_to_contain() {
        let out = rewrite("expect(message).to.include('saved');");
        assert!(out.contains("expect(message).toContain('saved');"));
    }

    #[test]
    fn test_cypress_should_be_visible() {
        let out = rewrite("cy.get('.toast').should('be.visible');");
        assert!(out.contains("await expect(page.locator('.toast')).toBeVisible();"));
    }

    #[test]
    fn test_cypress_should_contain() {
        let out = rewrite("cy.get('.msg').should('contain', 'Welcome');");
        assert!(out.contains("await expect(page.locator('.msg')).toContainText('Welcome');"));
    }

    #[test]
    fn test_jest_expect_is_untouched() {
        let migrated = "expect(count).toBe(3);";
        assert!(rewrite(migrated).contains(migrated));
    }
}
