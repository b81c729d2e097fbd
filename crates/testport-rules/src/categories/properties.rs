//! DOM property reads and mutations -> async locator accessors
//!
//! Runs after the selector category, so chained receivers are already in
//! `page.locator(...)` form. Assignment rules must precede the read rule:
//! once assignments are consumed, a remaining `.value` is a read.

use crate::catalog::{Capture, RuleDef};

pub(crate) static RULES: &[RuleDef] = &[
    RuleDef {
        idiom: "value_assign",
        about: ".value = 'v' on a lookup -> await locator.fill('v')",
        pattern: r#"([\w$.]+\([^()]*\))\.value\s*=\s*(['"][^'"]*['"])"#,
        template: "await ${1}.fill(${2})",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "value_assign_var",
        about: "element.value = 'v' statement -> await element.fill('v')",
        pattern: r#"(?m)^(\s*)([A-Za-z_$][\w$]*)\.value\s*=\s*(['"][^'"]*['"]);?\s*$"#,
        template: "${1}await ${2}.fill(${3});",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "value_read",
        about: ".value read -> await locator.inputValue()",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.value(\s*(?:===|==|!==|!=|\)|;|,|\.))"#,
        template: "await ${1}.inputValue()${2}",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "text_content_read",
        about: ".textContent -> await locator.textContent()",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.textContent(\(\))?"#,
        template: "await ${1}.textContent()",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "inner_html_read",
        about: ".innerHTML -> await locator.innerHTML()",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.innerHTML(\(\))?"#,
        template: "await ${1}.innerHTML()",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "inner_text_read",
        about: ".innerText -> await locator.innerText()",
        pattern: r#"(?:await\s+)?([\w$.]+\([^()]*\))\.innerText(\(\))?"#,
        template: "await ${1}.innerText()",
        capture: Capture::None,
    },
];

#[cfg(test)]
mod tests {
    use crate::rewrite;

    #[test]
    fn test_value_assignment_becomes_fill() {
        let out = rewrite("document.getElementById('email').value = 'a@b.com';");
        assert!(out.contains("await page.locator('#email').fill('a@b.com');"));
    }

    #[test]
    fn test_value_assignment_without_spaces() {
        let out = rewrite("document.getElementById('email').value='a@b.com';");
        assert!(out.contains(".fill('a@b.com')"));
    }

    #[test]
    fn test_variable_value_assignment() {
        let out = rewrite("emailInput.value = 'a@b.com';");
        assert!(out.contains("await emailInput.fill('a@b.com');"));
    }

    #[test]
    fn test_value_read_becomes_input_value() {
        let out = rewrite("const v = document.querySelector('#qty').value;");
        assert!(out.contains("await page.locator('#qty').inputValue();"));
    }

    #[test]
    fn test_value_comparison_keeps_spacing() {
        let out = rewrite("if (document.querySelector('#qty').value === '3') {}");
        assert!(out.contains(".inputValue() === '3'"));
    }

    #[test]
    fn test_text_content_becomes_async_call() {
        let out = rewrite("const t = document.querySelector('.msg').textContent;");
        assert!(out.contains("await page.locator('.msg').textContent();"));
    }

    #[test]
    fn test_inner_html_becomes_async_call() {
        let out = rewrite("const h = document.getElementById('root').innerHTML;");
        assert!(out.contains("await page.locator('#root').innerHTML();"));
    }

    #[test]
    fn test_already_migrated_text_content_is_stable() {
        let migrated = "const t = await page.locator('.msg').textContent();";
        let out = rewrite(migrated);
        assert!(out.contains(migrated));
        assert!(!out.contains("await await"));
        assert!(!out.contains("textContent()()"));
    }
}
