//! Web storage and cookie idioms -> `page.evaluate(...)` wrappers
//!
//! Storage idioms are recognized in statement or declaration position
//! only. The wrapped replacements place the original call mid-line, which
//! is what keeps these rules from matching their own output.

use crate::catalog::{Capture, RuleDef};

pub(crate) static RULES: &[RuleDef] = &[
    RuleDef {
        idiom: "local_storage_set",
        about: "localStorage.setItem(..) -> await page.evaluate(..)",
        pattern: r#"(?m)^(\s*)localStorage\.setItem\(([^)]*)\);?"#,
        template: "${1}await page.evaluate(() => localStorage.setItem(${2}));",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "local_storage_get",
        about: "const x = localStorage.getItem(..) -> await page.evaluate(..)",
        pattern: r#"(?m)^(\s*(?:const|let|var)\s+[\w$]+\s*=\s*)localStorage\.getItem\(([^)]*)\);?"#,
        template: "${1}await page.evaluate(() => localStorage.getItem(${2}));",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "local_storage_remove",
        about: "localStorage.removeItem(..) -> await page.evaluate(..)",
        pattern: r#"(?m)^(\s*)localStorage\.removeItem\(([^)]*)\);?"#,
        template: "${1}await page.evaluate(() => localStorage.removeItem(${2}));",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "local_storage_clear",
        about: "localStorage.clear() -> await page.evaluate(..)",
        pattern: r#"(?m)^(\s*)localStorage\.clear\(\s*\);?"#,
        template: "${1}await page.evaluate(() => localStorage.clear());",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "session_storage_set",
        about: "sessionStorage.setItem(..) -> await page.evaluate(..)",
        pattern: r#"(?m)^(\s*)sessionStorage\.setItem\(([^)]*)\);?"#,
        template: "${1}await page.evaluate(() => sessionStorage.setItem(${2}));",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "document_cookie_assign",
        about: "document.cookie = 'c' -> await page.evaluate(..)",
        pattern: r#"(?m)^(\s*)document\.cookie\s*=\s*(['"][^'"]*['"]);?"#,
        template: "${1}await page.evaluate(() => { document.cookie = ${2}; });",
        capture: Capture::None,
    },
];

#[cfg(test)]
mod tests {
    use crate::rewrite;

    #[test]
    fn test_local_storage_set_is_wrapped() {
        let out = rewrite("localStorage.setItem('token', 'abc');");
        assert!(out.contains("await page.evaluate(() => localStorage.setItem('token', 'abc'));"));
    }

    #[test]
    fn test_local_storage_get_in_declaration() {
        let out = rewrite("const token = localStorage.getItem('token');");
        assert!(
            out.contains("const token = await page.evaluate(() => localStorage.getItem('token'));")
        );
    }

    #[test]
    fn test_wrapped_storage_is_not_rewrapped() {
        let migrated = "await page.evaluate(() => localStorage.setItem('token', 'abc'));";
        let out = rewrite(migrated);
        assert!(out.contains(migrated));
        assert!(!out.contains("page.evaluate(() => await page.evaluate"));
    }

    #[test]
    fn test_cookie_assignment_is_wrapped() {
        let out = rewrite("document.cookie = 'session=1';");
        assert!(out.contains("await page.evaluate(() => { document.cookie = 'session=1'; });"));
    }

    #[test]
    fn test_indentation_is_preserved() {
        let out = rewrite("    localStorage.clear();");
        assert!(out.contains("    await page.evaluate(() => localStorage.clear());"));
    }
}
