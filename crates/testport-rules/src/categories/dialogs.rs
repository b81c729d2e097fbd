//! Dialog stubs and handlers -> `page.on('dialog', ...)`
//!
//! The confirm rules are ordered most-specific first: the explicit
//! `=> true` / `=> false` stubs map to accept/dismiss, anything else
//! assigned to `window.confirm` falls through to the accept handler.

use crate::catalog::{Capture, RuleDef};

pub(crate) static RULES: &[RuleDef] = &[
    RuleDef {
        idiom: "window_confirm_accept",
        about: "window.confirm = () => true -> dialog accept handler",
        pattern: r#"(?m)^(\s*)window\.confirm\s*=\s*\(\s*\)\s*=>\s*true;?\s*$"#,
        template: "${1}page.on('dialog', dialog => dialog.accept());",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "window_confirm_dismiss",
        about: "window.confirm = () => false -> dialog dismiss handler",
        pattern: r#"(?m)^(\s*)window\.confirm\s*=\s*\(\s*\)\s*=>\s*false;?\s*$"#,
        template: "${1}page.on('dialog', dialog => dialog.dismiss());",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "window_confirm_stub",
        about: "other window.confirm stubs -> dialog accept handler",
        pattern: r#"(?m)^(\s*)window\.confirm\s*=\s*[^;\n]+;?\s*$"#,
        template: "${1}page.on('dialog', dialog => dialog.accept());",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "window_alert_stub",
        about: "window.alert stubs -> dialog dismiss handler",
        pattern: r#"(?m)^(\s*)window\.alert\s*=\s*[^;\n]+;?\s*$"#,
        template: "${1}page.on('dialog', dialog => dialog.dismiss());",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "cy_on_alert",
        about: "cy.on('window:alert', ..) -> page.on('dialog', ..)",
        pattern: r#"cy\.on\(\s*['"]window:alert['"]\s*,"#,
        template: "page.on('dialog',",
        capture: Capture::None,
    },
    RuleDef {
        idiom: "cy_on_confirm",
        about: "cy.on('window:confirm', ..) -> page.on('dialog', ..)",
        pattern: r#"cy\.on\(\s*['"]window:confirm['"]\s*,"#,
        template: "page.on('dialog',",
        capture: Capture::None,
    },
];
