//! Step synthesis: detected idioms -> Given/When/Then steps
//!
//! The policy runs in a fixed order. One Given per test case (navigation
//! with a literal URL when available, generic otherwise). When steps come
//! from a fixed priority list of fill/click shapes, one step per distinct
//! match. Then steps are checked independently against the whole file.
//! Fallback placeholders keep every scenario complete even when idiom
//! extraction is partial, so the output is independently runnable Gherkin.

use regex::Regex;
use std::sync::OnceLock;

use testport_core::{Detection, StepPhase, StepVocabulary, SynthesizedStep};

const NAVIGATION_IDIOMS: &[&str] = &[
    "window_location_assign",
    "cy_visit",
    "selenium_get",
    "selenium_navigate_to",
];

fn nav_url_regex() -> &'static Regex {
    static NAV: OnceLock<Regex> = OnceLock::new();
    NAV.get_or_init(|| {
        Regex::new(
            r#"(?:window\.location(?:\.href)?\s*=|cy\.visit\(|driver\.get\(|driver\.navigate\(\s*\)\.to\()\s*['"]([^'"]+)['"]"#,
        )
        .unwrap()
    })
}

/// The fixed When priority list: (matcher, is_fill) pairs, a-f.
/// Fill shapes capture (target, value); click shapes capture (target).
struct WhenRule {
    pattern: &'static str,
    fill: bool,
    id_target: bool,
}

const WHEN_RULES: &[WhenRule] = &[
    WhenRule {
        pattern: r#"document\.getElementById\(\s*['"]([^'"]+)['"]\s*\)\.value\s*=\s*['"]([^'"]*)['"]"#,
        fill: true,
        id_target: true,
    },
    WhenRule {
        pattern: r#"document\.querySelector\(\s*['"]([^'"]+)['"]\s*\)\.value\s*=\s*['"]([^'"]*)['"]"#,
        fill: true,
        id_target: false,
    },
    WhenRule {
        pattern: r#"\$\(\s*['"]([^'"]+)['"]\s*\)\.val\(\s*['"]([^'"]*)['"]\s*\)"#,
        fill: true,
        id_target: false,
    },
    WhenRule {
        pattern: r#"document\.getElementById\(\s*['"]([^'"]+)['"]\s*\)\.click\(\s*\)"#,
        fill: false,
        id_target: true,
    },
    WhenRule {
        pattern: r#"document\.querySelector\(\s*['"]([^'"]+)['"]\s*\)\.click\(\s*\)"#,
        fill: false,
        id_target: false,
    },
    WhenRule {
        pattern: r#"\$\(\s*['"]([^'"]+)['"]\s*\)\.click\(\s*\)"#,
        fill: false,
        id_target: false,
    },
];

fn when_regexes() -> &'static Vec<Regex> {
    static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        WHEN_RULES
            .iter()
            .map(|rule| Regex::new(rule.pattern).unwrap())
            .collect()
    })
}

/// Synthesize the Given/When/Then block for one test case.
///
/// `case_src` is the case's body slice, `file_src` the whole file (Then
/// checks are file-wide). Every produced phrase is recorded in `vocab`.
pub fn synthesize(
    case_src: &str,
    file_src: &str,
    detection: &Detection,
    vocab: &mut StepVocabulary,
) -> Vec<SynthesizedStep> {
    let mut steps = Vec::new();
    let mut push = |steps: &mut Vec<SynthesizedStep>, phase: StepPhase, phrase: String| {
        vocab.insert(phase, &phrase);
        steps.push(SynthesizedStep { phase, phrase });
    };

    // Setup: exactly one Given per test case
    let navigated = NAVIGATION_IDIOMS
        .iter()
        .any(|idiom| detection.idioms.contains(*idiom));
    let nav_url = navigated.then(|| nav_url_regex().captures(case_src)).flatten();
    match nav_url {
        Some(caps) => push(
            &mut steps,
            StepPhase::Given,
            format!("I navigate to \"{}\"", &caps[1]),
        ),
        None => push(
            &mut steps,
            StepPhase::Given,
            "I am on the application page".to_string(),
        ),
    }

    // Actions, in fixed idiom-priority order, one step per distinct match
    let mut seen = Vec::new();
    for (rule, regex) in WHEN_RULES.iter().zip(when_regexes().iter()) {
        for caps in regex.captures_iter(case_src) {
            let target = if rule.id_target {
                format!("#{}", &caps[1])
            } else {
                caps[1].to_string()
            };
            let phrase = if rule.fill {
                format!("I enter \"{}\" in the \"{}\" field", &caps[2], target)
            } else {
                format!("I click on \"{target}\"")
            };
            if !seen.contains(&phrase) {
                seen.push(phrase.clone());
                push(&mut steps, StepPhase::When, phrase);
            }
        }
    }
    if seen.is_empty() {
        push(
            &mut steps,
            StepPhase::When,
            "I perform the test actions".to_string(),
        );
    }

    // Assertions, independently evaluated against the full file text
    let mut asserted = false;
    if content_read_regex().is_match(file_src) {
        push(
            &mut steps,
            StepPhase::Then,
            "I should see the expected content".to_string(),
        );
        asserted = true;
    }
    if assertion_regex().is_match(file_src) {
        push(
            &mut steps,
            StepPhase::Then,
            "the assertion should pass".to_string(),
        );
        asserted = true;
    }
    if containment_regex().is_match(file_src) {
        push(
            &mut steps,
            StepPhase::Then,
            "the element should contain the expected text".to_string(),
        );
        asserted = true;
    }
    if !asserted {
        push(
            &mut steps,
            StepPhase::Then,
            "I should see the expected result".to_string(),
        );
    }

    steps
}

fn content_read_regex() -> &'static Regex {
    static CONTENT: OnceLock<Regex> = OnceLock::new();
    CONTENT.get_or_init(|| {
        Regex::new(r"\.textContent\b|\.innerHTML\b|\.innerText\b|\.getText\(|\.text\(\s*\)")
            .unwrap()
    })
}

fn assertion_regex() -> &'static Regex {
    static ASSERT: OnceLock<Regex> = OnceLock::new();
    ASSERT.get_or_init(|| {
        Regex::new(r"\bexpect\(|\bassert\.|\.should\(|toThrow|\.throws\(").unwrap()
    })
}

fn containment_regex() -> &'static Regex {
    static CONTAIN: OnceLock<Regex> = OnceLock::new();
    CONTAIN.get_or_init(|| {
        Regex::new(r"\.includes\(|toContain|\.indexOf\(|\.contains\(").unwrap()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use testport_rules::detect;

    fn phases(steps: &[SynthesizedStep]) -> Vec<StepPhase> {
        steps.iter().map(|s| s.phase).collect()
    }

    #[test]
    fn test_login_form_synthesis() {
        let src =
            "document.getElementById('email').value = 'a@b.com'; document.getElementById('login-btn').click();";
        let mut vocab = StepVocabulary::new();
        let steps = synthesize(src, src, &detect(src), &mut vocab);

        let phrases: Vec<&str> = steps.iter().map(|s| s.phrase.as_str()).collect();
        assert_eq!(
            phrases,
            vec![
                "I am on the application page",
                "I enter \"a@b.com\" in the \"#email\" field",
                "I click on \"#login-btn\"",
                "I should see the expected result",
            ]
        );
        assert_eq!(vocab.len(), 4);
    }

    #[test]
    fn test_navigation_given_uses_literal_url() {
        let src = "window.location.href = 'https://example.com/login';";
        let mut vocab = StepVocabulary::new();
        let steps = synthesize(src, src, &detect(src), &mut vocab);
        assert_eq!(steps[0].phrase, "I navigate to \"https://example.com/login\"");
    }

    #[test]
    fn test_exactly_one_given_and_at_least_one_then() {
        for src in [
            "const x = 1 + 1;",
            "document.getElementById('go').click();",
            "cy.visit('/a'); cy.visit('/b');",
        ] {
            let mut vocab = StepVocabulary::new();
            let steps = synthesize(src, src, &detect(src), &mut vocab);
            let givens = phases(&steps)
                .iter()
                .filter(|p| **p == StepPhase::Given)
                .count();
            let thens = phases(&steps)
                .iter()
                .filter(|p| **p == StepPhase::Then)
                .count();
            assert_eq!(givens, 1, "input: {src}");
            assert!(thens >= 1, "input: {src}");
        }
    }

    #[test]
    fn test_when_fallback_fires_without_actions() {
        let src = "window.location.href = '/home';";
        let mut vocab = StepVocabulary::new();
        let steps = synthesize(src, src, &detect(src), &mut vocab);
        assert!(steps
            .iter()
            .any(|s| s.phrase == "I perform the test actions"));
    }

    #[test]
    fn test_then_checks_cooccur_in_fixed_order() {
        let src = "const t = el.textContent; expect(t).toBe('x'); if (t.includes('x')) {}";
        let mut vocab = StepVocabulary::new();
        let steps = synthesize(src, src, &detect(src), &mut vocab);
        let thens: Vec<&str> = steps
            .iter()
            .filter(|s| s.phase == StepPhase::Then)
            .map(|s| s.phrase.as_str())
            .collect();
        assert_eq!(
            thens,
            vec![
                "I should see the expected content",
                "the assertion should pass",
                "the element should contain the expected text",
            ]
        );
    }

    #[test]
    fn test_duplicate_matches_yield_one_step() {
        let src = "$('.add').click(); $('.add').click();";
        let mut vocab = StepVocabulary::new();
        let steps = synthesize(src, src, &detect(src), &mut vocab);
        let clicks = steps
            .iter()
            .filter(|s| s.phrase == "I click on \".add\"")
            .count();
        assert_eq!(clicks, 1);
    }

    #[test]
    fn test_jquery_val_is_a_fill_step() {
        let src = "$('#password').val('secret');";
        let mut vocab = StepVocabulary::new();
        let steps = synthesize(src, src, &detect(src), &mut vocab);
        assert!(steps
            .iter()
            .any(|s| s.phrase == "I enter \"secret\" in the \"#password\" field"));
    }
}
