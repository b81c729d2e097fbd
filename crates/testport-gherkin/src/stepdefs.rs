//! Step definition rendering: vocabulary -> Cucumber-js bindings
//!
//! Every unique parameterized phrase gets exactly one binding. A fixed
//! baseline set is always emitted so the step file also serves manually
//! written features that use the standard phrasings. Bodies are
//! deterministic given the phrase: navigation, fill, click or an
//! assertion against the page, with `pending` for anything unknown.

use std::collections::BTreeSet;

use testport_core::{StepPhase, StepVocabulary};

/// Always-emitted bindings, covering the full synthesized phrasing set
const BASELINE: &[(StepPhase, &str)] = &[
    (StepPhase::Given, "I navigate to {string}"),
    (StepPhase::Given, "I am on the application page"),
    (StepPhase::When, "I enter {string} in the {string} field"),
    (StepPhase::When, "I click on {string}"),
    (StepPhase::When, "I perform the test actions"),
    (StepPhase::Then, "I should see the expected content"),
    (StepPhase::Then, "the assertion should pass"),
    (StepPhase::Then, "the element should contain the expected text"),
    (StepPhase::Then, "I should see the expected result"),
];

const HEADER: &str = "const { Given, When, Then } = require('@cucumber/cucumber');\nconst { expect } = require('@playwright/test');\n";

/// Render the whole run's step definitions file
pub fn render_step_definitions(vocab: &StepVocabulary) -> String {
    let mut entries: BTreeSet<(StepPhase, String)> = BASELINE
        .iter()
        .map(|(phase, phrase)| (*phase, phrase.to_string()))
        .collect();
    entries.extend(vocab.parameterized());

    let mut out = String::from(HEADER);
    for (phase, phrase) in entries {
        out.push('\n');
        out.push_str(&binding(phase, &phrase));
    }
    out
}

fn binding(phase: StepPhase, phrase: &str) -> String {
    let (params, body) = body_for(phase, phrase);
    format!(
        "{}('{}', async function ({}) {{\n{}\n}});\n",
        phase.keyword(),
        phrase,
        params.join(", "),
        body
    )
}

fn body_for(phase: StepPhase, phrase: &str) -> (Vec<&'static str>, &'static str) {
    match (phase, phrase) {
        (StepPhase::Given, "I navigate to {string}") => {
            (vec!["url"], "  await this.page.goto(url);")
        }
        (StepPhase::Given, "I am on the application page") => {
            (vec![], "  await this.page.goto(this.baseUrl);")
        }
        (StepPhase::When, "I enter {string} in the {string} field") => (
            vec!["value", "selector"],
            "  await this.page.fill(selector, value);",
        ),
        (StepPhase::When, "I click on {string}") => {
            (vec!["selector"], "  await this.page.click(selector);")
        }
        (StepPhase::When, "I perform the test actions") => {
            (vec![], "  return 'pending';")
        }
        (StepPhase::Then, "I should see the expected content") => (
            vec![],
            "  await expect(this.page.locator('body')).not.toBeEmpty();",
        ),
        (StepPhase::Then, "the assertion should pass") => (
            vec![],
            "  await expect(this.page.locator('body')).toBeVisible();",
        ),
        (StepPhase::Then, "the element should contain the expected text") => (
            vec![],
            "  const text = await this.page.textContent('body');\n  expect(text).toBeTruthy();",
        ),
        (StepPhase::Then, "I should see the expected result") => (
            vec![],
            "  await expect(this.page.locator('body')).toBeVisible();",
        ),
        _ => (vec![], "  return 'pending';"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_is_always_emitted() {
        let rendered = render_step_definitions(&StepVocabulary::new());
        for (_, phrase) in BASELINE {
            assert!(rendered.contains(phrase), "missing baseline: {phrase}");
        }
    }

    #[test]
    fn test_cross_file_phrases_render_one_binding() {
        let mut vocab = StepVocabulary::new();
        // the same phrase synthesized from two different files
        vocab.insert(StepPhase::When, "I click on \".login-btn\"");
        vocab.insert(StepPhase::When, "I click on \".login-btn\"");
        let rendered = render_step_definitions(&vocab);
        assert_eq!(rendered.matches("When('I click on {string}'").count(), 1);
    }

    #[test]
    fn test_literal_variants_collapse_into_baseline_binding() {
        let mut vocab = StepVocabulary::new();
        vocab.insert(StepPhase::When, "I click on \"#a\"");
        vocab.insert(StepPhase::When, "I enter \"x\" in the \"#f\" field");
        let rendered = render_step_definitions(&vocab);
        assert_eq!(rendered.matches("When('I click on {string}'").count(), 1);
        assert_eq!(
            rendered
                .matches("When('I enter {string} in the {string} field'")
                .count(),
            1
        );
    }

    #[test]
    fn test_navigation_binding_uses_its_parameter() {
        let rendered = render_step_definitions(&StepVocabulary::new());
        assert!(rendered
            .contains("Given('I navigate to {string}', async function (url) {\n  await this.page.goto(url);\n});"));
    }

    #[test]
    fn test_unknown_phrase_renders_pending() {
        let mut vocab = StepVocabulary::new();
        vocab.insert(StepPhase::Then, "the order total is recalculated");
        let rendered = render_step_definitions(&vocab);
        assert!(rendered
            .contains("Then('the order total is recalculated', async function () {\n  return 'pending';\n});"));
    }
}
