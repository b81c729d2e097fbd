//! Feature document assembly and rendering
//!
//! Scenarios are grouped by their `describe` label but flattened into a
//! single ordered list; the label survives as a scenario tag since the
//! output format has no scenario-level grouping construct.

use std::collections::BTreeSet;

use testport_core::{Feature, Scenario, SynthesizedStep, TestCase};

/// Derive a feature title from a file name: strip the extension, turn
/// `.`/`-`/`_` into spaces, then title-case each word.
pub fn feature_title(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _ext)| stem);
    stem.split(['.', '-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn tag_slug(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Assemble one feature from a file's test cases and their steps.
///
/// `cases` and `steps_by_case` are parallel, in source order.
pub fn build_feature(
    file_name: &str,
    cases: &[TestCase],
    steps_by_case: &[Vec<SynthesizedStep>],
) -> Feature {
    let scenarios = cases
        .iter()
        .zip(steps_by_case.iter())
        .map(|(case, steps)| {
            let mut tags = BTreeSet::new();
            if !case.describe_label.is_empty() {
                tags.insert(tag_slug(&case.describe_label));
            }
            Scenario {
                name: case.name.clone(),
                tags,
                steps: steps.clone(),
            }
        })
        .collect();

    Feature {
        title: feature_title(file_name),
        tags: BTreeSet::from(["migrated".to_string()]),
        scenarios,
    }
}

/// Render the feature document. Every step line carries its literal
/// phase keyword; continuation keywords are not used.
pub fn render_feature(feature: &Feature) -> String {
    let mut out = String::new();
    for tag in &feature.tags {
        out.push_str(&format!("@{tag}\n"));
    }
    out.push_str(&format!("Feature: {}\n", feature.title));

    for scenario in &feature.scenarios {
        out.push('\n');
        for tag in &scenario.tags {
            out.push_str(&format!("  @{tag}\n"));
        }
        out.push_str(&format!("  Scenario: {}\n", scenario.name));
        for step in &scenario.steps {
            out.push_str(&format!("    {} {}\n", step.phase.keyword(), step.phrase));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use testport_core::StepPhase;

    fn step(phase: StepPhase, phrase: &str) -> SynthesizedStep {
        SynthesizedStep::new(phase, phrase)
    }

    #[test]
    fn test_title_from_file_name() {
        assert_eq!(feature_title("login-page.test.js"), "Login Page Test");
        assert_eq!(feature_title("cart_checkout.js"), "Cart Checkout");
        assert_eq!(feature_title("smoke.js"), "Smoke");
    }

    #[test]
    fn test_scenarios_keep_source_order() {
        let cases = vec![
            TestCase {
                describe_label: "auth".to_string(),
                name: "first".to_string(),
            },
            TestCase {
                describe_label: "auth".to_string(),
                name: "second".to_string(),
            },
        ];
        let steps = vec![
            vec![step(StepPhase::Given, "I am on the application page")],
            vec![step(StepPhase::Given, "I am on the application page")],
        ];
        let feature = build_feature("auth.test.js", &cases, &steps);
        assert_eq!(feature.scenarios[0].name, "first");
        assert_eq!(feature.scenarios[1].name, "second");
    }

    #[test]
    fn test_describe_label_becomes_scenario_tag() {
        let cases = vec![TestCase {
            describe_label: "Login Page".to_string(),
            name: "works".to_string(),
        }];
        let steps = vec![vec![step(StepPhase::Given, "I am on the application page")]];
        let feature = build_feature("x.js", &cases, &steps);
        assert!(feature.scenarios[0].tags.contains("login-page"));
    }

    #[test]
    fn test_rendered_document_shape() {
        let cases = vec![TestCase {
            describe_label: String::new(),
            name: "logs in".to_string(),
        }];
        let steps = vec![vec![
            step(StepPhase::Given, "I am on the application page"),
            step(StepPhase::When, "I click on \"#go\""),
            step(StepPhase::Then, "I should see the expected result"),
        ]];
        let feature = build_feature("login.test.js", &cases, &steps);
        let doc = render_feature(&feature);

        assert!(doc.starts_with("@migrated\nFeature: Login Test\n"));
        assert!(doc.contains("\n  Scenario: logs in\n"));
        assert!(doc.contains("\n    Given I am on the application page\n"));
        assert!(doc.contains("\n    When I click on \"#go\"\n"));
        assert!(doc.contains("\n    Then I should see the expected result\n"));
    }
}
