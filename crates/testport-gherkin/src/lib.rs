//! testport-gherkin: BDD synthesis for migrated test suites
//!
//! Turns detected idioms into Given/When/Then steps, groups them into
//! feature documents, and renders the run's deduplicated step vocabulary
//! into Cucumber-js bindings against Playwright.

mod feature;
mod stepdefs;
pub mod support;
mod synth;
mod testcase;

pub use feature::{build_feature, feature_title, render_feature};
pub use stepdefs::render_step_definitions;
pub use synth::synthesize;
pub use testcase::{case_blocks, extract_cases};
