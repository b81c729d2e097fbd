//! testport-core: Core abstractions for test migration
//!
//! This crate provides:
//! - `Category`: Ordered rewrite categories (order is the pipeline order)
//! - `Detection` / `ExtractedAction`: Per-file idiom scan results
//! - `TestCase`: A `describe`/`it` pair extracted from a source file
//! - `SynthesizedStep` / `StepPhase`: Natural-language Gherkin steps
//! - `Feature` / `Scenario`: The rendered BDD document model
//! - `StepVocabulary`: Deduplicated step phrasings accumulated over a run

mod model;
mod vocab;

pub use model::{
    ActionKind, Category, Detection, ExtractedAction, Feature, RuleError, Scenario, StepPhase,
    SynthesizedStep, TestCase,
};
pub use vocab::{parameterize, StepVocabulary};
