//! Data model shared by the detector, rewriter and BDD generator

use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised while building or applying the pattern catalog
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Invalid matcher for idiom '{idiom}': {source}")]
    BadMatcher {
        idiom: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Rewrite categories, declared in pipeline order.
///
/// The rewrite engine applies categories top to bottom; later categories
/// assume earlier ones already converted their sub-expressions (action
/// chaining rules match the locator form produced by the selector rules).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Selectors,
    Properties,
    Actions,
    Navigation,
    Waits,
    Storage,
    Dialogs,
    Assertions,
    Structural,
    Imports,
}

impl Category {
    /// All categories in pipeline order
    pub const ALL: [Category; 10] = [
        Category::Selectors,
        Category::Properties,
        Category::Actions,
        Category::Navigation,
        Category::Waits,
        Category::Storage,
        Category::Dialogs,
        Category::Assertions,
        Category::Structural,
        Category::Imports,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Selectors => "selectors",
            Category::Properties => "properties",
            Category::Actions => "actions",
            Category::Navigation => "navigation",
            Category::Waits => "waits",
            Category::Storage => "storage",
            Category::Dialogs => "dialogs",
            Category::Assertions => "assertions",
            Category::Structural => "structural",
            Category::Imports => "imports",
        }
    }
}

/// What kind of interaction an extracted match represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Select,
    Action,
    Navigation,
}

/// A single enumerated match from the selectors/actions/navigation categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedAction {
    pub kind: ActionKind,
    /// Selector (normalized, e.g. `#email`) or URL for navigation matches
    pub selector: Option<String>,
    /// Method name for action matches (`click`, `val`, `type`, ...)
    pub method: Option<String>,
}

/// Result of scanning one file against the pattern catalog.
///
/// Created fresh per scan and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Detection {
    /// Idiom ids that matched at least once
    pub idioms: BTreeSet<String>,
    /// All non-overlapping matches from the enumerating categories,
    /// in source order of first appearance
    pub actions: Vec<ExtractedAction>,
}

impl Detection {
    /// A file with zero idiom matches is not a migration candidate
    pub fn is_candidate(&self) -> bool {
        !self.idioms.is_empty()
    }
}

/// A test case extracted from a file's structural markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// The enclosing `describe` label, empty when the test is top-level
    pub describe_label: String,
    pub name: String,
}

/// Gherkin step phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepPhase {
    Given,
    When,
    Then,
}

impl StepPhase {
    pub fn keyword(&self) -> &'static str {
        match self {
            StepPhase::Given => "Given",
            StepPhase::When => "When",
            StepPhase::Then => "Then",
        }
    }
}

/// A fully rendered natural-language step with literal arguments substituted.
///
/// Steps are value objects: two steps with identical phrase text are the
/// same vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedStep {
    pub phase: StepPhase,
    pub phrase: String,
}

impl SynthesizedStep {
    pub fn new(phase: StepPhase, phrase: impl Into<String>) -> Self {
        Self {
            phase,
            phrase: phrase.into(),
        }
    }
}

/// One scenario of a feature document
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub tags: BTreeSet<String>,
    pub steps: Vec<SynthesizedStep>,
}

/// A feature document: one per migrated input file
#[derive(Debug, Clone)]
pub struct Feature {
    pub title: String,
    pub tags: BTreeSet<String>,
    pub scenarios: Vec<Scenario>,
}
