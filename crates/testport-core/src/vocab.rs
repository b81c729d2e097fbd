//! Step vocabulary accumulated across a migration run
//!
//! The vocabulary is an insert-only set of step phrasings. It is threaded
//! through per-file synthesis as an explicit value and merged at the end of
//! the run, so insertion order never affects the final content.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::model::StepPhase;

/// Replace quoted literal arguments with the `{string}` placeholder.
///
/// `I click on "#login-btn"` and `I click on ".submit"` both canonicalize
/// to `I click on {string}`, which is the unit of step-definition dedup.
pub fn parameterize(phrase: &str) -> String {
    static QUOTED: OnceLock<Regex> = OnceLock::new();
    let regex = QUOTED.get_or_init(|| Regex::new(r#""[^"]*""#).unwrap());
    regex.replace_all(phrase, "{string}").into_owned()
}

/// Deduplicated set of all step phrasings synthesized in a run
#[derive(Debug, Clone, Default)]
pub struct StepVocabulary {
    entries: BTreeSet<(StepPhase, String)>,
}

impl StepVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one synthesized phrase. Re-inserting is a no-op.
    pub fn insert(&mut self, phase: StepPhase, phrase: &str) {
        self.entries.insert((phase, phrase.to_string()));
    }

    /// Merge another vocabulary into this one (commutative, idempotent)
    pub fn merge(&mut self, other: StepVocabulary) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unique parameterized phrases, ordered by phase then alphabetically.
    ///
    /// Parameterization happens here so concrete phrases that differ only
    /// in their literals collapse into a single entry.
    pub fn parameterized(&self) -> Vec<(StepPhase, String)> {
        let set: BTreeSet<(StepPhase, String)> = self
            .entries
            .iter()
            .map(|(phase, phrase)| (*phase, parameterize(phrase)))
            .collect();
        set.into_iter().collect()
    }
}
