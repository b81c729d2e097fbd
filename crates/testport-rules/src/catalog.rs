//! The pattern catalog: ordered, categorized idiom -> Playwright rules
//!
//! Rules are declared as static tables in the category modules and
//! compiled once per process. Category order is load-bearing: the rewrite
//! engine applies categories in `Category::ALL` order, and later
//! categories assume earlier ones already converted their sub-expressions.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use testport_core::{ActionKind, Category, ExtractedAction, RuleError};

use crate::categories;

/// How the detector interprets a rule's first capture group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Existence only, nothing to extract
    None,
    /// Group 1 is an element id, normalized to `#id`
    Id,
    /// Group 1 is a CSS selector, used as-is
    Selector,
    /// Group 1 is a (possibly quoted) URL literal
    Url,
    /// Group 1 is the receiver of a chained call; the named method applies
    Action(&'static str),
}

/// One declared rule, before compilation
pub struct RuleDef {
    pub idiom: &'static str,
    pub about: &'static str,
    pub pattern: &'static str,
    pub template: &'static str,
    pub capture: Capture,
}

/// A compiled rule ready for matching
pub struct CompiledRule {
    pub idiom: &'static str,
    pub about: &'static str,
    pub regex: Regex,
    pub template: &'static str,
    pub capture: Capture,
}

impl CompiledRule {
    /// Build an `ExtractedAction` from one match, if this rule extracts
    pub fn extract(&self, caps: &Captures) -> Option<ExtractedAction> {
        let group = |i: usize| caps.get(i).map(|m| m.as_str());
        match self.capture {
            Capture::None => None,
            Capture::Id => Some(ExtractedAction {
                kind: ActionKind::Select,
                selector: group(1).map(|id| format!("#{id}")),
                method: None,
            }),
            Capture::Selector => Some(ExtractedAction {
                kind: ActionKind::Select,
                selector: group(1).map(str::to_string),
                method: None,
            }),
            Capture::Url => Some(ExtractedAction {
                kind: ActionKind::Navigation,
                selector: group(1)
                    .map(|url| url.trim_matches(|c| c == '\'' || c == '"').to_string()),
                method: None,
            }),
            Capture::Action(method) => {
                let receiver = group(1).unwrap_or("");
                Some(ExtractedAction {
                    kind: ActionKind::Action,
                    selector: receiver_selector(receiver),
                    method: Some(method.to_string()),
                })
            }
        }
    }
}

/// Pull a usable selector out of a chained-call receiver like
/// `document.getElementById('email')` or `$('.login-btn')`.
fn receiver_selector(receiver: &str) -> Option<String> {
    static QUOTED: OnceLock<Regex> = OnceLock::new();
    let regex = QUOTED.get_or_init(|| Regex::new(r#"['"]([^'"]+)['"]"#).unwrap());
    let inner = regex.captures(receiver)?.get(1)?.as_str();
    if receiver.starts_with("document.getElementById") || receiver.contains("By.id(") {
        Some(format!("#{inner}"))
    } else {
        Some(inner.to_string())
    }
}

/// One pipeline stage: a category plus its ordered rules
pub struct Stage {
    pub category: Category,
    pub rules: Vec<CompiledRule>,
}

/// The full compiled catalog, in pipeline order
pub struct Catalog {
    stages: Vec<Stage>,
}

impl Catalog {
    /// Compile every declared rule. Fails on the first invalid matcher.
    pub fn try_new() -> Result<Self, RuleError> {
        let mut stages = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let defs = categories::rules_for(category);
            let mut rules = Vec::with_capacity(defs.len());
            for def in defs {
                let regex = Regex::new(def.pattern).map_err(|source| RuleError::BadMatcher {
                    idiom: def.idiom,
                    source,
                })?;
                rules.push(CompiledRule {
                    idiom: def.idiom,
                    about: def.about,
                    regex,
                    template: def.template,
                    capture: def.capture,
                });
            }
            stages.push(Stage { category, rules });
        }
        Ok(Self { stages })
    }

    /// The process-wide compiled catalog
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::try_new().expect("built-in catalog patterns compile"))
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// All rules with their category, for `--list-rules`
    pub fn list(&self) -> Vec<(&'static str, &'static str, Category)> {
        self.stages
            .iter()
            .flat_map(|stage| {
                stage
                    .rules
                    .iter()
                    .map(move |rule| (rule.idiom, rule.about, stage.category))
            })
            .collect()
    }

    /// All idiom ids in declaration order
    pub fn all_idioms(&self) -> Vec<&'static str> {
        self.stages
            .iter()
            .flat_map(|stage| stage.rules.iter().map(|rule| rule.idiom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        let catalog = Catalog::try_new().unwrap();
        assert_eq!(catalog.stages().len(), Category::ALL.len());
    }

    #[test]
    fn test_idiom_ids_are_unique() {
        let idioms = Catalog::global().all_idioms();
        let mut deduped = idioms.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(idioms.len(), deduped.len());
    }

    #[test]
    fn test_stages_follow_pipeline_order() {
        let catalog = Catalog::global();
        let order: Vec<Category> = catalog.stages().iter().map(|s| s.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_receiver_selector_normalizes_ids() {
        assert_eq!(
            receiver_selector("document.getElementById('email')"),
            Some("#email".to_string())
        );
        assert_eq!(
            receiver_selector("$('.login-btn')"),
            Some(".login-btn".to_string())
        );
        assert_eq!(receiver_selector("someFn()"), None);
    }
}
