//! testport-rules: Pattern catalog, idiom detector and rewrite engine
//!
//! The catalog is an ordered, categorized table of idiom -> Playwright
//! rules. The same table drives two consumers:
//! - `detect()` scans a file and reports which idioms are present, plus
//!   the extracted selector/URL arguments used by BDD synthesis
//! - `rewrite()` applies the categories in pipeline order to produce a
//!   direct code-to-code translation

pub mod catalog;
mod categories;
mod detect;
mod rewrite;

pub use catalog::{Capture, Catalog, CompiledRule, RuleDef, Stage};
pub use detect::{detect, detect_filtered};
pub use rewrite::{rewrite, rewrite_filtered, PLAYWRIGHT_IMPORT};
