//! Rule tables, one module per rewrite category
//!
//! Within a category, declaration order is application order. A rule's
//! replacement may produce text matched by a later rule in the same or a
//! later category; that layering is intentional.

mod actions;
mod assertions;
mod dialogs;
mod imports;
mod navigation;
mod properties;
mod selectors;
mod storage;
mod structural;
mod waits;

use testport_core::Category;

use crate::catalog::RuleDef;

pub(crate) fn rules_for(category: Category) -> &'static [RuleDef] {
    match category {
        Category::Selectors => selectors::RULES,
        Category::Properties => properties::RULES,
        Category::Actions => actions::RULES,
        Category::Navigation => navigation::RULES,
        Category::Waits => waits::RULES,
        Category::Storage => storage::RULES,
        Category::Dialogs => dialogs::RULES,
        Category::Assertions => assertions::RULES,
        Category::Structural => structural::RULES,
        Category::Imports => imports::RULES,
    }
}
