use scraper::Html;

use crate::error::ExtractError;
use crate::model::{IngredientLine, RecipeDraft};
use crate::normalize::parse_ingredient_line;

pub mod blogspot;
pub mod candidates;
pub mod dom;
pub mod heuristics;
pub mod json_ld;
pub mod sites;
pub mod wordpress;

pub use blogspot::BlogspotStrategy;
pub use candidates::{Candidates, Pick};
pub use wordpress::WordPressStrategy;

/// A site-specific extraction, held by value in the registry.
pub type StrategyFn = fn(&Html) -> Result<RecipeDraft, ExtractError>;

pub trait Extractor {
    fn name(&self) -> &str;
    fn extract(&self, document: &Html) -> Result<RecipeDraft, ExtractError>;
}

/// How many of the two lists must be non-empty for a draft to be returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Both,
    Either,
}

impl Requirement {
    /// Post-condition shared by every strategy: a title, plus the lists the
    /// requirement asks for.
    pub fn check(self, strategy: &str, draft: RecipeDraft) -> Result<RecipeDraft, ExtractError> {
        if draft.title.trim().is_empty() {
            return Err(ExtractError::incomplete(strategy, "no title"));
        }
        let has_ingredients = !draft.ingredients.is_empty();
        let has_instructions = !draft.instructions.is_empty();
        let satisfied = match self {
            Requirement::Both => has_ingredients && has_instructions,
            Requirement::Either => has_ingredients || has_instructions,
        };
        if !satisfied {
            return Err(ExtractError::incomplete(
                strategy,
                format!(
                    "{} ingredient(s), {} instruction(s)",
                    draft.ingredients.len(),
                    draft.instructions.len()
                ),
            ));
        }
        Ok(draft)
    }
}

pub(crate) fn ingredient_lines(items: &[String]) -> Vec<IngredientLine> {
    items
        .iter()
        .map(|item| parse_ingredient_line(item))
        .filter(|line| !line.name.is_empty())
        .collect()
}
