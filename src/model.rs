use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One ingredient line split into quantity, unit and name.
///
/// `quantity` always uses `.` as decimal separator and is kept as text so
/// display-only values ("1/2", "2-3") survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub quantity: String,
    pub unit: String,
    pub name: String,
}

impl IngredientLine {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            quantity: String::new(),
            unit: String::new(),
            name: name.into(),
        }
    }
}

/// Result of one extraction attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<IngredientLine>,
    /// One entry per step, in page order
    pub instructions: Vec<String>,
    pub prep_minutes: Option<u32>,
    pub cook_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub tags: BTreeSet<String>,
}

impl RecipeDraft {
    /// Title present and at least one of the two lists non-empty.
    pub fn is_publishable(&self) -> bool {
        !self.title.trim().is_empty()
            && (!self.ingredients.is_empty() || !self.instructions.is_empty())
    }
}
