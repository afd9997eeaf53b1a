//! Recipe cards rendered by WordPress recipe plugins.
//!
//! Detection looks for a plugin container (WP Recipe Maker, Tasty Recipes,
//! Mediavine Create, WP Ultimate Recipe, WPZoom, Zip Recipes, EasyRecipe,
//! Cooked, or bare schema.org microdata). Every field is then searched
//! inside that container only, through ordered candidate selectors.

use log::debug;
use scraper::{ElementRef, Html};

use super::candidates::{first_text, Candidates};
use super::dom::{document_title, section_after_heading, select_first};
use super::{ingredient_lines, Extractor, Requirement};
use crate::config::WordPressConfig;
use crate::error::ExtractError;
use crate::model::RecipeDraft;
use crate::normalize::{extract_leading_number, parse_duration_minutes};

const NAME: &str = "wordpress";

const PLUGIN_MARKERS: &[&str] = &[
    ".wprm-recipe-container",
    ".wprm-recipe",
    ".tasty-recipes",
    ".mv-create-card",
    ".wpurp-container",
    ".wpzoom-recipe-card",
    ".zrdn-recipe-container",
    ".easyrecipe",
    ".cooked-recipe",
    ".hrecipe",
    "[itemtype*='schema.org/Recipe']",
    "[itemtype*='data-vocabulary.org/Recipe']",
];

const TITLE: &[&str] = &[
    ".wprm-recipe-name",
    ".tasty-recipes-title",
    ".mv-create-title",
    ".wpurp-recipe-title",
    ".wpzoom-recipe-card-title",
    ".zrdn-recipe-title",
    ".easyrecipe .ERSName",
    ".recipe-title",
    ".recipe-name",
    "[itemprop='name']",
];

const PAGE_TITLE: &[&str] = &["h1.entry-title", "h1.post-title", "h1", ".entry-title"];

const INGREDIENTS: &[&str] = &[
    ".wprm-recipe-ingredient",
    ".tasty-recipes-ingredients li",
    ".mv-create-ingredients li",
    ".wpurp-recipe-ingredient",
    ".wpzoom-recipe-ingredients li",
    ".zrdn-ingredient-item",
    ".ERSIngredients li",
    "[itemprop='recipeIngredient']",
    "[itemprop='ingredients']",
    ".ingredients li",
    "[class*='ingredient'] li",
    "ul li",
];

const INSTRUCTIONS: &[&str] = &[
    ".wprm-recipe-instruction-text",
    ".wprm-recipe-instruction",
    ".tasty-recipes-instructions li",
    ".mv-create-instructions li",
    ".wpurp-recipe-instruction",
    ".wpzoom-recipe-directions-list li",
    ".zrdn-instruction-item",
    ".ERSInstructions li",
    "[itemprop='recipeInstructions'] li",
    "[itemprop='recipeInstructions']",
    ".instructions li",
    "[class*='instruction'] li",
    "[class*='direction'] li",
    "ol li",
];

const PREP_TIME: &[&str] = &[
    ".wprm-recipe-prep_time-container",
    ".wprm-recipe-prep_time",
    ".tasty-recipes-prep-time",
    ".mv-create-time-prep",
    ".wpurp-recipe-prep-time",
    ".zrdn-prep-time",
    "[itemprop='prepTime']",
    ".prep-time",
];

const COOK_TIME: &[&str] = &[
    ".wprm-recipe-cook_time-container",
    ".wprm-recipe-cook_time",
    ".tasty-recipes-cook-time",
    ".mv-create-time-active",
    ".wpurp-recipe-cook-time",
    ".zrdn-cook-time",
    "[itemprop='cookTime']",
    ".cook-time",
];

const SERVINGS: &[&str] = &[
    ".wprm-recipe-servings",
    ".tasty-recipes-yield",
    ".mv-create-yield",
    ".wpurp-recipe-servings",
    ".zrdn-yield",
    "[itemprop='recipeYield']",
    ".recipe-yield",
    ".servings",
];

/// Section titles that introduce the method when no list matched
const METHOD_HEADINGS: &[&str] = &[
    "préparation",
    "preparation",
    "instructions",
    "étapes",
    "etapes",
    "méthode",
    "directions",
];

/// First plugin container in the document, if any.
pub fn detect(document: &Html) -> Option<ElementRef<'_>> {
    let root = document.root_element();
    PLUGIN_MARKERS.iter().find_map(|marker| {
        let container = select_first(root, marker)?;
        debug!("Found recipe plugin marker {marker}");
        Some(container)
    })
}

#[derive(Debug, Clone)]
pub struct WordPressStrategy {
    min_list_items: usize,
}

impl WordPressStrategy {
    pub fn new(config: &WordPressConfig) -> Self {
        Self {
            min_list_items: config.min_list_items,
        }
    }

    fn title(&self, document: &Html, container: ElementRef) -> String {
        first_text(container, TITLE)
            .or_else(|| first_text(document.root_element(), PAGE_TITLE))
            .or_else(|| document_title(document))
            .unwrap_or_default()
    }

    fn instructions(&self, document: &Html, container: ElementRef) -> Vec<String> {
        let listed = Candidates::new(INSTRUCTIONS)
            .at_least(self.min_list_items)
            .items(container);
        if !listed.is_empty() {
            return listed;
        }

        debug!("No instruction list in plugin card, looking for a method heading");
        let steps = section_after_heading(container, METHOD_HEADINGS);
        if !steps.is_empty() {
            return steps;
        }
        section_after_heading(document.root_element(), METHOD_HEADINGS)
    }
}

impl Default for WordPressStrategy {
    fn default() -> Self {
        Self::new(&WordPressConfig::default())
    }
}

impl Extractor for WordPressStrategy {
    fn name(&self) -> &str {
        NAME
    }

    fn extract(&self, document: &Html) -> Result<RecipeDraft, ExtractError> {
        let container = detect(document)
            .ok_or_else(|| ExtractError::NotApplicable("no recipe plugin markup".to_string()))?;

        let ingredients = Candidates::new(INGREDIENTS)
            .at_least(self.min_list_items)
            .items(container);

        let draft = RecipeDraft {
            title: self.title(document, container),
            ingredients: ingredient_lines(&ingredients),
            instructions: self.instructions(document, container),
            prep_minutes: first_text(container, PREP_TIME)
                .as_deref()
                .and_then(parse_duration_minutes),
            cook_minutes: first_text(container, COOK_TIME)
                .as_deref()
                .and_then(parse_duration_minutes),
            servings: first_text(container, SERVINGS)
                .as_deref()
                .and_then(extract_leading_number),
            ..RecipeDraft::default()
        };

        debug!(
            "WordPress card: {:?}, {} ingredient(s), {} instruction(s)",
            draft.title,
            draft.ingredients.len(),
            draft.instructions.len()
        );

        Requirement::Either.check(NAME, draft)
    }
}
