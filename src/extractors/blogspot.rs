//! Generic extraction for Blogger/Blogspot posts.
//!
//! Blog posts carry no recipe markup, so ingredients and steps are mined
//! from the post text with the patterns in [`super::heuristics`]. The
//! acceptance bar is higher than for site strategies.

use log::debug;
use scraper::{ElementRef, Html};

use super::dom::{document_title, element_text, flatten_text, select_first};
use super::heuristics::{
    cook_minutes_in, mine_ingredients, mine_instructions, prep_minutes_in, servings_in,
};
use super::Extractor;
use crate::config::BlogspotConfig;
use crate::error::ExtractError;
use crate::model::RecipeDraft;

const NAME: &str = "blogspot";

/// Host substring that routes a domain to this strategy
pub const BLOG_PLATFORM_MARKER: &str = "blogspot.";

const CONTENT_CONTAINERS: &[&str] = &[
    ".post-body",
    ".entry-content",
    ".post-content",
    "article",
    ".post",
    "#main",
    "body",
];

const TITLE_CANDIDATES: &[&str] = &[
    "h3.post-title",
    "h1.post-title",
    "h2.post-title",
    ".entry-title",
    ".post-title",
    "h1",
];

/// Headings that label a section rather than name the recipe
const NON_TITLES: &[&str] = &[
    "recette",
    "recettes",
    "accueil",
    "menu",
    "préparation",
    "commentaires",
    "archives du blog",
    "libellés",
    "articles les plus consultés",
];

/// A bare hyphen only separates when spaced, so "pur-beurre" stays whole
const SPACED_HYPHEN: &str = " - ";
const TITLE_SEPARATORS: &[char] = &['–', ':', '|'];

pub fn is_blog_domain(domain: &str) -> bool {
    domain.to_lowercase().contains(BLOG_PLATFORM_MARKER)
}

#[derive(Debug, Clone)]
pub struct BlogspotStrategy {
    config: BlogspotConfig,
}

impl BlogspotStrategy {
    pub fn new(config: &BlogspotConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn content<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        let root = document.root_element();
        CONTENT_CONTAINERS.iter().find_map(|css| {
            let container = select_first(root, css)?;
            debug!("Blog content container: {css}");
            Some(container)
        })
    }

    fn plausible_title(&self, text: &str) -> bool {
        let length = text.chars().count();
        if length < self.config.title_min_chars || length > self.config.title_max_chars {
            return false;
        }
        let lower = text.to_lowercase();
        !(lower.starts_with("ingrédient")
            || lower.starts_with("ingredient")
            || NON_TITLES.contains(&lower.as_str()))
    }

    fn title(&self, document: &Html) -> Option<String> {
        let root = document.root_element();
        for css in TITLE_CANDIDATES {
            let Some(heading) = select_first(root, css) else {
                continue;
            };
            let text = element_text(heading);
            if self.plausible_title(&text) {
                return Some(text);
            }
            debug!("Rejected blog title candidate {text:?} from {css}");
        }

        document_title(document).and_then(|title| {
            title
                .split(SPACED_HYPHEN)
                .next()
                .and_then(|head| head.split(TITLE_SEPARATORS).next())
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
        })
    }
}

impl Default for BlogspotStrategy {
    fn default() -> Self {
        Self::new(&BlogspotConfig::default())
    }
}

impl Extractor for BlogspotStrategy {
    fn name(&self) -> &str {
        NAME
    }

    fn extract(&self, document: &Html) -> Result<RecipeDraft, ExtractError> {
        let body = self
            .content(document)
            .ok_or_else(|| ExtractError::NotApplicable("no blog content container".to_string()))?;
        let text = flatten_text(body);

        let draft = RecipeDraft {
            title: self.title(document).unwrap_or_default(),
            ingredients: mine_ingredients(&text),
            instructions: mine_instructions(&text, self.config.min_sentence_chars),
            prep_minutes: prep_minutes_in(&text),
            cook_minutes: cook_minutes_in(&text),
            servings: servings_in(&text),
            ..RecipeDraft::default()
        };

        debug!(
            "Blog post: {:?}, {} ingredient(s), {} instruction(s)",
            draft.title,
            draft.ingredients.len(),
            draft.instructions.len()
        );

        if draft.title.is_empty() {
            return Err(ExtractError::incomplete(NAME, "no title"));
        }
        if draft.ingredients.len() < self.config.min_ingredients {
            return Err(ExtractError::incomplete(
                NAME,
                format!(
                    "{} ingredient(s), need {}",
                    draft.ingredients.len(),
                    self.config.min_ingredients
                ),
            ));
        }
        if draft.instructions.len() < self.config.min_instructions {
            return Err(ExtractError::incomplete(
                NAME,
                format!(
                    "{} instruction(s), need {}",
                    draft.instructions.len(),
                    self.config.min_instructions
                ),
            ));
        }

        Ok(draft)
    }
}
