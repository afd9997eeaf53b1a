//! Site-specific strategies.
//!
//! Most sites are described declaratively by a [`SiteRules`] value; the few
//! that need more post-process what the rules produce.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;
use scraper::{ElementRef, Html};

use super::candidates::{first_text, Candidates};
use super::dom::{flatten_text, select_first};
use super::json_ld::extract_embedded;
use super::{ingredient_lines, Requirement};
use crate::error::ExtractError;
use crate::model::RecipeDraft;
use crate::normalize::{clean_text, extract_leading_number, parse_duration_minutes};

mod catalog;

pub(crate) use catalog::entries;

static STEP_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)(?:[ÉéEe]tape\s+)?\d{1,2}\s*[.):]\s+").expect("Invalid step number regex")
});

/// Fixed extraction recipe for one site's markup
#[derive(Debug, Clone, Copy)]
pub struct SiteRules {
    pub name: &'static str,
    /// Try the page's JSON-LD before the markup selectors
    pub embedded_first: bool,
    pub title: &'static [&'static str],
    pub ingredients: Candidates,
    pub instructions: Candidates,
    pub prep_time: &'static [&'static str],
    pub cook_time: &'static [&'static str],
    pub servings: &'static [&'static str],
    pub requirement: Requirement,
}

impl SiteRules {
    pub const DEFAULT: SiteRules = SiteRules {
        name: "",
        embedded_first: false,
        title: &["h1"],
        ingredients: Candidates::EMPTY,
        instructions: Candidates::EMPTY,
        prep_time: &[],
        cook_time: &[],
        servings: &[],
        requirement: Requirement::Both,
    };

    pub fn extract(&self, document: &Html) -> Result<RecipeDraft, ExtractError> {
        if self.embedded_first {
            match extract_embedded(document).and_then(|draft| self.finish(draft)) {
                Ok(draft) => {
                    debug!("{}: using embedded JSON-LD", self.name);
                    return Ok(draft);
                }
                Err(ExtractError::MalformedEmbeddedData(e)) => {
                    warn!("{}: embedded JSON-LD unreadable ({e}), reading markup", self.name);
                }
                Err(e) => debug!("{}: {e}, reading markup", self.name),
            }
        }
        self.finish(self.from_markup(document))
    }

    /// Apply the selectors without checking the result.
    pub fn from_markup(&self, document: &Html) -> RecipeDraft {
        let root = document.root_element();
        RecipeDraft {
            title: first_text(root, self.title).unwrap_or_default(),
            ingredients: ingredient_lines(&self.ingredients.items(root)),
            instructions: self.instructions.items(root),
            prep_minutes: minutes(root, self.prep_time),
            cook_minutes: minutes(root, self.cook_time),
            servings: first_text(root, self.servings)
                .as_deref()
                .and_then(extract_leading_number),
            ..RecipeDraft::default()
        }
    }

    pub fn finish(&self, draft: RecipeDraft) -> Result<RecipeDraft, ExtractError> {
        self.requirement.check(self.name, draft)
    }
}

fn minutes(root: ElementRef, selectors: &[&str]) -> Option<u32> {
    first_text(root, selectors)
        .as_deref()
        .and_then(parse_duration_minutes)
}

/// Lines of a single block whose entries are separated by `<br>` or
/// nested blocks.
pub(crate) fn block_lines(document: &Html, css: &str) -> Vec<String> {
    select_first(document.root_element(), css)
        .map(flatten_text)
        .map(|text| text.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Split "1. Do this 2. Do that" into separate steps.
pub(crate) fn split_numbered_steps(text: &str) -> Vec<String> {
    STEP_NUMBER
        .split(text)
        .map(clean_text)
        .filter(|step| !step.is_empty())
        .collect()
}
