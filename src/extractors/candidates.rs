//! Ordered selector candidates with a minimum-acceptance count.
//!
//! Every list field is described as a sequence of selectors tried from most
//! to least specific. The first selector whose match count clears the
//! minimum wins; a selector that matches too few elements is passed over
//! rather than accepted, so a stray single element never shadows the real
//! list further down.

use log::debug;
use scraper::ElementRef;

use super::dom::{field_text, select_texts, selector};

#[derive(Debug, Clone, Copy)]
pub struct Candidates {
    pub selectors: &'static [&'static str],
    pub min_items: usize,
    /// Leading items dropped from the winning list
    pub skip: usize,
}

/// The winning selector and the items it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub selector: &'static str,
    pub items: Vec<String>,
}

impl Candidates {
    pub const EMPTY: Candidates = Candidates::new(&[]);

    pub const fn new(selectors: &'static [&'static str]) -> Self {
        Self {
            selectors,
            min_items: 1,
            skip: 0,
        }
    }

    pub const fn at_least(self, min_items: usize) -> Self {
        Self { min_items, ..self }
    }

    pub const fn skip(self, skip: usize) -> Self {
        Self { skip, ..self }
    }

    /// Try each selector in order under `root`.
    pub fn pick(&self, root: ElementRef) -> Option<Pick> {
        for &css in self.selectors {
            let items = select_texts(root, css);
            if items.is_empty() {
                continue;
            }
            if items.len() < self.min_items {
                debug!(
                    "Selector {css:?} matched {} item(s), below minimum {}",
                    items.len(),
                    self.min_items
                );
                continue;
            }
            debug!("Selector {css:?} matched {} item(s)", items.len());
            return Some(Pick {
                selector: css,
                items: self.apply_skip(css, items),
            });
        }
        None
    }

    /// Items of the winning selector, or nothing.
    pub fn items(&self, root: ElementRef) -> Vec<String> {
        self.pick(root).map(|pick| pick.items).unwrap_or_default()
    }

    fn apply_skip(&self, css: &str, mut items: Vec<String>) -> Vec<String> {
        if self.skip == 0 {
            return items;
        }
        if items.len() >= self.skip + self.min_items {
            items.drain(..self.skip);
        } else {
            debug!(
                "Not skipping {} leading item(s) of {css:?}: only {} matched",
                self.skip,
                items.len()
            );
        }
        items
    }
}

/// First non-empty text (or `content` attribute) among `selectors`.
pub fn first_text(root: ElementRef, selectors: &[&str]) -> Option<String> {
    selectors.iter().find_map(|css| {
        let selector = selector(css)?;
        root.select(&selector)
            .map(field_text)
            .find(|text| !text.is_empty())
    })
}
