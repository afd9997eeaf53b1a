//! The ordered table of site strategies.
//!
//! Built once and read-only afterwards; the dispatcher owns one and walks it
//! in order, so tests can hand it a table of fakes.

use log::debug;
use scraper::Html;

use crate::config::ScrapeConfig;
use crate::error::ExtractError;
use crate::extractors::{sites, Extractor, StrategyFn};
use crate::model::RecipeDraft;

/// How an entry decides whether a domain belongs to it
#[derive(Debug, Clone, Copy)]
pub enum DomainMatcher {
    /// Substring of the host, e.g. "marmiton.org" for "www.marmiton.org"
    Contains(&'static str),
    Predicate(fn(&str) -> bool),
}

impl DomainMatcher {
    pub fn matches(&self, domain: &str) -> bool {
        match self {
            DomainMatcher::Contains(needle) => domain.contains(needle),
            DomainMatcher::Predicate(predicate) => predicate(domain),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyEntry {
    pub name: &'static str,
    pub matcher: DomainMatcher,
    pub run: StrategyFn,
}

impl StrategyEntry {
    pub const fn new(name: &'static str, domain: &'static str, run: StrategyFn) -> Self {
        Self {
            name,
            matcher: DomainMatcher::Contains(domain),
            run,
        }
    }

    pub const fn with_predicate(
        name: &'static str,
        predicate: fn(&str) -> bool,
        run: StrategyFn,
    ) -> Self {
        Self {
            name,
            matcher: DomainMatcher::Predicate(predicate),
            run,
        }
    }

    pub fn matches(&self, domain: &str) -> bool {
        self.matcher.matches(domain)
    }
}

impl Extractor for StrategyEntry {
    fn name(&self) -> &str {
        self.name
    }

    fn extract(&self, document: &Html) -> Result<RecipeDraft, ExtractError> {
        (self.run)(document)
    }
}

/// Immutable, ordered strategy table. Earlier entries win.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<StrategyEntry>,
}

impl Registry {
    pub fn new(entries: Vec<StrategyEntry>) -> Self {
        Self { entries }
    }

    /// Every site strategy shipped with the crate.
    pub fn builtin() -> Self {
        Self::new(sites::entries())
    }

    /// The builtin table minus `config.disabled_strategies`.
    pub fn from_config(config: &ScrapeConfig) -> Self {
        let entries = sites::entries()
            .into_iter()
            .filter(|entry| {
                let disabled = config.disabled_strategies.iter().any(|name| name == entry.name);
                if disabled {
                    debug!("Strategy {} disabled by configuration", entry.name);
                }
                !disabled
            })
            .collect();
        Self::new(entries)
    }

    /// First entry whose matcher accepts `domain`.
    pub fn find(&self, domain: &str) -> Option<&StrategyEntry> {
        self.entries.iter().find(|entry| entry.matches(domain))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
