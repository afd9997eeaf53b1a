//! Picks one strategy per document and turns its outcome into `Option`.

use std::panic::{catch_unwind, AssertUnwindSafe};

use log::{debug, error, info, warn};
use scraper::Html;

use crate::config::ScrapeConfig;
use crate::error::ExtractError;
use crate::extractors::{blogspot, wordpress, BlogspotStrategy, Extractor, WordPressStrategy};
use crate::model::RecipeDraft;
use crate::registry::Registry;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Registry,
    wordpress: WordPressStrategy,
    blogspot: BlogspotStrategy,
}

impl Dispatcher {
    pub fn new(registry: Registry, config: &ScrapeConfig) -> Self {
        Self {
            registry,
            wordpress: WordPressStrategy::new(&config.wordpress),
            blogspot: BlogspotStrategy::new(&config.blogspot),
        }
    }

    pub fn from_config(config: &ScrapeConfig) -> Self {
        Self::new(Registry::from_config(config), config)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Name of the strategy `extract` would run, without running it.
    pub fn strategy_for(&self, document: &Html, domain: &str) -> Option<&str> {
        self.select(document, &domain.to_lowercase())
            .map(|strategy| strategy.name())
    }

    /// Extract a recipe from `document`, served from `domain`.
    ///
    /// A domain claimed by a site entry never falls back to the generic
    /// strategies, even when that entry finds nothing.
    pub fn extract(&self, document: &Html, domain: &str) -> Option<RecipeDraft> {
        let domain = domain.to_lowercase();
        let Some(strategy) = self.select(document, &domain) else {
            info!("No strategy applies to {domain}");
            return None;
        };
        debug!("Dispatching {domain} to {}", strategy.name());
        run_guarded(strategy, document)
    }

    fn select(&self, document: &Html, domain: &str) -> Option<&dyn Extractor> {
        if let Some(entry) = self.registry.find(domain) {
            return Some(entry);
        }
        if blogspot::is_blog_domain(domain) {
            return Some(&self.blogspot);
        }
        if wordpress::detect(document).is_some() {
            return Some(&self.wordpress);
        }
        None
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::from_config(&ScrapeConfig::default())
    }
}

fn run_guarded(strategy: &dyn Extractor, document: &Html) -> Option<RecipeDraft> {
    let name = strategy.name();
    match catch_unwind(AssertUnwindSafe(|| strategy.extract(document))) {
        Ok(Ok(draft)) if !draft.is_publishable() => {
            info!("{name}: draft without title or content discarded");
            None
        }
        Ok(Ok(draft)) => {
            debug!(
                "{name}: extracted {:?} ({} ingredient(s), {} instruction(s))",
                draft.title,
                draft.ingredients.len(),
                draft.instructions.len()
            );
            Some(draft)
        }
        Ok(Err(e @ ExtractError::MalformedEmbeddedData(_))) => {
            warn!("{name}: {e}");
            None
        }
        Ok(Err(e)) => {
            info!("{name}: {e}");
            None
        }
        Err(panic) => {
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            error!("{name}: strategy panicked: {message}");
            None
        }
    }
}
