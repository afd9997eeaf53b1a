//! Recipe extraction for French-language cooking sites.
//!
//! Hand a parsed document and the host it came from to a [`Dispatcher`];
//! it picks a site strategy, the Blogspot heuristics or the WordPress
//! plugin reader, and returns a [`RecipeDraft`] or `None`.

use std::sync::LazyLock;

use log::debug;
use scraper::Html;

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod model;
pub mod normalize;
pub mod registry;

pub use config::{load_config, ScrapeConfig};
pub use dispatcher::Dispatcher;
pub use error::{ExtractError, ScrapeError};
pub use model::{IngredientLine, RecipeDraft};
pub use registry::{DomainMatcher, Registry, StrategyEntry};

static DEFAULT_DISPATCHER: LazyLock<Dispatcher> = LazyLock::new(Dispatcher::default);

/// Extract with the builtin strategies and default thresholds.
pub fn extract_recipe(document: &Html, domain: &str) -> Option<RecipeDraft> {
    DEFAULT_DISPATCHER.extract(document, domain)
}

/// Fetch `url` and extract a recipe from it.
///
/// `Ok(None)` means the page was fetched but nothing could be extracted.
pub async fn fetch_recipe(
    url: &str,
    config: &ScrapeConfig,
) -> Result<Option<RecipeDraft>, ScrapeError> {
    let domain = fetch::domain_of(url)?;
    let html = fetch::RequestFetcher::from_config(config)?.fetch(url).await?;
    debug!("Parsing {} bytes from {domain}", html.len());

    // Html is not Send; parse and dispatch without holding it across an await.
    let document = Html::parse_document(&html);
    Ok(Dispatcher::from_config(config).extract(&document, &domain))
}
