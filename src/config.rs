use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime settings for the dispatcher, the generic strategies and the fetcher
#[derive(Debug, Deserialize, Clone)]
pub struct ScrapeConfig {
    /// Site strategy names left out of the registry
    #[serde(default)]
    pub disabled_strategies: Vec<String>,
    /// Fetch timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub wordpress: WordPressConfig,
    #[serde(default)]
    pub blogspot: BlogspotConfig,
}

/// Thresholds for the WordPress recipe-plugin strategy
#[derive(Debug, Deserialize, Clone)]
pub struct WordPressConfig {
    /// A list selector must match at least this many items to be accepted
    #[serde(default = "default_min_list_items")]
    pub min_list_items: usize,
}

/// Thresholds for the Blogger/Blogspot strategy
#[derive(Debug, Deserialize, Clone)]
pub struct BlogspotConfig {
    #[serde(default = "default_min_ingredients")]
    pub min_ingredients: usize,
    #[serde(default = "default_min_instructions")]
    pub min_instructions: usize,
    /// Shorter sentences are never taken as steps
    #[serde(default = "default_min_sentence_chars")]
    pub min_sentence_chars: usize,
    #[serde(default = "default_title_min_chars")]
    pub title_min_chars: usize,
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            disabled_strategies: Vec::new(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            wordpress: WordPressConfig::default(),
            blogspot: BlogspotConfig::default(),
        }
    }
}

impl Default for WordPressConfig {
    fn default() -> Self {
        Self {
            min_list_items: default_min_list_items(),
        }
    }
}

impl Default for BlogspotConfig {
    fn default() -> Self {
        Self {
            min_ingredients: default_min_ingredients(),
            min_instructions: default_min_instructions(),
            min_sentence_chars: default_min_sentence_chars(),
            title_min_chars: default_title_min_chars(),
            title_max_chars: default_title_max_chars(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; RecipeScrape/1.0)".to_string()
}

fn default_min_list_items() -> usize {
    2
}

fn default_min_ingredients() -> usize {
    3
}

fn default_min_instructions() -> usize {
    2
}

fn default_min_sentence_chars() -> usize {
    25
}

fn default_title_min_chars() -> usize {
    10
}

fn default_title_max_chars() -> usize {
    150
}

impl ScrapeConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCRAPE__ prefix
    /// 2. recipe-scrape.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCRAPE__BLOGSPOT__MIN_INGREDIENTS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// See [`ScrapeConfig::load`].
pub fn load_config() -> Result<ScrapeConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-scrape").required(false))
        // Use double underscore for nested keys; lists are comma separated
        .add_source(
            Environment::with_prefix("RECIPE_SCRAPE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("disabled_strategies"),
        )
        .build()?;

    settings.try_deserialize()
}
