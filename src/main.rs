use std::env;
use std::process::ExitCode;

use log::{debug, error};
use scraper::Html;

use recipe_scrape::{fetch_recipe, load_config, Dispatcher, RecipeDraft, ScrapeConfig, ScrapeError};

const USAGE: &str = "Usage:
  recipe-scrape <url>
  recipe-scrape --file <path> <domain>
  recipe-scrape --list";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<(), ScrapeError> {
    let config = load_config()?;
    debug!("{config:?}");

    match args {
        [flag] if flag == "--list" => {
            for name in Dispatcher::from_config(&config).registry().names() {
                println!("{name}");
            }
            Ok(())
        }
        [flag, path, domain] if flag == "--file" => {
            let html = tokio::fs::read_to_string(path).await?;
            let draft = extract_file(&html, domain, &config);
            print_draft(draft.as_ref())
        }
        [url] if !url.starts_with("--") => {
            let draft = fetch_recipe(url, &config).await?;
            print_draft(draft.as_ref())
        }
        _ => Err(ScrapeError::Usage(USAGE.to_string())),
    }
}

fn extract_file(html: &str, domain: &str, config: &ScrapeConfig) -> Option<RecipeDraft> {
    let document = Html::parse_document(html);
    Dispatcher::from_config(config).extract(&document, domain)
}

/// `null` when nothing was extracted.
fn print_draft(draft: Option<&RecipeDraft>) -> Result<(), ScrapeError> {
    println!("{}", serde_json::to_string_pretty(&draft)?);
    Ok(())
}
