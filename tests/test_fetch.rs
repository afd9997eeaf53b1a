use recipe_scrape::fetch::{domain_of, RequestFetcher};
use recipe_scrape::{fetch_recipe, ScrapeConfig, ScrapeError};
use std::time::Duration;

const PLUGIN_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<head><title>Clafoutis aux cerises</title></head>
<body>
    <div class="wprm-recipe-container">
        <h2 class="wprm-recipe-name">Clafoutis aux cerises</h2>
        <ul>
            <li class="wprm-recipe-ingredient">500 g de cerises</li>
            <li class="wprm-recipe-ingredient">3 œufs</li>
            <li class="wprm-recipe-ingredient">25 cl de lait</li>
        </ul>
        <ol>
            <li class="wprm-recipe-instruction">Disposer les cerises dans un plat beurré.</li>
            <li class="wprm-recipe-instruction">Verser l'appareil et enfourner 40 minutes.</li>
        </ol>
        <span class="wprm-recipe-cook_time">40 minutes</span>
    </div>
</body>
</html>
"#;

#[tokio::test]
async fn test_fetch_and_extract() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/clafoutis")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(PLUGIN_PAGE)
        .create_async()
        .await;

    let url = format!("{}/clafoutis", server.url());
    let draft = fetch_recipe(&url, &ScrapeConfig::default())
        .await
        .unwrap()
        .expect("plugin page should extract");

    assert_eq!(draft.title, "Clafoutis aux cerises");
    assert_eq!(draft.ingredients.len(), 3);
    assert_eq!(draft.instructions.len(), 2);
    assert_eq!(draft.cook_minutes, Some(40));
}

#[tokio::test]
async fn test_page_without_recipe_is_none() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/a-propos")
        .with_status(200)
        .with_body("<html><body><h1>À propos</h1><p>Bonjour !</p></body></html>")
        .create_async()
        .await;

    let url = format!("{}/a-propos", server.url());
    let result = fetch_recipe(&url, &ScrapeConfig::default()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_http_error_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/disparue")
        .with_status(404)
        .create_async()
        .await;

    let url = format!("{}/disparue", server.url());
    let result = fetch_recipe(&url, &ScrapeConfig::default()).await;
    assert!(matches!(result, Err(ScrapeError::Fetch(_))));
}

#[tokio::test]
async fn test_fetcher_sends_configured_user_agent() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/")
        .match_header("user-agent", "RecipeScrapeTest/0.1")
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;

    let fetcher = RequestFetcher::new(Duration::from_secs(5), "RecipeScrapeTest/0.1").unwrap();
    let body = fetcher.fetch(&server.url()).await.unwrap();

    assert_eq!(body, "ok");
    m.assert_async().await;
}

#[tokio::test]
async fn test_invalid_url_is_rejected_before_fetching() {
    let result = fetch_recipe("pas une url", &ScrapeConfig::default()).await;
    assert!(matches!(result, Err(ScrapeError::InvalidUrl(_))));
    assert!(domain_of("https://www.cuisineaz.com/recettes/tarte.aspx").is_ok());
}
