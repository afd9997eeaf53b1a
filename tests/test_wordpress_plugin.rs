use recipe_scrape::config::WordPressConfig;
use recipe_scrape::extractors::{wordpress, Extractor, WordPressStrategy};
use recipe_scrape::ExtractError;
use scraper::Html;

#[test]
fn test_single_match_selector_is_passed_over() {
    let html = r#"
        <html><body>
        <div class="tasty-recipes">
            <h2 class="tasty-recipes-title">Quiche lorraine</h2>
            <div class="tasty-recipes-ingredients"><ul><li>1 pâte brisée</li></ul></div>
            <div class="ingredients">
                <ul>
                    <li>200 g de lardons</li>
                    <li>3 œufs</li>
                    <li>20 cl de crème fraîche</li>
                    <li>1 pincée de muscade</li>
                </ul>
            </div>
            <div class="tasty-recipes-instructions">
                <ol>
                    <li>Préchauffer le four à 200 °C.</li>
                    <li>Battre les œufs avec la crème.</li>
                    <li>Verser sur les lardons et enfourner 35 min.</li>
                </ol>
            </div>
            <span class="tasty-recipes-prep-time">15 minutes</span>
            <span class="tasty-recipes-cook-time">35 minutes</span>
            <span class="tasty-recipes-yield">6 parts</span>
        </div>
        </body></html>
    "#;
    let document = Html::parse_document(html);
    let draft = WordPressStrategy::default().extract(&document).unwrap();

    assert_eq!(draft.title, "Quiche lorraine");
    assert_eq!(draft.ingredients.len(), 4);
    assert_eq!(draft.ingredients[0].name, "lardons");
    assert_eq!(draft.ingredients[2].unit, "cl");
    assert_eq!(draft.instructions.len(), 3);
    assert_eq!(draft.prep_minutes, Some(15));
    assert_eq!(draft.cook_minutes, Some(35));
    assert_eq!(draft.servings, Some(6));
}

#[test]
fn test_instructions_fall_back_to_method_heading() {
    let html = r#"
        <html><body>
        <h1 class="entry-title">Velouté de potimarron</h1>
        <div class="wprm-recipe-container">
            <ul class="wprm-recipe-ingredients">
                <li class="wprm-recipe-ingredient">1 potimarron</li>
                <li class="wprm-recipe-ingredient">1 oignon</li>
                <li class="wprm-recipe-ingredient">50 cl de bouillon</li>
            </ul>
            <h3>Préparation</h3>
            <p>Couper le potimarron en cubes.</p>
            <p>Faire revenir l'oignon puis ajouter le bouillon.</p>
            <h3>Notes</h3>
            <p>Se congèle très bien.</p>
        </div>
        </body></html>
    "#;
    let document = Html::parse_document(html);
    let draft = WordPressStrategy::default().extract(&document).unwrap();

    assert_eq!(draft.title, "Velouté de potimarron");
    assert_eq!(draft.ingredients.len(), 3);
    assert_eq!(
        draft.instructions,
        vec![
            "Couper le potimarron en cubes.",
            "Faire revenir l'oignon puis ajouter le bouillon.",
        ]
    );
}

#[test]
fn test_fields_are_read_inside_the_plugin_container_only() {
    let html = r#"
        <html><body>
        <h1>Crêpes</h1>
        <nav><ul><li>Accueil</li><li>Desserts</li><li>Contact</li></ul></nav>
        <div class="mv-create-card">
            <div class="mv-create-ingredients"><ul><li>250 g de farine</li><li>50 cl de lait</li></ul></div>
            <div class="mv-create-instructions"><ol><li>Mélanger.</li><li>Laisser reposer 1h.</li></ol></div>
        </div>
        </body></html>
    "#;
    let document = Html::parse_document(html);
    let draft = WordPressStrategy::default().extract(&document).unwrap();

    let names: Vec<_> = draft.ingredients.iter().map(|line| line.name.as_str()).collect();
    assert_eq!(names, vec!["farine", "lait"]);
}

#[test]
fn test_higher_list_minimum_from_config() {
    let html = r#"
        <html><body>
        <h1>Vinaigrette</h1>
        <div class="wprm-recipe">
            <ul><li>1 c. à s. de moutarde</li><li>3 c. à s. d'huile</li></ul>
        </div>
        </body></html>
    "#;
    let document = Html::parse_document(html);

    assert!(WordPressStrategy::default().extract(&document).is_ok());

    let strict = WordPressStrategy::new(&WordPressConfig { min_list_items: 3 });
    assert!(matches!(
        strict.extract(&document),
        Err(ExtractError::Incomplete { .. })
    ));
}

#[test]
fn test_no_plugin_markup_is_not_applicable() {
    let document = Html::parse_document("<html><body><h1>Tarte</h1><ul><li>a</li><li>b</li></ul></body></html>");

    assert!(wordpress::detect(&document).is_none());
    assert!(matches!(
        WordPressStrategy::default().extract(&document),
        Err(ExtractError::NotApplicable(_))
    ));
}

#[test]
fn test_microdata_counts_as_plugin_markup() {
    let html = r#"
        <html><body>
        <div itemscope itemtype="https://schema.org/Recipe">
            <h2 itemprop="name">Taboulé</h2>
            <meta itemprop="prepTime" content="PT20M">
            <ul>
                <li itemprop="recipeIngredient">200 g de semoule</li>
                <li itemprop="recipeIngredient">1 concombre</li>
            </ul>
            <div itemprop="recipeInstructions">
                <ol><li>Hydrater la semoule.</li><li>Couper le concombre en dés.</li></ol>
            </div>
        </div>
        </body></html>
    "#;
    let document = Html::parse_document(html);
    let draft = WordPressStrategy::default().extract(&document).unwrap();

    assert_eq!(draft.title, "Taboulé");
    assert_eq!(draft.prep_minutes, Some(20));
    assert_eq!(draft.ingredients.len(), 2);
    assert_eq!(draft.instructions.len(), 2);
}

#[test]
fn test_absurd_duration_does_not_lose_the_recipe() {
    let html = r#"
        <html><body>
        <h1>Pain de campagne</h1>
        <div class="wprm-recipe-container">
            <ul>
                <li class="wprm-recipe-ingredient">500 g de farine</li>
                <li class="wprm-recipe-ingredient">30 cl d'eau</li>
            </ul>
            <ol>
                <li class="wprm-recipe-instruction">Pétrir la pâte dix minutes.</li>
                <li class="wprm-recipe-instruction">Cuire 40 minutes.</li>
            </ol>
            <span class="wprm-recipe-prep_time">99999999 h</span>
            <span class="wprm-recipe-cook_time">40 minutes</span>
        </div>
        </body></html>
    "#;
    let document = Html::parse_document(html);
    let draft = recipe_scrape::extract_recipe(&document, "x.example").expect("recipe should survive");

    assert_eq!(draft.prep_minutes, None);
    assert_eq!(draft.cook_minutes, Some(40));
    assert_eq!(draft.ingredients.len(), 2);
}
