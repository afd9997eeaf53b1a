use recipe_scrape::{extract_recipe, Dispatcher};
use scraper::Html;

const MARMITON_MARKUP: &str = r#"
    <h1 class="main-title">Pâte à crêpes (markup)</h1>
    <div class="recipe-infos__quantity"><span class="recipe-infos__quantity__value">6</span></div>
    <div class="card-ingredient"><span class="card-ingredient-title">300 g de farine</span></div>
    <div class="card-ingredient"><span class="card-ingredient-title">3 œufs</span></div>
    <div class="recipe-step-list__container"><p>Mettre la farine dans un saladier.</p></div>
    <div class="recipe-step-list__container"><p>Ajouter les œufs et le lait.</p></div>
"#;

fn page(head: &str, body: &str) -> Html {
    Html::parse_document(&format!(
        "<!DOCTYPE html><html><head><title>Recette</title>{head}</head><body>{body}</body></html>"
    ))
}

#[test]
fn test_marmiton_prefers_embedded_data() {
    let head = r#"
        <script type="application/ld+json">
        {
            "@context": "https://schema.org",
            "@type": "Recipe",
            "name": "Pâte à crêpes",
            "recipeYield": "4 personnes",
            "prepTime": "PT10M",
            "cookTime": "PT20M",
            "recipeIngredient": ["250 g de farine", "4 œufs", "50 cl de lait"],
            "recipeInstructions": [
                {"@type": "HowToStep", "text": "Mettre la farine dans un saladier."},
                {"@type": "HowToStep", "text": "Ajouter les œufs puis le lait petit à petit."}
            ]
        }
        </script>
    "#;
    let document = page(head, MARMITON_MARKUP);
    let draft = extract_recipe(&document, "www.marmiton.org").unwrap();

    assert_eq!(draft.title, "Pâte à crêpes");
    assert_eq!(draft.ingredients.len(), 3);
    assert_eq!(draft.ingredients[2].unit, "cl");
    assert_eq!(draft.instructions.len(), 2);
    assert_eq!(draft.prep_minutes, Some(10));
    assert_eq!(draft.cook_minutes, Some(20));
    assert_eq!(draft.servings, Some(4));
}

#[test]
fn test_marmiton_falls_back_to_markup_on_malformed_json() {
    let head = r#"
        <script type="application/ld+json">
        { "@type": "Recipe", "name": "Pâte à crêpes" "recipeIngredient": [ }
        </script>
    "#;
    let document = page(head, MARMITON_MARKUP);
    let draft = extract_recipe(&document, "www.marmiton.org").unwrap();

    assert_eq!(draft.title, "Pâte à crêpes (markup)");
    assert_eq!(draft.ingredients.len(), 2);
    assert_eq!(draft.ingredients[0].quantity, "300");
    assert_eq!(draft.instructions.len(), 2);
    assert_eq!(draft.servings, Some(6));
}

#[test]
fn test_supertoinette_skips_sidebar_items() {
    let body = r#"
        <h1 class="titre-recette">Blanquette de veau</h1>
        <ul class="ingredients">
            <li>Imprimer</li><li>Partager</li><li>Ajouter à mes favoris</li>
            <li>1 kg de veau</li><li>2 carottes</li><li>1 oignon</li><li>20 cl de crème</li>
        </ul>
        <div class="preparation"><p>Faire revenir la viande.</p><p>Mouiller à hauteur et laisser cuire.</p></div>
    "#;
    let document = page("", body);
    let draft = extract_recipe(&document, "www.supertoinette.com").unwrap();

    let names: Vec<_> = draft.ingredients.iter().map(|line| line.name.as_str()).collect();
    assert_eq!(names, vec!["veau", "carottes", "oignon", "crème"]);
}

#[test]
fn test_supertoinette_keeps_short_lists_whole() {
    let body = r#"
        <h1 class="titre-recette">Vinaigrette</h1>
        <ul class="ingredients"><li>1 c. à s. de moutarde</li><li>1 c. à s. de vinaigre</li><li>3 c. à s. d'huile</li></ul>
        <div class="preparation"><p>Fouetter le tout.</p></div>
    "#;
    let document = page("", body);
    let draft = extract_recipe(&document, "www.supertoinette.com").unwrap();

    assert_eq!(draft.ingredients.len(), 3);
}

#[test]
fn test_ptitchef_splits_numbered_paragraph() {
    let body = r#"
        <h1 class="recipe-title">Mousse au chocolat</h1>
        <div id="recipe-ingredients">
            <div class="ingredient">200 g de chocolat</div>
            <div class="ingredient">6 œufs</div>
        </div>
        <div id="recipe-steps">
            <p class="step-text">1. Faire fondre le chocolat. 2. Séparer les blancs des jaunes. 3. Monter les blancs en neige.</p>
        </div>
    "#;
    let document = page("", body);
    let draft = extract_recipe(&document, "www.ptitchef.com").unwrap();

    assert_eq!(
        draft.instructions,
        vec![
            "Faire fondre le chocolat.",
            "Séparer les blancs des jaunes.",
            "Monter les blancs en neige.",
        ]
    );
}

#[test]
fn test_chefsimon_reads_line_broken_ingredients() {
    let body = r#"
        <h1 class="recette-titre">Pain perdu</h1>
        <div class="ingredients">4 tranches de pain rassis<br>25 cl de lait<br>2 œufs<br>50 g de sucre</div>
        <ol class="recette-etapes"><li>Battre les œufs avec le lait et le sucre.</li><li>Tremper le pain et le dorer à la poêle.</li></ol>
    "#;
    let document = page("", body);
    let draft = extract_recipe(&document, "chefsimon.com").unwrap();

    assert_eq!(draft.title, "Pain perdu");
    assert_eq!(draft.ingredients.len(), 4);
    assert_eq!(draft.ingredients[1].unit, "cl");
    assert_eq!(draft.ingredients[1].name, "lait");
    assert_eq!(draft.instructions.len(), 2);
}

#[test]
fn test_site_requiring_both_lists_rejects_partial_page() {
    let body = r#"
        <h1 class="recipe-title">Soupe à l'oignon</h1>
        <ul class="recipe-ingredients"><li class="recipe-ingredients-item-label">6 oignons</li></ul>
    "#;
    let document = page("", body);

    assert!(extract_recipe(&document, "www.750g.com").is_none());
}

#[test]
fn test_site_accepting_either_list() {
    let body = r#"
        <h1 class="entry-title">Pâte brisée express</h1>
        <div class="recipe-method"><p>Sabler la farine et le beurre.</p><p>Ajouter l'eau et former une boule.</p></div>
    "#;
    let document = page("", body);
    let draft = extract_recipe(&document, "hervecuisine.com").unwrap();

    assert!(draft.ingredients.is_empty());
    assert_eq!(draft.instructions.len(), 2);
}

#[test]
fn test_domains_route_to_site_strategies() {
    let dispatcher = Dispatcher::default();
    let document = page("", "");

    for (domain, expected) in [
        ("www.marmiton.org", "marmiton"),
        ("www.750g.com", "750g"),
        ("cuisine.journaldesfemmes.fr", "journaldesfemmes"),
        ("www.cuisine-libre.org", "cuisinelibre"),
        ("odelices.ouest-france.fr", "odelices"),
        ("www.ricardocuisine.com", "ricardo"),
        ("www.elle.fr", "elle"),
    ] {
        assert_eq!(dispatcher.strategy_for(&document, domain), Some(expected), "{domain}");
    }
}
