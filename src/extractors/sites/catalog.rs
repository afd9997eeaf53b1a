use scraper::Html;

use super::{block_lines, split_numbered_steps, SiteRules};
use crate::error::ExtractError;
use crate::extractors::{ingredient_lines, Candidates, Requirement};
use crate::model::RecipeDraft;
use crate::registry::StrategyEntry;

/// Registered site strategies, most specific domains first.
pub(crate) fn entries() -> Vec<StrategyEntry> {
    vec![
        StrategyEntry::new("marmiton", "marmiton.org", marmiton),
        StrategyEntry::new("750g", "750g.com", seven_fifty_grams),
        StrategyEntry::new("cuisineaz", "cuisineaz.com", cuisineaz),
        StrategyEntry::new("journaldesfemmes", "journaldesfemmes.fr", journal_des_femmes),
        StrategyEntry::new("ptitchef", "ptitchef.com", ptitchef),
        StrategyEntry::new("cuisineactuelle", "cuisineactuelle.fr", cuisine_actuelle),
        StrategyEntry::new("chefsimon", "chefsimon.com", chef_simon),
        StrategyEntry::new("hervecuisine", "hervecuisine.com", herve_cuisine),
        StrategyEntry::new("papillesetpupilles", "papillesetpupilles.fr", papilles_et_pupilles),
        StrategyEntry::new("ricardo", "ricardocuisine.com", ricardo),
        StrategyEntry::new("cuisinelibre", "cuisine-libre.org", cuisine_libre),
        StrategyEntry::new("supertoinette", "supertoinette.com", supertoinette),
        StrategyEntry::new("odelices", "odelices.ouest-france.fr", odelices),
        StrategyEntry::new("femmeactuelle", "femmeactuelle.fr", femme_actuelle),
        StrategyEntry::new("meilleurduchef", "meilleurduchef.com", meilleur_du_chef),
        StrategyEntry::new("academiedugout", "academiedugout.fr", academie_du_gout),
        StrategyEntry::new("regal", "regal.fr", regal),
        StrategyEntry::new("marieclaire", "marieclaire.fr", marie_claire),
        StrategyEntry::new("aufeminin", "aufeminin.com", aufeminin),
        StrategyEntry::new("cookomix", "cookomix.com", cookomix),
        StrategyEntry::new("lesfoodies", "lesfoodies.com", les_foodies),
        StrategyEntry::new("atelierdeschefs", "atelierdeschefs.fr", atelier_des_chefs),
        StrategyEntry::new("lacuisinedebernard", "lacuisinedebernard.com", cuisine_de_bernard),
        StrategyEntry::new("mercotte", "mercotte.fr", mercotte),
        StrategyEntry::new("elle", "elle.fr", elle_a_table),
    ]
}

const MARMITON: SiteRules = SiteRules {
    name: "marmiton",
    embedded_first: true,
    title: &["h1.main-title", "h1"],
    ingredients: Candidates::new(&[
        ".card-ingredient-title",
        ".recipe-ingredients__list__item",
        ".ingredient-list li",
    ]),
    instructions: Candidates::new(&[
        ".recipe-step-list__container p",
        ".recipe-preparation__list__item",
        ".step-text",
    ]),
    prep_time: &[".recipe-infos__timmings__preparation .recipe-infos__timmings__value"],
    cook_time: &[".recipe-infos__timmings__cooking .recipe-infos__timmings__value"],
    servings: &[".recipe-infos__quantity__value", ".mrtn-recette_servings"],
    ..SiteRules::DEFAULT
};

fn marmiton(document: &Html) -> Result<RecipeDraft, ExtractError> {
    MARMITON.extract(document)
}

const SEVEN_FIFTY_GRAMS: SiteRules = SiteRules {
    name: "750g",
    title: &["h1.recipe-title", "h1"],
    ingredients: Candidates::new(&[".recipe-ingredients-item-label", ".recipe-ingredients li"]),
    instructions: Candidates::new(&[".recipe-steps-text", ".recipe-steps li"]),
    prep_time: &[".recipe-info-prep .recipe-info-value", "[itemprop='prepTime']"],
    cook_time: &[".recipe-info-cook .recipe-info-value", "[itemprop='cookTime']"],
    servings: &[".ingredient-variator-label", "[itemprop='recipeYield']"],
    ..SiteRules::DEFAULT
};

fn seven_fifty_grams(document: &Html) -> Result<RecipeDraft, ExtractError> {
    SEVEN_FIFTY_GRAMS.extract(document)
}

const CUISINEAZ: SiteRules = SiteRules {
    name: "cuisineaz",
    embedded_first: true,
    title: &["h1.recipe-title", "h1"],
    ingredients: Candidates::new(&["#ingredients li", ".ingredient_list li", ".borderSection.ingredients li"]),
    instructions: Candidates::new(&["#preparation p", ".preparation_step p", ".recipe_preparation li"]),
    prep_time: &["#ctl00_ContentPlaceHolder_LblRecetteTempsPrepa", ".recipe-infos .prep-time"],
    cook_time: &["#ctl00_ContentPlaceHolder_LblRecetteTempsCuisson", ".recipe-infos .cook-time"],
    servings: &["#ctl00_ContentPlaceHolder_LblRecetteNombre", ".recipe-infos .nb-persons"],
    ..SiteRules::DEFAULT
};

fn cuisineaz(document: &Html) -> Result<RecipeDraft, ExtractError> {
    CUISINEAZ.extract(document)
}

const JOURNAL_DES_FEMMES: SiteRules = SiteRules {
    name: "journaldesfemmes",
    title: &["h1.app_recipe_title_page", "h1"],
    ingredients: Candidates::new(&[".app_recipe_list li", ".recipe_ingredients li", "[itemprop='recipeIngredient']"]),
    instructions: Candidates::new(&[".app_recipe_step_content", ".recipe_steps li", "[itemprop='recipeInstructions'] li"]),
    prep_time: &[".app_recipe_time_prep", "[itemprop='prepTime']"],
    cook_time: &[".app_recipe_time_cook", "[itemprop='cookTime']"],
    servings: &[".app_recipe_servings", "[itemprop='recipeYield']"],
    ..SiteRules::DEFAULT
};

fn journal_des_femmes(document: &Html) -> Result<RecipeDraft, ExtractError> {
    JOURNAL_DES_FEMMES.extract(document)
}

const PTITCHEF: SiteRules = SiteRules {
    name: "ptitchef",
    title: &["h1.recipe-title", "h1"],
    ingredients: Candidates::new(&["#recipe-ingredients .ingredient", ".ingredients-list li"]),
    instructions: Candidates::new(&["#recipe-steps .step-text", ".recipe-steps li", ".recipe-steps p"]),
    prep_time: &[".recipe-prep-time", "[itemprop='prepTime']"],
    cook_time: &[".recipe-cook-time", "[itemprop='cookTime']"],
    servings: &[".recipe-servings", "[itemprop='recipeYield']"],
    ..SiteRules::DEFAULT
};

/// Older pages put every numbered step in one paragraph.
fn ptitchef(document: &Html) -> Result<RecipeDraft, ExtractError> {
    let mut draft = PTITCHEF.from_markup(document);
    if let [single] = draft.instructions.as_slice() {
        let steps = split_numbered_steps(single);
        if steps.len() > 1 {
            draft.instructions = steps;
        }
    }
    PTITCHEF.finish(draft)
}

const CUISINE_ACTUELLE: SiteRules = SiteRules {
    name: "cuisineactuelle",
    embedded_first: true,
    title: &["h1.recipe-title", "h1"],
    ingredients: Candidates::new(&[".recipe-ingredients__item", ".ingredients-list li"]),
    instructions: Candidates::new(&[".recipe-steps__item p", ".recipe-steps li"]),
    prep_time: &[".recipe-infos__prep", "[itemprop='prepTime']"],
    cook_time: &[".recipe-infos__cook", "[itemprop='cookTime']"],
    servings: &[".recipe-infos__servings", "[itemprop='recipeYield']"],
    ..SiteRules::DEFAULT
};

fn cuisine_actuelle(document: &Html) -> Result<RecipeDraft, ExtractError> {
    CUISINE_ACTUELLE.extract(document)
}

const CHEF_SIMON: SiteRules = SiteRules {
    name: "chefsimon",
    title: &["h1.recette-titre", "h1"],
    ingredients: Candidates::new(&[".ingredients li", ".recette-ingredients li"]),
    instructions: Candidates::new(&[".recette-etapes li", ".preparation p"]),
    servings: &[".recette-portions", ".portions"],
    ..SiteRules::DEFAULT
};

/// Ingredient lists are often one `<br>`-separated block instead of a list.
fn chef_simon(document: &Html) -> Result<RecipeDraft, ExtractError> {
    let mut draft = CHEF_SIMON.from_markup(document);
    if draft.ingredients.is_empty() {
        draft.ingredients = ingredient_lines(&block_lines(document, ".ingredients"));
    }
    CHEF_SIMON.finish(draft)
}

const HERVE_CUISINE: SiteRules = SiteRules {
    name: "hervecuisine",
    title: &["h1.entry-title", "h1"],
    ingredients: Candidates::new(&[".recipe-ingredients li", ".ingredients li"]),
    instructions: Candidates::new(&[".recipe-method p", ".recipe-method li", ".instructions li"]),
    prep_time: &[".recipe-prep-time"],
    cook_time: &[".recipe-cook-time"],
    servings: &[".recipe-yield"],
    requirement: Requirement::Either,
    ..SiteRules::DEFAULT
};

fn herve_cuisine(document: &Html) -> Result<RecipeDraft, ExtractError> {
    HERVE_CUISINE.extract(document)
}

const PAPILLES_ET_PUPILLES: SiteRules = SiteRules {
    name: "papillesetpupilles",
    title: &["h1.entry-title", "h1"],
    ingredients: Candidates::new(&[".ingredients li", ".entry-content ul li"]).at_least(2),
    instructions: Candidates::new(&[".preparation p", ".preparation li", ".entry-content ol li"]),
    requirement: Requirement::Either,
    ..SiteRules::DEFAULT
};

fn papilles_et_pupilles(document: &Html) -> Result<RecipeDraft, ExtractError> {
    PAPILLES_ET_PUPILLES.extract(document)
}

const RICARDO: SiteRules = SiteRules {
    name: "ricardo",
    embedded_first: true,
    title: &["h1[itemprop='name']", "h1"],
    ingredients: Candidates::new(&["[itemprop='recipeIngredient']", ".ingredients-list li"]),
    instructions: Candidates::new(&[".preparation-steps li", "[itemprop='recipeInstructions'] li"]),
    prep_time: &["[itemprop='prepTime']", ".prep-time"],
    cook_time: &["[itemprop='cookTime']", ".cook-time"],
    servings: &["[itemprop='recipeYield']", ".yield"],
    ..SiteRules::DEFAULT
};

fn ricardo(document: &Html) -> Result<RecipeDraft, ExtractError> {
    RICARDO.extract(document)
}

const CUISINE_LIBRE: SiteRules = SiteRules {
    name: "cuisinelibre",
    title: &["h1.titre", "h1"],
    ingredients: Candidates::new(&["#ingredients li", ".ingredients li"]),
    instructions: Candidates::new(&["#preparation li", "#preparation p"]),
    prep_time: &[".duree_preparation", "[itemprop='prepTime']"],
    cook_time: &[".duree_cuisson", "[itemprop='cookTime']"],
    servings: &[".yield", "[itemprop='recipeYield']"],
    ..SiteRules::DEFAULT
};

fn cuisine_libre(document: &Html) -> Result<RecipeDraft, ExtractError> {
    CUISINE_LIBRE.extract(document)
}

// The broad list selector also catches the three sidebar shortcuts that
// precede the ingredients.
const SUPERTOINETTE: SiteRules = SiteRules {
    name: "supertoinette",
    title: &["h1.titre-recette", "h1"],
    ingredients: Candidates::new(&[".ingredients li"]).at_least(2).skip(3),
    instructions: Candidates::new(&[".preparation li", ".preparation p"]),
    prep_time: &[".temps-preparation"],
    cook_time: &[".temps-cuisson"],
    servings: &[".nb-personnes"],
    ..SiteRules::DEFAULT
};

fn supertoinette(document: &Html) -> Result<RecipeDraft, ExtractError> {
    SUPERTOINETTE.extract(document)
}

const ODELICES: SiteRules = SiteRules {
    name: "odelices",
    title: &["h1.recette-titre", "h1"],
    ingredients: Candidates::new(&[".recette-ingredients li", "[itemprop='recipeIngredient']"]),
    instructions: Candidates::new(&[".recette-preparation li", ".recette-preparation p"]),
    prep_time: &["[itemprop='prepTime']"],
    cook_time: &["[itemprop='cookTime']"],
    servings: &["[itemprop='recipeYield']"],
    ..SiteRules::DEFAULT
};

fn odelices(document: &Html) -> Result<RecipeDraft, ExtractError> {
    ODELICES.extract(document)
}

const FEMME_ACTUELLE: SiteRules = SiteRules {
    name: "femmeactuelle",
    embedded_first: true,
    title: &["h1.recipe-title", "h1"],
    ingredients: Candidates::new(&[".recipe-ingredients__item", ".ingredients li"]),
    instructions: Candidates::new(&[".recipe-steps__item", ".recipe-steps li"]),
    prep_time: &[".recipe-meta__prep"],
    cook_time: &[".recipe-meta__cook"],
    servings: &[".recipe-meta__servings"],
    ..SiteRules::DEFAULT
};

fn femme_actuelle(document: &Html) -> Result<RecipeDraft, ExtractError> {
    FEMME_ACTUELLE.extract(document)
}

const MEILLEUR_DU_CHEF: SiteRules = SiteRules {
    name: "meilleurduchef",
    title: &["h1.recette-titre", "h1"],
    ingredients: Candidates::new(&[".recette-ingredients tr", ".ingredients li"]),
    instructions: Candidates::new(&[".recette-etape .texte", ".etapes li"]),
    prep_time: &[".temps-preparation"],
    cook_time: &[".temps-cuisson"],
    servings: &[".nombre-personnes"],
    ..SiteRules::DEFAULT
};

fn meilleur_du_chef(document: &Html) -> Result<RecipeDraft, ExtractError> {
    MEILLEUR_DU_CHEF.extract(document)
}

const ACADEMIE_DU_GOUT: SiteRules = SiteRules {
    name: "academiedugout",
    title: &["h1.recipe-title", "h1"],
    ingredients: Candidates::new(&[".recipe-ingredients li", ".ingredients li"]),
    instructions: Candidates::new(&[".recipe-steps li", ".recipe-steps p"]),
    prep_time: &[".recipe-time-prep"],
    cook_time: &[".recipe-time-cook"],
    servings: &[".recipe-servings"],
    ..SiteRules::DEFAULT
};

fn academie_du_gout(document: &Html) -> Result<RecipeDraft, ExtractError> {
    ACADEMIE_DU_GOUT.extract(document)
}

const REGAL: SiteRules = SiteRules {
    name: "regal",
    embedded_first: true,
    title: &["h1.recipe-title", "h1"],
    ingredients: Candidates::new(&[".recipe-ingredients li", ".ingredient"]),
    instructions: Candidates::new(&[".recipe-steps li", ".step"]),
    prep_time: &[".recipe-prep"],
    cook_time: &[".recipe-cook"],
    servings: &[".recipe-servings"],
    ..SiteRules::DEFAULT
};

fn regal(document: &Html) -> Result<RecipeDraft, ExtractError> {
    REGAL.extract(document)
}

const MARIE_CLAIRE: SiteRules = SiteRules {
    name: "marieclaire",
    embedded_first: true,
    title: &["h1.article-title", "h1"],
    ingredients: Candidates::new(&[".recipe-ingredients li", ".ingredients li"]),
    instructions: Candidates::new(&[".recipe-instructions li", ".recipe-instructions p"]),
    ..SiteRules::DEFAULT
};

fn marie_claire(document: &Html) -> Result<RecipeDraft, ExtractError> {
    MARIE_CLAIRE.extract(document)
}

const AUFEMININ: SiteRules = SiteRules {
    name: "aufeminin",
    title: &["h1.af-title", "h1"],
    ingredients: Candidates::new(&[".af-recipe-ingredients li", ".ingredients li"]),
    instructions: Candidates::new(&[".af-recipe-steps li", ".af-recipe-steps p"]),
    prep_time: &[".af-recipe-prep"],
    cook_time: &[".af-recipe-cook"],
    servings: &[".af-recipe-servings"],
    requirement: Requirement::Either,
    ..SiteRules::DEFAULT
};

fn aufeminin(document: &Html) -> Result<RecipeDraft, ExtractError> {
    AUFEMININ.extract(document)
}

const COOKOMIX: SiteRules = SiteRules {
    name: "cookomix",
    title: &["h1.entry-title", "h1"],
    ingredients: Candidates::new(&[".recipe-ingredients li", ".ingredients li"]).at_least(2),
    instructions: Candidates::new(&[".recipe-instructions li", ".instructions li"]).at_least(2),
    prep_time: &[".recipe-prep-time"],
    cook_time: &[".recipe-cook-time"],
    servings: &[".recipe-servings"],
    ..SiteRules::DEFAULT
};

fn cookomix(document: &Html) -> Result<RecipeDraft, ExtractError> {
    COOKOMIX.extract(document)
}

const LES_FOODIES: SiteRules = SiteRules {
    name: "lesfoodies",
    title: &["h1.recipe-name", "h1"],
    ingredients: Candidates::new(&[".recipe-ingredients .ingredient", ".ingredients li"]),
    instructions: Candidates::new(&[".recipe-steps .step-description", ".steps li"]),
    servings: &[".recipe-servings"],
    ..SiteRules::DEFAULT
};

fn les_foodies(document: &Html) -> Result<RecipeDraft, ExtractError> {
    LES_FOODIES.extract(document)
}

const ATELIER_DES_CHEFS: SiteRules = SiteRules {
    name: "atelierdeschefs",
    title: &["h1.recipe-title", "h1"],
    ingredients: Candidates::new(&[".recipe-ingredients__item", ".ingredients li"]),
    instructions: Candidates::new(&[".recipe-step__text", ".steps li"]),
    prep_time: &[".recipe-infos__prep"],
    cook_time: &[".recipe-infos__cook"],
    servings: &[".recipe-infos__servings"],
    ..SiteRules::DEFAULT
};

fn atelier_des_chefs(document: &Html) -> Result<RecipeDraft, ExtractError> {
    ATELIER_DES_CHEFS.extract(document)
}

const CUISINE_DE_BERNARD: SiteRules = SiteRules {
    name: "lacuisinedebernard",
    title: &["h1.entry-title", "h2.post-title", "h1"],
    ingredients: Candidates::new(&[".ingredients li", ".entry-content ul li"]),
    instructions: Candidates::new(&[".preparation p", ".entry-content ol li"]),
    requirement: Requirement::Either,
    ..SiteRules::DEFAULT
};

fn cuisine_de_bernard(document: &Html) -> Result<RecipeDraft, ExtractError> {
    CUISINE_DE_BERNARD.extract(document)
}

const MERCOTTE: SiteRules = SiteRules {
    name: "mercotte",
    title: &["h1.entry-title", "h1"],
    ingredients: Candidates::new(&[".ingredients li", ".entry-content ul li"]).at_least(2),
    instructions: Candidates::new(&[".preparation p", ".entry-content ol li"]),
    requirement: Requirement::Either,
    ..SiteRules::DEFAULT
};

/// Pastry posts number their steps inside one paragraph.
fn mercotte(document: &Html) -> Result<RecipeDraft, ExtractError> {
    let mut draft = MERCOTTE.from_markup(document);
    draft.instructions = draft
        .instructions
        .iter()
        .flat_map(|paragraph| split_numbered_steps(paragraph))
        .collect();
    MERCOTTE.finish(draft)
}

const ELLE_A_TABLE: SiteRules = SiteRules {
    name: "elle",
    embedded_first: true,
    title: &["h1.recipe-title", "h1"],
    ingredients: Candidates::new(&[".recipe-ingredients li", ".ingredients li"]),
    instructions: Candidates::new(&[".recipe-preparation li", ".recipe-preparation p"]),
    prep_time: &[".recipe-infos__prep"],
    cook_time: &[".recipe-infos__cook"],
    servings: &[".recipe-infos__servings"],
    ..SiteRules::DEFAULT
};

fn elle_a_table(document: &Html) -> Result<RecipeDraft, ExtractError> {
    ELLE_A_TABLE.extract(document)
}
