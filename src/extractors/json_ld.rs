//! schema.org `Recipe` nodes embedded as JSON-LD.

use html_escape::decode_html_entities;
use log::debug;
use scraper::Html;
use serde::Deserialize;
use serde_json::Value;

use super::dom::selector;
use crate::error::ExtractError;
use crate::model::RecipeDraft;
use crate::normalize::{clean_text, extract_leading_number, parse_duration_minutes, parse_ingredient_line};

#[derive(Debug, Deserialize)]
struct JsonLdRecipe {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "recipeIngredient", alias = "ingredients", default)]
    recipe_ingredient: Option<Ingredients>,
    #[serde(rename = "recipeInstructions", default)]
    recipe_instructions: Option<Instructions>,
    #[serde(rename = "recipeYield", default)]
    recipe_yield: Option<Value>,
    #[serde(rename = "prepTime", default)]
    prep_time: Option<String>,
    #[serde(rename = "cookTime", default)]
    cook_time: Option<String>,
    #[serde(default)]
    keywords: Option<Value>,
    #[serde(rename = "recipeCategory", default)]
    recipe_category: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Ingredients {
    Single(String),
    Multiple(Vec<String>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Instructions {
    Text(String),
    Steps(Vec<InstructionItem>),
}

// Section before Step: a step has only optional fields and would swallow it
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstructionItem {
    Text(String),
    Section(HowToSection),
    Step(HowToStep),
    Nested(Vec<InstructionItem>),
}

#[derive(Debug, Deserialize)]
struct HowToSection {
    #[serde(rename = "itemListElement")]
    item_list_element: Vec<InstructionItem>,
}

#[derive(Debug, Deserialize)]
struct HowToStep {
    text: Option<String>,
    name: Option<String>,
}

/// Decode the first embedded `Recipe` node into a draft.
///
/// A page without JSON-LD is `NotApplicable`; a page whose only payloads fail
/// to decode is `MalformedEmbeddedData`.
pub fn extract_embedded(document: &Html) -> Result<RecipeDraft, ExtractError> {
    let Some(scripts) = selector("script[type='application/ld+json']") else {
        return Err(ExtractError::NotApplicable("no JSON-LD selector".to_string()));
    };

    let mut last_error = None;
    let mut saw_script = false;

    for (index, script) in document.select(&scripts).enumerate() {
        saw_script = true;
        let raw = script.inner_html();
        let value = match serde_json::from_str::<Value>(&sanitize_json(&raw)) {
            Ok(value) => value,
            Err(e) => {
                debug!("JSON-LD script {index} does not parse: {e}");
                last_error = Some(e);
                continue;
            }
        };

        let Some(node) = find_recipe_node(&value) else {
            debug!("JSON-LD script {index} holds no Recipe node");
            continue;
        };

        match JsonLdRecipe::deserialize(node) {
            Ok(recipe) => return Ok(convert(recipe)),
            Err(e) => {
                debug!("JSON-LD Recipe node {index} does not decode: {e}");
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => Err(ExtractError::MalformedEmbeddedData(e)),
        None if saw_script => Err(ExtractError::NotApplicable(
            "JSON-LD present but no Recipe node".to_string(),
        )),
        None => Err(ExtractError::NotApplicable("no JSON-LD script".to_string())),
    }
}

fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(kind)) => kind.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(kinds)) => kinds
            .iter()
            .filter_map(Value::as_str)
            .any(|kind| kind.eq_ignore_ascii_case("recipe")),
        _ => false,
    }
}

fn find_recipe_node(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.iter().find_map(find_recipe_node),
        Value::Object(_) if is_recipe_type(value) => Some(value),
        Value::Object(map) => map.get("@graph").and_then(find_recipe_node),
        _ => None,
    }
}

fn convert(recipe: JsonLdRecipe) -> RecipeDraft {
    let ingredients = match recipe.recipe_ingredient {
        Some(Ingredients::Multiple(lines)) => lines,
        Some(Ingredients::Single(block)) => block.lines().map(str::to_string).collect(),
        None => Vec::new(),
    }
    .iter()
    .map(|line| decode(line))
    .filter(|line| !line.is_empty())
    .map(|line| parse_ingredient_line(&line))
    .collect();

    let mut instructions = Vec::new();
    match recipe.recipe_instructions {
        Some(Instructions::Text(text)) => {
            instructions.extend(text.lines().map(decode).filter(|step| !step.is_empty()))
        }
        Some(Instructions::Steps(items)) => collect_steps(items, &mut instructions),
        None => {}
    }

    RecipeDraft {
        title: recipe.name.as_deref().map(decode).unwrap_or_default(),
        ingredients,
        instructions,
        prep_minutes: recipe.prep_time.as_deref().and_then(parse_duration_minutes),
        cook_minutes: recipe.cook_time.as_deref().and_then(parse_duration_minutes),
        servings: recipe.recipe_yield.as_ref().and_then(yield_count),
        tags: [recipe.keywords, recipe.recipe_category]
            .iter()
            .flatten()
            .flat_map(tag_values)
            .collect(),
    }
}

/// Lowercased tags from a comma-separated string or a list of strings.
fn tag_values(value: &Value) -> Vec<String> {
    let raw: Vec<&str> = match value {
        Value::String(s) => s.split(',').collect(),
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    };
    raw.into_iter()
        .map(|tag| decode(tag).to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn collect_steps(items: Vec<InstructionItem>, out: &mut Vec<String>) {
    for item in items {
        match item {
            InstructionItem::Text(text) => out.push(decode(&text)),
            InstructionItem::Step(step) => {
                // Prefer text over name
                if let Some(text) = step.text.or(step.name) {
                    out.push(decode(&text));
                }
            }
            InstructionItem::Section(section) => collect_steps(section.item_list_element, out),
            InstructionItem::Nested(items) => collect_steps(items, out),
        }
    }
    out.retain(|step| !step.is_empty());
}

fn yield_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => extract_leading_number(s),
        Value::Array(items) => items.iter().find_map(yield_count),
        _ => None,
    }
}

fn decode(text: &str) -> String {
    // Some sites double-encode entities
    clean_text(&decode_html_entities(&decode_html_entities(text)))
}

/// Repair the usual hand-written JSON-LD faults: HTML comment or CDATA
/// wrappers, raw line breaks inside strings and trailing commas.
fn sanitize_json(raw: &str) -> String {
    let trimmed = raw
        .trim()
        .trim_start_matches("<!--")
        .trim_end_matches("-->")
        .trim()
        .trim_start_matches("//<![CDATA[")
        .trim_end_matches("//]]>")
        .trim();

    let mut out = String::with_capacity(trimmed.len());
    let mut in_string = false;
    let mut escaped = false;
    let chars: Vec<char> = trimmed.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            match c {
                _ if escaped => {
                    escaped = false;
                    out.push(c);
                }
                '\\' => {
                    escaped = true;
                    out.push(c);
                }
                '"' => {
                    in_string = false;
                    out.push(c);
                }
                '\n' | '\r' | '\t' => out.push(' '),
                _ => out.push(c),
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
                if !matches!(next, Some(']') | Some('}')) {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }

    out
}
