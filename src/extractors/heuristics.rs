//! Lexical heuristics for recipes written as free prose.
//!
//! Each pattern family is its own function so it can be exercised on plain
//! strings, independent of any document.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::IngredientLine;
use crate::normalize::{
    clean_text, extract_leading_number, parse_duration_minutes, parse_ingredient_line, METRIC_UNITS,
};

/// Longest ingredient name kept from a free-text match, in words
const MAX_NAME_WORDS: usize = 6;

static METRIC_INGREDIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(\d+(?:[.,]\d+)?)\s*({METRIC_UNITS})\.?\s+(?:de\s+|d['’]\s*)([^,;.\n(]+)"
    ))
    .expect("Invalid metric ingredient regex")
});

static SPOON_INGREDIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d+(?:[.,]\d+)?)\s*(cuill[eè]res?\s+à\s+(?:soupe|café)|c\.\s*à\s*[sc]\.?|càs|càc|cs|cc|tasses?|verres?|pincées?|sachets?)\s+(?:de\s+|d['’]\s*)([^,;.\n(]+)",
    )
    .expect("Invalid spoon ingredient regex")
});

static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+|\n+").expect("Invalid sentence regex"));

static LEADING_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-–•*]?\s*\d+(?:[.,/]\d+)?").expect("Invalid leading quantity regex")
});

static SERVINGS_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)serves?\s+(\d+)|pour\s+(\d+)\s*(?:personnes?|pers\.?|parts?|portions?)|(\d+)\s*(?:personnes|parts|portions|people)",
    )
    .expect("Invalid servings regex")
});

static PREP_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:temps\s+de\s+)?pr[ée]paration[ \t]*:?[ \t]*([^\n]{1,30})")
        .expect("Invalid preparation time regex")
});

static COOK_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:temps\s+de\s+)?cuisson[ \t]*:?[ \t]*([^\n]{1,30})")
        .expect("Invalid cooking time regex")
});

/// Stems of verbs that open or carry a cooking step
const ACTION_STEMS: &[&str] = &[
    "ajout", "arros", "assaisonn", "badigeonn", "battez", "battre", "beurr", "chauff", "coup",
    "couvr", "cuis", "cuir", "décor", "démoul", "dispos", "dor", "égoutt", "émiett", "éminc",
    "enfourn", "épluch", "étal", "faites", "faire", "fouett", "fond", "garn", "hach", "incorpor",
    "laiss", "lav", "mélang", "mett", "mix", "nappe", "pétri", "plong", "poêl", "poivr",
    "préchauff", "prechauff", "râp", "rajout", "refroid", "remu", "réserv", "rinc", "sal",
    "saupoudr", "serv", "tranch", "vers",
];

/// "<n> <metric unit> de <name>" matches, with their offset in `text`.
pub fn metric_ingredients(text: &str) -> Vec<(usize, IngredientLine)> {
    pattern_ingredients(&METRIC_INGREDIENT, text)
}

/// "<n> <spoon/cup word> de <name>" matches, with their offset in `text`.
pub fn spoon_ingredients(text: &str) -> Vec<(usize, IngredientLine)> {
    pattern_ingredients(&SPOON_INGREDIENT, text)
}

fn pattern_ingredients(pattern: &Regex, text: &str) -> Vec<(usize, IngredientLine)> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let start = caps.get(0)?.start();
            let name = clean_text(&caps[3])
                .split(' ')
                .take(MAX_NAME_WORDS)
                .collect::<Vec<_>>()
                .join(" ");
            if name.is_empty() {
                return None;
            }
            Some((
                start,
                IngredientLine {
                    quantity: caps[1].replace(',', "."),
                    unit: clean_text(&caps[2]),
                    name,
                },
            ))
        })
        .collect()
}

/// Both ingredient pattern families in text order, first occurrence of each
/// name kept.
pub fn mine_ingredients(text: &str) -> Vec<IngredientLine> {
    let mut found = metric_ingredients(text);
    found.extend(spoon_ingredients(text));
    found.sort_by_key(|(start, _)| *start);

    let mut seen = Vec::new();
    let mut lines = Vec::new();
    for (_, line) in found {
        let key = line.name.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        lines.push(line);
    }
    lines
}

/// Split on `.`/`!`/`?` followed by whitespace, and on line breaks.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(clean_text)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

pub fn has_action_verb(sentence: &str) -> bool {
    sentence
        .to_lowercase()
        .split(|c: char| !c.is_alphabetic())
        .any(|word| ACTION_STEMS.iter().any(|stem| word.starts_with(stem)))
}

/// A sentence that opens with a quantity and either carries a unit or is
/// too short to be a step reads as an ingredient line.
pub fn looks_like_ingredient(sentence: &str) -> bool {
    if !LEADING_QUANTITY.is_match(sentence) {
        return false;
    }
    let stripped = sentence.trim_start_matches(|c: char| c.is_whitespace() || "-–•*".contains(c));
    !parse_ingredient_line(stripped).unit.is_empty() || sentence.split_whitespace().count() <= 8
}

/// Sentences long enough to be steps, carrying a cooking verb and not
/// reading as an ingredient line.
pub fn mine_instructions(text: &str, min_chars: usize) -> Vec<String> {
    split_sentences(text)
        .into_iter()
        .filter(|sentence| sentence.chars().count() >= min_chars)
        .filter(|sentence| has_action_verb(sentence))
        .filter(|sentence| !looks_like_ingredient(sentence))
        .collect()
}

pub fn servings_in(text: &str) -> Option<u32> {
    let caps = SERVINGS_PHRASE.captures(text)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .and_then(|m| extract_leading_number(m.as_str()))
}

pub fn prep_minutes_in(text: &str) -> Option<u32> {
    PREP_PHRASE
        .captures_iter(text)
        .find_map(|caps| parse_duration_minutes(&caps[1]))
}

pub fn cook_minutes_in(text: &str) -> Option<u32> {
    COOK_PHRASE
        .captures_iter(text)
        .find_map(|caps| parse_duration_minutes(&caps[1]))
}
