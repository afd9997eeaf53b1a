//! Text normalisation shared by every strategy.
//!
//! Turns raw text fragments pulled from a page into typed values: ingredient
//! lines, durations in minutes and leading counts.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::IngredientLine;

// Unit vocabulary. Alternation is leftmost-first, so longer spellings come
// before their abbreviations ("litres" before "l", "gr" before "g").
const SPOON_UNITS: &str =
    r"cuill[eè]res?\s+à\s+(?:soupe|café)|cuill\.?\s*à\s*[sc]\.?|c\.\s*à\s*[sc]\.?|càs|càc|cs|cc";

/// Mass and volume units, spelled out and abbreviated
pub(crate) const METRIC_UNITS: &str = concat!(
    r"kilogrammes?|kg|grammes?|gr|g|milligrammes?|mg|",
    r"millilitres?|ml|centilitres?|cl|décilitres?|dl|litres?|l"
);

const COUNT_UNITS: &str = r"tasses?|verres?|pincées?|sachets?|bols?";

/// Words whose first letters spell a unit. When the unit split plus the
/// next word starts with one of these, the split is undone.
const PROTECTED_WORDS: &[&str] = &[
    // g / gr
    "gousse", "gros", "graine", "grain", "grappe", "groseille", "gigot", "gingembre",
    "girolle", "glaçon", "galette", "gaufre", "gambas", "gâteau", "gelée", "gélatine",
    "génoise", "gésier", "gnocchi", "goutte", "grand", "gratin", "grenade", "gruyère",
    // l
    "lardon", "laitue", "lait", "laurier", "lamelle", "lanière", "lapin", "langoustine",
    "légume", "lentille", "levure", "lime", "litchi", "livre", "lotte", "louche", "lasagne",
    // cl
    "clou", "clémentine", "clafoutis",
];

static INGREDIENT_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(\d+)(?:[.,](\d+))?\s*(?:({SPOON_UNITS}|{METRIC_UNITS}|{COUNT_UNITS})\.?\s*)?(?:de\s+|d['’]\s*)?(\p{{L}}.*)$"
    ))
    .expect("Invalid ingredient regex")
});

static INGREDIENT_BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:[.,/]\d+)?(?:\s*[-–]\s*\d+(?:[.,/]\d+)?)?)\s+(.+)$")
        .expect("Invalid bare ingredient regex")
});

static DURATION_HOURS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d+)\s*(?:heures?|hours?|hrs?|h)(?:\s*(?:et\s+|and\s+)?(\d+)\s*(?:minutes?|mins?|mn|m)?)?(?:[^\p{L}\d]|$)",
    )
    .expect("Invalid hour duration regex")
});

static DURATION_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:minutes?|mins?|mn|m)(?:[^\p{L}]|$)")
        .expect("Invalid minute duration regex")
});

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid digit regex"));

/// Collapse whitespace runs (non-breaking spaces included) and trim.
pub fn clean_text(raw: &str) -> String {
    raw.split(|c: char| c.is_whitespace() || c == '\u{a0}' || c == '\u{202f}')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a raw ingredient line into quantity, unit and name.
///
/// Tries `<number>[,.decimals] [unit] [de|d'] <name>` first, then a bare
/// `<number> <rest>` form (fractions and ranges land here). Anything else
/// becomes a name with no quantity.
pub fn parse_ingredient_line(raw: &str) -> IngredientLine {
    let cleaned = clean_text(raw);

    if let Some(caps) = INGREDIENT_WITH_UNIT.captures(&cleaned) {
        let quantity = match caps.get(2) {
            Some(decimals) => format!("{}.{}", &caps[1], decimals.as_str()),
            None => caps[1].to_string(),
        };
        let unit = caps.get(3).map(|m| m.as_str().trim()).unwrap_or_default();
        let name = caps[4].trim();
        let number_end = caps.get(2).or_else(|| caps.get(1)).map_or(0, |m| m.end());
        let after_quantity = cleaned[number_end..].trim();
        // "gr" + "andes": the unit is the start of a longer word
        let glued = caps
            .get(3)
            .and_then(|m| cleaned[m.end()..].chars().next())
            .is_some_and(char::is_alphabetic);
        if glued {
            return IngredientLine {
                quantity,
                unit: String::new(),
                name: after_quantity.to_string(),
            };
        }
        return finish_split(quantity, unit, name, after_quantity);
    }

    if let Some(caps) = INGREDIENT_BARE.captures(&cleaned) {
        let quantity = caps[1].replace(',', ".");
        let name = caps[2].trim();
        return finish_split(quantity, "", name, name);
    }

    IngredientLine::named(cleaned)
}

/// Undo a unit split that cut into a protected word, e.g. "g" + "ousse".
fn finish_split(quantity: String, unit: &str, name: &str, after_quantity: &str) -> IngredientLine {
    if !unit.is_empty() {
        let first_word = name.split_whitespace().next().unwrap_or_default();
        let joined = format!("{unit}{first_word}").to_lowercase();
        if PROTECTED_WORDS.iter().any(|word| joined.starts_with(word)) {
            return IngredientLine {
                quantity,
                unit: String::new(),
                name: after_quantity.to_string(),
            };
        }
    }

    IngredientLine {
        quantity,
        unit: unit.to_string(),
        name: name.to_string(),
    }
}

/// Parse "1h30", "2 heures", "45 minutes" or "PT1H30M" into minutes.
///
/// The hour form wins whenever it matches, so the "30" of "1h30" is never
/// read on its own.
pub fn parse_duration_minutes(raw: &str) -> Option<u32> {
    if let Some(caps) = DURATION_HOURS.captures(raw) {
        let hours: u32 = caps[1].parse().ok()?;
        let minutes: u32 = caps
            .get(2)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
        return hours.checked_mul(60)?.checked_add(minutes);
    }

    DURATION_MINUTES
        .captures(raw)
        .and_then(|caps| caps[1].parse().ok())
}

/// First run of digits in the text, e.g. 4 for "serves 4 people".
pub fn extract_leading_number(raw: &str) -> Option<u32> {
    DIGITS.find(raw).and_then(|m| m.as_str().parse().ok())
}
