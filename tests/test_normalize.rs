use recipe_scrape::normalize::{extract_leading_number, parse_duration_minutes, parse_ingredient_line};
use recipe_scrape::IngredientLine;

fn line(quantity: &str, unit: &str, name: &str) -> IngredientLine {
    IngredientLine {
        quantity: quantity.to_string(),
        unit: unit.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test_metric_lines_split_into_three_parts() {
    let cases = [
        ("500 g de farine", line("500", "g", "farine")),
        ("2,5 kg de pommes de terre", line("2.5", "kg", "pommes de terre")),
        ("15 cl de crème liquide", line("15", "cl", "crème liquide")),
        ("1 l de bouillon", line("1", "l", "bouillon")),
        ("30 ml d'huile", line("30", "ml", "huile")),
        ("3 dl de vin blanc", line("3", "dl", "vin blanc")),
    ];
    for (raw, expected) in cases {
        assert_eq!(parse_ingredient_line(raw), expected, "{raw}");
    }
}

#[test]
fn test_words_starting_like_units_are_not_split() {
    let cases = [
        ("1 gousse d'ail", line("1", "", "gousse d'ail")),
        ("2 gousses d'ail", line("2", "", "gousses d'ail")),
        ("1 gros oignon", line("1", "", "gros oignon")),
        ("1 laitue", line("1", "", "laitue")),
        ("2 feuilles de laurier", line("2", "", "feuilles de laurier")),
        ("4 clémentines", line("4", "", "clémentines")),
    ];
    for (raw, expected) in cases {
        assert_eq!(parse_ingredient_line(raw), expected, "{raw}");
    }
}

#[test]
fn test_duration_forms() {
    assert_eq!(parse_duration_minutes("1h30"), Some(90));
    assert_eq!(parse_duration_minutes("1 h 30"), Some(90));
    assert_eq!(parse_duration_minutes("45 minutes"), Some(45));
    assert_eq!(parse_duration_minutes("2h"), Some(120));
    assert_eq!(parse_duration_minutes("2 heures"), Some(120));
    assert_eq!(parse_duration_minutes("PT1H30M"), Some(90));
    assert_eq!(parse_duration_minutes("no time info"), None);
}

#[test]
fn test_leading_number() {
    assert_eq!(extract_leading_number("serves 4 people"), Some(4));
    assert_eq!(extract_leading_number("12 parts"), Some(12));
    assert_eq!(extract_leading_number("no number"), None);
}
