//! Read-only helpers over `scraper` documents.

use log::debug;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

use crate::normalize::clean_text;

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template"];

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

pub fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            debug!("Skipping invalid selector {css:?}: {e:?}");
            None
        }
    }
}

/// Text content with whitespace collapsed.
pub fn element_text(element: ElementRef) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

/// Text content, or the machine-readable attribute when the element carries
/// no text (`<meta itemprop="prepTime" content="PT15M">`, `<time datetime>`).
pub fn field_text(element: ElementRef) -> String {
    let text = element_text(element);
    if !text.is_empty() {
        return text;
    }
    ["content", "datetime", "data-value"]
        .iter()
        .find_map(|attr| element.value().attr(attr))
        .map(clean_text)
        .unwrap_or_default()
}

/// Non-empty texts of every element matching `css` under `root`.
pub fn select_texts(root: ElementRef, css: &str) -> Vec<String> {
    let Some(selector) = selector(css) else {
        return Vec::new();
    };
    root.select(&selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// First element under `root` matching `css`.
pub fn select_first<'a>(root: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = selector(css)?;
    root.select(&selector).next()
}

/// Contents of the `<title>` element.
pub fn document_title(document: &Html) -> Option<String> {
    select_first(document.root_element(), "title")
        .map(element_text)
        .filter(|title| !title.is_empty())
}

pub fn is_heading(element: ElementRef) -> bool {
    HEADING_TAGS.contains(&element.value().name())
}

/// Text with a line break at every block boundary, so list items and
/// `<br>`-separated lines stay on their own lines.
pub fn flatten_text(root: ElementRef) -> String {
    let mut out = String::new();
    flatten_into(root, &mut out);

    out.lines()
        .map(clean_text)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn flatten_into(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if SKIPPED_TAGS.contains(&name) {
                    continue;
                }
                let block = BLOCK_TAGS.contains(&name);
                if block {
                    out.push('\n');
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    flatten_into(child_element, out);
                }
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

/// Paragraphs that follow a heading whose text contains one of `keywords`,
/// up to the next heading. List items in between are collected too.
pub fn section_after_heading(root: ElementRef, keywords: &[&str]) -> Vec<String> {
    let Some(headings) = selector("h1, h2, h3, h4, h5, h6") else {
        return Vec::new();
    };

    for heading in root.select(&headings) {
        let label = element_text(heading).to_lowercase();
        if !keywords.iter().any(|keyword| label.contains(keyword)) {
            continue;
        }

        let mut steps = Vec::new();
        for sibling in heading.next_siblings().filter_map(ElementRef::wrap) {
            if is_heading(sibling) {
                break;
            }
            match sibling.value().name() {
                "ul" | "ol" => steps.extend(select_texts(sibling, "li")),
                "p" | "div" | "li" => {
                    let text = element_text(sibling);
                    if !text.is_empty() {
                        steps.push(text);
                    }
                }
                _ => {}
            }
        }

        if !steps.is_empty() {
            debug!("Collected {} steps after heading {:?}", steps.len(), label);
            return steps;
        }
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_text_breaks_on_blocks() {
        let html = Html::parse_fragment(
            "<div><p>200 g de farine<br>3 œufs</p><script>var x = 1;</script><ul><li>un</li><li>deux</li></ul></div>",
        );
        let flat = flatten_text(html.root_element());
        assert_eq!(flat, "200 g de farine\n3 œufs\nun\ndeux");
    }

    #[test]
    fn test_field_text_falls_back_to_content() {
        let html = Html::parse_document(r#"<meta itemprop="prepTime" content="PT15M">"#);
        let meta = select_first(html.root_element(), "meta").unwrap();
        assert_eq!(field_text(meta), "PT15M");
    }

    #[test]
    fn test_section_after_heading_stops_at_next_heading() {
        let html = Html::parse_document(
            "<body><h2>Préparation</h2><p>Mélangez.</p><p>Enfournez.</p><h2>Notes</h2><p>Rien.</p></body>",
        );
        let steps = section_after_heading(html.root_element(), &["préparation"]);
        assert_eq!(steps, vec!["Mélangez.", "Enfournez."]);
    }
}
