//! HTML to plain-text excerpts.

use scraper::{ElementRef, Html};

use crate::constants::TRUNCATION_MARKER;

/// Elements whose subtrees never contribute to an excerpt.
const SKIPPED_ELEMENTS: [&str; 8] = [
    "script", "style", "nav", "header", "footer", "aside", "noscript", "template",
];

/// Extracts readable text from `html`, keeping at most `max_words` words.
///
/// Whitespace runs collapse to single spaces. When the text is cut, the
/// truncation marker is appended. Returns an empty string if the page has no
/// readable text.
pub fn extract_excerpt(html: &str, max_words: usize) -> String {
    let text = visible_text(html);
    truncate_words(&text, max_words)
}

/// Concatenated text of every node outside the skipped elements.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut out = String::new();
    push_visible_text(document.root_element(), &mut out);
    out
}

fn push_visible_text(element: ElementRef<'_>, out: &mut String) {
    if SKIPPED_ELEMENTS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            push_visible_text(child_element, out);
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        }
    }
}

/// Joins the first `max_words` whitespace-separated words of `text`.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let mut words = text.split_whitespace();
    let kept: Vec<&str> = words.by_ref().take(max_words).collect();
    let mut excerpt = kept.join(" ");

    if words.next().is_some() {
        excerpt.push_str(TRUNCATION_MARKER);
    }

    excerpt
}
