// src/core/html.rs
//
// Small helpers over `scraper` shared by the extractors.

use scraper::{ElementRef, Html, Selector};

use crate::{core::sanitize::normalize_ws, error::ScrapeError};

/// Compile a CSS selector, reporting failures as a profile problem.
pub fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Profile(format!("bad selector `{css}`: {e}")))
}

/// Text of the first `<title>`, whitespace-collapsed, if the document has one.
pub fn title(doc: &Html) -> Option<String> {
    let sel = Selector::parse("title").ok()?;
    doc.select(&sel).next().map(|t| normalize_ws(&text_of(t)))
}

/// All descendant text, concatenated (no trimming).
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Descendant text nodes in document order, one entry per node.
pub fn text_nodes<'a>(el: ElementRef<'a>) -> Vec<&'a str> {
    el.text().collect()
}

/// First element under `el` matching any selector, trying them in order.
pub fn first_of<'a>(el: ElementRef<'a>, sels: &[Selector]) -> Option<ElementRef<'a>> {
    sels.iter().find_map(|s| el.select(s).next())
}
