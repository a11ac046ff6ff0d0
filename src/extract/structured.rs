// src/extract/structured.rs
//
// Tier 1: schema.org `ItemList` blocks in `<script type="application/ld+json">`.

use scraper::{Html, Selector};
use serde_json::Value;

use super::Extractor;
use crate::{
    core::html,
    data::{ProductRecord, RecordSet, Tier},
    error::ScrapeError,
};

pub struct StructuredDataExtractor {
    scripts: Selector,
}

impl StructuredDataExtractor {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self { scripts: html::selector(r#"script[type="application/ld+json"]"#)? })
    }
}

impl Extractor for StructuredDataExtractor {
    fn tier(&self) -> Tier {
        Tier::StructuredData
    }

    fn attempt(&self, doc: &Html) -> Vec<ProductRecord> {
        let mut out = RecordSet::new();

        for (i, script) in doc.select(&self.scripts).enumerate() {
            let text = html::text_of(script);
            let value: Value = match serde_json::from_str(text.trim()) {
                Ok(v) => v,
                Err(e) => {
                    logd!("JSON-LD: block {i} skipped ({e})");
                    continue;
                }
            };

            for list in item_lists(&value) {
                let Some(entries) = list.get("itemListElement").and_then(Value::as_array) else {
                    continue;
                };
                for entry in entries {
                    if let Some(rec) = record_from_entry(entry) {
                        out.push(rec);
                    }
                }
            }
        }

        out.into_vec()
    }
}

/// ItemList objects at the top of a block: the block itself, an array of
/// blocks, or the members of an `@graph`.
fn item_lists(value: &Value) -> Vec<&Value> {
    let candidates: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => match map.get("@graph").and_then(Value::as_array) {
            Some(graph) => std::iter::once(value).chain(graph.iter()).collect(),
            None => vec![value],
        },
        _ => Vec::new(),
    };
    candidates.into_iter().filter(|v| is_item_list(v)).collect()
}

fn is_item_list(value: &Value) -> bool {
    let typed = match value.get("@type") {
        Some(Value::String(t)) => t == "ItemList",
        Some(Value::Array(ts)) => ts.iter().any(|t| t.as_str() == Some("ItemList")),
        _ => false,
    };
    typed && value.get("itemListElement").is_some_and(Value::is_array)
}

/// `entry.item.{name, offers.price, aggregateRating.ratingValue}`.
/// Name and price are required; rating is optional.
fn record_from_entry(entry: &Value) -> Option<ProductRecord> {
    let product = entry.get("item")?;
    let name = scalar_text(product.get("name"))?;

    let offers = match product.get("offers") {
        Some(Value::Array(list)) => list.first(),
        other => other,
    };
    let price = scalar_text(offers.and_then(|o| o.get("price")))?;
    let rating = scalar_text(product.pointer("/aggregateRating/ratingValue"));

    ProductRecord::new(name, Some(price), rating)
}

/// Non-empty string, or a number in its JSON spelling.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
