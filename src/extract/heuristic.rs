// src/extract/heuristic.rs
//
// Tier 3: any link holding an image with alt text plus some price-looking text.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::Extractor;
use crate::{
    core::{html, sanitize::first_number_run},
    data::{ProductRecord, RecordSet, Tier},
    error::ScrapeError,
    specs::HeuristicSpec,
};

pub struct HeuristicExtractor {
    links: Selector,
    images: Selector,
    currency: Regex,
    rating: Regex,
}

fn pattern(p: &str) -> Result<Regex, ScrapeError> {
    Regex::new(p).map_err(|e| ScrapeError::Profile(format!("bad pattern `{p}`: {e}")))
}

impl HeuristicExtractor {
    pub fn new(spec: &HeuristicSpec) -> Result<Self, ScrapeError> {
        Ok(Self {
            links: html::selector("a")?,
            images: html::selector("img")?,
            currency: pattern(&spec.currency)?,
            rating: pattern(&spec.rating)?,
        })
    }

    fn record(&self, link: ElementRef<'_>) -> Option<ProductRecord> {
        // Only the first image counts.
        let img = link.select(&self.images).next()?;
        let alt = img.value().attr("alt").map(str::trim).filter(|a| !a.is_empty())?;
        let texts = html::text_nodes(link);
        let price_ix = texts.iter().position(|t| self.currency.is_match(t))?;

        // The price node never doubles as the rating (`$49.99`).
        let rating = texts
            .iter()
            .enumerate()
            .find(|&(i, t)| i != price_ix && self.rating.is_match(t))
            .map(|(_, t)| s!(t.trim()));
        ProductRecord::new(alt, first_number_run(texts[price_ix]), rating)
    }
}

impl Extractor for HeuristicExtractor {
    fn tier(&self) -> Tier {
        Tier::Heuristic
    }

    fn attempt(&self, doc: &Html) -> Vec<ProductRecord> {
        let mut out = RecordSet::new();
        for link in doc.select(&self.links) {
            if let Some(rec) = self.record(link) {
                let name = rec.name.clone();
                if !out.push_unique(rec) {
                    logd!("Heuristic: duplicate '{name}' dropped");
                }
            }
        }
        out.into_vec()
    }
}
