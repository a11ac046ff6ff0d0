// src/extract/mod.rs
//
// The extraction tiers. Each one looks at the whole parsed page and returns
// whatever records it can find; the pipeline (`scrape.rs`) decides which to keep.

use scraper::Html;

use crate::{data::{ProductRecord, Tier}, error::ScrapeError, specs::SiteProfile};

pub mod block;
pub mod heuristic;
pub mod selectors;
pub mod structured;

pub use heuristic::HeuristicExtractor;
pub use selectors::SelectorExtractor;
pub use structured::StructuredDataExtractor;

/// One extraction strategy.
pub trait Extractor {
    fn tier(&self) -> Tier;

    /// Records found on the page, in document order. Empty means "try the next tier".
    /// Never fails: anything unreadable is skipped.
    fn attempt(&self, doc: &Html) -> Vec<ProductRecord>;
}

/// The standard chain for a profile, in priority order.
pub fn chain(profile: &SiteProfile) -> Result<Vec<Box<dyn Extractor>>, ScrapeError> {
    Ok(vec![
        Box::new(StructuredDataExtractor::new()?),
        Box::new(SelectorExtractor::new(&profile.selectors)?),
        Box::new(HeuristicExtractor::new(&profile.heuristic)?),
    ])
}
