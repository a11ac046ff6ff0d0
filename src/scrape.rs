// src/scrape.rs
//
// The pipeline: URL → fetch → parse → block check → tiers in order.
// The first tier that yields anything wins; the rest never run.

use std::time::Duration;

use scraper::Html;

use crate::{
    config::options::ScrapeOptions,
    core::net::{Fetch, HttpFetcher},
    data::{ExtractionResult, ProductRecord},
    error::ScrapeError,
    extract::{self, block, Extractor},
    progress::{NullProgress, Progress},
    specs::SiteProfile,
};

pub struct Pipeline {
    extractors: Vec<Box<dyn Extractor>>,
}

impl Pipeline {
    /// Standard three-tier chain for `profile`.
    pub fn new(profile: &SiteProfile) -> Result<Self, ScrapeError> {
        Ok(Self { extractors: extract::chain(profile)? })
    }

    /// Custom chain; tried in the given order.
    pub fn with_extractors(extractors: Vec<Box<dyn Extractor>>) -> Self {
        Self { extractors }
    }

    /// Fetch `url` and extract. Never fails: every outcome is rows or a message.
    pub fn run(
        &self,
        url: &str,
        fetcher: &dyn Fetch,
        progress: Option<&mut dyn Progress>,
    ) -> ExtractionResult {
        let mut null = NullProgress;
        let p: &mut dyn Progress = match progress {
            Some(p) => p,
            None => &mut null,
        };

        let res = self.fetch_and_extract(url, fetcher, &mut *p);
        match &res {
            Ok(rows) => logf!("Scrape: OK url={} rows={}", url.trim(), rows.len()),
            Err(e) => loge!("Scrape: Failed url={}: {e}", url.trim()),
        }
        p.finish();

        ExtractionResult::from(res)
    }

    /// Everything after the fetch, on markup already in hand.
    pub fn extract_html(
        &self,
        markup: &str,
        progress: Option<&mut dyn Progress>,
    ) -> Result<Vec<ProductRecord>, ScrapeError> {
        let mut null = NullProgress;
        let p: &mut dyn Progress = match progress {
            Some(p) => p,
            None => &mut null,
        };
        self.extract(markup, p)
    }

    fn fetch_and_extract(
        &self,
        url: &str,
        fetcher: &dyn Fetch,
        p: &mut dyn Progress,
    ) -> Result<Vec<ProductRecord>, ScrapeError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ScrapeError::NoUrl);
        }

        p.begin(self.extractors.len());
        p.log(&format!("Fetching {url}…"));
        let body = fetcher.fetch(url)?;

        self.extract(&body, p)
    }

    fn extract(&self, markup: &str, p: &mut dyn Progress) -> Result<Vec<ProductRecord>, ScrapeError> {
        let doc = Html::parse_document(markup);
        block::check(&doc)?;

        for ex in &self.extractors {
            let tier = ex.tier();
            logd!("Scrape: Trying {tier}");
            p.tier_started(tier);

            let rows = ex.attempt(&doc);
            p.tier_done(tier, rows.len());

            if !rows.is_empty() {
                logf!("Scrape: {tier} found {} record(s)", rows.len());
                return Ok(rows);
            }
        }

        Err(ScrapeError::Exhausted)
    }
}

/// One-shot scrape over HTTP with the options' profile and timeout.
pub fn scrape_url(opts: &ScrapeOptions, progress: Option<&mut dyn Progress>) -> ExtractionResult {
    if opts.url.trim().is_empty() {
        return ExtractionResult::from(Err(ScrapeError::NoUrl));
    }
    let built = Pipeline::new(&opts.profile)
        .and_then(|p| HttpFetcher::new(Duration::from_secs(opts.timeout_secs)).map(|f| (p, f)));

    match built {
        Ok((pipeline, fetcher)) => pipeline.run(&opts.url, &fetcher, progress),
        Err(e) => {
            loge!("Scrape: Setup failed: {e}");
            ExtractionResult::from(Err(e))
        }
    }
}
