// tests/common/mod.rs
//
// Shared fakes for the integration tests. No network.
#![allow(dead_code)]

use std::cell::Cell;

use shop_scrape::{data::Tier, progress::Progress, ScrapeError};

pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(path).unwrap()
}

pub fn page(head: &str, body: &str) -> String {
    format!("<!DOCTYPE html><html><head>{head}</head><body>{body}</body></html>")
}

/// Serves one canned body and counts calls.
pub struct FakeSite {
    pub body: Result<String, String>,
    pub calls: Cell<usize>,
}

impl FakeSite {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { body: Ok(body.into()), calls: Cell::new(0) }
    }
    pub fn failing(detail: &str) -> Self {
        Self { body: Err(detail.to_string()), calls: Cell::new(0) }
    }
}

impl shop_scrape::core::net::Fetch for FakeSite {
    fn fetch(&self, _url: &str) -> Result<String, ScrapeError> {
        self.calls.set(self.calls.get() + 1);
        self.body.clone().map_err(ScrapeError::Transport)
    }
}

/// Records which tiers ran.
#[derive(Default)]
pub struct Recorder {
    pub started: Vec<Tier>,
    pub done: Vec<(Tier, usize)>,
    pub finished: bool,
}

impl Progress for Recorder {
    fn tier_started(&mut self, tier: Tier) {
        self.started.push(tier);
    }
    fn tier_done(&mut self, tier: Tier, found: usize) {
        self.done.push((tier, found));
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}
