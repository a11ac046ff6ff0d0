// src/core/net.rs
// Blocking HTTPS GET with browser-like headers.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};

use crate::config::consts::{ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, USER_AGENT};
use crate::error::ScrapeError;

/// Page source. The pipeline only needs the body text; anything that can
/// produce it (HTTP, a fixture on disk, a closure in tests) can stand in.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<String, ScrapeError>,
{
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        self(url)
    }
}

pub fn browser_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    h.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE));
    h.insert(header::ACCEPT_ENCODING, HeaderValue::from_static(ACCEPT_ENCODING));
    h.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    h.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    h
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .default_headers(browser_headers())
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        logd!("Fetch: {url} → {status}");
        let body = resp.error_for_status()?.text()?;
        logd!("Fetch: {} bytes", body.len());
        Ok(body)
    }
}
