// src/extract/block.rs
use scraper::Html;

use crate::{core::html, error::ScrapeError};

const BLOCK_WORDS: [&str; 2] = ["captcha", "robot"];

/// True when the title reads like an anti-bot interstitial. No title → not blocked.
pub fn is_blocked(title: Option<&str>) -> bool {
    let Some(title) = title else { return false };
    let lc = title.to_lowercase();
    BLOCK_WORDS.iter().any(|w| lc.contains(w))
}

pub fn check(doc: &Html) -> Result<(), ScrapeError> {
    let title = html::title(doc);
    if is_blocked(title.as_deref()) {
        logw!("Block: title {:?} looks like a challenge page", title.unwrap_or_default());
        return Err(ScrapeError::Blocked);
    }
    Ok(())
}
