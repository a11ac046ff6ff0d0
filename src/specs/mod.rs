//! # Site profiles
//!
//! This module hosts the **site-specific structural knowledge** the extractors run on.
//! A profile encodes *where the ground truth lives in a site's markup* as plain data, so
//! adding a site means adding a profile, not touching extractor code.
//!
//! ## What lives here
//! - **Markers**: `tag` + `class` pairs (e.g. `div` / `_30jeq3 _1_WHN1`) that locate product
//!   containers and the name/price/rating fields inside them (selector tier).
//! - **Text patterns** for the heuristic tier: what counts as a price signal (currency
//!   symbols) and what counts as a rating (`4.3`).
//! - **Built-in profiles** (`flipkart`) and JSON loading for user-supplied ones.
//!
//! ## What does **not** live here
//! - Walking the document. That's `extract::*`.
//! - Fetching, export, GUI.
//!
//! ## Conventions & invariants
//! - Marker lists are **ordered**: earlier entries win.
//! - A multi-class marker (`"_1xHGtK _373qXS"`) requires *all* listed classes on the element.
//! - Patterns are `regex` syntax and are compiled once when the pipeline is built; a bad
//!   pattern is a `ScrapeError::Profile`, never a panic.
use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;

pub mod flipkart;

/// One structural marker: an element name plus the class(es) it must carry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub tag: String,
    pub class: String,
}

impl Marker {
    pub fn new(tag: &str, class: &str) -> Self {
        Self { tag: s!(tag), class: s!(class) }
    }

    /// CSS form: `div._30jeq3._1_WHN1`
    pub fn css(&self) -> String {
        let mut out = self.tag.clone();
        for class in self.class.split_whitespace() {
            out.push('.');
            out.push_str(class);
        }
        out
    }
}

/// Markers for the selector tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorSpec {
    /// Tried in order; the first one with any match is used alone.
    pub containers: Vec<Marker>,
    pub name: Vec<Marker>,
    pub price: Vec<Marker>,
    #[serde(default)]
    pub rating: Option<Marker>,
}

/// Patterns for the heuristic tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicSpec {
    pub currency: String,
    pub rating: String,
}

impl Default for HeuristicSpec {
    fn default() -> Self {
        Self {
            currency: s!(r"₹|\$|€"),
            rating: s!(r"\d\.\d"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub name: String,
    pub selectors: SelectorSpec,
    #[serde(default)]
    pub heuristic: HeuristicSpec,
}

impl Default for SiteProfile {
    fn default() -> Self {
        flipkart::profile()
    }
}

impl SiteProfile {
    pub fn from_json_str(text: &str) -> Result<Self, ScrapeError> {
        serde_json::from_str(text).map_err(|e| ScrapeError::Profile(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ScrapeError> {
        let text = fs::read_to_string(path)
            .map_err(|e| ScrapeError::Profile(format!("{}: {e}", path.display())))?;
        let profile = Self::from_json_str(&text)?;
        logf!("Profile: Loaded '{}' from {}", profile.name, path.display());
        Ok(profile)
    }
}
