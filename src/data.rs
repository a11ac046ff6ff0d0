// src/data.rs
//
// Records produced by the extractors and the result handed to frontends.

use std::collections::HashSet;
use std::fmt;

use crate::config::consts::{HEADERS, MSG_SUCCESS};
use crate::error::ScrapeError;

/// One product row. `name` is never empty; `price` and `rating` fall back to "N/A".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProductRecord {
    pub name: String,
    pub price: String,
    pub rating: String,
}

impl ProductRecord {
    /// `None` when the name is blank. Blank price/rating become the sentinel.
    pub fn new(name: impl Into<String>, price: Option<String>, rating: Option<String>) -> Option<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return None;
        }
        let filled = |v: Option<String>| or_na!(v.filter(|s| !s.trim().is_empty()));
        Some(Self { name, price: filled(price), rating: filled(rating) })
    }

    /// Column order matches `HEADERS`.
    pub fn to_row(&self) -> Vec<String> {
        vec![self.name.clone(), self.price.clone(), self.rating.clone()]
    }

    pub fn headers() -> Vec<String> {
        HEADERS.iter().map(|h| s!(*h)).collect()
    }
}

/// The extraction strategies, in the order they are tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    StructuredData,
    Selectors,
    Heuristic,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::StructuredData, Tier::Selectors, Tier::Heuristic];

    /// 1-based position in the chain.
    pub fn number(self) -> usize {
        match self {
            Tier::StructuredData => 1,
            Tier::Selectors => 2,
            Tier::Heuristic => 3,
        }
    }

    /// Status line shown when this tier starts.
    pub fn notice(self) -> &'static str {
        match self {
            Tier::StructuredData => "Attempting scrape with intelligent script parsing...",
            Tier::Selectors => "Intelligent parsing failed. Switching to specific CSS selectors...",
            Tier::Heuristic => "Specific selectors failed. Switching to generic fallback strategy...",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::StructuredData => "structured data",
            Tier::Selectors => "selectors",
            Tier::Heuristic => "heuristic",
        };
        write!(f, "tier {} ({label})", self.number())
    }
}

/// Accumulates one tier's output.
///
/// `push` keeps everything; `push_unique` drops a record whose name is already present.
#[derive(Debug, Default)]
pub struct RecordSet {
    records: Vec<ProductRecord>,
    names: HashSet<String>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ProductRecord) {
        self.names.insert(record.name.clone());
        self.records.push(record);
    }

    /// Returns false (and drops the record) on a duplicate name.
    pub fn push_unique(&mut self, record: ProductRecord) -> bool {
        if self.names.contains(&record.name) {
            return false;
        }
        self.push(record);
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_vec(self) -> Vec<ProductRecord> {
        self.records
    }
}

/// What a scrape hands back to the caller: rows, or one status message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractionResult {
    Rows(Vec<ProductRecord>),
    Failure(String),
}

impl ExtractionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Rows(_))
    }

    pub fn records(&self) -> &[ProductRecord] {
        match self {
            ExtractionResult::Rows(rows) => rows,
            ExtractionResult::Failure(_) => &[],
        }
    }

    /// Human-readable status line for either outcome.
    pub fn message(&self) -> &str {
        match self {
            ExtractionResult::Rows(_) => MSG_SUCCESS,
            ExtractionResult::Failure(msg) => msg,
        }
    }

    /// Table form: headers + string rows.
    pub fn to_table(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let rows = self.records().iter().map(ProductRecord::to_row).collect();
        (ProductRecord::headers(), rows)
    }
}

impl From<Result<Vec<ProductRecord>, ScrapeError>> for ExtractionResult {
    fn from(res: Result<Vec<ProductRecord>, ScrapeError>) -> Self {
        match res {
            Ok(rows) => ExtractionResult::Rows(rows),
            Err(e) => ExtractionResult::Failure(e.to_string()),
        }
    }
}
