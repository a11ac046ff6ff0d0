// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod data;
pub mod error;
pub mod extract;
pub mod file;
pub mod gui;
pub mod progress;
pub mod scrape;

pub use data::{ExtractionResult, ProductRecord, Tier};
pub use error::ScrapeError;
pub use scrape::{Pipeline, scrape_url};
