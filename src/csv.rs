// src/csv.rs
use std::io::Write;

use ::csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

use crate::data::ProductRecord;
use crate::error::ScrapeError;

/* ---------------- Parsing ---------------- */

/// Parse delimited text into rows (quotes + CRLF tolerant). No header handling.
pub fn parse_rows(text: &str, sep: u8) -> Result<Vec<Vec<String>>, ScrapeError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(sep)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for rec in rdr.records() {
        rows.push(rec?.iter().map(|c| s!(c)).collect());
    }
    Ok(rows)
}

/// Rows back into records. Expects the header row first and skips it.
pub fn parse_records(text: &str, sep: u8) -> Result<Vec<ProductRecord>, ScrapeError> {
    let rows = parse_rows(text, sep)?;
    Ok(rows
        .into_iter()
        .skip(1)
        .filter_map(|r| match r.as_slice() {
            [name, price, rating] => ProductRecord::new(name.as_str(), Some(price.clone()), Some(rating.clone())),
            _ => None,
        })
        .collect())
}

/* ---------------- Writing ---------------- */

/// Write rows to any writer: standard quoting (only when needed), LF line ends.
pub fn write_rows<W: Write>(w: W, rows: &[Vec<String>], sep: u8) -> Result<(), ScrapeError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(sep)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(w);
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Full export text: optional header row, then one row per record.
pub fn to_export_string(
    records: &[ProductRecord],
    include_headers: bool,
    sep: u8,
) -> Result<String, ScrapeError> {
    let mut rows = Vec::with_capacity(records.len() + 1);
    if include_headers {
        rows.push(ProductRecord::headers());
    }
    rows.extend(records.iter().map(ProductRecord::to_row));

    let mut buf: Vec<u8> = Vec::new();
    write_rows(&mut buf, &rows, sep)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
