// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

static NUMBER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d,]*\d[\d,]*").expect("static pattern"));

/// First run of digits and thousands separators: `"₹1,299 with discount"` → `"1,299"`.
/// A run of bare commas is not a number and is skipped.
pub fn first_number_run(s: &str) -> Option<String> {
    NUMBER_RUN.find(s).map(|m| s!(m.as_str()))
}

/// Collapse inner whitespace runs to one space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Make a user-typed file stem safe: keep alphanumerics, `-` and `_`,
/// fold whitespace to `_`. Falls back to `fallback` if nothing survives.
pub fn sanitize_file_stem(stem: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut last_us = false;
    for ch in stem.chars() {
        if ch.is_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}
