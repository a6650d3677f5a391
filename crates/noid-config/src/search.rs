use std::env;

use serde::{Deserialize, Serialize};

use crate::env_parse;

pub const DEFAULT_BASE_URL: &str = "https://search.dsn.dk/api/";
pub const DEFAULT_SOURCE: &str = "noid";
pub const DANISH_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzæøå";

/// Where the index lives and how each letter is paged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub base_url: String,
    /// Index name sent as the `source` query parameter
    pub source: String,
    /// Query terms, one request per char
    pub alphabet: Vec<char>,
    pub from: u32,
    /// Page size. One page per letter, so this must exceed the largest letter
    pub size: u32,
    /// Request timeout, `None` keeps the transport default
    pub timeout_seconds: Option<u64>,
}

impl SearchConfig {
    pub fn new() -> Self {
        let base_url = env::var("NOID_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let source = env::var("NOID_SOURCE").unwrap_or_else(|_| DEFAULT_SOURCE.to_string());

        let alphabet = env::var("NOID_ALPHABET")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| parse_alphabet(&v))
            .unwrap_or_else(|| parse_alphabet(DANISH_ALPHABET));

        let from = env_parse("NOID_FROM").unwrap_or(0);
        let size = env_parse("NOID_SIZE").unwrap_or(10000);
        let timeout_seconds = env_parse("NOID_TIMEOUT_SECONDS");

        Self {
            base_url,
            source,
            alphabet,
            from,
            size,
            timeout_seconds,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            alphabet: parse_alphabet(DANISH_ALPHABET),
            from: 0,
            size: 10000,
            timeout_seconds: None,
        }
    }
}

/// Split a letter string into query terms, skipping whitespace and repeats
pub fn parse_alphabet(letters: &str) -> Vec<char> {
    let mut out: Vec<char> = Vec::new();
    for c in letters.chars().filter(|c| !c.is_whitespace()) {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}
