//! Fuzzy name keys for artists, albums, genres and titles.
//!
//! Two display strings name the same entity when their normalized keys are
//! equal, so "The Beatles" and "Beatles, The" both become `beatles`.
//!
//! The [`Normalizer`] memoizes every key it derives. The cache is unbounded:
//! its input domain is the finite set of field values in the catalog. A
//! normalizer lives as long as the [`Catalog`](crate::catalog::Catalog) that
//! owns it and can be [reset](Normalizer::reset) explicitly.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Mutex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref LEADING_ARTICLE: Regex = Regex::new(r"^the\s+").unwrap();
    static ref TRAILING_ARTICLE: Regex = Regex::new(r",\s+the$").unwrap();
    static ref DISALLOWED: Regex = Regex::new(r"[^a-z0-9 -]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Derives normalized keys and remembers them.
#[derive(Debug, Default)]
pub struct Normalizer {
    cache: Mutex<HashMap<String, String>>,
}

impl Normalizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the normalized key for `input`.
    ///
    /// Total and idempotent: `normalize(normalize(x)) == normalize(x)`.
    ///
    /// ```
    /// use segue::normalize::Normalizer;
    ///
    /// let normalizer = Normalizer::new();
    /// assert_eq!(normalizer.normalize("The Beatles"), "beatles");
    /// assert_eq!(normalizer.normalize("Beatles, The"), "beatles");
    /// ```
    pub fn normalize(&self, input: &str) -> String {
        if let Ok(cache) = self.cache.lock() {
            if let Some(key) = cache.get(input) {
                return key.clone();
            }
        }

        let key = simplify(input);

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(input.to_string(), key.clone());
        }
        key
    }

    /// Joins the keys of several fields with `-`, e.g. artist and title.
    pub fn create_key(&self, parts: &[&str]) -> String {
        parts
            .iter()
            .map(|part| self.normalize(part))
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Forgets every memoized key.
    pub fn reset(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
    }

    /// Number of memoized inputs.
    pub fn cached(&self) -> usize {
        self.cache.lock().map(|cache| cache.len()).unwrap_or(0)
    }
}

/// The uncached pipeline.
///
/// A single pass can expose a new leading article (`"The The"` or a
/// decomposed accent next to `the`), so passes repeat until nothing changes.
/// Every pass after the first works on ASCII only and never grows the string.
fn simplify(input: &str) -> String {
    let mut current = simplify_once(input);
    loop {
        let next = simplify_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn simplify_once(input: &str) -> String {
    let decomposed: String = input.nfkd().collect();
    let lower = decomposed.to_lowercase();
    let result = LEADING_ARTICLE.replace(&lower, "");
    let result = TRAILING_ARTICLE.replace(&result, "");
    let result = DISALLOWED.replace_all(&result, "");
    let result = WHITESPACE.replace_all(&result, " ");
    result.trim().to_string()
}
