//! URL State Codec
//!
//! Converts between a URL query string and a [`SearchState`]. Parsing is
//! permissive and never fails: anything it does not understand falls back
//! to the default for that field. Serialization is canonical: fixed
//! parameter order `q, page, sort`, defaults omitted.

use super::types::{SearchState, SortOption};

pub const PARAM_QUERY: &str = "q";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_SORT: &str = "sort";

/// Builds a [`SearchState`] from a raw query string (with or without the
/// leading `?`). The first occurrence of each parameter wins.
pub fn parse(raw: &str) -> SearchState {
    let raw = raw.strip_prefix('?').unwrap_or(raw);

    let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(raw) {
        Ok(pairs) => pairs,
        Err(e) => {
            tracing::debug!("Unreadable query string {:?}: {}", raw, e);
            return SearchState::default();
        }
    };

    let mut query: Option<String> = None;
    let mut page: Option<u32> = None;
    let mut sort: Option<SortOption> = None;

    for (key, value) in pairs {
        match key.as_str() {
            PARAM_QUERY if query.is_none() => query = Some(value),
            PARAM_PAGE if page.is_none() => page = Some(parse_page(&value)),
            PARAM_SORT if sort.is_none() => sort = Some(value.parse().unwrap_or_default()),
            _ => {}
        }
    }

    SearchState {
        query: query.unwrap_or_default(),
        page: page.unwrap_or(1),
        sort: sort.unwrap_or_default(),
    }
}

/// Reads the leading integer of `value`, the way browsers' `parseInt` does.
///
/// `"3abc"` is 3, `"abc"`, `""`, `"0"` and negatives are 1, and values past
/// `u32::MAX` saturate.
fn parse_page(value: &str) -> u32 {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };

    if negative || digits.is_empty() {
        return 1;
    }

    let page = digits.bytes().fold(0u32, |acc, d| {
        acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
    });
    page.max(1)
}

/// Canonical query string for `state`, without the leading `?`.
///
/// Parameters equal to their default are left out, so the default state
/// serializes to an empty string.
pub fn serialize(state: &SearchState) -> String {
    let mut params: Vec<(&str, String)> = Vec::with_capacity(3);

    if !state.query.is_empty() {
        params.push((PARAM_QUERY, state.query.clone()));
    }
    if state.page > 1 {
        params.push((PARAM_PAGE, state.page.to_string()));
    }
    if state.sort != SortOption::default() {
        params.push((PARAM_SORT, state.sort.as_str().to_string()));
    }

    match serde_urlencoded::to_string(&params) {
        Ok(encoded) => encoded,
        Err(e) => {
            tracing::error!("Failed to encode search state {:?}: {}", state, e);
            String::new()
        }
    }
}

/// Canonical URL for `state` under `path`, e.g. `/custom/search?q=honda&page=2`.
pub fn to_url(state: &SearchState, path: &str) -> String {
    let query = serialize(state);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}
