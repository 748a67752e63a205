//! Query string parsing.

use std::collections::HashMap;

/// Decoded query string parameters.
///
/// When a key repeats, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    /// Parse a raw query string (without the leading `?`).
    pub fn parse(raw: &str) -> Self {
        let mut params = HashMap::new();
        let raw = raw.strip_prefix('?').unwrap_or(raw);

        for pair in raw.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((k, v)) => (k, v),
                None => (pair, ""),
            };
            let key = decode(key);
            if key.is_empty() {
                continue;
            }
            params.entry(key).or_insert_with(|| decode(value));
        }

        Self(params)
    }

    /// Get a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|s| s.as_str())
    }

    /// Get a parameter, treating empty and whitespace-only values as absent.
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters were given.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build a query string from ordered pairs, skipping `None` values.
pub fn encode_query(pairs: &[(&str, Option<&str>)]) -> String {
    let encoded: Vec<String> = pairs
        .iter()
        .filter_map(|(k, v)| v.map(|v| format!("{}={}", k, urlencoding::encode(v))))
        .collect();

    if encoded.is_empty() {
        String::new()
    } else {
        format!("?{}", encoded.join("&"))
    }
}

/// Percent-decode a query component; `+` means space. Malformed input is kept as-is.
pub fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let q = QueryParams::parse("category=engine-oils&view=list");
        assert_eq!(q.get("category"), Some("engine-oils"));
        assert_eq!(q.get("view"), Some("list"));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_parse_decodes_values() {
        let q = QueryParams::parse("?q=atf+pro&x=5W%2D30");
        assert_eq!(q.get("q"), Some("atf pro"));
        assert_eq!(q.get("x"), Some("5W-30"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let q = QueryParams::parse("type=quote&type=distributor");
        assert_eq!(q.get("type"), Some("quote"));
    }

    #[test]
    fn test_non_empty() {
        let q = QueryParams::parse("q=%20%20&flag");
        assert_eq!(q.get("q"), Some("  "));
        assert_eq!(q.get_non_empty("q"), None);
        assert_eq!(q.get("flag"), Some(""));
        assert!(QueryParams::parse("").is_empty());
    }

    #[test]
    fn test_encode_query() {
        assert_eq!(encode_query(&[("a", None)]), "");
        assert_eq!(
            encode_query(&[("category", Some("engine-oils")), ("q", Some("atf pro"))]),
            "?category=engine-oils&q=atf%20pro"
        );
    }
}
