//! URL construction for generated queries
//!
//! The only place in the crate that touches string escaping. Builders route
//! every final query string through here before a URL is attached.

use urlencoding::encode;

/// Base URL every x-ray query resolves against.
pub const GOOGLE_SEARCH_BASE: &str = "https://www.google.com/search?q=";

/// Form-style encode a single query component.
///
/// Spaces become `+`, everything else outside the unreserved set is
/// percent-escaped. Reversible with standard form decoding: a literal `+`
/// in the input is escaped as `%2B` before spaces are folded to `+`.
pub fn encode_component(raw: &str) -> String {
    encode(raw).replace("%20", "+")
}

/// Build the Google search URL that reproduces `query` in a browser.
pub fn google_search_url(query: &str) -> String {
    format!("{GOOGLE_SEARCH_BASE}{}", encode_component(query))
}

/// Form-encode key/value pairs into a `k=v&k=v` query string.
pub fn encode_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inverse of `encode_component`, test-side only.
    fn decode_component(encoded: &str) -> String {
        urlencoding::decode(&encoded.replace('+', "%20"))
            .expect("valid percent-encoding")
            .into_owned()
    }

    #[test]
    fn spaces_become_plus() {
        assert_eq!(encode_component("corp to corp"), "corp+to+corp");
    }

    #[test]
    fn quotes_and_operators_are_escaped() {
        let encoded = encode_component("site:dice.com \"java\" (\"c2c\" OR \"contract\")");
        assert!(!encoded.contains('"'));
        assert!(!encoded.contains('('));
        assert!(encoded.contains("%22"));
        assert!(encoded.contains("%28"));
    }

    #[test]
    fn literal_plus_survives_round_trip() {
        let raw = "\"C++ developer\" c2c";
        let encoded = encode_component(raw);
        assert!(encoded.contains("%2B%2B"));
        assert_eq!(decode_component(&encoded), raw);
    }

    #[test]
    fn round_trip_preserves_query() {
        let raw = "site:linkedin.com/jobs \"Data Engineer\" (\"Python\" OR \"Spark\") \"Austin, TX\"";
        assert_eq!(decode_component(&encode_component(raw)), raw);
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(encode_component(""), "");
        assert_eq!(google_search_url(""), GOOGLE_SEARCH_BASE);
    }

    #[test]
    fn search_url_has_fixed_base() {
        let url = google_search_url("\"java developer\" c2c");
        assert!(url.starts_with(GOOGLE_SEARCH_BASE));
        assert_eq!(url, format!("{GOOGLE_SEARCH_BASE}%22java+developer%22+c2c"));
    }

    #[test]
    fn pairs_join_with_ampersand() {
        let qs = encode_pairs(&[("q", "java c2c"), ("location", "Dallas, TX")]);
        assert_eq!(qs, "q=java+c2c&location=Dallas%2C+TX");
    }
}
