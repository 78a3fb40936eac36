//! Textual repair of known type inconsistencies in API responses.
//!
//! The search endpoint serializes `offset`, `limit`, `total` and `owner` as
//! bare integers when they hold their default value and as strings otherwise.
//! Torrent lists also sometimes contain bare integers where torrent objects
//! are expected. Both defects are patched on the raw text, before decoding.

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Keys whose first bare default value is quoted.
const SCALAR_DEFAULTS: [(&str, &str); 4] = [
    ("offset", "0"),
    ("limit", "10"),
    ("total", "0"),
    ("owner", "0"),
];

static LIST_HEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r":\[[0-9]+,").expect("valid regex"));
static LIST_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r",[0-9]+\]\}").expect("valid regex"));
static LIST_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":\[[0-9]+\]\}").expect("valid regex"));
static LIST_INNER: Lazy<Regex> = Lazy::new(|| Regex::new(r",[0-9]+,").expect("valid regex"));

/// Repair a raw response body.
///
/// Bodies that are not valid UTF-8 are returned unchanged, so the decoder
/// reports them as they came off the wire.
///
/// Idempotent as long as each bare default appears at most once:
/// `repair(&repair(x)) == repair(x)`.
pub fn repair(body: &[u8]) -> Vec<u8> {
    let Ok(text) = std::str::from_utf8(body) else {
        return body.to_vec();
    };
    let mut text = text.to_owned();

    for (key, value) in SCALAR_DEFAULTS {
        quote_first_scalar(&mut text, key, value);
    }

    let text = replace_stray_integers(text);
    text.into_bytes()
}

/// Quote the first bare `"key":value` in `text`.
///
/// Occurrences of `key` holding a string or another number are skipped, and
/// the search goes on past them. Later bare occurrences are left alone.
fn quote_first_scalar(text: &mut String, key: &str, value: &str) {
    let needle = format!("\"{}\":{}", key, value);
    let found = text.match_indices(&needle).map(|(pos, _)| pos).find(|&pos| {
        // "limit":100 is not "limit":10
        !text[pos + needle.len()..].starts_with(|c: char| c.is_ascii_digit())
    });
    let Some(pos) = found else {
        return;
    };
    let start = pos + needle.len() - value.len();
    text.replace_range(start..start + value.len(), &format!("\"{}\"", value));
}

/// Replace integers sitting in torrent lists with empty objects.
fn replace_stray_integers(text: String) -> String {
    let text = LIST_HEAD.replace_all(&text, ":[{},").into_owned();
    let text = LIST_TAIL.replace_all(&text, ",{}]}").into_owned();
    let mut text = LIST_SINGLE.replace_all(&text, ":[{}]}").into_owned();

    // Adjacent integers share a comma, so one pass leaves every other one.
    while LIST_INNER.is_match(&text) {
        text = LIST_INNER.replace_all(&text, ",{},").into_owned();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repair_str(s: &str) -> String {
        String::from_utf8(repair(s.as_bytes())).unwrap()
    }

    #[test]
    fn test_quotes_default_scalars() {
        let body = r#"{"query":"vikings","offset":0,"limit":10,"total":0,"torrents":[]}"#;
        assert_eq!(
            repair_str(body),
            r#"{"query":"vikings","offset":"0","limit":"10","total":"0","torrents":[]}"#
        );
    }

    #[test]
    fn test_quotes_owner() {
        let body = r#"{"id":"1","owner":0,"username":"x"}"#;
        assert_eq!(repair_str(body), r#"{"id":"1","owner":"0","username":"x"}"#);
    }

    #[test]
    fn test_leaves_string_values_alone() {
        let body = r#"{"offset":"20","limit":"50","total":"1234","torrents":[]}"#;
        assert_eq!(repair_str(body), body);
    }

    #[test]
    fn test_does_not_touch_longer_numbers() {
        let body = r#"{"offset":0,"limit":100,"total":0}"#;
        assert_eq!(repair_str(body), r#"{"offset":"0","limit":100,"total":"0"}"#);
    }

    #[test]
    fn test_only_first_bare_occurrence_is_rewritten() {
        let body = r#"[{"owner":0},{"owner":0}]"#;
        assert_eq!(repair_str(body), r#"[{"owner":"0"},{"owner":0}]"#);

        let body = r#"[{"owner":"12"},{"owner":0},{"owner":0}]"#;
        assert_eq!(
            repair_str(body),
            r#"[{"owner":"12"},{"owner":"0"},{"owner":0}]"#
        );
    }

    #[test]
    fn test_quotes_bare_owner_after_string_owner() {
        let body = r#"{"torrents":[{"id":"1","owner":"97237274"},{"id":"2","owner":0}]}"#;
        assert_eq!(
            repair_str(body),
            r#"{"torrents":[{"id":"1","owner":"97237274"},{"id":"2","owner":"0"}]}"#
        );
    }

    #[test]
    fn test_skips_longer_number_before_bare_default() {
        let body = r#"[{"limit":100},{"limit":10}]"#;
        assert_eq!(repair_str(body), r#"[{"limit":100},{"limit":"10"}]"#);
    }

    #[test]
    fn test_invalid_utf8_is_returned_unchanged() {
        let body: &[u8] = b"{\"offset\":0,\"name\":\"\xff\",\"torrents\":[1]}";
        assert_eq!(repair(body), body);
    }

    #[test]
    fn test_replaces_integers_in_torrent_list() {
        let body = r#"{"total":"4","torrents":[123,{"id":"1"},456,{"id":"2"}]}"#;
        assert_eq!(
            repair_str(body),
            r#"{"total":"4","torrents":[{},{"id":"1"},{},{"id":"2"}]}"#
        );
    }

    #[test]
    fn test_replaces_trailing_and_single_integers() {
        assert_eq!(
            repair_str(r#"{"torrents":[{"id":"1"},789]}"#),
            r#"{"torrents":[{"id":"1"},{}]}"#
        );
        assert_eq!(
            repair_str(r#"{"torrents":[789]}"#),
            r#"{"torrents":[{}]}"#
        );
    }

    #[test]
    fn test_replaces_adjacent_integers() {
        let body = r#"{"torrents":[{"id":"1"},11,22,33,{"id":"2"}]}"#;
        assert_eq!(
            repair_str(body),
            r#"{"torrents":[{"id":"1"},{},{},{},{"id":"2"}]}"#
        );
    }

    #[test]
    fn test_idempotent() {
        let bodies = [
            r#"{"query":"vikings","offset":0,"limit":10,"total":0,"torrents":[1,2,{"owner":0}]}"#,
            r#"{"torrents":[{"owner":"97237274"},{"owner":0}]}"#,
            r#"[{"limit":100},{"limit":10}]"#,
            r#"{"offset":"0","limit":"10","torrents":[{"id":"1"},5]}"#,
            r#"{"uid":"123","token":"123:45:abc"}"#,
            "",
        ];
        for body in bodies {
            let once = repair(body.as_bytes());
            let twice = repair(&once);
            assert_eq!(once, twice, "not idempotent for {}", body);
        }
    }

    #[test]
    fn test_leaves_unrelated_payload_untouched() {
        let body = r#"{"username":"alice","uploaded":"1024","downloaded":"512"}"#;
        assert_eq!(repair_str(body), body);
    }
}
