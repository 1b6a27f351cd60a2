//! Decoding of labeled metric names.
//!
//! Parsing is deliberately tolerant about shape: any string that is not
//! exactly `base[...]` (one `[` past the first character, one `]` at the
//! very end) is an ordinary metric name and decodes to itself. Once a name
//! *is* in labeled shape, every token inside the brackets must be a single
//! `key=value` pair or decoding fails.
//!
//! Whitespace is significant everywhere and is never trimmed.

use crate::error::CoreError;
use crate::types::{Label, KEY_VALUE_SEPARATOR, LABELS_CLOSE, LABELS_OPEN, LABEL_SEPARATOR};

/// Returns `true` when `name` carries a label list.
pub fn has_labels(name: &str) -> bool {
    let (Some(open), Some(close)) = (name.find(LABELS_OPEN), name.find(LABELS_CLOSE)) else {
        return false;
    };

    open >= 1
        && name.rfind(LABELS_OPEN) == Some(open)
        && name.rfind(LABELS_CLOSE) == Some(close)
        && close == name.len() - LABELS_CLOSE.len_utf8()
}

/// The base metric name: everything before `[` for labeled names, the
/// whole string otherwise.
pub fn extract_base(name: &str) -> &str {
    if !has_labels(name) {
        return name;
    }
    match name.find(LABELS_OPEN) {
        Some(open) => &name[..open],
        None => name,
    }
}

/// The raw text between the brackets, or `None` for unlabeled names.
pub fn label_list(name: &str) -> Option<&str> {
    if !has_labels(name) {
        return None;
    }
    let open = name.find(LABELS_OPEN)?;
    let close = name.rfind(LABELS_CLOSE)?;
    Some(&name[open + LABELS_OPEN.len_utf8()..close])
}

/// Decode the ordered label list. Unlabeled names yield an empty list.
pub fn extract_labels(name: &str) -> Result<Vec<Label>, CoreError> {
    let Some(list) = label_list(name) else {
        return Ok(Vec::new());
    };

    list.split(LABEL_SEPARATOR)
        .map(|token| parse_label_token(name, token))
        .collect()
}

fn parse_label_token(name: &str, token: &str) -> Result<Label, CoreError> {
    let mut parts = token.split(KEY_VALUE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Ok(Label::new(key, value)),
        _ => {
            tracing::debug!(name, token, "rejecting malformed label token");
            Err(CoreError::MalformedLabelToken {
                name: name.to_string(),
                token: token.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_malformed(name: &str, expected_token: &str) {
        match extract_labels(name) {
            Err(CoreError::MalformedLabelToken { token, .. }) => {
                assert_eq!(token, expected_token, "wrong token reported for {name}")
            }
            other => panic!("expected MalformedLabelToken for {name}, got {other:?}"),
        }
    }

    #[test]
    fn labeled_shape_is_detected() {
        assert!(has_labels("m[a=b]"));
        assert!(has_labels("m[]"));
        assert!(has_labels("metric.name[a=b,c=d]"));
    }

    #[test]
    fn irregular_bracket_shapes_are_plain_names() {
        for name in [
            "",
            "m",
            "[a=b]",
            "m[a=b",
            "ma=b]",
            "m[a=b] ",
            "m[[a=b]",
            "m[a=b]]",
            "m[a=b][c=d]",
            "m]a=b[",
        ] {
            assert!(!has_labels(name), "{name:?} must not be labeled");
            assert_eq!(extract_base(name), name);
            assert!(extract_labels(name).expect("plain names never fail").is_empty());
        }
    }

    #[test]
    fn base_stops_at_open_bracket() {
        assert_eq!(extract_base("requests[code=200]"), "requests");
        assert_eq!(extract_base("a.b.c[x=y]"), "a.b.c");
    }

    #[test]
    fn labels_keep_token_order() {
        let labels = extract_labels("m[z=1,a=2,m=3]").expect("well-formed");
        let keys: Vec<_> = labels.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn empty_value_is_well_formed() {
        let labels = extract_labels("m[key1=]").expect("empty value is allowed");
        assert_eq!(labels, vec![Label::new("key1", "")]);
    }

    #[test]
    fn whitespace_is_kept() {
        let labels = extract_labels("m[a=1, b = 2]").expect("well-formed");
        assert_eq!(labels[1], Label::new(" b ", " 2"));
    }

    #[test]
    fn token_without_equals_is_rejected() {
        assert_malformed("m[key1]", "key1");
        assert_malformed("m[key1=val1,key2]", "key2");
    }

    #[test]
    fn token_with_two_equals_is_rejected() {
        assert_malformed("m[a=b=c]", "a=b=c");
    }

    #[test]
    fn empty_tokens_are_rejected() {
        assert_malformed("m[]", "");
        assert_malformed("m[a=1,]", "");
        assert_malformed("m[a=1,,b=2]", "");
    }
}
