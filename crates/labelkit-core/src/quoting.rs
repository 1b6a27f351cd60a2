//! Quote destination components only when the grammar needs it.
//!
//! Whether a component needs quoting depends on the whole value (a lone
//! `?` is a wildcard, a leading `"` opens a quoted value, `:` ends a
//! domain), so the grammar itself is consulted: construct a probe name with
//! the raw component, and fall back to the quoted form if the probe is a
//! pattern or is rejected. If the quoted form fails the same check the
//! component cannot be expressed at all.
//!
//! A value that already starts with `"` is always quoted: left alone it
//! would parse as a quoted value and lose its quotes on the way back out.

use crate::error::{CoreError, NameField};
use crate::object_name::{NameGrammar, ObjectName, ObjectNameError};

const PROBE_DOMAIN: &str = "probe";
const PROBE_KEY: &str = "key";
const PROBE_VALUE: &str = "value";
const QUOTE: char = '"';

/// Returns `domain` unchanged when it is a valid literal domain, otherwise
/// its quoted form.
pub fn quote_domain_if_needed<G>(grammar: &G, domain: &str) -> Result<String, CoreError>
where
    G: NameGrammar + ?Sized,
{
    quote_if_needed(grammar, NameField::Domain, domain, false, |candidate| {
        grammar
            .construct(candidate, &[(PROBE_KEY, PROBE_VALUE)])
            .map(|name| name.is_domain_pattern())
    })
}

/// Returns `value` unchanged when it is a valid literal property value,
/// otherwise its quoted form. Keys are never quoted.
pub fn quote_value_if_needed<G>(grammar: &G, value: &str) -> Result<String, CoreError>
where
    G: NameGrammar + ?Sized,
{
    let leading_quote = value.starts_with(QUOTE);
    quote_if_needed(grammar, NameField::Value, value, leading_quote, |candidate| {
        grammar
            .construct(PROBE_DOMAIN, &[(PROBE_KEY, candidate)])
            .map(|name: ObjectName| name.is_property_value_pattern_for(PROBE_KEY))
    })
}

/// `is_pattern` reports `Ok(true)` for wildcard patterns, `Ok(false)` for
/// literals and `Err` when the grammar rejects the candidate. With
/// `always_quote` set the raw form is never tried.
fn quote_if_needed<G, F>(
    grammar: &G,
    field: NameField,
    raw: &str,
    always_quote: bool,
    is_pattern: F,
) -> Result<String, CoreError>
where
    G: NameGrammar + ?Sized,
    F: Fn(&str) -> Result<bool, ObjectNameError>,
{
    if always_quote {
        tracing::debug!(%field, raw, "component starts with a quote; quoting");
    } else {
        match is_pattern(raw) {
            Ok(false) => return Ok(raw.to_string()),
            Ok(true) => tracing::debug!(%field, raw, "component is a wildcard pattern; quoting"),
            Err(err) => tracing::debug!(%field, raw, error = %err, "component rejected; quoting"),
        }
    }

    let quoted = grammar.quote(raw);
    match is_pattern(&quoted) {
        Ok(false) => Ok(quoted),
        Ok(true) => {
            tracing::warn!(%field, raw, %quoted, "quoted component is still a pattern");
            Err(CoreError::UnquotableValue {
                field,
                value: raw.to_string(),
                source: None,
            })
        }
        Err(err) => {
            tracing::warn!(%field, raw, %quoted, error = %err, "quoted component rejected");
            Err(CoreError::UnquotableValue {
                field,
                value: raw.to_string(),
                source: Some(err),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_name::JmxGrammar;
    use crate::test_util::{RejectingGrammar, UnescapingGrammar};

    #[test]
    fn plain_domain_is_untouched() {
        for domain in ["TestDomain", "my-metrics-domain", "a.b.c", "with space", ""] {
            assert_eq!(
                quote_domain_if_needed(&JmxGrammar, domain).expect("valid domain"),
                domain
            );
        }
    }

    #[test]
    fn wildcard_domain_is_quoted() {
        assert_eq!(
            quote_domain_if_needed(&JmxGrammar, "metrics*").expect("quotable"),
            r#""metrics\*""#
        );
        assert_eq!(
            quote_domain_if_needed(&JmxGrammar, "?").expect("quotable"),
            r#""\?""#
        );
    }

    #[test]
    fn newline_domain_is_quoted() {
        assert_eq!(
            quote_domain_if_needed(&JmxGrammar, "a\nb").expect("quotable"),
            r#""a\nb""#
        );
    }

    #[test]
    fn domain_with_separator_cannot_be_quoted() {
        let err = quote_domain_if_needed(&JmxGrammar, "a:b").expect_err("unrescuable");
        match err {
            CoreError::UnquotableValue {
                field,
                value,
                source,
            } => {
                assert_eq!(field, NameField::Domain);
                assert_eq!(value, "a:b");
                assert_eq!(source, Some(ObjectNameError::InvalidDomainCharacter(':')));
            }
            other => panic!("expected UnquotableValue, got {other:?}"),
        }
    }

    #[test]
    fn plain_values_are_untouched() {
        for value in ["value1", "metricName", "", " padded ", r"back\slash", "a.b-c_d/e"] {
            assert_eq!(
                quote_value_if_needed(&JmxGrammar, value).expect("valid value"),
                value
            );
        }
    }

    #[test]
    fn special_values_are_quoted() {
        let cases = [
            ("before?after", r#""before\?after""#),
            ("*", r#""\*""#),
            ("?", r#""\?""#),
            ("a:b", r#""a:b""#),
            ("a,b", r#""a,b""#),
            ("a=b", r#""a=b""#),
            ("\"lead", r#""\"lead""#),
            ("trail\"", r#""trail\"""#),
            ("two\nlines", r#""two\nlines""#),
            ("\"x\"", r#""\"x\"""#),
            ("\"\"", r#""\"\"""#),
            ("\"a\",\"b\"", r#""\"a\",\"b\"""#),
        ];
        for (raw, expected) in cases {
            assert_eq!(
                quote_value_if_needed(&JmxGrammar, raw).expect("quotable"),
                expected,
                "{raw:?}"
            );
        }
    }

    #[test]
    fn quoted_looking_values_keep_their_quotes() {
        for raw in ["\"x\"", "\"\"", "\"before?after\""] {
            let rendered = quote_value_if_needed(&JmxGrammar, raw).expect("quotable");
            assert_eq!(rendered, JmxGrammar.quote(raw), "{raw:?}");
            let name = JmxGrammar
                .construct("d", &[("k", rendered.as_str())])
                .expect("valid name");
            assert!(!name.is_property_value_pattern());
        }
    }

    #[test]
    fn rejected_quoted_value_is_fatal() {
        let err = quote_value_if_needed(&RejectingGrammar, "x?").expect_err("grammar rejects all");
        assert!(matches!(
            err,
            CoreError::UnquotableValue {
                field: NameField::Value,
                source: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn quoted_value_still_a_pattern_is_fatal() {
        let err =
            quote_value_if_needed(&UnescapingGrammar, "x?").expect_err("quoting cannot help");
        assert!(matches!(
            err,
            CoreError::UnquotableValue {
                field: NameField::Value,
                source: None,
                ..
            }
        ));
    }

    #[test]
    fn literal_values_pass_even_through_weak_grammars() {
        assert_eq!(
            quote_value_if_needed(&UnescapingGrammar, "plain").expect("literal"),
            "plain"
        );
    }
}
