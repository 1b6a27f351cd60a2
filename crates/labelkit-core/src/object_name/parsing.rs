//! Component validators and the key-property-list scanner.
//!
//! Each validator returns whether the component is a wildcard pattern, so
//! the same code answers both "is this legal" and "is this a pattern".

use super::types::ObjectNameError;

pub(super) const DOMAIN_SEPARATOR: char = ':';
pub(super) const PROPERTY_SEPARATOR: char = ',';
pub(super) const KEY_VALUE_SEPARATOR: char = '=';
pub(super) const QUOTE: char = '"';
pub(super) const ESCAPE: char = '\\';
pub(super) const WILDCARD_ANY: char = '*';
pub(super) const WILDCARD_ONE: char = '?';

fn is_wildcard(ch: char) -> bool {
    ch == WILDCARD_ANY || ch == WILDCARD_ONE
}

/// Validate a domain; returns `true` for a domain pattern. Backslash-escaped
/// wildcards are literals.
pub(super) fn check_domain(domain: &str) -> Result<bool, ObjectNameError> {
    let mut pattern = false;
    let mut chars = domain.chars();
    while let Some(ch) = chars.next() {
        match ch {
            DOMAIN_SEPARATOR | '\n' => return Err(ObjectNameError::InvalidDomainCharacter(ch)),
            ESCAPE => {
                if let Some(escaped @ (DOMAIN_SEPARATOR | '\n')) = chars.next() {
                    return Err(ObjectNameError::InvalidDomainCharacter(escaped));
                }
            }
            c if is_wildcard(c) => pattern = true,
            _ => {}
        }
    }
    Ok(pattern)
}

pub(super) fn check_key(key: &str) -> Result<(), ObjectNameError> {
    if key.is_empty() {
        return Err(ObjectNameError::EmptyKey);
    }
    match key.chars().find(|&ch| {
        matches!(
            ch,
            DOMAIN_SEPARATOR | PROPERTY_SEPARATOR | KEY_VALUE_SEPARATOR | '\n'
        ) || is_wildcard(ch)
    }) {
        Some(ch) => Err(ObjectNameError::InvalidKeyCharacter {
            key: key.to_string(),
            ch,
        }),
        None => Ok(()),
    }
}

/// Validate a complete value (quoted or not); returns `true` for a value
/// pattern.
pub(super) fn check_value(key: &str, value: &str) -> Result<bool, ObjectNameError> {
    if value.starts_with(QUOTE) {
        let (len, pattern) = scan_quoted(key, value)?;
        if len != value.len() {
            return Err(ObjectNameError::TrailingAfterQuote(key.to_string()));
        }
        return Ok(pattern);
    }

    let mut pattern = false;
    for ch in value.chars() {
        match ch {
            DOMAIN_SEPARATOR | PROPERTY_SEPARATOR | KEY_VALUE_SEPARATOR | QUOTE | '\n' => {
                return Err(ObjectNameError::InvalidValueCharacter {
                    key: key.to_string(),
                    ch,
                });
            }
            c if is_wildcard(c) => pattern = true,
            _ => {}
        }
    }
    Ok(pattern)
}

/// Scan a quoted value at the start of `input`. Returns the byte length up
/// to and including the closing quote, and whether an unescaped wildcard
/// appeared inside.
fn scan_quoted(key: &str, input: &str) -> Result<(usize, bool), ObjectNameError> {
    let mut pattern = false;
    let mut chars = input.char_indices().skip(1);
    while let Some((idx, ch)) = chars.next() {
        match ch {
            QUOTE => return Ok((idx + QUOTE.len_utf8(), pattern)),
            ESCAPE => match chars.next() {
                Some((_, QUOTE | ESCAPE | WILDCARD_ANY | WILDCARD_ONE | 'n')) => {}
                Some((_, other)) => {
                    return Err(ObjectNameError::InvalidEscape {
                        key: key.to_string(),
                        ch: other,
                    });
                }
                None => break,
            },
            '\n' => {
                return Err(ObjectNameError::InvalidValueCharacter {
                    key: key.to_string(),
                    ch,
                });
            }
            c if is_wildcard(c) => pattern = true,
            _ => {}
        }
    }
    Err(ObjectNameError::UnterminatedQuote(key.to_string()))
}

/// Result of scanning a key property list.
pub(super) struct PropertyList<'a> {
    pub properties: Vec<(&'a str, &'a str)>,
    pub list_pattern: bool,
}

/// Split `key=value,key="quoted, value",*` into its properties. Values are
/// returned verbatim (still quoted) and validated separately.
pub(super) fn split_property_list(list: &str) -> Result<PropertyList<'_>, ObjectNameError> {
    let mut properties = Vec::new();
    let mut rest = list;

    if rest.is_empty() {
        return Err(ObjectNameError::EmptyKeyPropertyList);
    }

    loop {
        if rest == "*" {
            return Ok(PropertyList {
                properties,
                list_pattern: true,
            });
        }

        let eq = match rest.find([KEY_VALUE_SEPARATOR, PROPERTY_SEPARATOR]) {
            Some(idx) if rest[idx..].starts_with(KEY_VALUE_SEPARATOR) => idx,
            Some(idx) => {
                return Err(ObjectNameError::MissingKeyValueSeparator(
                    rest[..idx].to_string(),
                ))
            }
            None => return Err(ObjectNameError::MissingKeyValueSeparator(rest.to_string())),
        };
        let key = &rest[..eq];
        let after_eq = &rest[eq + KEY_VALUE_SEPARATOR.len_utf8()..];

        let value_len = if after_eq.starts_with(QUOTE) {
            let (len, _) = scan_quoted(key, after_eq)?;
            if !(after_eq.len() == len || after_eq[len..].starts_with(PROPERTY_SEPARATOR)) {
                return Err(ObjectNameError::TrailingAfterQuote(key.to_string()));
            }
            len
        } else {
            after_eq.find(PROPERTY_SEPARATOR).unwrap_or(after_eq.len())
        };

        properties.push((key, &after_eq[..value_len]));

        let remainder = &after_eq[value_len..];
        match remainder.strip_prefix(PROPERTY_SEPARATOR) {
            Some(next) => rest = next,
            None => {
                return Ok(PropertyList {
                    properties,
                    list_pattern: false,
                })
            }
        }
    }
}
