//! The parsed object name and its error type.

use super::parsing::{
    check_domain, check_key, check_value, split_property_list, DOMAIN_SEPARATOR,
    KEY_VALUE_SEPARATOR, PROPERTY_SEPARATOR, WILDCARD_ANY,
};

// ==============================================================================
// Errors
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectNameError {
    #[error("missing `:` between domain and key properties")]
    MissingDomainSeparator,

    #[error("invalid character {0:?} in domain")]
    InvalidDomainCharacter(char),

    #[error("key property list is empty")]
    EmptyKeyPropertyList,

    #[error("key property `{0}` has no `=`")]
    MissingKeyValueSeparator(String),

    #[error("key property has an empty key")]
    EmptyKey,

    #[error("invalid character {ch:?} in key `{key}`")]
    InvalidKeyCharacter { key: String, ch: char },

    #[error("duplicate key `{0}`")]
    DuplicateKey(String),

    #[error("invalid character {ch:?} in value of key `{key}`")]
    InvalidValueCharacter { key: String, ch: char },

    #[error("unterminated quoted value for key `{0}`")]
    UnterminatedQuote(String),

    #[error("invalid escape `\\{ch}` in quoted value for key `{key}`")]
    InvalidEscape { key: String, ch: char },

    #[error("unexpected characters after quoted value for key `{0}`")]
    TrailingAfterQuote(String),
}

// ==============================================================================
// Object Name
// ==============================================================================

/// A validated `domain:key=value,...` name.
///
/// Property order is remembered for display, but identity (equality and
/// hashing) uses the canonical form with keys sorted, the same way the
/// registry compares names.
#[derive(Debug, Clone)]
pub struct ObjectName {
    domain: String,
    properties: Vec<(String, String)>,
    domain_pattern: bool,
    property_list_pattern: bool,
    property_value_pattern: bool,
}

impl ObjectName {
    /// Build a name from a domain and an ordered property list, validating
    /// every component on its own. Values are taken as already quoted (or
    /// not) by the caller.
    pub fn new(domain: &str, properties: &[(&str, &str)]) -> Result<Self, ObjectNameError> {
        if properties.is_empty() {
            return Err(ObjectNameError::EmptyKeyPropertyList);
        }
        Self::from_parts(domain, properties, false)
    }

    fn from_parts(
        domain: &str,
        properties: &[(&str, &str)],
        property_list_pattern: bool,
    ) -> Result<Self, ObjectNameError> {
        let domain_pattern = check_domain(domain)?;

        let mut owned: Vec<(String, String)> = Vec::with_capacity(properties.len());
        let mut property_value_pattern = false;
        for &(key, value) in properties {
            check_key(key)?;
            if owned.iter().any(|(existing, _)| existing == key) {
                return Err(ObjectNameError::DuplicateKey(key.to_string()));
            }
            property_value_pattern |= check_value(key, value)?;
            owned.push((key.to_string(), value.to_string()));
        }

        Ok(Self {
            domain: domain.to_string(),
            properties: owned,
            domain_pattern,
            property_list_pattern,
            property_value_pattern,
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Raw (possibly quoted) value for `key`.
    pub fn key_property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn key_properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Properties in the order they were given, without any list wildcard.
    pub fn key_property_list_string(&self) -> String {
        join_properties(self.properties.iter())
    }

    /// Properties sorted by key, followed by `*` for list patterns.
    pub fn canonical_key_property_list_string(&self) -> String {
        let mut sorted: Vec<_> = self.properties.iter().collect();
        sorted.sort_by(|(a, _), (b, _)| a.cmp(b));
        let mut list = join_properties(sorted.into_iter());
        if self.property_list_pattern {
            if !list.is_empty() {
                list.push(PROPERTY_SEPARATOR);
            }
            list.push(WILDCARD_ANY);
        }
        list
    }

    pub fn canonical_name(&self) -> String {
        format!(
            "{}{DOMAIN_SEPARATOR}{}",
            self.domain,
            self.canonical_key_property_list_string()
        )
    }

    pub fn is_pattern(&self) -> bool {
        self.domain_pattern || self.property_list_pattern || self.property_value_pattern
    }

    pub fn is_domain_pattern(&self) -> bool {
        self.domain_pattern
    }

    pub fn is_property_list_pattern(&self) -> bool {
        self.property_list_pattern
    }

    /// `true` when any property value is a wildcard pattern.
    pub fn is_property_value_pattern(&self) -> bool {
        self.property_value_pattern
    }

    /// `true` when the value of `key` is a wildcard pattern. Unknown keys
    /// are never patterns.
    pub fn is_property_value_pattern_for(&self, key: &str) -> bool {
        self.key_property(key)
            .is_some_and(|value| check_value(key, value).unwrap_or(false))
    }
}

fn join_properties<'a>(properties: impl Iterator<Item = &'a (String, String)>) -> String {
    properties
        .map(|(k, v)| format!("{k}{KEY_VALUE_SEPARATOR}{v}"))
        .collect::<Vec<_>>()
        .join(&PROPERTY_SEPARATOR.to_string())
}

impl std::str::FromStr for ObjectName {
    type Err = ObjectNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (domain, list) = s
            .split_once(DOMAIN_SEPARATOR)
            .ok_or(ObjectNameError::MissingDomainSeparator)?;
        let list = split_property_list(list)?;
        Self::from_parts(domain, &list.properties, list.list_pattern)
    }
}

impl std::fmt::Display for ObjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{DOMAIN_SEPARATOR}{}",
            self.domain,
            self.key_property_list_string()
        )?;
        if self.property_list_pattern {
            if !self.properties.is_empty() {
                write!(f, "{PROPERTY_SEPARATOR}")?;
            }
            write!(f, "{WILDCARD_ANY}")?;
        }
        Ok(())
    }
}

impl PartialEq for ObjectName {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_name() == other.canonical_name()
    }
}

impl Eq for ObjectName {}

impl std::hash::Hash for ObjectName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.canonical_name().hash(state);
    }
}
