//! Domain types for labeled metric names.
//!
//! A labeled name is a base metric name plus an ordered list of
//! `key=value` labels, carried in a single flat string of the form
//! `base[key1=value1,key2=value2]` so it can travel through APIs that only
//! accept a bare metric name.

use serde::{Deserialize, Serialize};

use crate::builder::LabeledNameBuilder;
use crate::error::CoreError;
use crate::parse;

// ==============================================================================
// Grammar Constants
// ==============================================================================

pub const LABELS_OPEN: char = '[';
pub const LABELS_CLOSE: char = ']';
pub const LABEL_SEPARATOR: char = ',';
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Keys injected by the destination name itself. User labels may not reuse
/// them.
pub const RESERVED_LABEL_KEYS: [&str; 2] = ["name", "type"];

// ==============================================================================
// Label
// ==============================================================================

/// A single `key=value` label. Values are kept verbatim (unquoted); quoting
/// only happens when rendering a destination name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    pub value: String,
}

impl Label {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn is_reserved_key(key: &str) -> bool {
        RESERVED_LABEL_KEYS.contains(&key)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{KEY_VALUE_SEPARATOR}{}", self.key, self.value)
    }
}

// ==============================================================================
// Labeled Name
// ==============================================================================

/// A decoded (or finalized) labeled metric name.
///
/// Label order is significant and preserved: consumers display labels in
/// the order their author supplied them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledName {
    pub base: String,
    pub labels: Vec<Label>,
}

impl LabeledName {
    /// Start building a labeled name from a base metric name.
    pub fn builder(base: impl Into<String>) -> LabeledNameBuilder {
        LabeledNameBuilder::new(base)
    }

    /// Decode any metric name. Names that are not in labeled shape decode
    /// to themselves with no labels.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        Ok(Self {
            base: parse::extract_base(name).to_string(),
            labels: parse::extract_labels(name)?,
        })
    }

    pub fn has_labels(&self) -> bool {
        !self.labels.is_empty()
    }

    /// Value of the first label with the given key.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|label| label.key == key)
            .map(|label| label.value.as_str())
    }
}

impl std::fmt::Display for LabeledName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_canonical(f, &self.base, &self.labels)
    }
}

/// Write `base` or `base[k=v,...]`.
pub(crate) fn write_canonical(
    f: &mut std::fmt::Formatter<'_>,
    base: &str,
    labels: &[Label],
) -> std::fmt::Result {
    f.write_str(base)?;
    let mut labels = labels.iter();
    if let Some(first) = labels.next() {
        write!(f, "{LABELS_OPEN}{first}")?;
        for label in labels {
            write!(f, "{LABEL_SEPARATOR}{label}")?;
        }
        write!(f, "{LABELS_CLOSE}")?;
    }
    Ok(())
}

impl std::str::FromStr for LabeledName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
