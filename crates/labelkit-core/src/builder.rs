//! Incremental construction of canonical labeled names.
//!
//! `LabeledNameBuilder` is a plain owned value: build it on the stack, chain
//! `label` calls, and `build()` it. It is not meant to be shared between
//! threads while labels are being added; no internal locking is done.

use crate::error::CoreError;
use crate::types::{write_canonical, Label, LabeledName, LABELS_CLOSE, LABELS_OPEN};

/// Join a base name and extra segments with `.`, skipping empty parts.
pub fn metric_name<T: AsRef<str>>(base: &str, segments: impl IntoIterator<Item = T>) -> String {
    let mut name = String::with_capacity(base.len());
    let mut append = |part: &str| {
        if part.is_empty() {
            return;
        }
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(part);
    };

    append(base);
    for segment in segments {
        append(segment.as_ref());
    }
    name
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledNameBuilder {
    base: String,
    labels: Vec<Label>,
}

impl LabeledNameBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            labels: Vec::new(),
        }
    }

    /// Start from a hierarchical name, e.g. `start("http", ["server", "requests"])`
    /// yields the base `http.server.requests`.
    pub fn start<T: AsRef<str>>(base: &str, segments: impl IntoIterator<Item = T>) -> Self {
        Self::new(metric_name(base, segments))
    }

    /// Append one label. Values are stored verbatim.
    pub fn label(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, CoreError> {
        self.check_base()?;
        let key = key.into();
        if Label::is_reserved_key(&key) {
            return Err(CoreError::InvalidLabelKey(key));
        }
        self.labels.push(Label::new(key, value));
        Ok(self)
    }

    /// Append every entry in iteration order. Stops at the first reserved key.
    pub fn labels<K, V>(self, labels: impl IntoIterator<Item = (K, V)>) -> Result<Self, CoreError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        labels
            .into_iter()
            .try_fold(self, |builder, (key, value)| builder.label(key, value))
    }

    pub fn has_labels(&self) -> bool {
        !self.labels.is_empty()
    }

    /// Finalize into an immutable name. Fails when the base could not be
    /// decoded back from the canonical form.
    pub fn build(self) -> Result<LabeledName, CoreError> {
        self.check_base()?;
        Ok(LabeledName {
            base: self.base,
            labels: self.labels,
        })
    }

    fn check_base(&self) -> Result<(), CoreError> {
        if self.base.is_empty() || self.base.contains([LABELS_OPEN, LABELS_CLOSE]) {
            return Err(CoreError::InvalidBaseName(self.base.clone()));
        }
        Ok(())
    }
}

impl std::fmt::Display for LabeledNameBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Rendered from scratch on every call, never appended to.
        write_canonical(f, &self.base, &self.labels)
    }
}
