//! Shared test helpers for `labelkit-core` unit tests.
//!
//! Grammars with deliberately broken behavior, used to drive the quoting
//! failure paths that the real grammar can only reach for a few inputs.

use crate::object_name::{quote, JmxGrammar, NameGrammar, ObjectName, ObjectNameError};

/// Rejects every name it is asked to construct or parse.
pub struct RejectingGrammar;

impl NameGrammar for RejectingGrammar {
    fn construct(&self, _: &str, _: &[(&str, &str)]) -> Result<ObjectName, ObjectNameError> {
        Err(ObjectNameError::MissingDomainSeparator)
    }

    fn parse(&self, _: &str) -> Result<ObjectName, ObjectNameError> {
        Err(ObjectNameError::MissingDomainSeparator)
    }

    fn quote(&self, raw: &str) -> String {
        quote(raw)
    }
}

/// Real grammar, but quoting only wraps in `"` without escaping, so
/// wildcards survive quoting.
pub struct UnescapingGrammar;

impl NameGrammar for UnescapingGrammar {
    fn construct(
        &self,
        domain: &str,
        properties: &[(&str, &str)],
    ) -> Result<ObjectName, ObjectNameError> {
        JmxGrammar.construct(domain, properties)
    }

    fn parse(&self, raw: &str) -> Result<ObjectName, ObjectNameError> {
        JmxGrammar.parse(raw)
    }

    fn quote(&self, raw: &str) -> String {
        format!("\"{raw}\"")
    }
}
