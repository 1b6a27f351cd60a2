//! Destination naming grammar.
//!
//! Destination identifiers follow JMX object-name rules:
//! `domain:key=value,key="quoted value",...`. A domain containing `*` or
//! `?` is a domain pattern, an unquoted value containing them is a value
//! pattern, and a trailing `*` element makes the key list a pattern. Quoted
//! values escape `"`, `\`, `*`, `?` and newline with a backslash.
//!
//! Quoting decisions are made by asking a [`NameGrammar`] what it makes of
//! a candidate name, rather than by keeping a separate list of special
//! characters. [`JmxGrammar`] is the grammar implemented here.

mod parsing;
mod types;

pub use types::{ObjectName, ObjectNameError};

/// The destination registry's name constructor and quoting rule.
pub trait NameGrammar: Send + Sync {
    /// Build a name from a domain and ordered properties, validating each
    /// component individually.
    fn construct(&self, domain: &str, properties: &[(&str, &str)])
        -> Result<ObjectName, ObjectNameError>;

    /// Parse a complete `domain:key=value,...` string.
    fn parse(&self, raw: &str) -> Result<ObjectName, ObjectNameError>;

    /// Wrap `raw` in the grammar's quoting convention.
    fn quote(&self, raw: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JmxGrammar;

impl NameGrammar for JmxGrammar {
    fn construct(
        &self,
        domain: &str,
        properties: &[(&str, &str)],
    ) -> Result<ObjectName, ObjectNameError> {
        ObjectName::new(domain, properties)
    }

    fn parse(&self, raw: &str) -> Result<ObjectName, ObjectNameError> {
        raw.parse()
    }

    fn quote(&self, raw: &str) -> String {
        quote(raw)
    }
}

/// Quote `raw` as a literal: `"` + escaped content + `"`.
pub fn quote(raw: &str) -> String {
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push(parsing::QUOTE);
    for ch in raw.chars() {
        match ch {
            '\n' => {
                quoted.push(parsing::ESCAPE);
                quoted.push('n');
            }
            parsing::QUOTE | parsing::ESCAPE | parsing::WILDCARD_ANY | parsing::WILDCARD_ONE => {
                quoted.push(parsing::ESCAPE);
                quoted.push(ch);
            }
            _ => quoted.push(ch),
        }
    }
    quoted.push(parsing::QUOTE);
    quoted
}
