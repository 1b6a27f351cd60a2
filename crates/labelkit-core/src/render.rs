//! Rendering labeled names into destination object names.
//!
//! A metrics reporter hands us `(metric type, domain, metric name)` once per
//! metric at registration time. The metric name may be a labeled name; its
//! labels become extra key properties after `name`:
//!
//! ```text
//! requests[route=/a,code=200]  ->  domain:name=requests,route=/a,code=200
//! ```
//!
//! Property order is fixed: `name` first, then labels in their original
//! order. Some consumers read the first key positionally.

use crate::error::CoreError;
use crate::object_name::{JmxGrammar, NameGrammar, ObjectName};
use crate::quoting::{quote_domain_if_needed, quote_value_if_needed};
use crate::types::LabeledName;

/// Key under which the base metric name is emitted.
pub const NAME_KEY: &str = "name";

/// Creates destination names for metrics as they are registered.
pub trait ObjectNameFactory: Send + Sync {
    fn create_name(
        &self,
        metric_type: &str,
        domain: &str,
        name: &str,
    ) -> Result<ObjectName, CoreError>;
}

/// Name factory that understands labeled metric names.
///
/// The metric type is accepted for interface compatibility but not
/// emitted; names carry only `name` and the labels.
#[derive(Debug, Clone)]
pub struct LabelSupportedNameFactory<G = JmxGrammar> {
    grammar: G,
}

impl LabelSupportedNameFactory {
    pub fn new() -> Self {
        Self {
            grammar: JmxGrammar,
        }
    }
}

impl Default for LabelSupportedNameFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: NameGrammar> LabelSupportedNameFactory<G> {
    pub fn with_grammar(grammar: G) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> &G {
        &self.grammar
    }
}

impl<G: NameGrammar> ObjectNameFactory for LabelSupportedNameFactory<G> {
    fn create_name(
        &self,
        metric_type: &str,
        domain: &str,
        name: &str,
    ) -> Result<ObjectName, CoreError> {
        tracing::trace!(metric_type, domain, name, "creating object name");
        let labeled = LabeledName::parse(name)?;
        let rendered = render(&self.grammar, domain, &labeled)?;
        self.grammar
            .parse(&rendered)
            .map_err(|source| CoreError::InvalidObjectName {
                name: rendered,
                source,
            })
    }
}

/// Convert an opaque (possibly labeled) metric name with the default
/// factory.
pub fn to_destination_name(
    metric_type: &str,
    domain: &str,
    name: &str,
) -> Result<ObjectName, CoreError> {
    LabelSupportedNameFactory::new().create_name(metric_type, domain, name)
}

/// Assemble `domain:name=<base>,<key>=<value>,...` with the domain, base
/// and every label value quoted as needed. The result is not validated as a
/// whole; keys are emitted verbatim.
pub fn render<G>(grammar: &G, domain: &str, labeled: &LabeledName) -> Result<String, CoreError>
where
    G: NameGrammar + ?Sized,
{
    let mut rendered = quote_domain_if_needed(grammar, domain)?;
    rendered.push(':');
    rendered.push_str(NAME_KEY);
    rendered.push('=');
    rendered.push_str(&quote_value_if_needed(grammar, &labeled.base)?);

    for label in &labeled.labels {
        rendered.push(',');
        rendered.push_str(&label.key);
        rendered.push('=');
        rendered.push_str(&quote_value_if_needed(grammar, &label.value)?);
    }
    Ok(rendered)
}
