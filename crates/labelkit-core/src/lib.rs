pub mod builder;
pub mod error;
pub mod object_name;
pub mod parse;
pub mod quoting;
pub mod render;
#[cfg(test)]
mod test_util;
pub mod types;

pub use builder::{metric_name, LabeledNameBuilder};
pub use error::{CoreError, NameField};
pub use object_name::{JmxGrammar, NameGrammar, ObjectName, ObjectNameError};
pub use render::{to_destination_name, LabelSupportedNameFactory, ObjectNameFactory};
pub use types::{Label, LabeledName};
