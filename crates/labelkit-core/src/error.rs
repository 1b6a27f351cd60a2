use crate::object_name::ObjectNameError;

/// Which part of a destination name a quoting attempt was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Domain,
    Value,
}

impl std::fmt::Display for NameField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain => write!(f, "domain"),
            Self::Value => write!(f, "property value"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("label key `{0}` is reserved and cannot be used")]
    InvalidLabelKey(String),

    #[error("base metric name `{0}` must be non-empty and free of `[` and `]`")]
    InvalidBaseName(String),

    #[error("malformed label token `{token}` in `{name}`")]
    MalformedLabelToken { name: String, token: String },

    #[error("{field} `{value}` cannot be quoted into a valid object name")]
    UnquotableValue {
        field: NameField,
        value: String,
        #[source]
        source: Option<ObjectNameError>,
    },

    #[error("invalid object name `{name}`")]
    InvalidObjectName {
        name: String,
        #[source]
        source: ObjectNameError,
    },
}
