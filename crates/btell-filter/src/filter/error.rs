//! Error types for the filter tokenizer and builder.

use thiserror::Error;

/// A specialized Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Hard failures that abort filter processing.
///
/// These are returned as `Err`. Problems found while building a filter from a
/// well-formed token stream are not hard failures; they are recorded as a
/// [`BuildError`] on the returned filter instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A quoted literal was opened and never closed.
    #[error("Missing '\"' in filter (quote opened at position {position})")]
    UnterminatedLiteral {
        /// Byte offset of the opening quote.
        position: usize,
    },

    /// A filter carrying a build error was used to select stories.
    #[error("invalid filter: {0}")]
    InvalidFilter(BuildError),
}

/// Problems found while building a filter from tokens.
///
/// The builder stops at the first one and stores it on the filter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A field was the last token, so it has no value.
    #[error("Field {field} specified without value!")]
    FieldWithoutValue {
        /// The field name.
        field: String,
    },

    /// The token following a field was itself a field.
    #[error("Expected a literal value for the field, but was given another field!")]
    FieldAsValue {
        /// The field name.
        field: String,
        /// The field token that was consumed as its value.
        value: String,
    },

    /// `is:` was given something other than `completed`.
    #[error("Unknown predicate for is: {value}")]
    UnknownPredicate {
        /// The unrecognized predicate.
        value: String,
    },

    /// The field name is not one the filter accepts.
    #[error("Unknown field name: {field}")]
    UnknownField {
        /// The unrecognized field name.
        field: String,
    },
}

impl FilterError {
    /// Creates an unterminated literal error.
    pub fn unterminated_literal(position: usize) -> Self {
        FilterError::UnterminatedLiteral { position }
    }
}

impl BuildError {
    /// Creates a field-without-value error.
    pub fn field_without_value(field: impl Into<String>) -> Self {
        BuildError::FieldWithoutValue {
            field: field.into(),
        }
    }

    /// Creates a field-as-value error.
    pub fn field_as_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        BuildError::FieldAsValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an unknown predicate error.
    pub fn unknown_predicate(value: impl Into<String>) -> Self {
        BuildError::UnknownPredicate {
            value: value.into(),
        }
    }

    /// Creates an unknown field error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        BuildError::UnknownField {
            field: field.into(),
        }
    }
}
