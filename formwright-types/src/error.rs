use crate::FieldId;

/// Why an answer is currently invalid.
///
/// The display text is the message shown next to the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was left blank.
    #[error("This field is required.")]
    Required,

    /// An email field does not hold `local@domain.tld`.
    #[error("Enter a valid email.")]
    InvalidEmail,

    /// A number field does not hold a finite number.
    #[error("Enter a valid number.")]
    InvalidNumber,
}

/// Error type for schema import and export.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The text is not JSON at all.
    #[error("Invalid schema JSON.")]
    InvalidJson(#[source] serde_json::Error),

    /// The JSON is valid but the top-level value is not an array.
    ///
    /// Shown to the user with the same message as malformed JSON.
    #[error("Invalid schema JSON.")]
    NotASequence,

    /// The array has no fields.
    #[error("Schema cannot be empty")]
    Empty,

    /// A record does not have the shape of a field.
    #[error("Invalid field at position {index}: {reason}")]
    InvalidField { index: usize, reason: String },

    /// Two records share an id.
    #[error("Duplicate field id '{0}'")]
    DuplicateId(FieldId),

    /// The field list could not be serialized.
    #[error("Failed to serialize schema: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl SchemaError {
    /// Check if the input was rejected before any field was looked at.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::InvalidJson(_) | Self::NotASequence | Self::Empty)
    }
}
