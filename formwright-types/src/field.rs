use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FieldId;

/// A single question in a form.
///
/// Serializes to the interchange record
/// `{ "id", "type", "label", "placeholder", "required" }` in that key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Stable identity, used as the key for answers and errors.
    id: FieldId,

    /// The input kind (determines the validation rule).
    #[serde(rename = "type")]
    kind: FieldKind,

    /// The text shown next to the input.
    label: String,

    /// Hint text shown in the empty input.
    placeholder: String,

    /// Whether a blank answer is rejected.
    required: bool,
}

impl Field {
    /// Create a blank, optional field of the given kind with a fresh id.
    pub fn new(kind: FieldKind) -> Self {
        Self::with_id(FieldId::generate(), kind)
    }

    /// Create a blank, optional field with a known id.
    pub fn with_id(id: impl Into<FieldId>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            kind,
            label: String::new(),
            placeholder: String::new(),
            required: false,
        }
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Get the field id.
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    /// Get the field kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the placeholder.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Check if a blank answer is rejected.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Check if the label has visible content (publishing requires this).
    pub fn has_label(&self) -> bool {
        !self.label.trim().is_empty()
    }

    /// Change exactly one attribute.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Kind(kind) => self.kind = kind,
            FieldUpdate::Label(label) => self.label = label,
            FieldUpdate::Placeholder(placeholder) => self.placeholder = placeholder,
            FieldUpdate::Required(required) => self.required = required,
        }
    }
}

/// The kind of input a field collects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text, no format check.
    #[default]
    Text,

    /// An email address (`local@domain.tld`).
    Email,

    /// A finite number, integer or decimal.
    Number,
}

impl FieldKind {
    /// All kinds, in the order they are offered to the user.
    pub const ALL: [FieldKind; 3] = [FieldKind::Text, FieldKind::Email, FieldKind::Number];

    /// The interchange name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "email" => Ok(Self::Email),
            "number" => Ok(Self::Number),
            other => Err(format!("unknown field type '{other}'")),
        }
    }
}

/// A change to one attribute of a field.
///
/// Ids are immutable, so there is no variant for them.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Kind(FieldKind),
    Label(String),
    Placeholder(String),
    Required(bool),
}
