use serde::{Deserialize, Serialize};

use crate::{Field, FieldKind, SchemaError};

/// The named, id-free view of a form shown after publishing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedForm {
    /// The form title.
    pub form_name: String,

    /// One entry per field, in display order.
    pub questions: Vec<PublishedQuestion>,
}

/// One question of a published form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedQuestion {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    pub placeholder: String,
    pub required: bool,
}

impl PublishedForm {
    /// Build the published view of a field list.
    ///
    /// Labels are trimmed; checking that none is blank is the caller's job.
    pub fn new(form_name: impl Into<String>, fields: &[Field]) -> Self {
        Self {
            form_name: form_name.into(),
            questions: fields.iter().map(PublishedQuestion::from).collect(),
        }
    }

    /// Render as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        serde_json::to_string_pretty(self).map_err(SchemaError::Serialize)
    }
}

impl From<&Field> for PublishedQuestion {
    fn from(field: &Field) -> Self {
        Self {
            kind: field.kind(),
            label: field.label().trim().to_string(),
            placeholder: field.placeholder().to_string(),
            required: field.is_required(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_form_omits_ids() {
        let fields = vec![
            Field::with_id("secret-id", FieldKind::Email)
                .with_label(" Email ")
                .required(),
        ];
        let published = PublishedForm::new("Signup", &fields);
        assert_eq!(published.questions[0].label, "Email");

        let json = published.to_json_pretty().unwrap();
        assert!(json.contains("\"formName\": \"Signup\""));
        assert!(json.contains("\"type\": \"email\""));
        assert!(!json.contains("secret-id"));
    }
}
