//! JSON interchange for field lists.
//!
//! The interchange value is a bare JSON array of field records; there is no
//! envelope and no version key.

use std::collections::HashSet;

use serde_json::Value;

use crate::{Field, SchemaError};

/// Serialize fields as indented JSON, one record per field.
pub fn export_schema(fields: &[Field]) -> Result<String, SchemaError> {
    serde_json::to_string_pretty(fields).map_err(SchemaError::Serialize)
}

/// Parse user-supplied text into a field list.
///
/// Structural checks run first (JSON, array, non-empty), then every record is
/// checked for the shape of a field and for a unique, non-blank id. Nothing is
/// returned unless the whole input is acceptable.
pub fn import_schema(text: &str) -> Result<Vec<Field>, SchemaError> {
    let value: Value = serde_json::from_str(text).map_err(SchemaError::InvalidJson)?;

    let Value::Array(records) = value else {
        return Err(SchemaError::NotASequence);
    };
    if records.is_empty() {
        return Err(SchemaError::Empty);
    }

    let mut seen = HashSet::new();
    let mut fields = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let field: Field =
            serde_json::from_value(record).map_err(|err| SchemaError::InvalidField {
                index,
                reason: err.to_string(),
            })?;

        if field.id().is_blank() {
            return Err(SchemaError::InvalidField {
                index,
                reason: "id must not be blank".to_string(),
            });
        }
        if !seen.insert(field.id().clone()) {
            return Err(SchemaError::DuplicateId(field.id().clone()));
        }
        fields.push(field);
    }

    tracing::debug!(count = fields.len(), "parsed schema");
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{FieldId, FieldKind};

    fn sample() -> Vec<Field> {
        vec![
            Field::with_id("name", FieldKind::Text)
                .with_label("Full Name")
                .with_placeholder("Jane Doe")
                .required(),
            Field::with_id("mail", FieldKind::Email).with_label("Email"),
        ]
    }

    #[test]
    fn export_is_indented_and_ordered() {
        let json = export_schema(&sample()[1..]).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"id\": \"mail\",\n    \"type\": \"email\",\n    \"label\": \"Email\",\n    \"placeholder\": \"\",\n    \"required\": false\n  }\n]"
        );
    }

    #[test]
    fn export_then_import_keeps_fields() {
        let fields = sample();
        let json = export_schema(&fields).unwrap();
        assert_eq!(import_schema(&json).unwrap(), fields);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            import_schema("[{"),
            Err(SchemaError::InvalidJson(_))
        ));
        assert!(matches!(import_schema(""), Err(SchemaError::InvalidJson(_))));
    }

    #[test]
    fn rejects_non_array() {
        let err = import_schema("{}").unwrap_err();
        assert!(matches!(err, SchemaError::NotASequence));
        assert_eq!(err.to_string(), "Invalid schema JSON.");
        assert!(matches!(
            import_schema("\"fields\""),
            Err(SchemaError::NotASequence)
        ));
    }

    #[test]
    fn rejects_empty_array() {
        let err = import_schema("[]").unwrap_err();
        assert!(matches!(err, SchemaError::Empty));
        assert_eq!(err.to_string(), "Schema cannot be empty");
    }

    #[test]
    fn rejects_records_of_the_wrong_shape() {
        let cases = [
            r#"[{"type":"text","label":"","placeholder":"","required":false}]"#,
            r#"[{"id":"a","type":"date","label":"","placeholder":"","required":false}]"#,
            r#"[{"id":"a","type":"text","label":3,"placeholder":"","required":false}]"#,
            r#"[{"id":"a","type":"text","label":"","placeholder":"","required":"yes"}]"#,
            r#"[{"id":"a","type":"text","label":"","required":false}]"#,
            r#"[1]"#,
        ];
        for case in cases {
            assert!(
                matches!(
                    import_schema(case),
                    Err(SchemaError::InvalidField { index: 0, .. })
                ),
                "{case}"
            );
        }
    }

    #[test]
    fn reports_position_of_bad_record() {
        let text = r#"[
            {"id":"a","type":"text","label":"A","placeholder":"","required":false},
            {"id":"b","type":"text","label":"B","placeholder":""}
        ]"#;
        let err = import_schema(text).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidField { index: 1, .. }));
        assert!(!err.is_structural());
    }

    #[test]
    fn rejects_blank_and_duplicate_ids() {
        let blank = r#"[{"id":"  ","type":"text","label":"","placeholder":"","required":false}]"#;
        assert!(matches!(
            import_schema(blank),
            Err(SchemaError::InvalidField { index: 0, .. })
        ));

        let dup = r#"[
            {"id":"a","type":"text","label":"","placeholder":"","required":false},
            {"id":"a","type":"email","label":"","placeholder":"","required":true}
        ]"#;
        match import_schema(dup) {
            Err(SchemaError::DuplicateId(id)) => assert_eq!(id, FieldId::new("a")),
            other => panic!("expected duplicate id, got {other:?}"),
        }
    }

    #[test]
    fn ignores_unknown_keys() {
        let text = r#"[{"id":"a","type":"number","label":"Age","placeholder":"","required":true,"order":1}]"#;
        let fields = import_schema(text).unwrap();
        assert_eq!(fields[0].kind(), FieldKind::Number);
        assert!(fields[0].is_required());
    }
}
