//! The field validation engine.
//!
//! Validation is a pure function of a field and the raw answer typed for it.
//! Rules are checked in a fixed order and the first failing rule wins, so a blank
//! required email reports "required", never "invalid email".

use std::sync::LazyLock;

use regex::Regex;

use crate::{Answers, Field, FieldId, FieldKind, ValidationError};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Validate one answer against its field.
///
/// A missing answer is treated like an empty one.
pub fn validate(field: &Field, raw: Option<&str>) -> Result<(), ValidationError> {
    let value = raw.unwrap_or_default().trim();

    if value.is_empty() {
        return if field.is_required() {
            Err(ValidationError::Required)
        } else {
            Ok(())
        };
    }

    match field.kind() {
        FieldKind::Text => Ok(()),
        FieldKind::Email if EMAIL.is_match(value) => Ok(()),
        FieldKind::Email => Err(ValidationError::InvalidEmail),
        FieldKind::Number => match value.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(()),
            _ => Err(ValidationError::InvalidNumber),
        },
    }
}

/// Validate every field, keeping only the failures.
pub fn validate_all(fields: &[Field], answers: &Answers) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in fields {
        if let Err(err) = validate(field, answers.get(field.id())) {
            errors.insert(field.id().clone(), err);
        }
    }
    errors
}

/// Current validation failures, keyed by field id.
///
/// A field present here is invalid; absence means valid or not yet validated.
/// Entries keep insertion order, which for `validate_all` is field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(FieldId, ValidationError)>,
}

impl ValidationErrors {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any previous one.
    pub fn insert(&mut self, id: FieldId, error: ValidationError) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => *slot = error,
            None => self.entries.push((id, error)),
        }
    }

    /// Clear the error for a field.
    pub fn remove(&mut self, id: &FieldId) -> Option<ValidationError> {
        let pos = self.entries.iter().position(|(existing, _)| existing == id)?;
        Some(self.entries.remove(pos).1)
    }

    /// Get the error for a field.
    pub fn get(&self, id: &FieldId) -> Option<&ValidationError> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, err)| err)
    }

    /// Check if a field currently has an error.
    pub fn contains(&self, id: &FieldId) -> bool {
        self.get(id).is_some()
    }

    /// Store the outcome of validating one field: set on failure, clear on success.
    pub fn record(&mut self, id: &FieldId, outcome: Result<(), ValidationError>) {
        match outcome {
            Ok(()) => {
                self.remove(id);
            }
            Err(err) => self.insert(id.clone(), err),
        }
    }

    /// Iterate over failures in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &ValidationError)> {
        self.entries.iter().map(|(id, err)| (id, err))
    }

    /// Iterate over the ids of invalid fields.
    pub fn ids(&self) -> impl Iterator<Item = &FieldId> {
        self.entries.iter().map(|(id, _)| id)
    }

    /// Get the number of invalid fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if every field is valid.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every error.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(kind: FieldKind) -> Field {
        Field::with_id("f", kind)
    }

    #[test]
    fn required_blank_fails_for_every_kind() {
        for kind in FieldKind::ALL {
            let f = field(kind).required();
            assert_eq!(validate(&f, Some("")), Err(ValidationError::Required));
            assert_eq!(validate(&f, Some("   ")), Err(ValidationError::Required));
            assert_eq!(validate(&f, None), Err(ValidationError::Required));
        }
    }

    #[test]
    fn optional_blank_passes_for_every_kind() {
        for kind in FieldKind::ALL {
            let f = field(kind);
            assert_eq!(validate(&f, Some("")), Ok(()));
            assert_eq!(validate(&f, Some(" \t ")), Ok(()));
            assert_eq!(validate(&f, None), Ok(()));
        }
    }

    #[test]
    fn email_rule() {
        let f = field(FieldKind::Email);
        assert_eq!(validate(&f, Some("a@b.co")), Ok(()));
        assert_eq!(validate(&f, Some("  a@b.co  ")), Ok(()));
        for bad in ["not-an-email", "a@b", "@b.co", "a@.co", "a b@c.de", "a@@b.co"] {
            assert_eq!(
                validate(&f, Some(bad)),
                Err(ValidationError::InvalidEmail),
                "{bad}"
            );
        }
    }

    #[test]
    fn number_rule() {
        let f = field(FieldKind::Number);
        for good in ["42", "-3.5", " 7 ", "1e3", "0.5", "+2"] {
            assert_eq!(validate(&f, Some(good)), Ok(()), "{good}");
        }
        for bad in ["abc", "12abc", "4 2", "inf", "NaN", "1e999"] {
            assert_eq!(
                validate(&f, Some(bad)),
                Err(ValidationError::InvalidNumber),
                "{bad}"
            );
        }
    }

    #[test]
    fn text_accepts_anything_non_blank() {
        let f = field(FieldKind::Text).required();
        assert_eq!(validate(&f, Some("anything at all")), Ok(()));
    }

    #[test]
    fn validate_all_collects_failures_in_field_order() {
        let fields = vec![
            Field::with_id("name", FieldKind::Text).required(),
            Field::with_id("email", FieldKind::Email),
            Field::with_id("age", FieldKind::Number).required(),
        ];
        let answers: Answers = [("email", "nope"), ("age", "12")].into_iter().collect();

        let errors = validate_all(&fields, &answers);
        let ids: Vec<&str> = errors.ids().map(FieldId::as_str).collect();
        assert_eq!(ids, vec!["name", "email"]);
        assert_eq!(
            errors.get(&FieldId::new("name")),
            Some(&ValidationError::Required)
        );
        assert_eq!(
            errors.get(&FieldId::new("email")),
            Some(&ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn record_sets_and_clears() {
        let id = FieldId::new("x");
        let mut errors = ValidationErrors::new();
        errors.record(&id, Err(ValidationError::Required));
        errors.record(&id, Err(ValidationError::InvalidNumber));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&id), Some(&ValidationError::InvalidNumber));

        errors.record(&id, Ok(()));
        assert!(errors.is_empty());
    }
}
