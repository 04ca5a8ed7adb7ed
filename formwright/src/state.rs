use std::collections::HashSet;

use formwright_types::{Answers, Field, FieldId, FieldKind, FieldUpdate, ValidationErrors};

use crate::{Mode, TakeSession};

/// Title written into published forms unless another one is set.
pub const DEFAULT_FORM_NAME: &str = "My Form";

/// Error type for building a state from an existing field list.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("A form needs at least one field")]
    NoFields,

    #[error("Field id must not be blank")]
    BlankId,

    #[error("Duplicate field id '{0}'")]
    DuplicateId(FieldId),
}

/// The whole editing session: fields, selection and the active mode.
///
/// `fields` is never empty and never holds two fields with the same id.
/// All changes go through the store operations below or through
/// [`FormState::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub(crate) fields: Vec<Field>,
    pub(crate) selected: Option<FieldId>,
    pub(crate) mode: Mode,
    pub(crate) form_name: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Start editing a form with a single "Full Name" field.
    pub fn new() -> Self {
        let starter = Field::new(FieldKind::Text)
            .with_label("Full Name")
            .with_placeholder("Enter your full name")
            .required();
        Self {
            selected: Some(starter.id().clone()),
            fields: vec![starter],
            mode: Mode::Edit,
            form_name: DEFAULT_FORM_NAME.to_string(),
        }
    }

    /// Start editing an existing field list, selecting its first field.
    pub fn with_fields(fields: Vec<Field>) -> Result<Self, StateError> {
        {
            let mut seen = HashSet::new();
            for field in &fields {
                if field.id().is_blank() {
                    return Err(StateError::BlankId);
                }
                if !seen.insert(field.id()) {
                    return Err(StateError::DuplicateId(field.id().clone()));
                }
            }
        }
        let first = fields.first().ok_or(StateError::NoFields)?.id().clone();
        Ok(Self {
            selected: Some(first),
            fields,
            mode: Mode::Edit,
            form_name: DEFAULT_FORM_NAME.to_string(),
        })
    }

    /// Set the title used when publishing.
    pub fn with_form_name(mut self, name: impl Into<String>) -> Self {
        self.form_name = name.into();
        self
    }

    // === Read access ===

    /// Fields in display order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field by id.
    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id() == id)
    }

    /// Position of a field in display order.
    pub fn position(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == id)
    }

    /// Id of the field open for editing.
    pub fn selected(&self) -> Option<&FieldId> {
        self.selected.as_ref()
    }

    /// The field open for editing, if the selection points at one.
    pub fn selected_field(&self) -> Option<&Field> {
        self.selected.as_ref().and_then(|id| self.field(id))
    }

    /// The active mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Title used when publishing.
    pub fn form_name(&self) -> &str {
        &self.form_name
    }

    /// Answers, while taking the form or looking at results.
    pub fn answers(&self) -> Option<&Answers> {
        self.mode.session().map(TakeSession::answers)
    }

    /// Validation errors, while taking the form or looking at results.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.mode.session().map(TakeSession::errors)
    }

    /// Whether a submit has failed in the current take session.
    pub fn attempted_submit(&self) -> bool {
        self.mode.session().is_some_and(TakeSession::attempted_submit)
    }

    /// Answers committed by the last successful submit.
    pub fn submitted(&self) -> Option<&Answers> {
        self.mode.session().and_then(TakeSession::submitted)
    }

    /// The raw import buffer, in import mode.
    pub fn import_text(&self) -> Option<&str> {
        match &self.mode {
            Mode::Import(text) => Some(text),
            _ => None,
        }
    }

    // === Store operations ===

    /// Append a blank text field and select it.
    pub fn add_field(&mut self) -> FieldId {
        self.add_field_of_kind(FieldKind::default())
    }

    /// Append a blank field of the given kind and select it.
    pub fn add_field_of_kind(&mut self, kind: FieldKind) -> FieldId {
        let field = Field::new(kind);
        let id = field.id().clone();
        self.fields.push(field);
        self.selected = Some(id.clone());
        tracing::debug!(field = %id, %kind, "added field");
        id
    }

    /// Change one attribute of a field. Returns `false` if no field has that id.
    ///
    /// Answers are not re-validated here, even while taking the form.
    pub fn update_field(&mut self, id: &FieldId, update: FieldUpdate) -> bool {
        let Some(field) = self.fields.iter_mut().find(|f| f.id() == id) else {
            tracing::debug!(field = %id, "update for unknown field ignored");
            return false;
        };
        tracing::debug!(field = %id, ?update, "updated field");
        field.apply(update);
        true
    }

    /// Remove a field and select its previous sibling (or the new first field).
    ///
    /// Refuses to remove the last remaining field. Returns `false` if nothing was
    /// removed.
    pub fn delete_field(&mut self, id: &FieldId) -> bool {
        if self.fields.len() <= 1 {
            tracing::debug!(field = %id, "refusing to delete the only field");
            return false;
        }
        let Some(index) = self.position(id) else {
            return false;
        };

        self.fields.remove(index);
        self.selected = self
            .fields
            .get(index.saturating_sub(1))
            .map(|f| f.id().clone());
        if let Some(session) = self.mode.session_mut() {
            session.forget(id);
        }
        tracing::debug!(field = %id, index, "deleted field");
        true
    }

    /// Move `from` into the position currently held by `to`, keeping the relative
    /// order of every other field.
    ///
    /// Returns `false` when the ids are equal or either is unknown.
    pub fn reorder(&mut self, from: &FieldId, to: &FieldId) -> bool {
        if from == to {
            return false;
        }
        let (Some(old_index), Some(new_index)) = (self.position(from), self.position(to)) else {
            return false;
        };

        let field = self.fields.remove(old_index);
        self.fields.insert(new_index, field);
        tracing::debug!(field = %from, old_index, new_index, "reordered field");
        true
    }

    /// Open a field for editing. The id is not checked.
    pub fn select(&mut self, id: FieldId) {
        self.selected = Some(id);
    }
}
