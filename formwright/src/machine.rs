//! The mode state machine.
//!
//! [`FormState::reduce`] takes the state by value together with one user intent
//! and returns the next state, the side effects the host should perform, and the
//! reason the intent was rejected, if it was.

use formwright_types::{
    FieldId, FieldKind, FieldUpdate, PublishedForm, SchemaError, export_schema, import_schema,
    validate, validate_all,
};

use crate::{FormState, Mode, ModeKind, TakeSession};

/// Alert shown after the schema has been handed to the clipboard.
pub const EXPORTED_MESSAGE: &str = "Schema copied to clipboard.";

/// A user intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append a blank field of the given kind and select it.
    AddField(FieldKind),
    UpdateField { id: FieldId, update: FieldUpdate },
    DeleteField(FieldId),
    /// Move `from` into the position held by `to` (the drag-and-drop contract).
    Reorder { from: FieldId, to: FieldId },
    Select(FieldId),

    /// Go back to the field editor.
    OpenEditor,
    OpenPreview,
    OpenImport,
    /// Preview → schema, if every field has a label.
    Publish,

    /// Replace the import buffer.
    EditImportText(String),
    /// Import → take, if the buffer parses.
    Import,

    /// Change the answer for one field while taking the form.
    SetAnswer { id: FieldId, value: String },
    /// Take → results, if every answer validates.
    Submit,
    /// Results → take, keeping the answers.
    BackToForm,

    /// Copy the schema JSON to the clipboard.
    ExportSchema,
}

impl Action {
    /// Short name for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddField(_) => "add field",
            Self::UpdateField { .. } => "update field",
            Self::DeleteField(_) => "delete field",
            Self::Reorder { .. } => "reorder",
            Self::Select(_) => "select",
            Self::OpenEditor => "open editor",
            Self::OpenPreview => "open preview",
            Self::OpenImport => "open import",
            Self::Publish => "publish",
            Self::EditImportText(_) => "edit import text",
            Self::Import => "import",
            Self::SetAnswer { .. } => "set answer",
            Self::Submit => "submit",
            Self::BackToForm => "back to form",
            Self::ExportSchema => "export schema",
        }
    }
}

/// Something the host has to do on the core's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CopyToClipboard(String),
    /// Show a blocking acknowledgment message.
    Alert(String),
}

/// Why publishing was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    /// These fields have a blank label.
    #[error("Every field needs a label before publishing.")]
    MissingLabels(Vec<FieldId>),
}

/// Why an action was rejected.
#[derive(Debug, thiserror::Error)]
pub enum Rejection {
    /// The action has no meaning in the current mode.
    #[error("'{action}' is not available in {mode} mode")]
    IllegalTransition {
        mode: ModeKind,
        action: &'static str,
    },

    #[error(transparent)]
    Publish(#[from] PublishError),

    /// The import buffer did not parse.
    #[error(transparent)]
    Import(#[from] SchemaError),

    #[error("Could not export schema: {0}")]
    Export(#[source] SchemaError),

    /// At least one answer failed validation.
    #[error("{invalid} field(s) need attention")]
    SubmitRejected { invalid: usize },

    #[error("Unknown field '{0}'")]
    UnknownField(FieldId),
}

impl Rejection {
    /// Check if this is a mode/action mismatch rather than a failed guard.
    pub fn is_illegal_transition(&self) -> bool {
        matches!(self, Self::IllegalTransition { .. })
    }
}

/// Result of reducing one action.
#[derive(Debug)]
pub struct Step {
    /// The next state.
    pub state: FormState,

    /// Side effects, in order.
    pub effects: Vec<Effect>,

    /// Set when the action was refused.
    pub rejection: Option<Rejection>,
}

impl Step {
    /// Check if the action went through.
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

impl FormState {
    /// Apply one action.
    ///
    /// A rejected action leaves fields and mode as they were. The one exception
    /// is a failed submit, which records the validation errors and marks the
    /// session as attempted.
    pub fn reduce(mut self, action: Action) -> Step {
        let from = self.mode.kind();
        let name = action.name();
        let mut effects = Vec::new();

        let outcome = self.apply(action, &mut effects);
        match &outcome {
            Ok(()) => {
                tracing::debug!(%from, to = %self.mode.kind(), action = name, "applied");
            }
            Err(rejection) => {
                tracing::warn!(mode = %from, action = name, %rejection, "rejected");
            }
        }

        Step {
            state: self,
            effects,
            rejection: outcome.err(),
        }
    }

    fn apply(&mut self, action: Action, effects: &mut Vec<Effect>) -> Result<(), Rejection> {
        let illegal = Rejection::IllegalTransition {
            mode: self.mode.kind(),
            action: action.name(),
        };

        match action {
            Action::AddField(kind) => {
                self.add_field_of_kind(kind);
            }
            Action::UpdateField { id, update } => {
                self.update_field(&id, update);
            }
            Action::DeleteField(id) => {
                self.delete_field(&id);
            }
            Action::Reorder { from, to } => {
                self.reorder(&from, &to);
            }
            Action::Select(id) => self.select(id),

            Action::ExportSchema => {
                let json = export_schema(&self.fields).map_err(Rejection::Export)?;
                effects.push(Effect::CopyToClipboard(json));
                effects.push(Effect::Alert(EXPORTED_MESSAGE.to_string()));
            }

            Action::OpenEditor => match self.mode {
                Mode::Edit => return Err(illegal),
                _ => self.mode = Mode::Edit,
            },
            Action::OpenPreview => match self.mode {
                Mode::Edit | Mode::Schema(_) => self.mode = Mode::Preview,
                _ => return Err(illegal),
            },
            Action::OpenImport => match self.mode {
                Mode::Edit => self.mode = Mode::Import(String::new()),
                _ => return Err(illegal),
            },

            Action::Publish => {
                let Mode::Preview = self.mode else {
                    return Err(illegal);
                };
                let missing: Vec<FieldId> = self
                    .fields
                    .iter()
                    .filter(|f| !f.has_label())
                    .map(|f| f.id().clone())
                    .collect();
                if !missing.is_empty() {
                    let err = PublishError::MissingLabels(missing);
                    effects.push(Effect::Alert(err.to_string()));
                    return Err(err.into());
                }
                let published = PublishedForm::new(&self.form_name, &self.fields);
                tracing::info!(form = %self.form_name, questions = published.questions.len(), "published form");
                self.mode = Mode::Schema(published);
            }

            Action::EditImportText(text) => {
                let Mode::Import(buffer) = &mut self.mode else {
                    return Err(illegal);
                };
                *buffer = text;
            }
            Action::Import => {
                let Mode::Import(text) = &self.mode else {
                    return Err(illegal);
                };
                match import_schema(text) {
                    Ok(fields) => {
                        tracing::info!(count = fields.len(), "imported schema");
                        self.selected = fields.first().map(|f| f.id().clone());
                        self.fields = fields;
                        self.mode = Mode::Take(TakeSession::default());
                    }
                    Err(err) => {
                        effects.push(Effect::Alert(err.to_string()));
                        return Err(err.into());
                    }
                }
            }

            Action::SetAnswer { id, value } => {
                let Mode::Take(session) = &mut self.mode else {
                    return Err(illegal);
                };
                let Some(field) = self.fields.iter().find(|f| *f.id() == id) else {
                    return Err(Rejection::UnknownField(id));
                };
                let revalidate = session.attempted_submit || session.errors.contains(&id);
                if revalidate {
                    session.errors.record(&id, validate(field, Some(value.as_str())));
                }
                session.answers.insert(id, value);
            }
            Action::Submit => {
                let Mode::Take(session) = &mut self.mode else {
                    return Err(illegal);
                };
                let errors = validate_all(&self.fields, &session.answers);
                if !errors.is_empty() {
                    let invalid = errors.len();
                    session.errors = errors;
                    session.attempted_submit = true;
                    return Err(Rejection::SubmitRejected { invalid });
                }
                session.errors.clear();
                session.submitted = Some(session.answers.clone());
                tracing::info!(answers = session.answers.len(), "form submitted");
                let session = std::mem::take(session);
                self.mode = Mode::Results(session);
            }
            Action::BackToForm => {
                let Mode::Results(session) = &mut self.mode else {
                    return Err(illegal);
                };
                session.attempted_submit = false;
                session.errors.clear();
                let session = std::mem::take(session);
                self.mode = Mode::Take(session);
            }
        }

        Ok(())
    }
}
