use std::fmt;

use formwright_types::{Answers, FieldId, PublishedForm, ValidationErrors};

/// The active top-level view, carrying the data only that view needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Configure the selected field.
    Edit,

    /// Read-only rendering of the form as a respondent would see it.
    Preview,

    /// The form as it was published.
    Schema(PublishedForm),

    /// Paste a schema; holds the raw text buffer.
    Import(String),

    /// Fill in the form.
    Take(TakeSession),

    /// Look at what was submitted.
    Results(TakeSession),
}

impl Mode {
    /// The fieldless tag of this mode.
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Edit => ModeKind::Edit,
            Self::Preview => ModeKind::Preview,
            Self::Schema(_) => ModeKind::Schema,
            Self::Import(_) => ModeKind::Import,
            Self::Take(_) => ModeKind::Take,
            Self::Results(_) => ModeKind::Results,
        }
    }

    /// The take session, in take and results modes.
    pub fn session(&self) -> Option<&TakeSession> {
        match self {
            Self::Take(session) | Self::Results(session) => Some(session),
            _ => None,
        }
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut TakeSession> {
        match self {
            Self::Take(session) | Self::Results(session) => Some(session),
            _ => None,
        }
    }
}

/// Mode tags, for logging, display and comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Edit,
    Preview,
    Schema,
    Import,
    Take,
    Results,
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Edit => "edit",
            Self::Preview => "preview",
            Self::Schema => "schema",
            Self::Import => "import",
            Self::Take => "take",
            Self::Results => "results",
        };
        f.write_str(name)
    }
}

/// State of one respondent filling in the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TakeSession {
    pub(crate) answers: Answers,
    pub(crate) errors: ValidationErrors,
    pub(crate) attempted_submit: bool,
    pub(crate) submitted: Option<Answers>,
}

impl TakeSession {
    /// Raw answers typed so far.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Current validation failures.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Whether a submit has failed since the session started (or since going back
    /// from results). Once set, every answer change is validated immediately.
    pub fn attempted_submit(&self) -> bool {
        self.attempted_submit
    }

    /// The answers committed by the last successful submit.
    pub fn submitted(&self) -> Option<&Answers> {
        self.submitted.as_ref()
    }

    pub(crate) fn forget(&mut self, id: &FieldId) {
        self.answers.remove(id);
        self.errors.remove(id);
    }
}
