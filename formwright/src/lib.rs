//! # formwright
//!
//! Build forms, preview them, publish them and take them. Presentation-agnostic.
//!
//! The crate holds the whole editing session in one explicit [`FormState`] value.
//! Every user intent is an [`Action`]; [`FormState::reduce`] turns a state and an
//! action into the next state plus the [`Effect`]s a front end has to carry out
//! (clipboard writes, alerts). [`Session`] pairs a state with a [`Host`] that
//! performs those effects.
//!
//! ## Usage
//!
//! ```rust
//! use formwright::{Action, FieldKind, FieldUpdate, FormState, ModeKind, Session, TestHost};
//!
//! let mut session = Session::new(FormState::new(), TestHost::new());
//!
//! session.dispatch(Action::AddField(FieldKind::Email)).unwrap();
//! let id = session.state().selected().cloned().unwrap();
//! session
//!     .dispatch(Action::UpdateField {
//!         id,
//!         update: FieldUpdate::Label("Email".into()),
//!     })
//!     .unwrap();
//!
//! session.dispatch(Action::OpenPreview).unwrap();
//! session.dispatch(Action::Publish).unwrap();
//! assert_eq!(session.state().mode().kind(), ModeKind::Schema);
//! ```
//!
//! ## Modes
//!
//! - `Edit` - configure the selected field
//! - `Preview` - see the form; `Publish` moves on to `Schema` once every field
//!   has a label
//! - `Import` - paste a schema; `Import` moves on to `Take` if it parses
//! - `Take` - answer the form; `Submit` moves on to `Results` once every answer
//!   validates
//! - `Results` - see the submitted answers; `BackToForm` returns to `Take`
//!
//! ## Front ends
//!
//! - `formwright-builder-ratatui` - terminal form builder

// Re-export all types from formwright-types
pub use formwright_types::*;

mod mode;
pub use mode::{Mode, ModeKind, TakeSession};

mod state;
pub use state::{DEFAULT_FORM_NAME, FormState, StateError};

mod machine;
pub use machine::{Action, EXPORTED_MESSAGE, Effect, PublishError, Rejection, Step};

mod host;
pub use host::{Host, Session};

// Test host for driving the state machine without user interaction
mod test_host;
pub use test_host::TestHost;
