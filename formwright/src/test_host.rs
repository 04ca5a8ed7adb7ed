//! Test host for driving a form builder without a user interface.
//!
//! `TestHost` records every clipboard write and alert so tests can assert on
//! them.
//!
//! # Example
//!
//! ```rust
//! use formwright::{Action, FormState, Session, TestHost};
//!
//! let mut session = Session::new(FormState::new(), TestHost::new());
//! session.dispatch(Action::ExportSchema).unwrap();
//!
//! assert!(session.host().clipboard().unwrap().starts_with('['));
//! assert_eq!(session.host().last_alert(), Some("Schema copied to clipboard."));
//! ```

use crate::Host;

/// A host that remembers what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct TestHost {
    clipboard: Vec<String>,
    alerts: Vec<String>,
}

impl TestHost {
    /// Create a new host with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent clipboard contents.
    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.last().map(String::as_str)
    }

    /// Every clipboard write, oldest first.
    pub fn clipboard_history(&self) -> &[String] {
        &self.clipboard
    }

    /// Every alert, oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// The most recent alert.
    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

impl Host for TestHost {
    fn copy_to_clipboard(&mut self, text: &str) {
        self.clipboard.push(text.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, FormState, ModeKind, Rejection, Session};

    #[test]
    fn records_publish_alert() {
        let mut state = FormState::new();
        let id = state.add_field();
        state.select(id);

        let mut session = Session::new(state, TestHost::new());
        session.dispatch(Action::OpenPreview).unwrap();
        let err = session.dispatch(Action::Publish).unwrap_err();

        assert!(matches!(err, Rejection::Publish(_)));
        assert_eq!(session.state().mode().kind(), ModeKind::Preview);
        assert_eq!(session.host().alerts().len(), 1);
        assert!(session.host().clipboard().is_none());
    }

    #[test]
    fn host_by_mutable_reference() {
        let mut host = TestHost::new();
        {
            let mut session = Session::new(FormState::new(), &mut host);
            session.dispatch(Action::ExportSchema).unwrap();
        }
        assert_eq!(host.clipboard_history().len(), 1);
    }
}
