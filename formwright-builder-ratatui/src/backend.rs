//! Terminal loop for the form builder.

use std::io::{self, Stdout};
use std::path::{Path, PathBuf};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use formwright::{Action, Field, FormState, Mode, SchemaError, Session, StateError, import_schema};
use ratatui::{Terminal, prelude::CrosstermBackend};
use thiserror::Error;

use crate::config::{BuilderConfig, Theme};
use crate::host::TerminalHost;
use crate::keymap::{Intent, UiState, intent};
use crate::view::{Screen, draw};

/// Error type for the terminal builder.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The startup schema file could not be read.
    #[error("Could not read schema file {}: {source}", path.display())]
    SchemaFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The startup schema did not parse.
    #[error("Invalid startup schema: {0}")]
    Schema(#[from] SchemaError),

    /// The startup fields do not form a valid store.
    #[error("Invalid startup fields: {0}")]
    State(#[from] StateError),
}

/// Interactive form builder in the terminal.
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    config: BuilderConfig,
}

impl FormBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from a full configuration.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// Set the title shown at the top of the screen.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    /// Build the state the session starts from.
    ///
    /// Explicit fields win over a schema file; with neither, the store starts
    /// with its single starter field.
    pub fn initial_state(&self) -> Result<FormState, BuilderError> {
        let state = match (&self.config.fields, &self.config.schema) {
            (Some(fields), _) => FormState::with_fields(fields.clone())?,
            (None, Some(path)) => FormState::with_fields(load_schema(path)?)?,
            (None, None) => FormState::new(),
        };
        Ok(state.with_form_name(self.config.form_name.clone()))
    }

    /// Run the builder until the user quits, returning the final state.
    pub fn run(&self) -> Result<FormState, BuilderError> {
        let state = self.initial_state()?;
        tracing::info!(fields = state.fields().len(), "starting form builder");

        let mut terminal = self.setup_terminal()?;
        let outcome = self.event_loop(&mut terminal, Session::new(state, TerminalHost::new()));
        self.restore_terminal(&mut terminal)?;

        let (state, _host) = outcome?.into_parts();
        tracing::info!(mode = %state.mode().kind(), "form builder closed");
        Ok(state)
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        mut session: Session<TerminalHost>,
    ) -> Result<Session<TerminalHost>, BuilderError> {
        let mut ui = UiState::default();

        loop {
            terminal.draw(|frame| {
                let screen = Screen {
                    title: &self.config.title,
                    theme: &self.config.theme,
                    ui: &ui,
                    status: session.host().status(),
                };
                draw(frame, session.state(), &screen);
            })?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match intent(key, session.state(), &ui) {
                Some(Intent::Quit) => break,
                Some(Intent::FocusNext) => ui.focus_next(session.state()),
                Some(Intent::FocusPrev) => ui.focus_prev(session.state()),
                Some(Intent::Paste) => paste(&mut session),
                Some(Intent::Dispatch(action)) => dispatch(&mut session, action),
                None => {}
            }
            ui.clamp(session.state());
        }

        Ok(session)
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, BuilderError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), BuilderError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// Read and parse a schema file.
pub fn load_schema(path: &Path) -> Result<Vec<Field>, BuilderError> {
    let text = std::fs::read_to_string(path).map_err(|source| BuilderError::SchemaFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(import_schema(&text)?)
}

/// Dispatch an action, surfacing refusals in the status line.
///
/// Rejections that already raised an alert keep that alert.
fn dispatch(session: &mut Session<TerminalHost>, action: Action) {
    let clears_status = !matches!(action, Action::EditImportText(_) | Action::SetAnswer { .. });
    let alerts_before = session.host().alert_count();

    let outcome = session.dispatch(action);
    let alerted = session.host().alert_count() != alerts_before;
    match outcome {
        Ok(()) => {
            if clears_status && !alerted {
                session.host_mut().clear_status();
            }
        }
        Err(rejection) => {
            tracing::debug!(%rejection, "action refused");
            if !alerted {
                session.host_mut().set_status(rejection.to_string());
            }
        }
    }
}

/// Append the in-app clipboard to the import buffer.
fn paste(session: &mut Session<TerminalHost>) {
    let Mode::Import(text) = session.state().mode() else {
        return;
    };
    let Some(clip) = session.host().clipboard() else {
        session.host_mut().set_status("Clipboard is empty.");
        return;
    };
    let combined = format!("{text}{clip}");
    dispatch(session, Action::EditImportText(combined));
}
