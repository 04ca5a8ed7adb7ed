//! Key bindings.
//!
//! Translating a key press into an [`Intent`] is a pure function of the key,
//! the form state and the local [`UiState`], so the bindings can be tested
//! without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use formwright::{Action, FieldId, FieldKind, FieldUpdate, FormState, Mode};

/// Which attribute of the selected field the editor panel is focused on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorFocus {
    #[default]
    Label,
    Placeholder,
    Kind,
    Required,
}

impl EditorFocus {
    const ORDER: [EditorFocus; 4] = [Self::Label, Self::Placeholder, Self::Kind, Self::Required];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Focus that belongs to the terminal, not to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub editor_focus: EditorFocus,
    /// Index of the answer box being typed into while taking the form.
    pub answer_focus: usize,
}

impl UiState {
    /// Move focus forward within the current mode.
    pub fn focus_next(&mut self, state: &FormState) {
        match state.mode() {
            Mode::Edit => self.editor_focus = self.editor_focus.next(),
            Mode::Take(_) => {
                let len = state.fields().len().max(1);
                self.answer_focus = (self.answer_focus + 1) % len;
            }
            _ => {}
        }
    }

    /// Move focus backward within the current mode.
    pub fn focus_prev(&mut self, state: &FormState) {
        match state.mode() {
            Mode::Edit => self.editor_focus = self.editor_focus.prev(),
            Mode::Take(_) => {
                let len = state.fields().len().max(1);
                self.answer_focus = (self.answer_focus + len - 1) % len;
            }
            _ => {}
        }
    }

    /// Keep the answer focus inside the field list after it changed.
    pub fn clamp(&mut self, state: &FormState) {
        let last = state.fields().len().saturating_sub(1);
        self.answer_focus = self.answer_focus.min(last);
    }

    /// The field whose answer box has focus.
    pub fn focused_answer<'a>(&self, state: &'a FormState) -> Option<&'a FieldId> {
        state.fields().get(self.answer_focus).map(|f| f.id())
    }
}

/// What a key press asks the terminal loop to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Dispatch(Action),
    FocusNext,
    FocusPrev,
    /// Append the in-app clipboard to the import buffer.
    Paste,
    Quit,
}

/// Map a key press to an intent, or `None` if the key does nothing here.
pub fn intent(key: KeyEvent, state: &FormState, ui: &UiState) -> Option<Intent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    // Bindings that work in every mode
    match key.code {
        KeyCode::Esc => return Some(Intent::Quit),
        KeyCode::F(1) => return Some(Intent::Dispatch(Action::OpenEditor)),
        KeyCode::F(2) => return Some(Intent::Dispatch(Action::OpenPreview)),
        KeyCode::F(3) => return Some(Intent::Dispatch(Action::OpenImport)),
        KeyCode::F(4) => return confirm(state).map(Intent::Dispatch),
        KeyCode::Char('e') if ctrl => return Some(Intent::Dispatch(Action::ExportSchema)),
        KeyCode::Char('n') if ctrl => {
            return Some(Intent::Dispatch(Action::AddField(FieldKind::Text)));
        }
        KeyCode::Char('d') if ctrl => {
            return state
                .selected()
                .map(|id| Intent::Dispatch(Action::DeleteField(id.clone())));
        }
        KeyCode::Up if alt => return reorder(state, -1),
        KeyCode::Down if alt => return reorder(state, 1),
        KeyCode::BackTab => return Some(Intent::FocusPrev),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            return Some(Intent::FocusPrev);
        }
        KeyCode::Tab => return Some(Intent::FocusNext),
        _ => {}
    }

    match state.mode() {
        Mode::Edit => edit_intent(key, state, ui),
        Mode::Preview | Mode::Schema(_) => match key.code {
            KeyCode::Up => select_neighbor(state, -1),
            KeyCode::Down => select_neighbor(state, 1),
            _ => None,
        },
        Mode::Import(text) => match key.code {
            KeyCode::Char('v') if ctrl => Some(Intent::Paste),
            KeyCode::Char(c) if !ctrl => {
                Some(Intent::Dispatch(Action::EditImportText(format!("{text}{c}"))))
            }
            KeyCode::Enter => Some(Intent::Dispatch(Action::EditImportText(format!("{text}\n")))),
            KeyCode::Backspace => {
                let mut text = text.clone();
                text.pop();
                Some(Intent::Dispatch(Action::EditImportText(text)))
            }
            _ => None,
        },
        Mode::Take(session) => {
            let id = ui.focused_answer(state)?;
            let current = session.answers().get(id).unwrap_or_default();
            match key.code {
                KeyCode::Up => Some(Intent::FocusPrev),
                KeyCode::Down | KeyCode::Enter => Some(Intent::FocusNext),
                KeyCode::Char(c) if !ctrl => Some(set_answer(id, format!("{current}{c}"))),
                KeyCode::Backspace => {
                    let mut value = current.to_string();
                    value.pop();
                    Some(set_answer(id, value))
                }
                _ => None,
            }
        }
        Mode::Results(_) => match key.code {
            KeyCode::Enter => Some(Intent::Dispatch(Action::BackToForm)),
            _ => None,
        },
    }
}

/// The action behind the "confirm" key in each mode.
fn confirm(state: &FormState) -> Option<Action> {
    match state.mode() {
        Mode::Preview => Some(Action::Publish),
        Mode::Import(_) => Some(Action::Import),
        Mode::Take(_) => Some(Action::Submit),
        Mode::Results(_) => Some(Action::BackToForm),
        Mode::Edit | Mode::Schema(_) => None,
    }
}

fn edit_intent(key: KeyEvent, state: &FormState, ui: &UiState) -> Option<Intent> {
    match key.code {
        KeyCode::Up => return select_neighbor(state, -1),
        KeyCode::Down => return select_neighbor(state, 1),
        _ if key.modifiers.contains(KeyModifiers::CONTROL) => return None,
        _ => {}
    }

    let field = state.selected_field()?;
    let update = match (ui.editor_focus, key.code) {
        (EditorFocus::Label, KeyCode::Char(c)) => {
            FieldUpdate::Label(format!("{}{c}", field.label()))
        }
        (EditorFocus::Label, KeyCode::Backspace) => {
            let mut label = field.label().to_string();
            label.pop();
            FieldUpdate::Label(label)
        }
        (EditorFocus::Placeholder, KeyCode::Char(c)) => {
            FieldUpdate::Placeholder(format!("{}{c}", field.placeholder()))
        }
        (EditorFocus::Placeholder, KeyCode::Backspace) => {
            let mut placeholder = field.placeholder().to_string();
            placeholder.pop();
            FieldUpdate::Placeholder(placeholder)
        }
        (EditorFocus::Kind, KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter) => {
            FieldUpdate::Kind(cycle_kind(field.kind(), 1))
        }
        (EditorFocus::Kind, KeyCode::Left) => FieldUpdate::Kind(cycle_kind(field.kind(), -1)),
        (EditorFocus::Required, KeyCode::Char(' ') | KeyCode::Enter) => {
            FieldUpdate::Required(!field.is_required())
        }
        _ => return None,
    };

    Some(Intent::Dispatch(Action::UpdateField {
        id: field.id().clone(),
        update,
    }))
}

fn set_answer(id: &FieldId, value: String) -> Intent {
    Intent::Dispatch(Action::SetAnswer {
        id: id.clone(),
        value,
    })
}

fn cycle_kind(kind: FieldKind, step: isize) -> FieldKind {
    let all = FieldKind::ALL;
    let index = all.iter().position(|k| *k == kind).unwrap_or(0) as isize;
    let len = all.len() as isize;
    all[(index + step).rem_euclid(len) as usize]
}

/// The field `step` places away from the selected one, if there is one.
fn neighbor(state: &FormState, step: isize) -> Option<&FieldId> {
    let index = state.selected().and_then(|id| state.position(id))?;
    let target = index.checked_add_signed(step)?;
    state.fields().get(target).map(|f| f.id())
}

fn select_neighbor(state: &FormState, step: isize) -> Option<Intent> {
    neighbor(state, step).map(|id| Intent::Dispatch(Action::Select(id.clone())))
}

fn reorder(state: &FormState, step: isize) -> Option<Intent> {
    let from = state.selected()?.clone();
    let to = neighbor(state, step)?.clone();
    Some(Intent::Dispatch(Action::Reorder { from, to }))
}
