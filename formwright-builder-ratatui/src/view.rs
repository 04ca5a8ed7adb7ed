//! Rendering.
//!
//! `draw` paints one frame from the form state; the label and row helpers are
//! kept separate so their wording can be tested.

use formwright::{Field, FormState, Mode, PublishedForm, TakeSession};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table, Wrap},
};

use crate::config::Theme;
use crate::keymap::{EditorFocus, UiState};

/// Sidebar text for a field whose label is blank.
pub const NEW_FIELD_LABEL: &str = "New Field";

/// Preview text for a field whose label is blank.
pub const UNTITLED_FIELD_LABEL: &str = "Untitled Field";

/// Label shown in the field list.
pub fn sidebar_label(field: &Field) -> String {
    let label = if field.has_label() {
        field.label().trim()
    } else {
        NEW_FIELD_LABEL
    };
    format!("{label} ({})", field.kind())
}

/// Label shown above an input box, with `*` for required fields.
pub fn preview_label(field: &Field) -> String {
    let label = if field.has_label() {
        field.label().trim()
    } else {
        UNTITLED_FIELD_LABEL
    };
    if field.is_required() {
        format!("{label} *")
    } else {
        label.to_string()
    }
}

/// One `(label, answer)` row per field, in field order.
///
/// Unanswered fields show an empty answer.
pub fn result_rows(fields: &[Field], session: &TakeSession) -> Vec<(String, String)> {
    let answers = session.submitted().unwrap_or(session.answers());
    fields
        .iter()
        .map(|field| {
            let value = answers.get(field.id()).unwrap_or_default();
            (preview_label(field), value.to_string())
        })
        .collect()
}

/// Everything `draw` needs besides the form state.
pub struct Screen<'a> {
    pub title: &'a str,
    pub theme: &'a Theme,
    pub ui: &'a UiState,
    pub status: Option<&'a str>,
}

pub fn draw(frame: &mut Frame, state: &FormState, screen: &Screen) {
    let theme = screen.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Body
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    let title = Paragraph::new(format!(
        "{} - {} [{}]",
        screen.title,
        state.form_name(),
        state.mode().kind()
    ))
    .style(
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);

    draw_sidebar(frame, state, body[0], theme);

    match state.mode() {
        Mode::Edit => draw_editor(frame, state, screen.ui, body[1], theme),
        Mode::Preview => draw_preview(frame, state, body[1], theme),
        Mode::Schema(published) => draw_schema(frame, published, body[1], theme),
        Mode::Import(text) => draw_import(frame, text, body[1], theme),
        Mode::Take(session) => draw_take(frame, state, session, screen.ui, body[1], theme),
        Mode::Results(session) => draw_results(frame, state, session, body[1], theme),
    }

    let status = Paragraph::new(screen.status.unwrap_or_default())
        .style(Style::default().fg(theme.highlight));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help_text(state)).style(Style::default().fg(theme.border));
    frame.render_widget(help, chunks[3]);
}

fn help_text(state: &FormState) -> &'static str {
    match state.mode() {
        Mode::Edit => {
            "F2: Preview  F3: Import  Tab: Attribute  ↑/↓: Select  Alt+↑/↓: Move  Ctrl+N/D: Add/Delete  Ctrl+E: Export  Esc: Quit"
        }
        Mode::Preview => "F1: Edit  F4: Publish  Ctrl+E: Export  Esc: Quit",
        Mode::Schema(_) => "F1: Edit  F2: Preview  Ctrl+E: Export  Esc: Quit",
        Mode::Import(_) => "F1: Edit  F4: Import  Ctrl+V: Paste  Esc: Quit",
        Mode::Take(_) => "F1: Edit  F4: Submit  Tab/↑/↓: Next answer  Esc: Quit",
        Mode::Results(_) => "F1: Edit  F4/Enter: Back to form  Esc: Quit",
    }
}

fn bordered<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
}

fn draw_sidebar(frame: &mut Frame, state: &FormState, area: Rect, theme: &Theme) {
    let items: Vec<ListItem> = state
        .fields()
        .iter()
        .map(|field| {
            let style = if state.selected() == Some(field.id()) {
                Style::default()
                    .fg(theme.highlight)
                    .bg(theme.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(sidebar_label(field)).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(bordered(" Fields ", theme)), area);
}

fn draw_editor(frame: &mut Frame, state: &FormState, ui: &UiState, area: Rect, theme: &Theme) {
    let Some(field) = state.selected_field() else {
        let hint = Paragraph::new("Select a field to edit it.")
            .style(Style::default().fg(theme.muted))
            .block(bordered(" Editor ", theme));
        frame.render_widget(hint, area);
        return;
    };

    let row = |focus: EditorFocus, name: &'static str, value: String| {
        let focused = ui.editor_focus == focus;
        let marker = if focused { "> " } else { "  " };
        let style = if focused {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        Line::from(vec![
            Span::styled(marker, style),
            Span::styled(format!("{name:<12}"), Style::default().fg(theme.primary)),
            Span::styled(value, style),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("id: {}", field.id()),
            Style::default().fg(theme.muted),
        )),
        Line::default(),
        row(EditorFocus::Label, "Label", field.label().to_string()),
        row(
            EditorFocus::Placeholder,
            "Placeholder",
            field.placeholder().to_string(),
        ),
        row(EditorFocus::Kind, "Type", format!("< {} >", field.kind())),
        row(
            EditorFocus::Required,
            "Required",
            if field.is_required() { "[x]" } else { "[ ]" }.to_string(),
        ),
    ];

    frame.render_widget(Paragraph::new(lines).block(bordered(" Editor ", theme)), area);
}

fn draw_preview(frame: &mut Frame, state: &FormState, area: Rect, theme: &Theme) {
    let mut lines = Vec::new();
    for field in state.fields() {
        lines.push(Line::from(Span::styled(
            preview_label(field),
            Style::default().fg(theme.primary),
        )));
        lines.push(Line::from(Span::styled(
            format!("  [{}]", field.placeholder()),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines).block(bordered(" Preview ", theme)), area);
}

fn draw_schema(frame: &mut Frame, published: &PublishedForm, area: Rect, theme: &Theme) {
    let text = match published.to_json_pretty() {
        Ok(json) => json,
        Err(err) => err.to_string(),
    };
    let schema = Paragraph::new(text)
        .style(Style::default().fg(theme.success))
        .block(bordered(" Published ", theme));
    frame.render_widget(schema, area);
}

fn draw_import(frame: &mut Frame, text: &str, area: Rect, theme: &Theme) {
    let buffer = Paragraph::new(format!("{text}_"))
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: false })
        .block(bordered(" Paste schema JSON ", theme));
    frame.render_widget(buffer, area);
}

fn draw_take(
    frame: &mut Frame,
    state: &FormState,
    session: &TakeSession,
    ui: &UiState,
    area: Rect,
    theme: &Theme,
) {
    let block = bordered(" Take ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            state
                .fields()
                .iter()
                .map(|_| Constraint::Length(4))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(inner);

    for (index, field) in state.fields().iter().enumerate() {
        let focused = ui.answer_focus == index;
        let error = session.errors().get(field.id());
        let border = match (focused, error) {
            (_, Some(_)) => theme.error,
            (true, None) => theme.primary,
            (false, None) => theme.border,
        };

        let value = session.answers().get(field.id()).unwrap_or_default();
        let text = if value.is_empty() && !focused {
            Span::styled(field.placeholder(), Style::default().fg(theme.muted))
        } else if focused {
            Span::styled(format!("{value}_"), Style::default().fg(theme.text))
        } else {
            Span::styled(value, Style::default().fg(theme.text))
        };

        let mut lines = vec![Line::from(text)];
        if let Some(error) = error {
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(theme.error),
            )));
        }

        let title = preview_label(field);
        let input = Paragraph::new(lines).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(input, rows[index]);
    }
}

fn draw_results(
    frame: &mut Frame,
    state: &FormState,
    session: &TakeSession,
    area: Rect,
    theme: &Theme,
) {
    let rows: Vec<Row> = result_rows(state.fields(), session)
        .into_iter()
        .map(|(label, value)| Row::new(vec![label, value]).style(Style::default().fg(theme.text)))
        .collect();

    let table = Table::new(rows, [Constraint::Percentage(40), Constraint::Percentage(60)])
        .header(
            Row::new(vec!["Field", "Answer"]).style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .block(bordered(" Results ", theme));
    frame.render_widget(table, area);
}
