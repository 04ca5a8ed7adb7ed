use std::path::PathBuf;

use formwright::{DEFAULT_FORM_NAME, Field};
use ratatui::style::Color;

/// Color theme for the terminal builder.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub text: Color,
    pub muted: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    pub selected_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            text: Color::White,
            muted: Color::DarkGray,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
            selected_bg: Color::DarkGray,
        }
    }
}

/// Startup settings for [`crate::FormBuilder`].
///
/// Explicit fields take precedence over a schema file.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Title shown at the top of the screen.
    pub title: String,
    /// Color theme for the UI.
    pub theme: Theme,
    /// Name written into published forms.
    pub form_name: String,
    /// Fields to start with instead of the single starter field.
    pub fields: Option<Vec<Field>>,
    /// Schema file to load the fields from.
    pub schema: Option<PathBuf>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            title: "Form Builder".to_string(),
            theme: Theme::default(),
            form_name: DEFAULT_FORM_NAME.to_string(),
            fields: None,
            schema: None,
        }
    }
}

impl BuilderConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title shown at the top of the screen.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the name written into published forms.
    pub fn with_form_name(mut self, name: impl Into<String>) -> Self {
        self.form_name = name.into();
        self
    }

    /// Start from an existing field list.
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Load the starting fields from a schema file.
    pub fn with_schema(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema = Some(path.into());
        self
    }
}
