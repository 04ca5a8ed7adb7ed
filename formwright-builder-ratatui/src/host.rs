use formwright::Host;

/// Host for the terminal builder.
///
/// The clipboard lives in memory so that an exported schema can be pasted back
/// into the import buffer; alerts are shown in the status line until the next
/// one replaces them.
#[derive(Debug, Clone, Default)]
pub struct TerminalHost {
    clipboard: Option<String>,
    status: Option<String>,
    alerts: usize,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last copied text.
    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    /// The message currently shown in the status line.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// How many alerts have been raised so far.
    pub fn alert_count(&self) -> usize {
        self.alerts
    }

    /// Replace the status line.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

impl Host for TerminalHost {
    fn copy_to_clipboard(&mut self, text: &str) {
        tracing::debug!(bytes = text.len(), "copied to in-app clipboard");
        self.clipboard = Some(text.to_string());
    }

    fn alert(&mut self, message: &str) {
        tracing::info!(%message, "alert");
        self.alerts += 1;
        self.status = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerts_replace_status() {
        let mut host = TerminalHost::new();
        host.alert("first");
        host.alert("first");
        assert_eq!(host.status(), Some("first"));
        assert_eq!(host.alert_count(), 2);

        host.clear_status();
        assert_eq!(host.status(), None);
    }

    #[test]
    fn clipboard_keeps_latest() {
        let mut host = TerminalHost::new();
        assert_eq!(host.clipboard(), None);
        host.copy_to_clipboard("[1]");
        host.copy_to_clipboard("[2]");
        assert_eq!(host.clipboard(), Some("[2]"));
    }
}
