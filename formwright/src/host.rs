use crate::{Action, Effect, FormState, Rejection};

/// Trait for the environment a form builder runs in.
///
/// Hosts receive the side effects the state machine asks for. Both calls are
/// fire-and-forget: the core never looks at what the host did with them.
pub trait Host {
    /// Put text on the system clipboard.
    fn copy_to_clipboard(&mut self, text: &str);

    /// Show a message the user has to acknowledge.
    fn alert(&mut self, message: &str);
}

impl<H: Host + ?Sized> Host for &mut H {
    fn copy_to_clipboard(&mut self, text: &str) {
        (**self).copy_to_clipboard(text);
    }

    fn alert(&mut self, message: &str) {
        (**self).alert(message);
    }
}

/// A form state bound to a host.
///
/// `dispatch` is the single entry point for user intents: it reduces the action
/// and forwards the resulting effects to the host in order.
#[derive(Debug)]
pub struct Session<H> {
    state: FormState,
    host: H,
}

impl<H: Host> Session<H> {
    /// Bind a state to a host.
    pub fn new(state: FormState, host: H) -> Self {
        Self { state, host }
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) -> Result<(), Rejection> {
        let step = std::mem::take(&mut self.state).reduce(action);
        self.state = step.state;

        for effect in step.effects {
            match effect {
                Effect::CopyToClipboard(text) => self.host.copy_to_clipboard(&text),
                Effect::Alert(message) => self.host.alert(&message),
            }
        }

        match step.rejection {
            Some(rejection) => Err(rejection),
            None => Ok(()),
        }
    }

    /// The current state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Split into state and host.
    pub fn into_parts(self) -> (FormState, H) {
        (self.state, self.host)
    }
}
