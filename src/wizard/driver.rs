use crate::cli::Console;
use crate::errors::WizardError;
use crate::wizard::state::{Session, State};
use crate::wizard::transition::advance;

/// Drives one interactive quote session over a console collaborator.
pub struct QuoteWizard<C> {
    console: C,
}

impl<C: Console> QuoteWizard<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    /// Runs the conversation from the greeting to the terminal state.
    ///
    /// Malformed input never leaves this loop; the same prompt is issued
    /// again, without bound. Only a console failure or a closed input
    /// stream ends the session early.
    pub fn run(&mut self) -> Result<(), WizardError> {
        let mut state = State::Welcome;
        let mut session = Session::default();

        while !state.is_end() {
            let input = match state.prompt() {
                Some(prompt) => {
                    self.console.write_line(prompt)?;
                    Some(self.console.read_line()?.ok_or(WizardError::InputClosed)?)
                }
                None => None,
            };

            let from = state.name();
            let step = advance(state, session, input.as_deref());
            for line in &step.lines {
                self.console.write_line(line)?;
            }
            tracing::debug!(from, to = step.next.name(), "wizard transition");

            state = step.next;
            session = step.session;
        }

        Ok(())
    }

    /// Releases the console collaborator, e.g. to inspect a recorded
    /// transcript after a scripted session.
    pub fn into_console(self) -> C {
        self.console
    }
}
