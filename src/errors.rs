use thiserror::Error;

/// Error type that captures console collaborator failures.
///
/// Malformed user input is never an error; it is recovered in place by
/// re-prompting the same step.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input stream closed before the session finished")]
    InputClosed,
}
