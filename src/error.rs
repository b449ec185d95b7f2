//! Failure taxonomy for editing commands.
//!
//! None of these are fatal. Every command checks for them before touching the
//! document, so a failed command leaves text and selection unchanged.

/// Why a command did not apply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// The host had no document to edit.
    #[error("Open a markdown document to edit first")]
    NoEditorAvailable,
    /// Nothing in the document qualified.
    #[error("{0}")]
    NoMatchFound(String),
    /// The selection has the wrong shape for the command.
    #[error("{0}")]
    PreconditionFailed(String),
}

impl EditError {
    pub fn no_match(message: impl Into<String>) -> Self {
        Self::NoMatchFound(message.into())
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionFailed(message.into())
    }
}
