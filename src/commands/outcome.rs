use std::fmt;

use serde::Serialize;

use super::Command;
use crate::editor::Position;
use crate::error::EditError;

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub message: String,
    pub count: usize,
    pub caret: Position,
}

impl Applied {
    pub fn new(message: impl Into<String>, count: usize, caret: Position) -> Self {
        Self {
            message: message.into(),
            count,
            caret,
        }
    }
}

/// How loudly the host should surface an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Applied,
    NoEditorAvailable,
    NoMatchFound,
    PreconditionFailed,
}

/// Host-facing report of a single command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub command: &'static str,
    pub kind: OutcomeKind,
    pub level: OutcomeLevel,
    pub message: String,
    /// Spans, lines, or dividers affected. Zero when nothing applied.
    pub count: usize,
    /// Caret after the command, only when it applied.
    pub caret: Option<Position>,
}

impl Outcome {
    pub fn from_result(command: Command, result: &Result<Applied, EditError>) -> Self {
        let (kind, level) = match result {
            Ok(_) => (OutcomeKind::Applied, OutcomeLevel::Info),
            Err(EditError::NoMatchFound(_)) => (OutcomeKind::NoMatchFound, OutcomeLevel::Warning),
            Err(EditError::PreconditionFailed(_)) => {
                (OutcomeKind::PreconditionFailed, OutcomeLevel::Error)
            }
            Err(EditError::NoEditorAvailable) => {
                (OutcomeKind::NoEditorAvailable, OutcomeLevel::Error)
            }
        };
        match result {
            Ok(applied) => Self {
                command: command.name(),
                kind,
                level,
                message: applied.message.clone(),
                count: applied.count,
                caret: Some(applied.caret),
            },
            Err(err) => Self {
                command: command.name(),
                kind,
                level,
                message: err.to_string(),
                count: 0,
                caret: None,
            },
        }
    }

    pub fn is_applied(&self) -> bool {
        self.kind == OutcomeKind::Applied
    }

    pub const fn prefix(&self) -> &'static str {
        match self.level {
            OutcomeLevel::Info => "[info]",
            OutcomeLevel::Warning => "[warn]",
            OutcomeLevel::Error => "[error]",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix(), self.message)
    }
}
