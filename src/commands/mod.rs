//! Editing commands and their dispatcher.
//!
//! Every command is a synchronous transformation of a [`TextSurface`]:
//! - [`find_bold`]: select the next/previous bold span
//! - [`strip_selected_bold`] / [`strip_all_bold`]: remove `**` markers
//! - [`remove_dividers`]: delete `---` lines
//! - [`delete_line`] / [`delete_selected_lines`]: delete whole lines
//! - [`trim_trailing_whitespace`]: strip trailing spaces and tabs
//!
//! Failures are checked before the first edit, so a command either applies
//! fully or leaves the surface untouched. [`execute`] wraps any command into
//! an [`Outcome`] for the host to display.

mod bold;
mod lines;
mod outcome;

pub use bold::{find_bold, strip_all_bold, strip_selected_bold};
pub use lines::{delete_line, delete_selected_lines, remove_dividers, trim_trailing_whitespace};
pub use outcome::{Applied, Outcome, OutcomeKind, OutcomeLevel};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info};

use crate::editor::TextSurface;
use crate::error::EditError;
use crate::perf;

/// Which way to look for a bold span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Forward => "next",
            Self::Backward => "previous",
        })
    }
}

/// All commands a host can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the next or previous bold span
    FindBold(Direction),
    /// Remove the markers around the selected bold span
    StripSelectedBold,
    /// Remove the markers of every bold span
    StripAllBold,
    /// Delete every `---` divider line
    RemoveDividers,
    /// Delete the line under the cursor
    DeleteLine,
    /// Delete every line touched by a multi-line selection
    DeleteSelectedLines,
    /// Strip trailing spaces and tabs from every line
    TrimTrailingWhitespace,
}

impl Command {
    pub const ALL: [Self; 8] = [
        Self::FindBold(Direction::Forward),
        Self::FindBold(Direction::Backward),
        Self::StripSelectedBold,
        Self::StripAllBold,
        Self::RemoveDividers,
        Self::DeleteLine,
        Self::DeleteSelectedLines,
        Self::TrimTrailingWhitespace,
    ];

    /// Stable kebab-case name used on the command line and in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FindBold(Direction::Forward) => "next-bold",
            Self::FindBold(Direction::Backward) => "prev-bold",
            Self::StripSelectedBold => "strip-bold",
            Self::StripAllBold => "strip-all-bold",
            Self::RemoveDividers => "remove-dividers",
            Self::DeleteLine => "delete-line",
            Self::DeleteSelectedLines => "delete-lines",
            Self::TrimTrailingWhitespace => "trim-trailing",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command `{0}`")]
pub struct ParseCommandError(String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or_else(|| ParseCommandError(s.to_string()))
    }
}

/// Run one command against a surface without building an [`Outcome`].
pub fn apply<S: TextSurface + ?Sized>(
    surface: &mut S,
    command: Command,
) -> Result<Applied, EditError> {
    match command {
        Command::FindBold(direction) => find_bold(surface, direction),
        Command::StripSelectedBold => strip_selected_bold(surface),
        Command::StripAllBold => strip_all_bold(surface),
        Command::RemoveDividers => remove_dividers(surface),
        Command::DeleteLine => delete_line(surface),
        Command::DeleteSelectedLines => delete_selected_lines(surface),
        Command::TrimTrailingWhitespace => trim_trailing_whitespace(surface),
    }
}

/// Run one command and report what happened.
///
/// `None` means the host found no document to edit.
pub fn execute(surface: Option<&mut dyn TextSurface>, command: Command) -> Outcome {
    let timer = perf::Timer::start(command.name());
    let result = surface.map_or(Err(EditError::NoEditorAvailable), |surface| {
        apply(surface, command)
    });
    let outcome = Outcome::from_result(command, &result);
    if outcome.is_applied() {
        info!(%command, count = outcome.count, "command applied");
    } else {
        debug!(%command, kind = ?outcome.kind, message = %outcome.message, "command not applied");
    }
    perf::record(&outcome, timer.stop());
    outcome
}

/// `1 line`, `2 lines`.
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
