// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorBuffer)
    clippy::module_name_repetitions
)]

//! # Tidymark
//!
//! Cleanup commands for markdown text buffers.
//!
//! Tidymark edits a single in-memory document through a small capability
//! trait, so any host that can read and replace text and move a selection
//! can use it:
//! - Jump between `**bold**` spans
//! - Strip bold markers from one span or the whole document
//! - Remove `---` divider lines
//! - Delete the current line or every line of a selection
//! - Trim trailing whitespace
//!
//! ## Architecture
//!
//! - **Surface**: the document, cursor and selection, owned by the host
//! - **Command**: one transformation, applied fully or not at all
//! - **Outcome**: a structured report the host decides how to show
//!
//! ## Modules
//!
//! - [`editor`]: Positions, selections, the surface trait and a rope buffer
//! - [`search`]: Bold span and divider scanning
//! - [`commands`]: The command set and dispatcher
//! - [`error`]: Why a command did not apply
//! - [`config`]: Saved command-line defaults
//! - [`perf`]: Timing and event logging

pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod perf;
pub mod search;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commands::{Command, Direction, Outcome, execute};
    pub use crate::editor::{EditorBuffer, Position, Selection, TextSurface};
    pub use crate::error::EditError;
}
