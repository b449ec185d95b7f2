use tracing::debug;

use super::{Applied, plural};
use crate::editor::{Position, TextSurface};
use crate::error::EditError;
use crate::search;

/// How a block of whole lines leaves the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Removal {
    /// The block is the whole document: clear it to one empty line.
    Everything,
    /// The block ends on the last line: also take the break before it.
    Tail { start: usize, end: usize },
    /// The block has a line after it: take the break after it.
    Block { start: usize, end: usize },
}

impl Removal {
    const fn plan(start: usize, end: usize, total: usize) -> Self {
        if end + 1 < total {
            Self::Block { start, end }
        } else if start == 0 {
            Self::Everything
        } else {
            Self::Tail { start, end }
        }
    }
}

/// Remove lines `start..=end` and return the caret position afterwards.
fn remove_lines<S: TextSurface + ?Sized>(surface: &mut S, start: usize, end: usize) -> Position {
    let total = surface.line_count();
    let removal = Removal::plan(start, end, total);
    debug!(?removal, total, "removing lines");
    match removal {
        Removal::Everything => {
            let last = total - 1;
            let last_len = surface.line_len(last);
            surface.replace_range("", Position::new(0, 0), Position::new(last, last_len));
            Position::new(0, 0)
        }
        Removal::Tail { start, end } => {
            let prev = start - 1;
            let prev_end = Position::new(prev, surface.line_len(prev));
            let end_len = surface.line_len(end);
            surface.replace_range("", prev_end, Position::new(end, end_len));
            prev_end
        }
        Removal::Block { start, end } => {
            surface.replace_range("", Position::new(start, 0), Position::new(end + 1, 0));
            Position::new(start, 0)
        }
    }
}

/// Delete the line holding the cursor.
///
/// A single-line document is cleared rather than removed, so at least one
/// line always remains.
pub fn delete_line<S: TextSurface + ?Sized>(surface: &mut S) -> Result<Applied, EditError> {
    let line = surface.cursor().line.min(surface.line_count() - 1);
    let caret = remove_lines(surface, line, line);
    surface.set_cursor(caret);
    Ok(Applied::new("Deleted line", 1, caret))
}

/// Delete every line touched by a multi-line selection.
pub fn delete_selected_lines<S: TextSurface + ?Sized>(
    surface: &mut S,
) -> Result<Applied, EditError> {
    let selection = surface.selection();
    if !selection.is_multiline() {
        return Err(EditError::precondition("Selection must span multiple lines"));
    }
    let start = selection.from().line;
    let end = selection.to().line;
    let caret = remove_lines(surface, start, end);
    surface.set_cursor(caret);
    let count = end - start + 1;
    Ok(Applied::new(
        format!("Deleted {}", plural(count, "line")),
        count,
        caret,
    ))
}

/// Delete every `---` divider line.
///
/// The caret stays on its line, shifted up past removed lines. If its own
/// line was a divider it moves to the start of the line that took its place.
pub fn remove_dividers<S: TextSurface + ?Sized>(surface: &mut S) -> Result<Applied, EditError> {
    let lines = lines_of(surface);
    let dividers = search::find_dividers(lines.iter().map(String::as_str));
    if dividers.is_empty() {
        return Err(EditError::no_match("No divider lines found"));
    }

    let cursor = surface.cursor();
    let removed_above = dividers.iter().filter(|&&idx| idx < cursor.line).count();
    let column = if dividers.binary_search(&cursor.line).is_ok() {
        0
    } else {
        cursor.column
    };

    let kept: Vec<&str> = lines
        .iter()
        .enumerate()
        .filter(|(idx, _)| dividers.binary_search(idx).is_err())
        .map(|(_, line)| line.as_str())
        .collect();
    surface.set_text(&kept.join("\n"));
    surface.set_cursor(Position::new(cursor.line - removed_above, column));

    let count = dividers.len();
    debug!(count, "divider lines removed");
    Ok(Applied::new(
        format!("Removed {}", plural(count, "divider line")),
        count,
        surface.cursor(),
    ))
}

/// Strip trailing spaces and tabs from every line.
///
/// Leading whitespace and other whitespace characters are left alone. A
/// `\r` before the line break is line content, so blanks ahead of it stay.
/// The selection is kept, clamped to the shortened lines.
pub fn trim_trailing_whitespace<S: TextSurface + ?Sized>(
    surface: &mut S,
) -> Result<Applied, EditError> {
    let selection = surface.selection();
    let mut changed = 0;
    for (idx, line) in lines_of(surface).iter().enumerate() {
        let trimmed = line.trim_end_matches([' ', '\t']);
        if trimmed.len() == line.len() {
            continue;
        }
        let keep = trimmed.chars().count();
        let len = line.chars().count();
        surface.replace_range("", Position::new(idx, keep), Position::new(idx, len));
        changed += 1;
    }
    if changed == 0 {
        return Err(EditError::no_match("No trailing whitespace found"));
    }
    surface.set_selection(selection);
    Ok(Applied::new(
        format!("Trimmed trailing whitespace on {}", plural(changed, "line")),
        changed,
        surface.cursor(),
    ))
}

fn lines_of<S: TextSurface + ?Sized>(surface: &S) -> Vec<String> {
    (0..surface.line_count())
        .filter_map(|idx| surface.line(idx))
        .collect()
}
