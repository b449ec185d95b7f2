use tracing::debug;

use super::{Applied, Direction, plural};
use crate::editor::{Selection, TextSurface};
use crate::error::EditError;
use crate::search::{self, MARKER};

/// Select the next or previous bold span relative to the selection.
///
/// Forward picks the first span starting at or after the selection's end;
/// backward picks the last span ending strictly before its start. For a caret
/// both ends are the cursor, so a caret resting on a span's opening marker
/// selects that span going forward, while a caret right after its closing
/// marker does not select it going backward. The span is selected with the
/// caret at its start.
pub fn find_bold<S: TextSurface + ?Sized>(
    surface: &mut S,
    direction: Direction,
) -> Result<Applied, EditError> {
    let spans = search::find_spans(&surface.text());
    if spans.is_empty() {
        return Err(EditError::no_match("No bold text in document"));
    }

    let selection = surface.selection();
    let found = match direction {
        Direction::Forward => {
            let after = surface.pos_to_offset(selection.to());
            spans.iter().find(|span| span.start >= after)
        }
        Direction::Backward => {
            let before = surface.pos_to_offset(selection.from());
            spans.iter().rev().find(|span| span.end < before)
        }
    };
    let Some(span) = found else {
        return Err(EditError::no_match(format!("No {direction} bold text")));
    };

    let start = surface.offset_to_pos(span.start);
    let end = surface.offset_to_pos(span.end);
    surface.set_selection(Selection::new(end, start));
    debug!(start = span.start, end = span.end, "bold span selected");
    Ok(Applied::new(format!("Selected {direction} bold text"), 1, start))
}

/// Replace a selected `**body**` with `body`.
///
/// Markers inside the body are kept. The cursor goes back to where it was
/// before the edit.
pub fn strip_selected_bold<S: TextSurface + ?Sized>(surface: &mut S) -> Result<Applied, EditError> {
    let selected = surface.selected_text();
    if selected.is_empty() {
        return Err(EditError::precondition("Select bold text first"));
    }
    let Some(body) = selected
        .strip_prefix(MARKER)
        .and_then(|rest| rest.strip_suffix(MARKER))
        .filter(|body| !body.is_empty())
    else {
        return Err(EditError::precondition("Selection is not bold text"));
    };

    let cursor = surface.cursor();
    surface.replace_selection(body);
    surface.set_cursor(cursor);
    Ok(Applied::new("Removed bold from selection", 1, surface.cursor()))
}

/// Strip the markers of every bold span in the document.
///
/// The selection resets to the start of the document.
pub fn strip_all_bold<S: TextSurface + ?Sized>(surface: &mut S) -> Result<Applied, EditError> {
    let (text, count) = search::strip_spans(&surface.text());
    if count == 0 {
        return Err(EditError::no_match("No bold text in document"));
    }
    surface.set_text(&text);
    debug!(count, "bold spans stripped");
    Ok(Applied::new(
        format!("Removed {}", plural(count, "bold span")),
        count,
        surface.cursor(),
    ))
}
