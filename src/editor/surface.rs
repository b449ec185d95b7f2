use super::{Position, Selection};

/// The editing capabilities a command needs from a host document.
///
/// Anything that can read and replace its text, report and move its
/// selection, and translate between flat char offsets and positions can be
/// edited. Offsets count chars, with one char per line break.
///
/// Conversions saturate: out-of-range lines clamp to the last line, columns
/// clamp to the line length, offsets clamp to the document end.
pub trait TextSurface {
    /// The whole document joined with `\n`.
    fn text(&self) -> String;

    /// Replace the whole document. The selection resets to a caret at (0, 0).
    fn set_text(&mut self, text: &str);

    /// The current selection. The head is the cursor.
    fn selection(&self) -> Selection;

    /// Move the selection. Both ends are clamped to the document.
    fn set_selection(&mut self, selection: Selection);

    /// Replace the text between `from` and `to` (in either order).
    ///
    /// The selection is left where it was, clamped to the new document.
    fn replace_range(&mut self, text: &str, from: Position, to: Position);

    /// Number of lines. Never zero.
    fn line_count(&self) -> usize;

    /// Text of line `idx` without its line break.
    fn line(&self, idx: usize) -> Option<String>;

    fn pos_to_offset(&self, pos: Position) -> usize;

    fn offset_to_pos(&self, offset: usize) -> Position;

    fn cursor(&self) -> Position {
        self.selection().head
    }

    /// Collapse the selection to a caret at `pos`.
    fn set_cursor(&mut self, pos: Position) {
        self.set_selection(Selection::caret(pos));
    }

    /// Length of line `idx` in chars, or 0 past the end.
    fn line_len(&self, idx: usize) -> usize {
        self.line(idx).map_or(0, |line| line.chars().count())
    }

    /// The selected text, empty for a caret.
    fn selected_text(&self) -> String {
        let sel = self.selection();
        let start = self.pos_to_offset(sel.from());
        let end = self.pos_to_offset(sel.to());
        self.text().chars().skip(start).take(end - start).collect()
    }

    /// Replace the selected text, leaving a caret after the insertion.
    fn replace_selection(&mut self, text: &str) {
        let sel = self.selection();
        let start = self.pos_to_offset(sel.from());
        self.replace_range(text, sel.from(), sel.to());
        let caret = self.offset_to_pos(start + text.chars().count());
        self.set_cursor(caret);
    }
}
