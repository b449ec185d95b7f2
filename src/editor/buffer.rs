use ropey::Rope;

use super::{Position, Selection, TextSurface};

/// An in-memory document backed by a rope data structure.
///
/// Lines are separated by `\n` only. The selection is always kept inside
/// the document: every mutation clamps it to the new line lengths.
pub struct EditorBuffer {
    rope: Rope,
    selection: Selection,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: Selection::default(),
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Builder-style caret placement, clamped to the document.
    #[must_use]
    pub fn with_cursor(mut self, pos: Position) -> Self {
        self.set_cursor(pos);
        self
    }

    /// Builder-style selection, clamped to the document.
    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.set_selection(selection);
        self
    }

    /// Whether the text has changed since creation or the last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total length in chars, line breaks included.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx).to_string();
        Some(line.strip_suffix('\n').map(str::to_string).unwrap_or(line))
    }

    /// Length of a line in chars (without trailing newline).
    fn line_chars(&self, line_idx: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(line_idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Pull a position back inside the document.
    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.rope.len_lines() - 1);
        Position::new(line, pos.column.min(self.line_chars(line)))
    }
}

impl TextSurface for EditorBuffer {
    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn set_text(&mut self, text: &str) {
        if self.rope != text {
            self.rope = Rope::from_str(text);
            self.dirty = true;
        }
        self.selection = Selection::default();
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = Selection::new(self.clamp(selection.anchor), self.clamp(selection.head));
    }

    fn replace_range(&mut self, text: &str, from: Position, to: Position) {
        let a = self.pos_to_offset(from);
        let b = self.pos_to_offset(to);
        let (start, end) = (a.min(b), a.max(b));
        if start == end && text.is_empty() {
            return;
        }
        self.rope.remove(start..end);
        self.rope.insert(start, text);
        self.dirty = true;
        self.set_selection(self.selection);
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line(&self, idx: usize) -> Option<String> {
        self.line_at(idx)
    }

    fn line_len(&self, idx: usize) -> usize {
        self.line_chars(idx)
    }

    fn pos_to_offset(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        self.rope.line_to_char(pos.line) + pos.column
    }

    fn offset_to_pos(&self, offset: usize) -> Position {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        Position::new(line, offset - self.rope.line_to_char(line))
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("selection", &self.selection)
            .field("dirty", &self.dirty)
            .finish()
    }
}
