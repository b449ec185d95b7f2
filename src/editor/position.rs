use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A (line, column) address into a document.
///
/// Both fields are zero-based. The column counts chars, not bytes. Field
/// order makes the derived ordering lexicographic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Error returned when a `line:col` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid position `{0}`, expected LINE:COL")]
pub struct ParsePositionError(String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let (line, column) = s.trim().split_once(':').ok_or_else(err)?;
        Ok(Self {
            line: line.trim().parse().map_err(|_| err())?,
            column: column.trim().parse().map_err(|_| err())?,
        })
    }
}

/// An anchored range of text. The head is where the cursor sits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub anchor: Position,
    pub head: Position,
}

impl Selection {
    pub const fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// A zero-width selection at `pos`.
    pub const fn caret(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.anchor == self.head
    }

    /// The smaller end of the selection.
    pub fn from(&self) -> Position {
        self.anchor.min(self.head)
    }

    /// The larger end of the selection.
    pub fn to(&self) -> Position {
        self.anchor.max(self.head)
    }

    /// Whether the selection touches more than one line.
    pub fn is_multiline(&self) -> bool {
        self.anchor.line != self.head.line
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.anchor, self.head)
    }
}

impl FromStr for Selection {
    type Err = ParsePositionError;

    /// Parses `L:C..L:C`, or a single `L:C` as a caret.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once("..") {
            Some((anchor, head)) => Ok(Self::new(anchor.parse()?, head.parse()?)),
            None => s.parse().map(Self::caret),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_order_by_line_then_column() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
    }

    #[test]
    fn test_selection_from_to_ignore_direction() {
        let sel = Selection::new(Position::new(3, 2), Position::new(1, 4));
        assert_eq!(sel.from(), Position::new(1, 4));
        assert_eq!(sel.to(), Position::new(3, 2));
        assert!(sel.is_multiline());
        assert!(!sel.is_caret());
    }

    #[test]
    fn test_caret_is_zero_width() {
        let sel = Selection::caret(Position::new(1, 1));
        assert!(sel.is_caret());
        assert!(!sel.is_multiline());
    }

    #[test]
    fn test_parse_position() {
        assert_eq!("3:14".parse(), Ok(Position::new(3, 14)));
        assert_eq!(" 0 : 0 ".parse(), Ok(Position::new(0, 0)));
        assert!("3".parse::<Position>().is_err());
        assert!("a:b".parse::<Position>().is_err());
    }

    #[test]
    fn test_parse_selection_range_and_caret() {
        assert_eq!(
            "0:1..2:3".parse(),
            Ok(Selection::new(Position::new(0, 1), Position::new(2, 3)))
        );
        assert_eq!("4:0".parse(), Ok(Selection::caret(Position::new(4, 0))));
        assert!("0:1..x".parse::<Selection>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let sel = Selection::new(Position::new(5, 0), Position::new(1, 7));
        assert_eq!(sel.to_string().parse(), Ok(sel));
    }
}
