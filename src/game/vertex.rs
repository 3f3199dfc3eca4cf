//! Board coordinates and GTP vertex notation.
//!
//! GTP writes a vertex as a column letter followed by a 1-based row number,
//! e.g. `Q16`. The column alphabet skips the letter `I` (an old convention to
//! avoid confusion with `1`), and row 1 is the bottom edge of the board, so
//! the internal zero-based `y` grows downward: `y = size - row`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game::error::VertexError;

/// Column letters in board order. `I` is deliberately absent.
const COLUMNS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Largest board size expressible in the coordinate alphabet.
pub const MAX_BOARD_SIZE: usize = COLUMNS.len();

/// A point on the board, as zero-based `(x, y)` with the origin in the
/// top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point(usize, usize); // (x, y)

impl Point {
    /// Create a new point, checking both axes against the board size.
    pub fn new(x: usize, y: usize, size: usize) -> Result<Self, VertexError> {
        if x >= size {
            return Err(VertexError::ColumnOutOfBounds { column: x, size });
        }
        if y >= size {
            return Err(VertexError::RowOutOfBounds {
                row: size.saturating_sub(y),
                size,
            });
        }
        Ok(Point(x, y))
    }

    /// Get the column index (0 = column A)
    #[inline]
    #[must_use]
    pub const fn x(self) -> usize {
        self.0
    }

    /// Get the row index (0 = top row, i.e. the highest-numbered GTP row)
    #[inline]
    #[must_use]
    pub const fn y(self) -> usize {
        self.1
    }

    /// Render the point in GTP notation for a board of the given size.
    ///
    /// Total inverse of [`Vertex::parse`] for in-range points:
    /// `Vertex::parse(&p.to_text(size), size)` yields `p` back.
    #[must_use]
    pub fn to_text(self, size: usize) -> String {
        debug_assert!(self.0 < size && self.1 < size && size <= MAX_BOARD_SIZE);
        let column = COLUMNS[self.0] as char;
        let row = size - self.1;
        format!("{column}{row}")
    }
}

/// A move target: either a point on the board or a pass.
///
/// `Pass` has no coordinate form; callers that need text must match on the
/// variant and handle `Pass` separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Vertex {
    Pass,
    Point(Point),
}

impl Vertex {
    /// Parse GTP vertex notation against a board of the given size.
    ///
    /// Accepts `pass` (case-insensitive) or a column letter followed by a
    /// 1-based row number, e.g. `d4`, `Q16`.
    pub fn parse(s: &str, size: usize) -> Result<Self, VertexError> {
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Vertex::Pass);
        }

        let mut chars = s.chars();
        let column = chars.next().ok_or_else(|| VertexError::InvalidNotation {
            notation: s.to_string(),
        })?;
        let row_text = chars.as_str();
        if row_text.is_empty() {
            return Err(VertexError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let column = column.to_ascii_uppercase();
        let x = COLUMNS
            .iter()
            .position(|&c| c as char == column)
            .ok_or(VertexError::InvalidColumn { found: column })?;
        if x >= size {
            return Err(VertexError::ColumnOutOfBounds { column: x, size });
        }

        let row: usize = row_text.parse().map_err(|_| VertexError::InvalidRow {
            found: row_text.to_string(),
        })?;
        if row == 0 || row > size {
            return Err(VertexError::RowOutOfBounds { row, size });
        }

        Ok(Vertex::Point(Point(x, size - row)))
    }
}

impl fmt::Display for Vertex {
    /// Debug-oriented rendering; protocol output goes through
    /// [`Point::to_text`] because it needs the board size.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vertex::Pass => write!(f, "pass"),
            Vertex::Point(p) => write!(f, "({}, {})", p.0, p.1),
        }
    }
}
