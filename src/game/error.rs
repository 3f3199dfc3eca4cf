//! Error types for game-level operations.

use std::fmt;

use crate::game::Color;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Not one of `b`, `black`, `w`, `white`
    InvalidName { found: String },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidName { found } => {
                write!(f, "invalid color '{found}', expected 'b' or 'w'")
            }
        }
    }
}

impl std::error::Error for ColorError {}

/// Error type for vertex parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VertexError {
    /// Notation is empty or structurally malformed
    InvalidNotation { notation: String },
    /// Column letter outside the coordinate alphabet (includes 'I')
    InvalidColumn { found: char },
    /// Row part is not a number
    InvalidRow { found: String },
    /// Column index past the edge of the board
    ColumnOutOfBounds { column: usize, size: usize },
    /// Row number outside 1..=size
    RowOutOfBounds { row: usize, size: usize },
}

impl fmt::Display for VertexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexError::InvalidNotation { notation } => {
                write!(f, "invalid vertex notation '{notation}'")
            }
            VertexError::InvalidColumn { found } => {
                write!(f, "invalid column letter '{found}'")
            }
            VertexError::InvalidRow { found } => {
                write!(f, "invalid row '{found}'")
            }
            VertexError::ColumnOutOfBounds { column, size } => {
                write!(f, "column {column} out of bounds (board size {size})")
            }
            VertexError::RowOutOfBounds { row, size } => {
                write!(f, "row {row} out of bounds (must be 1-{size})")
            }
        }
    }
}

impl std::error::Error for VertexError {}

/// Error type for collaborator (move engine) failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A move was submitted for the color not to move
    OutOfTurn { color: Color, to_move: Color },
    /// The point cannot be played (e.g. already occupied)
    IllegalMove { x: usize, y: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::OutOfTurn { color, to_move } => {
                write!(f, "{color} played but {to_move} is to move")
            }
            EngineError::IllegalMove { x, y } => {
                write!(f, "illegal move at ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for EngineError {}
