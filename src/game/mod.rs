//! Game-side types shared by both directions of protocol traffic.
//!
//! The board itself lives behind the [`MoveEngine`] trait; this module only
//! knows about colors, coordinates, and the errors they can produce.

mod color;
mod engine;
mod error;
mod vertex;

#[cfg(test)]
mod tests;

pub use color::Color;
pub use engine::{MoveEngine, RandomEngine};
pub use error::{ColorError, EngineError, VertexError};
pub use vertex::{Point, Vertex, MAX_BOARD_SIZE};
