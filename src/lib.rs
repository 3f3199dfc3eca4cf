pub mod game;
pub mod gtp;

pub use game::{Color, MoveEngine, Point, RandomEngine, Vertex};
pub use gtp::{GtpError, Response, Session};
