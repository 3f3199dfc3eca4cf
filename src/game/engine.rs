//! The collaborator seam: move selection lives behind [`MoveEngine`].
//!
//! The protocol layer forwards validated moves through this trait and trusts
//! the returned color for turn tracking. The collaborator, not the session,
//! is the authority on game progression; it may pass, resign, or detect
//! terminal positions without the session knowing the rules involved.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::error::EngineError;
use crate::game::{Color, Point, Vertex};

/// External move-selection engine driven by the GTP session.
pub trait MoveEngine {
    /// Identity string reported by the `name` command.
    fn name(&self) -> String;

    /// The board size the engine was built for. Fixed for its lifetime.
    fn board_size(&self) -> usize;

    /// Reset to the initial position, returning the color that moves first.
    fn clear(&mut self) -> Color;

    /// Apply an opponent/human move for `color`.
    ///
    /// Returns the color to move next. Must not mutate any state when
    /// returning an error.
    fn play(&mut self, color: Color, vertex: Vertex) -> Result<Color, EngineError>;

    /// Select and apply a move for `color`.
    ///
    /// Returns the chosen vertex together with the color to move next.
    fn genmove(&mut self, color: Color) -> Result<(Vertex, Color), EngineError>;
}

/// Baseline engine that plays a uniformly random empty point.
///
/// Tracks occupancy only; captures, ko, and scoring are someone else's
/// problem. Useful as a protocol test double and as the default engine for
/// the binary.
pub struct RandomEngine {
    size: usize,
    grid: Vec<Option<Color>>,
    to_move: Color,
    rng: StdRng,
}

impl RandomEngine {
    /// Create an engine for an `size` x `size` board with an entropy seed.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_seed(size, rand::random())
    }

    /// Create an engine with a fixed seed, for deterministic tests.
    #[must_use]
    pub fn with_seed(size: usize, seed: u64) -> Self {
        RandomEngine {
            size,
            grid: vec![None; size * size],
            to_move: Color::Black,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn index(&self, point: Point) -> usize {
        point.y() * self.size + point.x()
    }

    fn check_turn(&self, color: Color) -> Result<(), EngineError> {
        if color != self.to_move {
            return Err(EngineError::OutOfTurn {
                color,
                to_move: self.to_move,
            });
        }
        Ok(())
    }
}

impl MoveEngine for RandomEngine {
    fn name(&self) -> String {
        format!("random ({0}x{0})", self.size)
    }

    fn board_size(&self) -> usize {
        self.size
    }

    fn clear(&mut self) -> Color {
        self.grid.fill(None);
        self.to_move = Color::Black;
        self.to_move
    }

    fn play(&mut self, color: Color, vertex: Vertex) -> Result<Color, EngineError> {
        self.check_turn(color)?;
        if let Vertex::Point(point) = vertex {
            let idx = self.index(point);
            if self.grid[idx].is_some() {
                return Err(EngineError::IllegalMove {
                    x: point.x(),
                    y: point.y(),
                });
            }
            self.grid[idx] = Some(color);
        }
        self.to_move = color.opponent();
        Ok(self.to_move)
    }

    fn genmove(&mut self, color: Color) -> Result<(Vertex, Color), EngineError> {
        self.check_turn(color)?;

        let empty: Vec<usize> = (0..self.grid.len())
            .filter(|&i| self.grid[i].is_none())
            .collect();

        let vertex = if empty.is_empty() {
            Vertex::Pass
        } else {
            let idx = empty[self.rng.gen_range(0..empty.len())];
            self.grid[idx] = Some(color);
            // Index math is the inverse of `index`, so the point is in range.
            Vertex::Point(
                Point::new(idx % self.size, idx / self.size, self.size)
                    .map_err(|_| EngineError::IllegalMove {
                        x: idx % self.size,
                        y: idx / self.size,
                    })?,
            )
        };

        self.to_move = color.opponent();
        Ok((vertex, self.to_move))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_moves_first() {
        let mut engine = RandomEngine::with_seed(9, 7);
        assert_eq!(engine.clear(), Color::Black);
    }

    #[test]
    fn test_play_alternates_colors() {
        let mut engine = RandomEngine::with_seed(9, 7);
        let next = engine
            .play(Color::Black, Vertex::parse("D4", 9).unwrap())
            .unwrap();
        assert_eq!(next, Color::White);
    }

    #[test]
    fn test_play_out_of_turn_is_rejected() {
        let mut engine = RandomEngine::with_seed(9, 7);
        let err = engine
            .play(Color::White, Vertex::parse("D4", 9).unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::OutOfTurn {
                color: Color::White,
                to_move: Color::Black,
            }
        );
    }

    #[test]
    fn test_occupied_point_is_rejected() {
        let mut engine = RandomEngine::with_seed(9, 7);
        let d4 = Vertex::parse("D4", 9).unwrap();
        engine.play(Color::Black, d4).unwrap();
        let err = engine.play(Color::White, d4).unwrap_err();
        assert!(matches!(err, EngineError::IllegalMove { .. }));
    }

    #[test]
    fn test_pass_still_alternates() {
        let mut engine = RandomEngine::with_seed(9, 7);
        assert_eq!(engine.play(Color::Black, Vertex::Pass).unwrap(), Color::White);
        assert_eq!(engine.play(Color::White, Vertex::Pass).unwrap(), Color::Black);
    }

    #[test]
    fn test_genmove_plays_an_empty_point() {
        let mut engine = RandomEngine::with_seed(9, 7);
        let (vertex, next) = engine.genmove(Color::Black).unwrap();
        assert_eq!(next, Color::White);
        match vertex {
            Vertex::Point(p) => {
                assert!(p.x() < 9 && p.y() < 9);
            }
            Vertex::Pass => panic!("engine passed on an empty board"),
        }
    }

    #[test]
    fn test_genmove_passes_on_full_board() {
        let mut engine = RandomEngine::with_seed(1, 7);
        let (vertex, _) = engine.genmove(Color::Black).unwrap();
        assert!(matches!(vertex, Vertex::Point(_)));
        let (vertex, _) = engine.genmove(Color::White).unwrap();
        assert_eq!(vertex, Vertex::Pass);
    }

    #[test]
    fn test_clear_resets_occupancy() {
        let mut engine = RandomEngine::with_seed(1, 7);
        engine.genmove(Color::Black).unwrap();
        engine.clear();
        let (vertex, _) = engine.genmove(Color::Black).unwrap();
        assert!(matches!(vertex, Vertex::Point(_)));
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut a = RandomEngine::with_seed(9, 42);
        let mut b = RandomEngine::with_seed(9, 42);
        assert_eq!(a.genmove(Color::Black).unwrap(), b.genmove(Color::Black).unwrap());
    }
}
