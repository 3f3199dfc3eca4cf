//! Stone colors.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game::error::ColorError;

/// The two players. Exactly one color is to move at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other player.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts the GTP spellings `b`, `black`, `w`, `white` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            _ => Err(ColorError::InvalidName {
                found: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long_names() {
        assert_eq!("b".parse::<Color>().unwrap(), Color::Black);
        assert_eq!("black".parse::<Color>().unwrap(), Color::Black);
        assert_eq!("w".parse::<Color>().unwrap(), Color::White);
        assert_eq!("white".parse::<Color>().unwrap(), Color::White);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("B".parse::<Color>().unwrap(), Color::Black);
        assert_eq!("WHITE".parse::<Color>().unwrap(), Color::White);
    }

    #[test]
    fn test_parse_rejects_other_names() {
        let err = "green".parse::<Color>().unwrap_err();
        assert!(err.to_string().contains("green"));
    }

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
    }
}
