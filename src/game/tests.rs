//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::game::{Point, Vertex, MAX_BOARD_SIZE};

/// Strategy for a board size plus a point within it.
fn sized_point_strategy() -> impl Strategy<Value = (usize, usize, usize)> {
    (1..=MAX_BOARD_SIZE).prop_flat_map(|size| (Just(size), 0..size, 0..size))
}

proptest! {
    /// Property: parse is a total inverse of format for in-range points
    #[test]
    fn prop_parse_format_round_trip((size, x, y) in sized_point_strategy()) {
        let point = Point::new(x, y, size).unwrap();
        let text = point.to_text(size);
        prop_assert_eq!(Vertex::parse(&text, size), Ok(Vertex::Point(point)));
    }

    /// Property: formatting is the case-normalized canonical form
    #[test]
    fn prop_format_normalizes_case((size, x, y) in sized_point_strategy()) {
        let point = Point::new(x, y, size).unwrap();
        let canonical = point.to_text(size);
        let lowered = canonical.to_ascii_lowercase();
        match Vertex::parse(&lowered, size) {
            Ok(Vertex::Point(p)) => prop_assert_eq!(p.to_text(size), canonical),
            other => prop_assert!(false, "lowercase form failed to parse: {:?}", other),
        }
    }

    /// Property: no formatted vertex ever uses the letter I
    #[test]
    fn prop_no_i_column((size, x, y) in sized_point_strategy()) {
        let point = Point::new(x, y, size).unwrap();
        prop_assert!(!point.to_text(size).starts_with('I'));
    }

    /// Property: parsing never panics on arbitrary input
    #[test]
    fn prop_parse_total(s in "\\PC{0,8}") {
        let _ = Vertex::parse(&s, 19);
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use crate::game::{Color, Point, Vertex};

    #[test]
    fn test_vertex_serde_round_trip() {
        let vertex = Vertex::Point(Point::new(3, 15, 19).unwrap());
        let json = serde_json::to_string(&vertex).unwrap();
        assert_eq!(serde_json::from_str::<Vertex>(&json).unwrap(), vertex);
    }

    #[test]
    fn test_color_serde_round_trip() {
        let json = serde_json::to_string(&Color::Black).unwrap();
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), Color::Black);
    }
}
