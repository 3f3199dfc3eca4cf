//! The GTP response envelope.
//!
//! Success lines start with `=`, failures with `?`; every response ends with
//! a blank line so the controller can find the boundary.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Success(String),
    Failure(String),
}

impl Response {
    /// Empty acknowledgement, used by commands with no payload.
    #[must_use]
    pub fn ok() -> Self {
        Response::Success(String::new())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Success(payload) if payload.is_empty() => write!(f, "=\n\n"),
            Response::Success(payload) => write!(f, "= {payload}\n\n"),
            Response::Failure(message) => write!(f, "? {message}\n\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_payload() {
        let r = Response::Success("Q16".to_string());
        assert_eq!(r.to_string(), "= Q16\n\n");
    }

    #[test]
    fn test_empty_success_still_terminates() {
        assert_eq!(Response::ok().to_string(), "=\n\n");
    }

    #[test]
    fn test_failure_envelope() {
        let r = Response::Failure("unknown command 'x'".to_string());
        assert_eq!(r.to_string(), "? unknown command 'x'\n\n");
    }

    #[test]
    fn test_multiline_payload_keeps_terminator() {
        let r = Response::Success("play\ngenmove".to_string());
        assert_eq!(r.to_string(), "= play\ngenmove\n\n");
    }
}
