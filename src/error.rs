use std::fmt;

/// Failure to read a move direction from text input.
///
/// The engine itself never fails; only the text surface in front of it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDirectionError {
    Empty,
    Unknown(String),
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDirectionError::Empty => write!(f, "empty direction"),
            ParseDirectionError::Unknown(token) => write!(
                f,
                "unknown direction '{token}' (expected up, down, left, right or u/d/l/r)"
            ),
        }
    }
}

impl std::error::Error for ParseDirectionError {}
