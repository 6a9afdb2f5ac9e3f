use thiserror::Error;

/// Reasons a path data string can be rejected.
///
/// Positions are byte offsets into the path data string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A number was expected but no digits were found, or the literal does not fit an `f64`.
    #[error("malformed number at byte {position}")]
    MalformedNumber { position: usize },

    /// An arc flag was not exactly `0` or `1`.
    #[error("malformed arc flag at byte {position}, expected '0' or '1'")]
    MalformedFlag { position: usize },

    /// The data ended before a command received all of its arguments.
    #[error("unexpected end of path data at byte {position}")]
    UnexpectedEndOfInput { position: usize },

    /// A character in command position is not a path command letter.
    #[error("unknown path command {letter:?} at byte {position}")]
    UnknownCommand { letter: char, position: usize },
}

impl ParseError {
    pub fn position(&self) -> usize {
	match *self {
	    ParseError::MalformedNumber { position }
	    | ParseError::MalformedFlag { position }
	    | ParseError::UnexpectedEndOfInput { position }
	    | ParseError::UnknownCommand { position, .. } => position,
	}
    }
}
