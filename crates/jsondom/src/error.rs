use std::error::Error;
use std::fmt;
use std::io;

/// A syntax error raised while parsing JSON input.
#[derive(Debug)]
pub struct SyntaxError {
    message: String,
}

impl SyntaxError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error description without the `Syntax Error: ` prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Syntax Error: {}", self.message)
    }
}

impl Error for SyntaxError {}

/// Everything that can go wrong while parsing JSON input.
#[derive(Debug)]
pub enum ParseError {
    /// The input is not well-formed JSON.
    Syntax(SyntaxError),
    /// The underlying reader failed.
    Io(io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax(error) => error.fmt(f),
            ParseError::Io(error) => write!(f, "I/O error while parsing JSON: {error}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Syntax(error) => Some(error),
            ParseError::Io(error) => Some(error),
        }
    }
}

impl From<SyntaxError> for ParseError {
    fn from(error: SyntaxError) -> Self {
        ParseError::Syntax(error)
    }
}

impl From<io::Error> for ParseError {
    fn from(error: io::Error) -> Self {
        ParseError::Io(error)
    }
}
