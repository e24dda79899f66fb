use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum SendError {
    // connection is not in the open state
    NotOpen,

    // transport write failed
    Io(std::io::Error),
}

impl From<std::io::Error> for SendError {
    fn from(e: std::io::Error) -> Self { SendError::Io(e) }
}

impl Display for SendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use SendError::*;
        match self {
            NotOpen => write!(f, "Connection is not open"),
            Io(e) => write!(f, "Transport write failed: {}", e),
        }
    }
}

impl std::error::Error for SendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SendError::Io(e) => Some(e),
            SendError::NotOpen => None,
        }
    }
}
