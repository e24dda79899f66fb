use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    // file command without a second colon
    BadFileSpec,
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use CommandError::*;
        match self {
            BadFileSpec => {
                write!(f, "Invalid file command format, use: file:<filepath>:<url>")
            }
        }
    }
}

// use default impl
impl std::error::Error for CommandError {}
