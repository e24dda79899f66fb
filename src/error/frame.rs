use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum FrameError {
    UnknownOpCode,

    NotEnoughData,
}

impl Display for FrameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use FrameError::*;
        match self {
            UnknownOpCode => write!(f, "Unknown opcode value"),
            NotEnoughData => write!(f, "Not enough data to parse"),
        }
    }
}

// use default impl
impl std::error::Error for FrameError {}
