use std::fmt::{Display, Formatter};

use super::SendError;

#[derive(Debug)]
pub enum TransferError {
    // file could not be opened or read
    Read(std::io::Error),

    // metadata or content frame could not be sent
    Send(SendError),
}

impl From<SendError> for TransferError {
    fn from(e: SendError) -> Self { TransferError::Send(e) }
}

impl Display for TransferError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use TransferError::*;
        match self {
            Read(e) => write!(f, "Failed to read file: {}", e),
            Send(e) => write!(f, "Failed to send file: {}", e),
        }
    }
}

impl std::error::Error for TransferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use TransferError::*;
        match self {
            Read(e) => Some(e),
            Send(e) => Some(e),
        }
    }
}
