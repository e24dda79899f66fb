#![allow(missing_docs)]
//! Errors

mod command;
mod connect;
mod frame;
mod send;
mod transfer;

pub use command::CommandError;
pub use connect::ConnectError;
pub use frame::FrameError;
pub use send::SendError;
pub use transfer::TransferError;

use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Connect(ConnectError),

    Send(SendError),

    Transfer(TransferError),

    Frame(FrameError),

    Command(CommandError),

    Io(std::io::Error),
}

impl From<ConnectError> for Error {
    fn from(e: ConnectError) -> Self { Error::Connect(e) }
}

impl From<SendError> for Error {
    fn from(e: SendError) -> Self { Error::Send(e) }
}

impl From<TransferError> for Error {
    fn from(e: TransferError) -> Self { Error::Transfer(e) }
}

impl From<FrameError> for Error {
    fn from(e: FrameError) -> Self { Error::Frame(e) }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self { Error::Command(e) }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error { Error::Io(e) }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            Connect(e) => write!(f, "Connect error: {}", e),
            Send(e) => write!(f, "Send error: {}", e),
            Transfer(e) => write!(f, "Transfer error: {}", e),
            Frame(e) => write!(f, "Frame error: {}", e),
            Command(e) => write!(f, "Command error: {}", e),
            Io(e) => write!(f, "Io error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use Error::*;

        match self {
            Connect(e) => e.source(),
            Send(e) => e.source(),
            Transfer(e) => e.source(),
            Frame(e) => e.source(),
            Command(e) => e.source(),
            Io(e) => e.source(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wrap_and_display() {
        let e = Error::from(ConnectError::Rejected);
        assert!(e.to_string().contains("rejected by server"));

        let e = Error::from(SendError::NotOpen);
        assert!(e.to_string().contains("not open"));

        let e = Error::from(FrameError::UnknownOpCode);
        assert!(e.to_string().contains("opcode"));

        let e = Error::from(CommandError::BadFileSpec);
        assert!(e.to_string().contains("file:<filepath>:<url>"));
    }

    #[test]
    fn source_chain() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let e = Error::from(TransferError::Send(SendError::Io(io)));
        // Transfer's source is the wrapped send error's io error
        assert!(e.source().is_some());

        let e = Error::from(ConnectError::NoResponse);
        assert!(e.source().is_none());
    }
}
