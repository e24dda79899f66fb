use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ConnectError {
    // name or address resolution failed
    Resolve(std::io::Error),

    // tcp-level failure
    Tcp(std::io::Error),

    // could not write the upgrade request
    SendRequest(std::io::Error),

    // could not read the upgrade response
    RecvResponse(std::io::Error),

    // server sent nothing before closing
    NoResponse,

    // response lacks the 101 status
    Rejected,
}

impl Display for ConnectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use ConnectError::*;
        match self {
            Resolve(e) => write!(f, "Address resolution failed: {}", e),
            Tcp(e) => write!(f, "Tcp connect failed: {}", e),
            SendRequest(e) => write!(f, "Failed to send handshake request: {}", e),
            RecvResponse(e) => write!(f, "Failed to read handshake response: {}", e),
            NoResponse => write!(f, "Server did not respond to handshake"),
            Rejected => write!(f, "Websocket handshake rejected by server"),
        }
    }
}

impl std::error::Error for ConnectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use ConnectError::*;
        match self {
            Resolve(e) | Tcp(e) | SendRequest(e) | RecvResponse(e) => Some(e),
            NoResponse | Rejected => None,
        }
    }
}
