//! Connection lifecycle.

/// Lifecycle of a client connection.
///
/// `Disconnected -> TcpConnected -> HandshakeSent -> Open -> Closed`.
/// The intermediate states exist only while
/// [`handshake`](super::Connection::handshake) runs; a failed handshake
/// drops the transport, so a connection never escapes half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Disconnected,
    TcpConnected,
    HandshakeSent,
    Open,
    Closed,
}

impl State {
    /// Whether frames may be sent or received.
    #[inline]
    pub const fn is_open(self) -> bool { matches!(self, State::Open) }
}
