//! Websocket client connection.
//!
//! [`Connection`] owns the transport exclusively and sequences the
//! lifecycle: handshake, open, closed. It is generic over the IO source
//! (like the frame codec, it never touches a socket directly), so the
//! protocol logic runs against in-memory streams in tests; `TcpStream`
//! is the transport used by the binary.

mod poll;
mod state;

pub use poll::PollRead;
pub use state::State;

use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use log::debug;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::error::{ConnectError, SendError};
use crate::frame::{self, OpCode};
use crate::handshake;

/// Read buffer size, for the handshake response and incoming frames.
pub const RECV_BUF_SIZE: usize = 4096;

/// Client side of a websocket session.
#[derive(Debug)]
pub struct Connection<IO, R = ThreadRng> {
    io: Option<IO>,
    state: State,
    rng: R,
}

impl Connection<TcpStream> {
    /// Resolve `host:port`, open the TCP stream and perform the
    /// websocket upgrade, using the thread local random source.
    pub fn open(host: &str, port: u16, path: &str) -> Result<Self, ConnectError> {
        Self::open_with(host, port, path, rand::thread_rng())
    }
}

impl<R: Rng> Connection<TcpStream, R> {
    /// Like [`open`](Connection::open), with a caller-provided random
    /// source for the handshake key and the frame mask keys.
    pub fn open_with(host: &str, port: u16, path: &str, rng: R) -> Result<Self, ConnectError> {
        let addr = (host, port)
            .to_socket_addrs()
            .map_err(ConnectError::Resolve)?
            .next()
            .ok_or_else(|| {
                ConnectError::Resolve(io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    "no address found",
                ))
            })?;

        let tcp = TcpStream::connect(addr).map_err(ConnectError::Tcp)?;
        debug!("tcp connected to {}", addr);

        Self::handshake(tcp, host, path, rng)
    }
}

impl<IO: Read + Write, R: Rng> Connection<IO, R> {
    /// Perform the upgrade handshake over an established transport.
    ///
    /// The transport is owned by this call, so every failure path drops
    /// it and nothing half-open survives.
    pub fn handshake(mut io: IO, host: &str, path: &str, mut rng: R) -> Result<Self, ConnectError> {
        // TcpConnected -> HandshakeSent
        let sec_key = handshake::new_sec_key(&mut rng);
        let request = handshake::build_request(host, path, &sec_key);
        io.write_all(&request).map_err(ConnectError::SendRequest)?;
        debug!("handshake request sent ({} bytes)", request.len());

        // HandshakeSent -> Open, one buffer's worth of response
        let mut buf = [0u8; RECV_BUF_SIZE];
        let n = io.read(&mut buf).map_err(ConnectError::RecvResponse)?;
        if n == 0 {
            return Err(ConnectError::NoResponse);
        }
        if !handshake::validate_response(&buf[..n]) {
            return Err(ConnectError::Rejected);
        }
        debug!("websocket upgrade accepted");

        Ok(Self {
            io: Some(io),
            state: State::Open,
            rng,
        })
    }

    /// Wrap an already-upgraded transport.
    #[inline]
    pub fn from_upgraded(io: IO, rng: R) -> Self {
        Self {
            io: Some(io),
            state: State::Open,
            rng,
        }
    }

    /// Send one masked text frame.
    pub fn send_text(&mut self, message: &str) -> Result<(), SendError> {
        self.send_frame(message.as_bytes(), OpCode::Text)
    }

    /// Send one masked binary frame.
    pub fn send_binary(&mut self, data: &[u8]) -> Result<(), SendError> {
        self.send_frame(data, OpCode::Binary)
    }

    fn send_frame(&mut self, payload: &[u8], opcode: OpCode) -> Result<(), SendError> {
        if !self.state.is_open() {
            return Err(SendError::NotOpen);
        }

        let wire = frame::encode_with(payload, opcode, &mut self.rng);
        let io = self.io.as_mut().ok_or(SendError::NotOpen)?;
        io.write_all(&wire)?;
        Ok(())
    }

    /// Read one chunk of up to [`RECV_BUF_SIZE`] bytes and decode it as
    /// a frame.
    ///
    /// Returns `None` when the peer has closed the transport (or the
    /// read failed); the connection moves to [`State::Closed`] and the
    /// transport is released. `Some(payload)` may be empty when the
    /// frame was dropped (non-data opcode) or carried no payload.
    pub fn receive_one(&mut self) -> Option<Vec<u8>> {
        if !self.state.is_open() {
            return None;
        }

        let io = self.io.as_mut()?;
        let mut buf = [0u8; RECV_BUF_SIZE];

        match io.read(&mut buf) {
            Ok(0) => {
                debug!("peer closed the connection");
                self.close();
                None
            }
            Ok(n) => Some(frame::decode(&buf[..n])),
            Err(e) => {
                debug!("transport read failed: {}", e);
                self.close();
                None
            }
        }
    }
}

impl<IO: PollRead, R> Connection<IO, R> {
    /// Bounded readiness probe, never blocks longer than `timeout`.
    ///
    /// A closed connection is never readable. A probe error reports
    /// readable, so the following read surfaces the failure.
    pub fn is_readable(&mut self, timeout: Duration) -> bool {
        let Some(io) = self.io.as_mut() else {
            return false;
        };
        io.poll_read(timeout).unwrap_or(true)
    }
}

impl<IO, R> Connection<IO, R> {
    /// Get the underlying transport, if still owned.
    #[inline]
    pub fn get_ref(&self) -> Option<&IO> { self.io.as_ref() }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> State { self.state }

    /// Whether frames may be sent or received.
    #[inline]
    pub fn is_open(&self) -> bool { self.state.is_open() }

    /// Release the transport. Idempotent.
    pub fn close(&mut self) {
        if self.io.take().is_some() {
            debug!("transport released");
        }
        self.state = State::Closed;
    }
}
