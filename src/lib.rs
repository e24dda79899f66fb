//! Minimal websocket client for interactive messaging and file transfer.
//!
//! The client speaks just enough of the websocket protocol to talk to a
//! cooperative server: the HTTP upgrade handshake, and unfragmented
//! text/binary data frames (client frames always masked, `FIN` always
//! set). Control frames, extensions and TLS are out of scope; incoming
//! frames with a non-data opcode are silently dropped.
//!
//! ## High-level API
//!
//! - [`conn`]
//! - [`pump`]
//! - [`transfer`]
//!
//! ```ignore
//! {
//!     // handshake
//!     let mut conn = Connection::open(host, port, path)?;
//!     // drive the session until the user quits or the peer disconnects
//!     pump::run(&mut conn, &lines, |payload| { .. });
//! }
//! ```
//!
//! ## Low-level API
//!
//! - [`frame`]
//! - [`handshake`]
//!
//! ```ignore
//! {
//!     // encode a masked client frame
//!     let wire = frame::encode(b"hello", OpCode::Text);
//!
//!     // decode one server frame
//!     let payload = frame::decode(&wire);
//! }
//! ```

pub mod conn;
pub mod error;
pub mod frame;
pub mod handshake;
pub mod pump;
pub mod transfer;
