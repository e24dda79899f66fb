//! Websocket handshake.
//!
//! From [RFC-6455 Section 4.1](https://datatracker.ietf.org/doc/html/rfc6455#section-4.1):
//!
//! Once a connection to the server has been established, the client
//! MUST send an opening handshake to the server, and MUST wait for the
//! server response before sending any further data.
//!
//! Request example:
//!
//! ```text
//! GET /path HTTP/1.1
//! Host: www.example.com
//! Upgrade: websocket
//! Connection: Upgrade
//! Sec-WebSocket-Key: dGhlIHNhbXBsZSBub25jZQ==
//! Sec-WebSocket-Version: 13
//! ```
//!
//! Response validation is deliberately loose: a response is accepted
//! iff the `HTTP/1.1 101` status line occurs anywhere in the received
//! bytes. Headers, including `Sec-WebSocket-Accept`, are not checked.

pub mod key;

pub use key::new_sec_key;

/// CRLF
pub const HTTP_LINE_BREAK: &str = "\r\n";

/// Status line prefix accepted as a successful upgrade.
pub const SWITCHING_PROTOCOLS: &[u8] = b"HTTP/1.1 101";

/// Format the upgrade request, terminated by a blank line.
///
/// The `Host` header carries the host name only; the port is used by
/// the caller for the TCP connect and does not appear on the wire.
pub fn build_request(host: &str, path: &str, sec_key: &str) -> Vec<u8> {
    format!(
        "GET {path} HTTP/1.1{br}\
         Host: {host}{br}\
         Upgrade: websocket{br}\
         Connection: Upgrade{br}\
         Sec-WebSocket-Key: {sec_key}{br}\
         Sec-WebSocket-Version: 13{br}\
         {br}",
        br = HTTP_LINE_BREAK,
    )
    .into_bytes()
}

/// Check the upgrade response, success iff the buffer contains the
/// literal `HTTP/1.1 101` status line prefix.
pub fn validate_response(buf: &[u8]) -> bool {
    buf.windows(SWITCHING_PROTOCOLS.len())
        .any(|w| w == SWITCHING_PROTOCOLS)
}
