//! Interactive message loop.
//!
//! One cooperative loop interleaves three duties: poll the connection
//! for readability (bounded, so outbound input is never starved),
//! dispatch at most one pending console line, then yield briefly. The
//! connection is never shared, so no locking is involved.

mod command;

pub use command::Command;

use std::io::{Read, Write};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use log::{error, info};
use rand::Rng;

use crate::conn::{Connection, PollRead};
use crate::transfer;

/// How long one iteration waits for incoming data.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Pause between iterations, to avoid busy-spinning.
const YIELD_PAUSE: Duration = Duration::from_millis(10);

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Empty input line, or the input source went away.
    UserQuit,

    /// The server closed the connection.
    PeerClosed,
}

/// Drive one interactive session until the user quits or the peer
/// closes the connection.
///
/// Incoming payloads are handed to `on_message`; console lines arrive
/// over `lines`. Send and transfer failures are reported and leave the
/// connection open for further attempts.
pub fn run<IO, R, F>(
    conn: &mut Connection<IO, R>,
    lines: &Receiver<String>,
    mut on_message: F,
) -> SessionEnd
where
    IO: Read + Write + PollRead,
    R: Rng,
    F: FnMut(&[u8]),
{
    loop {
        // incoming data; the readiness probe always precedes the read
        if conn.is_readable(POLL_TIMEOUT) {
            match conn.receive_one() {
                Some(payload) if !payload.is_empty() => on_message(&payload),
                // dropped or empty frame
                Some(_) => {}
                None => {
                    info!("connection closed by server");
                    return SessionEnd::PeerClosed;
                }
            }
        }

        // at most one pending console line per iteration
        match lines.try_recv() {
            Ok(line) => match Command::parse(&line) {
                Ok(Command::Quit) => return SessionEnd::UserQuit,
                Ok(Command::Text(text)) => {
                    if let Err(e) = conn.send_text(&text) {
                        error!("send failed: {}", e);
                    }
                }
                Ok(Command::SendFile { path, url }) => {
                    if let Err(e) = transfer::send_file(conn, &path, &url) {
                        error!("file transfer failed: {}", e);
                    }
                }
                Err(e) => error!("{}", e),
            },
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => return SessionEnd::UserQuit,
        }

        thread::sleep(YIELD_PAUSE);
    }
}
