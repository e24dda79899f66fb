//! Transport readiness.

use std::io;
use std::net::TcpStream;
use std::time::Duration;

/// Bounded readiness probe over a blocking transport.
///
/// A readiness check always precedes an actual read attempt, so the
/// message pump never parks on a quiet connection.
pub trait PollRead {
    /// Whether a read would make progress, waiting at most `timeout`.
    fn poll_read(&mut self, timeout: Duration) -> io::Result<bool>;
}

impl PollRead for TcpStream {
    fn poll_read(&mut self, timeout: Duration) -> io::Result<bool> {
        // a zero timeout is rejected by set_read_timeout
        let timeout = timeout.max(Duration::from_millis(1));

        self.set_read_timeout(Some(timeout))?;

        let mut probe = [0u8; 1];
        let ready = match self.peek(&mut probe) {
            // Ok(0) means the peer closed; report readable so the
            // following read observes the close
            Ok(_) => Ok(true),
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) => {
                Ok(false)
            }
            Err(e) => Err(e),
        };

        self.set_read_timeout(None)?;
        ready
    }
}
