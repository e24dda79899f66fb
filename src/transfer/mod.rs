//! File transfer convention.
//!
//! A file is announced with one text frame carrying a metadata record,
//! immediately followed by one binary frame carrying the raw bytes.
//! There is no correlation id; the receiver pairs the two frames by
//! arrival order, and an announcement whose binary frame failed to send
//! is left orphaned on the server side.

use std::fs;
use std::io::{Read, Write};

use log::info;
use rand::Rng;

use crate::conn::Connection;
use crate::error::TransferError;

/// Send the file at `path` over the connection, announcing it under
/// `url`.
///
/// The whole file is read into memory first; a file that cannot be read
/// fails the transfer before anything is sent. The metadata frame is
/// not rolled back if the binary send fails.
pub fn send_file<IO, R>(
    conn: &mut Connection<IO, R>,
    path: &str,
    url: &str,
) -> Result<(), TransferError>
where
    IO: Read + Write,
    R: Rng,
{
    let data = fs::read(path).map_err(TransferError::Read)?;
    let name = file_name_of(path);

    conn.send_text(&metadata(url, name, data.len()))?;
    conn.send_binary(&data)?;

    info!("sent file: {} ({} bytes) as {}", name, data.len(), url);
    Ok(())
}

/// Metadata announcement for one file transfer.
///
/// Built by plain formatting, not a JSON encoder; characters that would
/// need escaping pass through untouched.
pub fn metadata(url: &str, file_name: &str, size: usize) -> String {
    format!(
        r#"{{"type":"file","url":"{}","fileName":"{}","fileSize":{}}}"#,
        url, file_name, size
    )
}

/// Last path component, accepting both separator styles.
pub fn file_name_of(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
