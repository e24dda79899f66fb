//! Console commands.

use crate::error::CommandError;

/// One parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty line, end the session.
    Quit,

    /// Any other plain line, sent verbatim as a text message.
    Text(String),

    /// `file:<filepath>:<url>`
    SendFile { path: String, url: String },
}

impl Command {
    /// Parse one console line.
    ///
    /// For the file command, the first colon splits the keyword from the
    /// path and the second colon splits the path from the url; a line
    /// without the second colon is rejected. Anything after the second
    /// colon belongs to the url, so the url may itself contain colons
    /// while the path may not.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        if line.is_empty() {
            return Ok(Command::Quit);
        }

        if let Some(rest) = line.strip_prefix("file:") {
            let Some((path, url)) = rest.split_once(':') else {
                return Err(CommandError::BadFileSpec);
            };
            return Ok(Command::SendFile {
                path: path.to_owned(),
                url: url.to_owned(),
            });
        }

        Ok(Command::Text(line.to_owned()))
    }
}
