//! Fin flag and opcode.

use crate::error::FrameError;

/// Fin flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fin {
    /// a byte with its leading bit set
    Y = 0x80,

    /// a byte with its leading bit clear
    N = 0x00,
}

/// Frame opcode.
///
/// Only [`Text`](OpCode::Text) and [`Binary`](OpCode::Binary) frames
/// carry application data here; the remaining opcodes are recognized
/// so the decoder can drop them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    /// denotes a continuation frame, 0x00
    Continue = 0x00,
    /// denotes a text frame, 0x01
    Text = 0x01,
    /// denotes a binary frame, 0x02
    Binary = 0x02,

    /// denotes a connection close, 0x08
    Close = 0x08,
    /// denotes a ping, 0x09
    Ping = 0x09,
    /// denotes a pong, 0x0a
    Pong = 0x0a,
}

impl Fin {
    /// Read the leading bit. Reserved bits are ignored.
    #[inline]
    pub const fn from_flag(b: u8) -> Self {
        if b & 0x80 != 0 {
            Fin::Y
        } else {
            Fin::N
        }
    }
}

impl OpCode {
    /// Parse from byte.
    #[inline]
    pub const fn from_flag(b: u8) -> Result<Self, FrameError> {
        use OpCode::*;
        let opcode = match b & 0x0f {
            0x00 => Continue,
            0x01 => Text,
            0x02 => Binary,
            0x08 => Close,
            0x09 => Ping,
            0x0a => Pong,
            _ => return Err(FrameError::UnknownOpCode),
        };
        Ok(opcode)
    }

    /// Whether the frame carries application data.
    #[inline]
    pub const fn is_data(self) -> bool { matches!(self, OpCode::Text | OpCode::Binary) }
}
