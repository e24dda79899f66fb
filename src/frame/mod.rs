//! Websocket data frame.
//!
//! [RFC-6455 Section5](https://datatracker.ietf.org/doc/html/rfc6455#section-5)
//!
//! ```text
//! 0                   1                   2                   3
//! 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-------+-+-------------+-------------------------------+
//! |F|R|R|R| opcode|M| Payload len |    Extended payload length    |
//! |I|S|S|S|  (4)  |A|     (7)     |             (16/64)           |
//! |N|V|V|V|       |S|             |   (if payload len==126/127)   |
//! | |1|2|3|       |K|             |                               |
//! +-+-+-+-+-------+-+-------------+ - - - - - - - - - - - - - - - +
//! |     Extended payload length continued, if payload len == 127  |
//! + - - - - - - - - - - - - - - - +-------------------------------+
//! |                               |Masking-key, if MASK set to 1  |
//! +-------------------------------+-------------------------------+
//! | Masking-key (continued)       |          Payload Data         |
//! +-------------------------------- - - - - - - - - - - - - - - - +
//! ```
//!
//! The codec covers the subset of the frame format a simple client
//! needs: unfragmented data frames, always masked on the way out. The
//! decoder assumes the provided buffer holds one complete frame; it
//! does not reassemble a frame split across reads.

pub mod flag;
pub mod length;
pub mod mask;

pub use flag::{Fin, OpCode};
pub use length::PayloadLen;
pub use mask::Mask;

use rand::Rng;

use crate::error::FrameError;

/// Websocket frame head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHead {
    pub fin: Fin,
    pub opcode: OpCode,
    pub mask: Mask,
    pub length: PayloadLen,
}

impl FrameHead {
    /// Constructor.
    #[inline]
    pub const fn new(fin: Fin, opcode: OpCode, mask: Mask, length: PayloadLen) -> Self {
        Self {
            fin,
            opcode,
            mask,
            length,
        }
    }

    /// Append the encoded head to `buf`, returns the count of written bytes.
    pub fn encode_into(&self, buf: &mut Vec<u8>) -> usize {
        let start = buf.len();

        // fin, opcode
        let b1 = self.fin as u8 | self.opcode as u8;

        // mask, payload length
        let b2 = self.mask.to_flag() | self.length.to_flag();

        buf.push(b1);
        buf.push(b2);

        // extended payload length
        match &self.length {
            PayloadLen::Standard(_) => {}
            PayloadLen::Extended1(v) => buf.extend_from_slice(&v.to_be_bytes()),
            PayloadLen::Extended2(v) => buf.extend_from_slice(&v.to_be_bytes()),
        };

        // mask key
        if let Mask::Key(k) = &self.mask {
            buf.extend_from_slice(k);
        }

        buf.len() - start
    }

    /// Parse from provided buffer, returns [`FrameHead`] and the count of
    /// read bytes if the parse succeeds.
    /// If there is not enough data to parse, a [`FrameError::NotEnoughData`]
    /// error will be returned.
    pub fn decode(buf: &[u8]) -> Result<(Self, usize), FrameError> {
        if buf.len() < 2 {
            return Err(FrameError::NotEnoughData);
        }

        // fin, opcode
        let b1 = buf[0];

        // mask, payload length
        let b2 = buf[1];

        let fin = Fin::from_flag(b1);
        let opcode = OpCode::from_flag(b1)?;

        let mut n: usize = 2;
        let mut length = PayloadLen::from_flag(b2);

        match length {
            PayloadLen::Standard(_) => {}
            PayloadLen::Extended1(_) => {
                if buf.len() - n < 2 {
                    return Err(FrameError::NotEnoughData);
                }
                length = PayloadLen::from_byte2([buf[2], buf[3]]);
                n += 2;
            }
            PayloadLen::Extended2(_) => {
                if buf.len() - n < 8 {
                    return Err(FrameError::NotEnoughData);
                }
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(&buf[2..10]);
                length = PayloadLen::from_byte8(bytes);
                n += 8;
            }
        };

        let mask = if b2 & 0x80 != 0 {
            if buf.len() - n < 4 {
                return Err(FrameError::NotEnoughData);
            }
            let mut key = [0u8; 4];
            key.copy_from_slice(&buf[n..n + 4]);
            n += 4;
            Mask::Key(key)
        } else {
            Mask::None
        };

        Ok((
            FrameHead {
                fin,
                opcode,
                mask,
                length,
            },
            n,
        ))
    }
}

/// Encode one masked client frame carrying `payload`.
///
/// Same as [`encode_with`], with the mask key drawn from the thread
/// local generator.
#[inline]
pub fn encode(payload: &[u8], opcode: OpCode) -> Vec<u8> {
    encode_with(payload, opcode, &mut rand::thread_rng())
}

/// Encode one masked client frame carrying `payload`, with the mask key
/// drawn from the provided random source.
///
/// `FIN` is always set, and a fresh 4-byte key is used per frame.
pub fn encode_with<R: Rng>(payload: &[u8], opcode: OpCode, rng: &mut R) -> Vec<u8> {
    let key = mask::new_key(rng);
    let head = FrameHead::new(
        Fin::Y,
        opcode,
        Mask::Key(key),
        PayloadLen::from_num(payload.len() as u64),
    );

    let mut buf = Vec::with_capacity(2 + 8 + 4 + payload.len());
    head.encode_into(&mut buf);

    let body = buf.len();
    buf.extend_from_slice(payload);
    mask::apply_mask(key, &mut buf[body..]);

    buf
}

/// Decode one frame from a buffer assumed to hold a complete frame,
/// returns the payload.
///
/// The payload is empty when the input is empty, the head is truncated,
/// or the opcode is not [`Text`](OpCode::Text)/[`Binary`](OpCode::Binary)
/// (control and continuation frames are dropped without notice). The
/// mask bit is honored, so both masked and unmasked frames decode.
///
/// When the buffer holds fewer payload bytes than the head declares,
/// the available bytes are returned as-is; the decoder does not wait
/// for the rest of the frame.
pub fn decode(raw: &[u8]) -> Vec<u8> {
    let (head, offset) = match FrameHead::decode(raw) {
        Ok(parsed) => parsed,
        Err(_) => return Vec::new(),
    };

    if !head.opcode.is_data() {
        return Vec::new();
    }

    let declared = head.length.to_num() as usize;
    let end = raw.len().min(offset.saturating_add(declared));

    let mut payload = raw[offset..end].to_vec();
    if let Mask::Key(key) = head.mask {
        mask::apply_mask(key, &mut payload);
    }
    payload
}
