//! Mask flag and key.

use rand::Rng;

/// Payload mask with a 32-bit key.
///
/// Client frames always carry a key; server frames never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    Key([u8; 4]),
    None,
}

impl Mask {
    /// Get the flag byte.
    #[inline]
    pub const fn to_flag(&self) -> u8 {
        match self {
            Mask::Key(_) => 0x80,
            Mask::None => 0x00,
        }
    }
}

/// Generate a new random key.
///
/// The key only obfuscates the payload as the protocol requires, it is
/// not a security measure, so any [`Rng`] will do.
#[inline]
pub fn new_key<R: Rng>(rng: &mut R) -> [u8; 4] { rng.gen() }

/// Mask the buffer, byte by byte.
#[inline]
pub fn apply_mask(key: [u8; 4], buf: &mut [u8]) {
    for (i, b) in buf.iter_mut().enumerate() {
        *b ^= key[i & 0x03];
    }
}
