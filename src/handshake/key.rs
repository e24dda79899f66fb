//! Key generation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::Rng;

/// Generate a new `Sec-WebSocket-Key`: 16 random bytes, base64-encoded.
///
/// The peer's `Sec-WebSocket-Accept` is never verified, so the key only
/// has to look valid; any [`Rng`] is acceptable.
#[inline]
pub fn new_sec_key<R: Rng>(rng: &mut R) -> String {
    let nonce: [u8; 16] = rng.gen();
    STANDARD.encode(nonce)
}
