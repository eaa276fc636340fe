//! Decoding of the VAPID application server key.
//!
//! Keys are distributed as URL-safe base64 without padding. The push manager
//! wants raw bytes, so the key is padded, mapped onto the standard alphabet and
//! decoded. The output must be byte-identical to the browser's `atob`, which
//! ignores non-zero bits left over after the last full byte. The stock
//! `STANDARD` engine rejects those, so a lenient engine is used instead.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::ClientError;

const KEY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Convert a URL-safe base64 string into raw key bytes.
pub fn decode_server_key(key: &str) -> Result<Vec<u8>, ClientError> {
    let padding = (4 - key.len() % 4) % 4;
    let mut standard = String::with_capacity(key.len() + padding);
    for c in key.chars() {
        standard.push(match c {
            '-' => '+',
            '_' => '/',
            c => c,
        });
    }
    standard.extend(std::iter::repeat('=').take(padding));

    Ok(KEY_ENGINE.decode(standard)?)
}
