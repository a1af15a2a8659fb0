//! Digest fallback for oversized key values

use crate::constants::CACHE_KEY_DIGEST_LENGTH;
use base64::{Engine as _, engine::general_purpose};
use sha2::{Digest, Sha256};

/// SHA-256 of `value`, standard base64 with padding
pub fn digest(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    general_purpose::STANDARD.encode(hasher.finalize())
}

/// Bound `value` to `max` characters
///
/// Oversized values keep their first `max - H` characters and end with the
/// digest of the whole value, so values sharing a long prefix still differ.
/// When `max` leaves no room for a prefix the digest stands alone.
pub fn bound_length(value: String, max: usize) -> String {
    if value.chars().count() <= max {
        return value;
    }

    let hash = digest(&value);
    let prefix_len = max.saturating_sub(CACHE_KEY_DIGEST_LENGTH);
    if prefix_len == 0 {
        return hash;
    }

    let mut bounded: String = value.chars().take(prefix_len).collect();
    bounded.push_str(&hash);
    bounded
}
