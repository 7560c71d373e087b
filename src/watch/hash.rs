// src/watch/hash.rs

use blake3::Hasher;

/// Hex blake3 digest of the outline text.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(text.as_bytes());
    hasher.finalize().to_hex().to_string()
}
