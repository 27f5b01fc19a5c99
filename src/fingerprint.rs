// src/fingerprint.rs

/// Derives a short cache-bust token from a byte buffer.
///
/// Hashes the buffer with BLAKE3, takes the leading 32 bits of the digest
/// (the first 8 hex characters, read as an integer), reduces them modulo
/// one million and renders the result as a zero-padded 6-digit decimal
/// string. Identical bytes always yield an identical token; the token is
/// a function of content only, never of path or mtime.
///
/// This is a cache-bust token, not a collision-resistant identifier: a
/// 1-in-a-million collision rate between distinct files is acceptable.
#[must_use]
pub fn fingerprint(bytes: &[u8]) -> String {
    let digest = blake3::hash(bytes);
    let head = digest.as_bytes();
    let value = u32::from_be_bytes([head[0], head[1], head[2], head[3]]) % 1_000_000;
    format!("{value:06}")
}
