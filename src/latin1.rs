//! Encoding helpers for the Latin-1 (ISO-8859-1) byte alphabet the trie and
//! side tables use for surface forms and lemmas. Latin-1 code points are, by
//! construction, the first 256 Unicode scalar values, so encoding is a
//! direct narrowing and decoding a direct widening — no lookup table needed,
//! unlike a codepage that reorders its letters.

/// Encode a Rust string to the byte alphabet the trie and tables use.
///
/// Returns `None` if the string contains a character outside Latin-1:
/// callers treat that as "not found", never as an error, since such a query
/// can never match anything stored in the dictionary.
#[must_use]
pub fn encode(word: &str) -> Option<Vec<u8>> {
    word.chars().map(encode_char).collect()
}

#[must_use]
pub fn encode_char(c: char) -> Option<u8> {
    u8::try_from(c as u32).ok()
}

/// Decode a byte slice produced by [`encode`] back into a `String`.
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| decode_byte(b)).collect()
}

#[must_use]
pub fn decode_byte(b: u8) -> char {
    b as char
}
