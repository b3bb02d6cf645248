//! Word-to-byte conversion utilities.
//!
//! Converts between byte slices and `u64` word slices using little-endian
//! byte ordering, the same order the generator uses for its byte stream.

/// Size of one word in bytes.
const WORD_BYTES: usize = 8;

/// Converts a byte slice to a `Vec<u64>` using little-endian byte ordering.
///
/// Each group of 8 bytes becomes one word, with the first byte of the group
/// in the least significant position.
///
/// # Parameters
/// - `input`: Byte slice whose length must be a multiple of 8.
///
/// # Returns
/// `Some` with `input.len() / 8` words, or `None` if the length is not a
/// multiple of 8.
pub fn le_bytes_to_words(input: &[u8]) -> Option<Vec<u64>> {
    if !input.len().is_multiple_of(WORD_BYTES) {
        return None;
    }
    let words = input
        .chunks_exact(WORD_BYTES)
        .map(|chunk| {
            let mut bytes = [0u8; WORD_BYTES];
            bytes.copy_from_slice(chunk);
            u64::from_le_bytes(bytes)
        })
        .collect();
    Some(words)
}

/// Converts a slice of words to a `Vec<u8>` using little-endian byte ordering.
///
/// # Parameters
/// - `input`: Slice of `u64` words.
///
/// # Returns
/// A `Vec<u8>` containing `input.len() * 8` bytes.
pub fn words_to_le_bytes(input: &[u64]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len() * WORD_BYTES);
    for word in input {
        output.extend_from_slice(&word.to_le_bytes());
    }
    output
}
