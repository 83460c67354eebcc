use thiserror::Error;

/// The byte sequence handed to a bytes→integer conversion does not have
/// the target type's exact byte width.
///
/// Too-short input is never zero-padded and too-long input is never
/// truncated; the mismatch is reported instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("byte sequence has length {actual}, expected exactly {expected}")]
pub struct LengthMismatch {
    /// The target integer type's width in bytes.
    pub expected: usize,
    /// The length of the sequence that was supplied.
    pub actual: usize,
}

/// A character with a code point above 255 was encountered while encoding
/// text to bytes. Such characters have no single-byte representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("character {ch:?} at index {index} does not fit in a single byte")]
pub struct EncodingError {
    /// The character that could not be encoded.
    pub ch: char,
    /// Its character index within the input text.
    pub index: usize,
}
