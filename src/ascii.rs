use crate::{EncodingError, Endianness};

/// Decodes a byte sequence into text, one character per byte.
///
/// Each byte becomes the character with that code point (0–255), so any
/// byte sequence decodes; no printability check is made. Bytes are taken
/// in sequence order when the input is declared big-endian. A
/// little-endian input is read back to front, so the resulting text reads
/// most-significant byte first either way.
///
/// Unlike the integer conversions, the conventional byte order for text
/// is big-endian; pass [`Endianness::BigEndian`] for bytes that are
/// already in reading order.
pub fn bytes_to_ascii(bytes: &[u8], source_endian: Endianness) -> String {
    match source_endian {
        Endianness::BigEndian => bytes.iter().map(|&b| b as char).collect(),
        Endianness::LittleEndian => bytes.iter().rev().map(|&b| b as char).collect(),
    }
}

/// Encodes text into a byte sequence, one byte per character.
///
/// Each character must have a code point of 255 or less; anything wider
/// has no single-byte representation and produces an [`EncodingError`]
/// naming the character and its index. Nothing is silently narrowed.
///
/// With [`Endianness::BigEndian`] the sequence order matches the input
/// character order; requesting little-endian output reverses the
/// sequence, mirroring [`bytes_to_ascii`].
pub fn ascii_to_bytes(text: &str, output_endian: Endianness) -> Result<Vec<u8>, EncodingError> {
    let mut bytes = Vec::with_capacity(text.len());
    for (index, ch) in text.chars().enumerate() {
        let code_point = ch as u32;
        if code_point > u8::MAX as u32 {
            return Err(EncodingError { ch, index });
        }
        bytes.push(code_point as u8);
    }
    if output_endian == Endianness::LittleEndian {
        bytes.reverse();
    }
    Ok(bytes)
}
