use crate::convert::{int_to_bytes, FixedWidthInt};
use crate::Endianness;

/// Renders the bits of `value` as a string of `'0'` and `'1'` characters,
/// most-significant bit first.
///
/// The output length always equals the type's bit width, so `0u8` renders
/// as `"00000000"` and `0u64` as sixty-four zeros. Signed values show
/// their two's-complement bit pattern: `-1i16` is sixteen ones.
///
/// There is no endianness parameter. A bit string is a display rendering
/// of the value's magnitude, not a storage layout.
pub fn int_to_bit_string<I: FixedWidthInt>(value: I) -> String {
    let bytes = int_to_bytes(value, Endianness::BigEndian);
    let mut bits = String::with_capacity(I::BIT_WIDTH);
    for byte in bytes {
        for shift in (0..8).rev() {
            bits.push(if (byte >> shift) & 1 == 1 { '1' } else { '0' });
        }
    }
    bits
}
