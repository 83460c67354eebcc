use crate::{Endianness, LengthMismatch};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::mem;

mod private {
    pub trait Sealed {}
}

/// An integer type with a statically known width that can be read and
/// written in either byte order.
///
/// Implemented for the signed and unsigned fixed-width integers up to 64
/// bits. The trait is sealed, so this set of implementations is closed.
///
/// The `ByteOrder`-generic methods are the low-level seam; most callers
/// want [`int_to_bytes`] and [`bytes_to_int`], which pick the byte order
/// at runtime from an [`Endianness`] value.
pub trait FixedWidthInt: Copy + private::Sealed {
    /// Width of the serialized form in bytes.
    const BYTE_WIDTH: usize;
    /// Width of the value in bits.
    const BIT_WIDTH: usize;

    /// Writes the value into the first `BYTE_WIDTH` bytes of `buf` in the
    /// byte order selected by `T`.
    ///
    /// Panics if `buf` is shorter than `BYTE_WIDTH`.
    fn write_bytes<T: ByteOrder>(self, buf: &mut [u8]);

    /// Reads a value from the first `BYTE_WIDTH` bytes of `buf` in the
    /// byte order selected by `T`.
    ///
    /// Panics if `buf` is shorter than `BYTE_WIDTH`.
    fn read_bytes<T: ByteOrder>(buf: &[u8]) -> Self;
}

macro_rules! impl_fixed_width_int {
    ($($int:ty => $read:ident, $write:ident;)+) => {$(
        impl private::Sealed for $int {}

        impl FixedWidthInt for $int {
            const BYTE_WIDTH: usize = mem::size_of::<$int>();
            const BIT_WIDTH: usize = mem::size_of::<$int>() * 8;

            #[inline]
            fn write_bytes<T: ByteOrder>(self, buf: &mut [u8]) {
                T::$write(buf, self)
            }

            #[inline]
            fn read_bytes<T: ByteOrder>(buf: &[u8]) -> Self {
                T::$read(buf)
            }
        }
    )+};
}

impl_fixed_width_int! {
    u16 => read_u16, write_u16;
    i16 => read_i16, write_i16;
    u32 => read_u32, write_u32;
    i32 => read_i32, write_i32;
    u64 => read_u64, write_u64;
    i64 => read_i64, write_i64;
}

// `ByteOrder` has no single-byte methods, so the 8-bit types are done by
// hand. Both byte orders coincide at this width.
impl private::Sealed for u8 {}

impl FixedWidthInt for u8 {
    const BYTE_WIDTH: usize = 1;
    const BIT_WIDTH: usize = 8;

    #[inline]
    fn write_bytes<T: ByteOrder>(self, buf: &mut [u8]) {
        buf[0] = self;
    }

    #[inline]
    fn read_bytes<T: ByteOrder>(buf: &[u8]) -> Self {
        buf[0]
    }
}

impl private::Sealed for i8 {}

impl FixedWidthInt for i8 {
    const BYTE_WIDTH: usize = 1;
    const BIT_WIDTH: usize = 8;

    #[inline]
    fn write_bytes<T: ByteOrder>(self, buf: &mut [u8]) {
        buf[0] = self as u8;
    }

    #[inline]
    fn read_bytes<T: ByteOrder>(buf: &[u8]) -> Self {
        buf[0] as i8
    }
}

/// Serializes `value` into a byte sequence of length `I::BYTE_WIDTH` in
/// the requested byte order.
///
/// Index 0 holds the least-significant byte under
/// [`Endianness::LittleEndian`] and the most-significant byte under
/// [`Endianness::BigEndian`]. Signed values serialize their
/// two's-complement representation. Every bit pattern is representable,
/// so this cannot fail.
///
/// ```
/// use endian_bytes::{int_to_bytes, Endianness};
///
/// assert_eq!(int_to_bytes(0x1234u16, Endianness::LittleEndian), [0x34, 0x12]);
/// assert_eq!(int_to_bytes(0x1234u16, Endianness::BigEndian), [0x12, 0x34]);
/// ```
pub fn int_to_bytes<I: FixedWidthInt>(value: I, endian: Endianness) -> Vec<u8> {
    let mut buf = vec![0; I::BYTE_WIDTH];
    match endian {
        Endianness::LittleEndian => value.write_bytes::<LittleEndian>(&mut buf),
        Endianness::BigEndian => value.write_bytes::<BigEndian>(&mut buf),
    }
    buf
}

/// Reconstructs an integer from a byte sequence in the given byte order.
///
/// The inverse of [`int_to_bytes`]. The sequence length must equal the
/// target type's byte width exactly; anything else returns
/// [`LengthMismatch`]. The input is never modified — byte order is
/// handled while reading, not by reversing the caller's buffer.
///
/// For signed targets the accumulated bit pattern is reinterpreted as
/// two's-complement at the target width; no separate sign-extension step
/// is involved.
pub fn bytes_to_int<I: FixedWidthInt>(
    bytes: &[u8],
    endian: Endianness,
) -> Result<I, LengthMismatch> {
    if bytes.len() != I::BYTE_WIDTH {
        return Err(LengthMismatch {
            expected: I::BYTE_WIDTH,
            actual: bytes.len(),
        });
    }
    Ok(match endian {
        Endianness::LittleEndian => I::read_bytes::<LittleEndian>(bytes),
        Endianness::BigEndian => I::read_bytes::<BigEndian>(bytes),
    })
}
