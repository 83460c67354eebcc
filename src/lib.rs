//! # endian-bytes
//!
//! This crate converts fixed-width integers to and from byte sequences
//! with explicit control over byte order, renders integers as
//! binary-digit strings, and maps byte sequences to and from single-byte
//! ASCII text.
//!
//! All operations are stateless. The only function that mutates its
//! argument is [`reverse_bytes`], the in-place endian-swap primitive;
//! everything else returns a new value. The two fallible operations
//! report their failures as values: [`bytes_to_int`] rejects sequences
//! whose length does not match the target width, and [`ascii_to_bytes`]
//! rejects characters that do not fit in a byte.
//!
//! ## Example
//!
//! ```rust
//! use endian_bytes::{bytes_to_int, int_to_bit_string, int_to_bytes, Endianness};
//!
//! let bytes = int_to_bytes(0x1234u16, Endianness::LittleEndian);
//! assert_eq!(bytes, [0x34, 0x12]);
//!
//! let value: u16 = bytes_to_int(&bytes, Endianness::LittleEndian).unwrap();
//! assert_eq!(value, 0x1234);
//!
//! assert_eq!(int_to_bit_string(value), "0001001000110100");
//! ```
mod ascii;
mod bit_string;
mod convert;
mod endian;
mod error;

pub use ascii::*;
pub use bit_string::*;
pub use convert::*;
pub use endian::*;
pub use error::*;
