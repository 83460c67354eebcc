use endian_bytes::{
    ascii_to_bytes, bytes_to_ascii, bytes_to_int, int_to_bit_string, int_to_bytes, reverse_bytes,
    Endianness, FixedWidthInt,
};
use proptest::collection::vec;
use proptest::prelude::*;

macro_rules! int_properties {
    ($($name:ident: $int:ty;)+) => {$(
        proptest! {
            #[test]
            fn $name(value in any::<$int>()) {
                // Round-trip in both byte orders.
                for endian in [Endianness::LittleEndian, Endianness::BigEndian] {
                    let bytes = int_to_bytes(value, endian);
                    prop_assert_eq!(bytes.len(), <$int>::BYTE_WIDTH);
                    prop_assert_eq!(bytes_to_int::<$int>(&bytes, endian), Ok(value));
                }

                // The two byte orders are mirror images of each other.
                let mut little = int_to_bytes(value, Endianness::LittleEndian);
                reverse_bytes(&mut little);
                prop_assert_eq!(little, int_to_bytes(value, Endianness::BigEndian));

                // Bit strings cover the full type width, MSB first.
                let bits = int_to_bit_string(value);
                prop_assert_eq!(bits.len(), <$int>::BIT_WIDTH);
                prop_assert!(bits.chars().all(|c| c == '0' || c == '1'));
            }
        }
    )+};
}

int_properties! {
    u8_properties: u8;
    i8_properties: i8;
    u16_properties: u16;
    i16_properties: i16;
    u32_properties: u32;
    i32_properties: i32;
    u64_properties: u64;
    i64_properties: i64;
}

proptest! {
    #[test]
    fn reversal_is_an_involution(mut bytes in vec(any::<u8>(), 0..32)) {
        let original = bytes.clone();
        reverse_bytes(&mut bytes);
        if original.len() % 2 == 1 {
            prop_assert_eq!(bytes[original.len() / 2], original[original.len() / 2]);
        }
        reverse_bytes(&mut bytes);
        prop_assert_eq!(bytes, original);
    }

    #[test]
    fn ascii_roundtrips_any_single_byte_text(bytes in vec(any::<u8>(), 0..64)) {
        // Every byte value maps to a char with the same code point, so any
        // byte vector induces an encodable string.
        let text: String = bytes.iter().map(|&b| b as char).collect();

        let encoded = ascii_to_bytes(&text, Endianness::BigEndian).unwrap();
        prop_assert_eq!(&encoded, &bytes);

        // The little-endian form is the reverse of the big-endian form.
        let mut reversed = ascii_to_bytes(&text, Endianness::LittleEndian).unwrap();
        reverse_bytes(&mut reversed);
        prop_assert_eq!(reversed, bytes);

        prop_assert_eq!(bytes_to_ascii(&encoded, Endianness::BigEndian), text);
    }

    #[test]
    fn short_or_long_input_is_rejected(bytes in vec(any::<u8>(), 0..16)) {
        let result = bytes_to_int::<u32>(&bytes, Endianness::LittleEndian);
        if bytes.len() == 4 {
            prop_assert!(result.is_ok());
        } else {
            let err = result.unwrap_err();
            prop_assert_eq!(err.expected, 4);
            prop_assert_eq!(err.actual, bytes.len());
        }
    }
}
