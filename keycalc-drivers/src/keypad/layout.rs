//! Key legends and row decoding

use keycalc_core::traits::keypad::KEY_COUNT;

/// Character lookup table: index 0 is "no key", 1-16 follow the key codes
pub type CharLut = [char; KEY_COUNT as usize + 1];

/// Legend printed on the standard 4x4 keypad
pub static DEFAULT_CHAR_LUT: CharLut = [
    '\0', //
    '1', '2', '3', 'A', //
    '4', '5', '6', 'B', //
    '7', '8', '9', 'C', //
    '*', '0', '#', 'D',
];

/// Row index for each possible 4-bit row sample
///
/// Only a single high row identifies a key. No row, or several rows at
/// once, is an ambiguous scan.
pub const ROW_LUT: [Option<u8>; 16] = {
    let mut lut = [None; 16];
    let mut row: usize = 0;
    while row < 4 {
        lut[1 << row] = Some(row as u8);
        row += 1;
    }
    lut
};

/// Decode a row sample (bits 0-3 = rows 0-3)
pub const fn decode_row(sample: u8) -> Option<u8> {
    ROW_LUT[(sample & 0x0F) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_one_hot_samples() {
        assert_eq!(decode_row(0b0001), Some(0));
        assert_eq!(decode_row(0b0010), Some(1));
        assert_eq!(decode_row(0b0100), Some(2));
        assert_eq!(decode_row(0b1000), Some(3));
    }

    #[test]
    fn test_ambiguous_samples() {
        assert_eq!(decode_row(0), None);
        assert_eq!(decode_row(0b0011), None);
        assert_eq!(decode_row(0b0110), None);
        assert_eq!(decode_row(0b1111), None);
    }

    #[test]
    fn test_default_legend() {
        assert_eq!(DEFAULT_CHAR_LUT[0], '\0');
        assert_eq!(DEFAULT_CHAR_LUT[1], '1');
        assert_eq!(DEFAULT_CHAR_LUT[4], 'A');
        assert_eq!(DEFAULT_CHAR_LUT[13], '*');
        assert_eq!(DEFAULT_CHAR_LUT[14], '0');
        assert_eq!(DEFAULT_CHAR_LUT[16], 'D');
    }

    proptest! {
        #[test]
        fn prop_decode_only_single_bits(sample in 0u8..=255) {
            let low = sample & 0x0F;
            match decode_row(sample) {
                Some(row) => prop_assert_eq!(low, 1 << row),
                None => prop_assert!(low.count_ones() != 1),
            }
        }
    }
}
