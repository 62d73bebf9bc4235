//! Coefficient packing and unpacking
//!
//! Every width uses the same layout: coefficients are written as a
//! little-endian bit stream, least significant bit first, `bits` bits each.
//! For widths 1, 4, 5, 10, 11 and 12 a group of 8 coefficients occupies
//! exactly `bits` bytes.

/// Number of bytes needed to pack `n` coefficients of `bits` bits each
pub const fn bytes_required(bits: u32, n: usize) -> usize {
    (n * bits as usize).div_ceil(8)
}

/// Pack the low `bits` bits of every coefficient into `out`.
///
/// `out` must be exactly [`bytes_required`] long and `bits` must lie in
/// `1..=16`; higher bits of each coefficient are ignored.
pub fn pack_bits(coeffs: &[u16], bits: u32, out: &mut [u8]) {
    debug_assert!((1..=16).contains(&bits));
    debug_assert_eq!(out.len(), bytes_required(bits, coeffs.len()));

    let mask = (1u32 << bits) - 1;
    let mut acc = 0u32;
    let mut acc_bits = 0u32;
    let mut pos = 0;

    for &c in coeffs {
        acc |= (c as u32 & mask) << acc_bits;
        acc_bits += bits;
        while acc_bits >= 8 {
            out[pos] = acc as u8;
            pos += 1;
            acc >>= 8;
            acc_bits -= 8;
        }
    }
    if acc_bits > 0 {
        out[pos] = acc as u8;
    }
}

/// Inverse of [`pack_bits`]. Values are not range-checked.
pub fn unpack_bits(input: &[u8], bits: u32, coeffs: &mut [u16]) {
    debug_assert!((1..=16).contains(&bits));
    debug_assert_eq!(input.len(), bytes_required(bits, coeffs.len()));

    let mask = (1u32 << bits) - 1;
    let mut acc = 0u32;
    let mut acc_bits = 0u32;
    let mut pos = 0;

    for c in coeffs.iter_mut() {
        while acc_bits < bits {
            acc |= (input[pos] as u32) << acc_bits;
            pos += 1;
            acc_bits += 8;
        }
        *c = (acc & mask) as u16;
        acc >>= bits;
        acc_bits -= bits;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_twelve_bit_layout() {
        let mut out = [0u8; 3];
        pack_bits(&[0xABC, 0x123], 12, &mut out);
        assert_eq!(out, [0xBC, 0x3A, 0x12]);
    }

    #[test]
    fn test_single_bit_is_lsb_first() {
        let mut bits = [0u16; 8];
        bits[0] = 1;
        bits[7] = 1;
        let mut out = [0u8; 1];
        pack_bits(&bits, 1, &mut out);
        assert_eq!(out, [0x81]);
    }

    #[test]
    fn test_ten_bit_layout() {
        // Four 10-bit values fill five bytes
        let mut out = [0u8; 5];
        pack_bits(&[0x3FF, 0x000, 0x3FF, 0x000], 10, &mut out);
        assert_eq!(out, [0xFF, 0x03, 0xF0, 0x3F, 0x00]);

        let mut back = [0u16; 4];
        unpack_bits(&out, 10, &mut back);
        assert_eq!(back, [0x3FF, 0, 0x3FF, 0]);
    }

    #[test]
    fn test_high_bits_are_masked() {
        let mut out = [0u8; 4];
        pack_bits(&[0xFFF0; 8], 4, &mut out);
        assert_eq!(out, [0; 4]);
    }

    #[test]
    fn test_bytes_required() {
        assert_eq!(bytes_required(12, 256), 384);
        assert_eq!(bytes_required(10, 256), 320);
        assert_eq!(bytes_required(4, 256), 128);
        assert_eq!(bytes_required(1, 256), 32);
        assert_eq!(bytes_required(11, 3), 5);
    }

    proptest! {
        #[test]
        fn prop_unpack_inverts_pack(
            bits in prop::sample::select(vec![1u32, 4, 5, 10, 11, 12]),
            raw in prop::collection::vec(any::<u16>(), 256),
        ) {
            let mask = (1u16 << bits) - 1;
            let coeffs: Vec<u16> = raw.iter().map(|c| c & mask).collect();

            let mut packed = vec![0u8; bytes_required(bits, coeffs.len())];
            pack_bits(&coeffs, bits, &mut packed);
            let mut back = vec![0u16; coeffs.len()];
            unpack_bits(&packed, bits, &mut back);

            prop_assert_eq!(back, coeffs);
        }
    }
}
