//! Endianness utility functions
//!
//! Callers pass slices of at least the loaded width; shorter input panics.

/// Read a little-endian u32 from the first four bytes of `bytes`
#[inline(always)]
pub fn u32_from_le_bytes(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a little-endian 24-bit value from the first three bytes of `bytes`
#[inline(always)]
pub fn u24_from_le_bytes(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0])
}
