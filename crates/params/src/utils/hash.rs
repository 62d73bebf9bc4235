//! Constants for the Keccak family of hash and extendable-output functions

/// Width of the Keccak-f[1600] state in 64-bit lanes
pub const KECCAK_STATE_LANES: usize = 25;

/// Number of rounds of Keccak-f[1600]
pub const KECCAK_ROUNDS: usize = 24;

/// Output size of SHA3-256 in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA3-512 in bytes
pub const SHA3_512_OUTPUT_SIZE: usize = 64;

/// Rate (block size) of SHA3-256 in bytes
pub const SHA3_256_RATE: usize = 136;

/// Rate (block size) of SHA3-512 in bytes
pub const SHA3_512_RATE: usize = 72;

/// Rate of SHAKE128 in bytes
pub const SHAKE128_RATE: usize = 168;

/// Rate of SHAKE256 in bytes
pub const SHAKE256_RATE: usize = 136;

/// Domain separation suffix for the fixed-output SHA-3 functions
pub const SHA3_DELIMITER: u8 = 0x06;

/// Domain separation suffix for the SHAKE extendable-output functions
pub const SHAKE_DELIMITER: u8 = 0x1F;
